use super::*;

fn filled(name: &str, email: &str, message: &str) -> ContactFormState {
    let mut state = ContactFormState::default();
    state.set_field(FormField::Name, name.to_owned());
    state.set_field(FormField::Email, email.to_owned());
    state.set_field(FormField::Message, message.to_owned());
    state
}

fn ana() -> ContactFormState {
    filled("Ana", "ana@x.com", "Quero um horário")
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn form_starts_idle_and_empty() {
    let state = ContactFormState::default();
    assert_eq!(state.phase, FormPhase::Idle);
    assert_eq!(state.name, "");
    assert_eq!(state.email, "");
    assert_eq!(state.message, "");
    assert!(state.notice.is_none());
    assert!(!state.is_submit_disabled());
    assert_eq!(state.submit_label(), "Enviar mensagem");
}

#[test]
fn set_field_writes_the_matching_field() {
    let state = ana();
    assert_eq!(state.field(FormField::Name), "Ana");
    assert_eq!(state.field(FormField::Email), "ana@x.com");
    assert_eq!(state.field(FormField::Message), "Quero um horário");
}

// =============================================================
// Full cycle
// =============================================================

#[test]
fn ana_submission_cycles_back_to_idle_with_one_confirmation() {
    let mut state = ana();

    let submission = state.begin_submit().unwrap();
    assert_eq!(state.phase, FormPhase::Submitting);
    assert!(state.is_submit_disabled());
    assert_eq!(state.submit_label(), "Enviando...");
    assert!(state.notice.is_none());
    assert_eq!(submission.name, "Ana");
    assert_eq!(submission.email, "ana@x.com");
    assert_eq!(submission.message, "Quero um horário");

    assert!(state.finish_submit(&submission, Ok(())));
    assert_eq!(state.phase, FormPhase::Idle);
    assert!(!state.is_submit_disabled());
    assert_eq!(state.name, "");
    assert_eq!(state.email, "");
    assert_eq!(state.message, "");
    let notice = state.notice.clone().unwrap();
    assert_eq!(notice, FormNotice::Sent { name: "Ana".to_owned() });
    assert!(notice.message().contains("Ana"));
    assert!(!notice.is_error());

    // A stray second completion must not confirm again.
    assert!(!state.finish_submit(&submission, Ok(())));
    assert_eq!(state.notice, Some(notice));
}

#[test]
fn submit_stays_disabled_until_completion() {
    let mut state = ana();
    let submission = state.begin_submit().unwrap();
    state.set_field(FormField::Message, "mudei de ideia".to_owned());
    assert!(state.is_submit_disabled());
    assert_eq!(state.begin_submit(), Err(ContactFormError::AlreadySubmitting));
    assert!(state.is_submit_disabled());
    state.finish_submit(&submission, Ok(()));
    assert!(!state.is_submit_disabled());
}

#[test]
fn begin_submit_is_not_reentrant() {
    let mut state = ana();
    let _first = state.begin_submit().unwrap();
    assert_eq!(state.begin_submit(), Err(ContactFormError::AlreadySubmitting));
    assert_eq!(state.phase, FormPhase::Submitting);
}

#[test]
fn begin_submit_trims_values() {
    let mut state = filled("  Ana ", " ana@x.com ", "\nOi\n");
    let submission = state.begin_submit().unwrap();
    assert_eq!(submission.name, "Ana");
    assert_eq!(submission.email, "ana@x.com");
    assert_eq!(submission.message, "Oi");
}

#[test]
fn begin_submit_clears_previous_notice() {
    let mut state = ana();
    state.notice = Some(FormNotice::Failed { reason: "x".to_owned() });
    state.begin_submit().unwrap();
    assert!(state.notice.is_none());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn every_field_is_required() {
    let cases = [
        (filled("", "ana@x.com", "Oi"), FormField::Name),
        (filled("Ana", "   ", "Oi"), FormField::Email),
        (filled("Ana", "ana@x.com", ""), FormField::Message),
    ];
    for (mut state, field) in cases {
        assert_eq!(state.begin_submit(), Err(ContactFormError::MissingField(field)));
        assert_eq!(state.phase, FormPhase::Idle);
    }
}

#[test]
fn malformed_email_is_rejected() {
    for email in ["ana", "ana@", "@x.com", "a@b@c", "ana @x.com"] {
        let mut state = filled("Ana", email, "Oi");
        assert_eq!(state.begin_submit(), Err(ContactFormError::InvalidEmail), "{email:?}");
        assert_eq!(state.phase, FormPhase::Idle);
    }
}

#[test]
fn email_check_follows_browser_grammar() {
    for email in ["a@.com", "a@b..c", "<a>@x", "a@-x.com", "a@x-.com", "a@x.", "ana(x)@x.com"] {
        assert!(!looks_like_email(email), "{email:?} should be rejected");
    }
    for email in ["ana@x", "ana@x.com", "a.b+c@sub.x-y.com.br", "o'neil@x.io"] {
        assert!(looks_like_email(email), "{email:?} should be accepted");
    }
}

#[test]
fn email_domain_labels_are_capped_at_63_chars() {
    let ok = format!("a@{}.com", "x".repeat(63));
    let too_long = format!("a@{}.com", "x".repeat(64));
    assert!(looks_like_email(&ok));
    assert!(!looks_like_email(&too_long));
}

#[test]
fn validation_errors_name_the_field() {
    assert_eq!(
        ContactFormError::MissingField(FormField::Message).to_string(),
        "preencha o campo Mensagem"
    );
}

// =============================================================
// Failure path
// =============================================================

#[test]
fn failed_delivery_keeps_input_and_reports_reason() {
    let mut state = ana();
    let submission = state.begin_submit().unwrap();
    let applied = state.finish_submit(&submission, Err(ContactError::Transport("offline".to_owned())));
    assert!(applied);
    assert_eq!(state.phase, FormPhase::Idle);
    assert_eq!(state.name, "Ana");
    assert_eq!(state.email, "ana@x.com");
    let notice = state.notice.unwrap();
    assert!(notice.is_error());
    assert!(notice.message().contains("offline"));
}

#[test]
fn finish_submit_while_idle_is_ignored() {
    let mut state = ana();
    let submission = ContactSubmission {
        name: "Ana".to_owned(),
        email: "ana@x.com".to_owned(),
        message: "Oi".to_owned(),
    };
    assert!(!state.finish_submit(&submission, Ok(())));
    assert_eq!(state, ana());
}
