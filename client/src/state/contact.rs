//! Contact form state machine.
//!
//! DESIGN
//! ======
//! Two phases cycle linearly: `Idle -> Submitting -> Idle`. `begin_submit`
//! is the only way into `Submitting` and refuses while already there, so the
//! form is non-reentrant even if the disabled button is bypassed.
//! `finish_submit` is the only way out and ignores calls made while `Idle`,
//! which keeps the confirmation to one per accepted submission.
//!
//! Browser `required` and `type=email` checks run before the submit handler;
//! `begin_submit` repeats them so the state machine holds on its own.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::contact::{ContactError, ContactSubmission};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Email => "E-mail",
            Self::Message => "Mensagem",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("envio em andamento")]
    AlreadySubmitting,
    #[error("preencha o campo {}", .0.label())]
    MissingField(FormField),
    #[error("e-mail inválido")]
    InvalidEmail,
}

/// Feedback shown below the form after a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormNotice {
    Sent { name: String },
    Failed { reason: String },
}

impl FormNotice {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Sent { name } => {
                format!("Obrigado, {name}! Sua mensagem foi enviada. Entraremos em contato em breve.")
            }
            Self::Failed { reason } => format!("Não foi possível enviar sua mensagem ({reason}). Tente novamente."),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub phase: FormPhase,
    pub notice: Option<FormNotice>,
}

impl ContactFormState {
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// The submit control is disabled for the whole `Submitting` phase.
    #[must_use]
    pub fn is_submit_disabled(&self) -> bool {
        self.is_submitting()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { "Enviando..." } else { "Enviar mensagem" }
    }

    /// Validate and move to `Submitting`, returning what should be sent.
    ///
    /// # Errors
    ///
    /// Returns `AlreadySubmitting` while a submission is in flight, or a
    /// validation error when a field is blank or the e-mail is malformed.
    /// The state is left untouched on error.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, ContactFormError> {
        if self.is_submitting() {
            return Err(ContactFormError::AlreadySubmitting);
        }
        let submission = validate(&self.name, &self.email, &self.message)?;
        self.phase = FormPhase::Submitting;
        self.notice = None;
        Ok(submission)
    }

    /// Settle an in-flight submission. Returns `false` when nothing was in
    /// flight and the outcome was ignored.
    ///
    /// Success clears all three fields and confirms with the submitted name;
    /// failure keeps the input so the user can retry.
    pub fn finish_submit(&mut self, submitted: &ContactSubmission, outcome: Result<(), ContactError>) -> bool {
        if !self.is_submitting() {
            return false;
        }
        self.phase = FormPhase::Idle;
        self.notice = Some(match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                FormNotice::Sent { name: submitted.name.clone() }
            }
            Err(e) => FormNotice::Failed { reason: e.to_string() },
        });
        true
    }
}

fn validate(name: &str, email: &str, message: &str) -> Result<ContactSubmission, ContactFormError> {
    let name = required(name, FormField::Name)?;
    let email = required(email, FormField::Email)?;
    let message = required(message, FormField::Message)?;
    if !looks_like_email(email) {
        return Err(ContactFormError::InvalidEmail);
    }
    Ok(ContactSubmission { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() })
}

fn required(value: &str, field: FormField) -> Result<&str, ContactFormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() { Err(ContactFormError::MissingField(field)) } else { Ok(trimmed) }
}

/// WHATWG "valid e-mail address", the grammar `<input type=email>` checks:
/// a local part of atext characters and dots, then one or more dot-separated
/// domain labels of 1-63 alphanumerics or hyphens, not starting or ending
/// with a hyphen.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && local.chars().all(is_local_char) && domain.split('.').all(is_domain_label)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    (1..=63).contains(&label.len())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}
