use super::*;

fn ana() -> ContactSubmission {
    ContactSubmission {
        name: "Ana".to_owned(),
        email: "ana@x.com".to_owned(),
        message: "Quero um horário".to_owned(),
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn simulated_submit_always_succeeds() {
    assert_eq!(futures::executor::block_on(submit(&ana())), Ok(()));
}

#[test]
fn simulated_submit_waits_the_fixed_delay_once() {
    use std::cell::RefCell;

    let waits = RefCell::new(Vec::new());
    let outcome = futures::executor::block_on(simulate_submit(&ana(), |delay| {
        waits.borrow_mut().push(delay);
        std::future::ready(())
    }));
    assert_eq!(outcome, Ok(()));
    assert_eq!(waits.into_inner(), vec![Duration::from_millis(1200)]);
}

#[test]
fn simulated_submit_resolves_only_after_the_wait() {
    use futures::FutureExt;
    use futures::channel::oneshot;

    let (release, released) = oneshot::channel::<()>();
    let submission = ana();
    let mut pending = Box::pin(simulate_submit(&submission, |_| released.map(|_| ())));
    assert!((&mut pending).now_or_never().is_none());
    release.send(()).unwrap();
    assert_eq!(futures::executor::block_on(pending), Ok(()));
}

#[test]
fn contact_error_messages_include_reason() {
    assert_eq!(ContactError::Rejected("spam".to_owned()).to_string(), "mensagem recusada: spam");
    assert_eq!(
        ContactError::Transport("timeout".to_owned()).to_string(),
        "falha de conexão: timeout"
    );
}
