//! Contact form delivery.
//!
//! The shipped collaborator is a simulated submission: it waits
//! `SUBMIT_DELAY_MS` and reports success. `ContactError` describes the
//! outcomes a real relay (form endpoint or email service) would report, so
//! callers already handle them.
//!
//! ERROR HANDLING
//! ==============
//! Delivery errors are returned, never panicked on; the form keeps the
//! user's input and shows the reason.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

/// Fixed delay of the simulated submission.
pub const SUBMIT_DELAY_MS: u32 = 1200;

/// Owned snapshot of an accepted form, detached from the live input state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("mensagem recusada: {0}")]
    Rejected(String),
    #[error("falha de conexão: {0}")]
    Transport(String),
}

/// Deliver a submission. Resolves after the simulated network delay.
pub async fn submit(submission: &ContactSubmission) -> Result<(), ContactError> {
    simulate_submit(submission, wait).await
}

/// Simulated delivery: wait `SUBMIT_DELAY_MS` through `sleep`, then succeed.
async fn simulate_submit<S, F>(submission: &ContactSubmission, sleep: S) -> Result<(), ContactError>
where
    S: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    sleep(Duration::from_millis(u64::from(SUBMIT_DELAY_MS))).await;
    #[cfg(feature = "hydrate")]
    log::info!(
        "contact submission accepted: name_len={} message_len={}",
        submission.name.chars().count(),
        submission.message.chars().count()
    );
    #[cfg(not(feature = "hydrate"))]
    let _ = submission;
    Ok(())
}

#[cfg(feature = "hydrate")]
fn wait(delay: Duration) -> impl Future<Output = ()> {
    gloo_timers::future::sleep(delay)
}

/// No timer outside the browser; SSR never submits.
#[cfg(not(feature = "hydrate"))]
fn wait(delay: Duration) -> impl Future<Output = ()> {
    let _ = delay;
    std::future::ready(())
}
