//! Submit flow - single-in-flight gating around an injected backend.
//!
//! The backend stands in for a future network call. While a submission is
//! pending the gate reports in-flight so the UI can disable the submit
//! control; the gate is released on every exit path, success or failure.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::form::{FormSnapshot, FormState};

/// Default simulated network delay, in milliseconds.
const DEFAULT_DELAY_MS: u64 = 2000;

/// Error reported by a submit backend.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("signup request failed: {0}")]
    Backend(String),
}

/// Outcome of one submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the signup.
    Accepted,
    /// At least one field failed validation; the form stays open.
    Rejected,
    /// A submission is already pending; this attempt was not started.
    InFlight,
    /// The backend reported an error; the form stays open.
    Failed,
}

impl SubmitOutcome {
    /// User-visible message for this outcome.
    pub fn user_message(self) -> &'static str {
        match self {
            SubmitOutcome::Accepted => "Account created successfully! Redirecting...",
            SubmitOutcome::Rejected => "Please fix the errors in the form.",
            SubmitOutcome::InFlight => "Account creation already in progress.",
            SubmitOutcome::Failed => "Failed to create account. Please try again.",
        }
    }
}

/// Asynchronous submit collaborator, injected by the caller.
#[async_trait]
pub trait Submitter {
    async fn submit(&self, form: &FormSnapshot) -> Result<(), SubmitError>;
}

/// Stand-in for the real signup backend: waits, then accepts.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        SimulatedBackend { delay }
    }

    /// Returns the backend delay.
    ///
    /// Priority:
    /// 1. Environment variable `SIGNUP_SUBMIT_DELAY_MS`
    /// 2. Default of 2000 ms
    pub fn from_env() -> Self {
        let millis = std::env::var("SIGNUP_SUBMIT_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_DELAY_MS);
        SimulatedBackend::new(Duration::from_millis(millis))
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        SimulatedBackend::new(Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

#[async_trait]
impl Submitter for SimulatedBackend {
    async fn submit(&self, _form: &FormSnapshot) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Tracks whether a submission is pending so the UI can disable the
/// submit control.
#[derive(Debug, Default)]
pub struct SubmitGate {
    in_flight: AtomicBool,
}

impl SubmitGate {
    pub const fn new() -> Self {
        SubmitGate {
            in_flight: AtomicBool::new(false),
        }
    }

    /// True while a submission is pending.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn try_acquire(&self) -> Option<SubmitPermit<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitPermit { gate: self })
    }
}

/// Releases the gate when dropped, whichever path exits.
struct SubmitPermit<'a> {
    gate: &'a SubmitGate,
}

impl Drop for SubmitPermit<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}

/// Runs one submit attempt against the injected backend.
///
/// Validation failures and backend errors come back as outcomes, never as
/// panics; the caller renders the outcome's message and the form stays
/// open for correction.
pub async fn submit_form<S: Submitter>(
    form: &FormState,
    gate: &SubmitGate,
    backend: &S,
) -> SubmitOutcome {
    if !form.can_submit() {
        return SubmitOutcome::Rejected;
    }

    let Some(_permit) = gate.try_acquire() else {
        return SubmitOutcome::InFlight;
    };

    #[cfg(feature = "tracing")]
    tracing::info!("signup submission started");

    let snapshot = form.snapshot();
    match backend.submit(&snapshot).await {
        Ok(()) => {
            #[cfg(feature = "tracing")]
            tracing::info!("signup submission accepted");
            SubmitOutcome::Accepted
        }
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("signup submission failed: {}", _e);
            SubmitOutcome::Failed
        }
    }
}

/// Variant that delivers the outcome via channel.
pub async fn submit_form_tx<S: Submitter>(
    form: &FormState,
    gate: &SubmitGate,
    backend: &S,
    tx: mpsc::Sender<SubmitOutcome>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("submission is about to start...");

    let outcome = submit_form(form, gate, backend).await;

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send submit outcome: {}", _e);
    }
}
