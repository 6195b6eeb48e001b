//! Create-trip request lifecycle.
//!
//! ```text
//! Idle --begin--> Submitting --resolve(Ok)--> Succeeded
//!                     |
//!                     +------resolve(Err)---> Idle (error set)
//! ```

use crate::components_impl::{DraftError, PlanTripForm};
use crate::types::{TripCreated, TripDraft};
use futures::future::{AbortHandle, abortable};
use std::fmt;
use std::future::Future;
use tracing::{debug, info, warn};

/// Shown when a failed submission carries no message of its own.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to create trip plan";

/// Target of the page's back control.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Page showing a freshly created trip.
pub fn trip_path(trip_id: &str) -> String {
    format!("/trip/{trip_id}")
}

// === Collaborators ===

/// The remote service that turns a draft into a trip.
pub trait TripService {
    fn create_trip(
        &self,
        draft: TripDraft,
    ) -> impl Future<Output = Result<TripCreated, SubmitFailure>>;
}

pub trait Navigator {
    fn go_to(&self, path: &str);
}

/// A rejected or failed create-trip call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitFailure {
    pub message: Option<String>,
}

impl SubmitFailure {
    pub fn new(message: Option<String>) -> Self {
        Self { message }
    }

    /// The message to show the user; blank messages count as absent.
    pub fn display_message(&self) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_FAILURE_MESSAGE)
            .to_string()
    }
}

// === State Machine ===

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded {
        trip_id: String,
    },
}

/// Why a submission attempt was not started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    InFlight,
    Completed,
    Invalid(DraftError),
}

impl fmt::Display for SubmitBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InFlight => write!(f, "a submission is already in progress"),
            Self::Completed => write!(f, "the trip has already been created"),
            Self::Invalid(e) => write!(f, "form is incomplete: {e}"),
        }
    }
}

impl std::error::Error for SubmitBlocked {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionController {
    phase: SubmitPhase,
    error: Option<String>,
}

impl SubmissionController {
    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    pub fn loading(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Fails unless the controller is `Idle`.
    pub fn ensure_ready(&self) -> Result<(), SubmitBlocked> {
        match self.phase {
            SubmitPhase::Idle => Ok(()),
            SubmitPhase::Submitting => Err(SubmitBlocked::InFlight),
            SubmitPhase::Succeeded { .. } => Err(SubmitBlocked::Completed),
        }
    }

    /// Record why an attempt could not start. The phase is unchanged.
    pub fn refuse(&mut self, reason: &DraftError) {
        self.error = Some(reason.to_string());
    }

    /// `Idle -> Submitting`. Clears the previous error.
    pub fn begin(&mut self) -> Result<(), SubmitBlocked> {
        self.ensure_ready()?;
        self.error = None;
        self.phase = SubmitPhase::Submitting;
        Ok(())
    }

    /// Leave `Submitting`. Returns the navigation path on success.
    ///
    /// An outcome arriving in any other phase is ignored.
    pub fn resolve(&mut self, result: Result<TripCreated, SubmitFailure>) -> Option<String> {
        if !self.loading() {
            debug!("Ignoring submission outcome outside of an attempt");
            return None;
        }

        match result {
            Ok(created) => {
                info!("Trip created: {}", created.trip_id);
                let path = trip_path(&created.trip_id);
                self.phase = SubmitPhase::Succeeded {
                    trip_id: created.trip_id,
                };
                Some(path)
            }
            Err(failure) => {
                let message = failure.display_message();
                warn!("Trip creation failed: {}", message);
                self.error = Some(message);
                self.phase = SubmitPhase::Idle;
                None
            }
        }
    }
}

// === Orchestration ===

/// Apply the outcome of a [`cancellable_submission`] and follow the success
/// path. A discarded outcome (`None`) leaves the form untouched.
pub fn complete_submission<N: Navigator>(
    form: &mut PlanTripForm,
    outcome: Option<Result<TripCreated, SubmitFailure>>,
    navigator: &N,
) {
    let Some(result) = outcome else {
        return;
    };
    if let Some(path) = form.finish_submit(result) {
        navigator.go_to(&path);
    }
}

/// Handle to an in-flight create-trip call.
#[derive(Debug, Clone)]
pub struct SubmissionHandle {
    abort: AbortHandle,
}

impl SubmissionHandle {
    /// Drop interest in the call. The request is not recalled; its outcome
    /// is discarded.
    pub fn cancel(&self) {
        self.abort.abort();
    }
}

/// Wrap a create-trip call so it can be cancelled.
///
/// The returned future yields `None` once the handle has been cancelled.
pub fn cancellable_submission<S: TripService>(
    service: S,
    draft: TripDraft,
) -> (
    SubmissionHandle,
    impl Future<Output = Option<Result<TripCreated, SubmitFailure>>>,
) {
    let (call, abort) = abortable(async move { service.create_trip(draft).await });
    let task = async move {
        let outcome = call.await.ok();
        if outcome.is_none() {
            debug!("Discarding cancelled submission");
        }
        outcome
    };
    (SubmissionHandle { abort }, task)
}
