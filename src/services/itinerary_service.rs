use log::{debug, info, warn};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

use crate::models::itinerary::{ItineraryResponse, TripParams};
use crate::services::itinerary_generation_service::{ItineraryBackend, ItineraryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Idle,
    Generating,
    Ready,
}

/// Handle for one issued generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    sequence: u64,
}

impl Ticket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Completion {
    Applied,
    Superseded,
    Failed,
}

impl Completion {
    pub fn is_applied(&self) -> bool {
        *self == Completion::Applied
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub status: GenerationStatus,
    /// Sequence of the result currently shown, 0 when none.
    pub sequence: u64,
    pub itinerary: Option<ItineraryResponse>,
    pub last_error: Option<String>,
}

#[derive(Debug, Default)]
struct SessionInner {
    issued: u64,
    applied: u64,
    latest_settled: bool,
    latest_failed: bool,
    result: Option<ItineraryResponse>,
    last_error: Option<String>,
}

/// Planner state shared across requests. Completions are ordered by issue
/// sequence: an older request finishing late never replaces a newer result.
#[derive(Debug)]
pub struct ItinerarySession {
    inner: Mutex<SessionInner>,
}

impl Default for ItinerarySession {
    fn default() -> Self {
        Self::new()
    }
}

impl ItinerarySession {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SessionInner {
                latest_settled: true,
                ..SessionInner::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn begin(&self) -> Ticket {
        let mut inner = self.lock();
        inner.issued += 1;
        inner.latest_settled = false;
        inner.latest_failed = false;
        debug!("Issued itinerary request #{}", inner.issued);
        Ticket {
            sequence: inner.issued,
        }
    }

    pub fn complete(
        &self,
        ticket: Ticket,
        outcome: Result<ItineraryResponse, &ItineraryError>,
    ) -> Completion {
        let mut inner = self.lock();
        let is_latest = ticket.sequence == inner.issued;

        let completion = match outcome {
            Ok(response) if ticket.sequence > inner.applied => {
                inner.applied = ticket.sequence;
                inner.result = Some(response);
                inner.last_error = None;
                if inner.latest_settled {
                    // newest already failed; this result is what is shown now
                    inner.latest_failed = false;
                }
                Completion::Applied
            }
            Ok(_) => {
                debug!(
                    "Discarding stale itinerary #{} (showing #{})",
                    ticket.sequence, inner.applied
                );
                Completion::Superseded
            }
            Err(err) => {
                warn!("Itinerary request #{} failed: {}", ticket.sequence, err);
                if is_latest {
                    inner.last_error = Some(err.to_string());
                }
                Completion::Failed
            }
        };

        if is_latest {
            inner.latest_settled = true;
            inner.latest_failed = completion == Completion::Failed;
        }
        completion
    }

    pub fn status(&self) -> GenerationStatus {
        Self::status_of(&self.lock())
    }

    fn status_of(inner: &SessionInner) -> GenerationStatus {
        if !inner.latest_settled {
            GenerationStatus::Generating
        } else if inner.result.is_some() && !inner.latest_failed {
            GenerationStatus::Ready
        } else {
            GenerationStatus::Idle
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.lock();
        SessionSnapshot {
            status: Self::status_of(&inner),
            sequence: inner.applied,
            itinerary: inner.result.clone(),
            last_error: inner.last_error.clone(),
        }
    }

    /// Drop the shown result. Requests still in flight are treated as stale.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.applied = inner.issued;
        inner.latest_settled = true;
        inner.latest_failed = false;
        inner.result = None;
        inner.last_error = None;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationOutcome {
    pub sequence: u64,
    pub completion: Completion,
    pub snapshot: SessionSnapshot,
}

/// Run one generation against `backend` and fold its result into `session`.
/// A backend failure leaves the previous result in place and is returned.
pub async fn generate(
    session: &ItinerarySession,
    backend: &dyn ItineraryBackend,
    params: &TripParams,
) -> Result<GenerationOutcome, ItineraryError> {
    if !params.has_valid_start_time() {
        return Err(ItineraryError::InvalidParams(format!(
            "start_time must be HH:MM, got {:?}",
            params.start_time
        )));
    }

    let ticket = session.begin();
    let result = backend.generate(params).await;

    match result {
        Ok(response) => {
            let completion = session.complete(ticket, Ok(response));
            info!(
                "Itinerary #{} from {} backend: {:?}",
                ticket.sequence(),
                backend.name(),
                completion
            );
            Ok(GenerationOutcome {
                sequence: ticket.sequence(),
                completion,
                snapshot: session.snapshot(),
            })
        }
        Err(err) => {
            session.complete(ticket, Err(&err));
            Err(err)
        }
    }
}
