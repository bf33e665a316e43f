//! Submission bookkeeping shared by the activity orchestrators.
//!
//! A save is split into `begin` (marks the session as saving and refuses a
//! second concurrent submission) and `settle` (records the outcome). On an
//! acknowledged save the session may show a transient success state for a
//! fixed window before it resets.

use chrono::Utc;

use crate::activity::ActivityKind;
use crate::error::ClientError;
use crate::events::ActivityEvent;

pub const DEFAULT_SUCCESS_WINDOW_MS: u64 = 3_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveTracker {
    saving: bool,
    /// Epoch ms at which the success display ends.
    success_until_ms: Option<u64>,
}

impl SaveTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_showing_success(&self) -> bool {
        self.success_until_ms.is_some()
    }

    pub fn begin(&mut self) -> Result<(), ClientError> {
        if self.saving {
            return Err(ClientError::SaveInProgress);
        }
        self.saving = true;
        Ok(())
    }

    /// Record the outcome of the submission started by [`begin`](Self::begin).
    /// Failures are logged and otherwise leave the session untouched.
    pub fn settle(
        &mut self,
        activity: ActivityKind,
        outcome: Result<(), ClientError>,
        now_ms: u64,
        success_window_ms: Option<u64>,
    ) -> ActivityEvent {
        self.saving = false;
        match outcome {
            Ok(()) => {
                tracing::info!(%activity, "session saved");
                self.success_until_ms = success_window_ms.map(|w| now_ms.saturating_add(w));
                ActivityEvent::SaveSucceeded {
                    activity,
                    at: Utc::now(),
                }
            }
            Err(e) => {
                tracing::error!(%activity, error = %e, "failed to save session");
                ActivityEvent::SaveFailed {
                    activity,
                    reason: e.to_string(),
                    at: Utc::now(),
                }
            }
        }
    }

    /// Returns `true` exactly once, when the success window has elapsed.
    pub fn success_expired(&mut self, now_ms: u64) -> bool {
        match self.success_until_ms {
            Some(until) if now_ms >= until => {
                self.success_until_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.success_until_ms = None;
    }
}
