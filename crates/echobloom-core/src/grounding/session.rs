//! 5-4-3-2-1 grounding orchestrator.
//!
//! Responses are appended to one flat log; the current step is always derived
//! from the log length via [`locate`]. When the last quota is met the session
//! completes and must be persisted exactly once. Responses cannot be edited
//! or removed.

use chrono::Utc;

use super::steps::{locate, slice_by_step, total_quota, SenseStep, SENSE_STEPS};
use crate::activity::ActivityKind;
use crate::client::{ActivityPayload, ActivitySink, GroundingPayload};
use crate::clock::now_ms;
use crate::error::{ClientError, Result, ValidationError};
use crate::events::ActivityEvent;
use crate::save::SaveTracker;

#[derive(Debug, Clone)]
pub struct GroundingSession {
    steps: &'static [SenseStep],
    responses: Vec<String>,
    step_index: usize,
    started_at_ms: u64,
    completed_at_ms: Option<u64>,
    save_attempted: bool,
    save: SaveTracker,
}

impl GroundingSession {
    pub fn new(now_ms: u64) -> Self {
        Self {
            steps: &SENSE_STEPS,
            responses: Vec::new(),
            step_index: 0,
            started_at_ms: now_ms,
            completed_at_ms: None,
            save_attempted: false,
            save: SaveTracker::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn steps(&self) -> &[SenseStep] {
        self.steps
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn current_step(&self) -> &SenseStep {
        &self.steps[self.step_index]
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// Responses recorded for the step currently being filled.
    pub fn current_step_responses(&self) -> &[String] {
        slice_by_step(self.steps, &self.responses)[self.step_index]
    }

    pub fn remaining_in_step(&self) -> usize {
        let pos = locate(self.steps, self.responses.len());
        self.steps[pos.step_index].quota - pos.count_in_step
    }

    /// Percentage of completed steps, as shown on the progress bar.
    pub fn progress_pct(&self) -> f64 {
        let done: usize = self.steps[..self.step_index].iter().map(|s| s.quota).sum();
        let done = if self.is_complete() { total_quota(self.steps) } else { done };
        done as f64 / total_quota(self.steps) as f64 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at_ms.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.save.is_saving()
    }

    /// Completed but not yet handed to the backend.
    pub fn needs_save(&self) -> bool {
        self.is_complete() && !self.save_attempted
    }

    pub fn duration_secs(&self) -> u64 {
        let end = self.completed_at_ms.unwrap_or(self.started_at_ms);
        end.saturating_sub(self.started_at_ms) / 1_000
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Append one response. Blank input and input after completion are
    /// ignored. Returns an event when a step advances or the session
    /// completes.
    pub fn add_response(&mut self, text: &str, now_ms: u64) -> Option<ActivityEvent> {
        let text = text.trim();
        if text.is_empty() || self.is_complete() {
            return None;
        }
        self.responses.push(text.to_string());

        let total = total_quota(self.steps);
        if self.responses.len() == total {
            self.completed_at_ms = Some(now_ms);
            tracing::debug!(responses = total, "grounding complete");
            return Some(ActivityEvent::GroundingCompleted {
                total_responses: total,
                duration_secs: self.duration_secs(),
                at: Utc::now(),
            });
        }

        let pos = locate(self.steps, self.responses.len());
        if pos.step_index == self.step_index {
            return None;
        }
        self.step_index = pos.step_index;
        let step = self.current_step();
        tracing::debug!(step = step.sense, "grounding step advanced");
        Some(ActivityEvent::GroundingStepAdvanced {
            step_index: self.step_index,
            sense: step.sense.to_string(),
            remaining: step.quota,
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self, now_ms: u64) -> ActivityEvent {
        *self = Self::new(now_ms);
        ActivityEvent::SessionReset {
            activity: ActivityKind::Grounding,
            at: Utc::now(),
        }
    }

    // ── Persistence ──────────────────────────────────────────────────

    pub fn payload(&self, user_id: &str) -> GroundingPayload {
        let mut groups = slice_by_step(self.steps, &self.responses)
            .into_iter()
            .map(|slice| slice.to_vec());
        let mut next = || groups.next().unwrap_or_default();
        GroundingPayload {
            user_id: user_id.to_string(),
            see_items: next(),
            touch_items: next(),
            hear_items: next(),
            smell_items: next(),
            taste_items: next(),
            duration_seconds: self.duration_secs(),
        }
    }

    pub fn begin_save(&mut self, user_id: &str) -> Result<ActivityPayload> {
        if user_id.trim().is_empty() {
            return Err(ValidationError::EmptyField("user_id".into()).into());
        }
        if !self.needs_save() {
            return Err(ValidationError::NotReady(
                "grounding is saved once, after all responses are collected".into(),
            )
            .into());
        }
        self.save.begin()?;
        self.save_attempted = true;
        Ok(self.payload(user_id).into())
    }

    pub fn finish_save(&mut self, outcome: Result<(), ClientError>, now_ms: u64) -> ActivityEvent {
        self.save
            .settle(ActivityKind::Grounding, outcome, now_ms, None)
    }

    pub async fn save<S: ActivitySink>(&mut self, sink: &S, user_id: &str) -> Result<ActivityEvent> {
        let payload = self.begin_save(user_id)?;
        let outcome = sink.submit(&payload).await;
        Ok(self.finish_save(outcome, now_ms()))
    }

    /// Add a response and, when it completes the session, persist it.
    pub async fn respond<S: ActivitySink>(
        &mut self,
        text: &str,
        sink: &S,
        user_id: &str,
    ) -> Result<Vec<ActivityEvent>> {
        let mut events: Vec<ActivityEvent> = self.add_response(text, now_ms()).into_iter().collect();
        if self.needs_save() {
            events.push(self.save(sink, user_id).await?);
        }
        Ok(events)
    }
}
