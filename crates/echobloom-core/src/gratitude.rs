//! Gratitude practice orchestrator: three gratitudes, each with a reason,
//! plus one proud moment.
//!
//! Entries can be added (up to three), edited and removed freely. Submission
//! is gated on every field being filled in. A successful save shows the
//! completion state for a short window and then clears everything.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::activity::ActivityKind;
use crate::client::{ActivityPayload, ActivitySink, GratitudeItem, GratitudePayload};
use crate::clock::now_ms;
use crate::error::{ClientError, Result, ValidationError};
use crate::events::ActivityEvent;
use crate::gate::CompletionGate;
use crate::save::{SaveTracker, DEFAULT_SUCCESS_WINDOW_MS};

pub const MAX_GRATITUDES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratitudeEntry {
    /// Local handle only; never transmitted.
    pub id: Uuid,
    pub text: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GratitudeField {
    Text,
    Reason,
}

#[derive(Debug, Clone)]
pub struct GratitudeSession {
    entries: Vec<GratitudeEntry>,
    proud_moment: String,
    save: SaveTracker,
    success_window_ms: u64,
}

impl Default for GratitudeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GratitudeSession {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            proud_moment: String::new(),
            save: SaveTracker::new(),
            success_window_ms: DEFAULT_SUCCESS_WINDOW_MS,
        }
    }

    pub fn with_success_window_ms(mut self, ms: u64) -> Self {
        self.success_window_ms = ms;
        self
    }

    pub fn entries(&self) -> &[GratitudeEntry] {
        &self.entries
    }

    pub fn proud_moment(&self) -> &str {
        &self.proud_moment
    }

    pub fn is_saving(&self) -> bool {
        self.save.is_saving()
    }

    pub fn is_showing_success(&self) -> bool {
        self.save.is_showing_success()
    }

    pub fn can_add(&self) -> bool {
        self.entries.len() < MAX_GRATITUDES
    }

    fn gate(&self) -> CompletionGate {
        let mut gate = CompletionGate::new().require_count("gratitudes", self.entries.len(), MAX_GRATITUDES);
        for (i, entry) in self.entries.iter().enumerate() {
            gate = gate
                .require(format!("gratitudes[{i}].text"), &entry.text)
                .require(format!("gratitudes[{i}].reason"), &entry.reason);
        }
        gate.require("proud_moment", &self.proud_moment)
    }

    pub fn can_complete(&self) -> bool {
        self.gate().is_open()
    }

    /// Fields still blocking completion.
    pub fn missing_fields(&self) -> Vec<String> {
        self.gate().missing().to_vec()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Append an empty entry. Refused once three exist.
    pub fn add(&mut self) -> Result<Uuid, ValidationError> {
        if !self.can_add() {
            return Err(ValidationError::CapacityReached {
                collection: "gratitudes".into(),
                capacity: MAX_GRATITUDES,
            });
        }
        let id = Uuid::new_v4();
        self.entries.push(GratitudeEntry {
            id,
            text: String::new(),
            reason: String::new(),
        });
        Ok(id)
    }

    /// Convenience for front-ends that collect both fields up front.
    pub fn add_filled(&mut self, text: &str, reason: &str) -> Result<ActivityEvent, ValidationError> {
        let id = self.add()?;
        self.update(id, GratitudeField::Text, text)?;
        self.update(id, GratitudeField::Reason, reason)?;
        Ok(ActivityEvent::GratitudeEntryAdded {
            id: id.to_string(),
            entries: self.entries.len(),
            at: Utc::now(),
        })
    }

    pub fn update(&mut self, id: Uuid, field: GratitudeField, value: &str) -> Result<(), ValidationError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ValidationError::UnknownEntry(id.to_string()))?;
        match field {
            GratitudeField::Text => entry.text = value.to_string(),
            GratitudeField::Reason => entry.reason = value.to_string(),
        }
        Ok(())
    }

    /// Remove an entry. Unknown ids are simply ignored.
    pub fn remove(&mut self, id: Uuid) -> Option<ActivityEvent> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return None;
        }
        Some(ActivityEvent::GratitudeEntryRemoved {
            id: id.to_string(),
            entries: self.entries.len(),
            at: Utc::now(),
        })
    }

    pub fn set_proud_moment(&mut self, value: &str) {
        self.proud_moment = value.to_string();
    }

    pub fn reset(&mut self) -> ActivityEvent {
        self.entries.clear();
        self.proud_moment.clear();
        self.save.reset();
        ActivityEvent::SessionReset {
            activity: ActivityKind::Gratitude,
            at: Utc::now(),
        }
    }

    /// Expire the completion display; clears the session when it ends.
    pub fn poll(&mut self, now_ms: u64) -> Option<ActivityEvent> {
        if self.save.success_expired(now_ms) {
            return Some(self.reset());
        }
        None
    }

    // ── Persistence ──────────────────────────────────────────────────

    pub fn payload(&self, user_id: &str) -> GratitudePayload {
        GratitudePayload {
            user_id: user_id.to_string(),
            gratitudes: self
                .entries
                .iter()
                .map(|e| GratitudeItem {
                    text: e.text.clone(),
                    reason: e.reason.clone(),
                })
                .collect(),
            proud_moment: self.proud_moment.clone(),
        }
    }

    pub fn begin_save(&mut self, user_id: &str) -> Result<ActivityPayload> {
        if user_id.trim().is_empty() {
            return Err(ValidationError::EmptyField("user_id".into()).into());
        }
        self.gate().check()?;
        if self.save.is_showing_success() {
            return Err(ValidationError::NotReady("session already saved".into()).into());
        }
        self.save.begin()?;
        Ok(self.payload(user_id).into())
    }

    pub fn finish_save(&mut self, outcome: Result<(), ClientError>, now_ms: u64) -> ActivityEvent {
        self.save.settle(
            ActivityKind::Gratitude,
            outcome,
            now_ms,
            Some(self.success_window_ms),
        )
    }

    pub async fn save<S: ActivitySink>(&mut self, sink: &S, user_id: &str) -> Result<ActivityEvent> {
        let payload = self.begin_save(user_id)?;
        let outcome = sink.submit(&payload).await;
        Ok(self.finish_save(outcome, now_ms()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::RecordingSink;

    fn filled() -> GratitudeSession {
        let mut s = GratitudeSession::new();
        s.add_filled("A", "x").unwrap();
        s.add_filled("B", "y").unwrap();
        s.add_filled("C", "z").unwrap();
        s.set_proud_moment("done");
        s
    }

    #[test]
    fn add_beyond_three_is_refused() {
        let mut s = filled();
        assert!(!s.can_add());
        assert!(matches!(s.add(), Err(ValidationError::CapacityReached { capacity: 3, .. })));
        assert_eq!(s.entries().len(), 3);
    }

    #[test]
    fn can_complete_needs_every_field() {
        let mut s = filled();
        assert!(s.can_complete());

        s.set_proud_moment("   ");
        assert!(!s.can_complete());
        s.set_proud_moment("done");

        let id = s.entries()[1].id;
        s.update(id, GratitudeField::Reason, " ").unwrap();
        assert!(!s.can_complete());
        assert_eq!(s.missing_fields(), vec!["gratitudes[1].reason".to_string()]);
    }

    #[test]
    fn two_entries_cannot_complete() {
        let mut s = filled();
        let id = s.entries()[0].id;
        assert!(s.remove(id).is_some());
        assert!(!s.can_complete());
        assert!(s.can_add());
    }

    #[test]
    fn remove_unknown_id_is_harmless() {
        let mut s = filled();
        assert!(s.remove(Uuid::new_v4()).is_none());
        assert_eq!(s.entries().len(), 3);
    }

    #[test]
    fn update_unknown_id_errors() {
        let mut s = GratitudeSession::new();
        let id = Uuid::new_v4();
        assert_eq!(
            s.update(id, GratitudeField::Text, "x"),
            Err(ValidationError::UnknownEntry(id.to_string()))
        );
    }

    #[test]
    fn ids_are_unique() {
        let s = filled();
        let ids: std::collections::HashSet<_> = s.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn incomplete_form_never_submits() {
        let sink = RecordingSink::accepting();
        let mut s = GratitudeSession::new();
        s.add_filled("A", "x").unwrap();
        assert!(s.save(&sink, "u").await.is_err());
        assert!(sink.calls().is_empty());
    }

    #[tokio::test]
    async fn submit_then_reset_after_window() {
        let sink = RecordingSink::accepting();
        let mut s = filled().with_success_window_ms(3_000);
        let event = s.save(&sink, "user_1").await.unwrap();
        assert!(matches!(event, ActivityEvent::SaveSucceeded { .. }));
        assert!(s.is_showing_success());
        assert!(s.poll(now_ms()).is_none());

        assert!(matches!(s.poll(now_ms() + 3_000), Some(ActivityEvent::SessionReset { .. })));
        assert!(s.entries().is_empty());
        assert_eq!(s.proud_moment(), "");

        let sent = sink.calls();
        match &sent[0] {
            ActivityPayload::Gratitude(p) => {
                assert_eq!(p.gratitudes.len(), 3);
                assert_eq!(p.gratitudes[2].text, "C");
                assert_eq!(p.gratitudes[2].reason, "z");
                assert_eq!(p.proud_moment, "done");
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_submit_keeps_entries() {
        let sink = RecordingSink::rejecting();
        let mut s = filled();
        s.save(&sink, "u").await.unwrap();
        assert_eq!(s.entries().len(), 3);
        assert!(s.can_complete());
        assert!(!s.is_showing_success());
    }
}
