//! Guided journal orchestrator.
//!
//! ```text
//! Choosing --select_category()--> Writing --save() ok--> Saved --(window)--> Choosing
//!                                    ^  next()/previous()
//! ```
//!
//! Responses are keyed by prompt text, so moving back and forth keeps what
//! was written. Saving is allowed at any prompt and may repeat; each call
//! sends the complete current map.

use chrono::Utc;
use std::collections::BTreeMap;

use super::catalog::{find_category, JournalCategory};
use super::walker::PromptWalker;
use crate::activity::ActivityKind;
use crate::client::{ActivityPayload, ActivitySink, JournalPayload};
use crate::clock::now_ms;
use crate::error::{ClientError, Result, ValidationError};
use crate::events::ActivityEvent;
use crate::save::{SaveTracker, DEFAULT_SUCCESS_WINDOW_MS};

/// Tags attached whenever at least one prompt was answered.
pub const EMOTION_TAGS: [&str; 2] = ["reflective", "mindful"];

#[derive(Debug, Clone)]
pub struct JournalSession {
    category: Option<&'static JournalCategory>,
    walker: Option<PromptWalker<'static>>,
    responses: BTreeMap<String, String>,
    save: SaveTracker,
    success_window_ms: u64,
}

impl Default for JournalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl JournalSession {
    pub fn new() -> Self {
        Self {
            category: None,
            walker: None,
            responses: BTreeMap::new(),
            save: SaveTracker::new(),
            success_window_ms: DEFAULT_SUCCESS_WINDOW_MS,
        }
    }

    pub fn with_success_window_ms(mut self, ms: u64) -> Self {
        self.success_window_ms = ms;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn category(&self) -> Option<&'static JournalCategory> {
        self.category
    }

    pub fn index(&self) -> usize {
        self.walker.as_ref().map(|w| w.index()).unwrap_or(0)
    }

    pub fn current_prompt(&self) -> Option<&'static str> {
        self.walker.as_ref().and_then(|w| w.current())
    }

    pub fn can_go_next(&self) -> bool {
        self.walker.as_ref().is_some_and(|w| w.can_go_next())
    }

    pub fn can_go_previous(&self) -> bool {
        self.walker.as_ref().is_some_and(|w| w.can_go_previous())
    }

    pub fn responses(&self) -> &BTreeMap<String, String> {
        &self.responses
    }

    pub fn current_response(&self) -> Option<&str> {
        let prompt = self.current_prompt()?;
        self.responses.get(prompt).map(String::as_str)
    }

    pub fn is_saving(&self) -> bool {
        self.save.is_saving()
    }

    pub fn is_showing_success(&self) -> bool {
        self.save.is_showing_success()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Choose a category, discarding every response held for the previous one.
    pub fn select_category(&mut self, key: &str) -> Result<ActivityEvent, ValidationError> {
        let category =
            find_category(key).ok_or_else(|| ValidationError::UnknownCategory(key.to_string()))?;
        if !self.responses.is_empty() {
            tracing::debug!(discarded = self.responses.len(), "journal category changed");
        }
        self.responses.clear();
        self.category = Some(category);
        self.walker = Some(PromptWalker::new(&category.prompts));
        Ok(ActivityEvent::JournalCategorySelected {
            category: category.name.to_string(),
            prompt_count: category.prompts.len(),
            at: Utc::now(),
        })
    }

    /// Back to category selection; responses are discarded.
    pub fn clear_category(&mut self) {
        self.category = None;
        self.walker = None;
        self.responses.clear();
    }

    /// Record text for the current prompt. Empty text removes the answer.
    pub fn set_response(&mut self, text: &str) -> Result<(), ValidationError> {
        let prompt = self
            .current_prompt()
            .ok_or_else(|| ValidationError::NotReady("choose a journal category first".into()))?;
        // Cleared answers drop their key, so a prompt typed into and then
        // emptied does not count toward `emotion_tags`.
        if text.is_empty() {
            self.responses.remove(prompt);
        } else {
            self.responses.insert(prompt.to_string(), text.to_string());
        }
        Ok(())
    }

    pub fn next(&mut self) -> Option<ActivityEvent> {
        let walker = self.walker.as_mut()?;
        if !walker.next() {
            return None;
        }
        self.prompt_changed()
    }

    pub fn previous(&mut self) -> Option<ActivityEvent> {
        let walker = self.walker.as_mut()?;
        if !walker.previous() {
            return None;
        }
        self.prompt_changed()
    }

    fn prompt_changed(&self) -> Option<ActivityEvent> {
        Some(ActivityEvent::JournalPromptChanged {
            index: self.index(),
            prompt: self.current_prompt()?.to_string(),
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self) -> ActivityEvent {
        self.clear_category();
        self.save.reset();
        ActivityEvent::SessionReset {
            activity: ActivityKind::Journal,
            at: Utc::now(),
        }
    }

    /// Expire the "saved" display; resets the session when it ends.
    pub fn poll(&mut self, now_ms: u64) -> Option<ActivityEvent> {
        if self.save.success_expired(now_ms) {
            return Some(self.reset());
        }
        None
    }

    // ── Persistence ──────────────────────────────────────────────────

    pub fn payload(&self, user_id: &str) -> Result<JournalPayload, ValidationError> {
        let category = self
            .category
            .ok_or_else(|| ValidationError::NotReady("choose a journal category first".into()))?;
        let emotion_tags = if self.responses.is_empty() {
            Vec::new()
        } else {
            EMOTION_TAGS.iter().map(|t| t.to_string()).collect()
        };
        Ok(JournalPayload {
            user_id: user_id.to_string(),
            category: category.name.to_string(),
            prompts: category.prompts.iter().map(|p| p.to_string()).collect(),
            responses: self.responses.clone(),
            emotion_tags,
        })
    }

    pub fn begin_save(&mut self, user_id: &str) -> Result<ActivityPayload> {
        if user_id.trim().is_empty() {
            return Err(ValidationError::EmptyField("user_id".into()).into());
        }
        let payload = self.payload(user_id)?;
        self.save.begin()?;
        Ok(payload.into())
    }

    pub fn finish_save(&mut self, outcome: Result<(), ClientError>, now_ms: u64) -> ActivityEvent {
        self.save.settle(
            ActivityKind::Journal,
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
