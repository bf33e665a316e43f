//! Box-breathing orchestrator.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running <-> Paused -> (save) -> Success -> Idle
//!   ^_________________ reset() ____________________|
//! ```
//!
//! Two independent tickers run while the session is armed: one drives the
//! phase clock, the other counts session seconds. Both are polled from the
//! same loop via [`BreathingSession::poll`].

use chrono::Utc;

use super::phase::{Phase, PhaseClock, PhaseTick};
use crate::activity::ActivityKind;
use crate::client::{ActivityPayload, ActivitySink, BreathingPayload};
use crate::clock::{now_ms, Ticker};
use crate::error::{ClientError, Result, ValidationError};
use crate::events::ActivityEvent;
use crate::save::{SaveTracker, DEFAULT_SUCCESS_WINDOW_MS};

pub const DEFAULT_TECHNIQUE: &str = "box_breathing";

#[derive(Debug, Clone)]
pub struct BreathingSession {
    clock: PhaseClock,
    phase_ticker: Ticker,
    duration_ticker: Ticker,
    duration_secs: u64,
    technique: String,
    save: SaveTracker,
    success_window_ms: u64,
}

impl Default for BreathingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl BreathingSession {
    pub fn new() -> Self {
        Self {
            clock: PhaseClock::new(),
            phase_ticker: Ticker::new(),
            duration_ticker: Ticker::new(),
            duration_secs: 0,
            technique: DEFAULT_TECHNIQUE.to_string(),
            save: SaveTracker::new(),
            success_window_ms: DEFAULT_SUCCESS_WINDOW_MS,
        }
    }

    pub fn with_technique(mut self, technique: impl Into<String>) -> Self {
        self.technique = technique.into();
        self
    }

    pub fn with_success_window_ms(mut self, ms: u64) -> Self {
        self.success_window_ms = ms;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.clock.phase()
    }

    pub fn count(&self) -> u8 {
        self.clock.count()
    }

    pub fn cycles_completed(&self) -> u32 {
        self.clock.cycles_completed()
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    pub fn technique(&self) -> &str {
        &self.technique
    }

    pub fn is_running(&self) -> bool {
        self.phase_ticker.is_armed()
    }

    pub fn is_saving(&self) -> bool {
        self.save.is_saving()
    }

    pub fn is_showing_success(&self) -> bool {
        self.save.is_showing_success()
    }

    /// Save is offered once a cycle is done and the clock is paused.
    pub fn can_save(&self) -> bool {
        self.cycles_completed() > 0
            && !self.is_running()
            && !self.save.is_saving()
            && !self.save.is_showing_success()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Arm both tickers. Returns `None` when already running.
    pub fn start(&mut self, now_ms: u64) -> Option<ActivityEvent> {
        if !self.phase_ticker.arm(now_ms) {
            return None;
        }
        self.duration_ticker.arm(now_ms);
        tracing::debug!(phase = ?self.phase(), count = self.count(), "breathing started");
        Some(ActivityEvent::BreathingStarted {
            phase: self.phase(),
            count: self.count(),
            at: Utc::now(),
        })
    }

    /// Disarm both tickers, keeping all counters.
    pub fn pause(&mut self) -> Option<ActivityEvent> {
        if !self.phase_ticker.disarm() {
            return None;
        }
        self.duration_ticker.disarm();
        Some(ActivityEvent::BreathingPaused {
            cycles_completed: self.cycles_completed(),
            duration_secs: self.duration_secs,
            at: Utc::now(),
        })
    }

    pub fn reset(&mut self) -> ActivityEvent {
        self.phase_ticker.disarm();
        self.duration_ticker.disarm();
        self.clock.reset();
        self.duration_secs = 0;
        self.save.reset();
        ActivityEvent::SessionReset {
            activity: ActivityKind::Breathing,
            at: Utc::now(),
        }
    }

    /// Fire the next second on both tickers now, if running. The seconds a
    /// later [`poll`](Self::poll) reports are counted from the moved anchors,
    /// so mixing the two never counts a second twice.
    pub fn tick(&mut self) -> Vec<ActivityEvent> {
        let mut events = Vec::new();
        if self.phase_ticker.fire_once() {
            self.fire_phase(&mut events);
        }
        if self.duration_ticker.fire_once() {
            self.duration_secs += 1;
        }
        events
    }

    /// Advance both tickers to `now_ms` and expire the success display.
    pub fn poll(&mut self, now_ms: u64) -> Vec<ActivityEvent> {
        let mut events = Vec::new();
        for _ in 0..self.phase_ticker.poll(now_ms) {
            self.fire_phase(&mut events);
        }
        self.duration_secs += self.duration_ticker.poll(now_ms);
        if self.save.success_expired(now_ms) {
            events.push(self.reset());
        }
        events
    }

    fn fire_phase(&mut self, events: &mut Vec<ActivityEvent>) {
        match self.clock.tick() {
            PhaseTick::Counted { .. } => {}
            PhaseTick::Advanced { from, to } => {
                events.push(ActivityEvent::PhaseChanged {
                    from,
                    to,
                    at: Utc::now(),
                });
            }
            PhaseTick::CycleCompleted { cycles_completed } => {
                tracing::debug!(cycles_completed, "breathing cycle completed");
                events.push(ActivityEvent::PhaseChanged {
                    from: Phase::Hold2,
                    to: Phase::Inhale,
                    at: Utc::now(),
                });
                events.push(ActivityEvent::CycleCompleted {
                    cycles_completed,
                    at: Utc::now(),
                });
            }
        }
    }

    // ── Persistence ──────────────────────────────────────────────────

    pub fn payload(&self, user_id: &str) -> BreathingPayload {
        BreathingPayload {
            user_id: user_id.to_string(),
            cycles_completed: self.cycles_completed(),
            duration_seconds: self.duration_secs,
            technique: self.technique.clone(),
            notes: format!(
                "Completed {} cycles in {}",
                self.cycles_completed(),
                format_duration(self.duration_secs)
            ),
        }
    }

    pub fn begin_save(&mut self, user_id: &str) -> Result<ActivityPayload> {
        if user_id.trim().is_empty() {
            return Err(ValidationError::EmptyField("user_id".into()).into());
        }
        if !self.can_save() {
            return Err(ValidationError::NotReady(
                "pause after at least one completed cycle to save".into(),
            )
            .into());
        }
        self.save.begin()?;
        Ok(self.payload(user_id).into())
    }

    pub fn finish_save(&mut self, outcome: Result<(), ClientError>, now_ms: u64) -> ActivityEvent {
        self.save.settle(
            ActivityKind::Breathing,
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

/// `m:ss`, as shown next to the running session.
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::RecordingSink;
    use crate::error::CoreError;

    fn run_ticks(session: &mut BreathingSession, n: usize) {
        for _ in 0..n {
            session.tick();
        }
    }

    #[test]
    fn sixteen_ticks_complete_one_cycle() {
        let mut s = BreathingSession::new();
        s.start(0);
        run_ticks(&mut s, 16);
        assert_eq!(s.phase(), Phase::Inhale);
        assert_eq!(s.count(), 4);
        assert_eq!(s.cycles_completed(), 1);
        assert_eq!(s.duration_secs(), 16);
    }

    #[test]
    fn ticks_ignored_while_paused() {
        let mut s = BreathingSession::new();
        s.start(0);
        run_ticks(&mut s, 3);
        assert!(s.pause().is_some());
        run_ticks(&mut s, 10);
        assert_eq!(s.count(), 1);
        assert_eq!(s.duration_secs(), 3);
    }

    #[test]
    fn double_start_keeps_one_tick_source() {
        let mut s = BreathingSession::new();
        assert!(s.start(0).is_some());
        assert!(s.start(200).is_none());
        assert!(s.pause().is_some());
        assert!(s.pause().is_none());
        assert!(s.start(1_000).is_some());
        s.poll(2_000);
        assert_eq!(s.duration_secs(), 1);
        assert_eq!(s.count(), 3);
    }

    #[test]
    fn manual_ticks_and_polling_share_one_clock() {
        let mut s = BreathingSession::new();
        s.start(0);
        run_ticks(&mut s, 3);
        s.poll(3_000);
        assert_eq!(s.duration_secs(), 3);
        assert_eq!(s.count(), 1);
        assert_eq!(s.phase(), Phase::Inhale);

        s.poll(4_000);
        assert_eq!(s.duration_secs(), 4);
        assert_eq!(s.phase(), Phase::Hold1);
    }

    #[test]
    fn poll_fires_elapsed_seconds() {
        let mut s = BreathingSession::new();
        s.start(10_000);
        let events = s.poll(14_000);
        assert_eq!(s.phase(), Phase::Hold1);
        assert_eq!(s.duration_secs(), 4);
        assert!(events
            .iter()
            .any(|e| matches!(e, ActivityEvent::PhaseChanged { to: Phase::Hold1, .. })));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut s = BreathingSession::new();
        s.start(0);
        run_ticks(&mut s, 21);
        s.reset();
        s.reset();
        assert_eq!(s.phase(), Phase::Inhale);
        assert_eq!(s.count(), 4);
        assert_eq!(s.cycles_completed(), 0);
        assert_eq!(s.duration_secs(), 0);
        assert!(!s.is_running());
    }

    #[test]
    fn save_requires_cycle_and_pause() {
        let mut s = BreathingSession::new();
        s.start(0);
        run_ticks(&mut s, 8);
        s.pause();
        assert!(!s.can_save());
        s.start(0);
        run_ticks(&mut s, 8);
        assert!(!s.can_save());
        s.pause();
        assert!(s.can_save());
        assert!(matches!(
            s.begin_save(""),
            Err(CoreError::Validation(ValidationError::EmptyField(_)))
        ));
    }

    #[test]
    fn notes_summarize_cycles_and_time() {
        let mut s = BreathingSession::new();
        s.start(0);
        run_ticks(&mut s, 80);
        s.pause();
        let p = s.payload("user_1");
        assert_eq!(p.cycles_completed, 5);
        assert_eq!(p.duration_seconds, 80);
        assert_eq!(p.technique, "box_breathing");
        assert_eq!(p.notes, "Completed 5 cycles in 1:20");
    }

    #[tokio::test]
    async fn successful_save_resets_after_window() {
        let sink = RecordingSink::accepting();
        let mut s = BreathingSession::new().with_success_window_ms(3_000);
        s.start(0);
        run_ticks(&mut s, 16);
        s.pause();

        let event = s.save(&sink, "user_1").await.unwrap();
        assert!(matches!(event, ActivityEvent::SaveSucceeded { .. }));
        assert_eq!(sink.calls().len(), 1);
        assert!(s.is_showing_success());
        assert!(!s.can_save());

        // Window is anchored to wall-clock time at settle.
        let events = s.poll(now_ms() + 3_000);
        assert!(matches!(events.last(), Some(ActivityEvent::SessionReset { .. })));
        assert_eq!(s.cycles_completed(), 0);
    }

    #[tokio::test]
    async fn failed_save_keeps_session_for_retry() {
        let sink = RecordingSink::rejecting();
        let mut s = BreathingSession::new();
        s.start(0);
        run_ticks(&mut s, 16);
        s.pause();

        let event = s.save(&sink, "user_1").await.unwrap();
        assert!(matches!(event, ActivityEvent::SaveFailed { .. }));
        assert_eq!(s.cycles_completed(), 1);
        assert!(s.can_save());
    }

    #[test]
    fn format_duration_pads_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(600), "10:00");
    }
}
