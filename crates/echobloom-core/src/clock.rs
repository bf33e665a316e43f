//! Cooperative one-second ticker.
//!
//! Like an interval timer, but with no thread behind it: the caller polls with
//! the current wall-clock time and receives the number of whole seconds that
//! fired since the last poll.
//!
//! ```text
//! Disarmed --arm()--> Armed --disarm()--> Disarmed
//!              ^         |
//!              +-poll()--+   (fires floor(elapsed / 1000) ticks)
//! ```
//!
//! An armed ticker has exactly one anchor, so re-arming it cannot create a
//! second tick source.

use serde::{Deserialize, Serialize};

pub const TICK_MS: u64 = 1_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    /// Epoch ms of the most recent fire (or of arming). `None` while disarmed.
    anchor_ms: Option<u64>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.anchor_ms.is_some()
    }

    /// Arm the ticker. Returns `false` (and keeps the existing anchor) when
    /// it is already armed.
    pub fn arm(&mut self, now_ms: u64) -> bool {
        if self.anchor_ms.is_some() {
            return false;
        }
        self.anchor_ms = Some(now_ms);
        true
    }

    /// Disarm the ticker. A partially elapsed second is dropped.
    pub fn disarm(&mut self) -> bool {
        self.anchor_ms.take().is_some()
    }

    /// Fire the next second now, moving the anchor forward by one tick.
    /// Returns `false` while disarmed.
    pub fn fire_once(&mut self) -> bool {
        match self.anchor_ms.as_mut() {
            Some(anchor) => {
                *anchor += TICK_MS;
                true
            }
            None => false,
        }
    }

    /// Number of whole seconds elapsed since the last fire. The sub-second
    /// remainder is carried into the next poll.
    pub fn poll(&mut self, now_ms: u64) -> u64 {
        let Some(anchor) = self.anchor_ms else {
            return 0;
        };
        let fired = now_ms.saturating_sub(anchor) / TICK_MS;
        if fired > 0 {
            self.anchor_ms = Some(anchor + fired * TICK_MS);
        }
        fired
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disarmed_ticker_never_fires() {
        let mut t = Ticker::new();
        assert_eq!(t.poll(10_000), 0);
    }

    #[test]
    fn fires_once_per_whole_second() {
        let mut t = Ticker::new();
        assert!(t.arm(0));
        assert_eq!(t.poll(999), 0);
        assert_eq!(t.poll(1_000), 1);
        assert_eq!(t.poll(3_500), 2);
        // 500ms remainder carried over
        assert_eq!(t.poll(4_000), 1);
    }

    #[test]
    fn rearming_keeps_single_source() {
        let mut t = Ticker::new();
        assert!(t.arm(0));
        assert!(!t.arm(400));
        assert!(!t.arm(800));
        assert_eq!(t.poll(1_000), 1);
    }

    #[test]
    fn fire_once_consumes_next_second() {
        let mut t = Ticker::new();
        assert!(!t.fire_once());
        t.arm(0);
        assert!(t.fire_once());
        assert!(t.fire_once());
        assert_eq!(t.poll(2_500), 0);
        assert_eq!(t.poll(3_000), 1);
    }

    #[test]
    fn disarm_drops_partial_second() {
        let mut t = Ticker::new();
        t.arm(0);
        assert_eq!(t.poll(1_700), 1);
        assert!(t.disarm());
        assert!(!t.disarm());
        t.arm(5_000);
        assert_eq!(t.poll(5_999), 0);
        assert_eq!(t.poll(6_000), 1);
    }
}
