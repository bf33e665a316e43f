use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activity::ActivityKind;
use crate::breathing::Phase;

/// Every visible state change in an activity produces an event.
/// Front-ends render from these; nothing in the core consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActivityEvent {
    BreathingStarted {
        phase: Phase,
        count: u8,
        at: DateTime<Utc>,
    },
    BreathingPaused {
        cycles_completed: u32,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    PhaseChanged {
        from: Phase,
        to: Phase,
        at: DateTime<Utc>,
    },
    CycleCompleted {
        cycles_completed: u32,
        at: DateTime<Utc>,
    },
    GroundingStepAdvanced {
        step_index: usize,
        sense: String,
        remaining: usize,
        at: DateTime<Utc>,
    },
    GroundingCompleted {
        total_responses: usize,
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    JournalCategorySelected {
        category: String,
        prompt_count: usize,
        at: DateTime<Utc>,
    },
    JournalPromptChanged {
        index: usize,
        prompt: String,
        at: DateTime<Utc>,
    },
    GratitudeEntryAdded {
        id: String,
        entries: usize,
        at: DateTime<Utc>,
    },
    GratitudeEntryRemoved {
        id: String,
        entries: usize,
        at: DateTime<Utc>,
    },
    SaveSucceeded {
        activity: ActivityKind,
        at: DateTime<Utc>,
    },
    SaveFailed {
        activity: ActivityKind,
        reason: String,
        at: DateTime<Utc>,
    },
    SessionReset {
        activity: ActivityKind,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let event = ActivityEvent::SaveSucceeded {
            activity: ActivityKind::Journal,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "SaveSucceeded");
        assert_eq!(json["activity"], "journal");
    }
}
