//! The 5-4-3-2-1 sense steps and the mapping from a flat response log to
//! the step each response belongs to.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SenseStep {
    pub sense: &'static str,
    pub quota: usize,
    pub prompt: &'static str,
    pub placeholder: &'static str,
}

pub static SENSE_STEPS: [SenseStep; 5] = [
    SenseStep {
        sense: "See",
        quota: 5,
        prompt: "Name 5 things you can see around you",
        placeholder: "e.g., a lamp, the wall, my hand...",
    },
    SenseStep {
        sense: "Touch",
        quota: 4,
        prompt: "Name 4 things you can touch or feel",
        placeholder: "e.g., the chair beneath me, my soft sweater...",
    },
    SenseStep {
        sense: "Hear",
        quota: 3,
        prompt: "Name 3 things you can hear",
        placeholder: "e.g., birds chirping, the hum of my computer...",
    },
    SenseStep {
        sense: "Smell",
        quota: 2,
        prompt: "Name 2 things you can smell (or like to smell)",
        placeholder: "e.g., coffee, fresh air...",
    },
    SenseStep {
        sense: "Taste",
        quota: 1,
        prompt: "Name 1 thing you can taste (or would like to taste)",
        placeholder: "e.g., mint from my gum, the lingering taste of tea...",
    },
];

pub fn total_quota(steps: &[SenseStep]) -> usize {
    steps.iter().map(|s| s.quota).sum()
}

/// Where the next response lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPosition {
    pub step_index: usize,
    /// Responses already recorded for `step_index`.
    pub count_in_step: usize,
}

/// Map a flat log length to the step currently being filled.
///
/// A step whose quota is met is left behind immediately, so a length equal to
/// a cumulative boundary points at the start of the following step. Once
/// every quota is met the position stays on the last step, full.
pub fn locate(steps: &[SenseStep], log_len: usize) -> StepPosition {
    let mut offset = 0;
    for (i, step) in steps.iter().enumerate() {
        if log_len < offset + step.quota {
            return StepPosition {
                step_index: i,
                count_in_step: log_len - offset,
            };
        }
        offset += step.quota;
    }
    match steps.last() {
        Some(last) => StepPosition {
            step_index: steps.len() - 1,
            count_in_step: last.quota,
        },
        None => StepPosition {
            step_index: 0,
            count_in_step: 0,
        },
    }
}

/// Split a log into one slice per step. Missing responses yield short
/// (possibly empty) slices.
pub fn slice_by_step<'a, T>(steps: &[SenseStep], log: &'a [T]) -> Vec<&'a [T]> {
    let mut offset = 0;
    steps
        .iter()
        .map(|step| {
            let start = offset.min(log.len());
            let end = (offset + step.quota).min(log.len());
            offset += step.quota;
            &log[start..end]
        })
        .collect()
}
