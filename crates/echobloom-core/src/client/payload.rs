//! JSON bodies accepted by the backend, one struct per activity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::activity::ActivityKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreathingPayload {
    pub user_id: String,
    pub cycles_completed: u32,
    pub duration_seconds: u64,
    pub technique: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingPayload {
    pub user_id: String,
    pub see_items: Vec<String>,
    pub touch_items: Vec<String>,
    pub hear_items: Vec<String>,
    pub smell_items: Vec<String>,
    pub taste_items: Vec<String>,
    pub duration_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalPayload {
    pub user_id: String,
    pub category: String,
    pub prompts: Vec<String>,
    pub responses: BTreeMap<String, String>,
    pub emotion_tags: Vec<String>,
}

/// A gratitude as transmitted; the local entry id is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratitudeItem {
    pub text: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GratitudePayload {
    pub user_id: String,
    pub gratitudes: Vec<GratitudeItem>,
    pub proud_moment: String,
}

/// Outgoing body; the variant picks the path and is not itself serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActivityPayload {
    Breathing(BreathingPayload),
    Grounding(GroundingPayload),
    Journal(JournalPayload),
    Gratitude(GratitudePayload),
}

impl ActivityPayload {
    pub fn kind(&self) -> ActivityKind {
        match self {
            ActivityPayload::Breathing(_) => ActivityKind::Breathing,
            ActivityPayload::Grounding(_) => ActivityKind::Grounding,
            ActivityPayload::Journal(_) => ActivityKind::Journal,
            ActivityPayload::Gratitude(_) => ActivityKind::Gratitude,
        }
    }
}

impl From<BreathingPayload> for ActivityPayload {
    fn from(p: BreathingPayload) -> Self {
        ActivityPayload::Breathing(p)
    }
}

impl From<GroundingPayload> for ActivityPayload {
    fn from(p: GroundingPayload) -> Self {
        ActivityPayload::Grounding(p)
    }
}

impl From<JournalPayload> for ActivityPayload {
    fn from(p: JournalPayload) -> Self {
        ActivityPayload::Journal(p)
    }
}

impl From<GratitudePayload> for ActivityPayload {
    fn from(p: GratitudePayload) -> Self {
        ActivityPayload::Gratitude(p)
    }
}
