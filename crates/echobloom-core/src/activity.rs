use serde::{Deserialize, Serialize};
use std::fmt;

/// The four guided activities. Each owns a fixed backend path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Breathing,
    Grounding,
    Journal,
    Gratitude,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 4] = [
        ActivityKind::Breathing,
        ActivityKind::Grounding,
        ActivityKind::Journal,
        ActivityKind::Gratitude,
    ];

    /// Path below the backend origin that accepts this activity's payload.
    pub fn path(self) -> &'static str {
        match self {
            ActivityKind::Breathing => "/api/activities/breathing",
            ActivityKind::Grounding => "/api/activities/grounding",
            ActivityKind::Journal => "/api/activities/journal",
            ActivityKind::Gratitude => "/api/activities/gratitude",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ActivityKind::Breathing => "Box Breathing",
            ActivityKind::Grounding => "5-4-3-2-1 Grounding",
            ActivityKind::Journal => "Guided Journal",
            ActivityKind::Gratitude => "Gratitude Practice",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityKind::Breathing => "breathing",
            ActivityKind::Grounding => "grounding",
            ActivityKind::Journal => "journal",
            ActivityKind::Gratitude => "gratitude",
        };
        f.write_str(name)
    }
}
