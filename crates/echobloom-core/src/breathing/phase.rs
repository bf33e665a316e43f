use serde::{Deserialize, Serialize};

/// Seconds spent in each phase of box breathing.
pub const PHASE_SECONDS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Inhale,
    Hold1,
    Exhale,
    Hold2,
}

impl Phase {
    pub fn next(self) -> Phase {
        match self {
            Phase::Inhale => Phase::Hold1,
            Phase::Hold1 => Phase::Exhale,
            Phase::Exhale => Phase::Hold2,
            Phase::Hold2 => Phase::Inhale,
        }
    }

    /// Instruction shown to the user.
    pub fn instruction(self) -> &'static str {
        match self {
            Phase::Inhale => "Breathe In",
            Phase::Hold1 | Phase::Hold2 => "Hold",
            Phase::Exhale => "Breathe Out",
        }
    }
}

/// Result of one clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseTick {
    /// Count went down inside the current phase.
    Counted { count: u8 },
    /// Dwell expired and the phase moved on.
    Advanced { from: Phase, to: Phase },
    /// Hold2 -> Inhale, which also closes a cycle.
    CycleCompleted { cycles_completed: u32 },
}

/// The bounded counter + cyclic phase part of the breathing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseClock {
    phase: Phase,
    count: u8,
    cycles_completed: u32,
}

impl Default for PhaseClock {
    fn default() -> Self {
        Self {
            phase: Phase::Inhale,
            count: PHASE_SECONDS,
            cycles_completed: 0,
        }
    }
}

impl PhaseClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn cycles_completed(&self) -> u32 {
        self.cycles_completed
    }

    pub fn tick(&mut self) -> PhaseTick {
        if self.count > 1 {
            self.count -= 1;
            return PhaseTick::Counted { count: self.count };
        }

        let from = self.phase;
        self.phase = from.next();
        self.count = PHASE_SECONDS;
        if self.phase == Phase::Inhale {
            self.cycles_completed += 1;
            PhaseTick::CycleCompleted {
                cycles_completed: self.cycles_completed,
            }
        } else {
            PhaseTick::Advanced {
                from,
                to: self.phase,
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
