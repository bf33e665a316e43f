mod phase;
mod session;

pub use phase::{Phase, PhaseClock, PhaseTick, PHASE_SECONDS};
pub use session::{format_duration, BreathingSession, DEFAULT_TECHNIQUE};
