mod session;
mod steps;

pub use session::GroundingSession;
pub use steps::{locate, slice_by_step, total_quota, SenseStep, StepPosition, SENSE_STEPS};
