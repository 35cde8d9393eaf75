//! Percent animation state machine for the wave fill level.

mod percent;
mod state;

pub use percent::{clamp_percent, PercentAnimator, MORPH_PHASE_BOOST};
pub use state::{AnimationMode, AnimationState};
