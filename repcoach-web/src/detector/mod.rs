//! Detector module - rep segmentation and capture buffering
//!
//! Re-exports only. All logic in submodules.

mod buffer;
mod rep;
mod signal;

pub use buffer::{FrameBuffer, BUFFER_CAPACITY};
pub use rep::{
    step, RepDetector, RepDetectorState, RepPhase, RepTick, RepTiming, MIN_REP_FRAMES,
    REP_COOLDOWN_MS,
};
pub use signal::{Crossing, PhaseProfile, PhaseThresholds, SignalKind};
