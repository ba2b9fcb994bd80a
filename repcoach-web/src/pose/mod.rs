//! Pose module - landmark types, normalization and rep comparison
//!
//! Re-exports only. All logic in submodules.

mod adapter;
mod compare;
mod focus;
mod landmarks;
mod normalize;
mod reference;
mod resample;

#[doc(hidden)]
pub mod fixtures;

pub use adapter::{adapt, adapt_flat, adapt_json};
pub use compare::{
    compare_reps, frame_distance, is_rep_match, CompareOptions, DEFAULT_MATCH_THRESHOLD,
};
pub use focus::{subset_frame, subset_sequence, MovementClass};
pub use landmarks::*;
pub use normalize::{normalize_frame, normalize_sequence};
pub use reference::ReferencePoseSequence;
pub use resample::resample_to_length;
