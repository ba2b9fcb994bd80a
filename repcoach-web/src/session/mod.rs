//! Session module - per-exercise orchestration of capture and scoring
//!
//! Re-exports only. All logic in submodules.

mod exercise;
mod verdict;

pub use exercise::{ExerciseSession, SampleOutcome};
pub use verdict::{PracticeReason, RepCounter, Verdict};
