//! Engine configuration
//!
//! Every tunable of a session in one place. The host passes it as JSON;
//! missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::detector::{
    PhaseProfile, PhaseThresholds, RepTiming, BUFFER_CAPACITY, MIN_REP_FRAMES, REP_COOLDOWN_MS,
};
use crate::error::EngineError;
use crate::pose::{MovementClass, DEFAULT_MATCH_THRESHOLD};

/// Which path turns frames into reps
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureMode {
    /// Rep detector segments the stream on its own
    #[default]
    Auto,
    /// Frames are buffered until the user triggers a capture
    Manual,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Distance below which a rep matches the reference
    pub match_threshold: f32,
    /// Shorter references put the session in practice mode
    pub min_reference_frames: usize,
    /// Manual-capture window size
    pub buffer_capacity: usize,
    /// Minimum spacing between accepted samples (ms)
    pub sample_interval_ms: f64,
    /// Pause after a detected rep (ms)
    pub rep_cooldown_ms: f64,
    /// Frames a detected or captured rep needs to be scored
    pub min_rep_frames: usize,
    /// Normalize user frames before comparison
    pub normalize_user: bool,
    pub capture_mode: CaptureMode,
    /// Replaces the class's default phase thresholds
    pub phase_thresholds: Option<PhaseThresholds>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            min_reference_frames: 5,
            buffer_capacity: BUFFER_CAPACITY,
            sample_interval_ms: 100.0,
            rep_cooldown_ms: REP_COOLDOWN_MS,
            min_rep_frames: MIN_REP_FRAMES,
            normalize_user: true,
            capture_mode: CaptureMode::Auto,
            phase_thresholds: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(EngineError::InvalidConfig)
    }

    /// Phase profile for `class` with any threshold override applied
    pub fn phase_profile(&self, class: MovementClass) -> PhaseProfile {
        let profile = PhaseProfile::for_class(class);
        match self.phase_thresholds {
            Some(thresholds) => profile.with_thresholds(thresholds),
            None => profile,
        }
    }

    pub fn rep_timing(&self) -> RepTiming {
        RepTiming {
            min_rep_frames: self.min_rep_frames,
            cooldown_ms: self.rep_cooldown_ms,
            stall_frames: self.buffer_capacity,
        }
    }
}
