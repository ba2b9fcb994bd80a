//! Movement classes and their landmark focus sets
//!
//! Comparison and detection only look at the body parts the drill moves:
//! upper body for strikes, lower body for kicks, everything otherwise.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::landmarks::*;
use crate::error::EngineError;

/// Exercise family, chosen once per session from module metadata
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementClass {
    Punching,
    Kicking,
    Full,
}

const PUNCHING_FOCUS: [usize; 9] = [
    NOSE,
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
];

const KICKING_FOCUS: [usize; 10] = [
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
    LEFT_HEEL, RIGHT_HEEL,
    LEFT_FOOT_INDEX, RIGHT_FOOT_INDEX,
];

const FULL_FOCUS: [usize; LANDMARK_COUNT] = {
    let mut indices = [0; LANDMARK_COUNT];
    let mut i = 0;
    while i < LANDMARK_COUNT {
        indices[i] = i;
        i += 1;
    }
    indices
};

impl MovementClass {
    pub fn name(&self) -> &'static str {
        match self {
            MovementClass::Punching => "punching",
            MovementClass::Kicking => "kicking",
            MovementClass::Full => "full",
        }
    }

    /// Landmark indices this class compares, in output order
    pub fn focus_indices(&self) -> &'static [usize] {
        match self {
            MovementClass::Punching => &PUNCHING_FOCUS,
            MovementClass::Kicking => &KICKING_FOCUS,
            MovementClass::Full => &FULL_FOCUS,
        }
    }
}

impl fmt::Display for MovementClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MovementClass {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "punching" => Ok(MovementClass::Punching),
            "kicking" => Ok(MovementClass::Kicking),
            "full" => Ok(MovementClass::Full),
            _ => Err(EngineError::UnknownMovementClass(s.to_string())),
        }
    }
}

/// Restrict a frame to the class's focus set.
///
/// Output follows the focus order, so two subsetted frames line up index
/// for index even when the raw frames had different lengths. Indices past
/// the end of the frame are skipped.
pub fn subset_frame(frame: &[PoseLandmark], class: MovementClass) -> PoseFrame {
    class
        .focus_indices()
        .iter()
        .filter_map(|&i| landmark(frame, i).copied())
        .collect()
}

pub fn subset_sequence(sequence: &[PoseFrame], class: MovementClass) -> PoseSequence {
    sequence.iter().map(|f| subset_frame(f, class)).collect()
}
