//! Landmark types and indices
//!
//! A frame is an index-addressed list of landmarks following the
//! MediaPipe Pose body model (33 points). Frames coming off the estimator
//! can be truncated, so every lookup goes through `landmark()`.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;
pub const LEFT_HEEL: usize = 29;
pub const RIGHT_HEEL: usize = 30;
pub const LEFT_FOOT_INDEX: usize = 31;
pub const RIGHT_FOOT_INDEX: usize = 32;

/// Number of landmarks in a complete body frame
pub const LANDMARK_COUNT: usize = 33;

// ============================================================================
// LANDMARK DATA STRUCTURES
// ============================================================================

/// A single body landmark in provider coordinates (x/y roughly 0-1)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseLandmark {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

/// One estimator sample; the index is the joint id
pub type PoseFrame = Vec<PoseLandmark>;

/// Frames in temporal order (one rep or a capture window)
pub type PoseSequence = Vec<PoseFrame>;

impl PoseLandmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: None, visibility: None }
    }

    pub fn with_z(mut self, z: f32) -> Self {
        self.z = Some(z);
        self
    }

    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Offset to `other` as a 3D vector. Depth only counts when both
    /// landmarks carry it.
    pub fn delta(&self, other: &PoseLandmark) -> Vector3<f32> {
        let dz = match (self.z, other.z) {
            (Some(a), Some(b)) => b - a,
            _ => 0.0,
        };
        Vector3::new(other.x - self.x, other.y - self.y, dz)
    }

    /// Euclidean distance, ignoring depth unless both sides have it
    pub fn distance(&self, other: &PoseLandmark) -> f32 {
        self.delta(other).norm()
    }

    /// Distance in the image plane only. Estimator depth lives on a
    /// different scale than x/y, so image-plane thresholds use this.
    pub fn planar_distance(&self, other: &PoseLandmark) -> f32 {
        self.delta(other).xy().norm()
    }

    /// Midpoint of two landmarks. Visibility is not meaningful for a
    /// synthetic point and is dropped.
    pub fn midpoint(&self, other: &PoseLandmark) -> PoseLandmark {
        PoseLandmark {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
            z: match (self.z, other.z) {
                (Some(a), Some(b)) => Some((a + b) * 0.5),
                _ => None,
            },
            visibility: None,
        }
    }
}

/// Index-checked lookup into a (possibly truncated) frame
pub fn landmark(frame: &[PoseLandmark], index: usize) -> Option<&PoseLandmark> {
    frame.get(index)
}

/// Midpoint of two joints, if both are present
pub fn joint_midpoint(frame: &[PoseLandmark], a: usize, b: usize) -> Option<PoseLandmark> {
    Some(landmark(frame, a)?.midpoint(landmark(frame, b)?))
}
