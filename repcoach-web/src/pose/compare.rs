//! Rep comparison - mean per-frame landmark distance
//!
//! Both sequences are normalized, optionally cut down to a movement focus
//! set, and the user rep is time-warped to the reference length before the
//! frame-by-frame distance is averaged. Lower is better.

use super::focus::{subset_sequence, MovementClass};
use super::landmarks::{PoseFrame, PoseLandmark};
use super::normalize::normalize_sequence;
use super::resample::resample_to_length;

/// Distance below which a rep counts as correct form
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompareOptions {
    /// Normalize the user sequence (the reference is always normalized)
    pub normalize_user: bool,
    /// Restrict both sequences to this class's landmarks after normalization
    pub focus: Option<MovementClass>,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            normalize_user: true,
            focus: None,
        }
    }
}

/// Mean Euclidean distance between corresponding landmarks.
///
/// Depth counts only when both sides carry it; visibility is ignored.
/// `None` when the frames share no landmarks.
pub fn frame_distance(a: &[PoseLandmark], b: &[PoseLandmark]) -> Option<f32> {
    let count = a.len().min(b.len());
    if count == 0 {
        return None;
    }
    let total: f32 = a.iter().zip(b).map(|(p, q)| p.distance(q)).sum();
    Some(total / count as f32)
}

/// Score a user rep against a reference rep. Frames whose distance is not
/// finite are left out. `f32::INFINITY` when there is nothing to compare.
pub fn compare_reps(user: &[PoseFrame], reference: &[PoseFrame], options: &CompareOptions) -> f32 {
    if user.is_empty() || reference.is_empty() {
        return f32::INFINITY;
    }

    let mut reference = normalize_sequence(reference);
    let mut user = if options.normalize_user {
        normalize_sequence(user)
    } else {
        user.to_vec()
    };

    if let Some(class) = options.focus {
        reference = subset_sequence(&reference, class);
        user = subset_sequence(&user, class);
    }

    let user = resample_to_length(&user, reference.len());

    let distances: Vec<f32> = reference
        .iter()
        .zip(&user)
        .filter_map(|(r, u)| frame_distance(u, r))
        .filter(|d| d.is_finite())
        .collect();

    if distances.is_empty() {
        return f32::INFINITY;
    }
    distances.iter().sum::<f32>() / distances.len() as f32
}

/// True when the rep distance is strictly below `threshold`
pub fn is_rep_match(user: &[PoseFrame], reference: &[PoseFrame], threshold: f32) -> bool {
    compare_reps(user, reference, &CompareOptions::default()) < threshold
}
