//! Frame normalization - body-centered, scale-invariant coordinates
//!
//! Translates so the mid-hip point is the origin and scales by the inverse
//! torso length (mid-shoulder to mid-hip). What remains is the relative
//! pose geometry, independent of where the user stands in the frame and
//! how far they are from the camera.

use super::landmarks::*;

/// Torso lengths below this are treated as degenerate
const MIN_TORSO_LENGTH: f32 = 1e-6;

/// Normalize one frame.
///
/// Returns `None` when the hips are missing: without a center there is no
/// meaningful body frame. Missing shoulders or a zero torso length fall
/// back to unit scale.
pub fn normalize_frame(frame: &[PoseLandmark]) -> Option<PoseFrame> {
    let center = joint_midpoint(frame, LEFT_HIP, RIGHT_HIP)?;

    let torso = joint_midpoint(frame, LEFT_SHOULDER, RIGHT_SHOULDER)
        .map(|shoulders| shoulders.distance(&center))
        .filter(|d| d.is_finite() && *d > MIN_TORSO_LENGTH)
        .unwrap_or(1.0);
    let body_scale = 1.0 / torso;

    let normalized = frame
        .iter()
        .map(|p| PoseLandmark {
            x: (p.x - center.x) * body_scale,
            y: (p.y - center.y) * body_scale,
            z: match (p.z, center.z) {
                (Some(z), Some(cz)) => Some((z - cz) * body_scale),
                _ => None,
            },
            visibility: p.visibility,
        })
        .collect();

    Some(normalized)
}

/// Normalize every frame; frames without hips are dropped
pub fn normalize_sequence(sequence: &[PoseFrame]) -> PoseSequence {
    sequence.iter().filter_map(|f| normalize_frame(f)).collect()
}
