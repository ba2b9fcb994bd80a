//! Synthetic skeletons for unit and integration tests

use super::landmarks::*;

/// Joint offsets from the hip center for a guard stance. Torso length
/// (mid-shoulder to mid-hip) is 0.15 at unit scale.
const STANCE: [(f32, f32); LANDMARK_COUNT] = [
    (0.0, -0.28),                                            // nose
    (-0.01, -0.30), (-0.02, -0.30), (-0.03, -0.30),          // left eye
    (0.01, -0.30), (0.02, -0.30), (0.03, -0.30),             // right eye
    (-0.04, -0.29), (0.04, -0.29),                           // ears
    (-0.01, -0.26), (0.01, -0.26),                           // mouth
    (-0.08, -0.15), (0.08, -0.15),                           // shoulders
    (-0.11, -0.08), (0.11, -0.08),                           // elbows
    (-0.06, -0.22), (0.06, -0.22),                           // wrists (guard)
    (-0.07, -0.24), (0.07, -0.24),                           // pinky
    (-0.065, -0.245), (0.065, -0.245),                       // index
    (-0.055, -0.235), (0.055, -0.235),                       // thumb
    (-0.05, 0.0), (0.05, 0.0),                               // hips
    (-0.05, 0.12), (0.05, 0.12),                             // knees
    (-0.05, 0.24), (0.05, 0.24),                             // ankles
    (-0.055, 0.26), (0.055, 0.26),                           // heels
    (-0.07, 0.27), (0.07, 0.27),                             // foot index
];

/// Full 33-point frame with the hip center at (`cx`, `hip_y`)
pub fn body_frame(cx: f32, hip_y: f32, scale: f32) -> PoseFrame {
    STANCE
        .iter()
        .map(|&(ox, oy)| PoseLandmark::new(cx + ox * scale, hip_y + oy * scale))
        .collect()
}

/// Neutral stance centered horizontally
pub fn stance(hip_y: f32) -> PoseFrame {
    body_frame(0.5, hip_y, 1.0)
}

/// Copy of `frame` with one joint moved
pub fn with_joint(frame: &[PoseLandmark], index: usize, x: f32, y: f32) -> PoseFrame {
    let mut out = frame.to_vec();
    out[index].x = x;
    out[index].y = y;
    out
}
