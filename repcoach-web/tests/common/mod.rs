//! Helpers shared by the integration tests. Skeletons come from
//! `repcoach_web::pose::fixtures`.

#![allow(dead_code)]

use repcoach_web::pose::*;

pub use repcoach_web::pose::fixtures::{body_frame, stance, with_joint};

pub fn lerp_frames(a: &[PoseLandmark], b: &[PoseLandmark], t: f32) -> PoseFrame {
    a.iter()
        .zip(b)
        .map(|(p, q)| PoseLandmark::new(p.x + (q.x - p.x) * t, p.y + (q.y - p.y) * t))
        .collect()
}

pub fn shift_joint(frame: &[PoseLandmark], index: usize, dx: f32, dy: f32) -> PoseFrame {
    let p = frame[index];
    with_joint(frame, index, p.x + dx, p.y + dy)
}

pub fn assert_frames_close(a: &[PoseLandmark], b: &[PoseLandmark], tol: f32) {
    assert_eq!(a.len(), b.len(), "frame lengths differ");
    for (i, (p, q)) in a.iter().zip(b).enumerate() {
        assert!(
            (p.x - q.x).abs() <= tol && (p.y - q.y).abs() <= tol,
            "landmark {}: ({}, {}) vs ({}, {})",
            i, p.x, p.y, q.x, q.y
        );
    }
}
