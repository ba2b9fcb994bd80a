//! Linear time-warp of a frame sequence to a fixed length
//!
//! Lets a rep captured at any duration or frame rate be compared index for
//! index against the reference recording.

use super::landmarks::{PoseFrame, PoseLandmark, PoseSequence};

/// Resample `sequence` to `target_len` frames by linear interpolation.
///
/// - empty input or `target_len == 0` -> empty
/// - `target_len == 1` -> first frame
/// - same length -> copy
pub fn resample_to_length(sequence: &[PoseFrame], target_len: usize) -> PoseSequence {
    let source_len = sequence.len();
    if source_len == 0 || target_len == 0 {
        return PoseSequence::new();
    }
    if target_len == 1 {
        return vec![sequence[0].clone()];
    }
    if source_len == target_len {
        return sequence.to_vec();
    }

    let last = source_len - 1;
    (0..target_len)
        .map(|t| {
            let idx = t as f64 / (target_len - 1) as f64 * last as f64;
            let i0 = (idx.floor() as usize).min(last);
            let i1 = (i0 + 1).min(last);
            let frac = (idx - i0 as f64) as f32;
            lerp_frame(&sequence[i0], &sequence[i1], frac)
        })
        .collect()
}

/// Interpolate two frames over their common prefix
fn lerp_frame(a: &[PoseLandmark], b: &[PoseLandmark], frac: f32) -> PoseFrame {
    a.iter().zip(b).map(|(p, q)| lerp_landmark(p, q, frac)).collect()
}

fn lerp_landmark(p: &PoseLandmark, q: &PoseLandmark, frac: f32) -> PoseLandmark {
    let lerp = |a: f32, b: f32| a + (b - a) * frac;
    PoseLandmark {
        x: lerp(p.x, q.x),
        y: lerp(p.y, q.y),
        z: match (p.z, q.z) {
            (Some(a), Some(b)) => Some(lerp(a, b)),
            (a, b) => a.or(b),
        },
        visibility: p.visibility.or(q.visibility),
    }
}
