//! Landmark decoding and stateless comparison for JavaScript
//!
//! The host either hands over MediaPipe results as a flat Float32Array or
//! as JSON text. Both degrade to an empty frame on bad input.

use wasm_bindgen::prelude::*;

use crate::pose::{
    adapt, adapt_flat, compare_reps, CompareOptions, PoseFrame, PoseSequence, ReferencePoseSequence,
};

/// Floats per landmark in the default MediaPipe layout (x, y, z)
pub const DEFAULT_STRIDE: usize = 3;

/// Decode a flat landmark array, warning on a malformed layout
pub(crate) fn decode_flat(data: &[f32], stride: usize) -> PoseFrame {
    let frame = adapt_flat(data, stride);
    if frame.is_empty() && !data.is_empty() {
        web_sys::console::warn_1(
            &format!("Invalid landmark data length: {} (stride {})", data.len(), stride).into(),
        );
    }
    frame
}

/// Decode a JSON array of provider payloads into a sequence; unusable
/// payloads are skipped
pub(crate) fn decode_sequence_json(json: &str) -> PoseSequence {
    match serde_json::from_str::<serde_json::Value>(json) {
        Ok(serde_json::Value::Array(payloads)) => payloads
            .iter()
            .map(adapt)
            .filter(|frame| !frame.is_empty())
            .collect(),
        _ => PoseSequence::new(),
    }
}

/// Distance between a captured sequence (JSON array of payloads) and a
/// reference document. Infinity when nothing is comparable.
#[wasm_bindgen]
pub fn compare_rep_json(user_json: &str, reference_json: &str) -> Result<f32, JsValue> {
    let reference = ReferencePoseSequence::from_json(reference_json)?;
    let user = decode_sequence_json(user_json);
    Ok(compare_reps(&user, &reference.sequence, &CompareOptions::default()))
}

/// Match decision for a captured sequence against a reference document
#[wasm_bindgen]
pub fn is_rep_match_json(
    user_json: &str,
    reference_json: &str,
    threshold: f32,
) -> Result<bool, JsValue> {
    Ok(compare_rep_json(user_json, reference_json)? < threshold)
}
