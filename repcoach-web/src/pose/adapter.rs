//! Landmark adapter - provider payload to `PoseFrame`
//!
//! The pose estimator hands us either a bare landmark array or an object
//! wrapping one under `landmarks`. Anything else becomes an empty frame,
//! which downstream stages treat as "no data this tick".

use serde_json::Value;

use super::landmarks::{PoseFrame, PoseLandmark};

/// Convert a provider payload into a frame. Never fails.
pub fn adapt(raw: &Value) -> PoseFrame {
    let records = match raw {
        Value::Array(records) => records,
        Value::Object(map) => match map.get("landmarks") {
            Some(Value::Array(records)) => records,
            _ => return PoseFrame::new(),
        },
        _ => return PoseFrame::new(),
    };

    // A single bad record would shift every later joint id, so reject the frame
    records
        .iter()
        .map(adapt_record)
        .collect::<Option<PoseFrame>>()
        .unwrap_or_default()
}

/// Parse JSON text first; unparsable text is an empty frame
pub fn adapt_json(raw: &str) -> PoseFrame {
    serde_json::from_str::<Value>(raw)
        .map(|value| adapt(&value))
        .unwrap_or_default()
}

/// Decode a flat `Float32Array` from the JS host.
///
/// Supported strides:
/// - 2: x, y
/// - 3: x, y, z (the MediaPipe 99-float layout)
/// - 4: x, y, z, visibility
///
/// Any non-finite value rejects the whole frame.
pub fn adapt_flat(data: &[f32], stride: usize) -> PoseFrame {
    if !(2..=4).contains(&stride) || data.len() % stride != 0 {
        return PoseFrame::new();
    }
    // NaN or infinite coordinates are as unusable as a bad length
    if data.iter().any(|v| !v.is_finite()) {
        return PoseFrame::new();
    }

    data.chunks_exact(stride)
        .map(|chunk| PoseLandmark {
            x: chunk[0],
            y: chunk[1],
            z: chunk.get(2).copied(),
            visibility: chunk.get(3).copied(),
        })
        .collect()
}

fn adapt_record(record: &Value) -> Option<PoseLandmark> {
    let number = |key: &str| {
        record
            .get(key)
            .and_then(Value::as_f64)
            .map(|v| v as f32)
            .filter(|v| v.is_finite())
    };

    Some(PoseLandmark {
        x: number("x")?,
        y: number("y")?,
        z: number("z"),
        visibility: number("visibility"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array() {
        let frame = adapt(&json!([
            {"x": 0.1, "y": 0.2},
            {"x": 0.3, "y": 0.4, "z": -0.1, "visibility": 0.95}
        ]));
        assert_eq!(frame.len(), 2);
        assert_eq!(frame[0], PoseLandmark::new(0.1, 0.2));
        assert_eq!(frame[1].z, Some(-0.1));
        assert_eq!(frame[1].visibility, Some(0.95));
    }

    #[test]
    fn test_wrapped_array() {
        let frame = adapt(&json!({"landmarks": [{"x": 0.5, "y": 0.5}], "score": 0.8}));
        assert_eq!(frame, vec![PoseLandmark::new(0.5, 0.5)]);
    }

    #[test]
    fn test_unrecognized_shapes_are_empty() {
        assert!(adapt(&json!(null)).is_empty());
        assert!(adapt(&json!(42)).is_empty());
        assert!(adapt(&json!("landmarks")).is_empty());
        assert!(adapt(&json!({"points": []})).is_empty());
        assert!(adapt(&json!({"landmarks": {"x": 1}})).is_empty());
        assert!(adapt(&json!([{"x": 0.1}])).is_empty());
        assert!(adapt(&json!([{"x": "0.1", "y": 0.2}])).is_empty());
    }

    #[test]
    fn test_non_numeric_optionals_are_dropped() {
        let frame = adapt(&json!([{"x": 0.1, "y": 0.2, "z": null, "visibility": "high"}]));
        assert_eq!(frame, vec![PoseLandmark::new(0.1, 0.2)]);
    }

    #[test]
    fn test_adapt_json_text() {
        assert_eq!(adapt_json(r#"[{"x":1,"y":2}]"#).len(), 1);
        assert!(adapt_json("not json").is_empty());
    }

    #[test]
    fn test_flat_layouts() {
        let frame = adapt_flat(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6], 3);
        assert_eq!(frame.len(), 2);
        assert_eq!(frame[1].z, Some(0.6));
        assert_eq!(frame[1].visibility, None);

        let frame = adapt_flat(&[0.1, 0.2, 0.3, 0.9], 4);
        assert_eq!(frame[0].visibility, Some(0.9));

        let frame = adapt_flat(&[0.1, 0.2], 2);
        assert_eq!(frame[0], PoseLandmark::new(0.1, 0.2));
    }

    #[test]
    fn test_flat_non_finite_is_empty() {
        assert!(adapt_flat(&[0.1, f32::NAN, 0.3, 0.4, 0.5, 0.6], 3).is_empty());
        assert!(adapt_flat(&[0.1, 0.2, f32::INFINITY, 0.4], 4).is_empty());
        assert!(adapt_flat(&[0.1, 0.2, 0.3, f32::NEG_INFINITY], 2).is_empty());
    }

    #[test]
    fn test_out_of_range_numbers_are_rejected() {
        // fits an f64 but overflows f32
        assert!(adapt(&json!([{"x": 1e300, "y": 0.2}])).is_empty());
        let frame = adapt(&json!([{"x": 0.1, "y": 0.2, "z": -1e300}]));
        assert_eq!(frame, vec![PoseLandmark::new(0.1, 0.2)]);
    }

    #[test]
    fn test_flat_bad_length_or_stride() {
        assert!(adapt_flat(&[0.1, 0.2, 0.3, 0.4], 3).is_empty());
        assert!(adapt_flat(&[0.1; 10], 5).is_empty());
        assert!(adapt_flat(&[0.1; 10], 1).is_empty());
    }
}
