//! Pre-recorded reference rep for a training module

use serde::{Deserialize, Serialize};

use super::landmarks::PoseSequence;
use crate::error::EngineError;

/// Canonical repetition supplied by module storage. Read-only once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferencePoseSequence {
    pub module_id: String,
    #[serde(default)]
    pub frame_count: usize,
    #[serde(default)]
    pub landmarks_per_frame: usize,
    pub sequence: PoseSequence,
}

impl ReferencePoseSequence {
    pub fn new(module_id: impl Into<String>, sequence: PoseSequence) -> Self {
        Self {
            module_id: module_id.into(),
            frame_count: sequence.len(),
            landmarks_per_frame: sequence.first().map_or(0, Vec::len),
            sequence,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(EngineError::InvalidReference)
    }

    /// Enough frames to compare against; shorter references mean practice mode
    pub fn is_usable(&self, min_frames: usize) -> bool {
        self.sequence.len() >= min_frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "moduleId": "front-kick-01",
        "frameCount": 2,
        "landmarksPerFrame": 2,
        "sequence": [
            [{"x": 0.1, "y": 0.2}, {"x": 0.3, "y": 0.4, "visibility": 0.9}],
            [{"x": 0.1, "y": 0.25, "z": 0.0}, {"x": 0.3, "y": 0.45}]
        ]
    }"#;

    #[test]
    fn test_parse_document() {
        let reference = ReferencePoseSequence::from_json(DOC).unwrap();
        assert_eq!(reference.module_id, "front-kick-01");
        assert_eq!(reference.frame_count, 2);
        assert_eq!(reference.sequence.len(), 2);
        assert_eq!(reference.sequence[0][1].visibility, Some(0.9));
        assert_eq!(reference.sequence[1][0].z, Some(0.0));
    }

    #[test]
    fn test_usable_length() {
        let reference = ReferencePoseSequence::from_json(DOC).unwrap();
        assert!(reference.is_usable(2));
        assert!(!reference.is_usable(5));
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            ReferencePoseSequence::from_json(r#"{"moduleId": "x"}"#),
            Err(EngineError::InvalidReference(_))
        ));
        assert!(ReferencePoseSequence::from_json("[]").is_err());
    }

    #[test]
    fn test_new_fills_counts() {
        let reference = ReferencePoseSequence::new("jab", vec![vec![Default::default(); 33]; 4]);
        assert_eq!(reference.frame_count, 4);
        assert_eq!(reference.landmarks_per_frame, 33);
    }
}
