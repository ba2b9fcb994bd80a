//! Error types for the host boundary
//!
//! The numerical core never fails; these only come out of parsing what the
//! host hands us (reference recordings, config, class names).

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid reference sequence: {0}")]
    InvalidReference(#[source] serde_json::Error),

    #[error("Invalid engine config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    #[error("Unknown movement class: {0:?} (expected punching, kicking or full)")]
    UnknownMovementClass(String),
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
