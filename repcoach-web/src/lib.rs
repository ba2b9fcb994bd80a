//! RepCoach Web - pose comparison and rep detection for self-defense drills
//!
//! Entry point for the WASM module. Only contains:
//! - Module declarations
//! - Console logging and the panic hook
//!
//! The engine itself (`pose`, `detector`, `session`) is plain Rust and
//! usable natively; `bridge` is the JavaScript surface.

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[doc(hidden)]
pub fn console_write(s: &str) {
    log(s);
}

#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => ($crate::console_write(&format_args!($($t)*).to_string()))
}

// ============================================================================
// MODULES
// ============================================================================

mod bridge;
pub mod config;
pub mod detector;
pub mod error;
pub mod pose;
pub mod session;

// Re-export wasm_bindgen types for JS access
pub use bridge::{compare_rep_json, is_rep_match_json, RepResult, TrainingSession};
pub use config::{CaptureMode, EngineConfig};
pub use error::EngineError;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
