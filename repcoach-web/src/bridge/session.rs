//! Training session handle for JavaScript
//!
//! One `TrainingSession` per exercise screen. The host pushes every pose
//! estimator result in; a `RepResult` comes back whenever a rep is scored.

use wasm_bindgen::prelude::*;

use super::landmarks::{decode_flat, DEFAULT_STRIDE};
use crate::config::EngineConfig;
use crate::detector::RepPhase;
use crate::pose::{adapt_json, MovementClass, PoseFrame, ReferencePoseSequence};
use crate::session::{ExerciseSession, PracticeReason, SampleOutcome, Verdict};

/// Scored rep as seen by the UI
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct RepResult {
    verdict: Verdict,
    correct_reps: u32,
    total_reps: u32,
}

#[wasm_bindgen]
impl RepResult {
    /// Counts as a correct rep (matches, or accepted in practice mode)
    #[wasm_bindgen(getter)]
    pub fn correct(&self) -> bool {
        self.verdict.is_correct()
    }

    #[wasm_bindgen(getter)]
    pub fn practice(&self) -> bool {
        self.verdict.is_practice()
    }

    /// Distance to the reference, absent in practice mode
    #[wasm_bindgen(getter)]
    pub fn distance(&self) -> Option<f32> {
        self.verdict.distance()
    }

    /// "match", "mismatch" or the practice-mode reason
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        match self.verdict {
            Verdict::Match { .. } => "match",
            Verdict::Mismatch { .. } => "mismatch",
            Verdict::Practice(PracticeReason::NoReference) => "no-reference",
            Verdict::Practice(PracticeReason::ShortReference) => "short-reference",
            Verdict::Practice(PracticeReason::ShortCapture) => "short-capture",
            Verdict::Practice(PracticeReason::Unscorable) => "unscorable",
        }
        .to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn correct_reps(&self) -> u32 {
        self.correct_reps
    }

    #[wasm_bindgen(getter)]
    pub fn total_reps(&self) -> u32 {
        self.total_reps
    }
}

#[wasm_bindgen]
pub struct TrainingSession {
    inner: ExerciseSession,
}

#[wasm_bindgen]
impl TrainingSession {
    /// `movement_class`: "punching", "kicking" or "full".
    /// `config_json`: optional partial `EngineConfig` (camelCase keys).
    #[wasm_bindgen(constructor)]
    pub fn new(
        movement_class: &str,
        config_json: Option<String>,
    ) -> Result<TrainingSession, JsValue> {
        let class: MovementClass = movement_class.parse()?;
        let config = match config_json {
            Some(json) => EngineConfig::from_json(&json)?,
            None => EngineConfig::default(),
        };
        let inner = ExerciseSession::new(class, config);
        crate::console_log!(
            "🥋 Session started: {} ({:?} capture)",
            inner.class(),
            inner.config().capture_mode
        );
        Ok(Self { inner })
    }

    /// Class name the session was created with
    #[wasm_bindgen(getter)]
    pub fn movement_class(&self) -> String {
        self.inner.class().name().to_string()
    }

    /// Load the module's reference recording (ReferencePoseSequence JSON)
    pub fn load_reference(&mut self, json: &str) -> Result<(), JsValue> {
        let reference = ReferencePoseSequence::from_json(json)?;
        let frames = reference.sequence.len();
        let module = reference.module_id.clone();
        self.inner.set_reference(reference);
        if self.inner.is_practice_mode() {
            web_sys::console::warn_1(
                &format!("Reference {} has {} frames, practice mode", module, frames).into(),
            );
        } else {
            crate::console_log!("✅ Reference {} loaded ({} frames)", module, frames);
        }
        Ok(())
    }

    /// Push a flat landmark array stamped with the current time.
    /// `stride`: floats per landmark (2, 3 or 4); 0 means x, y, z.
    pub fn push_landmarks(&mut self, data: &[f32], stride: usize) -> Option<RepResult> {
        self.push_landmarks_at(data, stride, js_sys::Date::now())
    }

    /// Push a flat landmark array with an explicit timestamp (ms)
    pub fn push_landmarks_at(
        &mut self,
        data: &[f32],
        stride: usize,
        now: f64,
    ) -> Option<RepResult> {
        let stride = if stride == 0 { DEFAULT_STRIDE } else { stride };
        let frame = decode_flat(data, stride);
        self.push(frame, now)
    }

    /// Push a provider payload as JSON (`[...]` or `{landmarks: [...]}`)
    pub fn push_landmarks_json(&mut self, json: &str, now: f64) -> Option<RepResult> {
        self.push(adapt_json(json), now)
    }

    /// Manual "I did a rep" trigger
    pub fn capture_rep(&mut self) -> RepResult {
        let verdict = self.inner.capture_rep();
        self.result(verdict)
    }

    pub fn correct_reps(&self) -> u32 {
        self.inner.counter().correct
    }

    pub fn total_reps(&self) -> u32 {
        self.inner.counter().total
    }

    pub fn is_practice_mode(&self) -> bool {
        self.inner.is_practice_mode()
    }

    /// Current detector phase, for on-screen cues
    pub fn phase(&self) -> String {
        match self.inner.phase() {
            RepPhase::Idle => "idle",
            RepPhase::Extended => "extended",
            RepPhase::Retracted => "retracted",
            RepPhase::Cooldown => "cooldown",
        }
        .to_string()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl TrainingSession {
    fn push(&mut self, frame: PoseFrame, now: f64) -> Option<RepResult> {
        match self.inner.push_frame(frame, now) {
            SampleOutcome::Rep(verdict) => {
                let result = self.result(verdict);
                crate::console_log!(
                    "🥊 Rep {}: {} ({}/{})",
                    result.total_reps,
                    result.kind(),
                    result.correct_reps,
                    result.total_reps
                );
                Some(result)
            }
            _ => None,
        }
    }

    fn result(&self, verdict: Verdict) -> RepResult {
        let counter = self.inner.counter();
        RepResult {
            verdict,
            correct_reps: counter.correct,
            total_reps: counter.total,
        }
    }
}
