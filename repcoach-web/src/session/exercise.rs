//! Exercise session - one user working through one module
//!
//! Owns the only mutable state of the engine: sample throttle, capture
//! buffer, rep detector and counters. Frames come in raw; completed reps
//! come out as verdicts.

use tracing::{debug, trace};

use super::verdict::{PracticeReason, RepCounter, Verdict};
use crate::config::{CaptureMode, EngineConfig};
use crate::detector::{FrameBuffer, RepDetector, RepPhase, RepTick};
use crate::pose::{compare_reps, CompareOptions, MovementClass, PoseFrame, ReferencePoseSequence};

/// What happened to one pushed frame
#[derive(Clone, Debug, PartialEq)]
pub enum SampleOutcome {
    /// Empty frame from the adapter
    NoData,
    /// Arrived before the sample interval elapsed
    Throttled,
    /// Stored for the next manual capture
    Buffered,
    /// Fed to the detector; no rep finished
    Tracking(RepPhase),
    /// Detector finished a rep and it was scored
    Rep(Verdict),
}

pub struct ExerciseSession {
    class: MovementClass,
    config: EngineConfig,
    reference: Option<ReferencePoseSequence>,
    buffer: FrameBuffer,
    detector: RepDetector,
    counter: RepCounter,
    last_sample_at: Option<f64>,
}

impl ExerciseSession {
    pub fn new(class: MovementClass, config: EngineConfig) -> Self {
        let detector = RepDetector::new(config.phase_profile(class), config.rep_timing());
        Self {
            class,
            buffer: FrameBuffer::with_capacity(config.buffer_capacity),
            detector,
            config,
            reference: None,
            counter: RepCounter::default(),
            last_sample_at: None,
        }
    }

    pub fn with_reference(mut self, reference: ReferencePoseSequence) -> Self {
        self.set_reference(reference);
        self
    }

    pub fn set_reference(&mut self, reference: ReferencePoseSequence) {
        if !reference.is_usable(self.config.min_reference_frames) {
            debug!(
                module = %reference.module_id,
                frames = reference.sequence.len(),
                "reference too short, practice mode"
            );
        }
        self.reference = Some(reference);
    }

    pub fn class(&self) -> MovementClass {
        self.class
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn counter(&self) -> RepCounter {
        self.counter
    }

    pub fn phase(&self) -> RepPhase {
        self.detector.phase()
    }

    pub fn buffered_frames(&self) -> usize {
        self.buffer.len()
    }

    /// Reps are accepted without comparison
    pub fn is_practice_mode(&self) -> bool {
        self.usable_reference().is_none()
    }

    /// Feed one raw frame at time `now` (ms)
    pub fn push_frame(&mut self, frame: PoseFrame, now: f64) -> SampleOutcome {
        if frame.is_empty() {
            return SampleOutcome::NoData;
        }
        if let Some(last) = self.last_sample_at {
            if now - last < self.config.sample_interval_ms {
                trace!(now, last, "sample throttled");
                return SampleOutcome::Throttled;
            }
        }
        self.last_sample_at = Some(now);

        match self.config.capture_mode {
            CaptureMode::Manual => {
                self.buffer.push(frame);
                SampleOutcome::Buffered
            }
            CaptureMode::Auto => match self.detector.tick(&frame, now) {
                RepTick::Complete(segment) => SampleOutcome::Rep(self.score(&segment)),
                RepTick::Pending => SampleOutcome::Tracking(self.detector.phase()),
            },
        }
    }

    /// Manual "I did a rep": score and clear the buffered window
    pub fn capture_rep(&mut self) -> Verdict {
        let segment = self.buffer.drain();
        self.score(&segment)
    }

    /// Judge a segment against the reference without touching the counter
    pub fn evaluate(&self, segment: &[PoseFrame]) -> Verdict {
        let reference = match (&self.reference, self.usable_reference()) {
            (None, _) => return Verdict::Practice(PracticeReason::NoReference),
            (Some(_), None) => return Verdict::Practice(PracticeReason::ShortReference),
            (_, Some(reference)) => reference,
        };
        if segment.len() < self.config.min_rep_frames {
            return Verdict::Practice(PracticeReason::ShortCapture);
        }

        let options = CompareOptions {
            normalize_user: self.config.normalize_user,
            focus: Some(self.class),
        };
        let distance = compare_reps(segment, &reference.sequence, &options);
        if !distance.is_finite() {
            Verdict::Practice(PracticeReason::Unscorable)
        } else if distance < self.config.match_threshold {
            Verdict::Match { distance }
        } else {
            Verdict::Mismatch { distance }
        }
    }

    /// Clear counters, buffered frames and detector state
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.detector.reset();
        self.counter.reset();
        self.last_sample_at = None;
    }

    fn score(&mut self, segment: &[PoseFrame]) -> Verdict {
        let verdict = self.evaluate(segment);
        self.counter.record(&verdict);
        debug!(
            class = %self.class,
            frames = segment.len(),
            ?verdict,
            correct = self.counter.correct,
            total = self.counter.total,
            "rep scored"
        );
        verdict
    }

    fn usable_reference(&self) -> Option<&ReferencePoseSequence> {
        self.reference
            .as_ref()
            .filter(|r| r.is_usable(self.config.min_reference_frames))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::{Crossing, SignalKind};
    use crate::pose::fixtures::{stance, with_joint};
    use crate::pose::*;

    fn squat_reference() -> ReferencePoseSequence {
        let frames: Vec<PoseFrame> = (0..10).map(|i| stance(0.40 + i as f32 * 0.015)).collect();
        ReferencePoseSequence::new("squat-01", frames)
    }

    /// Push a full-class squat rep at 100 ms spacing; returns verdicts
    fn push_squat(session: &mut ExerciseSession, start: f64) -> Vec<Verdict> {
        let mut frames = vec![stance(0.55); 5];
        frames.extend(vec![stance(0.40); 5]);
        frames
            .into_iter()
            .enumerate()
            .filter_map(|(i, f)| match session.push_frame(f, start + i as f64 * 100.0) {
                SampleOutcome::Rep(v) => Some(v),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_no_reference_is_practice() {
        let mut session = ExerciseSession::new(MovementClass::Full, EngineConfig::default());
        assert!(session.is_practice_mode());
        let verdicts = push_squat(&mut session, 0.0);
        assert_eq!(verdicts, vec![Verdict::Practice(PracticeReason::NoReference)]);
        assert_eq!(session.counter(), RepCounter { total: 1, correct: 1 });
    }

    #[test]
    fn test_short_reference_is_practice() {
        let reference = ReferencePoseSequence::new("squat-01", vec![stance(0.5); 3]);
        let session = ExerciseSession::new(MovementClass::Full, EngineConfig::default())
            .with_reference(reference);
        assert!(session.is_practice_mode());
        assert_eq!(
            session.evaluate(&vec![stance(0.5); 6]),
            Verdict::Practice(PracticeReason::ShortReference)
        );
    }

    #[test]
    fn test_auto_rep_matches_reference() {
        let mut session = ExerciseSession::new(MovementClass::Full, EngineConfig::default())
            .with_reference(squat_reference());
        let verdicts = push_squat(&mut session, 0.0);
        assert_eq!(verdicts.len(), 1);
        assert!(matches!(verdicts[0], Verdict::Match { .. }), "{:?}", verdicts[0]);
        assert_eq!(session.counter().correct, 1);
    }

    #[test]
    fn test_throttle() {
        let mut session = ExerciseSession::new(MovementClass::Full, EngineConfig::default());
        assert_ne!(session.push_frame(stance(0.4), 0.0), SampleOutcome::Throttled);
        assert_eq!(session.push_frame(stance(0.4), 50.0), SampleOutcome::Throttled);
        assert_eq!(session.push_frame(stance(0.4), 100.0), SampleOutcome::Tracking(RepPhase::Idle));
        assert_eq!(session.push_frame(Vec::new(), 300.0), SampleOutcome::NoData);
    }

    #[test]
    fn test_manual_capture_mismatch() {
        let config = EngineConfig { capture_mode: CaptureMode::Manual, ..Default::default() };
        let mut session = ExerciseSession::new(MovementClass::Punching, config)
            .with_reference(ReferencePoseSequence::new("jab-01", vec![stance(0.6); 8]));

        // both wrists dropped far below the guard
        let base = stance(0.6);
        let sloppy = with_joint(
            &with_joint(&base, LEFT_WRIST, 0.3, 0.9),
            RIGHT_WRIST,
            0.7,
            0.9,
        );
        for i in 0..6 {
            assert_eq!(
                session.push_frame(sloppy.clone(), i as f64 * 100.0),
                SampleOutcome::Buffered
            );
        }
        assert_eq!(session.buffered_frames(), 6);

        let verdict = session.capture_rep();
        assert!(matches!(verdict, Verdict::Mismatch { .. }), "{:?}", verdict);
        assert_eq!(session.buffered_frames(), 0);
        assert_eq!(session.counter(), RepCounter { total: 1, correct: 0 });
    }

    #[test]
    fn test_manual_capture_too_short() {
        let config = EngineConfig { capture_mode: CaptureMode::Manual, ..Default::default() };
        let mut session = ExerciseSession::new(MovementClass::Full, config)
            .with_reference(squat_reference());
        session.push_frame(stance(0.5), 0.0);
        assert_eq!(session.capture_rep(), Verdict::Practice(PracticeReason::ShortCapture));
    }

    #[test]
    fn test_unscorable_capture() {
        let config = EngineConfig { capture_mode: CaptureMode::Manual, ..Default::default() };
        let mut session = ExerciseSession::new(MovementClass::Full, config)
            .with_reference(squat_reference());
        for i in 0..6 {
            session.push_frame(stance(0.5)[..20].to_vec(), i as f64 * 100.0);
        }
        assert_eq!(session.capture_rep(), Verdict::Practice(PracticeReason::Unscorable));
    }

    #[test]
    fn test_config_reaches_detector() {
        let config = EngineConfig::from_json(
            r#"{"phaseThresholds": {"extend": 0.35, "retract": 0.1}, "matchThreshold": 0.05}"#,
        )
        .unwrap();
        let session = ExerciseSession::new(MovementClass::Punching, config);
        assert_eq!(session.class(), MovementClass::Punching);
        assert_eq!(session.config().match_threshold, 0.05);

        let profile = session.detector.profile();
        assert_eq!(profile.signal, SignalKind::ArmExtension);
        assert_eq!(profile.extend, Crossing::Above(0.35));
        assert_eq!(profile.retract, Crossing::Below(0.1));
    }

    #[test]
    fn test_reset() {
        let mut session = ExerciseSession::new(MovementClass::Full, EngineConfig::default());
        push_squat(&mut session, 0.0);
        session.reset();
        assert_eq!(session.counter(), RepCounter::default());
        assert_eq!(session.phase(), RepPhase::Idle);
        // throttle forgotten too
        assert_ne!(session.push_frame(stance(0.4), 0.0), SampleOutcome::Throttled);
    }
}
