//! Repetition detector - one phase machine for every movement class
//!
//! Idle -> Extended -> Retracted -> Cooldown -> Idle. The class only decides
//! which signal is watched and where the two thresholds sit (see
//! `PhaseProfile`). The transition itself is the pure `step` function;
//! `RepDetector` just owns the state between ticks.

use tracing::debug;

use super::buffer::BUFFER_CAPACITY;
use super::signal::PhaseProfile;
use crate::pose::{MovementClass, PoseFrame, PoseLandmark, PoseSequence};

/// Minimum frames for a rep to count; shorter movements are noise
pub const MIN_REP_FRAMES: usize = 5;

/// Pause after an emitted rep so one movement is not counted twice (ms)
pub const REP_COOLDOWN_MS: f64 = 1000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepPhase {
    #[default]
    Idle,
    Extended,
    Retracted,
    Cooldown,
}

/// Timing limits of the phase machine
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepTiming {
    pub min_rep_frames: usize,
    pub cooldown_ms: f64,
    /// Segment length at which a rep that never retracts is reported
    pub stall_frames: usize,
}

impl Default for RepTiming {
    fn default() -> Self {
        Self {
            min_rep_frames: MIN_REP_FRAMES,
            cooldown_ms: REP_COOLDOWN_MS,
            stall_frames: BUFFER_CAPACITY,
        }
    }
}

/// Everything the detector carries between frames
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RepDetectorState {
    pub phase: RepPhase,
    /// Frames of the rep in progress
    pub segment: PoseSequence,
    /// Timestamp (ms) at which cooldown ends
    pub cooldown_until: f64,
}

/// Result of one tick
#[derive(Clone, Debug, PartialEq)]
pub enum RepTick {
    Pending,
    Complete(PoseSequence),
}

impl RepTick {
    pub fn into_segment(self) -> Option<PoseSequence> {
        match self {
            RepTick::Complete(segment) => Some(segment),
            RepTick::Pending => None,
        }
    }
}

/// Advance the phase machine by one frame.
///
/// Empty frames carry no data and leave the state untouched. A frame whose
/// signal cannot be measured never starts a rep, but is still recorded
/// once a rep is under way.
pub fn step(
    mut state: RepDetectorState,
    frame: &[PoseLandmark],
    now: f64,
    profile: &PhaseProfile,
    timing: &RepTiming,
) -> (RepDetectorState, RepTick) {
    if frame.is_empty() {
        return (state, RepTick::Pending);
    }

    if state.phase == RepPhase::Cooldown {
        if now < state.cooldown_until {
            return (state, RepTick::Pending);
        }
        state.phase = RepPhase::Idle;
    }

    let signal = profile.signal.measure(frame);

    match state.phase {
        RepPhase::Idle => {
            if signal.is_some_and(|v| profile.extend.crossed(v)) {
                debug!(signal = ?profile.signal, value = signal, "rep started");
                state.phase = RepPhase::Extended;
                state.segment = vec![frame.to_vec()];
            }
            (state, RepTick::Pending)
        }
        RepPhase::Extended => {
            state.segment.push(frame.to_vec());
            if signal.is_some_and(|v| profile.retract.crossed(v)) {
                state.phase = RepPhase::Retracted;
            } else if state.segment.len() == timing.stall_frames {
                debug!(
                    signal = ?profile.signal,
                    value = signal,
                    frames = state.segment.len(),
                    "rep not retracting, still extended"
                );
            }
            (state, RepTick::Pending)
        }
        RepPhase::Retracted => {
            state.segment.push(frame.to_vec());
            if state.segment.len() < timing.min_rep_frames {
                return (state, RepTick::Pending);
            }
            let segment = std::mem::take(&mut state.segment);
            debug!(frames = segment.len(), "rep complete");
            state.phase = RepPhase::Cooldown;
            state.cooldown_until = now + timing.cooldown_ms;
            (state, RepTick::Complete(segment))
        }
        // handled above
        RepPhase::Cooldown => (state, RepTick::Pending),
    }
}

/// Session-owned rep detector
#[derive(Clone, Debug)]
pub struct RepDetector {
    profile: PhaseProfile,
    timing: RepTiming,
    state: RepDetectorState,
}

impl RepDetector {
    pub fn new(profile: PhaseProfile, timing: RepTiming) -> Self {
        Self {
            profile,
            timing,
            state: RepDetectorState::default(),
        }
    }

    /// Detector with the default profile and timing for `class`
    pub fn for_class(class: MovementClass) -> Self {
        Self::new(PhaseProfile::for_class(class), RepTiming::default())
    }

    /// Feed one raw frame at time `now` (ms)
    pub fn tick(&mut self, frame: &[PoseLandmark], now: f64) -> RepTick {
        let state = std::mem::take(&mut self.state);
        let (next, tick) = step(state, frame, now, &self.profile, &self.timing);
        self.state = next;
        tick
    }

    pub fn phase(&self) -> RepPhase {
        self.state.phase
    }

    pub fn state(&self) -> &RepDetectorState {
        &self.state
    }

    pub fn profile(&self) -> &PhaseProfile {
        &self.profile
    }

    /// Frames collected for the rep in progress
    pub fn segment(&self) -> &[PoseFrame] {
        &self.state.segment
    }

    pub fn reset(&mut self) {
        self.state = RepDetectorState::default();
    }
}
