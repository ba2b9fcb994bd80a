//! Per-class phase signals and thresholds
//!
//! Each movement class watches one scalar taken from the raw frame. The
//! thresholds are tuned against provider coordinates (y grows downward),
//! so no normalization happens here. Signals read x/y only; depth is
//! ignored even when the frame carries it.

use serde::{Deserialize, Serialize};

use crate::pose::*;

/// Scalar a rep detector tracks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalKind {
    /// Mean hip height; large when the hips are low
    MeanHipY,
    /// Farthest wrist from the shoulder midpoint, in the image plane
    ArmExtension,
    /// Highest knee or ankle (smallest y)
    LegRaiseY,
}

impl SignalKind {
    pub fn for_class(class: MovementClass) -> Self {
        match class {
            MovementClass::Full => SignalKind::MeanHipY,
            MovementClass::Punching => SignalKind::ArmExtension,
            MovementClass::Kicking => SignalKind::LegRaiseY,
        }
    }

    /// Measure the signal; `None` when the frame lacks the joints
    pub fn measure(&self, frame: &[PoseLandmark]) -> Option<f32> {
        match self {
            SignalKind::MeanHipY => mean_hip_y(frame),
            SignalKind::ArmExtension => arm_extension(frame),
            SignalKind::LegRaiseY => leg_raise_y(frame),
        }
    }
}

fn mean_hip_y(frame: &[PoseLandmark]) -> Option<f32> {
    joint_midpoint(frame, LEFT_HIP, RIGHT_HIP).map(|hips| hips.y)
}

fn arm_extension(frame: &[PoseLandmark]) -> Option<f32> {
    let shoulders = joint_midpoint(frame, LEFT_SHOULDER, RIGHT_SHOULDER)?;
    [LEFT_WRIST, RIGHT_WRIST]
        .iter()
        .filter_map(|&i| landmark(frame, i))
        .map(|wrist| wrist.planar_distance(&shoulders))
        .reduce(f32::max)
}

fn leg_raise_y(frame: &[PoseLandmark]) -> Option<f32> {
    [LEFT_KNEE, RIGHT_KNEE, LEFT_ANKLE, RIGHT_ANKLE]
        .iter()
        .filter_map(|&i| landmark(frame, i))
        .map(|p| p.y)
        .reduce(f32::min)
}

/// Threshold crossing direction
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Crossing {
    Above(f32),
    Below(f32),
}

impl Crossing {
    pub fn crossed(&self, value: f32) -> bool {
        match *self {
            Crossing::Above(limit) => value > limit,
            Crossing::Below(limit) => value < limit,
        }
    }

    fn with_limit(&self, limit: f32) -> Self {
        match self {
            Crossing::Above(_) => Crossing::Above(limit),
            Crossing::Below(_) => Crossing::Below(limit),
        }
    }
}

/// Override values for a class's two thresholds. Directions stay fixed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseThresholds {
    pub extend: f32,
    pub retract: f32,
}

/// Signal plus the two crossings that drive one detection cycle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseProfile {
    pub signal: SignalKind,
    /// Idle -> Extended
    pub extend: Crossing,
    /// Extended -> Retracted
    pub retract: Crossing,
}

impl PhaseProfile {
    /// Default profile per class:
    /// - full: hips down past 0.50, back up above 0.46
    /// - punching: arm reach past 0.25, back under 0.18
    /// - kicking: leg raised above 0.42, lowered past 0.50
    pub fn for_class(class: MovementClass) -> Self {
        let (extend, retract) = match class {
            MovementClass::Full => (Crossing::Above(0.50), Crossing::Below(0.46)),
            MovementClass::Punching => (Crossing::Above(0.25), Crossing::Below(0.18)),
            MovementClass::Kicking => (Crossing::Below(0.42), Crossing::Above(0.50)),
        };
        Self {
            signal: SignalKind::for_class(class),
            extend,
            retract,
        }
    }

    pub fn with_thresholds(self, thresholds: PhaseThresholds) -> Self {
        Self {
            extend: self.extend.with_limit(thresholds.extend),
            retract: self.retract.with_limit(thresholds.retract),
            ..self
        }
    }
}
