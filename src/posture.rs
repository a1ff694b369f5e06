//! Lifting posture evaluation from body pose landmarks.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::angle::{interior_angle, DegenerateGeometry};
use crate::landmark::{LandmarkIdx, LandmarkSet, MissingLandmark};

/// A leg, identified by body side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    Left,
    Right,
}

impl Leg {
    /// Returns the hip, knee and ankle landmark ids of this leg.
    pub fn joints(self) -> [LandmarkIdx; 3] {
        use LandmarkIdx::*;
        match self {
            Leg::Left => [LeftHip, LeftKnee, LeftAnkle],
            Leg::Right => [RightHip, RightKnee, RightAnkle],
        }
    }
}

/// Error produced while measuring a knee angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// A required landmark was absent from the input set.
    #[error(transparent)]
    Missing(#[from] MissingLandmark),
    /// Hip, knee and ankle positions do not form a measurable angle.
    #[error("knee angle: {0}")]
    Degenerate(#[from] DegenerateGeometry),
}

/// Measures the knee bend angle of `leg`, in degrees.
///
/// The knee angle is the interior angle at the knee formed by the hip–knee and
/// knee–ankle segments: a straight leg measures close to 180°, a deeply bent knee a much
/// smaller value.
pub fn knee_angle(landmarks: &LandmarkSet, leg: Leg) -> Result<f32, MeasureError> {
    let [hip, knee, ankle] = leg.joints();
    let hip = landmarks.require(hip)?;
    let knee = landmarks.require(knee)?;
    let ankle = landmarks.require(ankle)?;
    Ok(interior_angle(hip, knee, ankle)?)
}

/// Policy for combining the two per-leg knee angles into a single measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KneeAggregation {
    /// Arithmetic mean of both knees. Less sensitive to an asymmetric stance than
    /// either extreme, and stable when one leg's landmarks are noisy.
    #[default]
    Average,
    /// The more bent (smaller) of the two angles.
    Min,
    /// The straighter (larger) of the two angles.
    Max,
}

/// The outcome of a posture evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Posture {
    /// Knees are bent enough for a safe lift.
    Good { knee_angle: f32 },
    /// Knees are too straight; the lift would load the back.
    Bad { knee_angle: f32 },
    /// The landmarks did not permit a knee measurement (missing or degenerate input).
    Undetermined { reason: String },
}

impl Posture {
    /// Returns `true` for a [`Posture::Good`] verdict.
    #[inline]
    pub fn is_good(&self) -> bool {
        matches!(self, Posture::Good { .. })
    }

    /// Returns the combined knee angle in degrees, if one could be measured.
    pub fn knee_angle(&self) -> Option<f32> {
        match self {
            Posture::Good { knee_angle } | Posture::Bad { knee_angle } => Some(*knee_angle),
            Posture::Undetermined { .. } => None,
        }
    }

    /// Returns the advice message for this verdict.
    pub fn message(&self) -> String {
        match self {
            Posture::Good { .. } => "Good posture - Knees bent".into(),
            Posture::Bad { .. } => "Bad posture - Bend your knees!".into(),
            Posture::Undetermined { reason } => format!("Error detecting posture: {reason}"),
        }
    }
}

impl fmt::Display for Posture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Classifies lifting posture from bilateral knee bend.
///
/// The evaluator holds no per-frame state; every [`evaluate`][Self::evaluate] call is
/// independent, so one evaluator can be shared freely across threads and frames.
/// Temporal smoothing across frames, if wanted, is up to the caller.
#[derive(Debug, Clone)]
pub struct PostureEvaluator {
    threshold_deg: f32,
    aggregation: KneeAggregation,
}

impl Default for PostureEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl PostureEvaluator {
    /// Knee angles below this value, in degrees, classify as a bent-knee lift.
    pub const DEFAULT_THRESHOLD: f32 = 150.0;

    /// Creates an evaluator with the default threshold and aggregation policy.
    pub fn new() -> Self {
        Self {
            threshold_deg: Self::DEFAULT_THRESHOLD,
            aggregation: KneeAggregation::default(),
        }
    }

    /// Sets the knee angle threshold in degrees.
    ///
    /// Aggregated knee angles *below* the threshold classify as [`Posture::Good`];
    /// angles equal to or above it as [`Posture::Bad`].
    ///
    /// # Panics
    ///
    /// This method panics when `threshold_deg` is NaN.
    pub fn set_threshold(&mut self, threshold_deg: f32) {
        assert!(!threshold_deg.is_nan());
        self.threshold_deg = threshold_deg;
    }

    /// Returns the knee angle threshold in degrees.
    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold_deg
    }

    /// Sets how the two per-leg knee angles are combined.
    pub fn set_aggregation(&mut self, aggregation: KneeAggregation) {
        self.aggregation = aggregation;
    }

    /// Returns the aggregation policy in use.
    #[inline]
    pub fn aggregation(&self) -> KneeAggregation {
        self.aggregation
    }

    /// Evaluates lifting posture from `landmarks`.
    ///
    /// Both knees are measured, the angles combined according to the aggregation
    /// policy, and the result classified against the threshold.
    ///
    /// This never fails: a missing landmark or degenerate geometry yields
    /// [`Posture::Undetermined`] carrying the cause's description, so a single bad
    /// frame in a live loop reports as undetermined instead of tearing the loop down.
    /// The underlying cause is also logged at debug level.
    pub fn evaluate(&self, landmarks: &LandmarkSet) -> Posture {
        match self.combined_knee_angle(landmarks) {
            Ok(knee_angle) => {
                if knee_angle < self.threshold_deg {
                    Posture::Good { knee_angle }
                } else {
                    Posture::Bad { knee_angle }
                }
            }
            Err(err) => {
                log::debug!("posture undetermined: {err}");
                Posture::Undetermined {
                    reason: err.to_string(),
                }
            }
        }
    }

    fn combined_knee_angle(&self, landmarks: &LandmarkSet) -> Result<f32, MeasureError> {
        let left = knee_angle(landmarks, Leg::Left)?;
        let right = knee_angle(landmarks, Leg::Right)?;
        Ok(match self.aggregation {
            KneeAggregation::Average => (left + right) / 2.0,
            KneeAggregation::Min => left.min(right),
            KneeAggregation::Max => left.max(right),
        })
    }
}
