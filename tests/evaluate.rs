//! End-to-end evaluation of landmark files, the way the CLI consumes them.

use std::collections::HashMap;

use approx::assert_relative_eq;
use nalgebra::Point2;

use liftcheck::config::Config;
use liftcheck::landmark::{LandmarkIdx, LandmarkSet};
use liftcheck::posture::KneeAggregation;

/// A squatting pose in normalized image coordinates, knees bent to 90°.
const SQUAT_JSON: &str = r#"{
    "left_hip": [0.40, 0.50],
    "left_knee": [0.40, 0.70],
    "left_ankle": [0.60, 0.70],
    "right_hip": [0.60, 0.50],
    "right_knee": [0.60, 0.70],
    "right_ankle": [0.80, 0.70]
}"#;

fn landmarks_from_json(json: &str) -> LandmarkSet {
    let positions: HashMap<LandmarkIdx, [f32; 2]> = serde_json::from_str(json).unwrap();
    let mut landmarks = LandmarkSet::new();
    for (idx, [x, y]) in positions {
        landmarks.set(idx, Point2::new(x, y));
    }
    landmarks
}

#[test]
fn squat_file_evaluates_good() {
    let landmarks = landmarks_from_json(SQUAT_JSON);
    let posture = Config::default().evaluator().evaluate(&landmarks);

    assert!(posture.is_good());
    assert_relative_eq!(posture.knee_angle().unwrap(), 90.0, epsilon = 1e-4);
    assert_eq!(posture.to_string(), "Good posture - Knees bent");
}

#[test]
fn incomplete_file_evaluates_undetermined() {
    let landmarks = landmarks_from_json(r#"{"left_hip": [0.4, 0.5]}"#);
    let posture = Config::default().evaluator().evaluate(&landmarks);

    assert_eq!(posture.knee_angle(), None);
    assert!(posture.to_string().starts_with("Error detecting posture: "));
}

#[test]
fn config_threshold_flips_the_verdict() {
    let landmarks = landmarks_from_json(SQUAT_JSON);

    let strict = Config {
        knee_threshold_deg: 45.0,
        knee_aggregation: KneeAggregation::Average,
    };
    assert!(!strict.evaluator().evaluate(&landmarks).is_good());

    let lenient = Config {
        knee_threshold_deg: 150.0,
        ..strict
    };
    assert!(lenient.evaluator().evaluate(&landmarks).is_good());
}

#[test]
fn network_output_evaluates_like_keyed_input() {
    // The same squat, as the flat position array a pose network emits: all 33 body
    // landmarks followed by auxiliary entries, with only the leg slots meaningful.
    let mut positions = vec![[0.5, 0.1]; 39];
    positions[LandmarkIdx::LeftHip as usize] = [0.40, 0.50];
    positions[LandmarkIdx::LeftKnee as usize] = [0.40, 0.70];
    positions[LandmarkIdx::LeftAnkle as usize] = [0.60, 0.70];
    positions[LandmarkIdx::RightHip as usize] = [0.60, 0.50];
    positions[LandmarkIdx::RightKnee as usize] = [0.60, 0.70];
    positions[LandmarkIdx::RightAnkle as usize] = [0.80, 0.70];

    let landmarks = LandmarkSet::from_positions(positions);
    let posture = Config::default().evaluator().evaluate(&landmarks);

    assert!(posture.is_good());
    assert_relative_eq!(posture.knee_angle().unwrap(), 90.0, epsilon = 1e-4);
}
