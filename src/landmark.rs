//! Body pose landmark vocabulary and keyed landmark storage.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies one of the 33 standard body pose landmarks.
///
/// The ids and their order match what body pose estimation networks output, so a
/// network's flat landmark array can be ingested directly via
/// [`LandmarkSet::from_positions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkIdx {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

const NUM_LANDMARKS: usize = 33;

impl LandmarkIdx {
    const ALL: [LandmarkIdx; NUM_LANDMARKS] = {
        use LandmarkIdx::*;
        [
            Nose,
            LeftEyeInner,
            LeftEye,
            LeftEyeOuter,
            RightEyeInner,
            RightEye,
            RightEyeOuter,
            LeftEar,
            RightEar,
            MouthLeft,
            MouthRight,
            LeftShoulder,
            RightShoulder,
            LeftElbow,
            RightElbow,
            LeftWrist,
            RightWrist,
            LeftPinky,
            RightPinky,
            LeftIndex,
            RightIndex,
            LeftThumb,
            RightThumb,
            LeftHip,
            RightHip,
            LeftKnee,
            RightKnee,
            LeftAnkle,
            RightAnkle,
            LeftHeel,
            RightHeel,
            LeftFootIndex,
            RightFootIndex,
        ]
    };
}

/// Error returned when a required landmark is absent from a [`LandmarkSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("missing {0:?} landmark")]
pub struct MissingLandmark(pub LandmarkIdx);

/// A keyed collection of 2D landmark positions, indexed by [`LandmarkIdx`].
///
/// A set starts out empty; positions are filled in per landmark with
/// [`set`][Self::set]. Lookups are explicit about absence: [`get`][Self::get] returns an
/// [`Option`], [`require`][Self::require] a [`MissingLandmark`] error, so partially
/// populated sets (e.g. from an occluded pose) never cause out-of-range access.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    positions: [Option<Point2<f32>>; NUM_LANDMARKS],
}

impl Default for LandmarkSet {
    fn default() -> Self {
        Self::new()
    }
}

impl LandmarkSet {
    /// Number of landmarks in the body landmark vocabulary.
    pub const NUM_LANDMARKS: usize = NUM_LANDMARKS;

    /// Creates an empty [`LandmarkSet`] with no landmark positions filled in.
    pub fn new() -> Self {
        Self {
            positions: [None; NUM_LANDMARKS],
        }
    }

    /// Creates a [`LandmarkSet`] from positions in landmark id order.
    ///
    /// This is the layout body pose networks emit. Entries past the 33 body landmarks
    /// (auxiliary tracking points) are ignored, and landmarks the iterator does not
    /// reach stay unset.
    pub fn from_positions(positions: impl IntoIterator<Item = [f32; 2]>) -> Self {
        let mut set = Self::new();
        for (idx, [x, y]) in LandmarkIdx::ALL.into_iter().zip(positions) {
            set.set(idx, Point2::new(x, y));
        }
        set
    }

    /// Stores the position of `idx`, replacing any previous value.
    pub fn set(&mut self, idx: LandmarkIdx, position: Point2<f32>) {
        self.positions[idx as usize] = Some(position);
    }

    /// Returns the position of `idx`, or [`None`] if it was never set.
    pub fn get(&self, idx: LandmarkIdx) -> Option<Point2<f32>> {
        self.positions[idx as usize]
    }

    /// Returns the position of `idx`, or a [`MissingLandmark`] error if it was never
    /// set.
    pub fn require(&self, idx: LandmarkIdx) -> Result<Point2<f32>, MissingLandmark> {
        self.get(idx).ok_or(MissingLandmark(idx))
    }

    /// Iterates over all landmarks that have a position, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (LandmarkIdx, Point2<f32>)> + '_ {
        LandmarkIdx::ALL
            .into_iter()
            .filter_map(|idx| Some((idx, self.get(idx)?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_absence() {
        let mut set = LandmarkSet::new();
        assert_eq!(set.get(LandmarkIdx::LeftKnee), None);
        assert_eq!(
            set.require(LandmarkIdx::LeftKnee),
            Err(MissingLandmark(LandmarkIdx::LeftKnee)),
        );

        set.set(LandmarkIdx::LeftKnee, Point2::new(0.5, 0.5));
        assert_eq!(set.get(LandmarkIdx::LeftKnee), Some(Point2::new(0.5, 0.5)));
        assert_eq!(set.require(LandmarkIdx::LeftKnee), Ok(Point2::new(0.5, 0.5)));
    }

    #[test]
    fn from_network_output() {
        // 33 body landmarks plus 6 auxiliary entries, as a pose network emits them.
        let positions = (0..39).map(|i| [i as f32, -(i as f32)]);
        let set = LandmarkSet::from_positions(positions);

        assert_eq!(set.iter().count(), LandmarkSet::NUM_LANDMARKS);
        assert_eq!(set.get(LandmarkIdx::Nose), Some(Point2::new(0.0, 0.0)));
        assert_eq!(
            set.get(LandmarkIdx::RightAnkle),
            Some(Point2::new(28.0, -28.0)),
        );
    }

    #[test]
    fn partial_network_output() {
        let set = LandmarkSet::from_positions([[1.0, 2.0]]);
        assert_eq!(set.get(LandmarkIdx::Nose), Some(Point2::new(1.0, 2.0)));
        assert_eq!(set.get(LandmarkIdx::LeftEyeInner), None);
    }

    #[test]
    fn landmark_names_are_snake_case() {
        let json = serde_json::to_string(&LandmarkIdx::LeftFootIndex).unwrap();
        assert_eq!(json, "\"left_foot_index\"");

        let idx: LandmarkIdx = serde_json::from_str("\"right_hip\"").unwrap();
        assert_eq!(idx, LandmarkIdx::RightHip);
    }
}
