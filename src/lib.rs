//! Landmark-based lifting posture evaluation.
//!
//! This crate judges lifting form from 2D body pose landmarks: it measures the knee bend
//! angle of both legs and classifies the posture against a configurable threshold. Pose
//! estimation, video capture, and result presentation are left to the caller; the crate
//! only consumes landmark positions and produces a [`Posture`] verdict.
//!
//! [`Posture`]: posture::Posture
//!
//! # Coordinates
//!
//! Landmark positions are 2D image coordinates: X points to the right, Y points *down*,
//! matching the coordinate system of common pose estimation networks. Only directions
//! between landmarks are compared, so any consistent unit works — normalized `[0, 1]`
//! coordinates as well as raw pixel positions.
//!
//! # Example
//!
//! ```
//! use liftcheck::landmark::{LandmarkIdx, LandmarkSet};
//! use liftcheck::posture::PostureEvaluator;
//! use nalgebra::Point2;
//!
//! let mut landmarks = LandmarkSet::new();
//! for (idx, pos) in [
//!     (LandmarkIdx::LeftHip, Point2::new(0.4, 0.5)),
//!     (LandmarkIdx::LeftKnee, Point2::new(0.4, 0.7)),
//!     (LandmarkIdx::LeftAnkle, Point2::new(0.6, 0.7)),
//!     (LandmarkIdx::RightHip, Point2::new(0.6, 0.5)),
//!     (LandmarkIdx::RightKnee, Point2::new(0.6, 0.7)),
//!     (LandmarkIdx::RightAnkle, Point2::new(0.8, 0.7)),
//! ] {
//!     landmarks.set(idx, pos);
//! }
//!
//! let posture = PostureEvaluator::new().evaluate(&landmarks);
//! assert!(posture.is_good());
//! ```

use log::LevelFilter;

pub mod angle;
pub mod config;
pub mod landmark;
pub mod posture;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this crate will log at *debug* level; `RUST_LOG` can override
/// the filter.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
