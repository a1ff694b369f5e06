//! Interior angle measurement between landmark segments.

use nalgebra::Point2;
use thiserror::Error;

/// Error returned when an angle is requested for coincident points.
///
/// An interior angle is only defined when both rays leaving the vertex have nonzero
/// length; this error lets callers tell degenerate input apart from a valid angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("angle is undefined for coincident points")]
pub struct DegenerateGeometry;

/// Computes the interior angle at `b`, in degrees, formed by the rays `b→a` and `b→c`.
///
/// The result is in the closed interval `[0.0, 180.0]`: coinciding rays measure 0°,
/// opposing rays 180°. The measurement is symmetric in `a` and `c`.
///
/// Fails with [`DegenerateGeometry`] when `a` or `c` coincides with `b`, since a
/// zero-length ray has no direction. The computation never produces NaN.
pub fn interior_angle(
    a: Point2<f32>,
    b: Point2<f32>,
    c: Point2<f32>,
) -> Result<f32, DegenerateGeometry> {
    // f64 internally; f32 would lose ~5 ULP through `acos` and the degree conversion.
    let Some(ba) = (a - b).cast::<f64>().try_normalize(0.0) else {
        return Err(DegenerateGeometry);
    };
    let Some(bc) = (c - b).cast::<f64>().try_normalize(0.0) else {
        return Err(DegenerateGeometry);
    };

    // Rounding can push the dot product of two unit vectors slightly outside [-1, 1],
    // which is outside the domain of `acos`.
    let cos = ba.dot(&bc).clamp(-1.0, 1.0);
    Ok(cos.acos().to_degrees() as f32)
}
