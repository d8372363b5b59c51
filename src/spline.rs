//! Centripetal Catmull-Rom splines and chains of them.
//!
//! The alpha value ranges from 0 to 1. An alpha value of 0.5 results in a
//! centripetal spline, alpha = 0 in a uniform spline and alpha = 1 in a
//! chordal spline.

use crate::error::{Result, SplineError};
use crate::math_utils::{lerp, next_knot};
use crate::point::Point;

/// Calculates `point_count` samples of the Catmull-Rom curve defined by
/// `p0`, `p1`, `p2`, `p3`.
///
/// The result starts with `p1` and ends with `p2`, both included exactly as
/// given. `p0` and `p3` only shape the tangents and are never emitted.
///
/// # Errors
///
/// - [`SplineError::InvalidSampleCount`] if `point_count < 2`.
/// - [`SplineError::DegenerateGeometry`] if a knot interval has zero or
///   non-finite width, which happens for coincident consecutive points with
///   a nonzero alpha.
pub fn evaluate_segment(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    point_count: usize,
    alpha: f64,
) -> Result<Vec<Point>> {
    if point_count < 2 {
        return Err(SplineError::InvalidSampleCount(point_count));
    }

    let t0 = 0.0;
    let t1 = next_knot(t0, p0, p1, alpha);
    let t2 = next_knot(t1, p1, p2, alpha);
    let t3 = next_knot(t2, p2, p3, alpha);

    for (interval, width) in [t1 - t0, t2 - t1, t3 - t2].into_iter().enumerate() {
        if !(width.is_finite() && width > 0.0) {
            return Err(SplineError::DegenerateGeometry {
                segment: 0,
                interval,
                width,
            });
        }
    }

    let step = (t2 - t1) / (point_count - 1) as f64;

    let mut spline = Vec::with_capacity(point_count);
    spline.push(p1);
    for i in 1..point_count - 1 {
        let t = t1 + i as f64 * step;

        let a1 = lerp(p0, p1, t, t0, t1);
        let a2 = lerp(p1, p2, t, t1, t2);
        let a3 = lerp(p2, p3, t, t2, t3);

        let b1 = lerp(a1, a2, t, t0, t2);
        let b2 = lerp(a2, a3, t, t1, t3);

        spline.push(lerp(b1, b2, t, t1, t2));
    }
    // Pinned rather than computed, so the seam is exact.
    spline.push(p2);
    Ok(spline)
}

/// Number of points [`build_chain`] yields for `n_segments` segments.
#[must_use]
pub fn chain_len(n_segments: usize, points_per_segment: usize) -> usize {
    if n_segments == 0 {
        return 0;
    }
    n_segments * points_per_segment - (n_segments - 1)
}

/// Evaluates every window of four consecutive points in `padded` and joins
/// the segments into one curve.
///
/// The first and last points of `padded` only shape the outer tangents. Seam
/// points shared by neighbouring segments appear once.
///
/// # Errors
///
/// - [`SplineError::InsufficientControlPoints`] if `padded` has fewer than
///   four points.
/// - Any error of [`evaluate_segment`] for one of the windows.
pub fn build_chain(padded: &[Point], points_per_segment: usize, alpha: f64) -> Result<Vec<Point>> {
    if padded.len() < 4 {
        return Err(SplineError::InsufficientControlPoints {
            required: 4,
            actual: padded.len(),
        });
    }
    if points_per_segment < 2 {
        return Err(SplineError::InvalidSampleCount(points_per_segment));
    }

    let n_segments = padded.len() - 3;
    log::debug!(
        "building chain of {n_segments} segments, {points_per_segment} points each, alpha {alpha}"
    );

    let mut curve = Vec::with_capacity(chain_len(n_segments, points_per_segment));
    for (i, window) in padded.windows(4).enumerate() {
        let segment = evaluate_segment(
            window[0],
            window[1],
            window[2],
            window[3],
            points_per_segment,
            alpha,
        )
        .map_err(|e| e.in_segment(i))?;
        if i == 0 {
            curve.extend(segment);
        } else {
            // Do not duplicate points at seams.
            curve.extend(segment.into_iter().skip(1));
        }
    }
    Ok(curve)
}

/// Pads `control_points` with a mirrored phantom point at each end:
/// `p0 - (p1 - p0)` in front and `pz + (pz - py)` at the back.
///
/// # Errors
///
/// [`SplineError::InsufficientControlPoints`] if fewer than two points are
/// given, since the mirror direction is undefined.
pub fn extrapolate_ends(control_points: &[Point]) -> Result<Vec<Point>> {
    let (first, second, second_last, last) = match control_points {
        [first, second, ..] => (
            *first,
            *second,
            control_points[control_points.len() - 2],
            control_points[control_points.len() - 1],
        ),
        _ => {
            return Err(SplineError::InsufficientControlPoints {
                required: 2,
                actual: control_points.len(),
            })
        }
    };

    let mut padded = Vec::with_capacity(control_points.len() + 2);
    padded.push(first.sub(second.sub(first)));
    padded.extend_from_slice(control_points);
    padded.push(last.add(last.sub(second_last)));
    Ok(padded)
}

/// Creates a spline curve through `control_points` by chaining Catmull-Rom
/// segments.
///
/// Each segment between two control points has `points_per_segment` points
/// including both control points, and every control point appears in the
/// result exactly as given, at index `k * (points_per_segment - 1)`.
///
/// # Errors
///
/// See [`extrapolate_ends`] and [`build_chain`].
pub fn spline_chain(
    control_points: &[Point],
    points_per_segment: usize,
    alpha: f64,
) -> Result<Vec<Point>> {
    let padded = extrapolate_ends(control_points)?;
    build_chain(&padded, points_per_segment, alpha)
}
