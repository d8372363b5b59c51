/// Scalar helpers shared by the point type and the spline evaluator
use crate::point::Point;

/// Compares two floats within an absolute tolerance.
/// Not transitive unless `epsilon` is zero.
pub fn near_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Next knot value after `ti`, spaced by `distance(pi, pj)^alpha`.
///
/// `0^0` evaluates to 1, so alpha = 0 yields unit spacing even for
/// coincident points.
pub fn next_knot(ti: f64, pi: Point, pj: Point, alpha: f64) -> f64 {
    pj.distance(pi).powf(alpha) + ti
}

/// Interpolates between `u` (at `lo`) and `v` (at `hi`) for parameter `t`.
///
/// `t` is not clamped; values outside `[lo, hi]` extrapolate. The interval
/// must have nonzero width.
pub fn lerp(u: Point, v: Point, t: f64, lo: f64, hi: f64) -> Point {
    let width = hi - lo;
    u.scale((hi - t) / width).add(v.scale((t - lo) / width))
}
