//! Plane geometry and degree-based trigonometry.
//!
//! Circle measurements, angle conversion, right-triangle sides, and
//! point predicates (collinearity, line intersection). Determinant
//! comparisons use a fixed tolerance of 1e-10 to absorb floating-point
//! noise.

use crate::error::MathError;

/// Tolerance below which a determinant is treated as zero.
const DET_EPSILON: f64 = 1e-10;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Circumference of a circle with the given radius.
///
/// # Errors
/// Returns [`MathError::InvalidRange`] if `radius` is negative.
///
/// # Examples
/// ```
/// let c = mathkit::geometry::circumference(1.0).unwrap();
/// assert!((c - std::f64::consts::TAU).abs() < 1e-12);
/// ```
pub fn circumference(radius: f64) -> Result<f64, MathError> {
    check_radius(radius)?;
    Ok(2.0 * std::f64::consts::PI * radius)
}

/// Area of a circle with the given radius.
///
/// # Errors
/// Returns [`MathError::InvalidRange`] if `radius` is negative.
pub fn circle_area(radius: f64) -> Result<f64, MathError> {
    check_radius(radius)?;
    Ok(std::f64::consts::PI * radius * radius)
}

fn check_radius(radius: f64) -> Result<(), MathError> {
    if radius < 0.0 {
        return Err(MathError::InvalidRange(format!(
            "radius must be non-negative, got {radius}"
        )));
    }
    Ok(())
}

/// Converts degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Converts radians to degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Sine of an angle given in degrees.
pub fn sin_deg(degrees: f64) -> f64 {
    degrees_to_radians(degrees).sin()
}

/// Cosine of an angle given in degrees.
pub fn cos_deg(degrees: f64) -> f64 {
    degrees_to_radians(degrees).cos()
}

/// Tangent of an angle given in degrees.
pub fn tan_deg(degrees: f64) -> f64 {
    degrees_to_radians(degrees).tan()
}

/// Hypotenuse of a right triangle from its two legs.
///
/// # Errors
/// Returns [`MathError::InvalidRange`] unless both legs are positive.
///
/// # Examples
/// ```
/// assert_eq!(mathkit::geometry::hypotenuse(3.0, 4.0).unwrap(), 5.0);
/// ```
pub fn hypotenuse(a: f64, b: f64) -> Result<f64, MathError> {
    if a <= 0.0 || b <= 0.0 {
        return Err(MathError::InvalidRange(format!(
            "triangle legs must be positive, got {a} and {b}"
        )));
    }
    Ok(a.hypot(b))
}

/// Remaining leg of a right triangle from the hypotenuse and one leg.
///
/// # Errors
/// - [`MathError::InvalidRange`] unless both sides are positive.
/// - [`MathError::InvalidGeometry`] if the hypotenuse does not exceed
///   the given leg.
///
/// # Examples
/// ```
/// assert_eq!(mathkit::geometry::leg(5.0, 3.0).unwrap(), 4.0);
/// ```
pub fn leg(hypotenuse: f64, other_leg: f64) -> Result<f64, MathError> {
    if hypotenuse <= 0.0 || other_leg <= 0.0 {
        return Err(MathError::InvalidRange(format!(
            "triangle sides must be positive, got {hypotenuse} and {other_leg}"
        )));
    }
    if hypotenuse <= other_leg {
        return Err(MathError::InvalidGeometry(format!(
            "hypotenuse ({hypotenuse}) must exceed the leg ({other_leg})"
        )));
    }
    Ok((hypotenuse * hypotenuse - other_leg * other_leg).sqrt())
}

/// Tests whether three points lie on a single straight line.
///
/// Computes the signed-area cross product of the two edge vectors;
/// the points are collinear iff its magnitude is below 1e-10.
///
/// # Examples
/// ```
/// use mathkit::geometry::{are_collinear, Point};
/// let p = Point::new(0.0, 0.0);
/// let q = Point::new(1.0, 1.0);
/// assert!(are_collinear(p, q, Point::new(2.0, 2.0)));
/// assert!(!are_collinear(p, q, Point::new(2.0, 3.0)));
/// ```
pub fn are_collinear(p: Point, q: Point, r: Point) -> bool {
    let det = (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x);
    det.abs() < DET_EPSILON
}

/// Intersection of the line through `p1`–`p2` with the line through `p3`–`p4`.
///
/// Returns `None` when the lines are parallel (determinant magnitude
/// below 1e-10). The lines are treated as infinite; the intersection
/// point may lie outside either segment.
///
/// # Examples
/// ```
/// use mathkit::geometry::{line_intersection, Point};
/// let hit = line_intersection(
///     Point::new(0.0, 0.0), Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0), Point::new(2.0, 0.0),
/// ).unwrap();
/// assert!((hit.x - 1.0).abs() < 1e-12 && (hit.y - 1.0).abs() < 1e-12);
/// ```
pub fn line_intersection(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let d1x = p2.x - p1.x;
    let d1y = p2.y - p1.y;
    let d2x = p4.x - p3.x;
    let d2y = p4.y - p3.y;

    let det = d1x * d2y - d1y * d2x;
    if det.abs() < DET_EPSILON {
        return None;
    }

    let t = ((p3.x - p1.x) * d2y - (p3.y - p1.y) * d2x) / det;
    Some(Point::new(p1.x + t * d1x, p1.y + t * d1y))
}

/// Solves the Thales proportion `a/b = c/x` for the fourth term.
///
/// # Errors
/// Returns [`MathError::DivisionByZero`] if `a` is zero.
pub fn thales_fourth_term(a: f64, b: f64, c: f64) -> Result<f64, MathError> {
    if a == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(b * c / a)
}

/// Tests whether `a/b = c/d` within a 1e-10 tolerance.
///
/// # Errors
/// Returns [`MathError::DivisionByZero`] if either denominator is zero.
pub fn is_proportion(a: f64, b: f64, c: f64, d: f64) -> Result<bool, MathError> {
    if b == 0.0 || d == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok((a / b - c / d).abs() < DET_EPSILON)
}

// ============================================================================
// Tests
// ============================================================================
