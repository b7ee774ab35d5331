//! Arithmetic primitives.
//!
//! Thin wrappers over the basic operations with explicit value-domain
//! guards. Wrong-type arguments are impossible here (static typing);
//! what remains is the zero-divisor and negative-operand policing that
//! callers of a utility catalog expect to be done for them.

use crate::error::MathError;

/// Adds two numbers.
///
/// # Examples
/// ```
/// assert_eq!(mathkit::arithmetic::add(2.0, 3.0), 5.0);
/// ```
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtracts `b` from `a`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiplies two numbers.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`.
///
/// # Errors
/// Returns [`MathError::DivisionByZero`] if `b` is exactly zero.
///
/// # Examples
/// ```
/// assert_eq!(mathkit::arithmetic::divide(10.0, 2.0).unwrap(), 5.0);
/// assert!(mathkit::arithmetic::divide(10.0, 0.0).is_err());
/// ```
pub fn divide(a: f64, b: f64) -> Result<f64, MathError> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

/// Computes `percentage` percent of `total`.
///
/// # Examples
/// ```
/// assert_eq!(mathkit::arithmetic::percentage(200.0, 15.0), 30.0);
/// ```
pub fn percentage(total: f64, percentage: f64) -> f64 {
    total * percentage / 100.0
}

/// Rounds `value` to `decimals` decimal places.
///
/// Ties round half away from zero (`f64::round` semantics), so
/// `round_to(2.5, 0) == 3.0` and `round_to(-2.5, 0) == -3.0`.
///
/// # Examples
/// ```
/// assert_eq!(mathkit::arithmetic::round_to(3.14159, 2), 3.14);
/// assert_eq!(mathkit::arithmetic::round_to(2.675, 0), 3.0);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Returns twice the given number.
pub fn double(value: f64) -> f64 {
    value * 2.0
}

/// Returns half the given number.
pub fn half(value: f64) -> f64 {
    value / 2.0
}

/// Raises `base` to the power `exponent`.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Computes the square root of a non-negative number.
///
/// # Errors
/// Returns [`MathError::InvalidRange`] if `value` is negative.
pub fn sqrt(value: f64) -> Result<f64, MathError> {
    if value < 0.0 {
        return Err(MathError::InvalidRange(format!(
            "square root requires a non-negative value, got {value}"
        )));
    }
    Ok(value.sqrt())
}

// ============================================================================
// Tests
// ============================================================================
