//! Integer classification and elementary number theory.
//!
//! Primality testing, prime factorization, Fibonacci numbers, and the
//! Euclidean GCD. All routines are plain trial-division or iteration;
//! nothing here is meant for cryptographic-scale inputs.

use crate::error::MathError;

/// Parity classification of a floating-point value.
///
/// A non-integer value is neither even nor odd; that case is a normal
/// result here, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
    /// The value has a fractional part, so parity does not apply.
    NotAnInteger,
}

/// Classifies a number as even, odd, or not an integer.
///
/// # Examples
/// ```
/// use mathkit::number_theory::{parity, Parity};
/// assert_eq!(parity(4.0), Parity::Even);
/// assert_eq!(parity(-3.0), Parity::Odd);
/// assert_eq!(parity(2.5), Parity::NotAnInteger);
/// ```
pub fn parity(value: f64) -> Parity {
    if !value.is_finite() || value.fract() != 0.0 {
        return Parity::NotAnInteger;
    }
    // Computed on the float itself: casting would saturate beyond the
    // i64 range. Every integer-valued f64 with magnitude >= 2^53 is
    // even, and rem_euclid reports exactly that.
    if value.rem_euclid(2.0) == 0.0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}

/// Tests whether an integer is prime.
///
/// # Algorithm
/// Trial division: handles 2 and 3 directly, then checks divisors of
/// the form 6k ± 1 up to √n. Every prime > 3 is of that form.
///
/// # Complexity
/// Time: O(√n)
///
/// # Examples
/// ```
/// use mathkit::number_theory::is_prime;
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(100));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Returns the `n`-th Fibonacci number, with F(0) = 0 and F(1) = 1.
///
/// Iterative, O(n). The `u128` return type is exact through F(186);
/// larger indices overflow in debug builds.
///
/// # Examples
/// ```
/// use mathkit::number_theory::fibonacci;
/// assert_eq!(fibonacci(0), 0);
/// assert_eq!(fibonacci(10), 55);
/// ```
pub fn fibonacci(n: u32) -> u128 {
    let (mut a, mut b) = (0u128, 1u128);
    for _ in 0..n {
        let next = a + b;
        a = b;
        b = next;
    }
    a
}

/// Returns the prime factors of `n` in ascending order, with multiplicity.
///
/// # Algorithm
/// Trial division from 2 upward; each factor found is divided out
/// completely before moving on, so every pushed divisor is prime.
///
/// # Errors
/// Returns [`MathError::InvalidRange`] unless `n > 1`.
///
/// # Examples
/// ```
/// use mathkit::number_theory::prime_factors;
/// assert_eq!(prime_factors(60).unwrap(), vec![2, 2, 3, 5]);
/// assert_eq!(prime_factors(97).unwrap(), vec![97]);
/// ```
pub fn prime_factors(n: i64) -> Result<Vec<i64>, MathError> {
    if n <= 1 {
        return Err(MathError::InvalidRange(format!(
            "prime factorization requires an integer > 1, got {n}"
        )));
    }
    let mut remaining = n;
    let mut factors = Vec::new();
    let mut divisor = 2;
    while remaining > 1 {
        while remaining % divisor == 0 {
            factors.push(divisor);
            remaining /= divisor;
        }
        divisor += 1;
        if divisor * divisor > remaining && remaining > 1 {
            factors.push(remaining);
            break;
        }
    }
    Ok(factors)
}

/// Greatest common divisor via the iterative Euclidean algorithm.
///
/// The result is always non-negative; `gcd(0, 0) == 0`.
///
/// # Examples
/// ```
/// use mathkit::number_theory::gcd;
/// assert_eq!(gcd(48, 18), 6);
/// assert_eq!(gcd(-4, 6), 2);
/// ```
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

// ============================================================================
// Tests
// ============================================================================
