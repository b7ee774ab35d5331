//! Descriptive statistics, pairwise comparison, and basic probability.
//!
//! Aggregates fail fast with [`MathError::EmptyInput`] on empty data
//! and [`MathError::InvalidRange`] on NaN/Inf, so a `NaN` can never
//! propagate silently out of a summary.
//!
//! # Algorithms
//!
//! - **Mean**: Kahan compensated summation for O(ε) error independent
//!   of `n`.
//! - **Variance/StdDev**: Welford's online algorithm.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).

use crate::error::MathError;

/// Computes the arithmetic mean using Kahan compensated summation.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// - [`MathError::EmptyInput`] if `data` is empty.
/// - [`MathError::InvalidRange`] if `data` contains NaN/Inf.
///
/// # Examples
/// ```
/// let m = mathkit::stats::mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((m - 3.0).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Result<f64, MathError> {
    check_finite_non_empty(data)?;
    Ok(kahan_sum(data) / data.len() as f64)
}

/// Computes the median of `data` without mutating the input.
///
/// Clones and sorts, then returns the middle element (or the average
/// of the two middle elements for even-length data).
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Errors
/// - [`MathError::EmptyInput`] if `data` is empty.
/// - [`MathError::InvalidRange`] if `data` contains NaN/Inf.
///
/// # Examples
/// ```
/// assert_eq!(mathkit::stats::median(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
/// assert_eq!(mathkit::stats::median(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// ```
pub fn median(data: &[f64]) -> Result<f64, MathError> {
    check_finite_non_empty(data)?;
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).expect("NaN rejected above"));
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Returns the minimum value and the index of its first occurrence.
///
/// # Errors
/// - [`MathError::EmptyInput`] if `data` is empty.
/// - [`MathError::InvalidRange`] if `data` contains NaN/Inf.
///
/// # Examples
/// ```
/// let (value, index) = mathkit::stats::min_with_index(&[3.0, 1.0, 4.0, 1.0]).unwrap();
/// assert_eq!((value, index), (1.0, 1));
/// ```
pub fn min_with_index(data: &[f64]) -> Result<(f64, usize), MathError> {
    check_finite_non_empty(data)?;
    let mut best = (data[0], 0);
    for (i, &x) in data.iter().enumerate().skip(1) {
        if x < best.0 {
            best = (x, i);
        }
    }
    Ok(best)
}

/// Returns the maximum value and the index of its first occurrence.
///
/// # Errors
/// Same conditions as [`min_with_index`].
pub fn max_with_index(data: &[f64]) -> Result<(f64, usize), MathError> {
    check_finite_non_empty(data)?;
    let mut best = (data[0], 0);
    for (i, &x) in data.iter().enumerate().skip(1) {
        if x > best.0 {
            best = (x, i);
        }
    }
    Ok(best)
}

/// Ordering relation between two numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Greater,
    Less,
    Equal,
}

/// Pairwise comparison: the relation of `a` to `b` plus `|a − b|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub relation: Relation,
    pub difference: f64,
}

/// Compares two numbers, reporting the relation and absolute difference.
///
/// # Examples
/// ```
/// use mathkit::stats::{compare, Relation};
/// let c = compare(7.0, 3.0);
/// assert_eq!(c.relation, Relation::Greater);
/// assert_eq!(c.difference, 4.0);
/// ```
pub fn compare(a: f64, b: f64) -> Comparison {
    let relation = if a > b {
        Relation::Greater
    } else if a < b {
        Relation::Less
    } else {
        Relation::Equal
    };
    Comparison {
        relation,
        difference: (a - b).abs(),
    }
}

/// Computes the sample variance using Welford's online algorithm.
///
/// Uses Bessel's correction (denominator `n − 1`), avoiding the
/// catastrophic cancellation of the naive `E[X²] − (E[X])²` formula.
///
/// # Errors
/// - [`MathError::EmptyInput`] if `data.len() < 2`.
/// - [`MathError::InvalidRange`] if `data` contains NaN/Inf.
pub fn variance(data: &[f64]) -> Result<f64, MathError> {
    if data.len() < 2 {
        return Err(MathError::EmptyInput);
    }
    check_finite_non_empty(data)?;
    let mut acc = WelfordAccumulator::new();
    for &x in data {
        acc.update(x);
    }
    Ok(acc.sample_variance())
}

/// Computes the sample standard deviation, `sqrt(variance(data))`.
///
/// # Errors
/// Same conditions as [`variance`].
pub fn std_dev(data: &[f64]) -> Result<f64, MathError> {
    variance(data).map(f64::sqrt)
}

// ============================================================================
// Probability
// ============================================================================

/// Probability of an event as favorable cases over possible cases.
///
/// # Errors
/// Returns [`MathError::InvalidRange`] unless
/// `0 ≤ favorable ≤ possible` and `possible > 0`.
///
/// # Examples
/// ```
/// assert_eq!(mathkit::stats::probability(1, 4).unwrap(), 0.25);
/// ```
pub fn probability(favorable: u64, possible: u64) -> Result<f64, MathError> {
    if possible == 0 {
        return Err(MathError::InvalidRange(
            "possible cases must be positive".into(),
        ));
    }
    if favorable > possible {
        return Err(MathError::InvalidRange(format!(
            "favorable cases ({favorable}) cannot exceed possible cases ({possible})"
        )));
    }
    Ok(favorable as f64 / possible as f64)
}

/// Complement of a probability, `1 − p`.
///
/// # Errors
/// Returns [`MathError::InvalidRange`] if `p` is outside `[0, 1]`.
pub fn complement(p: f64) -> Result<f64, MathError> {
    check_probability(p)?;
    Ok(1.0 - p)
}

/// Probability of the intersection of two independent events, `pa · pb`.
///
/// # Errors
/// Returns [`MathError::InvalidRange`] if either probability is
/// outside `[0, 1]`.
pub fn independent_intersection(pa: f64, pb: f64) -> Result<f64, MathError> {
    check_probability(pa)?;
    check_probability(pb)?;
    Ok(pa * pb)
}

fn check_probability(p: f64) -> Result<(), MathError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(MathError::InvalidRange(format!(
            "probability must lie in [0, 1], got {p}"
        )));
    }
    Ok(())
}

// ============================================================================
// Internals
// ============================================================================

fn check_finite_non_empty(data: &[f64]) -> Result<(), MathError> {
    if data.is_empty() {
        return Err(MathError::EmptyInput);
    }
    if !data.iter().all(|x| x.is_finite()) {
        return Err(MathError::InvalidRange(
            "data contains NaN or infinite values".into(),
        ));
    }
    Ok(())
}

/// Kahan compensated summation.
fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for &x in data {
        let y = x - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }
    sum
}

/// Welford's online mean/variance accumulator.
struct WelfordAccumulator {
    count: u64,
    mean: f64,
    m2: f64,
}

impl WelfordAccumulator {
    fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    fn update(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = x - self.mean;
        self.m2 += delta * delta2;
    }

    fn sample_variance(&self) -> f64 {
        // callers guarantee count >= 2
        self.m2 / (self.count - 1) as f64
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap() - 3.0).abs() < 1e-15);
        assert_eq!(mean(&[]), Err(MathError::EmptyInput));
        assert!(matches!(
            mean(&[1.0, f64::NAN]),
            Err(MathError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_median_odd_even() {
        assert_eq!(median(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
        assert_eq!(median(&[42.0]).unwrap(), 42.0);
        assert_eq!(median(&[]), Err(MathError::EmptyInput));
    }

    #[test]
    fn test_min_max_with_index() {
        let data = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(min_with_index(&data).unwrap(), (1.0, 1));
        assert_eq!(max_with_index(&data).unwrap(), (5.0, 4));
        assert_eq!(min_with_index(&[]), Err(MathError::EmptyInput));
    }

    #[test]
    fn test_compare() {
        assert_eq!(
            compare(7.0, 3.0),
            Comparison {
                relation: Relation::Greater,
                difference: 4.0
            }
        );
        assert_eq!(compare(3.0, 7.0).relation, Relation::Less);
        assert_eq!(compare(5.0, 5.0).relation, Relation::Equal);
        assert_eq!(compare(5.0, 5.0).difference, 0.0);
    }

    #[test]
    fn test_variance_std_dev() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
        assert!((std_dev(&v).unwrap() - 2.138089935299395).abs() < 1e-10);
        assert_eq!(variance(&[1.0]), Err(MathError::EmptyInput));
    }

    #[test]
    fn test_probability() {
        assert_eq!(probability(1, 4).unwrap(), 0.25);
        assert_eq!(probability(4, 4).unwrap(), 1.0);
        assert_eq!(probability(0, 4).unwrap(), 0.0);
        assert!(matches!(probability(5, 4), Err(MathError::InvalidRange(_))));
        assert!(matches!(probability(1, 0), Err(MathError::InvalidRange(_))));
    }

    #[test]
    fn test_complement_and_intersection() {
        assert_eq!(complement(0.25).unwrap(), 0.75);
        assert!(matches!(complement(1.5), Err(MathError::InvalidRange(_))));
        assert_eq!(independent_intersection(0.5, 0.5).unwrap(), 0.25);
        assert!(matches!(
            independent_intersection(0.5, -0.1),
            Err(MathError::InvalidRange(_))
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn mean_lies_between_min_and_max(
            data in proptest::collection::vec(-1e6_f64..1e6, 1..100),
        ) {
            let m = mean(&data).unwrap();
            let (lo, _) = min_with_index(&data).unwrap();
            let (hi, _) = max_with_index(&data).unwrap();
            prop_assert!(m >= lo - 1e-9 && m <= hi + 1e-9);
        }

        #[test]
        fn median_is_order_statistic(
            data in proptest::collection::vec(-1e6_f64..1e6, 1..100),
        ) {
            let med = median(&data).unwrap();
            let below = data.iter().filter(|&&x| x <= med).count();
            let above = data.iter().filter(|&&x| x >= med).count();
            prop_assert!(below * 2 >= data.len());
            prop_assert!(above * 2 >= data.len());
        }

        #[test]
        fn compare_difference_is_symmetric(a in -1e9_f64..1e9, b in -1e9_f64..1e9) {
            prop_assert_eq!(compare(a, b).difference, compare(b, a).difference);
        }
    }
}
