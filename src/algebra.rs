//! Equation solving, polynomials, fractions, and small matrices.
//!
//! Solvers return tagged outcomes where the result genuinely has more
//! than one shape (quadratic roots); degenerate inputs that make an
//! operation meaningless fail with an error instead.

use crate::error::MathError;
use crate::number_theory::gcd;

/// Tolerance below which a system determinant is treated as zero.
const DET_EPSILON: f64 = 1e-10;

/// Solves the linear equation `ax + b = c` for `x`.
///
/// # Errors
/// Returns [`MathError::InvalidCoefficient`] if `a` is zero.
///
/// # Examples
/// ```
/// assert_eq!(mathkit::algebra::solve_linear(2.0, 1.0, 7.0).unwrap(), 3.0);
/// ```
pub fn solve_linear(a: f64, b: f64, c: f64) -> Result<f64, MathError> {
    if a == 0.0 {
        return Err(MathError::InvalidCoefficient);
    }
    Ok((c - b) / a)
}

/// Outcome of solving `ax² + bx + c = 0` over the reals.
///
/// The discriminant `b² − 4ac` is carried in every branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticSolution {
    /// Discriminant > 0: two distinct real roots, `x1 ≤ x2`.
    TwoReal { x1: f64, x2: f64, discriminant: f64 },
    /// Discriminant = 0: one repeated real root.
    OneReal { x: f64, discriminant: f64 },
    /// Discriminant < 0: no real roots.
    NoReal { discriminant: f64 },
}

/// Solves the quadratic equation `ax² + bx + c = 0`.
///
/// # Errors
/// Returns [`MathError::InvalidCoefficient`] if `a` is zero.
///
/// # Examples
/// ```
/// use mathkit::algebra::{solve_quadratic, QuadraticSolution};
/// match solve_quadratic(1.0, -3.0, 2.0).unwrap() {
///     QuadraticSolution::TwoReal { x1, x2, discriminant } => {
///         assert_eq!((x1, x2, discriminant), (1.0, 2.0, 1.0));
///     }
///     other => panic!("expected two roots, got {other:?}"),
/// }
/// ```
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<QuadraticSolution, MathError> {
    if a == 0.0 {
        return Err(MathError::InvalidCoefficient);
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        let r1 = (-b - sqrt_d) / (2.0 * a);
        let r2 = (-b + sqrt_d) / (2.0 * a);
        Ok(QuadraticSolution::TwoReal {
            x1: r1.min(r2),
            x2: r1.max(r2),
            discriminant,
        })
    } else if discriminant == 0.0 {
        Ok(QuadraticSolution::OneReal {
            x: -b / (2.0 * a),
            discriminant,
        })
    } else {
        Ok(QuadraticSolution::NoReal { discriminant })
    }
}

/// Solves the 2×2 linear system by Cramer's rule:
///
/// ```text
/// a1·x + b1·y = c1
/// a2·x + b2·y = c2
/// ```
///
/// # Errors
/// Returns [`MathError::SingularSystem`] when the coefficient
/// determinant's magnitude is below 1e-10 (no unique solution).
///
/// # Examples
/// ```
/// let (x, y) = mathkit::algebra::solve_system_2x2(
///     2.0, 1.0, 5.0,
///     1.0, -1.0, 1.0,
/// ).unwrap();
/// assert!((x - 2.0).abs() < 1e-12 && (y - 1.0).abs() < 1e-12);
/// ```
pub fn solve_system_2x2(
    a1: f64,
    b1: f64,
    c1: f64,
    a2: f64,
    b2: f64,
    c2: f64,
) -> Result<(f64, f64), MathError> {
    let det = a1 * b2 - a2 * b1;
    if det.abs() < DET_EPSILON {
        return Err(MathError::SingularSystem);
    }
    let x = (c1 * b2 - c2 * b1) / det;
    let y = (a1 * c2 - a2 * c1) / det;
    Ok((x, y))
}

/// Evaluates a polynomial at `x` by Horner's method.
///
/// Coefficients are given highest degree first, so `[2, -3, 1]` is
/// `2x² − 3x + 1`.
///
/// # Errors
/// Returns [`MathError::EmptyInput`] if `coefficients` is empty.
///
/// # Examples
/// ```
/// // 2x² − 3x + 1 at x = 3  →  10
/// let v = mathkit::algebra::eval_polynomial(&[2.0, -3.0, 1.0], 3.0).unwrap();
/// assert_eq!(v, 10.0);
/// ```
pub fn eval_polynomial(coefficients: &[f64], x: f64) -> Result<f64, MathError> {
    if coefficients.is_empty() {
        return Err(MathError::EmptyInput);
    }
    Ok(coefficients.iter().fold(0.0, |acc, &c| acc * x + c))
}

// ============================================================================
// Fractions
// ============================================================================

/// A rational number kept in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Creates a fraction, reducing it via GCD and normalizing the
    /// sign onto the numerator.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] if `denominator` is zero.
    ///
    /// # Examples
    /// ```
    /// use mathkit::algebra::Fraction;
    /// let f = Fraction::new(4, -8).unwrap();
    /// assert_eq!((f.numerator(), f.denominator()), (-1, 2));
    /// ```
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, MathError> {
        if denominator == 0 {
            return Err(MathError::DivisionByZero);
        }
        let g = gcd(numerator, denominator);
        let sign = if denominator < 0 { -1 } else { 1 };
        if g == 0 {
            // numerator == 0; denominator normalizes to 1
            return Ok(Self {
                numerator: 0,
                denominator: 1,
            });
        }
        Ok(Self {
            numerator: sign * numerator / g,
            denominator: sign * denominator / g,
        })
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Decimal value of the fraction.
    pub fn decimal(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Adds two fractions via cross terms, then reduces.
    pub fn add(&self, other: &Fraction) -> Result<Fraction, MathError> {
        Fraction::new(
            self.numerator * other.denominator + other.numerator * self.denominator,
            self.denominator * other.denominator,
        )
    }

    /// Multiplies two fractions, then reduces.
    pub fn multiply(&self, other: &Fraction) -> Result<Fraction, MathError> {
        Fraction::new(
            self.numerator * other.numerator,
            self.denominator * other.denominator,
        )
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// ============================================================================
// Matrices
// ============================================================================

/// A dense row-major matrix of `f64` values.
///
/// Invariant: `rows ≥ 1` and every row has exactly `cols` entries;
/// both are enforced at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<Vec<f64>>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Builds a matrix from rows.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] if `data` is empty,
    /// the first row is empty, or any row has a different length.
    pub fn new(data: Vec<Vec<f64>>) -> Result<Self, MathError> {
        let rows = data.len();
        if rows == 0 {
            return Err(MathError::DimensionMismatch(
                "matrix needs at least one row".into(),
            ));
        }
        let cols = data[0].len();
        if cols == 0 {
            return Err(MathError::DimensionMismatch(
                "matrix rows cannot be empty".into(),
            ));
        }
        if let Some((i, row)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MathError::DimensionMismatch(format!(
                "row {i} has {} entries, expected {cols}",
                row.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Element-wise sum of two matrices of the same shape.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] if the shapes differ.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MathError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MathError::DimensionMismatch(format!(
                "cannot add {}x{} and {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| a.iter().zip(b).map(|(x, y)| x + y).collect())
            .collect();
        Matrix::new(data)
    }

    /// Matrix product `self × other`.
    ///
    /// # Errors
    /// Returns [`MathError::DimensionMismatch`] unless
    /// `self.cols == other.rows`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MathError> {
        if self.cols != other.rows {
            return Err(MathError::DimensionMismatch(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let mut data = vec![vec![0.0; other.cols]; self.rows];
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.data[i][k];
                for j in 0..other.cols {
                    data[i][j] += a * other.data[k][j];
                }
            }
        }
        Matrix::new(data)
    }

    /// Transposed copy of the matrix.
    pub fn transpose(&self) -> Matrix {
        let mut data = vec![vec![0.0; self.rows]; self.cols];
        for (i, row) in self.data.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                data[j][i] = v;
            }
        }
        // invariant holds: rows/cols swapped, all rows same length
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn quadratic_roots_satisfy_equation(
            a in prop::sample::select(vec![-3.0, -1.0, 0.5, 1.0, 2.0]),
            b in -50.0_f64..50.0,
            c in -50.0_f64..50.0,
        ) {
            if let QuadraticSolution::TwoReal { x1, x2, .. } = solve_quadratic(a, b, c).unwrap() {
                for x in [x1, x2] {
                    let residual = a * x * x + b * x + c;
                    prop_assert!(residual.abs() < 1e-6 * (a.abs() + b.abs() + c.abs()).max(1.0));
                }
                prop_assert!(x1 <= x2);
            }
        }

        #[test]
        fn fraction_add_matches_decimal(
            n1 in -1000_i64..1000, d1 in 1_i64..1000,
            n2 in -1000_i64..1000, d2 in 1_i64..1000,
        ) {
            let a = Fraction::new(n1, d1).unwrap();
            let b = Fraction::new(n2, d2).unwrap();
            let sum = a.add(&b).unwrap();
            prop_assert!((sum.decimal() - (a.decimal() + b.decimal())).abs() < 1e-9);
            // reduced form: gcd of parts is 1
            prop_assert_eq!(crate::number_theory::gcd(sum.numerator(), sum.denominator()), 1);
        }
    }
}
