//! Illustrative numerical methods.
//!
//! Root finding, fixed-step minimization, and Monte Carlo estimation.
//! These are teaching-grade implementations: no line search, no
//! adaptive steps, no variance reduction. Randomized estimators take
//! the RNG as a parameter so callers (and tests) control seeding.

use rand::Rng;

use crate::error::MathError;

/// A derivative magnitude below this aborts Newton-Raphson.
const DERIVATIVE_EPSILON: f64 = 1e-15;

/// One Newton-Raphson step: the iterate and the function values driving it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonStep {
    pub x: f64,
    pub fx: f64,
    pub dfx: f64,
}

/// Result of a Newton-Raphson run.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonOutcome {
    /// Whether `|f(x)|` fell below the tolerance within the iteration cap.
    pub converged: bool,
    /// The final iterate (the approximate root when `converged`).
    pub root: f64,
    /// Per-iteration trace, one entry per step taken.
    pub trace: Vec<NewtonStep>,
}

/// Newton-Raphson root finding for `f(x) = 0`.
///
/// Iterates `x ← x − f(x)/f'(x)` from `initial_guess` until
/// `|f(x)| < tolerance` or `max_iterations` steps have been taken.
///
/// # Errors
/// - [`MathError::InvalidRange`] if `tolerance` is not positive or
///   `max_iterations` is zero.
/// - [`MathError::DerivativeTooSmall`] if `|f'(x)| < 1e-15` at any
///   step; the method cannot divide by a vanishing slope.
///
/// # Examples
/// ```
/// // root of x² − 2
/// let outcome = mathkit::numeric::newton_raphson(
///     |x| x * x - 2.0,
///     |x| 2.0 * x,
///     1.0,
///     1e-12,
///     50,
/// ).unwrap();
/// assert!(outcome.converged);
/// assert!((outcome.root - 2f64.sqrt()).abs() < 1e-9);
/// ```
pub fn newton_raphson<F, D>(
    f: F,
    df: D,
    initial_guess: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<NewtonOutcome, MathError>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    if tolerance <= 0.0 || max_iterations == 0 {
        return Err(MathError::InvalidRange(
            "tolerance must be positive and max_iterations non-zero".into(),
        ));
    }

    let mut x = initial_guess;
    let mut trace = Vec::new();
    for _ in 0..max_iterations {
        let fx = f(x);
        if fx.abs() < tolerance {
            return Ok(NewtonOutcome {
                converged: true,
                root: x,
                trace,
            });
        }
        let dfx = df(x);
        if dfx.abs() < DERIVATIVE_EPSILON {
            return Err(MathError::DerivativeTooSmall {
                x,
                magnitude: dfx.abs(),
            });
        }
        trace.push(NewtonStep { x, fx, dfx });
        x -= fx / dfx;
    }

    let converged = f(x).abs() < tolerance;
    Ok(NewtonOutcome {
        converged,
        root: x,
        trace,
    })
}

/// One gradient-descent step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentStep {
    pub x: f64,
    pub value: f64,
    pub gradient: f64,
}

/// Result of a gradient-descent run.
#[derive(Debug, Clone, PartialEq)]
pub struct DescentOutcome {
    /// Whether the gradient magnitude fell below the tolerance.
    pub converged: bool,
    /// The final iterate.
    pub minimum: f64,
    /// Function value at the final iterate.
    pub value: f64,
    pub trace: Vec<DescentStep>,
}

/// Fixed-step gradient descent on a 1-D function.
///
/// Iterates `x ← x − learning_rate · f'(x)` and stops when
/// `|f'(x)| < tolerance` or `max_iterations` is exhausted. No line
/// search, no adaptive step.
///
/// # Errors
/// Returns [`MathError::InvalidRange`] if `learning_rate` or
/// `tolerance` is not positive, or `max_iterations` is zero.
pub fn gradient_descent<F, G>(
    f: F,
    gradient: G,
    initial: f64,
    learning_rate: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<DescentOutcome, MathError>
where
    F: Fn(f64) -> f64,
    G: Fn(f64) -> f64,
{
    if learning_rate <= 0.0 || tolerance <= 0.0 || max_iterations == 0 {
        return Err(MathError::InvalidRange(
            "learning_rate and tolerance must be positive, max_iterations non-zero".into(),
        ));
    }

    let mut x = initial;
    let mut trace = Vec::new();
    for _ in 0..max_iterations {
        let g = gradient(x);
        if g.abs() < tolerance {
            return Ok(DescentOutcome {
                converged: true,
                minimum: x,
                value: f(x),
                trace,
            });
        }
        trace.push(DescentStep {
            x,
            value: f(x),
            gradient: g,
        });
        x -= learning_rate * g;
    }

    let converged = gradient(x).abs() < tolerance;
    Ok(DescentOutcome {
        converged,
        minimum: x,
        value: f(x),
        trace,
    })
}

/// Monte Carlo π estimate with its deviation from the true constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiEstimate {
    pub estimate: f64,
    /// `|estimate − π|`.
    pub absolute_error: f64,
    pub samples: u64,
}

/// Estimates π by uniform sampling of the unit square.
///
/// Draws `samples` points in `[0, 1)²` and counts those inside the
/// quarter disc; the hit ratio times 4 converges to π at O(1/√n).
///
/// # Errors
/// Returns [`MathError::InvalidRange`] if `samples` is zero.
///
/// # Examples
/// ```
/// use mathkit::random::create_rng;
/// let mut rng = create_rng(42);
/// let pi = mathkit::numeric::monte_carlo_pi(100_000, &mut rng).unwrap();
/// assert!(pi.absolute_error < 0.1);
/// ```
pub fn monte_carlo_pi<R: Rng>(samples: u64, rng: &mut R) -> Result<PiEstimate, MathError> {
    if samples == 0 {
        return Err(MathError::InvalidRange(
            "sample count must be positive".into(),
        ));
    }
    let mut inside = 0u64;
    for _ in 0..samples {
        let x: f64 = rng.random();
        let y: f64 = rng.random();
        if x * x + y * y <= 1.0 {
            inside += 1;
        }
    }
    let estimate = 4.0 * inside as f64 / samples as f64;
    Ok(PiEstimate {
        estimate,
        absolute_error: (estimate - std::f64::consts::PI).abs(),
        samples,
    })
}

/// Monte Carlo estimate of `∫ₐᵇ f(x) dx` by uniform sampling.
///
/// # Errors
/// Returns [`MathError::InvalidRange`] if `a >= b` or `samples` is zero.
pub fn monte_carlo_integrate<F, R>(
    f: F,
    a: f64,
    b: f64,
    samples: u64,
    rng: &mut R,
) -> Result<f64, MathError>
where
    F: Fn(f64) -> f64,
    R: Rng,
{
    if samples == 0 {
        return Err(MathError::InvalidRange(
            "sample count must be positive".into(),
        ));
    }
    if a >= b {
        return Err(MathError::InvalidRange(format!(
            "integration bounds must satisfy a < b, got a={a}, b={b}"
        )));
    }
    let mut sum = 0.0;
    for _ in 0..samples {
        let x = rng.random_range(a..b);
        sum += f(x);
    }
    Ok((b - a) * sum / samples as f64)
}

/// Brute-force 1-D minimization by a fixed-step linear scan of `[a, b]`.
///
/// Evaluates `f` at `a`, `a + step`, `a + 2·step`, … and at `b`
/// itself, returning the best `(x, f(x))` pair seen.
///
/// # Errors
/// Returns [`MathError::InvalidRange`] if `a >= b` or `step` is not
/// positive.
///
/// # Examples
/// ```
/// let (x, fx) = mathkit::numeric::brute_force_minimize(
///     |x| (x - 1.5f64).powi(2),
///     0.0, 4.0, 0.01,
/// ).unwrap();
/// assert!((x - 1.5).abs() < 0.01);
/// assert!(fx < 1e-4);
/// ```
pub fn brute_force_minimize<F>(f: F, a: f64, b: f64, step: f64) -> Result<(f64, f64), MathError>
where
    F: Fn(f64) -> f64,
{
    if a >= b {
        return Err(MathError::InvalidRange(format!(
            "interval must satisfy a < b, got a={a}, b={b}"
        )));
    }
    if step <= 0.0 {
        return Err(MathError::InvalidRange(format!(
            "step must be positive, got {step}"
        )));
    }

    let mut best_x = a;
    let mut best_value = f(a);
    let mut x = a + step;
    while x < b {
        let value = f(x);
        if value < best_value {
            best_value = value;
            best_x = x;
        }
        x += step;
    }
    let end_value = f(b);
    if end_value < best_value {
        best_value = end_value;
        best_x = b;
    }
    Ok((best_x, best_value))
}

// ============================================================================
// Tests
// ============================================================================
