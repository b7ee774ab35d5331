//! # mathkit
//!
//! A flat catalog of independent, stateless math utilities: arithmetic
//! with value-domain guards, elementary number theory, plane geometry,
//! equation solving, descriptive statistics, illustrative numerical
//! methods, unit conversion, and a pair of in-memory registries.
//!
//! Every operation validates its own inputs and fails fast with a
//! [`MathError`]; there is no shared state outside the registry types,
//! no I/O beyond the sink-injected helpers in [`console`], and no
//! concurrency.
//!
//! ## Modules
//!
//! - [`arithmetic`] — add/subtract/multiply/divide and friends
//! - [`number_theory`] — parity, primality, Fibonacci, factorization, GCD
//! - [`geometry`] — circles, angles, right triangles, point predicates
//! - [`algebra`] — equation solvers, polynomials, fractions, matrices
//! - [`stats`] — descriptive statistics, comparison, basic probability
//! - [`numeric`] — Newton-Raphson, gradient descent, Monte Carlo
//! - [`convert`] — unit conversion tables and finance calculators
//! - [`registry`] — function/dataset registries and safe execution
//! - [`random`] — seeded RNG, random integers, IDs, colors
//! - [`console`] — styled messages, log lines, ASCII drawing
//!
//! ## Design Philosophy
//!
//! - **Fail fast**: every domain violation is an error at the point of
//!   detection; the one exception is [`registry::safe_run`], which
//!   folds failure into a tagged record for callers that want it
//! - **No hidden state**: registries are caller-owned values and all
//!   randomness flows through an explicit RNG parameter
//! - **Property-based testing**: algebraic invariants verified via
//!   proptest

pub mod algebra;
pub mod arithmetic;
pub mod console;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod number_theory;
pub mod numeric;
pub mod random;
pub mod registry;
pub mod stats;

pub use error::MathError;
