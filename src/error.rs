//! Crate-wide error type.
//!
//! Every fallible operation in this crate fails fast with a
//! [`MathError`] describing the violated domain constraint. Static
//! typing already rules out wrong-type arguments, so only value-domain
//! violations (zero divisors, negative radii, empty inputs, unknown
//! names) are represented here.

/// Error raised by any operation in the catalog.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    /// A numeric parameter violates a domain constraint.
    #[error("value out of range: {0}")]
    InvalidRange(String),

    /// A divisor, denominator, or modulus is exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The leading coefficient of an equation is zero, making it degenerate.
    #[error("leading coefficient must be non-zero")]
    InvalidCoefficient,

    /// Geometric parameters describe an impossible figure.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A linear system has no unique solution (determinant ≈ 0).
    #[error("no unique solution: determinant is zero within tolerance")]
    SingularSystem,

    /// Matrix dimensions are inconsistent or incompatible.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A registry lookup found no entry under the given name.
    #[error("not found: {0}")]
    NotFound(String),

    /// A unit name is not recognized within its conversion category.
    #[error("unsupported unit {unit:?} for category {category:?}")]
    UnsupportedUnit { unit: String, category: String },

    /// An enum-like string parameter matches no recognized option.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// An aggregate operation received an empty collection.
    #[error("input collection is empty")]
    EmptyInput,

    /// Newton-Raphson hit a near-zero derivative and cannot continue.
    #[error("derivative too small at x = {x}: |f'(x)| = {magnitude:e}")]
    DerivativeTooSmall { x: f64, magnitude: f64 },

    /// A dataset field holds no numeric values to aggregate over.
    #[error("field {0:?} has no numeric values")]
    NoNumericValues(String),

    /// A caller-defined error raised by code through an
    /// [`ErrorMessages`](crate::registry::ErrorMessages) store.
    #[error("{code}: {message}")]
    UserDefined { code: String, message: String },

    /// A registered function failed; carries the registry name for context.
    #[error("executing {name:?}: {source}")]
    Execution {
        name: String,
        #[source]
        source: Box<MathError>,
    },
}
