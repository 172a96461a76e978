use thiserror::Error;

/// Precondition violations raised by the calculus operations.
///
/// Both variants indicate caller misuse rather than a transient condition;
/// they are raised before any component function is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The query point's length does not match the field's dimensionality.
    #[error("point has {actual} coordinates, field expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Curl was requested for a field that is neither 2- nor 3-dimensional.
    #[error("curl is undefined for a {dimension}-dimensional field")]
    UnsupportedDimension { dimension: usize },
}
