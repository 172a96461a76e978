use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in our vector fields.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// Represents an n-dimensional vector field.
pub trait VectorField<T: Scalar> {
    /// Returns the dimension of the field (number of components, which
    /// equals the number of coordinates every component takes).
    fn dimension(&self) -> usize;

    /// Evaluates the field.
    /// x: coordinates of the query point (length `dimension()`)
    /// out: buffer to write the component values (length `dimension()`)
    fn apply(&self, x: &[T], out: &mut [T]);
}
