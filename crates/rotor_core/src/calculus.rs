use crate::error::FieldError;
use crate::traits::VectorField;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Forward-difference step.
const STEP: f64 = 1e-7;

/// Local rotation of a 2- or 3-dimensional field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Curl {
    /// Scalar curl of a planar field.
    Planar(f64),
    /// Rotation vector of a spatial field.
    Spatial([f64; 3]),
}

fn check_point(field: &impl VectorField<f64>, point: &[f64]) -> Result<(), FieldError> {
    let expected = field.dimension();
    if point.len() != expected {
        return Err(FieldError::DimensionMismatch {
            expected,
            actual: point.len(),
        });
    }
    Ok(())
}

/// Snaps a difference quotient to 5 decimal places. Dividing two nearly
/// equal values by the 1e-7 step leaves cancellation noise in the low
/// decimals of the raw quotient.
fn round_quotient(value: f64) -> f64 {
    (value * 1e5).round() / 1e5
}

/// Evaluates every component of the field at `point`, in declared order.
pub fn evaluate(field: &impl VectorField<f64>, point: &[f64]) -> Result<Vec<f64>, FieldError> {
    check_point(field, point)?;
    let mut out = vec![0.0; field.dimension()];
    field.apply(point, &mut out);
    Ok(out)
}

/// Approximates the matrix of partial derivatives at `point` with a
/// one-sided forward difference.
///
/// Entry `(i, j)` is the partial of component `j` along axis `i`
/// (row = differentiation axis, column = field component). The fixed step
/// trades accuracy for simplicity and carries O(step) truncation error;
/// adequate for smooth fields, not a general-purpose differentiator.
pub fn partial_derivatives(
    field: &impl VectorField<f64>,
    point: &[f64],
) -> Result<DMatrix<f64>, FieldError> {
    check_point(field, point)?;
    let dim = field.dimension();

    let mut base = vec![0.0; dim];
    field.apply(point, &mut base);

    let mut shifted_point = point.to_vec();
    let mut shifted = vec![0.0; dim];
    let mut partials = DMatrix::zeros(dim, dim);

    for axis in 0..dim {
        shifted_point[axis] = point[axis] + STEP;
        field.apply(&shifted_point, &mut shifted);
        for component in 0..dim {
            let quotient = (shifted[component] - base[component]) / STEP;
            partials[(axis, component)] = round_quotient(quotient);
        }
        shifted_point[axis] = point[axis];
    }

    Ok(partials)
}

/// Divergence at `point`: the trace of the partial derivative matrix.
/// Component `i` pairs with axis `i`.
pub fn divergence(field: &impl VectorField<f64>, point: &[f64]) -> Result<f64, FieldError> {
    Ok(partial_derivatives(field, point)?.trace())
}

/// Curl at `point`, defined for 2- and 3-dimensional fields only.
///
/// The unsupported-dimension check concerns the field alone and runs before
/// the point-length check; neither failure evaluates any component.
pub fn curl(field: &impl VectorField<f64>, point: &[f64]) -> Result<Curl, FieldError> {
    let dim = field.dimension();
    if dim != 2 && dim != 3 {
        return Err(FieldError::UnsupportedDimension { dimension: dim });
    }
    let m = partial_derivatives(field, point)?;
    Ok(match dim {
        2 => Curl::Planar(m[(0, 1)] - m[(1, 0)]),
        _ => Curl::Spatial([
            m[(1, 2)] - m[(2, 1)],
            m[(2, 0)] - m[(0, 2)],
            m[(0, 1)] - m[(1, 0)],
        ]),
    })
}
