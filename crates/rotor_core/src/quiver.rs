//! Headless grid sampling for quiver-style renderers.
//!
//! The core stays free of any rendering dependency; a front end takes the
//! sampled positions, unit directions, and magnitudes and draws the arrows
//! itself (magnitude is typically mapped to color).

use crate::traits::VectorField;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Sampling range for one field axis, endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub min: f64,
    pub max: f64,
    pub samples: usize,
}

/// A field sampled on a regular grid.
///
/// `points` and `directions` hold `dim` values per sample, flattened in
/// sample order; `magnitudes` holds one value per sample. Directions are
/// unit length except where the field vanishes, in which case they are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuiverData {
    pub dim: usize,
    pub points: Vec<f64>,
    pub directions: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

/// Samples `field` over the regular grid described by `axes`, one spec per
/// field axis. Axis 0 varies slowest. Only the 2- and 3-dimensional shapes
/// a quiver plot can show are supported.
pub fn sample_quiver(field: &impl VectorField<f64>, axes: &[AxisSpec]) -> Result<QuiverData> {
    let dim = field.dimension();
    if axes.len() != dim {
        bail!(
            "Axis count ({}) does not match field dimension ({}).",
            axes.len(),
            dim
        );
    }
    if dim != 2 && dim != 3 {
        bail!("Quiver sampling requires a 2- or 3-dimensional field.");
    }
    for axis in axes {
        if !axis.min.is_finite() || !axis.max.is_finite() || axis.max <= axis.min {
            bail!("Each axis range must be finite with max > min.");
        }
        if axis.samples < 2 {
            bail!("Each axis needs at least 2 samples.");
        }
    }

    let total: usize = axes.iter().map(|axis| axis.samples).product();
    let mut data = QuiverData {
        dim,
        points: Vec::with_capacity(total * dim),
        directions: Vec::with_capacity(total * dim),
        magnitudes: Vec::with_capacity(total),
    };

    let mut indices = vec![0usize; dim];
    let mut point = vec![0.0; dim];
    let mut value = vec![0.0; dim];

    loop {
        for (i, axis) in axes.iter().enumerate() {
            point[i] = grid_value(axis, indices[i]);
        }
        field.apply(&point, &mut value);

        let magnitude = value.iter().map(|v| v * v).sum::<f64>().sqrt();
        data.points.extend_from_slice(&point);
        if magnitude > 0.0 {
            data.directions.extend(value.iter().map(|v| v / magnitude));
        } else {
            data.directions.extend(std::iter::repeat(0.0).take(dim));
        }
        data.magnitudes.push(magnitude);

        // Odometer increment: the last axis spins fastest.
        let mut i = dim;
        loop {
            if i == 0 {
                return Ok(data);
            }
            i -= 1;
            indices[i] += 1;
            if indices[i] < axes[i].samples {
                break;
            }
            indices[i] = 0;
        }
    }
}

fn grid_value(axis: &AxisSpec, index: usize) -> f64 {
    let t = index as f64 / (axis.samples - 1) as f64;
    axis.min + (axis.max - axis.min) * t
}

#[cfg(test)]
mod tests {
    use super::{sample_quiver, AxisSpec, QuiverData};
    use crate::field::{Component, ComponentField};

    /// Constant field (2, 0).
    fn constant_field() -> ComponentField<f64> {
        ComponentField::new(vec![
            Box::new(|_: &[f64]| 2.0) as Component<f64>,
            Box::new(|_: &[f64]| 0.0),
        ])
    }

    fn assert_err_contains(result: anyhow::Result<QuiverData>, needle: &str) {
        let err = result.expect_err("expected error");
        let message = format!("{err}");
        assert!(
            message.contains(needle),
            "expected error to contain \"{needle}\", got \"{message}\""
        );
    }

    #[test]
    fn rejects_axis_count_mismatch() {
        let axes = [AxisSpec {
            min: 0.0,
            max: 1.0,
            samples: 2,
        }];
        assert_err_contains(sample_quiver(&constant_field(), &axes), "Axis count");
    }

    #[test]
    fn rejects_degenerate_ranges_and_sample_counts() {
        let field = constant_field();
        let bad_range = [
            AxisSpec {
                min: 0.0,
                max: 0.0,
                samples: 2,
            },
            AxisSpec {
                min: 0.0,
                max: 1.0,
                samples: 2,
            },
        ];
        assert_err_contains(sample_quiver(&field, &bad_range), "max > min");

        let bad_samples = [
            AxisSpec {
                min: 0.0,
                max: 1.0,
                samples: 1,
            },
            AxisSpec {
                min: 0.0,
                max: 1.0,
                samples: 2,
            },
        ];
        assert_err_contains(sample_quiver(&field, &bad_samples), "at least 2 samples");
    }

    #[test]
    fn samples_the_full_grid_with_endpoints() {
        let field = constant_field();
        let axes = [
            AxisSpec {
                min: -1.0,
                max: 1.0,
                samples: 3,
            },
            AxisSpec {
                min: 0.0,
                max: 1.0,
                samples: 2,
            },
        ];
        let data = sample_quiver(&field, &axes).unwrap();
        assert_eq!(data.dim, 2);
        assert_eq!(data.magnitudes.len(), 6);
        assert_eq!(data.points.len(), 12);
        assert_eq!(data.directions.len(), 12);
        // Axis 0 varies slowest, so the first and last samples sit on
        // opposite grid corners.
        assert_eq!(&data.points[0..2], &[-1.0, 0.0]);
        assert_eq!(&data.points[10..12], &[1.0, 1.0]);
    }

    #[test]
    fn directions_are_unit_length_with_magnitudes_split_out() {
        let field = constant_field();
        let axes = [
            AxisSpec {
                min: 0.0,
                max: 1.0,
                samples: 2,
            },
            AxisSpec {
                min: 0.0,
                max: 1.0,
                samples: 2,
            },
        ];
        let data = sample_quiver(&field, &axes).unwrap();
        for sample in 0..4 {
            assert_eq!(&data.directions[sample * 2..sample * 2 + 2], &[1.0, 0.0]);
            assert_eq!(data.magnitudes[sample], 2.0);
        }
    }

    #[test]
    fn zero_vectors_keep_zero_directions() {
        // Radial field (x, y); its only zero is the origin.
        let field = ComponentField::new(vec![
            Box::new(|p: &[f64]| p[0]) as Component<f64>,
            Box::new(|p: &[f64]| p[1]),
        ]);
        let axes = [
            AxisSpec {
                min: -1.0,
                max: 1.0,
                samples: 3,
            },
            AxisSpec {
                min: -1.0,
                max: 1.0,
                samples: 3,
            },
        ];
        let data = sample_quiver(&field, &axes).unwrap();
        let center = 4;
        assert_eq!(&data.directions[center * 2..center * 2 + 2], &[0.0, 0.0]);
        assert_eq!(data.magnitudes[center], 0.0);
        for value in &data.directions {
            assert!(value.is_finite());
        }
    }
}
