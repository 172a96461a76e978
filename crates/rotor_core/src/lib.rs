//! The `rotor_core` crate provides finite-difference vector calculus over
//! n-dimensional vector fields.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction), `VectorField` (the field seam).
//! - **Field**: `ComponentField`, a field assembled from per-component closures.
//! - **Calculus**: forward-difference partial derivatives, divergence, and curl.
//! - **Quiver**: headless grid sampling for external renderers.

pub mod calculus;
pub mod error;
pub mod field;
pub mod quiver;
pub mod traits;
