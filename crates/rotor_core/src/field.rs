use crate::traits::{Scalar, VectorField};

/// A single scalar-valued component of a vector field.
pub type Component<T> = Box<dyn Fn(&[T]) -> T>;

/// A vector field assembled from one closure per component.
///
/// Components are stored in axis order: component `i` is the field's output
/// along axis `i`, and every component receives the full coordinate slice.
/// The dimensionality is the number of components and is fixed at
/// construction.
pub struct ComponentField<T: Scalar> {
    components: Vec<Component<T>>,
}

impl<T: Scalar> ComponentField<T> {
    pub fn new(components: Vec<Component<T>>) -> Self {
        Self { components }
    }
}

impl<T: Scalar> VectorField<T> for ComponentField<T> {
    fn dimension(&self) -> usize {
        self.components.len()
    }

    fn apply(&self, x: &[T], out: &mut [T]) {
        for (slot, component) in out.iter_mut().zip(&self.components) {
            *slot = component(x);
        }
    }
}
