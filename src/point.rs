use super::*;

/// Trait defined over generic points P used by all curve types.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing methods requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy
pub trait Point:
    Add<Output = Self> + Sub<Output = Self> + Mul<NativeFloat, Output = Self> + Copy + Default + PartialEq
{
    /// Number of coordinate axes of the point
    const DIM: usize;

    /// Returns the component of the Point on its axis corresponding to index e.g. [0, 1] -> [x, y]
    fn axis(&self, index: usize) -> NativeFloat;

    /// Returns the dot product of self and other interpreted as vectors
    fn dot(&self, other: Self) -> NativeFloat;

    /// Returns the squared L2 norm of the Point interpreted as a vector
    fn squared_length(&self) -> NativeFloat {
        self.dot(*self)
    }

    /// Returns the euclidean distance between the two Points self and other
    fn distance(&self, other: Self) -> NativeFloat {
        (*self - other).squared_length().sqrt()
    }
}
