use super::*;
use super::point::Point;
use num_traits::Float;

/// Point with dimensions of constant generic size N and of generic type T
/// (Implemented as Newtype Pattern on an array,
/// see https://www.worthe-it.co.za/blog/2020-10-31-newtype-pattern-in-rust.html)
/// This type only interacts with the library through
/// the Point trait, so you are free to use your own
/// Point/Coord/Vec structures instead by implementing the (small) trait
#[derive(Debug, Copy, Clone)]
pub struct PointN<T, const N: usize>([T; N]);

impl<T, const N: usize> PointN<T, N> {
    pub fn new(array: [T; N]) -> Self {
        PointN(array)
    }
}

/// Initialize with the Default value for the underlying type
impl<T: Default + Copy, const N: usize> Default for PointN<T, N> {
    fn default() -> Self {
        PointN([T::default(); N])
    }
}

impl<T, const N: usize> PartialEq for PointN<T, N>
where
    T: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        for i in 0..N {
            if self.0[i] != other.0[i] {
                return false;
            }
        }
        true
    }
}

impl<T, const N: usize> Add for PointN<T, N>
where
    T: Add<Output = T> + Copy,
{
    type Output = Self;

    fn add(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] + other.0[i];
        }
        res
    }
}

impl<T, const N: usize> Sub for PointN<T, N>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Self;

    fn sub(self, other: PointN<T, N>) -> PointN<T, N> {
        let mut res = self;
        for i in 0..N {
            res.0[i] = self.0[i] - other.0[i];
        }
        res
    }
}

// deliberately not bounded by Float: with it, `T::from` would be ambiguous
// between `From<NativeFloat>` and the `NumCast` that Float drags in (E0034)
impl<T, const N: usize> Mul<NativeFloat> for PointN<T, N>
where
    T: Mul<Output = T> + From<NativeFloat> + Copy,
{
    type Output = Self;

    fn mul(self, rhs: NativeFloat) -> PointN<T, N> {
        let mut res = self;
        let rhs = T::from(rhs);
        for i in 0..N {
            res.0[i] = res.0[i] * rhs;
        }
        res
    }
}

impl<T, const N: usize> Point for PointN<T, N>
where
    T: Float
        + Default
        + From<NativeFloat>
        + Into<NativeFloat>,
{
    const DIM: usize = N;

    fn axis(&self, index: usize) -> NativeFloat {
        self.0[index].into()
    }

    fn dot(&self, other: Self) -> NativeFloat {
        let mut dot = 0.0;
        for i in 0..N {
            dot += (self.0[i] * other.0[i]).into();
        }
        dot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = PointN::new([1f64, 2f64]);
        let b = PointN::new([3f64, -1f64]);
        assert_eq!(a + b, PointN::new([4f64, 1f64]));
        assert_eq!(a - b, PointN::new([-2f64, 3f64]));
        assert_eq!(a * 2.0, PointN::new([2f64, 4f64]));
    }

    #[test]
    fn scalar_scaling_through_point_bound() {
        // scaling must resolve through the trait bound the curve types use,
        // not just through a concrete PointN
        fn halve<P: Point>(p: P) -> P {
            p * 0.5
        }
        let p = PointN::new([4f64, -2f64]);
        assert_eq!(halve(p), PointN::new([2f64, -1f64]));
    }

    #[test]
    fn dot_and_lengths() {
        let a = PointN::new([3f64, 4f64]);
        let b = PointN::new([1f64, 0f64]);
        assert!((a.dot(b) - 3.0).abs() < EPSILON);
        assert!((a.squared_length() - 25.0).abs() < EPSILON);
        assert!((a.distance(PointN::new([0f64, 0f64])) - 5.0).abs() < EPSILON);
    }
}
