use super::*;
use crate::bezier::Bezier;
use crate::find_root::DEFAULT_SCAN_PARTS;
use crate::minimize::find_minimum;
use crate::point::Point;

/// A quadratic Bezier curve defined by three control points:
/// the starting point, one control point and the ending point.
pub type QuadraticBezier<P> = Bezier<P, 3>;

impl<P> Bezier<P, 3>
where
    P: Point,
{
    /// Returns the order-1 "tangent curve" with control points [p1 - p0, p2 - p1].
    /// The true derivative B'(t) is this curve scaled by 2; the scale is dropped
    /// since the tangent is only ever used for its direction and zero crossings.
    pub fn tangent_curve(&self) -> Bezier<P, 2> {
        let [p0, p1, p2] = self.control_points;
        Bezier::new([p1 - p0, p2 - p1])
    }

    /// Returns the derivative of the squared distance between 'point' and the
    /// curve at 't', up to a constant positive factor (the exact value is the
    /// derivative divided by 4):
    ///     d/dt (B(t) - P)^2 = 2 * (B(t) - P) . B'(t)  ~  (B(t) - P) . tangent(t)
    /// Only the sign and the zero crossings of the result are meaningful; the
    /// zeros are the stationary points of the squared distance.
    /// This is not the most efficient formulation, but it is easier to read and
    /// check than the expanded polynomial of the derivative.
    pub fn squared_distance_derivative(&self, point: P, t: NativeFloat) -> NativeFloat {
        let tangent = self.tangent_curve().eval(t);
        (self.eval(t) - point).dot(tangent)
    }

    /// Calculates the minimum euclidean distance between 'point' and the curve.
    /// The squared distance t -> |B(t) - point|^2 is minimized over [0,1] by
    /// evaluating it at every stationary point (zeros of the derivative) plus
    /// the two interval endpoints; the result is always non-negative.
    pub fn distance_to_point(&self, point: P) -> NativeFloat {
        let t = find_minimum(
            |t| (self.eval(t) - point).squared_length(),
            |t| self.squared_distance_derivative(point, t),
            0.0,
            1.0,
            DEFAULT_SCAN_PARTS,
        );
        self.eval(t).distance(point)
    }
}
