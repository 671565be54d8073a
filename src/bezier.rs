use super::*;
use crate::point::Point;

/// General implementation of a Bezier curve of arbitrary order (= number of control points - 1).
/// The curve is solely defined by an array of 'control_points'. The order is defined as order = control_points.len() - 1.
/// Points on the curve can be evaluated with an interpolation parameter 't' in interval [0,1] using the eval() and eval_casteljau() methods.
/// Generic parameters:
/// P: Generic points 'P' as defined by the Point trait
/// const generic parameters:
/// N: Number of control points, must be at least 1 (a single point is a valid order-0 curve)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bezier<P, const N: usize>
where
    P: Point,
{
    /// Control points which define the curve and hence its order
    pub(crate) control_points: [P; N],
}

impl<P, const N: usize> Bezier<P, { N }>
where
    P: Point,
{
    /// Create a new Bezier curve that interpolates the `control_points`.
    /// The order of the curve is defined as order = control_points.len() - 1.
    pub fn new(control_points: [P; N]) -> Bezier<P, { N }> {
        assert!(N >= 1, "a bezier curve needs at least one control point");
        Bezier { control_points }
    }

    pub fn control_points(&self) -> [P; N] {
        self.control_points
    }

    /// The first control point, reached exactly at t = 0
    pub fn start(&self) -> P {
        self.control_points[0]
    }

    /// The last control point, reached exactly at t = 1
    pub fn end(&self) -> P {
        self.control_points[N - 1]
    }

    /// Returns the Bernstein basis weights for all control points at 't',
    /// weight_i = C(n,i) * t^i * (1-t)^(n-i) with n = order.
    /// Weights are built incrementally from weight_0 = (1-t)^n using the recurrence
    ///     weight_{i+1} = weight_i * (n-i)/(i+1) * t/(1-t)
    /// which avoids recomputing binomial coefficients and powers at each step.
    /// The weights always sum to 1 (partition of unity); at t = 0 and t = 1 the
    /// one-hot weights are returned directly since the recurrence degenerates there
    /// (0^0 for t = 0, division by 1-t = 0 for t = 1).
    pub fn bernstein_weights(t: NativeFloat) -> [NativeFloat; N] {
        let order = N - 1;
        let mut weights = [0.0; N];
        if t == 0.0 {
            weights[0] = 1.0;
            return weights;
        }
        if t == 1.0 {
            weights[order] = 1.0;
            return weights;
        }
        let ratio = t / (1.0 - t);
        let mut weight = (1.0 - t).powi(order as i32);
        for (i, w) in weights.iter_mut().enumerate() {
            *w = weight;
            weight *= (order - i) as NativeFloat / (i + 1) as NativeFloat * ratio;
        }
        weights
    }

    /// Evaluate a point on the curve at 't' which should be in the interval [0,1],
    /// as the Bernstein-weighted sum of the control points.
    /// t = 0 and t = 1 return the first/last control point exactly, without
    /// any floating point round-off.
    pub fn eval(&self, t: NativeFloat) -> P {
        if t == 0.0 {
            return self.start();
        }
        if t == 1.0 {
            return self.end();
        }
        let weights = Self::bernstein_weights(t);
        let mut result = P::default();
        for (cp, w) in self.control_points.iter().zip(weights.iter()) {
            result = result + *cp * *w;
        }
        result
    }

    /// Evaluate a point on the curve at 't' using De Casteljau's algorithm
    /// (over a temporary array with const generic sizing)
    pub fn eval_casteljau(&self, t: NativeFloat) -> P {
        // start with a copy of the original control points array and succesively use it for evaluation
        let mut p: [P; N] = self.control_points;
        // loop up to order = control_points.len() - 1
        for i in 1..=p.len() {
            for j in 0..p.len() - i {
                p[j] = p[j] * (1.0 - t) + p[j + 1] * t;
            }
        }
        p[0]
    }

    /// Split the curve at 't' into two subcurves of the same order covering
    /// [0,t] and [t,1] of the original parameter range.
    pub fn split(&self, t: NativeFloat) -> (Self, Self) {
        let mut left: [P; N] = self.control_points;
        let mut right: [P; N] = self.control_points;
        // these points get overridden each iteration; we save the intermediate results to 'left' and 'right'
        let mut casteljau_points: [P; N] = self.control_points;

        for i in 1..=casteljau_points.len() {
            // save start point of level
            left[i - 1] = casteljau_points[0];
            // save end point of level
            right[right.len() - i] = casteljau_points[right.len() - i];
            // calculate next level of points (one less point each level until we reach one point, the one at t)
            for j in 0..casteljau_points.len() - i {
                casteljau_points[j] =
                    casteljau_points[j] * (1.0 - t) + casteljau_points[j + 1] * t;
            }
        }

        (
            Bezier {
                control_points: left,
            },
            Bezier {
                control_points: right,
            },
        )
    }
}
