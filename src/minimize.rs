//! Global minimization of a smooth scalar function on a closed interval.

use super::*;
use crate::find_root::find_all_roots;

/// Find the parameter minimizing f over [left, right], given the derivative
/// of f as a separate function.
///
/// The candidates are the first-order stationary points (zeros of the
/// derivative, located with `find_all_roots()` at the given scan resolution)
/// plus the two interval endpoints, which is where a smooth function attains
/// its global minimum on a closed interval. Candidates are tried in a fixed
/// order (roots ascending, then left, then right) and the first one with the
/// strictly lowest value wins, so the result is deterministic.
pub fn find_minimum<Func, Deriv>(
    f: Func,
    derivative: Deriv,
    left: NativeFloat,
    right: NativeFloat,
    parts: usize,
) -> NativeFloat
where
    Func: Fn(NativeFloat) -> NativeFloat,
    Deriv: Fn(NativeFloat) -> NativeFloat,
{
    let mut candidates = find_all_roots(derivative, left, right, parts);
    candidates.push(left);
    candidates.push(right);

    let mut best_t = candidates[0];
    let mut best_value = f(best_t);
    for &t in candidates.iter().skip(1) {
        let value = f(t);
        if value < best_value {
            best_t = t;
            best_value = value;
        }
    }
    best_t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find_root::DEFAULT_SCAN_PARTS;

    #[test]
    fn parabola_interior_minimum() {
        let t = find_minimum(
            |t| (t - 0.37) * (t - 0.37),
            |t| 2.0 * (t - 0.37),
            0.0,
            1.0,
            DEFAULT_SCAN_PARTS,
        );
        assert!((t - 0.37).abs() < 1e-6);
    }

    #[test]
    fn monotone_increasing_picks_left_endpoint() {
        // no stationary point in the interval, so only the endpoints compete
        let t = find_minimum(|t| t * 3.0 + 1.0, |_| 3.0, 0.0, 1.0, DEFAULT_SCAN_PARTS);
        assert!((t - 0.0).abs() < EPSILON);
    }

    #[test]
    fn monotone_decreasing_picks_right_endpoint() {
        let t = find_minimum(|t| -t * 2.0, |_| -2.0, 0.0, 1.0, DEFAULT_SCAN_PARTS);
        assert!((t - 1.0).abs() < EPSILON);
    }

    #[test]
    fn boundary_beats_interior_stationary_maximum() {
        // -(t - 0.5)^2 has a stationary point at 0.5, but it is a maximum;
        // the minimum lives at the boundary
        let t = find_minimum(
            |t| -(t - 0.5) * (t - 0.5),
            |t| -2.0 * (t - 0.5),
            0.0,
            1.0,
            DEFAULT_SCAN_PARTS,
        );
        // both endpoints tie; the first one encountered (left) wins
        assert!((t - 0.0).abs() < EPSILON);
    }
}
