//! Bisection based root finding over a bracketed interval.
//!
//! Available functions:
//! - `bisect()` for a single bracketed root
//! - `find_all_roots()` for a fixed-resolution bracket-and-bisect scan

use super::*;
use tinyvec::TinyVec;

/// Number of equal subintervals `find_all_roots()` scans for sign changes
/// when the caller has no better idea of the function's behavior.
pub const DEFAULT_SCAN_PARTS: usize = 10;

/// Roots found by a scan, in ascending parameter order.
/// Stored inline up to the default scan resolution, spilling to the heap
/// only for finer caller-supplied resolutions.
pub type Roots = TinyVec<[NativeFloat; 16]>;

/// Find the root of f in [left, right] by bisection, assuming that exactly one
/// exists and that f changes sign across the interval.
/// Converges until |f(t)| < EPSILON or the interval has shrunk below EPSILON.
///
/// Precondition: f(left) and f(right) have opposite signs. If they do not,
/// the bracketing invariant that guarantees convergence is gone, so the
/// midpoint of the interval is returned as an explicit fallback instead of
/// iterating on a bracket that cannot narrow onto a root.
pub fn bisect<Func>(f: Func, left: NativeFloat, right: NativeFloat) -> NativeFloat
where
    Func: Fn(NativeFloat) -> NativeFloat,
{
    let mut left = left;
    let mut right = right;
    let mut value_left = f(left);
    let value_right = f(right);

    // a root sitting exactly on an endpoint leaves no sign to bisect on
    if value_left.abs() < EPSILON {
        return left;
    }
    if value_right.abs() < EPSILON {
        return right;
    }
    if value_left * value_right > 0.0 {
        // no sign change, no bracket: fall back instead of looping forever
        return (left + right) / 2.0;
    }

    loop {
        let t = (left + right) / 2.0;
        let value = f(t);

        if value.abs() < EPSILON {
            return t;
        }

        if value * value_left < 0.0 {
            right = t;
        } else {
            left = t;
            value_left = value;
        }

        if (left - right).abs() <= EPSILON {
            return t;
        }
    }
}

/// Find all roots of f in [left, right] by partitioning the interval into
/// 'parts' equal subintervals and running bisect() on every subinterval whose
/// boundary values change sign. Roots are returned in ascending order.
///
/// This is a fixed-resolution heuristic: roots whose bracketing subinterval
/// does not itself contain a sign change are missed (a double root, or two
/// nearby roots inside one subinterval), and a function oscillating faster
/// than the partition resolves is undersampled. Callers pick the resolution;
/// DEFAULT_SCAN_PARTS is good enough for the low-order polynomials here.
pub fn find_all_roots<Func>(
    f: Func,
    left: NativeFloat,
    right: NativeFloat,
    parts: usize,
) -> Roots
where
    Func: Fn(NativeFloat) -> NativeFloat,
{
    assert!(parts >= 1, "the scan needs at least one subinterval");
    let dt = (right - left) / parts as NativeFloat;
    let mut roots = Roots::new();
    for i in 0..parts {
        let a = left + dt * i as NativeFloat;
        // land exactly on 'right' for the last subinterval
        let b = if i + 1 == parts {
            right
        } else {
            left + dt * (i + 1) as NativeFloat
        };
        let value_a = f(a);
        let value_b = f(b);
        if value_a.abs() < EPSILON {
            // a root sitting exactly on a scan boundary produces no sign
            // change in either adjacent subinterval, take it directly
            roots.push(a);
        } else if value_b.abs() >= EPSILON && value_a * value_b < 0.0 {
            roots.push(bisect(&f, a, b));
        }
    }
    if f(right).abs() < EPSILON {
        roots.push(right);
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bisect_linear() {
        let root = bisect(|t| t - 0.3, 0.0, 1.0);
        assert!((root - 0.3).abs() < EPSILON);
    }

    #[test]
    fn bisect_residual_below_tolerance() {
        // steep function: the interval criterion alone would leave a large
        // residual, so convergence must be driven by |f(t)| as well
        let f = |t: NativeFloat| (t - 0.7).powi(3) * 1e3;
        let root = bisect(f, 0.0, 1.0);
        assert!(root >= 0.0 && root <= 1.0);
        assert!(f(root).abs() < EPSILON);
    }

    #[test]
    fn bisect_descending_bracket() {
        // f(left) > 0 > f(right) must work as well as the ascending case
        let root = bisect(|t| 0.5 - t, 0.0, 1.0);
        assert!((root - 0.5).abs() < EPSILON);
    }

    #[test]
    fn bisect_root_on_endpoint() {
        let root = bisect(|t| t, 0.0, 1.0);
        assert!(root.abs() < EPSILON);
        let root = bisect(|t| t - 1.0, 0.0, 1.0);
        assert!((root - 1.0).abs() < EPSILON);
    }

    #[test]
    fn find_all_roots_root_on_scan_boundary() {
        // t = 0.5 falls exactly on a boundary of the 10-way partition, so
        // neither adjacent subinterval sees a sign change
        let roots = find_all_roots(|t| t - 0.5, 0.0, 1.0, DEFAULT_SCAN_PARTS);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 0.5).abs() < EPSILON);
    }

    #[test]
    fn bisect_without_sign_change_returns_midpoint() {
        // precondition violated: f is strictly positive on the interval
        let fallback = bisect(|t| t * t + 1.0, 0.0, 1.0);
        assert!((fallback - 0.5).abs() < EPSILON);
    }

    #[test]
    fn find_all_roots_of_cubic_polynomial() {
        // (t - 0.15)(t - 0.5)(t - 0.85): three well separated roots
        let f = |t: NativeFloat| (t - 0.15) * (t - 0.5) * (t - 0.85);
        let roots = find_all_roots(f, 0.0, 1.0, DEFAULT_SCAN_PARTS);
        assert_eq!(roots.len(), 3);
        assert!((roots[0] - 0.15).abs() < 1e-6);
        assert!((roots[1] - 0.5).abs() < 1e-6);
        assert!((roots[2] - 0.85).abs() < 1e-6);
    }

    #[test]
    fn find_all_roots_none() {
        let roots = find_all_roots(|t| t * t + 0.5, -1.0, 1.0, DEFAULT_SCAN_PARTS);
        assert!(roots.is_empty());
    }

    #[test]
    fn find_all_roots_ascending_order() {
        let f = |t: NativeFloat| (t + 0.45) * (t - 0.75);
        let roots = find_all_roots(f, -1.0, 1.0, 20);
        assert_eq!(roots.len(), 2);
        assert!(roots[0] < roots[1]);
    }

    #[test]
    fn coarse_scan_misses_paired_roots() {
        // two roots inside one subinterval of the 10-way partition cancel
        // their sign change and are skipped; a finer scan resolves them
        let f = |t: NativeFloat| (t - 0.512) * (t - 0.553);
        let coarse = find_all_roots(f, 0.0, 1.0, DEFAULT_SCAN_PARTS);
        assert!(coarse.is_empty());
        let fine = find_all_roots(f, 0.0, 1.0, 100);
        assert_eq!(fine.len(), 2);
    }
}
