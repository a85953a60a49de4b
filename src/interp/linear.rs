/// Locates `x` on the ascending grid `xp`.
///
/// Returns the index of the lower node and the fractional position inside
/// the bracketing cell. Both ends are inclusive: `x == xp[last]` maps to the
/// last cell with a fraction of 1. Returns `None` outside the grid (or for
/// NaN), never clamps.
pub fn bracket(xp: &[f64], x: f64) -> Option<(usize, f64)> {
    let n = xp.len();
    if n < 2 || !(xp[0]..=xp[n - 1]).contains(&x) {
        return None;
    }

    let hi = xp.partition_point(|&v| v < x).clamp(1, n - 1);
    let lo = hi - 1;
    let t = (x - xp[lo]) / (xp[hi] - xp[lo]);
    Some((lo, t))
}

/// Linear interpolation of `(xp, fp)` at `x`, `None` outside the grid.
pub fn interp_one(x: f64, xp: &[f64], fp: &[f64]) -> Option<f64> {
    let (lo, t) = bracket(xp, x)?;
    Some(fp[lo] + t * (fp[lo + 1] - fp[lo]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_interior_and_edges() {
        let xp = [1.0, 2.0, 4.0];

        assert_eq!(bracket(&xp, 1.0), Some((0, 0.0)));
        assert_eq!(bracket(&xp, 3.0), Some((1, 0.5)));
        assert_eq!(bracket(&xp, 4.0), Some((1, 1.0)));
        assert_eq!(bracket(&xp, 2.0), Some((0, 1.0)));
    }

    #[test]
    fn test_bracket_outside_grid() {
        let xp = [1.0, 2.0, 4.0];
        assert_eq!(bracket(&xp, 0.999), None);
        assert_eq!(bracket(&xp, 4.001), None);
        assert_eq!(bracket(&xp, f64::NAN), None);
        assert_eq!(bracket(&[1.0], 1.0), None);
    }

    #[test]
    fn test_interp_basic() {
        let xp = [0.0, 1.0, 2.0];
        let fp = [0.0, 10.0, 20.0];

        assert!((interp_one(0.5, &xp, &fp).unwrap() - 5.0).abs() < 1e-12);
        assert!((interp_one(1.5, &xp, &fp).unwrap() - 15.0).abs() < 1e-12);
        assert_eq!(interp_one(2.0, &xp, &fp), Some(20.0));
        assert_eq!(interp_one(2.5, &xp, &fp), None);
    }
}
