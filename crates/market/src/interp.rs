//! Clamped linear interpolation.

/// Linearly map `x` from `domain` onto `range`, clamping at the domain edges.
///
/// The range may be inverted (`range.0 > range.1`) to express inverse
/// relationships such as quality → crime rate.
pub fn interp(x: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let (x0, x1) = domain;
    let (y0, y1) = range;
    debug_assert!(x0 < x1, "interp domain must be increasing");

    if x <= x0 {
        return y0;
    }
    if x >= x1 {
        return y1;
    }
    y0 + (x - x0) / (x1 - x0) * (y1 - y0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let y = interp(0.825, (0.70, 0.95), (2_000.0, 15_000.0));
        assert!((y - 8_500.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamps_at_edges() {
        assert_eq!(interp(0.5, (0.70, 0.95), (2_000.0, 15_000.0)), 2_000.0);
        assert_eq!(interp(0.99, (0.70, 0.95), (2_000.0, 15_000.0)), 15_000.0);
    }

    #[test]
    fn test_inverted_range() {
        // Higher quality, lower crime.
        let low_q = interp(0.70, (0.70, 0.95), (1.0, 0.2));
        let high_q = interp(0.95, (0.70, 0.95), (1.0, 0.2));
        assert_eq!(low_q, 1.0);
        assert!((high_q - 0.2).abs() < 1e-12);
        assert!(low_q > high_q);
    }

    #[test]
    fn test_monotone_in_x() {
        let mut last = f64::NEG_INFINITY;
        for i in 0..=100 {
            let x = 0.6 + i as f64 * 0.004;
            let y = interp(x, (0.70, 0.95), (0.3, 1.0));
            assert!(y >= last, "interp not monotone at x={x}");
            last = y;
        }
    }
}
