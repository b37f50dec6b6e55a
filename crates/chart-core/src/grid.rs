// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers for the value axis.

/// Round `raw` up to 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw > 0.0) || !raw.is_finite() { return 1.0; }
    let mag = 10f64.powi(raw.log10().floor() as i32);
    let frac = raw / mag;
    let nice = if frac <= 1.0 { 1.0 } else if frac <= 2.0 { 2.0 } else if frac <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Ticks at a "nice" step covering `[min, max]`, roughly `target` of them.
/// Every returned tick lies inside the range.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) || target == 0 { return vec![min]; }
    let step = nice_step((max - min) / target as f64);
    let first = (min / step).ceil();
    let last = (max / step).floor();
    let count = (last - first).max(0.0) as usize;
    (0..=count).map(|k| (first + k as f64) * step).collect()
}

/// Decimals needed to print ticks spaced by `step` without noise.
pub fn tick_decimals(step: f64) -> usize {
    if !(step > 0.0) || step >= 1.0 { return 0; }
    (-step.log10() - 1e-9).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_nice() {
        assert_eq!(nice_step(0.867), 1.0);
        assert_eq!(nice_step(0.3), 0.5);
        assert_eq!(nice_step(1.5), 2.0);
        assert_eq!(nice_step(7.0), 10.0);
        assert!((nice_step(0.013) - 0.02).abs() < 1e-12);
    }

    #[test]
    fn satisfaction_axis_ticks() {
        assert_eq!(nice_ticks(0.0, 5.2, 6), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(tick_decimals(1.0), 0);
        assert_eq!(tick_decimals(0.5), 1);
        assert_eq!(tick_decimals(0.02), 2);
    }

    #[test]
    fn degenerate_range() {
        assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
        assert_eq!(nice_ticks(5.0, 1.0, 5), vec![5.0]);
        assert_eq!(nice_ticks(0.0, 1.0, 0), vec![0.0]);
    }
}
