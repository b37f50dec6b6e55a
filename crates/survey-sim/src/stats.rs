// File: crates/survey-sim/src/stats.rs
// Summary: Sample statistics and the two-sided 95% Student's t critical value.

/// Two-sided 95% critical values of Student's t for df = 1..=30.
const T_975: [f64; 30] = [
    12.706_204_736, 4.302_652_730, 3.182_446_305, 2.776_445_105, 2.570_581_836,
    2.446_911_851, 2.364_624_252, 2.306_004_135, 2.262_157_163, 2.228_138_852,
    2.200_985_160, 2.178_812_830, 2.160_368_656, 2.144_786_688, 2.131_449_546,
    2.119_905_299, 2.109_815_578, 2.100_922_040, 2.093_024_054, 2.085_963_447,
    2.079_613_845, 2.073_873_068, 2.068_657_610, 2.063_898_562, 2.059_538_553,
    2.055_529_439, 2.051_830_516, 2.048_407_142, 2.045_229_642, 2.042_272_456,
];

/// 97.5th percentile of the standard normal.
pub const Z_975: f64 = 1.959_963_984_540_054;

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() { return None; }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator). Zero for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 { return 0.0; }
    let m = values.iter().sum::<f64>() / n as f64;
    let ss = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>();
    (ss / (n - 1) as f64).sqrt()
}

/// Upper 97.5% quantile of Student's t with `df` degrees of freedom.
///
/// Exact table up to 30, Cornish-Fisher expansion around the normal quantile beyond.
/// `df == 0` has no finite quantile and returns infinity.
pub fn t_critical_975(df: usize) -> f64 {
    match df {
        0 => f64::INFINITY,
        1..=30 => T_975[df - 1],
        _ => {
            let z = Z_975;
            let v = df as f64;
            let z2 = z * z;
            let z3 = z2 * z;
            let z5 = z3 * z2;
            let z7 = z5 * z2;
            let z9 = z7 * z2;
            z + (z3 + z) / (4.0 * v)
                + (5.0 * z5 + 16.0 * z3 + 3.0 * z) / (96.0 * v * v)
                + (3.0 * z7 + 19.0 * z5 + 17.0 * z3 - 15.0 * z) / (384.0 * v.powi(3))
                + (79.0 * z9 + 776.0 * z7 + 1482.0 * z5 - 1920.0 * z3 - 945.0 * z) / (92_160.0 * v.powi(4))
        }
    }
}

/// Half-width of the 95% t-interval for a mean: `t(n-1) * s / sqrt(n)`.
/// Zero when `n < 2`, where the spread of the mean cannot be estimated.
pub fn confidence_half_width(std_dev: f64, n: usize) -> f64 {
    if n < 2 { return 0.0; }
    t_critical_975(n - 1) * std_dev / (n as f64).sqrt()
}
