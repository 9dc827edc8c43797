//! Return-period probability buckets.

/// Discretize an annual-exceedance curve into `n` return-period buckets.
///
/// Entry 0 is `1 − 1/inc`; entry k (k ≥ 1) is `(1/k − 1/(k+1)) / inc` for
/// increasing return periods. The last entry is then replaced by
/// `1 − sum(entries[..n−2])` to close the distribution, and the whole
/// vector is renormalized to sum to exactly 1.
///
/// Meaningful for `n ≥ 2` and `inc > 1`; degenerate sizes return an empty
/// or single-bucket distribution.
pub fn return_probability(n: usize, inc: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }

    let mut p = vec![0.0f64; n];
    p[0] = 1.0 - 1.0 / inc;
    for k in 1..n {
        p[k] = (1.0 / k as f64 - 1.0 / (k + 1) as f64) / inc;
    }

    if n >= 2 {
        let partial: f64 = p[..n - 2].iter().sum();
        p[n - 1] = 1.0 - partial;
    }

    let total: f64 = p.iter().sum();
    for v in &mut p {
        *v /= total;
    }
    p
}
