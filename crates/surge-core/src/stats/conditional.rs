//! Conditional normal parameters for chained scenario variables.
//!
//! Given paired samples of a reference variable and M dependent variables,
//! computes the bivariate-normal conditional mean and spread of each
//! dependent variable at an observed reference value. The correlation of
//! column i is decayed by `1 − 0.02·i`.

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Correlation decay applied per column index.
const CORR_DECAY_PER_COLUMN: f64 = 0.02;

/// Conditional mean and standard deviation of one scenario variable given
/// an observed value of the reference variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionalNormal {
    pub mean: f64,
    pub std: f64,
}

impl ConditionalNormal {
    /// Draw one value from the distribution. A degenerate spread collapses
    /// to the mean.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match Normal::new(self.mean, self.std) {
            Ok(dist) => dist.sample(rng),
            Err(_) => self.mean,
        }
    }
}

/// Per-column conditional normal parameters given `observed` for the
/// reference variable.
///
/// `columns` holds the M dependent sample vectors; `reference` holds the
/// paired reference samples. Population (biased) moments are used
/// throughout. A reference with no spread carries no information, so its
/// columns come back with their unconditional parameters.
pub fn conditional_normal_parameters(
    columns: &[Vec<f64>],
    reference: &[f64],
    observed: f64,
) -> Vec<ConditionalNormal> {
    let mu_x = mean(reference);
    let sig_x = pop_std(reference);

    columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let mu_y = mean(col);
            let sig_y = pop_std(col);
            if sig_x < 1e-12 {
                return ConditionalNormal { mean: mu_y, std: sig_y };
            }
            let rho = pearson_r(reference, col) * (1.0 - i as f64 * CORR_DECAY_PER_COLUMN);
            ConditionalNormal {
                mean: mu_y + rho * (sig_y / sig_x) * (observed - mu_x),
                std: (sig_y * sig_y * (1.0 - rho * rho)).sqrt(),
            }
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population (ddof = 0) standard deviation.
fn pop_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|&v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

fn pearson_r(x: &[f64], y: &[f64]) -> f64 {
    let mx = mean(x);
    let my = mean(y);
    let num: f64 = x.iter().zip(y).map(|(&a, &b)| (a - mx) * (b - my)).sum();
    let dx = x.iter().map(|&a| (a - mx).powi(2)).sum::<f64>().sqrt();
    let dy = y.iter().map(|&b| (b - my).powi(2)).sum::<f64>().sqrt();
    if dx < 1e-12 || dy < 1e-12 {
        return 0.0;
    }
    (num / (dx * dy)).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference() -> Vec<f64> {
        (0..40).map(|i| i as f64 * 0.5).collect()
    }

    #[test]
    fn perfectly_correlated_column_pins_the_mean() {
        // Column 0 carries no decay; y = 2x gives rho = 1, so the
        // conditional mean is exactly 2·observed with no spread left.
        let x = reference();
        let y: Vec<f64> = x.iter().map(|v| v * 2.0).collect();
        let params = conditional_normal_parameters(&[y], &x, 7.3);
        assert_relative_eq!(params[0].mean, 14.6, epsilon = 1e-9);
        assert!(params[0].std < 1e-9, "std={}", params[0].std);
    }

    #[test]
    fn decay_leaves_residual_spread_in_later_columns() {
        let x = reference();
        let y: Vec<f64> = x.iter().map(|v| v * 2.0).collect();
        let cols = vec![y.clone(), y.clone(), y];
        let params = conditional_normal_parameters(&cols, &x, 7.3);
        // rho = 0.98 and 0.96 for columns 1 and 2.
        assert!(params[0].std < params[1].std);
        assert!(params[1].std < params[2].std);
        assert!(params[1].std > 0.0);
    }

    #[test]
    fn flat_reference_returns_unconditional_parameters() {
        let x = vec![4.0; 20];
        let y: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let params = conditional_normal_parameters(&[y.clone()], &x, 9.0);
        assert_relative_eq!(params[0].mean, mean(&y), epsilon = 1e-12);
        assert_relative_eq!(params[0].std, pop_std(&y), epsilon = 1e-12);
    }

    #[test]
    fn anticorrelated_column_moves_against_the_observation() {
        let x = reference();
        let y: Vec<f64> = x.iter().map(|v| 100.0 - v).collect();
        let mu_y = mean(&y);
        // Observing above the reference mean pushes the column below its
        // own mean.
        let above = mean(&x) + 3.0;
        let params = conditional_normal_parameters(&[y], &x, above);
        assert!(params[0].mean < mu_y, "mean={} mu_y={mu_y}", params[0].mean);
    }

    #[test]
    fn sampling_a_tight_distribution_stays_near_the_mean() {
        let dist = ConditionalNormal { mean: 12.0, std: 0.01 };
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = dist.sample(&mut rng);
            assert!((v - 12.0).abs() < 0.1, "draw {v} strayed from the mean");
        }
    }

    #[test]
    fn degenerate_spread_collapses_to_the_mean() {
        let dist = ConditionalNormal { mean: 5.0, std: f64::NAN };
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(dist.sample(&mut rng), 5.0);
    }
}
