// Descriptive statistics: mean, median, mode, sample standard deviation
//
// Conventions:
// - Standard deviation uses Bessel's correction (divisor n - 1)
// - Median of an even-sized sample is the mean of the two middle values
// - Mode is the smallest of the most frequent values; with no repeats this is
//   the sample minimum

use crate::error::{CestaError, Result};
use serde::Serialize;

/// Point estimates for one price sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveSummary {
    /// Sample size
    pub n: usize,
    pub mean: f64,
    pub median: f64,
    /// Smallest most-frequent value
    pub mode: f64,
    /// Sample standard deviation (n - 1)
    pub std_dev: f64,
}

fn check_sample(sample: &[f64], min_len: usize, what: &str) -> Result<()> {
    if sample.len() < min_len {
        return Err(CestaError::domain(format!(
            "{} needs at least {} observation(s), got {}",
            what,
            min_len,
            sample.len()
        )));
    }
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(CestaError::domain(format!(
            "{} is undefined for non-finite observations",
            what
        )));
    }
    Ok(())
}

fn sorted(sample: &[f64]) -> Vec<f64> {
    let mut values = sample.to_vec();
    values.sort_by(f64::total_cmp);
    values
}

/// Arithmetic mean
pub fn mean(sample: &[f64]) -> Result<f64> {
    check_sample(sample, 1, "mean")?;
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Midpoint of the sorted sample
pub fn median(sample: &[f64]) -> Result<f64> {
    check_sample(sample, 1, "median")?;
    let values = sorted(sample);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Ok((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Ok(values[mid])
    }
}

/// Most frequent value, ties resolved to the smallest
pub fn mode(sample: &[f64]) -> Result<f64> {
    check_sample(sample, 1, "mode")?;
    let values = sorted(sample);

    let mut best = values[0];
    let mut best_count = 0;
    let mut start = 0;
    while start < values.len() {
        let run = values[start..]
            .iter()
            .take_while(|&&v| v == values[start])
            .count();
        // Strictly greater keeps the earlier (smaller) value on ties
        if run > best_count {
            best = values[start];
            best_count = run;
        }
        start += run;
    }
    Ok(best)
}

/// Sample variance with Bessel's correction
pub fn variance(sample: &[f64]) -> Result<f64> {
    check_sample(sample, 2, "sample variance")?;
    let m = mean(sample)?;
    let squares: f64 = sample.iter().map(|x| (x - m) * (x - m)).sum();
    Ok(squares / (sample.len() - 1) as f64)
}

/// Sample standard deviation with Bessel's correction
pub fn std_dev(sample: &[f64]) -> Result<f64> {
    Ok(variance(sample)?.sqrt())
}

/// Mean, median, mode and standard deviation of a sample (n >= 2)
pub fn describe(sample: &[f64]) -> Result<DescriptiveSummary> {
    Ok(DescriptiveSummary {
        n: sample.len(),
        std_dev: std_dev(sample)?,
        mean: mean(sample)?,
        median: median(sample)?,
        mode: mode(sample)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARROZ_IGOR: [f64; 4] = [4.99, 5.10, 5.15, 4.15];

    #[test]
    fn test_mean_arroz() {
        assert!((mean(&ARROZ_IGOR).unwrap() - 4.8475).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_bessel_corrected() {
        // sum of squared deviations = 0.662075, divided by n - 1 = 3
        let expected = (0.662075_f64 / 3.0).sqrt();
        let sd = std_dev(&ARROZ_IGOR).unwrap();
        assert!((sd - expected).abs() < 1e-12);
        assert!((sd - 0.4698).abs() < 1e-4);
    }

    #[test]
    fn test_median_even_length() {
        assert!((median(&ARROZ_IGOR).unwrap() - 5.045).abs() < 1e-12);
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_median_odd_length() {
        assert_eq!(median(&[9.0, 1.0, 5.0]).unwrap(), 5.0);
    }

    #[test]
    fn test_mode_all_distinct_is_minimum() {
        assert_eq!(mode(&ARROZ_IGOR).unwrap(), 4.15);
    }

    #[test]
    fn test_mode_most_frequent() {
        assert_eq!(mode(&[39.90, 41.50, 44.90, 39.90]).unwrap(), 39.90);
    }

    #[test]
    fn test_mode_tie_resolves_to_smallest() {
        assert_eq!(mode(&[4.49, 4.89, 4.49, 4.89]).unwrap(), 4.49);
    }

    #[test]
    fn test_zero_price_is_literal() {
        let apple = [8.00, 9.70, 11.25, 0.00];
        assert!((mean(&apple).unwrap() - 7.2375).abs() < 1e-12);
        assert_eq!(mode(&apple).unwrap(), 0.0);
    }

    #[test]
    fn test_std_dev_single_observation_is_domain_error() {
        assert!(matches!(std_dev(&[5.0]), Err(CestaError::Domain(_))));
    }

    #[test]
    fn test_empty_sample_is_domain_error() {
        assert!(mean(&[]).is_err());
        assert!(median(&[]).is_err());
        assert!(mode(&[]).is_err());
    }

    #[test]
    fn test_nan_rejected() {
        assert!(mean(&[1.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_describe() {
        let summary = describe(&ARROZ_IGOR).unwrap();
        assert_eq!(summary.n, 4);
        assert!((summary.mean - 4.8475).abs() < 1e-12);
        assert_eq!(summary.mode, 4.15);
    }
}
