// Two-sided Student-t confidence interval for a population mean
//
// interval = mean +/- t(1 - (1 - level) / 2, n - 1) * s / sqrt(n)
//
// With four observations the t critical value (3.18 at 95%) is far from the
// normal 1.96, so a z interval is never substituted.

use crate::error::{CestaError, Result};
use crate::inference::descriptive::{mean, std_dev};
use crate::inference::distribution::t_critical_value;
use serde::Serialize;

/// Confidence interval for the mean of one sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    /// Confidence level in (0, 1)
    pub level: f64,
    /// Sample mean (interval centre)
    pub mean: f64,
    /// Standard error of the mean
    pub standard_error: f64,
    /// Student-t critical value
    pub critical_value: f64,
    /// Degrees of freedom (n - 1)
    pub df: f64,
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Standard error of the mean: s / sqrt(n)
pub fn standard_error(sample: &[f64]) -> Result<f64> {
    Ok(std_dev(sample)? / (sample.len() as f64).sqrt())
}

/// Student-t confidence interval for the mean of `sample`
///
/// A sample with zero spread yields a zero-width interval at the mean.
pub fn t_interval(sample: &[f64], level: f64) -> Result<ConfidenceInterval> {
    if sample.len() < 2 {
        return Err(CestaError::domain(format!(
            "confidence interval needs at least 2 observations, got {}",
            sample.len()
        )));
    }

    let df = (sample.len() - 1) as f64;
    let critical_value = t_critical_value(level, df)?;
    let centre = mean(sample)?;
    let se = standard_error(sample)?;
    let margin = critical_value * se;

    Ok(ConfidenceInterval {
        level,
        mean: centre,
        standard_error: se,
        critical_value,
        df,
        lower: centre - margin,
        upper: centre + margin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARROZ_IGOR: [f64; 4] = [4.99, 5.10, 5.15, 4.15];

    #[test]
    fn test_arroz_95_interval() {
        let ci = t_interval(&ARROZ_IGOR, 0.95).unwrap();
        assert_eq!(ci.df, 3.0);
        assert!(ci.lower < ci.mean && ci.mean < ci.upper);
        // 4.8475 +/- 3.182446 * 0.234889
        assert!((ci.lower - 4.1000).abs() < 1e-3, "lower = {}", ci.lower);
        assert!((ci.upper - 5.5950).abs() < 1e-3, "upper = {}", ci.upper);
    }

    #[test]
    fn test_width_grows_with_level() {
        let levels = [0.90, 0.95, 0.99];
        let widths: Vec<f64> = levels
            .iter()
            .map(|&l| t_interval(&ARROZ_IGOR, l).unwrap().width())
            .collect();
        assert!(widths[0] < widths[1]);
        assert!(widths[1] < widths[2]);
    }

    #[test]
    fn test_zero_spread_gives_zero_width() {
        let ci = t_interval(&[5.0, 5.0, 5.0, 5.0], 0.95).unwrap();
        assert_eq!(ci.lower, 5.0);
        assert_eq!(ci.upper, 5.0);
        assert_eq!(ci.width(), 0.0);
    }

    #[test]
    fn test_single_observation_is_domain_error() {
        assert!(matches!(
            t_interval(&[5.0], 0.95),
            Err(CestaError::Domain(_))
        ));
    }

    #[test]
    fn test_invalid_level_is_domain_error() {
        assert!(t_interval(&ARROZ_IGOR, 1.5).is_err());
        assert!(t_interval(&ARROZ_IGOR, 0.0).is_err());
    }
}
