// Configuration for the statistics lab
//
// Defaults reproduce the reference analysis: 95% confidence interval, alpha
// 0.05, pooled-variance t-test, 10 histogram bins.

use crate::inference::hypothesis::VarianceAssumption;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters of the inferential statistics pipeline
///
/// # Example
/// ```
/// use cesta::inference::InferenceConfig;
///
/// let config = InferenceConfig::default();
/// assert_eq!(config.confidence_level, 0.95);
/// assert_eq!(config.significance_level, 0.05);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Confidence level of the interval estimate, in (0, 1)
    pub confidence_level: f64,

    /// Significance level (alpha) of the t-test decision, in (0, 1)
    ///
    /// H0 is rejected iff p < alpha.
    pub significance_level: f64,

    /// Variance assumption of the two-sample t-test
    pub variance: VarianceAssumption,

    /// Number of equal-width bins of the frequency distribution
    pub histogram_bins: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            significance_level: 0.05,
            variance: VarianceAssumption::Pooled,
            histogram_bins: 10,
        }
    }
}

impl InferenceConfig {
    /// 99% interval, alpha 0.01
    pub fn strict() -> Self {
        Self {
            confidence_level: 0.99,
            significance_level: 0.01,
            ..Self::default()
        }
    }

    /// 90% interval, alpha 0.10
    pub fn permissive() -> Self {
        Self {
            confidence_level: 0.90,
            significance_level: 0.10,
            ..Self::default()
        }
    }

    /// Load a configuration from a TOML file; absent keys keep their defaults
    ///
    /// # Example TOML
    /// ```toml
    /// confidence_level = 0.99
    /// significance_level = 0.01
    /// variance = "welch"
    /// ```
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read config file: {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: InferenceConfig =
            toml::from_str(content).context("Failed to parse TOML inference config")?;
        config.validate().map_err(anyhow::Error::msg)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(format!(
                "confidence_level must be in (0, 1), got {}",
                self.confidence_level
            ));
        }

        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(format!(
                "significance_level must be in (0, 1), got {}",
                self.significance_level
            ));
        }

        if self.histogram_bins == 0 {
            return Err("histogram_bins must be >= 1".to_string());
        }

        Ok(())
    }
}
