// Student-t distribution helpers backed by statrs

use crate::error::{CestaError, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

fn standard_t(df: f64) -> Result<StudentsT> {
    if !(df.is_finite() && df > 0.0) {
        return Err(CestaError::domain(format!(
            "degrees of freedom must be positive, got {}",
            df
        )));
    }
    StudentsT::new(0.0, 1.0, df)
        .map_err(|e| CestaError::domain(format!("invalid Student-t distribution: {}", e)))
}

/// Two-sided critical value of Student's t for a confidence level
///
/// Returns the quantile at `(1 + level) / 2` with `df` degrees of freedom.
pub fn t_critical_value(level: f64, df: f64) -> Result<f64> {
    if !(level > 0.0 && level < 1.0) {
        return Err(CestaError::domain(format!(
            "confidence level must be in (0, 1), got {}",
            level
        )));
    }
    Ok(standard_t(df)?.inverse_cdf((1.0 + level) / 2.0))
}

/// Two-tailed p-value of a t statistic
pub fn t_two_tailed_pvalue(statistic: f64, df: f64) -> Result<f64> {
    if statistic.is_nan() {
        return Err(CestaError::domain("t statistic is NaN"));
    }
    let tail = standard_t(df)?.cdf(-statistic.abs());
    Ok((2.0 * tail).clamp(0.0, 1.0))
}
