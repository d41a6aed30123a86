// Independent two-sample t-test for equality of means
//
// H0: the two sources have equal mean prices
// H1: the means differ (two-tailed)
//
// Pooled (Student) variance is the default, matching the reference
// statistics library's `ttest_ind` default. Welch's variant is available for
// samples with clearly unequal spreads; the two differ in their degrees of
// freedom and therefore in the p-value.

use crate::error::{CestaError, Result};
use crate::inference::descriptive::{mean, variance};
use crate::inference::distribution::t_two_tailed_pvalue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Variance assumption of the two-sample t-test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarianceAssumption {
    /// Equal variances, pooled estimate, df = n_a + n_b - 2
    #[default]
    Pooled,
    /// Unequal variances, Welch-Satterthwaite df
    Welch,
}

impl fmt::Display for VarianceAssumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarianceAssumption::Pooled => f.write_str("pooled"),
            VarianceAssumption::Welch => f.write_str("welch"),
        }
    }
}

/// Outcome of the decision rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decision {
    /// p < alpha: the means differ significantly
    Reject,
    /// p >= alpha: no evidence the means differ
    FailToReject,
}

impl Decision {
    pub fn from_pvalue(pvalue: f64, alpha: f64) -> Self {
        if pvalue < alpha {
            Decision::Reject
        } else {
            Decision::FailToReject
        }
    }

    pub fn is_reject(self) -> bool {
        self == Decision::Reject
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Reject => f.write_str("reject H0"),
            Decision::FailToReject => f.write_str("fail to reject H0"),
        }
    }
}

/// Result of a two-sample t-test
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HypothesisTestResult {
    /// Signed t statistic (mean_a - mean_b) / se
    pub statistic: f64,
    /// Two-tailed p-value in [0, 1]
    pub pvalue: f64,
    /// Degrees of freedom
    pub df: f64,
    /// Significance level the decision was taken at
    pub alpha: f64,
    pub variance: VarianceAssumption,
    /// mean_a - mean_b
    pub mean_difference: f64,
    pub decision: Decision,
}

/// Two-sample t-test of `a` against `b`
///
/// # Errors
/// `Domain` when either sample has fewer than 2 observations, when both
/// samples have zero variance (the statistic would be 0/0 or infinite), or
/// when `alpha` is outside (0, 1).
pub fn ttest_ind(
    a: &[f64],
    b: &[f64],
    assumption: VarianceAssumption,
    alpha: f64,
) -> Result<HypothesisTestResult> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(CestaError::domain(format!(
            "significance level must be in (0, 1), got {}",
            alpha
        )));
    }
    if a.len() < 2 || b.len() < 2 {
        return Err(CestaError::domain(format!(
            "t-test needs at least 2 observations per sample, got {} and {}",
            a.len(),
            b.len()
        )));
    }

    let (na, nb) = (a.len() as f64, b.len() as f64);
    let (va, vb) = (variance(a)?, variance(b)?);
    let mean_difference = mean(a)? - mean(b)?;

    let (se, df) = match assumption {
        VarianceAssumption::Pooled => {
            let df = na + nb - 2.0;
            let pooled = ((na - 1.0) * va + (nb - 1.0) * vb) / df;
            ((pooled * (1.0 / na + 1.0 / nb)).sqrt(), df)
        }
        VarianceAssumption::Welch => {
            let (sa, sb) = (va / na, vb / nb);
            let se2 = sa + sb;
            let df = se2 * se2 / (sa * sa / (na - 1.0) + sb * sb / (nb - 1.0));
            (se2.sqrt(), df)
        }
    };

    if se == 0.0 {
        return Err(CestaError::domain(
            "t-test is undefined when both samples have zero variance",
        ));
    }

    let statistic = mean_difference / se;
    let pvalue = t_two_tailed_pvalue(statistic, df)?;
    let decision = Decision::from_pvalue(pvalue, alpha);

    tracing::debug!(
        "t-test ({}): t={:.4}, df={:.3}, p={:.4}, {}",
        assumption,
        statistic,
        df,
        pvalue,
        decision
    );

    Ok(HypothesisTestResult {
        statistic,
        pvalue,
        df,
        alpha,
        variance: assumption,
        mean_difference,
        decision,
    })
}
