// Statistics lab pipeline for one item
//
// extract both samples -> describe both -> histogram -> interval on the Igor
// sample -> Igor vs Gladson t-test -> decision

use crate::dataset::{Dataset, PriceSample, PriceSource};
use crate::error::{CestaError, Result};
use crate::histogram::Histogram;
use crate::inference::config::InferenceConfig;
use crate::inference::descriptive::{describe, DescriptiveSummary};
use crate::inference::hypothesis::{ttest_ind, Decision, HypothesisTestResult};
use crate::inference::interval::{t_interval, ConfidenceInterval};
use serde::Serialize;

/// Everything the statistics lab shows for one item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabReport {
    pub item: String,
    pub igor: PriceSample,
    pub gladson: PriceSample,
    pub igor_summary: DescriptiveSummary,
    pub gladson_summary: DescriptiveSummary,
    pub histogram: Histogram,
    /// Interval for the Igor mean
    pub interval: ConfidenceInterval,
    /// Igor (a) against Gladson (b); `None` when the test is undefined
    pub test: Option<HypothesisTestResult>,
    /// Why the t-test could not be computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_error: Option<String>,
}

/// Run the statistics lab for `item`
///
/// `NotFound` and descriptive/interval `Domain` errors are returned to the
/// caller. A degenerate t-test is recorded in `test_error` and the remaining
/// sections are still reported.
pub fn run_lab(dataset: &Dataset, item: &str, config: &InferenceConfig) -> Result<LabReport> {
    let igor = dataset.sample(PriceSource::Igor, item)?;
    let gladson = dataset.sample(PriceSource::Gladson, item)?;

    let igor_summary = describe(igor.values())?;
    let gladson_summary = describe(gladson.values())?;
    let histogram = Histogram::build(&[&igor, &gladson], config.histogram_bins)?;
    let interval = t_interval(igor.values(), config.confidence_level)?;
    let (test, test_error) = match ttest_ind(
        igor.values(),
        gladson.values(),
        config.variance,
        config.significance_level,
    ) {
        Ok(test) => {
            tracing::info!(
                "Lab '{}': Igor mean {:.4}, Gladson mean {:.4}, p={:.4} ({})",
                item,
                igor_summary.mean,
                gladson_summary.mean,
                test.pvalue,
                test.decision
            );
            (Some(test), None)
        }
        Err(CestaError::Domain(reason)) => {
            tracing::warn!("Lab '{}': t-test skipped: {}", item, reason);
            (None, Some(reason))
        }
        Err(e) => return Err(e),
    };

    Ok(LabReport {
        item: igor.item.clone(),
        igor,
        gladson,
        igor_summary,
        gladson_summary,
        histogram,
        interval,
        test,
        test_error,
    })
}

impl LabReport {
    /// Generate human-readable report
    pub fn to_report_string(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!("🔬 Statistics lab: {}\n\n", self.item));

        report.push_str("A. Frequency distribution\n");
        for bin in &self.histogram.bins {
            report.push_str(&format!(
                "  R$ {:>6.2} - {:>6.2}  Igor {:<2} Gladson {:<2} {}\n",
                bin.lower,
                bin.upper,
                bin.igor,
                bin.gladson,
                "█".repeat(bin.total())
            ));
        }

        report.push_str("\nB. Descriptive statistics\n");
        for (source, summary) in [
            (PriceSource::Igor, &self.igor_summary),
            (PriceSource::Gladson, &self.gladson_summary),
        ] {
            report.push_str(&format!(
                "  {:<8} mean R$ {:.2}  median R$ {:.2}  mode R$ {:.2}  std dev {:.4}\n",
                source.name(),
                summary.mean,
                summary.median,
                summary.mode,
                summary.std_dev
            ));
        }

        report.push_str(&format!(
            "\nC. Confidence interval ({:.0}%)\n",
            self.interval.level * 100.0
        ));
        report.push_str(&format!(
            "  Igor true mean price of {} lies in [ R$ {:.2} - R$ {:.2} ]\n",
            self.item, self.interval.lower, self.interval.upper
        ));

        let test = match &self.test {
            Some(test) => test,
            None => {
                report.push_str("\nD. Hypothesis test\n");
                report.push_str(&format!(
                    "  ⚠️  Not computed: {}\n",
                    self.test_error.as_deref().unwrap_or("undefined")
                ));
                return report;
            }
        };
        report.push_str(&format!(
            "\nD. Hypothesis test (Student t, {} variance)\n",
            test.variance
        ));
        report.push_str("  H0: mean prices of both lists are equal\n");
        report.push_str("  H1: mean prices differ\n");
        report.push_str(&format!("  alpha = {}\n", test.alpha));
        report.push_str(&format!(
            "  t = {:.2}, df = {:.2}, p-value = {:.4}\n",
            test.statistic, test.df, test.pvalue
        ));
        match test.decision {
            Decision::Reject => report.push_str(&format!(
                "  ❌ Reject H0: p-value ({:.4}) < {}; prices differ significantly\n",
                test.pvalue, test.alpha
            )),
            Decision::FailToReject => report.push_str(&format!(
                "  ✅ Fail to reject H0: p-value ({:.4}) >= {}; no evidence the prices differ\n",
                test.pvalue, test.alpha
            )),
        }

        report
    }
}
