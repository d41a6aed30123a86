// Inferential statistics for weekly price samples
//
// Pipeline per selected item:
//   sample extraction -> descriptive statistics -> Student-t confidence
//   interval -> independent two-sample t-test -> decision at fixed alpha
//
// All computations are pure functions over f64 slices. The Student-t
// distribution (CDF and quantile) comes from statrs; the remaining point
// estimates are direct arithmetic over at most four observations.
//
// Zero prices are literal observations. Nothing here filters or imputes them.

mod config;
mod descriptive;
mod distribution;
mod hypothesis;
mod interval;
mod pipeline;

pub use config::InferenceConfig;
pub use descriptive::{describe, mean, median, mode, std_dev, variance, DescriptiveSummary};
pub use distribution::{t_critical_value, t_two_tailed_pvalue};
pub use hypothesis::{ttest_ind, Decision, HypothesisTestResult, VarianceAssumption};
pub use interval::{standard_error, t_interval, ConfidenceInterval};
pub use pipeline::{run_lab, LabReport};

#[cfg(test)]
mod tests;
