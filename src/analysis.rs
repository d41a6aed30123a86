//! Analysis modes
//!
//! Each mode consumes only the part of the dataset it needs and produces one
//! report variant. Errors are local to the request; the dataset is untouched.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::inference::{run_lab, InferenceConfig, LabReport};
use crate::socioeconomic::{build_socioeconomic, SocioeconomicReport};
use crate::trend::{build_trend, TrendReport};
use serde::Serialize;

/// User selection: which panel, for which item or municipality
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Weekly price comparison of one item
    Trend { item: String },
    /// Frequency distribution, descriptive stats, interval and t-test of one item
    Lab { item: String },
    /// IBGE indicators of one municipality
    Socioeconomic { municipality: String },
}

/// Output of one analysis request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AnalysisReport {
    Trend(TrendReport),
    Lab(LabReport),
    Socioeconomic(SocioeconomicReport),
}

impl AnalysisReport {
    /// Generate human-readable report
    pub fn to_report_string(&self) -> String {
        match self {
            AnalysisReport::Trend(report) => report.to_report_string(),
            AnalysisReport::Lab(report) => report.to_report_string(),
            AnalysisReport::Socioeconomic(report) => report.to_report_string(),
        }
    }

    /// Short title for report headers
    pub fn title(&self) -> String {
        match self {
            AnalysisReport::Trend(r) => format!("Price comparison: {}", r.item),
            AnalysisReport::Lab(r) => format!("Statistics lab: {}", r.item),
            AnalysisReport::Socioeconomic(r) => {
                format!("Socioeconomic impact: {}", r.record.name)
            }
        }
    }
}

/// Run one analysis against the loaded dataset
pub fn run(dataset: &Dataset, mode: &AnalysisMode, config: &InferenceConfig) -> Result<AnalysisReport> {
    tracing::debug!("Running analysis {:?}", mode);
    let report = match mode {
        AnalysisMode::Trend { item } => AnalysisReport::Trend(build_trend(dataset, item)?),
        AnalysisMode::Lab { item } => AnalysisReport::Lab(run_lab(dataset, item, config)?),
        AnalysisMode::Socioeconomic { municipality } => {
            AnalysisReport::Socioeconomic(build_socioeconomic(dataset, municipality)?)
        }
    };
    Ok(report)
}
