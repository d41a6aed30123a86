//! JSON output format for analysis reports

use crate::analysis::AnalysisReport;
use crate::inference::InferenceConfig;
use serde::Serialize;

/// Root JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    /// Crate version that produced the report
    pub version: String,
    /// Format name
    pub format: String,
    /// Parameters the statistics were computed with
    pub config: &'a InferenceConfig,
    pub report: &'a AnalysisReport,
}

impl<'a> JsonOutput<'a> {
    pub fn new(report: &'a AnalysisReport, config: &'a InferenceConfig) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "cesta-json-v1".to_string(),
            config,
            report,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
