//! Weekly price-trend comparison
//!
//! Per-item series from both lists next to the weekly basket totals.

use crate::dataset::{Dataset, PriceSource, WEEKS, WEEK_LABELS};
use crate::error::Result;
use serde::Serialize;

/// Price evolution of one item across the four collection weeks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub item: String,
    pub igor: [f64; WEEKS],
    pub gladson: [f64; WEEKS],
    /// Sum of every Igor item per week
    pub igor_totals: [f64; WEEKS],
    /// Sum of every Gladson item per week
    pub gladson_totals: [f64; WEEKS],
}

impl TrendReport {
    pub fn series(&self, source: PriceSource) -> &[f64; WEEKS] {
        match source {
            PriceSource::Igor => &self.igor,
            PriceSource::Gladson => &self.gladson,
        }
    }

    pub fn totals(&self, source: PriceSource) -> &[f64; WEEKS] {
        match source {
            PriceSource::Igor => &self.igor_totals,
            PriceSource::Gladson => &self.gladson_totals,
        }
    }

    /// Generate human-readable report
    pub fn to_report_string(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("📈 Price evolution: {}\n\n", self.item));
        report.push_str(&format!("{:<10} {:>10} {:>10}\n", "Week", "Igor", "Gladson"));
        report.push_str("─────────────────────────────────\n");
        for (week, label) in WEEK_LABELS.iter().enumerate() {
            report.push_str(&format!(
                "{:<10} {:>10} {:>10}\n",
                label,
                format!("R$ {:.2}", self.igor[week]),
                format!("R$ {:.2}", self.gladson[week])
            ));
        }

        report.push_str("\n💰 Basket total cost (sum)\n");
        report.push_str(&format!("{:<10} {:>12} {:>12}\n", "Week", "Igor", "Gladson"));
        report.push_str("─────────────────────────────────────\n");
        for (week, label) in WEEK_LABELS.iter().enumerate() {
            report.push_str(&format!(
                "{:<10} {:>12} {:>12}\n",
                label,
                format!("R$ {:.2}", self.igor_totals[week]),
                format!("R$ {:.2}", self.gladson_totals[week])
            ));
        }
        report
    }
}

/// Build the trend comparison for `item`
pub fn build_trend(dataset: &Dataset, item: &str) -> Result<TrendReport> {
    let igor = dataset.sample(PriceSource::Igor, item)?;
    let gladson = dataset.sample(PriceSource::Gladson, item)?;
    Ok(TrendReport {
        item: igor.item,
        igor: igor.prices,
        gladson: gladson.prices,
        igor_totals: dataset.igor.weekly_totals(),
        gladson_totals: dataset.gladson.weekly_totals(),
    })
}
