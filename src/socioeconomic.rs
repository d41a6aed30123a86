//! Socioeconomic lookup panel (IBGE indicators)

use crate::dataset::{Dataset, MunicipalRecord};
use crate::error::Result;
use serde::Serialize;

/// KPIs and narrative for one municipality
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocioeconomicReport {
    pub record: MunicipalRecord,
    pub narrative: String,
}

impl SocioeconomicReport {
    /// Generate human-readable report
    pub fn to_report_string(&self) -> String {
        let r = &self.record;
        let mut report = String::new();
        report.push_str(&format!("🏙️  Regional indicators: {}\n\n", r.name));
        report.push_str(&format!(
            "  PIB per capita            R$ {}\n",
            format_thousands(r.pib_per_capita)
        ));
        report.push_str(&format!(
            "  Average wage (min. wages) {:.1}\n",
            r.average_wage
        ));
        report.push_str(&format!(
            "  Basket cost               R$ {:.2}\n",
            r.basket_cost
        ));
        report.push_str(&format!(
            "  Income commitment         {:.2}%\n\n",
            r.income_commitment
        ));
        report.push_str(&self.narrative);
        report.push('\n');
        report
    }
}

/// Municipality names available for lookup, sorted
pub fn municipalities(dataset: &Dataset) -> Vec<&str> {
    dataset.ibge.names_sorted()
}

/// Build the panel for `municipality` (exact, case-sensitive name)
pub fn build_socioeconomic(dataset: &Dataset, municipality: &str) -> Result<SocioeconomicReport> {
    let record = dataset.ibge.lookup(municipality)?.clone();
    let narrative = narrative(&record);
    Ok(SocioeconomicReport { record, narrative })
}

fn narrative(record: &MunicipalRecord) -> String {
    format!(
        "The municipality of {name} has a PIB per capita of R$ {pib}. \
         With an average local wage of {wage:.1} minimum wages, the basic food \
         basket consumes approximately {commitment:.2}% of the estimated monthly \
         income of a worker.",
        name = record.name,
        pib = format_thousands(record.pib_per_capita),
        wage = record.average_wage,
        commitment = record.income_commitment,
    )
}

/// Format with two decimals and comma thousands separators (12,785.32)
pub(crate) fn format_thousands(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}
