//! CSV output format for analysis reports
//!
//! Flat tables for spreadsheet analysis:
//! - trend: one row per week
//! - lab: one `metric,value` row per statistic
//! - socioeconomic: the IBGE record with its original column names

use crate::analysis::AnalysisReport;
use crate::dataset::WEEK_LABELS;
use crate::inference::LabReport;
use crate::trend::TrendReport;
use anyhow::{Context, Result};

/// Render a report as CSV text
pub fn to_csv(report: &AnalysisReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    match report {
        AnalysisReport::Trend(trend) => write_trend(&mut writer, trend)?,
        AnalysisReport::Lab(lab) => write_lab(&mut writer, lab)?,
        AnalysisReport::Socioeconomic(socio) => writer.serialize(&socio.record)?,
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

fn write_trend<W: std::io::Write>(writer: &mut csv::Writer<W>, trend: &TrendReport) -> Result<()> {
    writer.write_record(["week", "igor", "gladson", "igor_total", "gladson_total"])?;
    for (week, label) in WEEK_LABELS.iter().enumerate() {
        writer.write_record([
            label.to_string(),
            format!("{:.2}", trend.igor[week]),
            format!("{:.2}", trend.gladson[week]),
            format!("{:.2}", trend.igor_totals[week]),
            format!("{:.2}", trend.gladson_totals[week]),
        ])?;
    }
    Ok(())
}

fn write_lab<W: std::io::Write>(writer: &mut csv::Writer<W>, lab: &LabReport) -> Result<()> {
    let mut rows: Vec<(&str, f64)> = vec![
        ("igor_mean", lab.igor_summary.mean),
        ("igor_median", lab.igor_summary.median),
        ("igor_mode", lab.igor_summary.mode),
        ("igor_std_dev", lab.igor_summary.std_dev),
        ("gladson_mean", lab.gladson_summary.mean),
        ("gladson_median", lab.gladson_summary.median),
        ("gladson_mode", lab.gladson_summary.mode),
        ("gladson_std_dev", lab.gladson_summary.std_dev),
        ("ci_level", lab.interval.level),
        ("ci_lower", lab.interval.lower),
        ("ci_upper", lab.interval.upper),
        ("ci_critical_value", lab.interval.critical_value),
        ("ci_standard_error", lab.interval.standard_error),
    ];
    if let Some(test) = &lab.test {
        rows.extend([
            ("t_statistic", test.statistic),
            ("t_df", test.df),
            ("p_value", test.pvalue),
            ("alpha", test.alpha),
        ]);
    }

    writer.write_record(["metric", "value"])?;
    for (metric, value) in rows {
        writer.write_record([metric.to_string(), value.to_string()])?;
    }
    match (&lab.test, &lab.test_error) {
        (Some(test), _) => {
            writer.write_record(["decision".to_string(), test.decision.to_string()])?
        }
        (None, reason) => writer.write_record([
            "t_test_error",
            reason.as_deref().unwrap_or("undefined"),
        ])?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{run, AnalysisMode, AnalysisReport};
    use crate::inference::InferenceConfig;
    use crate::seed::seed_dataset;

    fn render(mode: AnalysisMode) -> String {
        let report = run(&seed_dataset().unwrap(), &mode, &InferenceConfig::default()).unwrap();
        to_csv(&report).unwrap()
    }

    #[test]
    fn test_csv_trend() {
        let csv = render(AnalysisMode::Trend {
            item: "Arroz".to_string(),
        });
        assert!(csv.starts_with("week,igor,gladson,igor_total,gladson_total\n"));
        assert!(csv.contains("Semana 1,4.99,3.99,"));
        assert_eq!(csv.lines().count(), 5);
    }

    #[test]
    fn test_csv_lab() {
        let csv = render(AnalysisMode::Lab {
            item: "Arroz".to_string(),
        });
        assert!(csv.starts_with("metric,value\n"));
        assert!(csv.contains("igor_mean,4.8475"));
        assert!(csv.contains("decision,fail to reject H0"));
    }

    #[test]
    fn test_csv_socioeconomic_uses_ibge_columns() {
        let csv = render(AnalysisMode::Socioeconomic {
            municipality: "Natal".to_string(),
        });
        assert!(csv.starts_with(
            "Municipio,PIB_Per_Capita,Salario_Medio,Comprometimento_Renda,Custo_Cesta\n"
        ));
        assert!(csv.contains("Natal,26972.28"));
    }

    #[test]
    fn test_csv_lab_without_ttest() {
        let report = match run(
            &seed_dataset().unwrap(),
            &AnalysisMode::Lab {
                item: "Arroz".to_string(),
            },
            &InferenceConfig::default(),
        )
        .unwrap()
        {
            AnalysisReport::Lab(mut lab) => {
                lab.test = None;
                lab.test_error = Some("both samples have zero variance".to_string());
                AnalysisReport::Lab(lab)
            }
            other => panic!("Expected lab report, got {:?}", other),
        };
        let csv = to_csv(&report).unwrap();
        assert!(csv.contains("ci_lower,"));
        assert!(!csv.contains("p_value"));
        assert!(csv.contains("t_test_error,both samples have zero variance"));
    }
}
