// End-to-end tests for the statistics lab pipeline
//
// Uses the collected seed data so the scenarios match the published tables.

use super::*;
use crate::dataset::{PriceRow, PriceSource, PriceTable, WEEKS};
use crate::error::CestaError;
use crate::seed::seed_dataset;

/// Scenario: Arroz, Igor [4.99, 5.10, 5.15, 4.15] vs Gladson [3.99, 4.79, 2.99, 4.35]
/// Expected: Igor mean 4.8475 inside its 95% interval; decision follows p < 0.05
#[test]
fn test_arroz_end_to_end() {
    let dataset = seed_dataset().unwrap();
    let report = run_lab(&dataset, "Arroz", &InferenceConfig::default()).unwrap();

    assert_eq!(report.igor.prices, [4.99, 5.10, 5.15, 4.15]);
    assert_eq!(report.gladson.prices, [3.99, 4.79, 2.99, 4.35]);
    assert!((report.igor_summary.mean - 4.8475).abs() < 1e-12);
    assert!(report.interval.contains(4.8475));
    assert!(report.interval.lower < report.interval.upper);
    assert_eq!(report.interval.level, 0.95);
    let test = report.test.as_ref().unwrap();
    assert!((0.0..=1.0).contains(&test.pvalue));
    assert_eq!(test.decision.is_reject(), test.pvalue < 0.05);
    assert!(report.test_error.is_none());
}

/// Every item of the collection must run through the pipeline
#[test]
fn test_all_items_produce_reports() {
    let dataset = seed_dataset().unwrap();
    let config = InferenceConfig::default();
    for item in dataset.igor.items() {
        let report = run_lab(&dataset, item, &config)
            .unwrap_or_else(|e| panic!("lab failed for {}: {}", item, e));
        assert_eq!(report.igor.values().len(), WEEKS);
        assert_eq!(report.gladson.values().len(), WEEKS);
        assert_eq!(report.histogram.total(PriceSource::Igor), WEEKS);
        assert_eq!(report.histogram.total(PriceSource::Gladson), WEEKS);
    }
}

/// The zero price in Gladson's week-4 apple entry is carried into the stats
#[test]
fn test_zero_price_flows_into_statistics() {
    let dataset = seed_dataset().unwrap();
    let report = run_lab(&dataset, "Maça", &InferenceConfig::default()).unwrap();
    assert!(report.gladson.has_zero());
    assert!((report.gladson_summary.mean - 7.2375).abs() < 1e-12);
    assert_eq!(report.gladson_summary.mode, 0.0);
}

#[test]
fn test_unknown_item_not_found() {
    let dataset = seed_dataset().unwrap();
    let err = run_lab(&dataset, "Caviar", &InferenceConfig::default()).unwrap_err();
    assert!(matches!(err, CestaError::NotFound { .. }));
}

/// Running the pipeline twice yields bit-identical output
#[test]
fn test_pipeline_is_idempotent() {
    let dataset = seed_dataset().unwrap();
    let config = InferenceConfig::default();
    let first = run_lab(&dataset, "Carne", &config).unwrap();
    let second = run_lab(&dataset, "Carne", &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.test.as_ref().unwrap().pvalue.to_bits(),
        second.test.as_ref().unwrap().pvalue.to_bits()
    );
    assert_eq!(
        first.interval.lower.to_bits(),
        second.interval.lower.to_bits()
    );
}

#[test]
fn test_config_changes_interval_and_alpha() {
    let dataset = seed_dataset().unwrap();
    let default = run_lab(&dataset, "Arroz", &InferenceConfig::default()).unwrap();
    let strict = run_lab(&dataset, "Arroz", &InferenceConfig::strict()).unwrap();
    assert!(strict.interval.width() > default.interval.width());
    let (strict_test, default_test) = (strict.test.unwrap(), default.test.unwrap());
    assert_eq!(strict_test.alpha, 0.01);
    assert_eq!(strict_test.statistic, default_test.statistic);
}

#[test]
fn test_report_string_mentions_all_sections() {
    let dataset = seed_dataset().unwrap();
    let report = run_lab(&dataset, "Arroz", &InferenceConfig::default()).unwrap();
    let text = report.to_report_string();
    assert!(text.contains("Frequency distribution"));
    assert!(text.contains("Descriptive statistics"));
    assert!(text.contains("Confidence interval (95%)"));
    assert!(text.contains("Hypothesis test"));
    assert!(text.contains("mean R$ 4.85"));
}

/// Constant prices in both lists: the t-test is undefined, everything else is kept
#[test]
fn test_degenerate_ttest_keeps_other_sections() {
    let mut dataset = seed_dataset().unwrap();
    dataset.igor = PriceTable::new(
        PriceSource::Igor,
        vec![PriceRow::new("Sal", [2.0, 2.0, 2.0, 2.0])],
    )
    .unwrap();
    dataset.gladson = PriceTable::new(
        PriceSource::Gladson,
        vec![PriceRow::new("Sal", [1.5, 1.5, 1.5, 1.5])],
    )
    .unwrap();

    let report = run_lab(&dataset, "Sal", &InferenceConfig::default()).unwrap();
    assert!(report.test.is_none());
    assert!(report
        .test_error
        .as_deref()
        .is_some_and(|reason| reason.contains("zero variance")));
    assert_eq!(report.igor_summary.mean, 2.0);
    assert_eq!(report.gladson_summary.mode, 1.5);
    assert_eq!(report.interval.width(), 0.0);
    assert!(report.interval.contains(2.0));
    assert_eq!(report.histogram.total(PriceSource::Gladson), WEEKS);

    let text = report.to_report_string();
    assert!(text.contains("Confidence interval (95%)"));
    assert!(text.contains("Not computed"));
}
