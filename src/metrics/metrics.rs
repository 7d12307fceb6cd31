use serde::{Deserialize, Serialize};

use super::{safe_div, ConfusionCounts, MetricsType};

/// Diagnostic statistics derived from one 2x2 table.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct MetricBundle {
    pub prevalence: f64,
    pub accuracy: f64,
    pub precision: f64,
    pub sensitivity: f64,
    pub specificity: f64,
    pub f1_score: f64,
}

impl MetricBundle {
    pub fn get_metric(&self, metric_type: MetricsType) -> f64 {
        match metric_type {
            MetricsType::Prevalence => self.prevalence,
            MetricsType::Accuracy => self.accuracy,
            MetricsType::Precision => self.precision,
            MetricsType::Sensitivity => self.sensitivity,
            MetricsType::Specificity => self.specificity,
            MetricsType::F1Score => self.f1_score,
        }
    }

    /// `(metric, value)` pairs in report order.
    pub fn get_all(&self) -> Vec<(MetricsType, f64)> {
        MetricsType::ALL
            .iter()
            .map(|&metric_type| (metric_type, self.get_metric(metric_type)))
            .collect()
    }
}

/// `2 / (1/sensitivity + 1/precision)` with both reciprocals taken through
/// [`safe_div`]: a zero input adds `0` to the denominator instead of infinity.
pub(crate) fn harmonic_f1(sensitivity: f64, precision: f64) -> f64 {
    safe_div(2.0, safe_div(1.0, sensitivity) + safe_div(1.0, precision))
}

/// Compute every metric of `table`, normalising prevalence and accuracy by
/// `total_records` rather than by the table's own cell sum.
///
/// Every division goes through [`safe_div`], so a degenerate table yields
/// zeros rather than `NaN`.
pub fn compute_metrics<T: ConfusionCounts + ?Sized>(table: &T, total_records: usize) -> MetricBundle {
    let total = total_records as f64;
    let true_positives = table.true_positives();
    let false_positives = table.false_positives();
    let false_negatives = table.false_negatives();
    let true_negatives = table.true_negatives();

    let precision = safe_div(true_positives, true_positives + false_positives);
    let sensitivity = safe_div(true_positives, true_positives + false_negatives);

    MetricBundle {
        prevalence: safe_div(true_positives + false_positives, total),
        accuracy: safe_div(true_positives + true_negatives, total),
        precision,
        sensitivity,
        specificity: safe_div(true_negatives, false_positives + true_negatives),
        f1_score: harmonic_f1(sensitivity, precision),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{AggregateConfusionTable, AveragingMode, BinaryConfusionTable};

    fn table(
        true_positives: usize,
        false_positives: usize,
        false_negatives: usize,
        true_negatives: usize,
    ) -> BinaryConfusionTable {
        BinaryConfusionTable {
            positive_class: None,
            true_positives,
            false_positives,
            false_negatives,
            true_negatives,
        }
    }

    #[test]
    fn test_perfect_table() {
        let metrics = compute_metrics(&table(2, 0, 0, 2), 4);

        assert!((metrics.prevalence - 0.5).abs() < 1e-10);
        assert!((metrics.accuracy - 1.0).abs() < 1e-10);
        assert!((metrics.precision - 1.0).abs() < 1e-10);
        assert!((metrics.sensitivity - 1.0).abs() < 1e-10);
        assert!((metrics.specificity - 1.0).abs() < 1e-10);
        assert!((metrics.f1_score - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_predicted_positives() {
        let metrics = compute_metrics(&table(0, 0, 2, 0), 2);

        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.sensitivity, 0.0);
        assert_eq!(metrics.specificity, 0.0);
        assert_eq!(metrics.prevalence, 0.0);
        assert_eq!(metrics.accuracy, 0.0);
        assert_eq!(metrics.f1_score, 0.0);
    }

    #[test]
    fn test_f1_equals_common_value() {
        let metrics = compute_metrics(&table(3, 1, 1, 5), 10);

        assert!((metrics.sensitivity - 0.75).abs() < 1e-10);
        assert!((metrics.precision - 0.75).abs() < 1e-10);
        assert!((metrics.f1_score - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_f1_harmonic_mean() {
        // precision 2/3, sensitivity 1/2
        let metrics = compute_metrics(&table(2, 1, 2, 5), 10);

        let expected = 2.0 * (2.0 / 3.0) * 0.5 / (2.0 / 3.0 + 0.5);
        assert!(
            (metrics.f1_score - expected).abs() < 1e-10,
            "Expected F1 {}, got {}",
            expected,
            metrics.f1_score
        );
        assert!((metrics.specificity - 5.0 / 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_harmonic_f1_zero_reciprocal_fallback() {
        // Standard F1 would be 0 here; the zero reciprocal leaves 2 / (0 + 2).
        assert!((harmonic_f1(0.0, 0.5) - 1.0).abs() < 1e-10);
        assert!((harmonic_f1(0.5, 0.0) - 1.0).abs() < 1e-10);
        assert_eq!(harmonic_f1(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_aggregate_table_metrics() {
        let aggregate = AggregateConfusionTable {
            mode: AveragingMode::Symmetric,
            true_positives: 0.5,
            false_positives: 0.5,
            false_negatives: 0.0,
            true_negatives: 1.0,
        };
        let metrics = compute_metrics(&aggregate, 2);

        assert!((metrics.precision - 0.5).abs() < 1e-10);
        assert!((metrics.sensitivity - 1.0).abs() < 1e-10);
        assert!((metrics.specificity - 2.0 / 3.0).abs() < 1e-10);
        assert!((metrics.prevalence - 0.5).abs() < 1e-10);
        assert!((metrics.accuracy - 0.75).abs() < 1e-10);
        assert!((metrics.f1_score - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_table() {
        let metrics = compute_metrics(&table(0, 0, 0, 0), 0);
        assert_eq!(metrics, MetricBundle::default());
    }

    #[test]
    fn test_prevalence_uses_record_count() {
        let metrics = compute_metrics(&table(1, 1, 0, 0), 8);
        assert!((metrics.prevalence - 0.25).abs() < 1e-10);
        assert!((metrics.accuracy - 0.125).abs() < 1e-10);
    }

    #[test]
    fn test_compute_metrics_is_pure() {
        let table = table(4, 2, 1, 9);
        assert_eq!(compute_metrics(&table, 16), compute_metrics(&table, 16));
    }

    #[test]
    fn test_get_metric() {
        let metrics = compute_metrics(&table(3, 1, 1, 5), 10);

        assert_eq!(metrics.get_metric(MetricsType::Precision), metrics.precision);
        assert_eq!(metrics.get_metric(MetricsType::F1Score), metrics.f1_score);

        let all = metrics.get_all();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], (MetricsType::Prevalence, metrics.prevalence));
        assert_eq!(all[5], (MetricsType::F1Score, metrics.f1_score));
    }
}
