use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;
use crate::label::Label;
use crate::metrics::{
    build_aggregate_table, build_binary_tables, build_multiclass_matrix, compute_metrics,
    AggregateConfusionTable, AveragingMode, BinaryConfusionTable, MetricBundle,
    MultiClassConfusionMatrix,
};
use crate::records::RecordSet;

/// Percentage of records whose predicted label equals the actual one.
///
/// An empty record set is reported as `0` rather than dividing by zero.
pub fn overall_accuracy(records: &RecordSet) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.correct_count() as f64 / records.len() as f64 * 100.0
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ClassEvaluation {
    pub label: Label,
    pub table: BinaryConfusionTable,
    pub metrics: MetricBundle,
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct AggregateEvaluation {
    pub table: AggregateConfusionTable,
    pub metrics: MetricBundle,
}

/// Everything computed for one prediction log.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Evaluation {
    pub record_count: usize,
    /// Records with a label outside AD / MCI / NL; absent from `confusion_matrix`
    pub unknown_count: usize,
    /// Percentage, 0..=100
    pub overall_accuracy: f64,
    /// AD, MCI, NL
    pub classes: Vec<ClassEvaluation>,
    pub aggregate: AggregateEvaluation,
    pub confusion_matrix: MultiClassConfusionMatrix,
}

impl Evaluation {
    pub fn evaluate(records: &RecordSet, averaging: AveragingMode) -> Self {
        let record_count = records.len();
        let unknown_count = records.unknown_count();
        if unknown_count > 0 {
            warn!(
                "{} of {} records carry an unrecognized label and are left out of the confusion matrix",
                unknown_count, record_count
            );
        }

        let [ad, mci, nl] = build_binary_tables(records);
        let aggregate_table = build_aggregate_table(&ad, &mci, &nl, averaging);
        debug!("Averaged table ({:?}): {:?}", averaging, aggregate_table.matrix());

        let classes = Label::CLASSES
            .into_iter()
            .zip([ad, mci, nl])
            .map(|(label, table)| ClassEvaluation {
                metrics: compute_metrics(&table, record_count),
                label,
                table,
            })
            .collect();

        Self {
            record_count,
            unknown_count,
            overall_accuracy: overall_accuracy(records),
            classes,
            aggregate: AggregateEvaluation {
                metrics: compute_metrics(&aggregate_table, record_count),
                table: aggregate_table,
            },
            confusion_matrix: build_multiclass_matrix(records),
        }
    }

    pub fn class(&self, label: &Label) -> Option<&ClassEvaluation> {
        self.classes.iter().find(|class| &class.label == label)
    }

    pub fn to_json(&self) -> Result<String, EvaluationError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| EvaluationError::Serialization(format!("Failed to serialize report: {}", e)))
    }
}

fn write_metrics(f: &mut fmt::Formatter<'_>, metrics: &MetricBundle) -> fmt::Result {
    for (metric_type, value) in metrics.get_all() {
        writeln!(f, "{}: {}", metric_type.name(), value)?;
    }
    writeln!(f)
}

/// Plain-text report: overall accuracy, AD, MCI, NL, the averaged table, then
/// the 3x3 matrix.
impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accuracy: {} %", self.overall_accuracy)?;
        if self.unknown_count > 0 {
            writeln!(
                f,
                "Unrecognized labels: {} of {} records",
                self.unknown_count, self.record_count
            )?;
        }
        writeln!(f)?;

        for class in &self.classes {
            writeln!(f, "{} MOC", class.label)?;
            writeln!(f, "{}", class.table.matrix())?;
            write_metrics(f, &class.metrics)?;
        }

        writeln!(f, "Avg. MOC")?;
        writeln!(f, "{}", self.aggregate.table.matrix())?;
        write_metrics(f, &self.aggregate.metrics)?;

        writeln!(f, "Confusion Matrix")?;
        writeln!(f, "{}", self.confusion_matrix.matrix)
    }
}

pub fn render_report(evaluation: &Evaluation) -> String {
    evaluation.to_string()
}
