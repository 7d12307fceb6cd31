mod aggregate;
mod confusion_matrix;
mod metrics;
mod metrics_type;
mod multiclass_matrix;
mod safe_div;

pub use aggregate::{build_aggregate_table, AggregateConfusionTable, AveragingMode};
pub use confusion_matrix::{
    build_binary_table, build_binary_tables, BinaryConfusionTable, ConfusionCounts,
};
pub use metrics::{compute_metrics, MetricBundle};
pub use metrics_type::MetricsType;
pub use multiclass_matrix::{build_multiclass_matrix, MultiClassConfusionMatrix};
pub use safe_div::safe_div;
