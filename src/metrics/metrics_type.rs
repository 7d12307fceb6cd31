use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricsType {
    Prevalence,
    Accuracy,
    Precision,
    Sensitivity,
    Specificity,
    F1Score,
}

impl MetricsType {
    /// Report order.
    pub const ALL: [MetricsType; 6] = [
        MetricsType::Prevalence,
        MetricsType::Accuracy,
        MetricsType::Precision,
        MetricsType::Sensitivity,
        MetricsType::Specificity,
        MetricsType::F1Score,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Prevalence => "Prevalence",
            Self::Accuracy => "Accuracy",
            Self::Precision => "Precision",
            Self::Sensitivity => "Sensitivity",
            Self::Specificity => "Specificity",
            Self::F1Score => "F1 score",
        }
    }
}
