use ndarray::{arr2, Array2};
use serde::{Deserialize, Serialize};

use super::{BinaryConfusionTable, ConfusionCounts};

/// How the three one-vs-rest tables are folded into one.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AveragingMode {
    /// Reference behaviour: the NL table enters the TP and TN averages with its
    /// TP and TN swapped. FP and FN are averaged cell by cell.
    #[default]
    Faithful,
    /// Every cell is the mean of the same cell across the three tables.
    Symmetric,
}

/// Mean of the AD, MCI and NL tables. Cells are fractional.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct AggregateConfusionTable {
    pub mode: AveragingMode,
    pub true_positives: f64,
    pub false_positives: f64,
    pub false_negatives: f64,
    pub true_negatives: f64,
}

impl AggregateConfusionTable {
    pub fn matrix(&self) -> Array2<f64> {
        arr2(&[
            [self.true_positives, self.false_positives],
            [self.false_negatives, self.true_negatives],
        ])
    }
}

impl ConfusionCounts for AggregateConfusionTable {
    fn true_positives(&self) -> f64 {
        self.true_positives
    }

    fn false_positives(&self) -> f64 {
        self.false_positives
    }

    fn false_negatives(&self) -> f64 {
        self.false_negatives
    }

    fn true_negatives(&self) -> f64 {
        self.true_negatives
    }
}

fn mean(values: [usize; 3]) -> f64 {
    values.iter().sum::<usize>() as f64 / values.len() as f64
}

/// # Arguments
/// * `ad`, `mci`, `nl` - one-vs-rest tables of the three classes
/// * `mode` - see [`AveragingMode`]
pub fn build_aggregate_table(
    ad: &BinaryConfusionTable,
    mci: &BinaryConfusionTable,
    nl: &BinaryConfusionTable,
    mode: AveragingMode,
) -> AggregateConfusionTable {
    let (nl_true_positives, nl_true_negatives) = match mode {
        AveragingMode::Faithful => (nl.true_negatives, nl.true_positives),
        AveragingMode::Symmetric => (nl.true_positives, nl.true_negatives),
    };

    AggregateConfusionTable {
        mode,
        true_positives: mean([ad.true_positives, mci.true_positives, nl_true_positives]),
        false_positives: mean([ad.false_positives, mci.false_positives, nl.false_positives]),
        false_negatives: mean([ad.false_negatives, mci.false_negatives, nl.false_negatives]),
        true_negatives: mean([ad.true_negatives, mci.true_negatives, nl_true_negatives]),
    }
}
