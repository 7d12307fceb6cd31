use log::debug;
use ndarray::{arr2, Array2};
use serde::{Deserialize, Serialize};

use crate::label::Label;
use crate::records::RecordSet;

/// Cell counts of a 2x2 table of confusion.
///
/// Implemented for the integer per-class tables and for the averaged table, so
/// the metric formulas are written once for both.
pub trait ConfusionCounts {
    fn true_positives(&self) -> f64;
    fn false_positives(&self) -> f64;
    fn false_negatives(&self) -> f64;
    fn true_negatives(&self) -> f64;

    fn total(&self) -> f64 {
        self.true_positives() + self.false_positives() + self.false_negatives() + self.true_negatives()
    }
}

/// One class against the rest, laid out as `[[TP, FP], [FN, TN]]`.
#[derive(Clone, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub struct BinaryConfusionTable {
    pub positive_class: Option<Label>,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub true_negatives: usize,
}

impl BinaryConfusionTable {
    /// Tabulate `records` with `positive_class` as the positive condition.
    ///
    /// Every record lands in exactly one cell. A record carrying an unknown
    /// label is simply "not positive" on that side.
    pub fn from(records: &RecordSet, positive_class: &Label) -> Self {
        let mut table = Self {
            positive_class: Some(positive_class.clone()),
            ..Self::default()
        };

        for pair in records {
            let actual_positive = &pair.actual == positive_class;
            let predicted_positive = &pair.predicted == positive_class;

            match (actual_positive, predicted_positive) {
                (true, true) => table.true_positives += 1,
                (true, false) => table.false_negatives += 1,
                (false, true) => table.false_positives += 1,
                (false, false) => table.true_negatives += 1,
            }
        }

        table
    }

    pub fn matrix(&self) -> Array2<usize> {
        arr2(&[
            [self.true_positives, self.false_positives],
            [self.false_negatives, self.true_negatives],
        ])
    }

    pub fn record_count(&self) -> usize {
        self.true_positives + self.false_positives + self.false_negatives + self.true_negatives
    }
}

impl ConfusionCounts for BinaryConfusionTable {
    fn true_positives(&self) -> f64 {
        self.true_positives as f64
    }

    fn false_positives(&self) -> f64 {
        self.false_positives as f64
    }

    fn false_negatives(&self) -> f64 {
        self.false_negatives as f64
    }

    fn true_negatives(&self) -> f64 {
        self.true_negatives as f64
    }
}

pub fn build_binary_table(records: &RecordSet, positive_class: &Label) -> BinaryConfusionTable {
    BinaryConfusionTable::from(records, positive_class)
}

/// One-vs-rest tables for AD, MCI and NL, in that order.
pub fn build_binary_tables(records: &RecordSet) -> [BinaryConfusionTable; 3] {
    let tables = Label::CLASSES.map(|class| build_binary_table(records, &class));
    debug!(
        "Built one-vs-rest tables over {} records: {:?}",
        records.len(),
        tables.iter().map(BinaryConfusionTable::matrix).collect::<Vec<_>>()
    );
    tables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::LabelPair;

    fn records(pairs: &[(&str, &str)]) -> RecordSet {
        pairs
            .iter()
            .map(|(actual, predicted)| LabelPair::parse(actual, predicted))
            .collect()
    }

    #[test]
    fn test_binary_table_perfect_predictions() {
        let records = records(&[("AD", "AD"), ("AD", "AD"), ("MCI", "MCI"), ("NL", "NL")]);

        let table = build_binary_table(&records, &Label::Ad);

        assert_eq!(table.true_positives, 2);
        assert_eq!(table.false_positives, 0);
        assert_eq!(table.false_negatives, 0);
        assert_eq!(table.true_negatives, 2);
        assert_eq!(table.matrix(), arr2(&[[2, 0], [0, 2]]));
    }

    #[test]
    fn test_binary_table_all_missed() {
        let records = records(&[("AD", "MCI"), ("AD", "MCI")]);

        let table = build_binary_table(&records, &Label::Ad);

        assert_eq!(table.matrix(), arr2(&[[0, 0], [2, 0]]));

        let mci = build_binary_table(&records, &Label::Mci);
        assert_eq!(mci.matrix(), arr2(&[[0, 2], [0, 0]]));
    }

    #[test]
    fn test_binary_table_mixed_predictions() {
        let records = records(&[
            ("AD", "AD"),
            ("MCI", "AD"),
            ("MCI", "MCI"),
            ("NL", "MCI"),
            ("NL", "NL"),
        ]);

        let [ad, mci, nl] = build_binary_tables(&records);

        assert_eq!(ad.matrix(), arr2(&[[1, 1], [0, 3]]));
        assert_eq!(mci.matrix(), arr2(&[[1, 1], [1, 2]]));
        assert_eq!(nl.matrix(), arr2(&[[1, 0], [1, 3]]));
        assert_eq!(ad.positive_class, Some(Label::Ad));
        assert_eq!(nl.positive_class, Some(Label::Nl));
    }

    #[test]
    fn test_unknown_label_counts_as_negative() {
        let records = records(&[("XX", "AD"), ("AD", "AD"), ("MCI", "NL"), ("NL", "NL")]);

        let [ad, mci, nl] = build_binary_tables(&records);

        // ("XX", "AD") is a false positive for AD and a true negative elsewhere
        assert_eq!(ad.false_positives, 1);
        assert_eq!(mci.true_negatives, 3);
        assert_eq!(nl.true_negatives, 2);
    }

    #[test]
    fn test_binary_table_consistency() {
        let records = records(&[
            ("AD", "NL"),
            ("MCI", "AD"),
            ("NL", "NL"),
            ("XX", "MCI"),
            ("AD", "AD"),
            ("MCI", "YY"),
        ]);

        for table in build_binary_tables(&records) {
            assert_eq!(
                table.record_count(),
                records.len(),
                "TP + FP + FN + TN should equal the number of records for {:?}",
                table.positive_class
            );
            assert!((table.total() - records.len() as f64).abs() < 1e-10);
        }
    }

    #[test]
    fn test_empty_records() {
        for table in build_binary_tables(&RecordSet::default()) {
            assert_eq!(table.matrix(), arr2(&[[0, 0], [0, 0]]));
        }
    }
}
