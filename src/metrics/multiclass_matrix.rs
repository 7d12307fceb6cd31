use log::debug;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::label::Label;
use crate::records::RecordSet;

/// 3x3 confusion matrix over (AD, MCI, NL).
///
/// Indexed `[predicted][actual]`: rows are the predicted class, columns the
/// actual class. Records with an unknown label on either side are not counted.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MultiClassConfusionMatrix {
    pub matrix: Array2<usize>,
}

impl Default for MultiClassConfusionMatrix {
    fn default() -> Self {
        let number_of_class = Label::CLASSES.len();
        Self {
            matrix: Array2::zeros((number_of_class, number_of_class)),
        }
    }
}

impl MultiClassConfusionMatrix {
    pub fn from(records: &RecordSet) -> Self {
        let mut confusion_matrix = Self::default();
        let mut dropped: usize = 0;

        for pair in records {
            match (pair.predicted.class_index(), pair.actual.class_index()) {
                (Some(predicted), Some(actual)) => confusion_matrix.matrix[[predicted, actual]] += 1,
                _ => dropped += 1,
            }
        }

        if dropped > 0 {
            debug!(
                "{} records with unknown labels left out of the confusion matrix",
                dropped
            );
        }
        confusion_matrix
    }

    /// Count for one (predicted, actual) combination, `None` if either is unknown.
    pub fn get(&self, predicted: &Label, actual: &Label) -> Option<usize> {
        let row = predicted.class_index()?;
        let column = actual.class_index()?;
        Some(self.matrix[[row, column]])
    }

    pub fn total(&self) -> usize {
        self.matrix.sum()
    }

    /// Diagonal sum: records predicted as their actual class.
    pub fn correct(&self) -> usize {
        self.matrix.diag().sum()
    }
}

pub fn build_multiclass_matrix(records: &RecordSet) -> MultiClassConfusionMatrix {
    MultiClassConfusionMatrix::from(records)
}
