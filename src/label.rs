use std::fmt;

use serde::{Deserialize, Serialize};

/// Diagnostic category attached to a record, either as the ground truth or as
/// the classifier's prediction.
///
/// Anything outside the three known tags is kept verbatim in `Unknown` so the
/// input is never rejected. Whether such a value takes part in a tabulation is
/// decided by [`Label::class_index`] and nowhere else.
#[derive(Eq, PartialEq, Debug, Clone, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Label {
    /// Alzheimer's disease
    Ad,
    /// Mild cognitive impairment
    Mci,
    /// Normal
    Nl,
    Unknown(String),
}

impl Label {
    /// Known classes in the order used by every table and report: AD, MCI, NL.
    pub const CLASSES: [Label; 3] = [Label::Ad, Label::Mci, Label::Nl];

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "AD" => Self::Ad,
            "MCI" => Self::Mci,
            "NL" => Self::Nl,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Row / column of this label in the 3x3 matrix, `None` for unknown values.
    pub fn class_index(&self) -> Option<usize> {
        match self {
            Self::Ad => Some(0),
            Self::Mci => Some(1),
            Self::Nl => Some(2),
            Self::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        self.class_index().is_some()
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Ad => "AD",
            Self::Mci => "MCI",
            Self::Nl => "NL",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<String> for Label {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        match label {
            Label::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
