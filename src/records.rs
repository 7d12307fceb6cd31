use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::EvaluationConfig;
use crate::error::EvaluationError;
use crate::label::Label;

/// One classifier decision: the ground truth and what was predicted for it.
#[derive(Eq, PartialEq, Debug, Clone, Hash, Serialize, Deserialize)]
pub struct LabelPair {
    pub actual: Label,
    pub predicted: Label,
}

impl LabelPair {
    pub fn new(actual: Label, predicted: Label) -> Self {
        Self { actual, predicted }
    }

    pub fn parse(actual: &str, predicted: &str) -> Self {
        Self::new(Label::parse(actual), Label::parse(predicted))
    }

    /// Raw value comparison, so two identical unknown values also count as a match.
    pub fn is_correct(&self) -> bool {
        self.actual == self.predicted
    }

    pub fn has_unknown(&self) -> bool {
        !self.actual.is_known() || !self.predicted.is_known()
    }
}

/// The full prediction log of a run. Built once, read-only afterwards.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    records: Vec<LabelPair>,
}

impl RecordSet {
    pub fn new(records: Vec<LabelPair>) -> Self {
        Self { records }
    }

    /// Parse `Actual;Predicted` rows.
    ///
    /// Lines are read as comma-separated CSV and the first column is then split
    /// on the configured delimiter, so `Actual,Predicted,...` headers and
    /// trailing comma columns such as `AD;MCI,0.93` are handled. With `,` as the
    /// delimiter the CSV columns are used directly.
    ///
    /// Blank lines and rows starting with the configured header token are
    /// skipped wherever they appear. Fields past the second are ignored.
    pub fn from_reader<R: Read>(
        reader: R,
        config: &EvaluationConfig,
    ) -> Result<Self, EvaluationError> {
        let delimiter = config.delimiter_byte()?;
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let line = record.position().map_or(0, |position| position.line());

            let fields: Vec<&str> = if delimiter == b',' {
                record.iter().collect()
            } else {
                record
                    .get(0)
                    .map(|first| first.split(config.delimiter).map(str::trim).collect())
                    .unwrap_or_default()
            };

            let Some(&actual) = fields.first() else {
                continue;
            };
            if actual == config.header_token {
                debug!("Skipping header row on line {}", line);
                continue;
            }
            if fields.len() == 1 && actual.is_empty() {
                continue;
            }

            let predicted = fields
                .get(1)
                .ok_or_else(|| EvaluationError::MalformedRecord {
                    line,
                    content: actual.to_string(),
                })?;

            records.push(LabelPair::parse(actual, predicted));
        }

        debug!("Parsed {} records", records.len());
        Ok(Self { records })
    }

    pub fn load<P: AsRef<Path>>(
        path: P,
        config: &EvaluationConfig,
    ) -> Result<Self, EvaluationError> {
        info!("Reading records from {}", path.as_ref().display());
        let file = File::open(path)?;
        Self::from_reader(file, config)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabelPair> {
        self.records.iter()
    }

    pub fn correct_count(&self) -> usize {
        self.records.iter().filter(|pair| pair.is_correct()).count()
    }

    /// Records with at least one label outside AD / MCI / NL.
    pub fn unknown_count(&self) -> usize {
        self.records.iter().filter(|pair| pair.has_unknown()).count()
    }
}

impl FromIterator<LabelPair> for RecordSet {
    fn from_iter<I: IntoIterator<Item = LabelPair>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a LabelPair;
    type IntoIter = std::slice::Iter<'a, LabelPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Pick the input file from `dir`: the last `.csv` file by name.
pub fn discover_input<P: AsRef<Path>>(dir: P) -> Result<PathBuf, EvaluationError> {
    let dir = dir.as_ref();
    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|extension| extension == "csv")
        })
        .collect();
    candidates.sort();

    debug!("Found {} candidate input files in {}", candidates.len(), dir.display());
    candidates
        .pop()
        .ok_or_else(|| EvaluationError::NoInputFile(dir.to_path_buf()))
}
