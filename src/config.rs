use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;
use crate::metrics::AveragingMode;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for one evaluation run.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Separator between the actual and predicted label of a record
    pub delimiter: char,
    /// Rows whose first field equals this token are treated as headers and skipped
    pub header_token: String,
    pub averaging: AveragingMode,
    pub format: OutputFormat,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            header_token: "Actual".to_string(),
            averaging: AveragingMode::default(),
            format: OutputFormat::default(),
        }
    }
}

impl EvaluationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_header_token(mut self, header_token: impl Into<String>) -> Self {
        self.header_token = header_token.into();
        self
    }

    pub fn with_averaging(mut self, averaging: AveragingMode) -> Self {
        self.averaging = averaging;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Load a JSON config file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EvaluationError> {
        let file = File::open(path.as_ref()).map_err(|e| {
            EvaluationError::Config(format!(
                "Failed to open {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let reader = BufReader::new(file);
        let config: EvaluationConfig = serde_json::from_reader(reader)
            .map_err(|e| EvaluationError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// The CSV reader works on single bytes, so the delimiter has to be ASCII.
    pub fn delimiter_byte(&self) -> Result<u8, EvaluationError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(EvaluationError::Config(format!(
                "delimiter {:?} is not an ASCII character",
                self.delimiter
            )))
        }
    }

    pub fn validate(&self) -> Result<(), EvaluationError> {
        self.delimiter_byte()?;
        if self.header_token.trim().is_empty() {
            return Err(EvaluationError::Config(
                "header_token must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
