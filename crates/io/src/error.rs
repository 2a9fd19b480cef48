//! Error types for petal-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the petal-io crate.
///
/// Covers missing files, read faults from the underlying line reader, and
/// the parse-time failures a malformed CSV record can produce: bad numeric
/// fields, unknown category names, and ragged row widths.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the dataset file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a read fault from the underlying line reader.
    #[error("read error: {reason}")]
    Read {
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a feature field does not parse as a decimal number.
    #[error("line {line}: field {field} is not a number: '{value}'")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// 1-based field number within the line.
        field: usize,
        /// The offending field text.
        value: String,
    },

    /// Returned when the trailing category name is not in the vocabulary.
    #[error("line {line}: unknown label '{name}'")]
    UnknownLabel {
        /// 1-based line number.
        line: usize,
        /// The unrecognized category name.
        name: String,
    },

    /// Returned when a record has fewer than two fields.
    #[error("line {line}: expected at least one feature and a label, got {got} field(s)")]
    TooFewFields {
        /// 1-based line number.
        line: usize,
        /// Number of fields found.
        got: usize,
    },

    /// Returned when a row's width differs from the rest of the dataset.
    #[error("line {line}: row has {got} column(s), expected {expected}")]
    RaggedRow {
        /// 1-based line number.
        line: usize,
        /// Expected column count (from the first row).
        expected: usize,
        /// Actual column count.
        got: usize,
    },

    /// Returned when the dataset contains no rows.
    #[error("dataset is empty")]
    EmptyDataset,

    /// Returned when a label vocabulary is constructed with no names.
    #[error("label vocabulary is empty")]
    EmptyVocabulary,

    /// Returned when a label vocabulary contains the same name twice.
    #[error("duplicate label name '{name}' in vocabulary")]
    DuplicateLabel {
        /// The duplicated name.
        name: String,
    },
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Read {
            reason: e.to_string(),
        }
    }
}
