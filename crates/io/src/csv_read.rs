//! CSV dataset reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::error::IoError;
use crate::labels::LabelVocabulary;

/// Reads a labeled CSV dataset from `path`.
///
/// One record per line, comma-separated: the first N−1 fields parse as
/// decimal feature values, the final field is a category name resolved
/// through `vocab` into a numeric code appended to the row. Blank and
/// whitespace-only lines are skipped.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Read`] on a read fault, and the parse errors described on
/// [`parse_record`] for malformed records. Shape errors from
/// [`Dataset::from_rows`] carry the offending 1-based line number.
pub fn read_csv(path: &Path, vocab: &LabelVocabulary) -> Result<Dataset, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    let mut expected_columns: Option<usize> = None;
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        if line.trim().is_empty() {
            debug!(line = line_no, "skipping blank line");
            continue;
        }

        let row = parse_record(&line, line_no, vocab)?;
        if let Some(expected) = expected_columns {
            if row.len() != expected {
                return Err(IoError::RaggedRow {
                    line: line_no,
                    expected,
                    got: row.len(),
                });
            }
        } else {
            expected_columns = Some(row.len());
        }
        rows.push(row);
    }

    let dataset = Dataset::from_rows(rows)?;
    info!(
        path = %path.display(),
        n_rows = dataset.n_rows(),
        n_features = dataset.n_features(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Parses one comma-separated record into a feature row with a trailing
/// label code.
///
/// # Errors
///
/// Returns [`IoError::TooFewFields`] for a record without at least one
/// feature and a label, [`IoError::InvalidNumber`] for a feature field that
/// is not a decimal number, and [`IoError::UnknownLabel`] when the final
/// field is not in the vocabulary. Field numbers are 1-based.
pub fn parse_record(
    line: &str,
    line_no: usize,
    vocab: &LabelVocabulary,
) -> Result<Vec<f64>, IoError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 2 {
        return Err(IoError::TooFewFields {
            line: line_no,
            got: fields.len(),
        });
    }

    let last = fields.len() - 1;
    let mut row = Vec::with_capacity(fields.len());
    for (i, field) in fields[..last].iter().enumerate() {
        let value: f64 = field.trim().parse().map_err(|_| IoError::InvalidNumber {
            line: line_no,
            field: i + 1,
            value: (*field).to_string(),
        })?;
        row.push(value);
    }

    let name = fields[last].trim();
    let code = vocab.code_for(name).ok_or_else(|| IoError::UnknownLabel {
        line: line_no,
        name: name.to_string(),
    })?;
    row.push(code);

    Ok(row)
}
