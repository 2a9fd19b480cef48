//! Classification accuracy scoring.

use crate::error::EvaluateError;

/// Returns the fraction of positions where `actual` and `predicted` agree,
/// as a percentage in `[0.0, 100.0]`.
///
/// # Errors
///
/// Returns [`EvaluateError::EmptyFold`] if the slices are empty and
/// [`EvaluateError::PredictionCountMismatch`] if they differ in length.
pub fn accuracy(actual: &[f64], predicted: &[f64]) -> Result<f64, EvaluateError> {
    if actual.len() != predicted.len() {
        return Err(EvaluateError::PredictionCountMismatch {
            actual: actual.len(),
            predicted: predicted.len(),
        });
    }
    if actual.is_empty() {
        return Err(EvaluateError::EmptyFold);
    }

    let correct = actual
        .iter()
        .zip(predicted.iter())
        .filter(|(a, p)| a == p)
        .count();

    Ok(correct as f64 / actual.len() as f64 * 100.0)
}
