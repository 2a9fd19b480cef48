//! JSON output structures for cross-validation results.

use serde::Serialize;

use crate::error::EvaluateError;

/// Top-level cross-validation report.
#[derive(Debug, Serialize)]
pub struct CrossValidationOutput {
    /// Configuration summary.
    pub config: ConfigSummary,
    /// Per-fold accuracy scores, in fold order.
    pub folds: Vec<FoldScore>,
    /// Mean accuracy across folds.
    pub mean_accuracy: f64,
}

/// Summary of the configuration used.
#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    pub k: usize,
    pub num_folds: usize,
    pub n_rows: usize,
}

/// Accuracy for a single fold.
#[derive(Debug, Clone, Serialize)]
pub struct FoldScore {
    pub fold: usize,
    pub accuracy: f64,
}

impl CrossValidationOutput {
    /// Assembles a report from per-fold accuracy percentages.
    pub fn new(k: usize, num_folds: usize, n_rows: usize, scores: &[f64]) -> Self {
        let folds: Vec<FoldScore> = scores
            .iter()
            .enumerate()
            .map(|(fold, &accuracy)| FoldScore { fold, accuracy })
            .collect();
        let mean_accuracy = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };
        Self {
            config: ConfigSummary {
                k,
                num_folds,
                n_rows,
            },
            folds,
            mean_accuracy,
        }
    }
}

/// Serialize a cross-validation report to a JSON string.
pub fn to_json(output: &CrossValidationOutput) -> Result<String, EvaluateError> {
    serde_json::to_string_pretty(output).map_err(|e| EvaluateError::Serialization {
        reason: e.to_string(),
    })
}
