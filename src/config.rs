use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Petal configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PetalConfig {
    /// Dataset settings.
    #[serde(default)]
    pub data: DataToml,

    /// Classifier settings.
    #[serde(default)]
    pub knn: KnnToml,

    /// Cross-validation settings.
    #[serde(default)]
    pub evaluate: EvaluateToml,
}

impl PetalConfig {
    /// Load and parse the project TOML, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    /// Path to the CSV dataset.
    pub path: Option<PathBuf>,
    /// Category names in code order. Defaults to the iris trio.
    #[serde(default = "default_classes")]
    pub classes: Vec<String>,
}

impl Default for DataToml {
    fn default() -> Self {
        Self {
            path: None,
            classes: default_classes(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnnToml {
    /// Number of nearest neighbors per prediction.
    #[serde(default = "default_k")]
    pub k: usize,
}

impl Default for KnnToml {
    fn default() -> Self {
        Self { k: default_k() }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluateToml {
    /// Number of cross-validation folds.
    #[serde(default = "default_folds")]
    pub folds: usize,
}

impl Default for EvaluateToml {
    fn default() -> Self {
        Self {
            folds: default_folds(),
        }
    }
}

fn default_classes() -> Vec<String> {
    vec![
        "Iris-virginica".to_string(),
        "Iris-setosa".to_string(),
        "Iris-versicolor".to_string(),
    ]
}
fn default_k() -> usize {
    5
}
fn default_folds() -> usize {
    5
}
