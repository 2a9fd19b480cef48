//! Evaluate command: cross-validate the classifier over the dataset.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use petal_evaluate::{CrossValidationOutput, CvConfig, cross_validate, to_json};
use petal_io::{LabelVocabulary, read_csv};

use crate::cli::EvaluateArgs;
use crate::config::PetalConfig;

/// Run the cross-validation pipeline.
pub fn run(args: EvaluateArgs) -> Result<()> {
    let _cmd = info_span!("evaluate").entered();
    let config = PetalConfig::load(&args.config)?;

    let data_path = args.data.or(config.data.path).ok_or_else(|| {
        anyhow::anyhow!("no dataset path: set [data].path in config or use --data")
    })?;
    let k = args.k.unwrap_or(config.knn.k);
    let folds = args.folds.unwrap_or(config.evaluate.folds);

    let vocab = LabelVocabulary::new(config.data.classes.iter().map(String::as_str))
        .context("invalid class list in config")?;

    info!(path = %data_path.display(), "reading dataset");
    let dataset = read_csv(&data_path, &vocab)
        .with_context(|| format!("failed to read dataset: {}", data_path.display()))?;

    info!(k, folds, n_rows = dataset.n_rows(), "running cross-validation");
    let scores =
        cross_validate(dataset.rows(), &CvConfig::new(k, folds)).context("evaluation failed")?;

    for (fold, score) in scores.iter().enumerate() {
        println!("fold {fold}: {score:.2}%");
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    println!("mean accuracy: {mean:.2}%");

    if let Some(report_path) = args.output {
        let report = CrossValidationOutput::new(k, folds, dataset.n_rows(), &scores);
        let json = to_json(&report).context("failed to serialize report")?;
        std::fs::write(&report_path, &json)
            .with_context(|| format!("failed to write report: {}", report_path.display()))?;
        info!(path = %report_path.display(), "report written");
    }

    Ok(())
}
