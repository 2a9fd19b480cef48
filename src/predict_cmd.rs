//! Predict command: classify one ad-hoc query vector.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use petal_io::{LabelVocabulary, read_csv};
use petal_knn::predict;

use crate::cli::PredictArgs;
use crate::config::PetalConfig;

/// Run a single prediction.
pub fn run(args: PredictArgs) -> Result<()> {
    let _cmd = info_span!("predict").entered();
    let config = PetalConfig::load(&args.config)?;

    let data_path = args.data.or(config.data.path).ok_or_else(|| {
        anyhow::anyhow!("no dataset path: set [data].path in config or use --data")
    })?;
    let k = args.k.unwrap_or(config.knn.k);

    let vocab = LabelVocabulary::new(config.data.classes.iter().map(String::as_str))
        .context("invalid class list in config")?;

    info!(path = %data_path.display(), "reading dataset");
    let dataset = read_csv(&data_path, &vocab)
        .with_context(|| format!("failed to read dataset: {}", data_path.display()))?;

    let query = parse_query(&args.query)?;
    if query.len() != dataset.n_features() {
        bail!(
            "query has {} value(s), dataset rows have {} feature(s)",
            query.len(),
            dataset.n_features()
        );
    }

    let code = predict(dataset.rows(), &query, k).context("prediction failed")?;
    let name = vocab
        .name_for(code)
        .ok_or_else(|| anyhow::anyhow!("predicted code {code} has no name in the vocabulary"))?;

    info!(k, code, "prediction complete");
    println!("{name}");

    Ok(())
}

/// Parses a comma-separated query string into feature values.
fn parse_query(query: &str) -> Result<Vec<f64>> {
    query
        .split(',')
        .map(|field| {
            field
                .trim()
                .parse::<f64>()
                .with_context(|| format!("invalid query value '{}'", field.trim()))
        })
        .collect()
}
