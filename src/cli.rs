use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Petal KNN classifier.
#[derive(Parser)]
#[command(
    name = "petal",
    version,
    about = "K-nearest-neighbors classifier with k-fold cross-validation"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Classify one ad-hoc query vector.
    Predict(PredictArgs),
    /// Run k-fold cross-validation over the dataset.
    Evaluate(EvaluateArgs),
}

/// Arguments for the `predict` subcommand.
#[derive(clap::Args)]
pub struct PredictArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "petal.toml")]
    pub config: PathBuf,

    /// Override dataset CSV path from config.
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Comma-separated feature values to classify, e.g. "4.5,2.3,1.3,0.3".
    #[arg(short, long)]
    pub query: String,

    /// Override neighbor count from config.
    #[arg(short)]
    pub k: Option<usize>,
}

/// Arguments for the `evaluate` subcommand.
#[derive(clap::Args)]
pub struct EvaluateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "petal.toml")]
    pub config: PathBuf,

    /// Override dataset CSV path from config.
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Override neighbor count from config.
    #[arg(short)]
    pub k: Option<usize>,

    /// Override fold count from config.
    #[arg(short, long)]
    pub folds: Option<usize>,

    /// Path for a JSON report of the per-fold scores.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
