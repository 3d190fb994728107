//! ymerge CLI - Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ymerge_config::{Value, merge_all, value_from_yaml};

#[derive(Parser)]
#[command(name = "ymerge")]
#[command(version)]
#[command(about = "Deep-merge YAML files, later files override earlier ones")]
struct Cli {
    /// YAML files to merge, lowest precedence first
    #[arg(required = true, num_args = 2..)]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for the merged document.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ymerge=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let merged = merge_files(&cli.files)?;
    print!("{merged}");
    Ok(())
}

/// Load every input, fold them in order, and render the result.
fn merge_files(files: &[PathBuf]) -> Result<String> {
    let mut documents = Vec::with_capacity(files.len());
    for path in files {
        documents.push(load_document(path)?);
        tracing::debug!(file = %path.display(), "loaded document");
    }

    let merged = merge_all(&documents).context("could not merge files")?;
    tracing::debug!(files = files.len(), "merged documents");

    ymerge_yaml::emit(&merged.to_yaml()).context("could not serialize merged document")
}

fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;

    let node = ymerge_yaml::parse_file(&content, &path.to_string_lossy())
        .with_context(|| format!("could not parse {}", path.display()))?;

    value_from_yaml(node).with_context(|| format!("could not load {}", path.display()))
}
