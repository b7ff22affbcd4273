use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use stitchgrid::{analyzer_options, init_logging, load_document, Config, SchematicAnalyzer};

/// Derive the reference grid of a garment schematic and print it as JSON.
#[derive(Parser, Debug)]
#[command(name = "stitchgrid", version, about)]
struct Cli {
    /// `.svg` schematic, or a text file with one path command string per line
    file: PathBuf,

    /// Endpoint merge threshold, overriding the configured value
    #[arg(long)]
    threshold: Option<f64>,

    /// Config file (.toml or .json); defaults to the platform config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(&path)
                .with_context(|| format!("Failed to load config {}", path.display())),
            Err(e) => {
                tracing::debug!("{}; using default settings", e);
                Ok(Config::default())
            }
        },
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = load_config(cli.config.as_ref())?;

    let mut options = analyzer_options(&config.analyzer);
    if let Some(threshold) = cli.threshold {
        options.merge_threshold = threshold;
    }
    let analyzer = SchematicAnalyzer::new(options)?;

    let document = load_document(&cli.file)
        .with_context(|| format!("Failed to read schematic {}", cli.file.display()))?;
    if document.is_empty() {
        tracing::warn!("{} contains no outline paths", cli.file.display());
    }

    let artifact = analyzer.analyze_document(&document);
    println!("{}", artifact.to_json()?);
    Ok(())
}
