//! json-erd binary: infer an entity-relationship model from a JSON file

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use json_erd::cli::commands::{handle_infer, InferArgs, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty JSON of the tables/relationships model
    Model,
    /// Graph-links JSON for a diagramming surface
    Graph,
    /// YAML of the model
    Yaml,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Model => OutputFormat::Model,
            Format::Graph => OutputFormat::Graph,
            Format::Yaml => OutputFormat::Yaml,
        }
    }
}

/// Infer a relational model from an arbitrary JSON document
#[derive(Debug, Parser)]
#[command(name = "json-erd", version, about)]
struct Cli {
    /// Path to the JSON document
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "model")]
    format: Format,

    /// Write the result to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Label for the root table
    #[arg(long)]
    root_label: Option<String>,

    /// Maximum child-entity discovery depth
    #[arg(long)]
    max_depth: Option<usize>,

    /// Validate the inferred model and fail on violations
    #[arg(long)]
    validate: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let args = InferArgs {
        input: cli.input,
        format: cli.format.into(),
        output: cli.output,
        root_label: cli.root_label,
        max_depth: cli.max_depth,
        validate: cli.validate,
    };

    handle_infer(&args).context("inference failed")
}
