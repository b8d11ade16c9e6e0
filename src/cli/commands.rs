//! CLI command for inferring a model from a JSON file

use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::export::GraphExporter;
use crate::inference::{ErdInferrer, InferenceConfig};
use crate::validation::ModelValidator;

/// Output format for the inferred model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty JSON of the tables/relationships model
    Model,
    /// Graph-links JSON for a diagramming surface
    Graph,
    /// YAML of the model
    Yaml,
}

/// Arguments for the `infer` command
pub struct InferArgs {
    /// Path to the JSON document
    pub input: PathBuf,
    /// Output format
    pub format: OutputFormat,
    /// Output file path (stdout if not provided)
    pub output: Option<PathBuf>,
    /// Label for the root table
    pub root_label: Option<String>,
    /// Maximum discovery depth
    pub max_depth: Option<usize>,
    /// Validate the model and fail on violations
    pub validate: bool,
}

/// Handle the `infer` command
pub fn handle_infer(args: &InferArgs) -> Result<(), CliError> {
    let text = std::fs::read_to_string(&args.input)
        .map_err(|e| CliError::Io(format!("Failed to read {}: {}", args.input.display(), e)))?;

    let mut builder = InferenceConfig::builder();
    if let Some(ref label) = args.root_label {
        builder = builder.root_label(label.clone());
    }
    if let Some(depth) = args.max_depth {
        builder = builder.max_depth(depth);
    }
    let config = builder.build();

    eprintln!("Inferring model from {}...", args.input.display());
    eprintln!("  Root label: {}", config.root_label);
    eprintln!("  Max depth: {}", config.max_depth);

    let inferrer = ErdInferrer::with_config(config);
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(crate::inference::InferenceError::from)?;
    let (model, stats) = inferrer.infer_value_with_stats(&value)?;

    eprintln!();
    eprintln!("Inference complete:");
    eprintln!("  Tables: {}", stats.tables_discovered);
    eprintln!("  Relationships: {}", stats.relationships_discovered);
    eprintln!("  Fields: {}", stats.fields_discovered);

    if args.validate {
        let result = ModelValidator::new().validate(&model);
        for cycle in &result.reference_cycles {
            eprintln!("  Warning: reference cycle among tables {:?}", cycle);
        }
        if !result.is_valid() {
            for violation in &result.violations {
                eprintln!("  Violation: {}", violation);
            }
            return Err(CliError::Validation(result.violations.len()));
        }
        eprintln!("  Validation: ok");
    }

    let output_str = match args.format {
        OutputFormat::Graph => GraphExporter::new().export_pretty(&model)?,
        OutputFormat::Yaml => serde_yaml::to_string(&model)
            .map_err(|e| CliError::Io(format!("Failed to serialize YAML: {}", e)))?,
        OutputFormat::Model => serde_json::to_string_pretty(&model)
            .map_err(|e| CliError::Io(format!("Failed to serialize model: {}", e)))?,
    };

    if let Some(ref output_path) = args.output {
        std::fs::write(output_path, &output_str).map_err(|e| {
            CliError::Io(format!("Failed to write {}: {}", output_path.display(), e))
        })?;
        eprintln!();
        eprintln!("Model written to: {}", output_path.display());
    } else {
        println!("{}", output_str);
    }

    Ok(())
}
