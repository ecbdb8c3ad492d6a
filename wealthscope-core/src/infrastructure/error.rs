// wealthscope-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(wealthscope::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- DATASET ---
    #[error("Dataset not found at '{0}'")]
    #[diagnostic(
        code(wealthscope::infra::dataset_missing),
        help("Point `dataset.path` in wealthscope.yaml (or --data) at the Forbes CSV file.")
    )]
    DatasetNotFound(String),

    #[error("CSV Parsing Error: {0}")]
    #[diagnostic(
        code(wealthscope::infra::csv),
        help("Check that the file is a comma separated file with a header row.")
    )]
    Csv(#[from] csv::Error),

    #[error("Required column '{0}' is missing from the dataset header")]
    #[diagnostic(code(wealthscope::infra::missing_column))]
    MissingColumn(String),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(wealthscope::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    // --- JSON (exports, presets) ---
    #[error("JSON Error: {0}")]
    #[diagnostic(code(wealthscope::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Export Error: {0}")]
    #[diagnostic(code(wealthscope::infra::export))]
    ExportError(String),
}

// Manual implementation: csv writers hand back IntoInnerError on flush
impl<W> From<csv::IntoInnerError<W>> for InfrastructureError {
    fn from(err: csv::IntoInnerError<W>) -> Self {
        InfrastructureError::ExportError(err.error().to_string())
    }
}
