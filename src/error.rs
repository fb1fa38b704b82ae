use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a run before anything is written back to disk.
///
/// Routine data problems (unknown ingredients, odd quantities, bad fields)
/// never show up here: the validator reports them as findings and the
/// estimator records them as missing inputs.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Recipe document not found at: {0:?}")]
    DocumentNotFound(PathBuf),

    #[error("Failed to read or write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path:?}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing 'recipes' array in document")]
    MissingRecipes,

    #[error("Nutrition table CSV not found at: {0:?}")]
    TableNotFound(PathBuf),

    #[error("Column '{0}' not found in nutrition table")]
    MissingColumn(&'static str),

    #[error("No valid nutrition entries loaded from {0:?}")]
    EmptyTable(PathBuf),

    #[error("Failed to read nutrition table: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
