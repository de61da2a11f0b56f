use thiserror::Error;

/// Failures that make a dataset unusable. Nothing downstream renders after one.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to fetch dataset from {source_name}: {message}")]
    Fetch { source_name: String, message: String },

    #[error("Missing columns in the dataset: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Malformed CSV: {0}")]
    Parse(#[from] csv::Error),
}

/// A selection that matched nothing. Only the detail sections are dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No rows found for location '{0}'")]
    NotFound(String),
}
