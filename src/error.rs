use thiserror::Error;

pub type Result<T, E = FeeError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum FeeError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Ruleset validation error: {0}")]
    ValidationError(String),
}
