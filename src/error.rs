use thiserror::Error;

pub type Result<T> = std::result::Result<T, GchangesError>;

#[derive(Error, Debug)]
pub enum GchangesError {
    #[error("Git error: {0}")]
    Git(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
