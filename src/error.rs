use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtiForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Shape Error: {0}")]
    DataShape(String),
}

pub type AfResult<T> = Result<T, ArtiForgeError>;
