use thiserror::Error;

#[derive(Error, Debug)]
pub enum CepError {
    #[error("Unknown service id: {0}")]
    UnknownService(String),

    #[error("Invalid service '{requested}'. Valid services are: {valid}")]
    InvalidService { requested: String, valid: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub type Result<T> = std::result::Result<T, CepError>;
