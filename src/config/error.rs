use crate::error::AttenuationError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid wavelength grid: {0}")]
    Wavelengths(String),

    #[error("Failed to build model: {0}")]
    Model(#[from] AttenuationError),
}
