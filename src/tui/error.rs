use crate::config::ConfigError;
use crate::submit::SubmitError;

/// Errors that can stop the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, log file, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The environment configuration is unusable.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP client could not be built.
    #[error("submission client error: {0}")]
    Submit(#[from] SubmitError),
}
