/// Errors that can occur while sending a registration.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend replied with something other than the expected JSON object.
    #[error("unreadable reply: {0}")]
    Decode(#[from] serde_json::Error),
}
