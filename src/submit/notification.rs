use std::time::Duration;

use super::client::ServerReply;
use super::error::SubmitError;

/// Shown when the backend answers `success: false`.
pub const GENERIC_FAILURE: &str = "Failed to save registration";

/// Shown when no usable reply arrived.
pub const TRANSPORT_FAILURE: &str = "Something went wrong!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient toast describing the outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// Maps the result of a submission to the toast the user sees.
    ///
    /// - transport or decode failure: [`TRANSPORT_FAILURE`]
    /// - `success: false`: [`GENERIC_FAILURE`]
    /// - `success: true`: the server's message
    pub fn from_result(result: &Result<ServerReply, SubmitError>) -> Self {
        match result {
            Ok(reply) if reply.success => Self::success(reply.message.clone()),
            Ok(_) => Self::error(GENERIC_FAILURE),
            Err(_) => Self::error(TRANSPORT_FAILURE),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }

    /// How long the toast stays on screen.
    pub fn duration(&self) -> Duration {
        match self.kind {
            NotificationKind::Success => Duration::from_secs(2),
            NotificationKind::Error => Duration::from_secs(4),
        }
    }
}
