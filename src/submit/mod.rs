//! Registration submission: JSON POST to the backend and the resulting
//! user-facing notification.

mod client;
mod error;
mod notification;
#[cfg(test)]
pub(crate) mod testing;

pub use client::{HttpSubmitter, ServerReply, Submitter};
pub use error::SubmitError;
pub use notification::{GENERIC_FAILURE, Notification, NotificationKind, TRANSPORT_FAILURE};
