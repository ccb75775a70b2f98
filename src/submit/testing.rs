//! In-memory [`Submitter`] for controller and app tests.

use std::sync::Mutex;

use super::client::{ServerReply, Submitter};
use super::error::SubmitError;
use crate::model::Registration;

/// Canned outcome a [`StubSubmitter`] returns for every call.
#[derive(Debug, Clone)]
pub(crate) enum StubReply {
    Reply(ServerReply),
    /// Simulates a reply that is not JSON.
    Garbage,
}

/// Records every registration it receives and answers with a fixed reply.
#[derive(Debug)]
pub(crate) struct StubSubmitter {
    reply: StubReply,
    calls: Mutex<Vec<Registration>>,
}

impl StubSubmitter {
    pub(crate) fn replying(success: bool, message: &str) -> Self {
        Self::new(StubReply::Reply(ServerReply {
            success,
            message: message.to_string(),
        }))
    }

    pub(crate) fn failing() -> Self {
        Self::new(StubReply::Garbage)
    }

    fn new(reply: StubReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<Registration> {
        self.calls.lock().unwrap().clone()
    }
}

impl Submitter for StubSubmitter {
    async fn submit(&self, registration: &Registration) -> Result<ServerReply, SubmitError> {
        self.calls.lock().unwrap().push(registration.clone());
        match &self.reply {
            StubReply::Reply(reply) => Ok(reply.clone()),
            StubReply::Garbage => Err(serde_json::from_str::<ServerReply>("garbage")
                .unwrap_err()
                .into()),
        }
    }
}
