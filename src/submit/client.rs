use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::SubmitError;
use crate::model::Registration;

/// JSON object the backend answers with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerReply {
    /// A reply without the key counts as not successful.
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Sends a completed registration somewhere and reports the reply.
///
/// One call is one attempt; implementations must not retry.
pub trait Submitter: Send + Sync + 'static {
    fn submit(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<ServerReply, SubmitError>> + Send;
}

/// [`Submitter`] that POSTs the registration as JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: Client,
    endpoint: Url,
}

impl HttpSubmitter {
    /// Creates a submitter for `endpoint`, optionally bounding each request by `timeout`.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, SubmitError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    /// Returns the URL registrations are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn send(&self, registration: &Registration) -> Result<ServerReply, SubmitError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(registration)
            .send()
            .await?;
        let status = response.status();
        // The reply body is interpreted whatever the status code.
        let body = response.bytes().await?;
        let reply: ServerReply = serde_json::from_slice(&body)?;
        debug!(%status, success = reply.success, "registration reply");
        Ok(reply)
    }
}

impl Submitter for HttpSubmitter {
    async fn submit(&self, registration: &Registration) -> Result<ServerReply, SubmitError> {
        info!(endpoint = %self.endpoint, email = %registration.email, "submitting registration");
        let result = self.send(registration).await;
        if let Err(e) = &result {
            warn!(error = %e, "registration submission failed");
        }
        result
    }
}
