//! Compute networks service client
//!
//! Issues the networks.insert call against the provider's compute API.

use reqwest::Client;

use crate::compute::errors::{ApiError, Error};
use crate::compute::model::network::{Network, Operation};

/// Public compute API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://compute.googleapis.com/compute/v1";

/// Client for the compute networks API, bound to one endpoint and one
/// access token.
pub struct NetworksService {
    client: Client,
    endpoint: String,
    token: String,
}

impl NetworksService {
    pub fn new(client: Client, endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    /// Create a network in the given project.
    ///
    /// Sends a single insert request and returns the operation the API
    /// answers with. Success means the request was accepted, not that the
    /// network finished provisioning: the operation is not polled to
    /// completion. Name format is not validated locally; the remote API
    /// owns that. Cancellation belongs to the caller: drop the future to
    /// abandon the call; no timeout is imposed here.
    ///
    /// # Errors
    /// [`Error::Api`] carries the provider's status code and message for
    /// any non-success response (404 when the project does not exist, 409
    /// when the network already does). [`Error::Transport`] means no
    /// response was obtained at all.
    pub async fn insert(&self, project: &str, network: &Network) -> Result<Operation, Error> {
        let url = format!("{}/projects/{}/global/networks", self.endpoint, project);
        tracing::debug!(%project, network = %network.name, "inserting network");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(network)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let operation: Operation = response.json().await?;
            tracing::debug!(
                operation = operation.name.as_deref().unwrap_or("<unnamed>"),
                "insert accepted"
            );
            return Ok(operation);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_body(status.as_u16(), &body).into())
    }
}
