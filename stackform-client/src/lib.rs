//! Stackform GraphQL Client
//!
//! A small, type-safe client for the stack mutations of the platform's
//! GraphQL API.
//!
//! # Example
//!
//! ```no_run
//! use stackform_client::{ApiClient, StackApi};
//! use stackform_core::dto::stack::StackInput;
//! use stackform_core::dto::vendor::TerraformInput;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ApiClient::new("https://example.app.io/graphql").with_token("secret");
//!
//!     let input = StackInput::new("network", "org/infra", "main")
//!         .with_vendor_config(TerraformInput::with_version("1.5.0"));
//!     let stack = client.create_stack(&input, true).await?;
//!
//!     println!("Created stack: {}", stack.id);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod graphql;
mod stacks;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use stacks::StackApi;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::graphql::{GraphQlRequest, GraphQlResponse};

/// HTTP client for the platform's GraphQL endpoint
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// GraphQL endpoint (e.g., "https://example.app.io/graphql")
    endpoint: String,
    /// HTTP client instance
    client: Client,
    /// Bearer token sent with every request
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Arguments
    /// * `endpoint` - The GraphQL endpoint URL
    ///
    /// # Example
    /// ```
    /// use stackform_client::ApiClient;
    ///
    /// let client = ApiClient::new("https://example.app.io/graphql");
    /// ```
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, Client::new())
    }

    /// Create a new API client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use stackform_client::ApiClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ApiClient::with_client("https://example.app.io/graphql", http_client);
    /// ```
    pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
        let endpoint = endpoint.into();
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
            token: None,
        }
    }

    /// Authenticate every request with a bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the GraphQL endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether requests carry a bearer token
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Build the HTTP request for one GraphQL operation
    fn build_request(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> reqwest::Result<reqwest::Request> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request.build()
    }

    /// Send one GraphQL operation and return its `data`
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T> {
        let request = self.build_request(query, variables)?;

        debug!(operation, endpoint = %self.endpoint, "Sending GraphQL operation");
        let response = self.client.execute(request).await?;

        self.decode(operation, response).await
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize the JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Unwrap the GraphQL envelope of a response into its `data`
    async fn decode<T: DeserializeOwned>(
        &self,
        operation: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let body: GraphQlResponse<T> = self.handle_response(response).await?;
        body.into_result(operation).inspect_err(|e| {
            warn!(operation, error = %e, "GraphQL operation failed");
        })
    }
}
