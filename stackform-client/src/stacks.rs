//! Stack mutations

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use stackform_core::domain::stack::{StackId, StackRef};
use stackform_core::dto::stack::StackInput;
use tracing::info;

use crate::ApiClient;
use crate::error::Result;

const CREATE_STACK: &str = "mutation CreateStack($input: StackInput!, $manageState: Boolean!) {
  stackCreate(input: $input, manageState: $manageState) { id name }
}";

const UPDATE_STACK: &str = "mutation UpdateStack($id: ID!, $input: StackInput!) {
  stackUpdate(id: $id, input: $input) { id name }
}";

/// Stack operations against the platform
///
/// Implemented by [`ApiClient`]; other implementations can stand in for it
/// in tests.
#[async_trait]
pub trait StackApi: Send + Sync {
    /// Create a stack
    ///
    /// # Arguments
    /// * `input` - The stack definition
    /// * `manage_state` - Whether the platform should manage Terraform state
    ///
    /// # Returns
    /// The created stack
    async fn create_stack(&self, input: &StackInput, manage_state: bool) -> Result<StackRef>;

    /// Replace the configuration of an existing stack
    ///
    /// Optional fields left unset in `input` are omitted from the request.
    async fn update_stack(&self, id: &StackId, input: &StackInput) -> Result<StackRef>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateStackData {
    stack_create: StackRef,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateStackData {
    stack_update: StackRef,
}

#[async_trait]
impl StackApi for ApiClient {
    async fn create_stack(&self, input: &StackInput, manage_state: bool) -> Result<StackRef> {
        let variables = json!({
            "input": input.to_json()?,
            "manageState": manage_state,
        });

        let data: CreateStackData = self.execute("stackCreate", CREATE_STACK, variables).await?;
        info!(id = %data.stack_create.id, name = %data.stack_create.name, "Stack created");

        Ok(data.stack_create)
    }

    async fn update_stack(&self, id: &StackId, input: &StackInput) -> Result<StackRef> {
        let variables = json!({
            "id": id,
            "input": input.to_json()?,
        });

        let data: UpdateStackData = self.execute("stackUpdate", UPDATE_STACK, variables).await?;
        info!(id = %data.stack_update.id, "Stack updated");

        Ok(data.stack_update)
    }
}
