//! GraphQL envelope types
//!
//! Every operation is a `POST` of `{"query": ..., "variables": ...}`. The
//! answer carries `data`, `errors`, or both.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Request body of a GraphQL operation
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

/// Response body of a GraphQL operation
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

/// One entry of the `errors` array
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>, // strings or indices
}

impl std::fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) if !path.is_empty() => {
                let path: Vec<String> = path
                    .iter()
                    .map(|segment| match segment {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect();
                write!(f, "{} (at {})", self.message, path.join("."))
            }
            _ => write!(f, "{}", self.message),
        }
    }
}

impl<T> GraphQlResponse<T> {
    /// Extract `data`, turning any reported error into [`ClientError::GraphQl`]
    ///
    /// Errors win over partial data; a mutation that reported errors is
    /// treated as failed.
    pub fn into_result(self, operation: &str) -> Result<T> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            return Err(ClientError::GraphQl(
                errors.iter().map(ToString::to_string).collect(),
            ));
        }

        self.data
            .ok_or_else(|| ClientError::EmptyResponse(operation.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_envelope_shape() {
        let request = GraphQlRequest {
            query: "query { viewer { id } }",
            variables: json!({ "id": "infra" }),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "query": "query { viewer { id } }", "variables": { "id": "infra" } })
        );
    }

    #[test]
    fn test_errors_take_precedence() {
        let response: GraphQlResponse<serde_json::Value> = serde_json::from_value(json!({
            "data": { "stackCreate": null },
            "errors": [{ "message": "space not found", "path": ["stackCreate", 0] }]
        }))
        .unwrap();

        match response.into_result("stackCreate") {
            Err(ClientError::GraphQl(messages)) => {
                assert_eq!(messages, vec!["space not found (at stackCreate.0)".to_string()]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_data_is_empty_response() {
        let response: GraphQlResponse<serde_json::Value> =
            serde_json::from_value(json!({ "errors": [] })).unwrap();
        assert!(matches!(
            response.into_result("stackUpdate"),
            Err(ClientError::EmptyResponse(op)) if op == "stackUpdate"
        ));
    }
}
