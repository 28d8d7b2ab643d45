//! Stack domain types

use serde::{Deserialize, Serialize};

/// Opaque identifier of a stack on the remote platform
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackId(String);

impl StackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for StackId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for StackId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Opaque reference to a worker pool
///
/// The pool is owned elsewhere; a stack only points at it by ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerPoolId(String);

impl WorkerPoolId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkerPoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WorkerPoolId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for WorkerPoolId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Stack as returned by the create and update mutations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackRef {
    /// Identifier assigned by the platform
    pub id: StackId,

    /// Stack name
    pub name: String,
}
