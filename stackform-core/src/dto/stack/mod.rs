//! Stack DTOs
//!
//! [`StackInput`] is the body of the `stackCreate` and `stackUpdate`
//! mutations. Required fields always serialize. Optional fields serialize
//! only when set, so an update leaves untouched whatever the caller did not
//! mention.

mod hooks;

pub use hooks::{HookPhase, HookTiming, LifecycleHooks};

use serde::{Deserialize, Serialize};

use crate::domain::stack::WorkerPoolId;
use crate::dto::vendor::{self, VendorConfig, VendorConfigInput};
use crate::error::Result;

/// Input required to create or update a stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackInput {
    /// Stack name
    pub name: String,

    /// Repository holding the stack's code
    pub repository: String,

    /// Tracked branch
    pub branch: String,

    /// VCS namespace or organization owning the repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Subdirectory of the repository the stack lives in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_root: Option<String>,

    /// VCS provider tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(default)]
    pub administrative: bool,
    #[serde(default)]
    pub autodeploy: bool,
    #[serde(default)]
    pub autoretry: bool,
    #[serde(default)]
    pub github_action_deploy: bool,
    #[serde(default)]
    pub local_preview_enabled: bool,
    #[serde(default)]
    pub protect_from_deletion: bool,

    #[serde(flatten)]
    pub hooks: LifecycleHooks,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    /// Access-control space the stack belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,

    /// Container image override for runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_pool: Option<WorkerPoolId>,

    #[serde(
        default,
        deserialize_with = "vendor::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub vendor_config: Option<VendorConfig>,
}

impl StackInput {
    /// Create an input with only the required fields set
    ///
    /// All behavior flags start as `false` and every optional field is absent.
    pub fn new(
        name: impl Into<String>,
        repository: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            repository: repository.into(),
            branch: branch.into(),
            namespace: None,
            project_root: None,
            provider: None,
            administrative: false,
            autodeploy: false,
            autoretry: false,
            github_action_deploy: false,
            local_preview_enabled: false,
            protect_from_deletion: false,
            hooks: LifecycleHooks::default(),
            description: None,
            labels: None,
            space: None,
            runner_image: None,
            worker_pool: None,
            vendor_config: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_project_root(mut self, project_root: impl Into<String>) -> Self {
        self.project_root = Some(project_root.into());
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn with_administrative(mut self, administrative: bool) -> Self {
        self.administrative = administrative;
        self
    }

    pub fn with_autodeploy(mut self, autodeploy: bool) -> Self {
        self.autodeploy = autodeploy;
        self
    }

    pub fn with_autoretry(mut self, autoretry: bool) -> Self {
        self.autoretry = autoretry;
        self
    }

    pub fn with_github_action_deploy(mut self, github_action_deploy: bool) -> Self {
        self.github_action_deploy = github_action_deploy;
        self
    }

    pub fn with_local_preview_enabled(mut self, local_preview_enabled: bool) -> Self {
        self.local_preview_enabled = local_preview_enabled;
        self
    }

    pub fn with_protect_from_deletion(mut self, protect_from_deletion: bool) -> Self {
        self.protect_from_deletion = protect_from_deletion;
        self
    }

    /// Set one lifecycle hook list; an empty `commands` is sent as `[]`
    pub fn with_hook(mut self, phase: HookPhase, timing: HookTiming, commands: Vec<String>) -> Self {
        self.hooks.set(phase, timing, Some(commands));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the label list; an empty `labels` is sent as `[]`
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_space(mut self, space: impl Into<String>) -> Self {
        self.space = Some(space.into());
        self
    }

    pub fn with_runner_image(mut self, runner_image: impl Into<String>) -> Self {
        self.runner_image = Some(runner_image.into());
        self
    }

    pub fn with_worker_pool(mut self, worker_pool: impl Into<WorkerPoolId>) -> Self {
        self.worker_pool = Some(worker_pool.into());
        self
    }

    /// Select the vendor integration, replacing any previous selection
    pub fn with_vendor_config(mut self, vendor_config: impl Into<VendorConfig>) -> Self {
        self.vendor_config = Some(vendor_config.into());
        self
    }

    /// Append a label, creating the list if it was unset
    ///
    /// Duplicates are skipped.
    pub fn add_label(&mut self, label: impl Into<String>) {
        let label = label.into();
        let labels = self.labels.get_or_insert_with(Vec::new);
        if !labels.contains(&label) {
            labels.push(label);
        }
    }

    /// Encode as the JSON value sent in the mutation's `input` variable
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Encode as pretty-printed JSON text
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from a JSON value
    ///
    /// A `vendorConfig` naming more than one vendor fails with
    /// [`ModelError::InvalidConfiguration`](crate::ModelError::InvalidConfiguration).
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        if let Some(block) = value.get("vendorConfig").filter(|v| !v.is_null()) {
            VendorConfigInput::deserialize(block)?.into_config()?;
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Decode from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json(serde_json::from_str(json)?)
    }

    /// Top-level keys of `value` that are not stack input fields
    ///
    /// Unknown keys are ignored on decode, so callers loading hand-written
    /// definitions use this to report typos.
    pub fn unknown_keys(value: &serde_json::Value) -> Vec<String> {
        value
            .as_object()
            .map(|object| {
                object
                    .keys()
                    .filter(|key| !WIRE_FIELDS.contains(&key.as_str()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Every wire key a [`StackInput`] reads or writes
pub const WIRE_FIELDS: [&str; 28] = [
    "name",
    "repository",
    "branch",
    "namespace",
    "projectRoot",
    "provider",
    "administrative",
    "autodeploy",
    "autoretry",
    "githubActionDeploy",
    "localPreviewEnabled",
    "protectFromDeletion",
    "beforeInit",
    "afterInit",
    "beforePlan",
    "afterPlan",
    "beforeApply",
    "afterApply",
    "beforePerform",
    "afterPerform",
    "beforeDestroy",
    "afterDestroy",
    "description",
    "labels",
    "space",
    "runnerImage",
    "workerPool",
    "vendorConfig",
];
