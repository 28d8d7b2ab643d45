//! Stack definition files
//!
//! A definition file is the JSON wire form of a `StackInput`. Command-line
//! overrides are applied on top of it before rendering or submitting.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use stackform_core::dto::stack::{HookPhase, HookTiming, StackInput};
use stackform_core::dto::vendor::{
    AnsibleInput, CloudFormationInput, KubernetesInput, PulumiInput, TerraformInput, VendorConfig,
};
use std::path::Path;
use tracing::warn;

/// Fields that can be overridden from the command line
#[derive(Debug, Clone, Default, Args)]
pub struct StackOverrides {
    /// Override the stack name
    #[arg(long)]
    pub name: Option<String>,

    /// Override the tracked branch
    #[arg(long)]
    pub branch: Option<String>,

    /// Override the space the stack belongs to
    #[arg(long)]
    pub space: Option<String>,

    /// Override the worker pool ID
    #[arg(long)]
    pub worker_pool: Option<String>,

    /// Additional labels (repeatable or comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub label: Vec<String>,

    /// Enable autodeploy
    #[arg(long)]
    pub autodeploy: bool,

    /// Mark the stack as administrative
    #[arg(long)]
    pub administrative: bool,

    /// Protect the stack from deletion
    #[arg(long)]
    pub protect_from_deletion: bool,
}

impl StackOverrides {
    /// Apply the overrides to a loaded definition
    ///
    /// Flags only switch settings on; a flag left off keeps the file's value.
    pub fn apply(self, input: &mut StackInput) {
        if let Some(name) = self.name {
            input.name = name;
        }
        if let Some(branch) = self.branch {
            input.branch = branch;
        }
        if let Some(space) = self.space {
            input.space = Some(space);
        }
        if let Some(worker_pool) = self.worker_pool {
            input.worker_pool = Some(worker_pool.into());
        }
        for label in self.label {
            input.add_label(label);
        }

        input.autodeploy |= self.autodeploy;
        input.administrative |= self.administrative;
        input.protect_from_deletion |= self.protect_from_deletion;
    }
}

/// Vendor choices for generated templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VendorKind {
    Ansible,
    CloudFormation,
    Kubernetes,
    Pulumi,
    Terraform,
}

/// Parse a definition from JSON text
///
/// Keys the stack input does not know are ignored with a warning.
pub fn parse_definition(json: &str) -> Result<StackInput> {
    let value: serde_json::Value =
        serde_json::from_str(json).context("Stack definition is not valid JSON")?;

    for key in StackInput::unknown_keys(&value) {
        warn!(key = %key, "Ignoring unknown key in stack definition");
    }

    StackInput::from_json(value).context("Invalid stack definition")
}

/// Read and parse a definition file
pub fn load_definition(path: &Path) -> Result<StackInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read stack definition: {}", path.display()))?;

    parse_definition(&content).with_context(|| format!("In {}", path.display()))
}

/// Build a starter definition for a vendor
pub fn template(vendor: VendorKind) -> StackInput {
    let vendor_config: VendorConfig = match vendor {
        VendorKind::Ansible => AnsibleInput {
            playbook: "playbook.yml".to_string(),
        }
        .into(),
        VendorKind::CloudFormation => CloudFormationInput {
            entry_template_file: "main.yaml".to_string(),
            region: "us-east-1".to_string(),
            stack_name: "my-stack".to_string(),
            template_bucket: "s3://my-templates".to_string(),
        }
        .into(),
        VendorKind::Kubernetes => KubernetesInput {
            namespace: "default".to_string(),
        }
        .into(),
        VendorKind::Pulumi => PulumiInput {
            login_url: "s3://my-pulumi-state".to_string(),
            stack_name: "dev".to_string(),
        }
        .into(),
        VendorKind::Terraform => TerraformInput::with_version("1.5.7").into(),
    };

    StackInput::new("my-stack", "my-org/my-repo", "main")
        .with_description("Managed by stackform")
        .with_labels(Vec::new())
        .with_hook(HookPhase::Init, HookTiming::Before, Vec::new())
        .with_vendor_config(vendor_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFINITION: &str = r#"{
        "name": "network",
        "repository": "org/infra",
        "branch": "main",
        "labels": ["prod"],
        "vendorConfig": { "kubernetes": { "namespace": "apps" } }
    }"#;

    #[test]
    fn test_parse_definition_defaults_flags() {
        let input = parse_definition(DEFINITION).unwrap();
        assert_eq!(input.name, "network");
        assert!(!input.autodeploy);
        assert_eq!(input.labels, Some(vec!["prod".to_string()]));
    }

    #[test]
    fn test_parse_definition_rejects_two_vendors() {
        let json = r#"{
            "name": "network",
            "repository": "org/infra",
            "branch": "main",
            "vendorConfig": {
                "kubernetes": { "namespace": "apps" },
                "pulumi": { "loginURL": "s3://state", "stackName": "dev" }
            }
        }"#;
        let err = parse_definition(json).unwrap_err();
        assert!(format!("{:#}", err).contains("more than one vendor"));
    }

    #[test]
    fn test_parse_definition_tolerates_unknown_keys() {
        let json = r#"{
            "name": "network",
            "repository": "org/infra",
            "branch": "main",
            "autoDeploy": true
        }"#;
        let input = parse_definition(json).unwrap();
        assert!(!input.autodeploy);
    }

    #[test]
    fn test_parse_definition_rejects_bad_json() {
        let err = parse_definition("{ \"name\": ").unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_load_definition_missing_file() {
        let err = load_definition(Path::new("/nonexistent/stack.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read stack definition"));
    }

    #[test]
    fn test_overrides_apply() {
        let mut input = parse_definition(DEFINITION).unwrap();
        StackOverrides {
            name: Some("network-staging".to_string()),
            branch: Some("staging".to_string()),
            worker_pool: Some("01HPOOL".to_string()),
            label: vec!["staging".to_string(), "prod".to_string()],
            autodeploy: true,
            ..StackOverrides::default()
        }
        .apply(&mut input);

        assert_eq!(input.name, "network-staging");
        assert_eq!(input.branch, "staging");
        assert_eq!(input.worker_pool.as_ref().map(|p| p.as_str()), Some("01HPOOL"));
        assert_eq!(
            input.labels,
            Some(vec!["prod".to_string(), "staging".to_string()])
        );
        assert!(input.autodeploy);
        assert!(!input.administrative);
        assert_eq!(input.space, None);
    }

    #[test]
    fn test_templates_select_one_vendor() {
        for (kind, name) in [
            (VendorKind::Ansible, "ansible"),
            (VendorKind::CloudFormation, "cloudFormation"),
            (VendorKind::Kubernetes, "kubernetes"),
            (VendorKind::Pulumi, "pulumi"),
            (VendorKind::Terraform, "terraform"),
        ] {
            let input = template(kind);
            let value = input.to_json().unwrap();
            let vendor = value["vendorConfig"].as_object().unwrap();
            assert_eq!(vendor.len(), 1);
            assert!(vendor.contains_key(name));
            assert_eq!(value["labels"], serde_json::json!([]));
        }
    }
}
