//! Lifecycle hooks
//!
//! Commands the remote runner executes before or after each stage of a run.
//! Every hook list is tri-state: unset (`None`, the key is omitted and the
//! remote value is left alone), empty (`Some(vec![])`, sent as `[]`), or
//! populated.

use serde::{Deserialize, Serialize};

/// Stage of a stack run a hook is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPhase {
    Init,
    Plan,
    Apply,
    Perform,
    Destroy,
}

impl HookPhase {
    /// All phases, in run order
    pub const ALL: [HookPhase; 5] = [
        HookPhase::Init,
        HookPhase::Plan,
        HookPhase::Apply,
        HookPhase::Perform,
        HookPhase::Destroy,
    ];
}

impl std::fmt::Display for HookPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HookPhase::Init => write!(f, "Init"),
            HookPhase::Plan => write!(f, "Plan"),
            HookPhase::Apply => write!(f, "Apply"),
            HookPhase::Perform => write!(f, "Perform"),
            HookPhase::Destroy => write!(f, "Destroy"),
        }
    }
}

/// Whether a hook runs before or after its phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookTiming {
    Before,
    After,
}

impl std::fmt::Display for HookTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HookTiming::Before => write!(f, "before"),
            HookTiming::After => write!(f, "after"),
        }
    }
}

/// The ten hook lists of a stack
///
/// Flattened into [`StackInput`](super::StackInput) on the wire, so each list
/// appears as a top-level key such as `beforeInit` or `afterApply`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleHooks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_init: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_init: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_plan: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_plan: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_apply: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_apply: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_perform: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_perform: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_destroy: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_destroy: Option<Vec<String>>,
}

impl LifecycleHooks {
    /// Commands attached to `phase` at `timing`, if the list is set
    pub fn get(&self, phase: HookPhase, timing: HookTiming) -> Option<&[String]> {
        self.slot(phase, timing).as_deref()
    }

    /// Replace the list attached to `phase` at `timing`
    ///
    /// `None` unsets it; `Some(vec![])` sets it to an explicit empty list.
    pub fn set(&mut self, phase: HookPhase, timing: HookTiming, commands: Option<Vec<String>>) {
        *self.slot_mut(phase, timing) = commands;
    }

    /// Append one command, creating the list if it was unset
    pub fn push(&mut self, phase: HookPhase, timing: HookTiming, command: impl Into<String>) {
        self.slot_mut(phase, timing)
            .get_or_insert_with(Vec::new)
            .push(command.into());
    }

    /// True when no list is set, not even to an empty one
    pub fn is_unset(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Iterate the lists that are set, in run order
    pub fn iter(&self) -> impl Iterator<Item = (HookPhase, HookTiming, &[String])> {
        HookPhase::ALL.into_iter().flat_map(move |phase| {
            [HookTiming::Before, HookTiming::After]
                .into_iter()
                .filter_map(move |timing| {
                    self.get(phase, timing)
                        .map(|commands| (phase, timing, commands))
                })
        })
    }

    fn slot(&self, phase: HookPhase, timing: HookTiming) -> &Option<Vec<String>> {
        match (phase, timing) {
            (HookPhase::Init, HookTiming::Before) => &self.before_init,
            (HookPhase::Init, HookTiming::After) => &self.after_init,
            (HookPhase::Plan, HookTiming::Before) => &self.before_plan,
            (HookPhase::Plan, HookTiming::After) => &self.after_plan,
            (HookPhase::Apply, HookTiming::Before) => &self.before_apply,
            (HookPhase::Apply, HookTiming::After) => &self.after_apply,
            (HookPhase::Perform, HookTiming::Before) => &self.before_perform,
            (HookPhase::Perform, HookTiming::After) => &self.after_perform,
            (HookPhase::Destroy, HookTiming::Before) => &self.before_destroy,
            (HookPhase::Destroy, HookTiming::After) => &self.after_destroy,
        }
    }

    fn slot_mut(&mut self, phase: HookPhase, timing: HookTiming) -> &mut Option<Vec<String>> {
        match (phase, timing) {
            (HookPhase::Init, HookTiming::Before) => &mut self.before_init,
            (HookPhase::Init, HookTiming::After) => &mut self.after_init,
            (HookPhase::Plan, HookTiming::Before) => &mut self.before_plan,
            (HookPhase::Plan, HookTiming::After) => &mut self.after_plan,
            (HookPhase::Apply, HookTiming::Before) => &mut self.before_apply,
            (HookPhase::Apply, HookTiming::After) => &mut self.after_apply,
            (HookPhase::Perform, HookTiming::Before) => &mut self.before_perform,
            (HookPhase::Perform, HookTiming::After) => &mut self.after_perform,
            (HookPhase::Destroy, HookTiming::Before) => &mut self.before_destroy,
            (HookPhase::Destroy, HookTiming::After) => &mut self.after_destroy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_and_set_address_the_right_list() {
        let mut hooks = LifecycleHooks::default();
        hooks.set(
            HookPhase::Apply,
            HookTiming::After,
            Some(vec!["notify".to_string()]),
        );

        assert_eq!(hooks.after_apply, Some(vec!["notify".to_string()]));
        assert_eq!(hooks.get(HookPhase::Apply, HookTiming::Before), None);
        assert_eq!(
            hooks.get(HookPhase::Apply, HookTiming::After),
            Some(&["notify".to_string()][..])
        );
    }

    #[test]
    fn test_push_creates_list() {
        let mut hooks = LifecycleHooks::default();
        hooks.push(HookPhase::Init, HookTiming::Before, "terraform fmt -check");
        hooks.push(HookPhase::Init, HookTiming::Before, "tflint");

        assert_eq!(
            hooks.before_init,
            Some(vec!["terraform fmt -check".to_string(), "tflint".to_string()])
        );
    }

    #[test]
    fn test_empty_list_is_not_unset() {
        let mut hooks = LifecycleHooks::default();
        assert!(hooks.is_unset());

        hooks.set(HookPhase::Destroy, HookTiming::Before, Some(Vec::new()));
        assert!(!hooks.is_unset());
        assert_eq!(
            serde_json::to_value(&hooks).unwrap(),
            json!({ "beforeDestroy": [] })
        );
    }

    #[test]
    fn test_iter_follows_run_order() {
        let mut hooks = LifecycleHooks::default();
        hooks.push(HookPhase::Destroy, HookTiming::After, "cleanup");
        hooks.push(HookPhase::Init, HookTiming::After, "setup");
        hooks.push(HookPhase::Init, HookTiming::Before, "prepare");

        let order: Vec<_> = hooks.iter().map(|(p, t, _)| (p, t)).collect();
        assert_eq!(
            order,
            vec![
                (HookPhase::Init, HookTiming::Before),
                (HookPhase::Init, HookTiming::After),
                (HookPhase::Destroy, HookTiming::After),
            ]
        );
    }
}
