//! Persisted playbook resource state.

use crate::spec::PlaybookSpec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Full persisted state of a playbook resource.
///
/// Computed fields come first so serializers that emit fields in order
/// keep scalars ahead of the spec's nested tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybookState {
    /// Unique resource identifier, assigned on create.
    pub id: String,

    /// Rendered command line of the run, kept for debugging.
    pub cmd: String,

    /// Inventory tree owned by this resource.
    pub temp_inventory_dir: PathBuf,

    /// Captured standard output of the run.
    pub ansible_playbook_stdout: String,

    /// Captured standard error of the run.
    pub ansible_playbook_stderr: String,

    /// Spec the resource was created from, flattened into the same
    /// attribute surface.
    #[serde(flatten)]
    pub spec: PlaybookSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> PlaybookState {
        PlaybookState {
            id: "b2c7a1d4".to_string(),
            cmd: "ansible-playbook -i /tmp/inventory-x site.yml".to_string(),
            temp_inventory_dir: PathBuf::from("/tmp/inventory-x"),
            ansible_playbook_stdout: "PLAY RECAP".to_string(),
            ansible_playbook_stderr: String::new(),
            spec: PlaybookSpec::new("site.yml"),
        }
    }

    #[test]
    fn test_state_flattens_spec_fields() {
        let rendered = toml::to_string(&sample_state()).unwrap();
        assert!(rendered.contains("playbook = \"site.yml\""));
        assert!(rendered.contains("id = \"b2c7a1d4\""));
        assert!(rendered.contains("temp_inventory_dir = \"/tmp/inventory-x\""));
    }

    #[test]
    fn test_state_round_trips() {
        let state = sample_state();
        let rendered = toml::to_string(&state).unwrap();
        let parsed: PlaybookState = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, state);
    }
}
