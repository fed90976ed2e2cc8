//! Typed playbook resource specification.

use crate::error::{Error, Result};
use invkit::{Group, Host};
use serde::{Deserialize, Serialize};

/// Highest verbosity level ansible-playbook accepts (`-vvvvvv`).
pub const MAX_VERBOSITY: u8 = 6;

fn default_binary() -> String {
    "ansible-playbook".to_string()
}

/// Declarative specification of a playbook resource.
///
/// Field names match the persisted attribute surface, so a spec
/// deserializes directly from config and serializes into state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybookSpec {
    /// Path to the playbook to execute.
    pub playbook: String,

    /// Path to the ansible-playbook executable.
    #[serde(default = "default_binary")]
    pub ansible_playbook_binary: String,

    /// Re-execute the playbook on every apply. A replayable resource
    /// reports itself gone on read, forcing a recreate.
    #[serde(default)]
    pub replayable: bool,

    /// Treat a failed playbook run as success, keeping captured output.
    #[serde(default)]
    pub ignore_playbook_failure: bool,

    /// Verbosity level between 0 and 6, mapped to `-v`..`-vvvvvv`.
    #[serde(default)]
    pub verbosity: u8,

    /// Tags of plays and tasks to run.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Predict changes without applying them (`--check`).
    #[serde(default)]
    pub check_mode: bool,

    /// Show diffs for changed files and templates (`--diff`).
    #[serde(default)]
    pub diff_mode: bool,

    /// Run handlers even if a task fails (`--force-handlers`).
    #[serde(default)]
    pub force_handlers: bool,

    /// JSON or YAML encoded map of additional variables, passed raw
    /// to `-e`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_vars: Option<String>,

    /// Hosts to synthesize into the inventory. Last so TOML emits these
    /// tables after the scalar fields.
    #[serde(default)]
    pub inventory_hosts: Vec<Host>,

    /// Groups to synthesize into the inventory.
    #[serde(default)]
    pub inventory_groups: Vec<Group>,
}

impl PlaybookSpec {
    /// Create a spec with defaults for everything but the playbook path.
    pub fn new(playbook: impl Into<String>) -> Self {
        Self {
            playbook: playbook.into(),
            ansible_playbook_binary: default_binary(),
            replayable: false,
            ignore_playbook_failure: false,
            verbosity: 0,
            tags: Vec::new(),
            check_mode: false,
            diff_mode: false,
            force_handlers: false,
            extra_vars: None,
            inventory_hosts: Vec::new(),
            inventory_groups: Vec::new(),
        }
    }

    /// Check the spec for configuration errors.
    pub fn validate(&self) -> Result<()> {
        if self.playbook.trim().is_empty() {
            return Err(Error::config("playbook path must not be empty"));
        }
        if self.ansible_playbook_binary.trim().is_empty() {
            return Err(Error::config("ansible_playbook_binary must not be empty"));
        }
        if self.verbosity > MAX_VERBOSITY {
            return Err(Error::config(format!(
                "verbosity must be between 0 and {MAX_VERBOSITY}, got {}",
                self.verbosity
            )));
        }
        Ok(())
    }
}
