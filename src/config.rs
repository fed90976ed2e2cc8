use anyhow::{Context, Result};
use playbook::PlaybookSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Config file declaring named playbook resources.
///
/// ```toml
/// [playbooks.web]
/// playbook = "~/playbooks/site.yml"
/// replayable = true
///
/// [[playbooks.web.inventory_hosts]]
/// name = "web1"
/// groups = ["web"]
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Playbook resources keyed by name.
    #[serde(default)]
    pub playbooks: BTreeMap<String, PlaybookSpec>,
}

impl Config {
    /// Load and parse a config file, expanding `~` in user-supplied paths.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        for spec in config.playbooks.values_mut() {
            spec.playbook = expand_path(&spec.playbook);
            spec.ansible_playbook_binary = expand_path(&spec.ansible_playbook_binary);
        }

        Ok(config)
    }

    /// Resources to operate on: all of them, or the single named one.
    pub fn select(&self, name: Option<&str>) -> Result<Vec<(&String, &PlaybookSpec)>> {
        match name {
            None => Ok(self.playbooks.iter().collect()),
            Some(name) => {
                let entry = self
                    .playbooks
                    .get_key_value(name)
                    .with_context(|| format!("No playbook named '{name}' in config"))?;
                Ok(vec![entry])
            }
        }
    }
}

/// Expand `~` in a user-supplied path.
fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).into_owned()
}
