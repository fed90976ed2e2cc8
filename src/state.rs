use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use playbook::PlaybookState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk record of every playbook resource ansrun has applied.
///
/// Resources are keyed by config name. A `BTreeMap` keeps the saved TOML
/// stably ordered across runs.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StateFile {
    /// Last time the state was updated.
    pub last_updated: DateTime<Utc>,

    /// Applied resources keyed by name.
    #[serde(default)]
    pub resources: BTreeMap<String, PlaybookState>,
}

impl StateFile {
    /// Get the state directory path (~/.local/state/ansrun)
    pub fn state_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".local").join("state").join("ansrun"))
    }

    /// Get the state file path
    fn state_file() -> Result<PathBuf> {
        Ok(Self::state_dir()?.join("state.toml"))
    }

    /// Load state from disk, or return default if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::state_file()?)
    }

    /// Load state from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("State file does not exist, using default state");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read state file: {}", path.display()))?;

        let state: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse state file: {}", path.display()))?;

        log::debug!("Loaded state from {}", path.display());
        Ok(state)
    }

    /// Save state to disk
    pub fn save(&self) -> Result<()> {
        let dir = Self::state_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create state directory: {}", dir.display()))?;
        self.save_to(&Self::state_file()?)
    }

    /// Save state to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(&self).context("Failed to serialize state to TOML")?;

        fs::write(path, &content)
            .with_context(|| format!("Failed to write state file: {}", path.display()))?;

        log::debug!("Saved state to {}", path.display());
        Ok(())
    }

    /// Update the last_updated timestamp and save
    pub fn touch(&mut self) -> Result<()> {
        self.last_updated = Utc::now();
        self.save()
    }
}

impl Default for StateFile {
    fn default() -> Self {
        Self {
            last_updated: Utc::now(),
            resources: BTreeMap::new(),
        }
    }
}
