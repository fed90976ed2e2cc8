//! Lifecycle operations for playbook resources.
//!
//! A resource moves through create, read, update and delete. Failures are
//! errors scoped to the single operation; inventory cleanup is
//! best-effort and only logged.

use crate::command;
use crate::error::{Error, Result};
use crate::exec::{ProcessRunner, Runner};
use crate::spec::PlaybookSpec;
use crate::state::PlaybookState;
use std::path::Path;
use uuid::Uuid;

/// Name prefix for synthesized inventory directories.
pub const INVENTORY_PREFIX: &str = "inventory-";

/// Outcome of reading a resource back from state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The stored state stands.
    Intact,
    /// The resource should be treated as gone and recreated on the next
    /// apply. This is how replayable resources re-run every time.
    Gone,
}

/// Drives playbook resources through their lifecycle.
pub struct Controller {
    runner: Box<dyn Runner>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Controller that spawns the real ansible-playbook process.
    pub fn new() -> Self {
        Self {
            runner: Box::new(ProcessRunner),
        }
    }

    /// Controller with a custom runner (useful for testing).
    pub fn with_runner(runner: Box<dyn Runner>) -> Self {
        Self { runner }
    }

    /// Create the resource: synthesize an inventory, run the playbook
    /// once to completion, and return the resulting state.
    ///
    /// A nonzero exit or a spawn failure is an error unless the spec sets
    /// `ignore_playbook_failure`, in which case the captured output is
    /// persisted and the failure only logged.
    pub fn create(&self, spec: PlaybookSpec) -> Result<PlaybookState> {
        spec.validate()?;

        let inventory_dir = invkit::build(
            INVENTORY_PREFIX,
            &spec.inventory_hosts,
            &spec.inventory_groups,
        )?;
        log::debug!(
            "inventory for {} at {}",
            spec.playbook,
            inventory_dir.display()
        );

        let args = command::playbook_args(&spec, &inventory_dir);
        let cmd = command::render_command(&spec.ansible_playbook_binary, &args);
        log::debug!("running: {cmd}");

        let (stdout, stderr) = match self.runner.run(&spec.ansible_playbook_binary, &args) {
            Ok(output) if output.success => (output.stdout_str(), output.stderr_str()),
            Ok(output) => {
                if !spec.ignore_playbook_failure {
                    remove_inventory(&inventory_dir);
                    return Err(Error::PlaybookFailed {
                        playbook: spec.playbook,
                        code: output.code,
                        stderr: output.stderr_str(),
                    });
                }
                log::warn!(
                    "playbook {} failed, continuing: {}",
                    spec.playbook,
                    output.stderr_str().trim()
                );
                (output.stdout_str(), output.stderr_str())
            }
            Err(source) => {
                if !spec.ignore_playbook_failure {
                    remove_inventory(&inventory_dir);
                    return Err(Error::Spawn {
                        binary: spec.ansible_playbook_binary,
                        source,
                    });
                }
                log::warn!(
                    "could not start {}, continuing: {source}",
                    spec.ansible_playbook_binary
                );
                (String::new(), source.to_string())
            }
        };

        Ok(PlaybookState {
            id: Uuid::new_v4().to_string(),
            cmd,
            temp_inventory_dir: inventory_dir,
            ansible_playbook_stdout: stdout,
            ansible_playbook_stderr: stderr,
            spec,
        })
    }

    /// Read the resource back from state.
    pub fn read(&self, state: &PlaybookState) -> ReadOutcome {
        if state.spec.replayable {
            ReadOutcome::Gone
        } else {
            ReadOutcome::Intact
        }
    }

    /// Replace the resource: remove the old inventory tree, then create
    /// from the new spec. The old state's inventory path is never reused.
    pub fn update(&self, old: &PlaybookState, spec: PlaybookSpec) -> Result<PlaybookState> {
        remove_inventory(&old.temp_inventory_dir);
        self.create(spec)
    }

    /// Delete the resource. Cleanup is best-effort.
    pub fn delete(&self, state: &PlaybookState) {
        remove_inventory(&state.temp_inventory_dir);
    }
}

/// Remove an inventory tree, logging instead of failing.
pub fn remove_inventory(dir: &Path) {
    if let Err(err) = std::fs::remove_dir_all(dir) {
        log::warn!("failed to remove inventory dir {}: {err}", dir.display());
    }
}
