//! Converge playbook resources to the config.
//!
//! Per resource: no state means create; a replayable resource reports
//! itself gone on read and is recreated; a changed spec triggers an
//! update; otherwise nothing happens. Failures are scoped to the single
//! resource and the rest still apply.

use crate::Context;
use crate::cli::ApplyArgs;
use crate::config::Config;
use crate::state::StateFile;
use crate::ui;
use anyhow::Result;
use playbook::{Controller, PlaybookSpec, PlaybookState, ReadOutcome};

/// What apply decided to do with one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Create,
    Replay,
    Update,
    NoChange,
}

impl Action {
    fn describe(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Replay => "re-run (replayable)",
            Self::Update => "update",
            Self::NoChange => "no change",
        }
    }
}

pub fn run(ctx: &Context, args: ApplyArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    let mut state = StateFile::load()?;
    let controller = Controller::new();

    let selected = config.select(args.name.as_deref())?;
    if selected.is_empty() {
        ui::warn("No playbook resources in config");
        return Ok(());
    }

    if !ctx.quiet {
        ui::header(if args.dry_run { "Apply (dry run)" } else { "Apply" });
    }

    let mut failed = 0usize;
    for (name, spec) in selected {
        let action = plan_action(&controller, state.resources.get(name), spec);

        if action == Action::NoChange {
            if !ctx.quiet {
                ui::dim(&format!("{name}: up to date"));
            }
            continue;
        }

        if args.dry_run {
            ui::info(&format!("{name}: would {}", action.describe()));
            continue;
        }

        let result = match state.resources.get(name) {
            None => controller.create(spec.clone()),
            Some(old) => controller.update(old, spec.clone()),
        };

        match result {
            Ok(new_state) => {
                ui::success(&format!("{name}: {} ({})", action.describe(), new_state.id));
                if ctx.verbose > 0 {
                    ui::kv("cmd", &new_state.cmd);
                    ui::kv("inventory", &new_state.temp_inventory_dir.display().to_string());
                }
                state.resources.insert(name.clone(), new_state);
                // Persist after every resource so earlier results survive a
                // later failure
                state.touch()?;
            }
            Err(err) => {
                failed += 1;
                ui::error(&format!("{name}: {err}"));
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} resource(s) failed to apply");
    }
    Ok(())
}

/// Decide what to do with a resource given its stored state.
fn plan_action(
    controller: &Controller,
    existing: Option<&PlaybookState>,
    spec: &PlaybookSpec,
) -> Action {
    match existing {
        None => Action::Create,
        Some(state) => match controller.read(state) {
            ReadOutcome::Gone => Action::Replay,
            ReadOutcome::Intact if state.spec != *spec => Action::Update,
            ReadOutcome::Intact => Action::NoChange,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn stored(spec: &PlaybookSpec) -> PlaybookState {
        PlaybookState {
            id: "a1".to_string(),
            cmd: String::new(),
            temp_inventory_dir: PathBuf::from("/tmp/inventory-a1"),
            ansible_playbook_stdout: String::new(),
            ansible_playbook_stderr: String::new(),
            spec: spec.clone(),
        }
    }

    #[test]
    fn test_plan_create_without_state() {
        let controller = Controller::new();
        let spec = PlaybookSpec::new("site.yml");
        assert_eq!(plan_action(&controller, None, &spec), Action::Create);
    }

    #[test]
    fn test_plan_noop_when_unchanged() {
        let controller = Controller::new();
        let spec = PlaybookSpec::new("site.yml");
        let state = stored(&spec);
        assert_eq!(
            plan_action(&controller, Some(&state), &spec),
            Action::NoChange
        );
    }

    #[test]
    fn test_plan_update_when_spec_changed() {
        let controller = Controller::new();
        let spec = PlaybookSpec::new("site.yml");
        let state = stored(&spec);

        let mut changed = spec.clone();
        changed.tags = vec!["deploy".to_string()];
        assert_eq!(
            plan_action(&controller, Some(&state), &changed),
            Action::Update
        );
    }

    #[test]
    fn test_plan_replay_when_replayable() {
        let controller = Controller::new();
        let mut spec = PlaybookSpec::new("site.yml");
        spec.replayable = true;
        let state = stored(&spec);

        // Even an identical spec re-runs when replayable
        assert_eq!(plan_action(&controller, Some(&state), &spec), Action::Replay);
    }
}
