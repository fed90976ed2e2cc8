//! Tear down applied resources.
//!
//! Inventory removal is best-effort; the resource is dropped from state
//! either way.

use crate::Context;
use crate::cli::DestroyArgs;
use crate::state::StateFile;
use crate::ui;
use anyhow::{Result, bail};
use playbook::Controller;

pub fn run(ctx: &Context, args: DestroyArgs) -> Result<()> {
    let mut state = StateFile::load()?;
    let controller = Controller::new();

    let names: Vec<String> = match &args.name {
        Some(name) => {
            if !state.resources.contains_key(name) {
                bail!("No applied resource named '{name}'");
            }
            vec![name.clone()]
        }
        None => state.resources.keys().cloned().collect(),
    };

    if names.is_empty() {
        ui::warn("Nothing to destroy");
        return Ok(());
    }

    if !ctx.quiet {
        ui::header("Destroy");
    }

    for name in names {
        if let Some(resource) = state.resources.remove(&name) {
            controller.delete(&resource);
            ui::success(&format!("{name}: destroyed"));
            if ctx.verbose > 0 {
                ui::kv(
                    "inventory",
                    &resource.temp_inventory_dir.display().to_string(),
                );
            }
        }
    }

    state.touch()?;
    Ok(())
}
