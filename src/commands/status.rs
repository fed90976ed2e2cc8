//! Show persisted resource state.

use crate::Context;
use crate::state::StateFile;
use crate::ui;
use anyhow::{Result, bail};

pub fn run(ctx: &Context, name: Option<&str>) -> Result<()> {
    let state = StateFile::load()?;

    if state.resources.is_empty() {
        ui::warn("No applied resources");
        return Ok(());
    }

    if let Some(name) = name
        && !state.resources.contains_key(name)
    {
        bail!("No applied resource named '{name}'");
    }

    ui::header("Playbook resources");

    for (resource_name, resource) in &state.resources {
        if let Some(filter) = name
            && filter != resource_name
        {
            continue;
        }

        ui::section(resource_name);
        ui::kv("id", &resource.id);
        ui::kv("playbook", &resource.spec.playbook);
        ui::kv("replayable", if resource.spec.replayable { "yes" } else { "no" });
        ui::kv(
            "inventory",
            &resource.temp_inventory_dir.display().to_string(),
        );
        ui::kv("cmd", &resource.cmd);

        if ctx.verbose > 0 && !resource.ansible_playbook_stdout.is_empty() {
            ui::kv("stdout", resource.ansible_playbook_stdout.trim());
        }
        if ctx.verbose > 0 && !resource.ansible_playbook_stderr.is_empty() {
            ui::kv("stderr", resource.ansible_playbook_stderr.trim());
        }
    }

    println!();
    ui::dim(&format!("Last updated {}", state.last_updated));
    Ok(())
}
