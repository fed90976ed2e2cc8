//! Parse the config and validate every playbook resource.

use crate::Context;
use crate::config::Config;
use crate::ui;
use anyhow::Result;
use playbook::PlaybookSpec;
use std::path::Path;

pub fn run(ctx: &Context, config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;

    if config.playbooks.is_empty() {
        ui::warn("No playbook resources in config");
        return Ok(());
    }

    let mut invalid = 0usize;
    for (name, spec) in &config.playbooks {
        match spec.validate() {
            Ok(()) => {
                if !ctx.quiet {
                    ui::success(&format!("{name}: ok"));
                }
                check_extra_vars(name, spec);
            }
            Err(err) => {
                invalid += 1;
                ui::error(&format!("{name}: {err}"));
            }
        }
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} invalid playbook resource(s)");
    }

    ui::success(&format!(
        "{} playbook resource(s) valid",
        config.playbooks.len()
    ));
    Ok(())
}

/// extra_vars is passed through raw, but a JSON value that is not a map
/// is almost certainly a mistake worth flagging.
fn check_extra_vars(name: &str, spec: &PlaybookSpec) {
    let Some(extra_vars) = &spec.extra_vars else {
        return;
    };

    match serde_json::from_str::<serde_json::Value>(extra_vars) {
        Ok(serde_json::Value::Object(_)) => {}
        Ok(_) => ui::warn(&format!("{name}: extra_vars JSON is not a map")),
        Err(_) => ui::dim(&format!(
            "{name}: extra_vars is not JSON, passed through raw"
        )),
    }
}
