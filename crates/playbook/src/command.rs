//! CLI argument assembly for ansible-playbook.
//!
//! The argument order is fixed so the rendered `cmd` debug field is
//! reproducible: inventory, verbosity, `--force-handlers`, tags,
//! `--check`, `--diff`, extra vars, playbook path last.

use crate::spec::PlaybookSpec;
use std::path::Path;

/// Encode a verbosity level as a repeated-character flag (`-vvv`).
///
/// Level 0 yields no flag.
pub fn verbose_switch(verbosity: u8) -> Option<String> {
    if verbosity == 0 {
        return None;
    }
    Some(format!("-{}", "v".repeat(usize::from(verbosity))))
}

/// Assemble the argument vector for a playbook run.
pub fn playbook_args(spec: &PlaybookSpec, inventory_dir: &Path) -> Vec<String> {
    let mut args = vec!["-i".to_string(), inventory_dir.display().to_string()];

    if let Some(verbose) = verbose_switch(spec.verbosity) {
        args.push(verbose);
    }

    if spec.force_handlers {
        args.push("--force-handlers".to_string());
    }

    if !spec.tags.is_empty() {
        args.push("--tags".to_string());
        args.push(spec.tags.join(","));
    }

    if spec.check_mode {
        args.push("--check".to_string());
    }

    if spec.diff_mode {
        args.push("--diff".to_string());
    }

    if let Some(extra_vars) = &spec.extra_vars {
        args.push("-e".to_string());
        args.push(extra_vars.clone());
    }

    args.push(spec.playbook.clone());

    args
}

/// Render the command line persisted in the `cmd` debug field.
pub fn render_command(binary: &str, args: &[String]) -> String {
    let mut cmd = binary.to_string();
    for arg in args {
        cmd.push(' ');
        cmd.push_str(arg);
    }
    cmd
}
