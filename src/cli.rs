use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ansrun")]
#[command(version)]
#[command(about = "Declarative runner for Ansible playbooks", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Converge playbook resources to the config
    Apply(ApplyArgs),

    /// Tear down applied resources and their inventories
    Destroy(DestroyArgs),

    /// Show persisted resource state
    Status {
        /// Only show this resource
        name: Option<String>,
    },

    /// Parse the config file and validate every playbook resource
    Validate {
        /// Config file with playbook resources
        #[arg(short, long, default_value = "ansrun.toml")]
        config: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser)]
pub struct ApplyArgs {
    /// Only apply this resource
    pub name: Option<String>,

    /// Config file with playbook resources
    #[arg(short, long, default_value = "ansrun.toml")]
    pub config: PathBuf,

    /// Show planned actions without running anything
    #[arg(short, long)]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct DestroyArgs {
    /// Only destroy this resource
    pub name: Option<String>,
}
