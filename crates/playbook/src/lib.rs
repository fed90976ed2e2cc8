//! # playbook
//!
//! Lifecycle controller for Ansible playbook resources.
//!
//! A resource is declared as a [`PlaybookSpec`], materialized by
//! [`Controller::create`] (inventory synthesis plus one synchronous
//! `ansible-playbook` run) into a [`PlaybookState`], re-checked with
//! [`Controller::read`], replaced with [`Controller::update`] and torn
//! down with [`Controller::delete`].
//!
//! Process execution sits behind the [`Runner`] trait so the controller
//! can be driven in tests without Ansible installed:
//!
//! ```no_run
//! use playbook::{Controller, PlaybookSpec};
//!
//! let controller = Controller::new();
//! let spec = PlaybookSpec::new("site.yml");
//! let state = controller.create(spec)?;
//! println!("{}", state.ansible_playbook_stdout);
//! # Ok::<(), playbook::Error>(())
//! ```

pub mod command;
pub mod error;
pub mod exec;
pub mod lifecycle;
pub mod spec;
pub mod state;

pub use command::{playbook_args, render_command, verbose_switch};
pub use error::{Error, Result};
pub use exec::{CommandOutput, ProcessRunner, Runner};
pub use lifecycle::{Controller, INVENTORY_PREFIX, ReadOutcome, remove_inventory};
pub use spec::{MAX_VERBOSITY, PlaybookSpec};
pub use state::PlaybookState;
