//! # invkit
//!
//! Pure Rust library for synthesizing Ansible INI inventory trees.
//!
//! This crate provides functionality for:
//! - Declaring hosts with group memberships and variable blobs
//! - Declaring groups with child groups and variable blobs
//! - Materializing those declarations as an on-disk inventory directory
//!   (`hosts` file plus `host_vars/` and `group_vars/` entries)
//!
//! ## Example
//!
//! ```no_run
//! use invkit::{Group, Host, build};
//!
//! let hosts = vec![
//!     Host::new("web1").group("web").group("prod"),
//!     Host::new("web2").group("web"),
//! ];
//! let groups = vec![Group::new("site").child("web")];
//!
//! let dir = build("inventory-", &hosts, &groups).expect("build failed");
//! println!("inventory at {}", dir.display());
//! ```
//!
//! The resulting `hosts` file lists one `[section]` per group in the order
//! sections were first populated, with deduplicated members. Hosts that
//! declare no groups land in the `ungrouped` section. Variable blobs are
//! written verbatim; no YAML or JSON validation is performed.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod error;
pub mod sections;
pub mod types;
pub mod writer;

pub use builder::{DEFAULT_HOST_GROUP, build, build_in};
pub use error::{Error, Result};
pub use sections::SectionMap;
pub use types::{Group, Host};
