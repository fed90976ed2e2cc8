//! Inventory tree synthesis.
//!
//! Materializes host/group declarations as a uniquely-named directory
//! containing an INI `hosts` file plus per-host and per-group variable
//! files. The caller owns the returned directory and is responsible for
//! removing it.

use crate::error::{Error, Result};
use crate::sections::SectionMap;
use crate::types::{Group, Host};
use crate::writer;
use std::fs;
use std::path::{Path, PathBuf};

/// Section that hosts with no declared groups are placed in.
pub const DEFAULT_HOST_GROUP: &str = "ungrouped";

/// Build an inventory tree under the system temp directory.
///
/// Creates a fresh directory whose name starts with `prefix` and returns
/// its path.
pub fn build(prefix: &str, hosts: &[Host], groups: &[Group]) -> Result<PathBuf> {
    let dir = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .map_err(Error::CreateDir)?
        .keep();
    populate(&dir, hosts, groups)?;
    Ok(dir)
}

/// Build an inventory tree under an explicit parent directory.
pub fn build_in(parent: &Path, prefix: &str, hosts: &[Host], groups: &[Group]) -> Result<PathBuf> {
    let dir = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir_in(parent)
        .map_err(Error::CreateDir)?
        .keep();
    populate(&dir, hosts, groups)?;
    Ok(dir)
}

fn populate(dir: &Path, hosts: &[Host], groups: &[Group]) -> Result<()> {
    let mut sections = SectionMap::new();

    for host in hosts {
        if host.groups.is_empty() {
            sections.insert(DEFAULT_HOST_GROUP, &host.name);
        } else {
            for group in &host.groups {
                sections.insert(group, &host.name);
            }
        }

        if let Some(variables) = &host.variables {
            write_vars(dir, "host_vars", &host.name, variables)?;
        }
    }

    for group in groups {
        let section = format!("{}:children", group.name);
        for child in &group.children {
            sections.insert(&section, child);
        }

        if let Some(variables) = &group.variables {
            write_vars(dir, "group_vars", &group.name, variables)?;
        }
    }

    writer::write_file(&sections, &dir.join("hosts"))
}

/// Write a variables blob verbatim under `host_vars/` or `group_vars/`.
fn write_vars(dir: &Path, subdir: &str, name: &str, variables: &str) -> Result<()> {
    let vars_dir = dir.join(subdir);
    fs::create_dir_all(&vars_dir).map_err(|source| Error::CreateSubdir {
        path: vars_dir.clone(),
        source,
    })?;

    let path = vars_dir.join(name);
    fs::write(&path, variables).map_err(|source| Error::Write { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_hosts(dir: &Path) -> String {
        fs::read_to_string(dir.join("hosts")).unwrap()
    }

    #[test]
    fn test_host_without_groups_goes_to_ungrouped() {
        let parent = tempfile::tempdir().unwrap();
        let hosts = vec![Host::new("a")];

        let dir = build_in(parent.path(), "inventory-", &hosts, &[]).unwrap();

        assert_eq!(read_hosts(&dir), "[ungrouped]\na\n");
    }

    #[test]
    fn test_hosts_appear_in_declared_groups_in_order() {
        let parent = tempfile::tempdir().unwrap();
        let hosts = vec![
            Host::new("web1").group("web").group("prod"),
            Host::new("web2").group("web"),
        ];

        let dir = build_in(parent.path(), "inventory-", &hosts, &[]).unwrap();

        assert_eq!(read_hosts(&dir), "[web]\nweb1\nweb2\n\n[prod]\nweb1\n");
    }

    #[test]
    fn test_duplicate_group_declarations_do_not_duplicate_members() {
        let parent = tempfile::tempdir().unwrap();
        let hosts = vec![Host::new("web1").group("web").group("web")];

        let dir = build_in(parent.path(), "inventory-", &hosts, &[]).unwrap();

        assert_eq!(read_hosts(&dir), "[web]\nweb1\n");
    }

    #[test]
    fn test_group_children_section() {
        let parent = tempfile::tempdir().unwrap();
        let groups = vec![Group::new("site").child("web").child("db")];

        let dir = build_in(parent.path(), "inventory-", &[], &groups).unwrap();

        assert_eq!(read_hosts(&dir), "[site:children]\nweb\ndb\n");
    }

    #[test]
    fn test_group_without_children_produces_no_section() {
        let parent = tempfile::tempdir().unwrap();
        let groups = vec![Group::new("empty")];

        let dir = build_in(parent.path(), "inventory-", &[], &groups).unwrap();

        assert_eq!(read_hosts(&dir), "");
    }

    #[test]
    fn test_host_variables_written_verbatim() {
        let parent = tempfile::tempdir().unwrap();
        let blob = "ansible_host: 10.0.0.1\nansible_port: 2222\n";
        let hosts = vec![Host::new("web1").group("web").variables(blob)];

        let dir = build_in(parent.path(), "inventory-", &hosts, &[]).unwrap();

        let written = fs::read_to_string(dir.join("host_vars").join("web1")).unwrap();
        assert_eq!(written, blob);
    }

    #[test]
    fn test_group_variables_written_verbatim() {
        let parent = tempfile::tempdir().unwrap();
        let blob = "proxy: http://proxy:3128";
        let groups = vec![Group::new("web").child("frontend").variables(blob)];

        let dir = build_in(parent.path(), "inventory-", &[], &groups).unwrap();

        let written = fs::read_to_string(dir.join("group_vars").join("web")).unwrap();
        assert_eq!(written, blob);
    }

    #[test]
    fn test_no_vars_dirs_without_variable_blobs() {
        let parent = tempfile::tempdir().unwrap();
        let hosts = vec![Host::new("a")];

        let dir = build_in(parent.path(), "inventory-", &hosts, &[]).unwrap();

        assert!(!dir.join("host_vars").exists());
        assert!(!dir.join("group_vars").exists());
    }

    #[test]
    fn test_empty_declarations_yield_empty_hosts_file() {
        let parent = tempfile::tempdir().unwrap();

        let dir = build_in(parent.path(), "inventory-", &[], &[]).unwrap();

        assert!(dir.join("hosts").is_file());
        assert_eq!(read_hosts(&dir), "");
    }

    #[test]
    fn test_directories_are_unique_per_build() {
        let parent = tempfile::tempdir().unwrap();
        let hosts = vec![Host::new("a")];

        let first = build_in(parent.path(), "inventory-", &hosts, &[]).unwrap();
        let second = build_in(parent.path(), "inventory-", &hosts, &[]).unwrap();

        assert_ne!(first, second);
        assert!(
            first
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("inventory-")
        );
    }
}
