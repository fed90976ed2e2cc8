//! Host and group declarations.

use serde::{Deserialize, Serialize};

/// A declared inventory host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    /// Inventory hostname.
    pub name: String,
    /// Groups this host belongs to. A host with no groups is placed in
    /// the `ungrouped` section.
    #[serde(default)]
    pub groups: Vec<String>,
    /// Opaque variables blob, written verbatim to `host_vars/<name>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<String>,
}

impl Host {
    /// Create a host with no group memberships and no variables.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
            variables: None,
        }
    }

    /// Add a group membership.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    /// Attach a variables blob.
    pub fn variables(mut self, variables: impl Into<String>) -> Self {
        self.variables = Some(variables.into());
        self
    }
}

/// A declared inventory group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group name.
    pub name: String,
    /// Names of child groups, emitted as a `<name>:children` section.
    #[serde(default)]
    pub children: Vec<String>,
    /// Opaque variables blob, written verbatim to `group_vars/<name>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<String>,
}

impl Group {
    /// Create a group with no children and no variables.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            variables: None,
        }
    }

    /// Add a child group.
    pub fn child(mut self, child: impl Into<String>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Attach a variables blob.
    pub fn variables(mut self, variables: impl Into<String>) -> Self {
        self.variables = Some(variables.into());
        self
    }
}
