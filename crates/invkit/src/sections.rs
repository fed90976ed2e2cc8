//! Insertion-ordered section accumulation for the `hosts` file.

use indexmap::IndexMap;

/// Accumulates inventory sections in insertion order.
///
/// Sections are created lazily on first member insertion, so a group that
/// never receives a member produces no section. Member lists are
/// deduplicated while preserving first-seen order.
#[derive(Debug, Default)]
pub struct SectionMap {
    sections: IndexMap<String, Vec<String>>,
}

impl SectionMap {
    /// Create an empty section map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `member` to `section`, creating the section if needed.
    ///
    /// A member already present in the section is not appended again.
    pub fn insert(&mut self, section: &str, member: &str) {
        let members = self.sections.entry(section.to_string()).or_default();
        if !members.iter().any(|m| m == member) {
            members.push(member.to_string());
        }
    }

    /// Whether no section has been created yet.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Members of a section, if it exists.
    pub fn members(&self, section: &str) -> Option<&[String]> {
        self.sections.get(section).map(Vec::as_slice)
    }

    /// Iterate sections in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sections
            .iter()
            .map(|(key, members)| (key.as_str(), members.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_created_lazily() {
        let sections = SectionMap::new();
        assert!(sections.is_empty());
        assert_eq!(sections.len(), 0);
    }

    #[test]
    fn test_insert_dedupes_within_section() {
        let mut sections = SectionMap::new();
        sections.insert("web", "web1");
        sections.insert("web", "web1");
        sections.insert("web", "web2");

        assert_eq!(
            sections.members("web").unwrap(),
            &["web1".to_string(), "web2".to_string()]
        );
    }

    #[test]
    fn test_same_member_allowed_across_sections() {
        let mut sections = SectionMap::new();
        sections.insert("web", "web1");
        sections.insert("prod", "web1");

        assert_eq!(sections.members("web").unwrap(), &["web1".to_string()]);
        assert_eq!(sections.members("prod").unwrap(), &["web1".to_string()]);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut sections = SectionMap::new();
        sections.insert("zulu", "h1");
        sections.insert("alpha", "h2");
        sections.insert("mike", "h3");

        let keys: Vec<&str> = sections.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
    }
}
