//! Serializer for the INI `hosts` file.
//!
//! Renders accumulated sections as `[section]` headers with one member per
//! line, in section-insertion order.

use crate::error::{Error, Result};
use crate::sections::SectionMap;
use std::fmt::Write;
use std::path::Path;

/// Render sections as INI text.
pub fn write_string(sections: &SectionMap) -> String {
    let mut output = String::new();
    let mut first_section = true;

    for (key, members) in sections.iter() {
        // Blank line between sections
        if !first_section {
            writeln!(output).unwrap();
        }
        first_section = false;

        writeln!(output, "[{key}]").unwrap();
        for member in members {
            writeln!(output, "{member}").unwrap();
        }
    }

    output
}

/// Write the rendered sections to `path`.
///
/// The file is created even when there are no sections, yielding an empty
/// inventory.
pub fn write_file(sections: &SectionMap, path: &Path) -> Result<()> {
    std::fs::write(path, write_string(sections)).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
