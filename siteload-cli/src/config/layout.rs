//! Workbook sheet layout
//!
//! Source workbooks have moved entities between sheet positions over time,
//! so the mapping is configuration rather than code: each entity resolves
//! by worksheet name first and falls back to a fixed position.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Where one logical entity lives in the workbook.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SheetSlot {
    /// Worksheet name looked up first.
    pub name: String,
    /// Zero-based sheet position used when no sheet carries the name.
    pub position: usize,
}

impl SheetSlot {
    fn new(name: &str, position: usize) -> Self {
        Self {
            name: name.to_string(),
            position,
        }
    }
}

/// Per-entity sheet slots for one workbook.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    pub users: SheetSlot,
    pub projects: SheetSlot,
    pub contacts: SheetSlot,
    pub measurements: SheetSlot,
    pub designations: SheetSlot,
    pub measurement_refs: SheetSlot,
}

impl Default for SheetLayout {
    fn default() -> Self {
        // Measurements, designations, and measurement-refs share one
        // physical sheet in the source workbooks.
        Self {
            users: SheetSlot::new("users", 0),
            projects: SheetSlot::new("projects", 1),
            contacts: SheetSlot::new("contacts", 2),
            measurements: SheetSlot::new("measurements", 3),
            designations: SheetSlot::new("designations", 3),
            measurement_refs: SheetSlot::new("measurement-refs", 3),
        }
    }
}

impl SheetLayout {
    /// Load the layout from `path` when the file exists, defaults otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid layout file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_source_workbooks() {
        let layout = SheetLayout::default();
        assert_eq!(layout.users.position, 0);
        assert_eq!(layout.contacts.position, 2);
        assert_eq!(layout.measurements.position, 3);
        assert_eq!(layout.designations.position, 3);
        assert_eq!(layout.measurement_refs.name, "measurement-refs");
    }

    #[test]
    fn test_partial_override_keeps_remaining_defaults() {
        let layout: SheetLayout = toml::from_str(
            r#"
            [contacts]
            name = "client contacts"
            position = 4
            "#,
        )
        .unwrap();
        assert_eq!(layout.contacts, SheetSlot::new("client contacts", 4));
        assert_eq!(layout.users, SheetSlot::new("users", 0));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let layout = SheetLayout::load(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(layout, SheetLayout::default());
    }
}
