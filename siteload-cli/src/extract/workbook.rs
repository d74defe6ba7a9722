//! Workbook access and layout-driven sheet resolution

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Reader, Xlsx, open_workbook};

use crate::config::{SheetLayout, SheetSlot};

use super::reader::{ExtractError, extract};
use super::record::RecordSet;

/// Every entity record set read from one workbook.
#[derive(Debug, Clone, Default)]
pub struct WorkbookTables {
    pub users: RecordSet,
    pub projects: RecordSet,
    pub measurements: RecordSet,
    pub designations: RecordSet,
    pub measurement_refs: RecordSet,
    pub contacts: RecordSet,
}

/// Open `path` and extract the entity sheets named by `layout`.
pub fn read_workbook(path: &Path, layout: &SheetLayout) -> Result<WorkbookTables> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    ensure_has_sheets(&workbook.sheet_names())?;

    Ok(WorkbookTables {
        users: read_entity_sheet(&mut workbook, &layout.users)?,
        projects: read_entity_sheet(&mut workbook, &layout.projects)?,
        measurements: read_entity_sheet(&mut workbook, &layout.measurements)?,
        designations: read_entity_sheet(&mut workbook, &layout.designations)?,
        measurement_refs: read_entity_sheet(&mut workbook, &layout.measurement_refs)?,
        contacts: read_entity_sheet(&mut workbook, &layout.contacts)?,
    })
}

fn ensure_has_sheets(names: &[String]) -> Result<(), ExtractError> {
    if names.is_empty() {
        return Err(ExtractError::EmptyWorkbook);
    }
    Ok(())
}

/// Resolve a layout slot to a worksheet: the configured name when the
/// workbook has it, otherwise the sheet at the fallback position.
fn resolve_sheet(names: &[String], slot: &SheetSlot) -> Result<String, ExtractError> {
    if names.iter().any(|n| n == &slot.name) {
        return Ok(slot.name.clone());
    }
    names
        .get(slot.position)
        .cloned()
        .ok_or_else(|| ExtractError::MissingSheet {
            name: slot.name.clone(),
            position: slot.position,
        })
}

fn read_entity_sheet(
    workbook: &mut Xlsx<BufReader<File>>,
    slot: &SheetSlot,
) -> Result<RecordSet> {
    let resolved = resolve_sheet(&workbook.sheet_names(), slot)?;
    let range = workbook
        .worksheet_range(&resolved)
        .with_context(|| format!("Failed to read sheet: {}", resolved))?;
    Ok(extract(&resolved, &range)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SheetLayout;
    use rust_xlsxwriter::Workbook;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_zero_sheet_workbook_is_rejected_before_extraction() {
        assert_eq!(ensure_has_sheets(&[]), Err(ExtractError::EmptyWorkbook));
        assert!(ensure_has_sheets(&names(&["users"])).is_ok());
    }

    #[test]
    fn test_sheet_resolves_by_name_before_position() {
        let sheets = names(&["intro", "users"]);
        let slot = SheetSlot {
            name: "users".to_string(),
            position: 0,
        };
        assert_eq!(resolve_sheet(&sheets, &slot).unwrap(), "users");
    }

    #[test]
    fn test_sheet_falls_back_to_position_then_fails() {
        let sheets = names(&["Sheet1", "Sheet2"]);
        let slot = SheetSlot {
            name: "projects".to_string(),
            position: 1,
        };
        assert_eq!(resolve_sheet(&sheets, &slot).unwrap(), "Sheet2");

        let out_of_range = SheetSlot {
            name: "contacts".to_string(),
            position: 5,
        };
        assert_eq!(
            resolve_sheet(&sheets, &out_of_range),
            Err(ExtractError::MissingSheet {
                name: "contacts".to_string(),
                position: 5,
            })
        );
    }

    #[test]
    fn test_read_workbook_extracts_every_entity_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload_sheet.xlsx");

        let mut workbook = Workbook::new();
        let users = workbook.add_worksheet();
        users.set_name("users").unwrap();
        users.write_string(0, 0, "identifier").unwrap();
        users.write_string(0, 1, "first_name").unwrap();
        users.write_string(1, 0, "ada@example.com").unwrap();
        users.write_string(1, 1, "Ada").unwrap();
        // one blank row, then another user
        users.write_string(3, 0, "grace@example.com").unwrap();
        users.write_string(3, 1, "Grace").unwrap();

        let projects = workbook.add_worksheet();
        projects.set_name("projects").unwrap();
        projects.write_string(0, 0, "project_id").unwrap();
        projects.write_string(0, 1, "area").unwrap();
        projects.write_string(1, 0, "P-1").unwrap();
        projects.write_number(1, 1, 120.0).unwrap();

        let contacts = workbook.add_worksheet();
        contacts.set_name("contacts").unwrap();
        contacts.write_string(0, 0, "email").unwrap();

        let measurements = workbook.add_worksheet();
        measurements.set_name("field data").unwrap();
        measurements.write_string(0, 0, "cable_id").unwrap();
        measurements.write_string(1, 0, "C-7").unwrap();

        workbook.save(&path).unwrap();

        let tables = read_workbook(&path, &SheetLayout::default()).unwrap();
        assert_eq!(tables.users.len(), 2);
        assert_eq!(tables.users.records[1].field("first_name"), "Grace");
        assert_eq!(tables.projects.records[0].field("area"), "120");
        assert!(tables.contacts.is_empty());
        // measurements, designations, and measurement-refs all fall back to
        // the sheet at position 3 when no sheet carries their name
        assert_eq!(tables.measurements.records[0].field("cable_id"), "C-7");
        assert_eq!(tables.designations.len(), 1);
        assert_eq!(tables.measurement_refs.len(), 1);
    }
}
