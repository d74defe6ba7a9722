//! Projects sheet: one upsert-merge per project row

use anyhow::Result;

use crate::api::{DocPath, DocumentStore, FieldMap, Value};
use crate::extract::RecordSet;

use super::coerce::{coerce_date, coerce_or, parse_int};
use super::context::ImportContext;
use super::progress;

/// Fields copied verbatim as strings.
const COPIED_FIELDS: [&str; 25] = [
    "address_line_1",
    "address_line_2",
    "benchmark",
    "calibration_psi",
    "client_name",
    "contact_name",
    "contact_phone",
    "device_calibration_image",
    "engineer_id",
    "field_tech_id",
    "floor",
    "gauge",
    "general_location",
    "map_image",
    "name",
    "number",
    "pt_specification",
    "pump",
    "ram",
    "ram_certification_image",
    "sheet",
    "stressing_company_name",
    "stressing_location",
    "weather",
    "work_order_number",
];

/// Fields stored as timestamps, null when empty.
const DATE_FIELDS: [&str; 5] = [
    "start_date",
    "calibration_date",
    "engineer_submitted_at",
    "field_started_at",
    "field_submitted_at",
];

/// Fields stored as integers, zero when empty.
const INT_FIELDS: [&str; 4] = ["area", "average_deviation", "status", "total_cables"];

/// Upsert one document per row with a non-empty `project_id`; each such row
/// also becomes the current project for every entity pass after this one.
pub async fn import_projects<S: DocumentStore>(
    store: &mut S,
    projects: &RecordSet,
    ctx: &mut ImportContext,
) -> Result<()> {
    progress::section("Add project details:");

    for record in projects {
        progress::dot();
        let project_id = record.field("project_id");
        if project_id.is_empty() {
            continue;
        }
        ctx.set_project(project_id);

        let mut fields = FieldMap::new();
        for name in COPIED_FIELDS {
            fields.insert(name.to_string(), Value::from(record.field(name)));
        }
        for name in DATE_FIELDS {
            fields.insert(
                name.to_string(),
                Value::timestamp_or_null(coerce_date(record.field(name), name)),
            );
        }
        for name in INT_FIELDS {
            fields.insert(
                name.to_string(),
                Value::Int(coerce_or(parse_int(record.field(name)), name, 0)),
            );
        }
        fields.insert("project_id".to_string(), Value::from(project_id));

        store
            .upsert_merge(&DocPath::collection("project").doc(project_id), &fields)
            .await?;
        ctx.summary.projects += 1;
    }
    Ok(())
}
