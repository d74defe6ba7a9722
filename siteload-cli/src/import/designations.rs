//! Designations sheet: tolerance ranges, deduplicated by label

use std::collections::HashSet;

use anyhow::Result;

use crate::api::{DocPath, DocumentStore, FieldMap, Value};
use crate::extract::{RecordSet, round_special};

use super::coerce::{coerce_or, parse_float};
use super::context::ImportContext;
use super::progress;

/// Import designation rows under the current project. The sheet repeats a
/// designation once per cable; only the first row per label is written.
pub async fn import_designations<S: DocumentStore>(
    store: &mut S,
    designations: &RecordSet,
    ctx: &mut ImportContext,
) -> Result<()> {
    progress::section("Add designations:");

    let mut seen: HashSet<String> = HashSet::new();
    let mut imported = 0;
    for record in designations {
        let label = record.field("Set Designation");
        if !seen.insert(label.to_string()) {
            continue;
        }
        progress::dot();
        let project_id = ctx.project_id("designations")?.to_string();

        let tolerance_max = coerce_or(
            parse_float(record.field("tolerance_max")),
            "tolerance_max",
            0.0,
        );
        let tolerance_min = coerce_or(
            parse_float(record.field("tolerance_min")),
            "tolerance_min",
            0.0,
        );
        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), Value::from(round_special(label)));
        fields.insert("tolerance_max".to_string(), Value::Float(tolerance_max));
        fields.insert("tolerance_min".to_string(), Value::Float(tolerance_min));

        imported += 1;
        let path = DocPath::collection("project")
            .doc(&project_id)
            .sub("designations")
            .doc(format!("{}-designation-{}", project_id, imported));
        store.upsert_merge(&path, &fields).await?;
    }
    ctx.summary.designations = imported;
    Ok(())
}
