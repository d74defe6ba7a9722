//! Measurements sheet: one document per first-end cable row

use anyhow::Result;

use crate::api::{DocPath, DocumentStore, FieldMap, Value};
use crate::extract::{RecordSet, round_special};

use super::coerce::{coerce_or, parse_bool, parse_int};
use super::context::ImportContext;
use super::progress;

/// Import measurement rows under the current project. Rows flagged as the
/// second end of a cable describe a cable already imported and are skipped;
/// document ids number the imported rows 1-based.
pub async fn import_measurements<S: DocumentStore>(
    store: &mut S,
    measurements: &RecordSet,
    ctx: &mut ImportContext,
) -> Result<()> {
    progress::section("Add measurements:");

    let mut imported = 0;
    for record in measurements {
        let cable_order = coerce_or(parse_int(record.field("is_second_end")), "is_second_end", 0);
        if cable_order == 1 {
            continue;
        }
        progress::dot();
        let project_id = ctx.project_id("measurements")?.to_string();

        let is_double = coerce_or(parse_bool(record.field("is_double")), "is_double", false);
        let mut fields = FieldMap::new();
        fields.insert("cable_id".to_string(), Value::from(record.field("cable_id")));
        fields.insert(
            "designation".to_string(),
            Value::from(round_special(record.field("Set Designation"))),
        );
        fields.insert("is_double".to_string(), Value::Bool(is_double));

        imported += 1;
        let path = DocPath::collection("project")
            .doc(&project_id)
            .sub("measurements")
            .doc(format!("{}-measurement-{}", project_id, imported));
        store.upsert_merge(&path, &fields).await?;
    }
    ctx.summary.measurements = imported;
    Ok(())
}
