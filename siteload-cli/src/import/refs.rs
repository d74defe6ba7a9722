//! Measurement-reference sheet: map positions, one document per row

use anyhow::Result;

use crate::api::{DocPath, DocumentStore, FieldMap, Value};
use crate::extract::RecordSet;

use super::coerce::{coerce_or, parse_int};
use super::context::ImportContext;
use super::progress;

/// Import every reference row under the current project; `order_id` keeps
/// the row's position so the map layer can draw in sheet order.
pub async fn import_measurement_refs<S: DocumentStore>(
    store: &mut S,
    refs: &RecordSet,
    ctx: &mut ImportContext,
) -> Result<()> {
    progress::section("Add measurement-refs:");

    for (index, record) in refs.iter().enumerate() {
        progress::dot();
        let project_id = ctx.project_id("measurement-refs")?.to_string();

        let x = coerce_or(parse_int(record.field("x")), "x", 0);
        let y = coerce_or(parse_int(record.field("y")), "y", 0);
        let mut fields = FieldMap::new();
        fields.insert("cable_id".to_string(), Value::from(record.field("cable_id")));
        fields.insert("end_id".to_string(), Value::from(record.field("end_id")));
        fields.insert("order_id".to_string(), Value::Int(index as i64));
        fields.insert("suffix".to_string(), Value::from(record.field("suffix")));
        fields.insert("x".to_string(), Value::Int(x));
        fields.insert("y".to_string(), Value::Int(y));

        let path = DocPath::collection("project")
            .doc(&project_id)
            .sub("measurement-refs")
            .doc(format!("{}-measurement-ref-{}", project_id, index + 1));
        store.upsert_merge(&path, &fields).await?;
        ctx.summary.measurement_refs += 1;
    }
    Ok(())
}
