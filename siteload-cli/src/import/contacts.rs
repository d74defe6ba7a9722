//! Contacts sheet: full document writes, skipping rows without an email

use anyhow::Result;

use crate::api::{DocPath, DocumentStore, FieldMap, Value};
use crate::extract::RecordSet;

use super::coerce::{coerce_or, parse_int};
use super::context::ImportContext;
use super::progress;

/// Import contact rows under the current project. A contact without an
/// email is unreachable and produces no document. Document ids keep the
/// source row number, so skipped rows leave gaps.
pub async fn import_contacts<S: DocumentStore>(
    store: &mut S,
    contacts: &RecordSet,
    ctx: &mut ImportContext,
) -> Result<()> {
    progress::section("Add contacts:");

    for (index, record) in contacts.iter().enumerate() {
        progress::dot();
        if record.field("email").is_empty() {
            continue;
        }
        let project_id = ctx.project_id("contacts")?.to_string();

        let status = coerce_or(parse_int(record.field("status")), "status", 0);
        let mut fields = FieldMap::new();
        fields.insert("email".to_string(), Value::from(record.field("email")));
        fields.insert("name".to_string(), Value::from(record.field("name")));
        fields.insert("statusType".to_string(), Value::Int(status));

        let path = DocPath::collection("project")
            .doc(&project_id)
            .sub("contacts")
            .doc(format!("{}-contact-{}", project_id, index + 1));
        store.replace(&path, &fields).await?;
        ctx.summary.contacts += 1;
    }
    Ok(())
}
