//! Users sheet: identity provisioning plus profile documents

use anyhow::Result;

use crate::api::{DocPath, DocumentStore, FieldMap, IdentityService, Value};
use crate::extract::RecordSet;

use super::context::ImportContext;
use super::progress;

/// Password every provisioned account starts with; users are expected to
/// reset it on first sign-in.
const PLACEHOLDER_PASSWORD: &str = "Chang3-me!-0n-first-sign-in";

/// Provision an identity per row and upsert the matching profile document.
/// Rows whose `identifier` already has an account are skipped entirely.
pub async fn import_users<S, I>(
    store: &mut S,
    identity: &mut I,
    users: &RecordSet,
    ctx: &mut ImportContext,
) -> Result<()>
where
    S: DocumentStore,
    I: IdentityService,
{
    if users.is_empty() {
        return Ok(());
    }
    progress::section("Create user records:");

    for record in users {
        let email = record.field("identifier");
        if identity.lookup_by_email(email).await?.is_some() {
            ctx.summary.users_skipped += 1;
            continue;
        }
        progress::dot();

        let account = identity.create_account(email, PLACEHOLDER_PASSWORD).await?;

        let mut fields = FieldMap::new();
        fields.insert("first_name".to_string(), Value::from(record.field("first_name")));
        fields.insert("last_name".to_string(), Value::from(record.field("last_name")));
        fields.insert("role".to_string(), Value::from(record.field("role")));
        store
            .upsert_merge(&DocPath::collection("users").doc(account.uid), &fields)
            .await?;
        ctx.summary.users_created += 1;
    }
    Ok(())
}
