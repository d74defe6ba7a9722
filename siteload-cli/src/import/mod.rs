//! Sequential per-entity import passes over extracted records

pub mod coerce;
mod contacts;
mod context;
mod designations;
mod measurements;
mod projects;
mod refs;
mod users;

pub use coerce::{Parsed, coerce_date, coerce_or, parse_bool, parse_date, parse_float, parse_int};
pub use context::{ImportContext, ImportSummary};

use anyhow::Result;

use crate::api::{DocumentStore, IdentityService};
use crate::extract::WorkbookTables;

/// Console feedback, one dot per imported row.
mod progress {
    use std::io::Write;

    pub fn section(title: &str) {
        println!();
        print!("{}", title);
        let _ = std::io::stdout().flush();
    }

    pub fn dot() {
        print!(".");
        let _ = std::io::stdout().flush();
    }
}

/// Run every entity pass in dependency order.
///
/// Passes after projects write under the most recent project id, so the
/// order here and the strict row sequencing inside each pass are
/// load-bearing.
pub async fn run<S, I>(
    store: &mut S,
    identity: &mut I,
    tables: &WorkbookTables,
) -> Result<ImportSummary>
where
    S: DocumentStore,
    I: IdentityService,
{
    let mut ctx = ImportContext::new();
    users::import_users(store, identity, &tables.users, &mut ctx).await?;
    projects::import_projects(store, &tables.projects, &mut ctx).await?;
    measurements::import_measurements(store, &tables.measurements, &mut ctx).await?;
    designations::import_designations(store, &tables.designations, &mut ctx).await?;
    refs::import_measurement_refs(store, &tables.measurement_refs, &mut ctx).await?;
    contacts::import_contacts(store, &tables.contacts, &mut ctx).await?;
    println!();
    Ok(ctx.summary)
}
