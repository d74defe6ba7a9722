//! One-shot workbook importer: xlsx in, Firestore documents out.

mod api;
mod config;
mod error_log;
mod extract;
mod import;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::*;

use crate::api::{FirestoreClient, IdentityClient, ServiceAccountKey, TokenProvider};
use crate::config::SheetLayout;

/// Import a site workbook into Firestore, provisioning an account for every
/// new user row.
#[derive(Parser)]
#[command(name = "siteload-cli", version, about)]
struct Args {
    /// Path to the source workbook
    #[arg(default_value = config::DEFAULT_WORKBOOK)]
    workbook: String,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args).await {
        let message = format!("{:#}", err);
        println!("{}", message.red());
        if let Err(log_err) = error_log::append_fatal(&message) {
            log::error!("could not write {}: {:#}", error_log::LOG_FILE, log_err);
        }
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    println!("Use {:?} file as data source", args.workbook);

    let layout = SheetLayout::load(Path::new(config::LAYOUT_FILE))?;
    let tables = extract::read_workbook(Path::new(&args.workbook), &layout)?;

    let key = ServiceAccountKey::load(&config::credentials_path())?;
    let http = reqwest::Client::new();
    let mut store = FirestoreClient::new(TokenProvider::new(key.clone(), http.clone()), http.clone());
    let mut identity = IdentityClient::new(TokenProvider::new(key, http.clone()), http);

    let summary = import::run(&mut store, &mut identity, &tables).await?;

    log::info!(
        "imported {} projects, {} measurements, {} designations, {} measurement-refs, {} contacts; {} accounts created, {} already present",
        summary.projects,
        summary.measurements,
        summary.designations,
        summary.measurement_refs,
        summary.contacts,
        summary.users_created,
        summary.users_skipped,
    );
    println!("{}", "Job done!".green());
    Ok(())
}
