//! Runtime configuration: fixed paths and the workbook sheet layout

pub mod layout;

pub use layout::{SheetLayout, SheetSlot};

use std::path::PathBuf;

/// Workbook read when no path argument is given.
pub const DEFAULT_WORKBOOK: &str = "upload_sheet.xlsx";

/// Service-account key file loaded from the working directory.
pub const CREDENTIALS_FILE: &str = "serviceAccountKey.json";

/// Optional sheet-layout override file.
pub const LAYOUT_FILE: &str = "siteload.toml";

/// Path of the service-account key; `SITELOAD_CREDENTIALS` overrides the
/// fixed filename.
pub fn credentials_path() -> PathBuf {
    std::env::var("SITELOAD_CREDENTIALS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(CREDENTIALS_FILE))
}
