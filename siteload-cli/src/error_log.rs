//! Fatal-error log file in the working directory

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// One line is appended here per fatal error before the process exits.
pub const LOG_FILE: &str = "log_errors.txt";

/// Append a fatal error line; the file is created on first use.
pub fn append_fatal(message: &str) -> Result<()> {
    append_to(Path::new(LOG_FILE), message)
}

fn append_to(path: &Path, message: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open error log: {}", path.display()))?;
    writeln!(
        file,
        "{} {}",
        chrono::Local::now().format("%Y/%m/%d %H:%M:%S"),
        message
    )
    .with_context(|| format!("Failed to write error log: {}", path.display()))?;
    Ok(())
}
