//! Carried state threaded through the sequential import passes

use anyhow::{Result, anyhow};

/// Per-entity import counts reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ImportSummary {
    pub users_created: usize,
    pub users_skipped: usize,
    pub projects: usize,
    pub measurements: usize,
    pub designations: usize,
    pub measurement_refs: usize,
    pub contacts: usize,
}

/// State carried across entity passes.
///
/// Every entity after projects writes under the most recent project id, so
/// the passes must run in row order. Keeping the id here, instead of in an
/// ambient variable, makes that ordering dependency explicit and testable.
#[derive(Debug, Default)]
pub struct ImportContext {
    current_project_id: Option<String>,
    pub summary: ImportSummary,
}

impl ImportContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the project id subsequent entities belong to.
    pub fn set_project(&mut self, id: impl Into<String>) {
        self.current_project_id = Some(id.into());
    }

    /// Project id for a dependent entity; an error when no project row has
    /// been processed yet, instead of writing under an empty path.
    pub fn project_id(&self, entity: &str) -> Result<&str> {
        self.current_project_id.as_deref().ok_or_else(|| {
            anyhow!(
                "cannot import {}: no project row with a project_id precedes it in the workbook",
                entity
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_id_errors_until_a_project_is_seen() {
        let mut ctx = ImportContext::new();
        assert!(ctx.project_id("measurements").is_err());
        ctx.set_project("P-1");
        assert_eq!(ctx.project_id("measurements").unwrap(), "P-1");
        ctx.set_project("P-2");
        assert_eq!(ctx.project_id("contacts").unwrap(), "P-2");
    }
}
