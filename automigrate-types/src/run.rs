use crate::fix::{FixStatus, FixSummary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk artifact written by the migration engine after a run.
///
/// This is the contract between the engine and the summary CLI: per-migration
/// outcomes keyed by migration id, the grouped summary, and the path of the
/// log file the engine wrote its diagnostics to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationRun {
    pub schema: String,

    #[serde(default)]
    pub fix_results: BTreeMap<String, FixStatus>,

    #[serde(default)]
    pub fix_summary: FixSummary,

    pub log_file: String,
}

impl MigrationRun {
    pub fn new(log_file: impl Into<String>) -> Self {
        Self {
            schema: crate::schema::AUTOMIGRATE_RUN_V1.to_string(),
            fix_results: BTreeMap::new(),
            fix_summary: FixSummary::default(),
            log_file: log_file.into(),
        }
    }
}
