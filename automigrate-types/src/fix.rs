use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome classification of a single migration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixStatus {
    /// The migration applied cleanly.
    Succeeded,
    /// The migration ran and failed.
    Failed,
    /// The applicability check itself errored before the migration ran.
    CheckFailed,
    /// A manual migration whose steps the user confirmed as done.
    ManualSucceeded,
    /// A migration that requires manual follow-up by the user.
    Manual,
    /// The user opted out of this migration.
    Skipped,
    /// The migration did not apply to this project.
    Unnecessary,
}

impl FixStatus {
    /// True for outcomes that count as a failed run.
    pub fn is_failure(self) -> bool {
        matches!(self, FixStatus::Failed | FixStatus::CheckFailed)
    }
}

/// Aggregated outcomes of a migration run, grouped by category.
///
/// Sequences preserve the order the migration engine reported them in;
/// `failed` maps migration id to its error text and iterates in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixSummary {
    pub succeeded: Vec<String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub failed: BTreeMap<String, String>,

    pub manual: Vec<String>,

    pub skipped: Vec<String>,
}

impl FixSummary {
    /// True when every category is empty.
    pub fn is_empty(&self) -> bool {
        self.succeeded.is_empty()
            && self.failed.is_empty()
            && self.manual.is_empty()
            && self.skipped.is_empty()
    }
}
