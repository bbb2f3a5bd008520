//! Migration run summary: glossary of outcomes, re-run instructions,
//! duplicate-dependency warnings, all wrapped in a status box.

use crate::boxed::{boxed, BoxOptions};
use crate::style::{Style, Styler};
use automigrate_doctor::duplicated_deps_warnings;
use automigrate_types::fix::{FixStatus, FixSummary};
use automigrate_types::metadata::InstallationMetadata;
use camino::Utf8Path;
use std::collections::BTreeMap;
use tracing::debug;

/// Divider between blocks inside a segment.
pub const MESSAGE_DIVIDER: &str = "\n\n";

/// Divider between segments: blank line, horizontal rule, blank line.
const SEGMENT_DIVIDER: &str = "\n\n─────────────────────────────────────────────────\n\n";

/// Command the user re-runs the migration check with. Verbatim for parity
/// with the published docs.
pub const RERUN_COMMAND: &str = "npx storybook@next automigrate";

/// Changelog and migration guide. Verbatim for parity.
pub const MIGRATION_GUIDE_URL: &str = "https://storybook.js.org/migration-guides/7.0";

/// Community help channel. Verbatim for parity.
pub const COMMUNITY_URL: &str = "https://discord.gg/storybook";

pub const TITLE_NONE_APPLICABLE: &str = "No migrations were applicable to your project";
pub const TITLE_WITH_FAILURES: &str = "Migration check ran with failures";
pub const TITLE_SUCCESS: &str = "Migration check ran successfully";

/// Inputs to [`migration_summary`], all borrowed from the caller.
#[derive(Debug, Clone)]
pub struct MigrationSummaryInput<'a> {
    /// Per-migration outcome, keyed by migration id.
    pub fix_results: &'a BTreeMap<String, FixStatus>,
    /// Grouped outcomes as reported by the migration engine.
    pub fix_summary: &'a FixSummary,
    /// Path of the log file holding full diagnostics.
    pub log_file: &'a str,
    /// Installed-package snapshot, if the caller already collected one.
    pub installation_metadata: Option<&'a InstallationMetadata>,
    /// Project root, used by the doctor's fallback detection.
    pub project_root: &'a Utf8Path,
}

/// One text block per non-empty outcome category.
fn glossary_messages<S: Styler>(
    fix_summary: &FixSummary,
    fix_results: &BTreeMap<String, FixStatus>,
    log_file: &str,
    styler: &S,
) -> Vec<String> {
    let mut messages = Vec::new();

    if !fix_summary.succeeded.is_empty() {
        messages.push(styler.paint(Style::Bold, "Successful migrations:"));
        messages.push(
            fix_summary
                .succeeded
                .iter()
                .map(|m| styler.paint(Style::Green, m))
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    if !fix_summary.failed.is_empty() {
        messages.push(styler.paint(Style::Bold, "Failed migrations:"));
        messages.push(
            fix_summary
                .failed
                .iter()
                .map(|(id, error)| format!("{}:\n{}", styler.paint(Style::BrightRed, id), error))
                .collect::<Vec<_>>()
                .join("\n"),
        );
        messages.push(format!(
            "You can find the full logs in {}",
            styler.paint(Style::Cyan, log_file)
        ));
    }

    if !fix_summary.manual.is_empty() {
        messages.push(styler.paint(Style::Bold, "Manual migrations:"));
        messages.push(
            fix_summary
                .manual
                .iter()
                .map(|m| {
                    let style = if fix_results.get(m) == Some(&FixStatus::ManualSucceeded) {
                        Style::Green
                    } else {
                        Style::Blue
                    };
                    styler.paint(style, m)
                })
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    if !fix_summary.skipped.is_empty() {
        messages.push(styler.paint(Style::Bold, "Skipped migrations:"));
        messages.push(
            fix_summary
                .skipped
                .iter()
                .map(|m| styler.paint(Style::Cyan, m))
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    messages
}

fn instructions<S: Styler>(styler: &S) -> String {
    format!(
        "If you'd like to run the migrations again, you can do so by running '{}'\n\
         \n\
         The automigrations try to migrate common patterns in your project, but might not \
         contain everything needed to migrate to the latest version of Storybook.\n\
         \n\
         Please check the changelog and migration guide for manual migrations and more \
         information: {}\n\
         And reach out on Discord if you need help: {}",
        styler.paint(Style::Cyan, RERUN_COMMAND),
        styler.paint(Style::Yellow, MIGRATION_GUIDE_URL),
        styler.paint(Style::Yellow, COMMUNITY_URL),
    )
}

/// Title conditions in priority order: "nothing applied" outranks "had
/// failures", which outranks the success default. An empty results map counts
/// as "nothing applied".
fn derive_title(fix_results: &BTreeMap<String, FixStatus>) -> &'static str {
    let no_fixes = fix_results.values().all(|s| *s == FixStatus::Unnecessary);
    if no_fixes {
        return TITLE_NONE_APPLICABLE;
    }
    if has_failures(fix_results) {
        return TITLE_WITH_FAILURES;
    }
    TITLE_SUCCESS
}

fn has_failures(fix_results: &BTreeMap<String, FixStatus>) -> bool {
    fix_results.values().any(|s| s.is_failure())
}

/// Render the bordered summary of a migration run.
///
/// Segments, in order: the glossary of outcomes, fixed re-run instructions,
/// and (when non-empty) duplicate-dependency warnings from the doctor. Empty
/// segments are dropped. A doctor failure propagates to the caller; the
/// formatting itself cannot fail.
pub fn migration_summary<S: Styler>(
    input: &MigrationSummaryInput<'_>,
    styler: &S,
) -> anyhow::Result<String> {
    let mut segments = Vec::new();

    segments.push(
        glossary_messages(input.fix_summary, input.fix_results, input.log_file, styler)
            .join(MESSAGE_DIVIDER),
    );

    segments.push(instructions(styler));

    let warnings = duplicated_deps_warnings(input.project_root, input.installation_metadata)?;
    if !warnings.is_empty() {
        segments.push(warnings.join(MESSAGE_DIVIDER));
    }

    let title = derive_title(input.fix_results);
    debug!(title, "derived summary title");
    let border = if has_failures(input.fix_results) {
        Style::Red
    } else {
        Style::Green
    };

    let body = segments
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(SEGMENT_DIVIDER);

    Ok(boxed(
        &body,
        &BoxOptions {
            title: Some(title.to_string()),
            border,
            padding: 1,
        },
        styler,
    ))
}
