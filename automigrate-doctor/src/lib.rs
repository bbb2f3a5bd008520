//! Duplicate-dependency doctor for automigrate.
//!
//! Inspects the installed package versions of a project and produces warning
//! blocks for packages that are installed at more than one version. Callers
//! that already hold an [`InstallationMetadata`] pass it in; otherwise the
//! doctor falls back to loading `installations.json` from the project root.

use anyhow::Context;
use automigrate_types::metadata::InstallationMetadata;
use camino::Utf8Path;
use fs_err as fs;
use tracing::debug;

/// File the package-manager inspection step writes its snapshot to.
pub const INSTALLATIONS_FILE_NAME: &str = "installations.json";

const DEFAULT_DEDUPE_COMMAND: &str = "npx yarn-deduplicate";

/// Load the installation metadata snapshot from a project root.
///
/// Returns `Ok(None)` when no snapshot exists. An unreadable or malformed
/// snapshot is an error; callers surface it rather than guessing.
pub fn load_installation_metadata(
    project_root: &Utf8Path,
) -> anyhow::Result<Option<InstallationMetadata>> {
    let path = project_root.join(INSTALLATIONS_FILE_NAME);
    if !path.exists() {
        debug!(path = %path, "no installation metadata snapshot");
        return Ok(None);
    }
    load_installation_metadata_file(&path).map(Some)
}

/// Load an installation metadata snapshot from an explicit file path.
pub fn load_installation_metadata_file(path: &Utf8Path) -> anyhow::Result<InstallationMetadata> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    let metadata = serde_json::from_str(&contents).with_context(|| format!("parse {}", path))?;
    debug!(path = %path, "loaded installation metadata snapshot");
    Ok(metadata)
}

/// Build warning blocks for duplicated dependencies.
///
/// With `metadata` present the snapshot is used as-is; otherwise the doctor
/// runs its own detection against `project_root`. Returns an empty sequence
/// when nothing is duplicated (or no snapshot is available).
pub fn duplicated_deps_warnings(
    project_root: &Utf8Path,
    metadata: Option<&InstallationMetadata>,
) -> anyhow::Result<Vec<String>> {
    let detected;
    let metadata = match metadata {
        Some(m) => m,
        None => match load_installation_metadata(project_root)? {
            Some(m) => {
                detected = m;
                &detected
            }
            None => return Ok(vec![]),
        },
    };

    let duplicated: Vec<_> = metadata.duplicated().collect();
    if duplicated.is_empty() {
        return Ok(vec![]);
    }

    debug!(count = duplicated.len(), "duplicated dependencies found");

    let mut listing = String::from(
        "Attention: the following dependencies are duplicated in your dependency tree, \
         which may cause unexpected behavior:\n",
    );
    for (name, versions) in &duplicated {
        listing.push_str(&format!("\n  {}:\n    {}", name, versions.join(", ")));
    }

    let dedupe = metadata
        .dedupe_command
        .as_deref()
        .unwrap_or(DEFAULT_DEDUPE_COMMAND);
    let advice = format!(
        "You can try de-duplicating them by running '{}' and then re-running the migration check.",
        dedupe
    );

    Ok(vec![listing, advice])
}
