//! Loading of migration run artifacts written by the migration engine.

use automigrate_types::run::MigrationRun;
use camino::Utf8Path;
use fs_err as fs;
use thiserror::Error;
use tracing::debug;

/// Why a run artifact could not be loaded. Io and parse failures are
/// distinguished so the CLI can phrase its guidance accordingly.
#[derive(Debug, Error)]
pub enum RunLoadError {
    #[error("io error: {message}")]
    Io { message: String },

    #[error("json parse error: {message}")]
    Json { message: String },
}

/// Load a [`MigrationRun`] artifact from disk.
pub fn load_run(path: &Utf8Path) -> Result<MigrationRun, RunLoadError> {
    let contents = fs::read_to_string(path).map_err(|e| RunLoadError::Io {
        message: e.to_string(),
    })?;
    let run: MigrationRun =
        serde_json::from_str(&contents).map_err(|e| RunLoadError::Json {
            message: e.to_string(),
        })?;
    debug!(path = %path, migrations = run.fix_results.len(), "loaded migration run");
    Ok(run)
}
