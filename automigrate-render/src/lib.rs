//! Rendering helpers (terminal) for human-readable migration summaries.

pub mod boxed;
pub mod style;
pub mod summary;

pub use boxed::{boxed, BoxOptions};
pub use style::{AnsiStyler, PlainStyler, Style, Styler};
pub use summary::{migration_summary, MigrationSummaryInput};
