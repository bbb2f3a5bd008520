//! Shared DTOs (schemas-as-code) for the automigrate workspace.
//!
//! # Design constraints
//! - These types are intended to be serialized to disk.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod fix;
pub mod metadata;
pub mod run;

/// Schema identifiers.
pub mod schema {
    pub const AUTOMIGRATE_RUN_V1: &str = "automigrate.run.v1";
    pub const AUTOMIGRATE_INSTALLATIONS_V1: &str = "automigrate.installations.v1";
}
