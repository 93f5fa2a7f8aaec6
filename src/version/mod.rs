//! Version layer for the tool itself
//!
//! # Modules
//!
//! - [`compare`]: Dotted-numeric version comparison
//! - [`update`]: Self-update check against the GitHub releases API
//! - [`error`]: Error types for the self-update check

pub mod compare;
pub mod error;
pub mod update;

pub use compare::compare_versions;
pub use update::{SelfUpdateChecker, UpdateInfo, open_repository};
