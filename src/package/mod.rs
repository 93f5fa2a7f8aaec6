//! Package backend layer
//!
//! Wraps the external package manager that actually installs tools.
//!
//! # Modules
//!
//! - [`spec`]: Parsed package identifiers (`@scope/name@version`)
//! - [`backend`]: The [`PackageBackend`](backend::PackageBackend) contract
//! - [`npm`]: npm implementation driven through subprocesses
//! - [`error`]: Error types for backend operations

pub mod backend;
pub mod error;
pub mod npm;
pub mod spec;

pub use backend::PackageBackend;
pub use error::BackendError;
pub use npm::NpmBackend;
pub use spec::PackageSpec;
