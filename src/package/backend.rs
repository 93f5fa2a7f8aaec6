//! Backend trait for inspecting and mutating globally installed packages

#[cfg(test)]
use mockall::automock;

use crate::package::error::BackendError;

/// Trait for a package manager that installs tools globally
///
/// Every method takes the catalog identifier as written (it may carry a scope
/// and a version suffix); implementations normalize it with
/// [`PackageSpec`](crate::package::spec::PackageSpec) before talking to the
/// package manager.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PackageBackend: Send + Sync {
    /// Returns whether the package is installed globally
    ///
    /// A package missing from the global listing is `Ok(false)`, not an error.
    async fn is_installed(&self, package: &str) -> Result<bool, BackendError>;

    /// Returns the installed version
    ///
    /// # Returns
    /// * `Ok(String)` - The concrete installed version (e.g., "1.2.3")
    /// * `Err(BackendError::NotFound)` - If the listing omits the package or cannot be obtained
    async fn installed_version(&self, package: &str) -> Result<String, BackendError>;

    /// Returns the newest version published to the remote registry
    ///
    /// # Returns
    /// * `Ok(String)` - The latest published version
    /// * `Err(BackendError::LookupFailed)` - On a failed lookup, carrying the backend's diagnostic
    async fn latest_version(&self, package: &str) -> Result<String, BackendError>;

    async fn install(&self, package: &str) -> Result<(), BackendError>;

    async fn update(&self, package: &str) -> Result<(), BackendError>;

    async fn uninstall(&self, package: &str) -> Result<(), BackendError>;
}
