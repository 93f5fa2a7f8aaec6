//! Package backend test utilities

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use ai_tool_manager::catalog::Tool;
use ai_tool_manager::package::{BackendError, PackageBackend};

/// In-memory backend that behaves like a tiny package manager
///
/// Installing a package records the latest known version as installed.
#[derive(Default)]
pub struct FakeBackend {
    installed: Mutex<HashMap<String, String>>,
    latest: HashMap<String, String>,
    failing: HashSet<String>,
    pub is_installed_calls: AtomicUsize,
    pub installed_version_calls: AtomicUsize,
    pub latest_version_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_installed(self, package: &str, version: &str) -> Self {
        self.installed
            .lock()
            .unwrap()
            .insert(package.to_string(), version.to_string());
        self
    }

    pub fn with_latest(mut self, package: &str, version: &str) -> Self {
        self.latest.insert(package.to_string(), version.to_string());
        self
    }

    /// Every mutation of `package` fails
    pub fn with_failing(mut self, package: &str) -> Self {
        self.failing.insert(package.to_string());
        self
    }

    pub fn installed_version_of(&self, package: &str) -> Option<String> {
        self.installed().get(package).cloned()
    }

    pub fn lookups(&self) -> usize {
        self.installed_version_calls.load(Ordering::SeqCst)
    }

    fn installed(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.installed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_failing(
        &self,
        package: &str,
        error: fn(String) -> BackendError,
    ) -> Result<(), BackendError> {
        if self.failing.contains(package) {
            Err(error(format!("{package}: EACCES")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PackageBackend for FakeBackend {
    async fn is_installed(&self, package: &str) -> Result<bool, BackendError> {
        self.is_installed_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.installed().contains_key(package))
    }

    async fn installed_version(&self, package: &str) -> Result<String, BackendError> {
        self.installed_version_calls.fetch_add(1, Ordering::SeqCst);
        self.installed()
            .get(package)
            .cloned()
            .ok_or_else(|| BackendError::NotFound(package.to_string()))
    }

    async fn latest_version(&self, package: &str) -> Result<String, BackendError> {
        self.latest_version_calls.fetch_add(1, Ordering::SeqCst);
        self.latest
            .get(package)
            .cloned()
            .ok_or_else(|| BackendError::LookupFailed {
                package: package.to_string(),
                detail: "E404".to_string(),
            })
    }

    async fn install(&self, package: &str) -> Result<(), BackendError> {
        self.check_failing(package, BackendError::InstallFailed)?;
        let version = self.latest.get(package).cloned().unwrap_or_default();
        self.installed().insert(package.to_string(), version);
        Ok(())
    }

    async fn update(&self, package: &str) -> Result<(), BackendError> {
        self.check_failing(package, BackendError::UpdateFailed)?;
        let version = self.latest.get(package).cloned().unwrap_or_default();
        self.installed().insert(package.to_string(), version);
        Ok(())
    }

    async fn uninstall(&self, package: &str) -> Result<(), BackendError> {
        self.check_failing(package, BackendError::UninstallFailed)?;
        self.installed().remove(package);
        Ok(())
    }
}

/// Catalog entries named after their package
pub fn tools(packages: &[&str]) -> Vec<Tool> {
    packages
        .iter()
        .map(|package| Tool::new(&package.to_uppercase(), package, "test tool"))
        .collect()
}

pub fn packages(tools: &[Tool]) -> Vec<&str> {
    tools.iter().map(|t| t.package.as_str()).collect()
}
