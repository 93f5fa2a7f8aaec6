//! Tool catalog reconciliation
//!
//! Tracks which catalog tools are installed, memoizes their versions and
//! applies the state changes that follow a successful install, update or
//! uninstall.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐  partition   ┌─────────────┐  lookups (≤5)  ┌─────────────┐
//! │   Catalog   │─────────────▶│ Reconciler  │───────────────▶│   Backend   │
//! │  (static)   │              │ (installed/ │                │    (npm)    │
//! └─────────────┘              │ uninstalled)│                └─────────────┘
//!                              └──────┬──────┘
//!                                     ▼
//!                              ┌─────────────┐
//!                              │VersionCache │
//!                              └─────────────┘
//! ```

pub mod cache;

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::catalog::Tool;
use crate::config::MAX_CONCURRENT_LOOKUPS;
use crate::package::backend::PackageBackend;
use crate::package::error::BackendError;

pub use cache::{VersionCache, VersionInfo};

/// Backend mutation applied to a selected tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Install,
    Update,
    Uninstall,
}

/// Result of applying an [`Action`] to one tool
#[derive(Debug)]
pub struct ActionOutcome {
    pub tool: Tool,
    pub result: Result<(), BackendError>,
}

/// Progress notification emitted by [`Reconciler::apply_all`]
#[derive(Debug)]
pub enum ActionEvent<'a> {
    Started(&'a Tool),
    Finished(&'a ActionOutcome),
}

/// Split `tools` into installed and uninstalled sequences, keeping catalog order.
///
/// A backend error counts as "not installed".
pub async fn partition(backend: &dyn PackageBackend, tools: &[Tool]) -> (Vec<Tool>, Vec<Tool>) {
    let mut installed = Vec::new();
    let mut uninstalled = Vec::new();

    for tool in tools {
        let is_installed = backend
            .is_installed(&tool.package)
            .await
            .inspect_err(|e| debug!("Treating {} as not installed: {}", tool.package, e))
            .unwrap_or(false);

        if is_installed {
            installed.push(tool.clone());
        } else {
            uninstalled.push(tool.clone());
        }
    }

    info!(
        "Reconciled catalog: {} installed, {} not installed",
        installed.len(),
        uninstalled.len()
    );

    (installed, uninstalled)
}

/// Look up both versions of a package; failures become empty strings
async fn lookup_versions(backend: &dyn PackageBackend, package: &str) -> VersionInfo {
    let current_version = backend
        .installed_version(package)
        .await
        .inspect_err(|e| debug!("Installed version of {} unknown: {}", package, e))
        .unwrap_or_default();

    let latest_version = backend
        .latest_version(package)
        .await
        .inspect_err(|e| debug!("Latest version of {} unknown: {}", package, e))
        .unwrap_or_default();

    VersionInfo {
        current_version,
        latest_version,
    }
}

/// Fill `cache` for every tool that has no entry yet
///
/// Lookups run concurrently, at most [`MAX_CONCURRENT_LOOKUPS`] at a time,
/// and the call returns once all of them have finished. Cached tools are
/// skipped entirely.
pub async fn refresh_versions(backend: &dyn PackageBackend, tools: &[Tool], cache: &VersionCache) {
    let missing = cache.missing(tools.iter().map(|tool| tool.package.as_str()));

    if missing.is_empty() {
        debug!("All versions are already cached");
        return;
    }

    debug!("Looking up versions for {:?}", missing);

    let semaphore = Semaphore::new(MAX_CONCURRENT_LOOKUPS);
    let semaphore = &semaphore;

    let lookups = missing.into_iter().map(|package| async move {
        // The semaphore is never closed
        let Ok(_permit) = semaphore.acquire().await else {
            return;
        };

        let info = lookup_versions(backend, package).await;
        cache.insert(package, info);
    });

    join_all(lookups).await;
}

/// Installed tools whose cached versions are both known and differ, in input order
pub fn updatable(installed: &[Tool], cache: &VersionCache) -> Vec<Tool> {
    installed
        .iter()
        .filter(|tool| {
            cache
                .get(&tool.package)
                .is_some_and(|info| info.needs_update())
        })
        .cloned()
        .collect()
}

/// Installed/uninstalled partition of the catalog plus its version cache
pub struct Reconciler<B: PackageBackend> {
    backend: Arc<B>,
    installed: Vec<Tool>,
    uninstalled: Vec<Tool>,
    cache: VersionCache,
}

impl<B: PackageBackend> Reconciler<B> {
    /// Build the reconciler by querying the backend for every catalog tool
    pub async fn new(backend: Arc<B>, tools: &[Tool]) -> Self {
        let (installed, uninstalled) = partition(&*backend, tools).await;

        Self {
            backend,
            installed,
            uninstalled,
            cache: VersionCache::new(),
        }
    }

    pub fn installed(&self) -> &[Tool] {
        &self.installed
    }

    pub fn uninstalled(&self) -> &[Tool] {
        &self.uninstalled
    }

    pub fn cache(&self) -> &VersionCache {
        &self.cache
    }

    pub fn version_info(&self, package: &str) -> Option<VersionInfo> {
        self.cache.get(package)
    }

    pub async fn refresh_versions(&self, tools: &[Tool]) {
        refresh_versions(&*self.backend, tools, &self.cache).await;
    }

    /// Refresh versions of every installed tool
    pub async fn refresh_installed(&self) {
        refresh_versions(&*self.backend, &self.installed, &self.cache).await;
    }

    pub fn updatable(&self) -> Vec<Tool> {
        updatable(&self.installed, &self.cache)
    }

    /// Move a tool from `uninstalled` to the end of `installed`
    pub fn move_to_installed(&mut self, package: &str) {
        if let Some(index) = self.uninstalled.iter().position(|t| t.package == package) {
            let tool = self.uninstalled.remove(index);
            self.installed.push(tool);
        }
    }

    /// Move a tool from `installed` to the end of `uninstalled`
    pub fn move_to_uninstalled(&mut self, package: &str) {
        if let Some(index) = self.installed.iter().position(|t| t.package == package) {
            let tool = self.installed.remove(index);
            self.uninstalled.push(tool);
        }
    }

    pub fn invalidate(&self, package: &str) {
        self.cache.remove(package);
    }

    /// Install a tool; on success its versions are looked up again and it
    /// becomes installed
    pub async fn install(&mut self, tool: &Tool) -> Result<(), BackendError> {
        self.backend.install(&tool.package).await?;

        let info = lookup_versions(&*self.backend, &tool.package).await;
        self.cache.insert(&tool.package, info);
        self.move_to_installed(&tool.package);

        info!("Installed {}", tool.package);
        Ok(())
    }

    /// Update a tool; on success its cached installed version becomes the latest
    pub async fn update(&mut self, tool: &Tool) -> Result<(), BackendError> {
        self.backend.update(&tool.package).await?;

        self.cache.mark_updated(&tool.package);

        info!("Updated {}", tool.package);
        Ok(())
    }

    /// Uninstall a tool; on success it becomes uninstalled and its cache entry is dropped
    pub async fn uninstall(&mut self, tool: &Tool) -> Result<(), BackendError> {
        self.backend.uninstall(&tool.package).await?;

        self.move_to_uninstalled(&tool.package);
        self.invalidate(&tool.package);

        info!("Uninstalled {}", tool.package);
        Ok(())
    }

    pub async fn apply(&mut self, action: Action, tool: &Tool) -> Result<(), BackendError> {
        match action {
            Action::Install => self.install(tool).await,
            Action::Update => self.update(tool).await,
            Action::Uninstall => self.uninstall(tool).await,
        }
    }

    /// Apply `action` to each tool in order, one at a time
    ///
    /// A failure is recorded in its outcome and does not stop the remaining tools.
    pub async fn apply_all<F>(
        &mut self,
        action: Action,
        tools: &[Tool],
        mut on_event: F,
    ) -> Vec<ActionOutcome>
    where
        F: FnMut(ActionEvent<'_>),
    {
        let mut outcomes = Vec::with_capacity(tools.len());

        for tool in tools {
            on_event(ActionEvent::Started(tool));

            let result = self.apply(action, tool).await;
            if let Err(e) = &result {
                warn!("{:?} of {} failed: {}", action, tool.package, e);
            }

            let outcome = ActionOutcome {
                tool: tool.clone(),
                result,
            };
            on_event(ActionEvent::Finished(&outcome));
            outcomes.push(outcome);
        }

        outcomes
    }
}
