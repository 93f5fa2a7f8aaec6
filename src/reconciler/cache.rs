//! In-memory version cache keyed by catalog package identifier

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Installed and latest version of one package
///
/// An empty string means the version is unknown (not installed, or the
/// lookup failed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionInfo {
    pub current_version: String,
    pub latest_version: String,
}

impl VersionInfo {
    pub fn new(current_version: &str, latest_version: &str) -> Self {
        Self {
            current_version: current_version.to_string(),
            latest_version: latest_version.to_string(),
        }
    }

    /// Both versions are known and they differ
    pub fn needs_update(&self) -> bool {
        !self.current_version.is_empty()
            && !self.latest_version.is_empty()
            && self.current_version != self.latest_version
    }
}

/// Process-lifetime memo of version lookups
///
/// Entries are only replaced whole; there is no TTL.
#[derive(Debug, Default)]
pub struct VersionCache {
    entries: Mutex<HashMap<String, VersionInfo>>,
}

impl VersionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A poisoned lock only means a writer panicked mid-insert; the map itself is still valid
    fn lock(&self) -> MutexGuard<'_, HashMap<String, VersionInfo>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, package: &str) -> Option<VersionInfo> {
        self.lock().get(package).cloned()
    }

    pub fn contains(&self, package: &str) -> bool {
        self.lock().contains_key(package)
    }

    pub fn insert(&self, package: &str, info: VersionInfo) {
        self.lock().insert(package.to_string(), info);
    }

    pub fn remove(&self, package: &str) -> Option<VersionInfo> {
        self.lock().remove(package)
    }

    /// Record a successful update: the installed version becomes the latest one.
    ///
    /// Returns false when the package has no entry.
    pub fn mark_updated(&self, package: &str) -> bool {
        match self.lock().get_mut(package) {
            Some(info) => {
                info.current_version = info.latest_version.clone();
                true
            }
            None => false,
        }
    }

    /// Return the packages from `packages` that have no entry, in order and
    /// without duplicates. The check happens under a single lock.
    pub fn missing<'a>(&self, packages: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        let entries = self.lock();
        let mut missing: Vec<&str> = Vec::new();

        for package in packages {
            if !entries.contains_key(package) && !missing.contains(&package) {
                missing.push(package);
            }
        }

        missing
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
