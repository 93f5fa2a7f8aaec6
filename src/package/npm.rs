//! npm implementation of the package backend

use std::collections::HashMap;
use std::process::Output;

use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::package::backend::PackageBackend;
use crate::package::error::BackendError;
use crate::package::spec::PackageSpec;

/// npm is a batch script on Windows, so it must be invoked with its extension
#[cfg(windows)]
const DEFAULT_PROGRAM: &str = "npm.cmd";
#[cfg(not(windows))]
const DEFAULT_PROGRAM: &str = "npm";

/// Output of `npm list -g --json`
#[derive(Debug, Deserialize)]
struct NpmListOutput {
    #[serde(default)]
    dependencies: HashMap<String, NpmListEntry>,
}

#[derive(Debug, Deserialize)]
struct NpmListEntry {
    #[serde(default)]
    version: Option<String>,
}

/// Backend implementation driving the `npm` command line
pub struct NpmBackend {
    program: String,
}

impl NpmBackend {
    /// Creates a new NpmBackend invoking a custom executable
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<Output, BackendError> {
        debug!("Running {} {}", self.program, args.join(" "));

        Command::new(&self.program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| BackendError::Spawn {
                program: self.program.clone(),
                source,
            })
    }

    /// Stdout of the global listing for one package
    ///
    /// `npm list` exits non-zero when the package is missing, so the exit
    /// status is ignored and only the JSON on stdout matters.
    async fn list(&self, bare_name: &str) -> Result<Vec<u8>, BackendError> {
        let output = self
            .run(&["list", "-g", bare_name, "--depth=0", "--json"])
            .await?;

        Ok(output.stdout)
    }

    async fn mutate(
        &self,
        args: &[&str],
        to_error: fn(String) -> BackendError,
    ) -> Result<(), BackendError> {
        let output = match self.run(args).await {
            Ok(output) => output,
            Err(e) => return Err(to_error(e.to_string())),
        };

        if output.status.success() {
            info!("{} {} succeeded", self.program, args.join(" "));
            Ok(())
        } else {
            let detail = diagnostic(&output);
            warn!("{} {} failed: {}", self.program, args.join(" "), detail);
            Err(to_error(detail))
        }
    }
}

impl Default for NpmBackend {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

#[async_trait::async_trait]
impl PackageBackend for NpmBackend {
    async fn is_installed(&self, package: &str) -> Result<bool, BackendError> {
        let bare_name = PackageSpec::parse(package).bare_name();
        let stdout = self.list(&bare_name).await?;

        Ok(is_listed(&stdout, &bare_name))
    }

    async fn installed_version(&self, package: &str) -> Result<String, BackendError> {
        let bare_name = PackageSpec::parse(package).bare_name();

        let stdout = match self.list(&bare_name).await {
            Ok(stdout) => stdout,
            Err(e) => {
                debug!("Cannot list {}: {}", bare_name, e);
                return Err(BackendError::NotFound(bare_name));
            }
        };

        parse_list_output(&stdout, &bare_name).ok_or(BackendError::NotFound(bare_name))
    }

    async fn latest_version(&self, package: &str) -> Result<String, BackendError> {
        let bare_name = PackageSpec::parse(package).bare_name();
        let output = self
            .run(&["view", &bare_name, "version"])
            .await
            .map_err(|e| BackendError::LookupFailed {
                package: bare_name.clone(),
                detail: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(BackendError::LookupFailed {
                package: bare_name,
                detail: diagnostic(&output),
            });
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if version.is_empty() {
            return Err(BackendError::LookupFailed {
                package: bare_name,
                detail: "empty output".to_string(),
            });
        }

        Ok(version)
    }

    async fn install(&self, package: &str) -> Result<(), BackendError> {
        // The full identifier is kept so a pinned version is honored
        let spec = PackageSpec::parse(package).to_string();
        self.mutate(&["install", "-g", &spec], BackendError::InstallFailed)
            .await
    }

    async fn update(&self, package: &str) -> Result<(), BackendError> {
        let bare_name = PackageSpec::parse(package).bare_name();
        self.mutate(&["update", "-g", &bare_name], BackendError::UpdateFailed)
            .await
    }

    async fn uninstall(&self, package: &str) -> Result<(), BackendError> {
        let bare_name = PackageSpec::parse(package).bare_name();
        self.mutate(
            &["uninstall", "-g", &bare_name],
            BackendError::UninstallFailed,
        )
        .await
    }
}

fn parse_list(stdout: &[u8]) -> Option<NpmListOutput> {
    serde_json::from_slice(stdout)
        .inspect_err(|e| debug!("Unreadable npm list output: {}", e))
        .ok()
}

/// Unreadable output counts as "not installed"
fn is_listed(stdout: &[u8], bare_name: &str) -> bool {
    parse_list(stdout).is_some_and(|list| list.dependencies.contains_key(bare_name))
}

fn parse_list_output(stdout: &[u8], bare_name: &str) -> Option<String> {
    parse_list(stdout)?
        .dependencies
        .remove(bare_name)?
        .version
        .filter(|v| !v.is_empty())
}

/// Trimmed stderr, or the exit status when npm printed nothing
fn diagnostic(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        format!("npm exited with {}", output.status)
    } else {
        stderr
    }
}
