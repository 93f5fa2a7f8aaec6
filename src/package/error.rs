use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Failed to get latest version of {package}: {detail}")]
    LookupFailed { package: String, detail: String },

    #[error("installation failed: {0}")]
    InstallFailed(String),

    #[error("update failed: {0}")]
    UpdateFailed(String),

    #[error("uninstallation failed: {0}")]
    UninstallFailed(String),

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl BackendError {
    /// The backend's own diagnostic text, without this crate's wording around it
    pub fn detail(&self) -> String {
        match self {
            BackendError::InstallFailed(detail)
            | BackendError::UpdateFailed(detail)
            | BackendError::UninstallFailed(detail)
            | BackendError::LookupFailed { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}
