use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateCheckError {
    #[error("Invalid repository URL: {0}")]
    InvalidRepositoryUrl(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("GitHub API returned status: {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
