//! Self-update check against the GitHub Releases API

use std::cmp::Ordering;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{GITHUB_API_BASE_URL, UPDATE_CHECK_TIMEOUT_SECS};
use crate::version::compare::compare_versions;
use crate::version::error::UpdateCheckError;

/// Host prefix stripped from repository URLs before reading owner/repo
const GITHUB_HOST_PREFIX: &str = "https://github.com/";

/// Response from the latest-release endpoint
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
    #[serde(default)]
    html_url: Option<String>,
}

/// Outcome of a self-update check
///
/// Failures are carried in `error` instead of being returned, so a failed
/// check can never stop the program.
#[derive(Debug)]
pub struct UpdateInfo {
    pub has_update: bool,
    pub current_version: String,
    /// Latest release tag without its "v" prefix, empty when unknown
    pub latest_version: String,
    pub repository_url: String,
    /// Web page of the latest release, if the API returned one
    pub release_url: Option<String>,
    pub error: Option<UpdateCheckError>,
}

/// Checks whether a newer release of this tool has been published
pub struct SelfUpdateChecker {
    current_version: String,
    repository_url: String,
    api_base_url: String,
}

impl SelfUpdateChecker {
    pub fn new(current_version: &str, repository_url: &str) -> Self {
        Self::with_api_base_url(current_version, repository_url, GITHUB_API_BASE_URL)
    }

    /// Creates a checker that talks to a custom API base URL
    pub fn with_api_base_url(
        current_version: &str,
        repository_url: &str,
        api_base_url: &str,
    ) -> Self {
        Self {
            current_version: current_version.to_string(),
            repository_url: repository_url.to_string(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    pub async fn check_for_updates(&self) -> UpdateInfo {
        let mut info = UpdateInfo {
            has_update: false,
            current_version: self.current_version.clone(),
            latest_version: String::new(),
            repository_url: self.repository_url.clone(),
            release_url: None,
            error: None,
        };

        match self.fetch_latest_release().await {
            Ok(release) => {
                let latest = release
                    .tag_name
                    .strip_prefix('v')
                    .unwrap_or(&release.tag_name)
                    .to_string();

                info.has_update =
                    compare_versions(&self.current_version, &latest) == Ordering::Less;
                info.latest_version = latest;
                info.release_url = release.html_url;
                debug!(
                    "Latest release is {} (current {}, update: {})",
                    info.latest_version, info.current_version, info.has_update
                );
            }
            Err(e) => {
                debug!("Self-update check failed: {}", e);
                info.error = Some(e);
            }
        }

        info
    }

    async fn fetch_latest_release(&self) -> Result<Release, UpdateCheckError> {
        let (owner, repo) = parse_repository_url(&self.repository_url)?;
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_base_url, owner, repo
        );

        let client = reqwest::Client::builder()
            .user_agent("atm")
            .timeout(Duration::from_secs(UPDATE_CHECK_TIMEOUT_SECS))
            .build()?;

        let response = client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
            return Err(UpdateCheckError::Status(status.as_u16()));
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse GitHub release response: {}", e);
            UpdateCheckError::InvalidResponse(e.to_string())
        })
    }
}

/// Split `https://github.com/{owner}/{repo}` into owner and repo
fn parse_repository_url(url: &str) -> Result<(&str, &str), UpdateCheckError> {
    let path = url.strip_prefix(GITHUB_HOST_PREFIX).unwrap_or(url);
    let mut segments = path.trim_end_matches('/').split('/');

    match (segments.next(), segments.next()) {
        (Some(owner), Some(repo)) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner, repo.trim_end_matches(".git")))
        }
        _ => Err(UpdateCheckError::InvalidRepositoryUrl(url.to_string())),
    }
}

/// Open a URL with the platform's default handler
pub fn open_repository(url: &str) -> std::io::Result<()> {
    open::that_detached(url)
}
