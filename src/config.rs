use std::path::PathBuf;

use crate::i18n::Lang;

// =============================================================================
// Release-related constants
// =============================================================================

/// Version of this binary, compared against the latest published release
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Repository whose releases are checked for self-updates
pub const REPOSITORY_URL: &str = "https://github.com/xiaoxu123195/atm";

/// Default base URL for the GitHub REST API
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";

/// Timeout for the self-update request in seconds
pub const UPDATE_CHECK_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// Reconciliation constants
// =============================================================================

/// Maximum number of version lookups in flight at once
pub const MAX_CONCURRENT_LOOKUPS: usize = 5;

// =============================================================================
// Environment variables
// =============================================================================

/// Disables the self-update check when set to the literal `"true"`
pub const SKIP_VERSION_CHECK_ENV: &str = "ATM_SKIP_VERSION_CHECK";

/// Forces the interface language (`en` or `zh`)
pub const LANG_ENV: &str = "ATM_LANG";

/// Runtime configuration resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub current_version: String,
    pub repository_url: String,
    pub api_base_url: String,
    pub skip_version_check: bool,
    pub lang: Lang,
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    ///
    /// Flags given on the command line win over environment variables.
    pub fn from_env(skip_flag: bool, lang_flag: Option<Lang>) -> Self {
        let skip_env = std::env::var(SKIP_VERSION_CHECK_ENV).ok();
        let lang_env = std::env::var(LANG_ENV).ok();
        let locale_env = crate::i18n::LOCALE_VARS
            .iter()
            .map(|name| std::env::var(name).ok())
            .collect::<Vec<_>>();

        Self {
            current_version: VERSION.to_string(),
            repository_url: REPOSITORY_URL.to_string(),
            api_base_url: GITHUB_API_BASE_URL.to_string(),
            skip_version_check: skip_flag || skip_requested(skip_env.as_deref()),
            lang: lang_flag
                .or_else(|| lang_env.as_deref().and_then(|v| v.parse().ok()))
                .unwrap_or_else(|| crate::i18n::detect_language(&locale_env)),
        }
    }
}

/// Only the exact literal `"true"` disables the check.
fn skip_requested(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Returns the path to the data directory for atm.
/// Uses $XDG_DATA_HOME/atm if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/atm,
/// or ./atm if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("atm.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("atm")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("true"), true)]
    #[case(Some("TRUE"), false)]
    #[case(Some("1"), false)]
    #[case(Some(""), false)]
    #[case(None, false)]
    fn skip_requested_only_accepts_literal_true(
        #[case] value: Option<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(skip_requested(value), expected);
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/atm"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/atm"));
    }

    #[test]
    fn data_dir_with_env_ignores_empty_xdg_data_home() {
        let path = data_dir_with_env(Some(String::new()), Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.local/share/atm"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./atm"));
    }
}
