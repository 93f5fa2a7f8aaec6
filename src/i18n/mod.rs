//! Localized user-facing strings
//!
//! Every string shown by the interactive surface comes from a static
//! [`Messages`] table. Templates carry positional placeholders (`{0}`, `{1}`)
//! that [`Messages::fill`] substitutes.

mod en;
mod zh;

/// Locale environment variables, in lookup order
pub const LOCALE_VARS: [&str; 3] = ["LANG", "LC_ALL", "LC_MESSAGES"];

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    pub fn messages(self) -> &'static Messages {
        match self {
            Lang::En => &en::MESSAGES,
            Lang::Zh => &zh::MESSAGES,
        }
    }
}

impl std::str::FromStr for Lang {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "zh" => Ok(Lang::Zh),
            _ => Err(()),
        }
    }
}

/// Detect the interface language from locale variable values.
///
/// `values` are the contents of [`LOCALE_VARS`] in the same order. The first
/// non-empty value decides; a `zh` prefix selects Chinese, anything else English.
pub fn detect_language(values: &[Option<String>]) -> Lang {
    values
        .iter()
        .flatten()
        .find(|value| !value.is_empty())
        .map(|value| {
            if value.to_ascii_lowercase().starts_with("zh") {
                Lang::Zh
            } else {
                Lang::En
            }
        })
        .unwrap_or_default()
}

/// Static message table for one language
#[derive(Debug)]
pub struct Messages {
    pub app_title: &'static str,
    pub app_goodbye: &'static str,
    pub app_initializing: &'static str,
    pub app_separator: &'static str,

    pub menu_what_to_do: &'static str,
    pub menu_install: &'static str,
    pub menu_query: &'static str,
    pub menu_update: &'static str,
    pub menu_uninstall: &'static str,
    pub menu_exit: &'static str,

    pub prompt_press_space: &'static str,

    pub install_select: &'static str,
    pub install_all_installed: &'static str,
    pub install_none_selected: &'static str,
    pub install_installing: &'static str,
    pub install_success: &'static str,
    pub install_failed: &'static str,

    pub query_none_installed: &'static str,
    pub query_checking: &'static str,
    pub query_installed_tools: &'static str,
    pub query_version: &'static str,
    pub query_update_available: &'static str,
    pub query_up_to_date: &'static str,
    pub query_unknown_version: &'static str,

    pub update_checking: &'static str,
    pub update_all_up_to_date: &'static str,
    pub update_select: &'static str,
    pub update_none_selected: &'static str,
    pub update_updating: &'static str,
    pub update_success: &'static str,
    pub update_failed: &'static str,

    pub uninstall_none_installed: &'static str,
    pub uninstall_select: &'static str,
    pub uninstall_none_selected: &'static str,
    pub uninstall_confirm: &'static str,
    pub uninstall_cancelled: &'static str,
    pub uninstall_uninstalling: &'static str,
    pub uninstall_success: &'static str,
    pub uninstall_failed: &'static str,

    pub version_checking: &'static str,
    pub version_update_available: &'static str,
    pub version_current: &'static str,
    pub version_latest: &'static str,
    pub version_update_prompt: &'static str,
    pub version_open_repository: &'static str,
    pub version_skip_update: &'static str,
    pub version_repository_opened: &'static str,
    pub version_repository_open_failed: &'static str,

    pub config_load_error: &'static str,
}

impl Messages {
    /// Substitute `{0}`, `{1}`, ... in `template` with `args`
    pub fn fill(template: &str, args: &[&str]) -> String {
        args.iter()
            .enumerate()
            .fold(template.to_string(), |text, (i, arg)| {
                text.replace(&format!("{{{i}}}"), arg)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn env(values: [Option<&str>; 3]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[rstest]
    #[case([Some("zh_CN.UTF-8"), None, None], Lang::Zh)]
    #[case([Some("en_US.UTF-8"), Some("zh_CN.UTF-8"), None], Lang::En)]
    #[case([None, None, Some("ZH_TW")], Lang::Zh)]
    #[case([Some(""), Some("zh_CN"), None], Lang::Zh)]
    #[case([Some("C"), None, None], Lang::En)]
    #[case([None, None, None], Lang::En)]
    fn detect_language_uses_first_non_empty_variable(
        #[case] values: [Option<&str>; 3],
        #[case] expected: Lang,
    ) {
        assert_eq!(detect_language(&env(values)), expected);
    }

    #[test]
    fn fill_replaces_positional_placeholders() {
        let text = Messages::fill("Failed to install {0}: {1}", &["Foo", "EACCES"]);
        assert_eq!(text, "Failed to install Foo: EACCES");
    }

    #[test]
    fn fill_leaves_unmatched_placeholders() {
        assert_eq!(Messages::fill("{0} and {1}", &["a"]), "a and {1}");
    }

    #[test]
    fn lang_parses_case_insensitively() {
        assert_eq!("ZH".parse::<Lang>(), Ok(Lang::Zh));
        assert_eq!("en".parse::<Lang>(), Ok(Lang::En));
        assert_eq!("fr".parse::<Lang>(), Err(()));
    }

    #[test]
    fn every_template_keeps_its_placeholders_in_both_languages() {
        for messages in [Lang::En.messages(), Lang::Zh.messages()] {
            assert!(messages.install_failed.contains("{0}"));
            assert!(messages.install_failed.contains("{1}"));
            assert!(messages.update_updating.contains("{0}"));
            assert!(messages.uninstall_confirm.contains("{0}"));
            assert!(messages.version_repository_open_failed.contains("{0}"));
        }
    }
}
