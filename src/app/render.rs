//! Plain-text rendering of tools, versions and action outcomes

use crate::catalog::Tool;
use crate::i18n::Messages;
use crate::reconciler::{Action, ActionOutcome, VersionInfo};

/// What the query screen says about a tool's version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStatus {
    UpdateAvailable(String),
    UpToDate,
    Unknown,
}

impl VersionStatus {
    pub fn of(info: &VersionInfo) -> Self {
        if info.needs_update() {
            VersionStatus::UpdateAvailable(info.latest_version.clone())
        } else if !info.current_version.is_empty() {
            VersionStatus::UpToDate
        } else {
            VersionStatus::Unknown
        }
    }
}

/// "v1.2.3", or the localized "Unknown"
pub fn version_text(info: &VersionInfo, messages: &Messages) -> String {
    if info.current_version.is_empty() {
        messages.query_unknown_version.to_string()
    } else {
        format!("v{}", info.current_version)
    }
}

/// Picker label for install and uninstall: "Name (package)"
pub fn tool_label(tool: &Tool) -> String {
    format!("{} ({})", tool.name, tool.package)
}

/// Picker label for update: "Name (v1.0.0 → v2.0.0)"
pub fn update_label(tool: &Tool, info: &VersionInfo) -> String {
    format!(
        "{} (v{} → v{})",
        tool.name, info.current_version, info.latest_version
    )
}

/// Spinner text while an action runs on `tool`
pub fn progress_message(action: Action, tool: &Tool, messages: &Messages) -> String {
    let template = match action {
        Action::Install => messages.install_installing,
        Action::Update => messages.update_updating,
        Action::Uninstall => messages.uninstall_uninstalling,
    };
    Messages::fill(template, &[&tool.name])
}

/// Success or failure line for a finished action, without the status mark
pub fn outcome_message(action: Action, outcome: &ActionOutcome, messages: &Messages) -> String {
    match &outcome.result {
        Ok(()) => {
            let template = match action {
                Action::Install => messages.install_success,
                Action::Update => messages.update_success,
                Action::Uninstall => messages.uninstall_success,
            };
            Messages::fill(template, &[&outcome.tool.name])
        }
        Err(e) => {
            let template = match action {
                Action::Install => messages.install_failed,
                Action::Update => messages.update_failed,
                Action::Uninstall => messages.uninstall_failed,
            };
            Messages::fill(template, &[&outcome.tool.name, &e.detail()])
        }
    }
}
