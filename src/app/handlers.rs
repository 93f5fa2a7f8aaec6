//! Menu action handlers

use tracing::{debug, warn};

use crate::app::App;
use crate::app::render::{
    VersionStatus, outcome_message, progress_message, tool_label, update_label, version_text,
};
use crate::catalog::Tool;
use crate::i18n::Messages;
use crate::package::backend::PackageBackend;
use crate::reconciler::{Action, ActionEvent};
use crate::ui::{self, Spinner, prompt};

/// Why the update screen has nothing to offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UpdateNotice {
    NoneInstalled,
    AllUpToDate,
}

impl<B: PackageBackend> App<B> {
    pub(super) async fn handle_install(&mut self) {
        let candidates = self.reconciler.uninstalled().to_vec();
        if candidates.is_empty() {
            println!("{}", ui::warning(self.messages.install_all_installed));
            return;
        }

        let labels: Vec<String> = candidates.iter().map(tool_label).collect();
        let Some(selected) = self.pick(self.messages.install_select, &candidates, &labels) else {
            println!("{}", ui::warning(self.messages.install_none_selected));
            return;
        };

        self.run_actions(Action::Install, &selected).await;
    }

    pub(super) async fn handle_query(&mut self) {
        if self.reconciler.installed().is_empty() {
            println!("{}", ui::warning(self.messages.query_none_installed));
            return;
        }

        let spinner = Spinner::new(self.messages.query_checking);
        self.reconciler.refresh_installed().await;
        spinner.clear();

        println!("\n{}\n", ui::bold(self.messages.query_installed_tools));

        for tool in self.reconciler.installed() {
            let info = self.reconciler.version_info(&tool.package).unwrap_or_default();

            println!(
                "{} {} {}",
                ui::bullet(),
                ui::bold(&tool.name),
                ui::dim(&format!("({})", tool.package))
            );
            println!("  {}", ui::dim(&tool.description));

            let status = match VersionStatus::of(&info) {
                VersionStatus::UpdateAvailable(latest) => ui::warning(&Messages::fill(
                    self.messages.query_update_available,
                    &[&latest],
                )),
                VersionStatus::UpToDate => {
                    console::style(self.messages.query_up_to_date).green().to_string()
                }
                VersionStatus::Unknown => String::new(),
            };

            println!(
                "  {} {} {}",
                self.messages.query_version,
                version_text(&info, self.messages),
                status
            );
            println!();
        }
    }

    pub(super) async fn handle_update(&mut self) {
        let candidates = match self.update_candidates().await {
            Ok(candidates) => candidates,
            Err(UpdateNotice::NoneInstalled) => {
                println!("{}", ui::warning(self.messages.query_none_installed));
                return;
            }
            Err(UpdateNotice::AllUpToDate) => {
                println!("{}", ui::success(self.messages.update_all_up_to_date));
                return;
            }
        };

        let labels: Vec<String> = candidates
            .iter()
            .map(|tool| {
                let info = self.reconciler.version_info(&tool.package).unwrap_or_default();
                update_label(tool, &info)
            })
            .collect();

        let Some(selected) = self.pick(self.messages.update_select, &candidates, &labels) else {
            println!("{}", ui::warning(self.messages.update_none_selected));
            return;
        };

        self.run_actions(Action::Update, &selected).await;
    }

    pub(super) async fn handle_uninstall(&mut self) {
        let candidates = self.reconciler.installed().to_vec();
        if candidates.is_empty() {
            println!("{}", ui::warning(self.messages.uninstall_none_installed));
            return;
        }

        let labels: Vec<String> = candidates.iter().map(tool_label).collect();
        let Some(selected) = self.pick(self.messages.uninstall_select, &candidates, &labels)
        else {
            println!("{}", ui::warning(self.messages.uninstall_none_selected));
            return;
        };

        let question = Messages::fill(
            self.messages.uninstall_confirm,
            &[&selected.len().to_string()],
        );
        match prompt::confirm(&question) {
            Ok(Some(true)) => {}
            Ok(_) => {
                println!("{}", ui::warning(self.messages.uninstall_cancelled));
                return;
            }
            Err(e) => {
                warn!("Failed to read confirmation: {}", e);
                println!("{}", ui::warning(self.messages.uninstall_cancelled));
                return;
            }
        }

        self.run_actions(Action::Uninstall, &selected).await;
    }

    /// Installed tools with a newer version, refreshing versions first
    async fn update_candidates(&self) -> Result<Vec<Tool>, UpdateNotice> {
        if self.reconciler.installed().is_empty() {
            return Err(UpdateNotice::NoneInstalled);
        }

        let spinner = Spinner::new(self.messages.update_checking);
        self.reconciler.refresh_installed().await;
        spinner.clear();

        let candidates = self.reconciler.updatable();
        if candidates.is_empty() {
            return Err(UpdateNotice::AllUpToDate);
        }

        Ok(candidates)
    }

    /// Ask for a subset of `candidates`; `None` when nothing was chosen
    fn pick(&self, title: &str, candidates: &[Tool], labels: &[String]) -> Option<Vec<Tool>> {
        let prompt_text = format!("{} {}", title, ui::dim(self.messages.prompt_press_space));

        let indices = match prompt::multi_select(&prompt_text, labels) {
            Ok(Some(indices)) => indices,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read selection: {}", e);
                return None;
            }
        };

        let selected: Vec<Tool> = indices
            .into_iter()
            .filter_map(|i| candidates.get(i).cloned())
            .collect();

        debug!(
            "Selected {:?}",
            selected.iter().map(|t| &t.package).collect::<Vec<_>>()
        );

        (!selected.is_empty()).then_some(selected)
    }

    /// Apply `action` to each tool in order, with a spinner per tool
    async fn run_actions(&mut self, action: Action, tools: &[Tool]) {
        let messages = self.messages;
        let mut spinner: Option<Spinner> = None;

        println!();
        self.reconciler
            .apply_all(action, tools, |event| match event {
                ActionEvent::Started(tool) => {
                    spinner = Some(Spinner::new(progress_message(action, tool, messages)));
                }
                ActionEvent::Finished(outcome) => {
                    if let Some(s) = spinner.take() {
                        s.clear();
                    }

                    let text = outcome_message(action, outcome, messages);
                    if outcome.result.is_ok() {
                        println!("{}", ui::success(&text));
                    } else {
                        println!("{}", ui::failure(&text));
                    }
                }
            })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::AppConfig;
    use crate::i18n::Lang;
    use crate::package::backend::MockPackageBackend;
    use crate::reconciler::Reconciler;

    async fn app(backend: MockPackageBackend, packages: &[&str]) -> App<MockPackageBackend> {
        let tools: Vec<Tool> = packages
            .iter()
            .map(|package| Tool::new(package, package, ""))
            .collect();

        App {
            config: AppConfig::from_env(true, Some(Lang::En)),
            messages: Lang::En.messages(),
            reconciler: Reconciler::new(Arc::new(backend), &tools).await,
        }
    }

    #[tokio::test]
    async fn update_candidates_stops_before_lookups_when_nothing_is_installed() {
        let mut backend = MockPackageBackend::new();
        backend.expect_is_installed().returning(|_| Ok(false));
        backend.expect_installed_version().never();
        backend.expect_latest_version().never();

        let app = app(backend, &["foo"]).await;

        assert_eq!(
            app.update_candidates().await,
            Err(UpdateNotice::NoneInstalled)
        );
    }

    #[tokio::test]
    async fn update_candidates_reports_all_up_to_date() {
        let mut backend = MockPackageBackend::new();
        backend.expect_is_installed().returning(|_| Ok(true));
        backend
            .expect_installed_version()
            .returning(|_| Ok("2.0.0".to_string()));
        backend
            .expect_latest_version()
            .returning(|_| Ok("2.0.0".to_string()));

        let app = app(backend, &["foo"]).await;

        assert_eq!(
            app.update_candidates().await,
            Err(UpdateNotice::AllUpToDate)
        );
    }

    #[tokio::test]
    async fn update_candidates_lists_outdated_tools() {
        let mut backend = MockPackageBackend::new();
        backend.expect_is_installed().returning(|_| Ok(true));
        backend
            .expect_installed_version()
            .returning(|_| Ok("1.0.0".to_string()));
        backend
            .expect_latest_version()
            .returning(|_| Ok("2.0.0".to_string()));

        let app = app(backend, &["foo"]).await;
        let candidates = app.update_candidates().await.unwrap();

        assert_eq!(candidates, vec![Tool::new("foo", "foo", "")]);
    }
}
