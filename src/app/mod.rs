//! Interactive menu driving the reconciler
//!
//! One menu action runs to completion before the next is offered.

mod handlers;
pub mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::i18n::Messages;
use crate::package::backend::PackageBackend;
use crate::reconciler::Reconciler;
use crate::ui::{self, Spinner, prompt};
use crate::version::{SelfUpdateChecker, open_repository};

/// Main menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Install,
    Query,
    Update,
    Uninstall,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::Install,
        MenuAction::Query,
        MenuAction::Update,
        MenuAction::Uninstall,
        MenuAction::Exit,
    ];

    pub fn label(self, messages: &Messages) -> &'static str {
        match self {
            MenuAction::Install => messages.menu_install,
            MenuAction::Query => messages.menu_query,
            MenuAction::Update => messages.menu_update,
            MenuAction::Uninstall => messages.menu_uninstall,
            MenuAction::Exit => messages.menu_exit,
        }
    }
}

/// What the user chose when told about a newer release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfUpdateDecision {
    OpenRepository,
    Skip,
}

pub struct App<B: PackageBackend> {
    config: AppConfig,
    messages: &'static Messages,
    reconciler: Reconciler<B>,
}

impl<B: PackageBackend> App<B> {
    /// Reconcile the catalog against the backend, showing a spinner meanwhile
    pub async fn init(config: AppConfig, catalog: &Catalog, backend: Arc<B>) -> Self {
        let messages = config.lang.messages();

        let spinner = Spinner::new(messages.app_initializing);
        let reconciler = Reconciler::new(backend, catalog.tools()).await;
        spinner.clear();

        Self {
            config,
            messages,
            reconciler,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("\n{}\n", ui::heading(self.messages.app_title));

        if self.config.skip_version_check {
            debug!("Self-update check skipped");
        } else {
            self.check_for_updates().await;
        }

        loop {
            let action = self.main_menu()?;
            info!("Menu action: {:?}", action);

            match action {
                MenuAction::Install => self.handle_install().await,
                MenuAction::Query => self.handle_query().await,
                MenuAction::Update => self.handle_update().await,
                MenuAction::Uninstall => self.handle_uninstall().await,
                MenuAction::Exit => {
                    println!("\n{}\n", style_goodbye(self.messages));
                    return Ok(());
                }
            }

            println!("\n{}\n", self.messages.app_separator);
        }
    }

    /// Cancelling the main menu exits like choosing "Exit"
    fn main_menu(&self) -> Result<MenuAction> {
        let labels: Vec<&str> = MenuAction::ALL
            .iter()
            .map(|action| action.label(self.messages))
            .collect();

        let index = prompt::select(self.messages.menu_what_to_do, &labels)
            .context("Failed to read menu selection")?;

        Ok(index
            .and_then(|i| MenuAction::ALL.get(i).copied())
            .unwrap_or(MenuAction::Exit))
    }

    /// Failures are logged and otherwise ignored
    async fn check_for_updates(&self) {
        let checker = SelfUpdateChecker::with_api_base_url(
            &self.config.current_version,
            &self.config.repository_url,
            &self.config.api_base_url,
        );

        let spinner = Spinner::new(self.messages.version_checking);
        let update = checker.check_for_updates().await;
        spinner.clear();

        if let Some(e) = &update.error {
            debug!("Ignoring self-update check failure: {}", e);
            return;
        }

        if !update.has_update {
            return;
        }

        println!("\n{}", ui::warning(self.messages.version_update_available));
        println!(
            "{}",
            ui::dim(&Messages::fill(
                self.messages.version_current,
                &[&update.current_version]
            ))
        );
        println!(
            "{}\n",
            Messages::fill(self.messages.version_latest, &[&update.latest_version])
        );

        if self.ask_self_update() == SelfUpdateDecision::OpenRepository {
            let url = update
                .release_url
                .as_deref()
                .unwrap_or(update.repository_url.as_str());

            match open_repository(url) {
                Ok(()) => println!("{}", ui::success(self.messages.version_repository_opened)),
                Err(e) => {
                    debug!("Failed to open {}: {}", url, e);
                    println!(
                        "{}",
                        ui::warning(&Messages::fill(
                            self.messages.version_repository_open_failed,
                            &[url]
                        ))
                    );
                }
            }
            println!();
        }
    }

    fn ask_self_update(&self) -> SelfUpdateDecision {
        let choices = [
            self.messages.version_open_repository,
            self.messages.version_skip_update,
        ];

        match prompt::select(self.messages.version_update_prompt, &choices) {
            Ok(Some(0)) => SelfUpdateDecision::OpenRepository,
            _ => SelfUpdateDecision::Skip,
        }
    }
}

fn style_goodbye(messages: &Messages) -> String {
    console::style(messages.app_goodbye).green().to_string()
}
