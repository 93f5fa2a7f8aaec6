use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use ai_tool_manager::app::App;
use ai_tool_manager::catalog::Catalog;
use ai_tool_manager::config::AppConfig;
use ai_tool_manager::i18n::Lang;
use ai_tool_manager::logging;
use ai_tool_manager::package::NpmBackend;

#[derive(Parser)]
#[command(name = "atm")]
#[command(version, about = "Install, query, update and uninstall AI command line tools")]
struct Cli {
    /// Do not check GitHub for a newer release of atm
    #[arg(long)]
    skip_version_check: bool,

    /// Interface language (defaults to the system locale)
    #[arg(long, value_enum)]
    lang: Option<Lang>,

    /// Write debug records to the log file
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env(cli.skip_version_check, cli.lang);
    let messages = config.lang.messages();

    let _guard = logging::init(cli.verbose);
    info!("Starting atm {}", config.current_version);

    let catalog = Catalog::load().context(messages.config_load_error)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let backend = Arc::new(NpmBackend::default());
            let mut app = App::init(config, &catalog, backend).await;
            app.run().await
        })
}
