//! File logging
//!
//! The terminal belongs to the interactive menu, so log records only go to
//! `atm.log` under the data directory.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{data_dir, log_path};

const LOG_FILE_NAME: &str = "atm.log";

/// Default directive when `RUST_LOG` is unset
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "ai_tool_manager=debug,atm=debug"
    } else {
        "ai_tool_manager=info,atm=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber writing to the log file.
///
/// Returns the guard that flushes buffered records on drop, or `None` when
/// logging could not be set up. Failing to log never stops the program.
pub fn init(verbose: bool) -> Option<WorkerGuard> {
    let dir = data_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Failed to create log directory {}: {}", dir.display(), e);
        return None;
    }

    init_in(&dir, verbose)
}

fn init_in(dir: &Path, verbose: bool) -> Option<WorkerGuard> {
    let appender = rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    match tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(file_layer)
        .try_init()
    {
        Ok(()) => {
            tracing::debug!("Logging to {}", log_path().display());
            Some(guard)
        }
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_default_level_to_debug() {
        assert_eq!(default_directive(false), "ai_tool_manager=info,atm=info");
        assert_eq!(default_directive(true), "ai_tool_manager=debug,atm=debug");
    }
}
