//! Terminal presentation helpers

pub mod prompt;
pub mod spinner;

pub use spinner::Spinner;

use console::style;

pub fn success(msg: &str) -> String {
    style(format!("✓ {msg}")).green().to_string()
}

pub fn failure(msg: &str) -> String {
    style(format!("✗ {msg}")).red().to_string()
}

pub fn warning(msg: &str) -> String {
    style(msg).yellow().to_string()
}

pub fn heading(msg: &str) -> String {
    style(msg).cyan().to_string()
}

pub fn dim(msg: &str) -> String {
    style(msg).black().bright().to_string()
}

pub fn bold(msg: &str) -> String {
    style(msg).bold().to_string()
}

pub fn bullet() -> String {
    style("•").blue().to_string()
}
