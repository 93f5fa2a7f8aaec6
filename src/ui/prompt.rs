//! Interactive prompts
//!
//! Each helper returns `Ok(None)` when the user cancels (Esc or q).

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect, Select};

const PAGE_SIZE: usize = 10;

pub fn select<T: ToString>(prompt: &str, items: &[T]) -> dialoguer::Result<Option<usize>> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .max_length(PAGE_SIZE)
        .interact_opt()
}

pub fn multi_select<T: ToString>(
    prompt: &str,
    items: &[T],
) -> dialoguer::Result<Option<Vec<usize>>> {
    MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .max_length(PAGE_SIZE)
        .interact_opt()
}

/// Yes/no question defaulting to "no"
pub fn confirm(prompt: &str) -> dialoguer::Result<Option<bool>> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact_opt()
}
