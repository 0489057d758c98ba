mod list;
mod merge;
mod remove;
mod spawn;

pub use list::handle_list;
pub use merge::handle_merge;
pub use remove::handle_remove;
pub use spawn::handle_spawn;

use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;

/// Yes/no prompt; `Ok(false)` when the user declines.
fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .context("confirmation prompt failed")
}

fn repo_name(repo_root: &Path) -> Result<String> {
    repo_root
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .context("could not determine repository name")
}
