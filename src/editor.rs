//! Editor resolution and launch.

use std::path::Path;
use std::process::Command;

use log::{debug, warn};

use crate::config::{DEFAULT_EDITOR, SpawnConfig};
use crate::styling::{eprintln, format_warning};

/// Pick the editor command to launch.
///
/// Precedence: `--editor` flag, then the config file (which already folded
/// in `SPAWN_EDITOR`), then `$EDITOR`, then the built-in default.
pub fn resolve(cli_override: Option<String>, config: &SpawnConfig) -> String {
    cli_override
        .or_else(|| config.editor.clone())
        .or_else(|| std::env::var("EDITOR").ok().filter(|e| !e.is_empty()))
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Launch the editor with `dir` as its working directory.
///
/// Blocks until the editor exits, which keeps terminal editors usable; GUI
/// editors fork and return immediately anyway. Failure to launch is a
/// warning, never an error: the worktree operation itself already succeeded.
pub fn launch(editor: &str, dir: &Path) {
    debug!("launching editor `{}` in {}", editor, dir.display());

    match Command::new(editor).arg(".").current_dir(dir).status() {
        Ok(status) if status.success() => {}
        Ok(status) => {
            warn!("editor `{}` exited with {}", editor, status);
        }
        Err(err) => {
            eprintln!(
                "{}",
                format_warning(&format!("could not launch editor `{}`: {}", editor, err))
            );
        }
    }
}
