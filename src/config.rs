//! User configuration.
//!
//! Loaded from `spawn/config.toml` under the platform config directory,
//! with `SPAWN_*` environment variables overriding the file:
//!
//! ```toml
//! # Editor command launched in freshly spawned worktrees
//! editor = "subl"
//!
//! # Where worktrees go, relative to the repository root
//! worktree-path = "../{repo}-{branch}"
//! ```
//!
//! The `worktree-path` template supports `{repo}` (repository directory
//! name) and `{branch}` (branch name, slashes replaced with dashes).

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Launched when neither `--editor`, config, nor `$EDITOR` says otherwise.
pub const DEFAULT_EDITOR: &str = "code";

const DEFAULT_WORKTREE_PATH: &str = "../{repo}-{branch}";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SpawnConfig {
    /// Editor command; `None` falls through to `$EDITOR`, then the default.
    pub editor: Option<String>,

    /// Template for worktree placement, relative to the repository root.
    pub worktree_path: String,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            editor: None,
            worktree_path: DEFAULT_WORKTREE_PATH.to_string(),
        }
    }
}

impl SpawnConfig {
    /// Load configuration: defaults, then the config file if present, then
    /// `SPAWN_EDITOR` / `SPAWN_WORKTREE_PATH` environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match config_path() {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            _ => Self::default(),
        };

        if let Ok(editor) = std::env::var("SPAWN_EDITOR")
            && !editor.is_empty()
        {
            config.editor = Some(editor);
        }
        if let Ok(template) = std::env::var("SPAWN_WORKTREE_PATH")
            && !template.is_empty()
        {
            config.worktree_path = template;
        }

        validate_worktree_path(&config.worktree_path)?;
        Ok(config)
    }

    /// Render the worktree path template for a repository and branch.
    ///
    /// Slashes in the branch name become dashes so hierarchical branches
    /// stay a single path segment.
    pub fn format_path(&self, repo: &str, branch: &str) -> String {
        let safe_branch = branch.replace(['/', '\\'], "-");
        self.worktree_path
            .replace("{repo}", repo)
            .replace("{branch}", &safe_branch)
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("spawn").join("config.toml"))
}

fn validate_worktree_path(template: &str) -> Result<()> {
    if template.is_empty() {
        bail!("worktree-path cannot be empty");
    }
    if PathBuf::from(template).is_absolute() {
        bail!("worktree-path must be relative to the repository root");
    }
    Ok(())
}
