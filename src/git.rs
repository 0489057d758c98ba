use std::path::{Path, PathBuf};

use log::debug;

use crate::exec::{self, ExecError};

pub mod parse;
pub mod reconcile;
pub mod validate;

pub use parse::{normalize_branch_lines, parse_worktree_list};
pub use reconcile::{BranchPartition, partition_branches, worktree_dir_name, worktree_for_branch};
pub use validate::validate_branch_name;

/// One entry from `git worktree list --porcelain`.
///
/// `branch` keeps the fully qualified ref (`refs/heads/...`); use
/// [`Worktree::branch_name`] for the short name. Exactly one of branch /
/// detached / bare holds per record (or none, for git's "no branch" case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worktree {
    pub path: PathBuf,
    pub head: Option<String>,
    pub branch: Option<String>,
    pub bare: bool,
    pub detached: bool,
    pub prunable: bool,
}

impl Worktree {
    pub(crate) fn at(path: PathBuf) -> Self {
        Self {
            path,
            head: None,
            branch: None,
            bare: false,
            detached: false,
            prunable: false,
        }
    }

    /// Branch name with the `refs/heads/` prefix stripped.
    pub fn branch_name(&self) -> Option<&str> {
        self.branch
            .as_deref()
            .map(|r| r.strip_prefix("refs/heads/").unwrap_or(r))
    }
}

#[derive(Debug)]
pub enum GitError {
    /// The working directory is not inside a git repository.
    NotARepository,
    /// A git invocation failed; carries git's own stderr.
    CommandFailed(String),
    /// A candidate branch name git would reject.
    InvalidBranchName(String),
    /// `git merge` stopped on conflicts; carries the captured merge output.
    MergeConflict(String),
}

impl std::fmt::Display for GitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitError::NotARepository => write!(f, "not inside a git repository"),
            GitError::CommandFailed(msg) => write!(f, "{}", msg.trim()),
            GitError::InvalidBranchName(reason) => {
                write!(f, "invalid branch name: {}", reason)
            }
            GitError::MergeConflict(_) => write!(f, "merge stopped on conflicts"),
        }
    }
}

impl std::error::Error for GitError {}

impl From<ExecError> for GitError {
    fn from(err: ExecError) -> Self {
        match err {
            ExecError::Spawn { .. } => GitError::CommandFailed(err.to_string()),
            ExecError::Failed { stderr, .. } => GitError::CommandFailed(stderr),
        }
    }
}

/// Repository context for git operations.
///
/// Encapsulates the directory git commands run in, so repeated invocations
/// (and tests) never have to mutate the process working directory.
#[derive(Debug, Clone)]
pub struct Repository {
    path: PathBuf,
}

impl Repository {
    /// Create a repository context at the specified path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a repository context for the current directory.
    pub fn current() -> Self {
        Self::at(".")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run a git command in this repository's context and capture stdout.
    pub fn run(&self, args: &[&str]) -> Result<String, ExecError> {
        exec::run("git", args, Some(&self.path))
    }

    /// Fail early with a clean message when we're not in a repository.
    pub fn ensure_repository(&self) -> Result<(), GitError> {
        if exec::succeeds("git", &["rev-parse", "--git-dir"], Some(&self.path)) {
            Ok(())
        } else {
            Err(GitError::NotARepository)
        }
    }

    /// Canonicalized root of the main working tree (parent of the common
    /// `.git` directory). Stable even when invoked from inside a linked
    /// worktree.
    pub fn repo_root(&self) -> Result<PathBuf, GitError> {
        let stdout = self.run(&["rev-parse", "--path-format=absolute", "--git-common-dir"])?;
        let common_dir = PathBuf::from(stdout.trim())
            .canonicalize()
            .map_err(|e| GitError::CommandFailed(format!("failed to canonicalize path: {}", e)))?;

        common_dir
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| GitError::CommandFailed("invalid git directory".to_string()))
    }

    /// Current branch name, or `None` in detached HEAD state.
    pub fn current_branch(&self) -> Result<Option<String>, GitError> {
        let stdout = self.run(&["branch", "--show-current"])?;
        let branch = stdout.trim();
        Ok((!branch.is_empty()).then(|| branch.to_string()))
    }

    /// Whether `branch` resolves to a local or origin-tracking ref.
    pub fn branch_exists(&self, branch: &str) -> bool {
        let local = format!("refs/heads/{}", branch);
        let remote = format!("refs/remotes/origin/{}", branch);
        exec::succeeds("git", &["rev-parse", "--verify", &local], Some(&self.path))
            || exec::succeeds("git", &["rev-parse", "--verify", &remote], Some(&self.path))
    }

    /// All worktrees git knows about, in emission order.
    ///
    /// A failed listing collapses to an empty list; callers treat "git gave
    /// us nothing" and "there are no worktrees" the same way.
    pub fn list_worktrees(&self) -> Vec<Worktree> {
        match self.run(&["worktree", "list", "--porcelain"]) {
            Ok(stdout) => parse_worktree_list(&stdout),
            Err(err) => {
                debug!("worktree listing failed: {}", err);
                Vec::new()
            }
        }
    }

    /// Deduplicated branch names, local and origin-tracking conflated.
    ///
    /// Same absence convention as [`Repository::list_worktrees`].
    pub fn branches(&self) -> Vec<String> {
        match self.run(&["branch", "--all"]) {
            Ok(stdout) => normalize_branch_lines(stdout.lines()),
            Err(err) => {
                debug!("branch listing failed: {}", err);
                Vec::new()
            }
        }
    }

    /// Add a worktree at `path`, creating the branch when `create` is set.
    pub fn add_worktree(&self, path: &Path, branch: &str, create: bool) -> Result<(), GitError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| GitError::CommandFailed("invalid UTF-8 in worktree path".to_string()))?;

        let mut args = vec!["worktree", "add"];
        if create {
            args.push("-b");
            args.push(branch);
        }
        args.push(path_str);
        if !create {
            args.push(branch);
        }

        self.run(&args)?;
        Ok(())
    }

    /// Remove the worktree at `path`.
    pub fn remove_worktree(&self, path: &Path, force: bool) -> Result<(), GitError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| GitError::CommandFailed("invalid UTF-8 in worktree path".to_string()))?;

        let mut args = vec!["worktree", "remove"];
        if force {
            args.push("--force");
        }
        args.push(path_str);

        self.run(&args)?;
        Ok(())
    }

    /// Merge `branch` into the current branch.
    ///
    /// Git reports content conflicts with `CONFLICT` markers in the captured
    /// output of the failed command; that case becomes
    /// [`GitError::MergeConflict`] so the caller can print resolution
    /// instructions instead of a bare failure.
    pub fn merge(&self, branch: &str) -> Result<String, GitError> {
        match self.run(&["merge", branch]) {
            Ok(stdout) => Ok(stdout),
            Err(ExecError::Failed { stdout, stderr, .. }) => {
                if stdout.contains("CONFLICT") || stderr.contains("CONFLICT") {
                    Err(GitError::MergeConflict(stdout))
                } else {
                    Err(GitError::CommandFailed(stderr))
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Subject lines of the most recent commits on `rev`, newest first.
    ///
    /// Best effort for previews; failure collapses to an empty list.
    pub fn recent_commits(&self, rev: &str, limit: usize) -> Vec<String> {
        let limit = limit.to_string();
        self.run(&["log", "--oneline", "-n", &limit, rev])
            .map(|out| out.lines().map(String::from).collect())
            .unwrap_or_default()
    }

    /// `git diff --stat` summary between the merge base and `head`.
    ///
    /// Best effort for previews; failure collapses to `None`.
    pub fn diff_stat(&self, base: &str, head: &str) -> Option<String> {
        let range = format!("{}...{}", base, head);
        self.run(&["diff", "--stat", &range])
            .ok()
            .map(|out| out.trim_end().to_string())
            .filter(|out| !out.is_empty())
    }
}
