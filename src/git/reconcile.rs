//! Cross-referencing of branch names against worktree records.
//!
//! Pure functions over already-parsed data, so the menu logic is testable
//! without a live git process.

use std::path::Path;

use super::Worktree;

/// Branches that are the integration trunk never get offered a worktree.
const PROTECTED_BRANCHES: [&str; 2] = ["main", "master"];

/// Result of splitting a branch set by worktree presence.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BranchPartition {
    pub with_worktree: Vec<String>,
    pub without_worktree: Vec<String>,
}

/// Directory name this tool gives a worktree it creates itself.
///
/// Slashes in hierarchical branch names become dashes so the result is a
/// single path segment. Must stay in sync with the `{repo}-{branch}`
/// rendering in the config template.
pub fn worktree_dir_name(repo_name: &str, branch: &str) -> String {
    format!("{}-{}", repo_name, branch.replace(['/', '\\'], "-"))
}

/// Find the worktree record checked out to `branch`.
///
/// A record matches when its `branch` ref (short name) equals the branch, or
/// when its directory is named by this tool's own `<repo>-<branch>` scheme.
/// The scan is first-match-wins over git's emission order, so ref equality
/// beats the naming fallback whenever both would match different records.
pub fn worktree_for_branch<'a>(
    branch: &str,
    worktrees: &'a [Worktree],
    repo_root: &Path,
) -> Option<&'a Worktree> {
    let fallback_name = repo_root
        .file_name()
        .and_then(|name| name.to_str())
        .map(|repo| worktree_dir_name(repo, branch));

    worktrees.iter().find(|wt| {
        if wt.branch_name() == Some(branch) {
            return true;
        }
        match (&fallback_name, wt.path.file_name().and_then(|n| n.to_str())) {
            (Some(expected), Some(dir)) => expected.as_str() == dir,
            _ => false,
        }
    })
}

/// Split branches into those with a checked-out worktree and those without.
///
/// A branch counts as having a worktree only on an exact `refs/heads/<name>`
/// ref match; the naming fallback does not apply here. `main` and `master`
/// are never reported as worktree-less so the interactive menus don't offer
/// to spawn a worktree for the trunk.
pub fn partition_branches(branches: &[String], worktrees: &[Worktree]) -> BranchPartition {
    let mut partition = BranchPartition::default();

    for branch in branches {
        let full_ref = format!("refs/heads/{}", branch);
        let has_worktree = worktrees
            .iter()
            .any(|wt| wt.branch.as_deref() == Some(full_ref.as_str()));

        if has_worktree {
            partition.with_worktree.push(branch.clone());
        } else if !PROTECTED_BRANCHES.contains(&branch.as_str()) {
            partition.without_worktree.push(branch.clone());
        }
    }

    partition
}
