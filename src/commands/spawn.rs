use anyhow::{Context, Result, bail};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{FuzzySelect, Input};

use git_spawn::config::SpawnConfig;
use git_spawn::editor;
use git_spawn::git::{Repository, partition_branches, validate_branch_name, worktree_for_branch};
use git_spawn::styling::{format_hint, format_success, println};

use super::{confirm, repo_name};

/// Create or enter a worktree for a branch, then hand off to the editor.
pub fn handle_spawn(
    branch: Option<String>,
    from_existing: bool,
    editor_flag: Option<String>,
    config: &SpawnConfig,
) -> Result<()> {
    let repo = Repository::current();
    repo.ensure_repository()?;
    let repo_root = repo.repo_root()?;
    let repo_name = repo_name(&repo_root)?;

    let branch = match branch {
        Some(name) => {
            validate_branch_name(&name)?;
            name
        }
        None => choose_branch(&repo, from_existing)?,
    };

    let editor_cmd = editor::resolve(editor_flag, config);

    // Re-enter an existing worktree instead of erroring.
    let worktrees = repo.list_worktrees();
    if let Some(existing) = worktree_for_branch(&branch, &worktrees, &repo_root) {
        println!(
            "{}",
            format_hint(&format!(
                "worktree for '{}' already exists at {}",
                branch,
                existing.path.display()
            ))
        );
        editor::launch(&editor_cmd, &existing.path);
        return Ok(());
    }

    let worktree_path = repo_root.join(config.format_path(&repo_name, &branch));

    if worktree_path.exists() {
        let overwrite = confirm(
            &format!(
                "{} already exists. Remove it and spawn a fresh worktree?",
                worktree_path.display()
            ),
            false,
        )?;
        if !overwrite {
            bail!("aborted: existing directory left in place");
        }
        // A registered-but-stale worktree needs `git worktree remove`; a
        // plain directory needs the filesystem.
        if repo.remove_worktree(&worktree_path, true).is_err() {
            std::fs::remove_dir_all(&worktree_path)
                .with_context(|| format!("failed to remove {}", worktree_path.display()))?;
        }
    }

    let create = !repo.branch_exists(&branch);
    repo.add_worktree(&worktree_path, &branch, create)?;

    let what = if create {
        format!("created branch '{}' and its worktree", branch)
    } else {
        format!("spawned worktree for '{}'", branch)
    };
    println!("{}", format_success(&what));
    println!("{}", format_hint(&worktree_path.display().to_string()));

    editor::launch(&editor_cmd, &worktree_path);
    Ok(())
}

/// Interactive branch choice when no name was given on the command line.
///
/// The default flow asks for a new branch name and falls through to the
/// existing-branch picker on empty input; `--from-existing` skips straight
/// to the picker. The picker only offers branches without a worktree.
fn choose_branch(repo: &Repository, from_existing: bool) -> Result<String> {
    if !from_existing {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("New branch name (empty to pick an existing branch)")
            .allow_empty(true)
            .validate_with(|input: &String| validate_branch_name(input))
            .interact_text()
            .context("branch name prompt failed")?;

        if !name.is_empty() {
            return Ok(name);
        }
    }

    let branches = repo.branches();
    let worktrees = repo.list_worktrees();
    let mut partition = partition_branches(&branches, &worktrees);

    if partition.without_worktree.is_empty() {
        bail!("every branch already has a worktree");
    }

    let picked = FuzzySelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Branch to spawn a worktree for")
        .items(&partition.without_worktree)
        .default(0)
        .interact()
        .context("branch selection failed")?;

    Ok(partition.without_worktree.swap_remove(picked))
}
