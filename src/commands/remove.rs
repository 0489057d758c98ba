use anyhow::{Result, anyhow, bail};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

use git_spawn::git::{Repository, Worktree, worktree_for_branch};
use git_spawn::styling::{format_success, println};

use super::confirm;

/// Remove a branch's worktree after confirmation.
pub fn handle_remove(branch: Option<&str>) -> Result<()> {
    let repo = Repository::current();
    repo.ensure_repository()?;
    let repo_root = repo.repo_root()?;

    let worktrees = repo.list_worktrees();

    let target: Worktree = match branch {
        Some(name) => worktree_for_branch(name, &worktrees, &repo_root)
            .cloned()
            .ok_or_else(|| anyhow!("no worktree found for branch '{}'", name))?,
        None => {
            // The main worktree and bare entries are not removable.
            let removable: Vec<&Worktree> = worktrees
                .iter()
                .filter(|wt| wt.path != repo_root && !wt.bare)
                .collect();
            if removable.is_empty() {
                bail!("no removable worktrees");
            }

            let labels: Vec<String> = removable.iter().map(|wt| describe(wt)).collect();
            let picked = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Worktree to remove")
                .items(&labels)
                .default(0)
                .interact()?;

            removable[picked].clone()
        }
    };

    if target.path == repo_root {
        bail!("refusing to remove the main worktree");
    }

    let confirmed = confirm(&format!("Remove worktree {}?", target.path.display()), false)?;
    if !confirmed {
        bail!("aborted: worktree left in place");
    }

    repo.remove_worktree(&target.path, false)?;
    println!(
        "{}",
        format_success(&format!("removed worktree {}", target.path.display()))
    );
    Ok(())
}

fn describe(wt: &Worktree) -> String {
    match wt.branch_name() {
        Some(branch) => format!("{}  ({})", branch, wt.path.display()),
        None if wt.detached => format!("(detached)  ({})", wt.path.display()),
        None => wt.path.display().to_string(),
    }
}
