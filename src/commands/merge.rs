use anyhow::{Result, anyhow, bail};
use dialoguer::FuzzySelect;
use dialoguer::theme::ColorfulTheme;

use git_spawn::git::{GitError, Repository};
use git_spawn::styling::{BRANCH, eprintln, format_hint, format_success, println};

use super::confirm;

/// Merge a branch into the current branch, with a short preview first.
///
/// The merge itself is git's: we only pick the source, confirm, and
/// interpret the outcome.
pub fn handle_merge(branch: Option<&str>) -> Result<()> {
    let repo = Repository::current();
    repo.ensure_repository()?;

    let current = repo
        .current_branch()?
        .ok_or_else(|| anyhow!("cannot merge into a detached HEAD"))?;

    let branches = repo.branches();

    let source = match branch {
        Some(name) => {
            if !branches.iter().any(|b| b == name) {
                bail!("no branch named '{}'", name);
            }
            name.to_string()
        }
        None => {
            let candidates: Vec<String> =
                branches.into_iter().filter(|b| *b != current).collect();
            if candidates.is_empty() {
                bail!("no other branches to merge");
            }

            let picked = FuzzySelect::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Branch to merge into '{}'", current))
                .items(&candidates)
                .default(0)
                .interact()?;

            candidates[picked].clone()
        }
    };

    if source == current {
        bail!("'{}' is already checked out", source);
    }

    preview(&repo, &current, &source);

    let confirmed = confirm(&format!("Merge '{}' into '{}'?", source, current), true)?;
    if !confirmed {
        bail!("aborted: nothing merged");
    }

    match repo.merge(&source) {
        Ok(_) => {
            println!(
                "{}",
                format_success(&format!("merged '{}' into '{}'", source, current))
            );
            Ok(())
        }
        Err(GitError::MergeConflict(output)) => {
            let output = output.trim();
            if !output.is_empty() {
                eprintln!("{}", output);
            }
            eprintln!(
                "{}",
                format_hint(
                    "resolve the conflicted files, then `git add` and `git commit`; \
                     or run `git merge --abort` to back out"
                )
            );
            bail!("merge of '{}' stopped on conflicts", source)
        }
        Err(err) => Err(err.into()),
    }
}

/// Best-effort summary of what the merge would bring in.
fn preview(repo: &Repository, current: &str, source: &str) {
    let commits = repo.recent_commits(source, 10);
    if !commits.is_empty() {
        println!("{BRANCH}{}{BRANCH:#} recent commits:", source);
        for line in &commits {
            println!("  {}", line);
        }
    }

    if let Some(stat) = repo.diff_stat(current, source) {
        println!("{}", stat);
    }
}
