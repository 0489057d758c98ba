use anyhow::Result;

use git_spawn::git::Repository;
use git_spawn::styling::{BRANCH, CURRENT, HINT, format_hint, println};

/// Print every worktree git knows about, current one highlighted.
pub fn handle_list() -> Result<()> {
    let repo = Repository::current();
    repo.ensure_repository()?;
    let repo_root = repo.repo_root()?;

    let worktrees = repo.list_worktrees();
    if worktrees.is_empty() {
        println!("{}", format_hint("no worktrees"));
        return Ok(());
    }

    for wt in &worktrees {
        if wt.path == repo_root {
            println!("{CURRENT}{}{CURRENT:#}", wt.path.display());
        } else {
            println!("{}", wt.path.display());
        }

        if let Some(head) = &wt.head {
            let short = &head[..8.min(head.len())];
            println!("  {HINT}HEAD:{HINT:#} {}", short);
        }
        if let Some(branch) = wt.branch_name() {
            println!("  {HINT}branch:{HINT:#} {BRANCH}{}{BRANCH:#}", branch);
        }
        if wt.detached {
            println!("  {HINT}(detached){HINT:#}");
        }
        if wt.bare {
            println!("  {HINT}(bare){HINT:#}");
        }
        if wt.prunable {
            println!("  {HINT}(prunable){HINT:#}");
        }

        println!();
    }

    Ok(())
}
