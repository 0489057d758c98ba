//! Parsers for git's line-oriented output.

use std::path::PathBuf;

use indexmap::IndexSet;

use super::Worktree;

/// Parse `git worktree list --porcelain` output.
///
/// The format is a sequence of stanzas, one per worktree, each terminated by
/// a blank line:
///
/// ```text
/// worktree /path/to/main
/// HEAD abcd1234
/// branch refs/heads/main
/// ```
///
/// A single accumulator walks the lines. It is flushed in three places: when
/// a new `worktree` line arrives while a record is pending, on a blank line,
/// and at end of input (git omits the trailing blank line in some versions).
/// Unknown attributes are ignored so newer porcelain fields don't break us.
pub fn parse_worktree_list(output: &str) -> Vec<Worktree> {
    let mut worktrees = Vec::new();
    let mut current: Option<Worktree> = None;

    for line in output.lines() {
        if let Some(path) = line.strip_prefix("worktree ") {
            if let Some(wt) = current.take() {
                worktrees.push(wt);
            }
            current = Some(Worktree::at(PathBuf::from(path)));
        } else if let Some(sha) = line.strip_prefix("HEAD ") {
            if let Some(wt) = current.as_mut() {
                wt.head = Some(sha.to_string());
            }
        } else if let Some(branch_ref) = line.strip_prefix("branch ") {
            if let Some(wt) = current.as_mut() {
                // Keep the full ref; Worktree::branch_name strips refs/heads/
                wt.branch = Some(branch_ref.to_string());
            }
        } else if line == "bare" {
            if let Some(wt) = current.as_mut() {
                wt.bare = true;
            }
        } else if line.starts_with("detached") {
            if let Some(wt) = current.as_mut() {
                wt.detached = true;
            }
        } else if line == "prunable" {
            if let Some(wt) = current.as_mut() {
                wt.prunable = true;
            }
        } else if line.is_empty() {
            if let Some(wt) = current.take() {
                worktrees.push(wt);
            }
        }
        // Anything else (locked, future attributes) is ignored.
    }

    if let Some(wt) = current {
        worktrees.push(wt);
    }

    worktrees
}

/// Normalize `git branch --all` output into a deduplicated list of names.
///
/// Strips the `* ` current-branch marker, the `+`/`-` worktree-checkout
/// markers newer gits print, and the `remotes/origin/` prefix, so a local
/// branch and its origin tracking ref collapse into one entry. The symbolic
/// `HEAD -> origin/main` pointer line is dropped. First occurrence wins, and
/// its position fixes the display order.
///
/// Note the collapse is lossy on purpose: a name returned here does not
/// necessarily have a local ref.
pub fn normalize_branch_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut names: IndexSet<String> = IndexSet::new();

    for line in lines {
        let name = line.strip_prefix('*').unwrap_or(line).trim();
        let name = name
            .strip_prefix('+')
            .or_else(|| name.strip_prefix('-'))
            .map(str::trim_start)
            .unwrap_or(name);
        let name = name.strip_prefix("remotes/origin/").unwrap_or(name);

        if name.is_empty() || name.contains("->") {
            continue;
        }

        names.insert(name.to_string());
    }

    names.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stanzas_in_order() {
        let output = "worktree /path/to/main\nHEAD abcd1234\nbranch refs/heads/main\n\nworktree /path/to/feature\nHEAD efgh5678\nbranch refs/heads/feature\n\n";

        let worktrees = parse_worktree_list(output);
        assert_eq!(worktrees.len(), 2);

        assert_eq!(worktrees[0].path, PathBuf::from("/path/to/main"));
        assert_eq!(worktrees[0].head.as_deref(), Some("abcd1234"));
        assert_eq!(worktrees[0].branch.as_deref(), Some("refs/heads/main"));
        assert_eq!(worktrees[0].branch_name(), Some("main"));
        assert!(!worktrees[0].bare);
        assert!(!worktrees[0].detached);

        assert_eq!(worktrees[1].path, PathBuf::from("/path/to/feature"));
        assert_eq!(worktrees[1].branch_name(), Some("feature"));
    }

    #[test]
    fn trailing_blank_line_is_optional() {
        let with_blank = "worktree /a\nHEAD 111\nbranch refs/heads/a\n\nworktree /b\nHEAD 222\nbranch refs/heads/b\n\n";
        let without_blank =
            "worktree /a\nHEAD 111\nbranch refs/heads/a\n\nworktree /b\nHEAD 222\nbranch refs/heads/b";

        assert_eq!(
            parse_worktree_list(with_blank),
            parse_worktree_list(without_blank)
        );
        assert_eq!(parse_worktree_list(without_blank).len(), 2);
    }

    #[test]
    fn missing_stanza_separator_still_splits_records() {
        // No blank line between stanzas: the next `worktree` line flushes.
        let output = "worktree /a\nbranch refs/heads/a\nworktree /b\nbranch refs/heads/b\n";

        let worktrees = parse_worktree_list(output);
        assert_eq!(worktrees.len(), 2);
        assert_eq!(worktrees[0].branch_name(), Some("a"));
        assert_eq!(worktrees[1].branch_name(), Some("b"));
    }

    #[test]
    fn detached_worktree_has_no_branch() {
        let output = "worktree /a\nbranch refs/heads/main\n\nworktree /b\ndetached\n\n";

        let worktrees = parse_worktree_list(output);
        assert_eq!(worktrees.len(), 2);
        assert_eq!(worktrees[0].branch.as_deref(), Some("refs/heads/main"));
        assert!(worktrees[1].detached);
        assert_eq!(worktrees[1].branch, None);
    }

    #[test]
    fn bare_and_prunable_flags() {
        let output = "worktree /repo\nbare\n\nworktree /stale\nHEAD abcd1234\nprunable\n\n";

        let worktrees = parse_worktree_list(output);
        assert_eq!(worktrees.len(), 2);
        assert!(worktrees[0].bare);
        assert_eq!(worktrees[0].head, None);
        assert!(worktrees[1].prunable);
        assert!(!worktrees[1].bare);
    }

    #[test]
    fn unknown_attributes_are_ignored() {
        let output =
            "worktree /a\nHEAD abcd1234\nbranch refs/heads/main\nlocked reason\nshiny-new-field value\n\n";

        let worktrees = parse_worktree_list(output);
        assert_eq!(worktrees.len(), 1);
        assert_eq!(worktrees[0].branch_name(), Some("main"));
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse_worktree_list("").is_empty());
        assert!(parse_worktree_list("\n\n").is_empty());
    }

    #[test]
    fn attributes_before_first_worktree_line_are_dropped() {
        let output = "HEAD abcd1234\nbranch refs/heads/ghost\n\nworktree /a\nHEAD eeee\n\n";

        let worktrees = parse_worktree_list(output);
        assert_eq!(worktrees.len(), 1);
        assert_eq!(worktrees[0].path, PathBuf::from("/a"));
        assert_eq!(worktrees[0].branch, None);
    }

    #[test]
    fn normalizes_markers_and_remote_prefixes() {
        let lines = [
            "* main",
            "  feature-x",
            "  remotes/origin/feature-x",
            "+ feature-y",
        ];
        assert_eq!(
            normalize_branch_lines(lines),
            vec!["main", "feature-x", "feature-y"]
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let lines = [
            "* main",
            "  feature-x",
            "  remotes/origin/feature-x",
            "- locked-out",
        ];
        let once = normalize_branch_lines(lines);
        let twice = normalize_branch_lines(once.iter().map(String::as_str));
        assert_eq!(once, twice);
    }

    #[test]
    fn drops_empty_and_symbolic_head_lines() {
        let lines = ["", "   ", "  remotes/origin/HEAD -> origin/main", "* main"];
        assert_eq!(normalize_branch_lines(lines), vec!["main"]);
    }

    #[test]
    fn preserves_first_occurrence_order() {
        let lines = ["  zeta", "* alpha", "  remotes/origin/zeta", "  beta"];
        assert_eq!(normalize_branch_lines(lines), vec!["zeta", "alpha", "beta"]);
    }
}
