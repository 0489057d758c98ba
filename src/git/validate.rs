//! Branch name validation.

use super::GitError;

/// Check a candidate branch name before handing it to git.
///
/// This mirrors a conservative subset of git's ref-name grammar: it rejects
/// the common foot-guns up front so we never start an expensive
/// `worktree add` that git will refuse anyway. Checks run in order and the
/// first failing one supplies the reason. Hierarchical names like
/// `feature/login` are accepted.
pub fn validate_branch_name(name: &str) -> Result<(), GitError> {
    let reject = |reason: String| Err(GitError::InvalidBranchName(reason));

    if let Some(c) = name
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '~' | '^' | ':' | '?' | '*' | '[' | '\\'))
    {
        let shown = if c.is_whitespace() {
            "whitespace".to_string()
        } else {
            format!("'{}'", c)
        };
        return reject(format!("'{}' contains {}", name, shown));
    }

    if name.starts_with('-') || name.starts_with('+') {
        return reject(format!("'{}' starts with '{}'", name, &name[..1]));
    }

    if name.ends_with(".lock") {
        return reject(format!("'{}' ends with '.lock'", name));
    }
    if name.ends_with('.') {
        return reject(format!("'{}' ends with '.'", name));
    }

    if name.contains("..") {
        return reject(format!("'{}' contains '..'", name));
    }
    if name.contains("@{") {
        return reject(format!("'{}' contains '@{{'", name));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("-bad")]
    #[case("+worse")]
    #[case("name..x")]
    #[case("a~b")]
    #[case("a^b")]
    #[case("a:b")]
    #[case("a?b")]
    #[case("a*b")]
    #[case("a[b")]
    #[case("a\\b")]
    #[case("has space")]
    #[case("has\ttab")]
    #[case("trailing.")]
    #[case("lockfile.lock")]
    #[case("stash@{0}")]
    fn rejects(#[case] name: &str) {
        let err = validate_branch_name(name).unwrap_err();
        assert!(matches!(err, GitError::InvalidBranchName(_)));
    }

    #[rstest]
    #[case("feature/login")]
    #[case("fix-bug-123")]
    #[case("release/2.0/rc1")]
    #[case("snake_case_name")]
    fn accepts(#[case] name: &str) {
        assert!(validate_branch_name(name).is_ok());
    }

    #[test]
    fn reason_names_the_offender() {
        let err = validate_branch_name("a~b").unwrap_err();
        assert!(err.to_string().contains("'~'"));

        let err = validate_branch_name("-bad").unwrap_err();
        assert!(err.to_string().contains("starts with '-'"));
    }

    #[test]
    fn lock_suffix_is_reported_specifically() {
        let err = validate_branch_name("lockfile.lock").unwrap_err();
        assert!(err.to_string().contains(".lock"));
    }
}
