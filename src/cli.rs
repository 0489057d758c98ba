use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spawn")]
#[command(about = "Spawn Git worktrees straight into your editor")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Branch to create or enter a worktree for (interactive when omitted)
    pub branch: Option<String>,

    /// List worktrees instead of creating one
    #[arg(short = 'l', long, conflicts_with = "branch")]
    pub list: bool,

    /// Pick from existing branches that have no worktree yet
    #[arg(short = 'x', long = "from-existing", conflicts_with = "branch")]
    pub from_existing: bool,

    /// Editor command for this run (overrides config and $EDITOR)
    #[arg(long, value_name = "CMD")]
    pub editor: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Remove a branch's worktree
    Remove {
        /// Branch whose worktree to remove (interactive when omitted)
        branch: Option<String>,
    },

    /// Merge a branch into the current branch
    Merge {
        /// Branch to merge (interactive when omitted)
        branch: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_bare_branch_argument() {
        let cli = Cli::parse_from(["spawn", "feature-x"]);
        assert_eq!(cli.branch.as_deref(), Some("feature-x"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_remove_subcommand() {
        let cli = Cli::parse_from(["spawn", "remove", "feature-x"]);
        match cli.command {
            Some(Commands::Remove { branch }) => assert_eq!(branch.as_deref(), Some("feature-x")),
            _ => panic!("expected remove subcommand"),
        }
    }

    #[test]
    fn list_conflicts_with_branch() {
        assert!(Cli::try_parse_from(["spawn", "--list", "feature-x"]).is_err());
    }
}
