mod cli;
mod commands;

use std::process;

use clap::Parser;

use cli::{Cli, Commands};
use git_spawn::config::SpawnConfig;
use git_spawn::styling::{eprintln, format_error};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("{}", format_error(&format!("{:#}", err)));
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = SpawnConfig::load()?;

    match cli.command {
        Some(Commands::Remove { branch }) => commands::handle_remove(branch.as_deref()),
        Some(Commands::Merge { branch }) => commands::handle_merge(branch.as_deref()),
        None if cli.list => commands::handle_list(),
        None => commands::handle_spawn(cli.branch, cli.from_existing, cli.editor, &config),
    }
}
