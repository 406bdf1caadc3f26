//! Taskline - Command-line task tracker with JSON persistence

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskline::cli::{self, Cli, Commands};
use taskline::config;
use taskline::task::{Status, TaskStore};

fn main() -> Result<()> {
    if std::env::var("TASKLINE_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskline=debug")
            .init();
    }

    let cli = Cli::parse();

    // Completions never touch storage
    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "taskline", &mut std::io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let tasks_path = config::resolve_tasks_path(cli.file)?;
    let store = TaskStore::new(tasks_path);

    match command {
        Commands::Add(args) => cli::add::run(&store, args),
        Commands::Update(args) => cli::update::run(&store, args),
        Commands::Delete(args) => cli::delete::run(&store, args),
        Commands::MarkInProgress(args) => cli::mark::run(&store, args, Status::InProgress),
        Commands::MarkDone(args) => cli::mark::run(&store, args, Status::Done),
        Commands::List(args) => cli::list::run(&store, args),
        Commands::Completion { .. } => unreachable!(),
    }
}
