//! Command-line interface definition

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "taskline", version, about = "Command-line task tracker")]
pub struct Cli {
    /// Path to the task file (defaults to the configured location)
    #[arg(long, global = true, env = "TASKLINE_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// Update a task's description
    Update(UpdateArgs),

    /// Delete a task
    Delete(IdArgs),

    /// Mark a task as in progress
    MarkInProgress(IdArgs),

    /// Mark a task as done
    MarkDone(IdArgs),

    /// List tasks, optionally filtered by status
    List(ListArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct AddArgs {
    /// Task description (remaining arguments are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub description: Vec<String>,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Task ID
    pub id: u64,

    /// New description (remaining arguments are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub description: Vec<String>,
}

#[derive(Args)]
pub struct IdArgs {
    /// Task ID
    pub id: u64,
}

#[derive(Args)]
pub struct ListArgs {
    /// Status filter (todo, in-progress, done)
    pub status: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
