//! `taskline list` command implementation

use anyhow::Result;

use super::definition::ListArgs;
use crate::task::{Status, TaskError, TaskStore};

pub fn run(store: &TaskStore, args: ListArgs) -> Result<()> {
    // Filter validity is checked before any storage access
    let filter = match &args.status {
        Some(s) => Some(
            Status::parse(s).ok_or_else(|| TaskError::InvalidFilter(s.clone()))?,
        ),
        None => None,
    };

    let tasks = store.list(filter)?;

    if tasks.is_empty() {
        match filter {
            Some(status) => println!("No {} tasks found.", status),
            None => println!("No tasks found."),
        }
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    for task in &tasks {
        println!("{}", super::render_task(task));
    }
    println!("\nTotal: {} tasks", tasks.len());

    Ok(())
}
