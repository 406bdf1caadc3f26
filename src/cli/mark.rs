//! `taskline mark-in-progress` / `mark-done` command implementation

use anyhow::Result;

use super::definition::IdArgs;
use crate::task::{Status, TaskStore};

pub fn run(store: &TaskStore, args: IdArgs, status: Status) -> Result<()> {
    let task = store.mark(args.id, status)?;

    println!("✓ Marked task {} as {}", task.id, task.status);
    println!("{}", super::render_task(&task));
    Ok(())
}
