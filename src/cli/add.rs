//! `taskline add` command implementation

use anyhow::Result;

use super::definition::AddArgs;
use crate::task::TaskStore;

pub fn run(store: &TaskStore, args: AddArgs) -> Result<()> {
    let description = super::join_description(&args.description);
    let task = store.add(&description)?;

    println!("✓ Added task {}", task.id);
    println!("{}", super::render_task(&task));
    Ok(())
}
