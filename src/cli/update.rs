//! `taskline update` command implementation

use anyhow::Result;

use super::definition::UpdateArgs;
use crate::task::TaskStore;

pub fn run(store: &TaskStore, args: UpdateArgs) -> Result<()> {
    let description = super::join_description(&args.description);
    let task = store.update(args.id, &description)?;

    println!("✓ Updated task {}", task.id);
    println!("{}", super::render_task(&task));
    Ok(())
}
