//! `taskline delete` command implementation

use anyhow::Result;

use super::definition::IdArgs;
use crate::task::TaskStore;

pub fn run(store: &TaskStore, args: IdArgs) -> Result<()> {
    store.delete(args.id)?;

    println!("✓ Deleted task {}", args.id);
    Ok(())
}
