//! CLI command implementations

pub mod add;
pub mod definition;
pub mod delete;
pub mod list;
pub mod mark;
pub mod update;

pub use definition::{Cli, Commands};

use crate::task::Task;

const SEPARATOR_WIDTH: usize = 30;

/// Render a task as its three labeled lines plus a separator.
pub fn render_task(task: &Task) -> String {
    format!(
        "ID:          {}\nDescription: {}\nStatus:      {}\n{}",
        task.id,
        task.description,
        task.status,
        "-".repeat(SEPARATOR_WIDTH)
    )
}

/// Join positional description arguments the way a shell user expects.
pub fn join_description(parts: &[String]) -> String {
    parts.join(" ")
}
