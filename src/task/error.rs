use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("description required")]
    EmptyDescription,

    #[error("invalid filter: {0} (expected todo, in-progress, or done)")]
    InvalidFilter(String),

    #[error("no task with id {0}")]
    NotFound(u64),

    #[error("task ids exhausted")]
    IdsExhausted,

    #[error("task file is not a valid task list: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
