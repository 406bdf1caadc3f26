//! Task tracking core
//!
//! - Task model and status lifecycle (todo -> in-progress -> done)
//! - JSON file persistence with full load-mutate-save cycles
//! - CRUD operations with typed failures

pub mod error;
pub mod model;
pub mod store;

pub use error::{Result, TaskError};
pub use model::{Status, Task};
pub use store::TaskStore;
