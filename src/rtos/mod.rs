pub mod scheduler;
pub mod task;

pub use scheduler::Scheduler;
pub use task::{RegistryFull, TaskFn, TaskId, TaskRegistry};
