mod solve_task;

pub use solve_task::{SolveTask, TaskError};
