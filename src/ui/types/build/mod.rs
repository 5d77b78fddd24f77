mod error;
mod function;
mod methods;
mod task;

pub use error::BuildError;

pub use function::build_function;
pub use methods::build_method;
pub use task::build_task;
