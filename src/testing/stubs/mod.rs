pub mod counting_function;
pub mod scripted_driver;

pub use counting_function::CountingFunction;
pub use scripted_driver::ScriptedDriver;
