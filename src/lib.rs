pub mod core;
pub mod differentiation;
pub mod integration;
pub mod interpolation;
pub mod methods;
pub mod report;
pub mod roots;
pub mod tasks;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
