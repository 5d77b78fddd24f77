mod bracketing;
mod deflation;
mod error;
mod fixed_point;
mod open;
mod report;

pub use bracketing::{aitken_bisection, bisection, false_position};
pub use deflation::{DeflationReport, DeflationStep, deflate};
pub use error::RootError;
pub use fixed_point::fixed_point;
pub use open::{aitken_secant, muller, newton, secant, steffensen};
pub use report::{RootReport, RootStep, StepDetail, aitken};
