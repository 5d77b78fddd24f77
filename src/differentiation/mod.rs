mod difference;
mod error;
mod richardson;
pub mod unequal;

pub use difference::{DifferenceScheme, Sample, SamplePoint, second_central};
pub use error::DifferentiationError;
pub use richardson::{Estimation, MAX_ORDER, RichardsonEstimator, extrapolate};
