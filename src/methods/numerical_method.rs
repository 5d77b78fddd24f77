use thiserror::Error;

use crate::core::CatalogFunction;
use crate::differentiation::DifferentiationError;
use crate::integration::IntegrationError;
use crate::interpolation::InterpolationError;
use crate::methods::Outcome;
use crate::roots::RootError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MethodError {
    #[error("differentiation failed: {0}")]
    Differentiation(#[from] DifferentiationError),

    #[error("integration failed: {0}")]
    Integration(#[from] IntegrationError),

    #[error("root finding failed: {0}")]
    Root(#[from] RootError),

    #[error("interpolation failed: {0}")]
    Interpolation(#[from] InterpolationError),
}

/// A configured numerical method that can be applied to a catalog function.
///
/// Implementations hold their own parameters (point, step, bounds...) and are
/// stateless across calls.
pub trait NumericalMethod: Send + Sync {
    /// Human readable name, used as the report title.
    fn name(&self) -> &'static str;

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError>;
}
