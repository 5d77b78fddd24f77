mod lagrange;
mod taylor;

pub use lagrange::LagrangePolynomial;
pub use taylor::{MAX_DEGREE as MAX_TAYLOR_DEGREE, TaylorPolynomial};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    #[error("at least one node is required")]
    Empty,

    #[error("duplicate abscissa x={x} at nodes {first} and {second}")]
    DuplicateNode { first: usize, second: usize, x: f64 },

    #[error("node {index} is not finite")]
    NonFinite { index: usize },

    #[error("invalid node count: need at least 1. got {got}")]
    InvalidNodeCount { got: usize },

    #[error("invalid Taylor degree: must be in 0..={max}. got {got}")]
    InvalidDegree { got: usize, max: usize },

    #[error("derivative of order {order} is not finite at x={x}")]
    NonFiniteDerivative { order: usize, x: f64 },

    #[error("expansion center {center} is not finite")]
    NonFiniteCenter { center: f64 },
}
