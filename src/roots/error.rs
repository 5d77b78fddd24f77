use crate::differentiation::DifferentiationError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iterations: must be >= 1. got {got}")]
    InvalidMaxIterations { got: usize },

    #[error("invalid bracket: endpoints must be finite and distinct. got [{a}, {b}]")]
    InvalidBracket { a: f64, b: f64 },

    #[error("invalid starting point: must be finite. got {x}")]
    InvalidStart { x: f64 },

    #[error("no sign change on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("derivative vanished at x={x}")]
    ZeroDerivative { x: f64 },

    #[error("secant is flat: f({x0}) == f({x1})")]
    FlatSecant { x0: f64, x1: f64 },

    #[error("degenerate parabola through {x0}, {x1}, {x2}")]
    DegenerateParabola { x0: f64, x1: f64, x2: f64 },

    #[error("Müller step {iteration} leaves the real line (discriminant {discriminant})")]
    ComplexStep { iteration: usize, discriminant: f64 },

    #[error("fixed-point iteration diverges at iteration {iteration}: |g(x) - x| grew to {error}")]
    Diverging { iteration: usize, error: f64 },

    #[error("deflation needs a polynomial of degree >= 1. got {function}")]
    NotPolynomial { function: String },

    #[error("no convergence after {iterations} iterations (last iterate {last})")]
    NoConvergence { iterations: usize, last: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFinite { x: f64, fx: f64 },

    #[error(transparent)]
    Derivative(#[from] DifferentiationError),
}
