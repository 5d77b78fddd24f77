use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    #[error("invalid bounds: a and b must be finite. got a={a}, b={b}")]
    InvalidBounds { a: f64, b: f64 },

    #[error("invalid subinterval count for {rule}: {requirement}. got n={n}")]
    InvalidSubintervals {
        rule: &'static str,
        requirement: &'static str,
        n: usize,
    },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iterations: must be in 1..={max}. got {got}")]
    InvalidMaxIterations { got: usize, max: usize },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteSample { x: f64, fx: f64 },
}
