//! Differentiation error types.
//!
//! ┌ step / point / order validation, raised before any evaluation
//! ├ non-finite function samples, naming the offending stencil point
//! └ malformed tabulated data for unequal-spacing formulas

use crate::differentiation::SamplePoint;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DifferentiationError {
    #[error("invalid step: h must be finite and non-zero. got h={h}")]
    InvalidStep { h: f64 },

    #[error("invalid evaluation point: x must be finite. got x={x}")]
    InvalidPoint { x: f64 },

    #[error(
        "invalid error order: p must be in 1..={max}. got p={p}",
        max = crate::differentiation::MAX_ORDER
    )]
    InvalidOrder { p: u32 },

    #[error("function non-finite at {point} (x={x}): f(x)={fx}")]
    NonFiniteSample { point: SamplePoint, x: f64, fx: f64 },

    #[error("length mismatch: {xs} abscissae but {ys} ordinates")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("need at least {needed} points. got {got}")]
    TooFewPoints { needed: usize, got: usize },

    #[error("tabulated value non-finite at index {index} (x={x}): y={y}")]
    NonFiniteOrdinate { index: usize, x: f64, y: f64 },

    #[error("abscissae must be finite and strictly increasing (violated at index {index})")]
    NotIncreasing { index: usize },

    #[error("index {index} out of range for a {scheme} difference over {len} points")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        scheme: &'static str,
    },
}
