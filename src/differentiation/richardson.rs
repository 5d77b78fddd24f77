//! Richardson extrapolation of finite-difference derivatives.
//!
//! Two approximations `A(h)` and `A(h/2)` of the same base formula are
//! combined so that their leading `O(h^p)` error terms cancel:
//!
//! ```text
//! R = (2^p A(h/2) - A(h)) / (2^p - 1)
//! ```
//!
//! With the central formula (`p = 2`) the result is `O(h^4)` accurate for
//! functions with a continuous fourth derivative. Smoothness is not checked:
//! for rougher functions `R` is still well defined but the order is lost.

use serde::Serialize;
use tracing::debug;

use crate::differentiation::difference::{Sampler, validate_inputs};
use crate::differentiation::{DifferenceScheme, DifferentiationError, Sample, SamplePoint};

/// Largest error order whose weight `2^p - 1` is exact in `f64`.
pub const MAX_ORDER: u32 = 52;

/// Combines two approximations computed at `h` and `h/2`.
///
/// Only meaningful for `1 <= p <= MAX_ORDER`.
#[inline]
pub fn extrapolate(a_h: f64, a_h2: f64, p: u32) -> f64 {
    let w = f64::from(p).exp2();
    (w * a_h2 - a_h) / (w - 1.0)
}

/// Stateless derivative estimator; safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RichardsonEstimator {
    scheme: DifferenceScheme,
    order: u32,
}

impl Default for RichardsonEstimator {
    fn default() -> Self {
        Self::new(DifferenceScheme::Central)
    }
}

impl RichardsonEstimator {
    pub fn new(scheme: DifferenceScheme) -> Self {
        Self {
            scheme,
            order: scheme.error_order(),
        }
    }

    /// Overrides the error order taken from the scheme.
    pub fn with_order(mut self, p: u32) -> Result<Self, DifferentiationError> {
        if !(1..=MAX_ORDER).contains(&p) {
            return Err(DifferentiationError::InvalidOrder { p });
        }
        self.order = p;
        Ok(self)
    }

    pub fn scheme(&self) -> DifferenceScheme {
        self.scheme
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    /// Estimates `f'(x)` from steps `h` and `h/2`.
    ///
    /// `h` may be negative; the central result is then identical to the one
    /// for `|h|`. Step and point are validated before `f` is called.
    pub fn estimate<F>(&self, f: F, x: f64, h: f64) -> Result<Estimation, DifferentiationError>
    where
        F: Fn(f64) -> f64,
    {
        validate_inputs(x, h)?;

        let mut sampler = Sampler::new(&f, x, h);
        let coarse = sampler.difference(self.scheme, false)?;
        let fine = sampler.difference(self.scheme, true)?;
        let value = extrapolate(coarse, fine, self.order);

        debug!(
            target: "numlab::differentiation",
            x, h, coarse, fine, value, scheme = %self.scheme, "richardson estimate"
        );

        Ok(Estimation {
            x,
            h,
            scheme: self.scheme,
            order: self.order,
            samples: sampler.into_samples(),
            coarse,
            fine,
            value,
            reference: None,
        })
    }
}

/// Everything computed by one [`RichardsonEstimator::estimate`] call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimation {
    pub x: f64,
    pub h: f64,
    pub scheme: DifferenceScheme,
    pub order: u32,
    /// Function samples in evaluation order.
    pub samples: Vec<Sample>,
    /// `A(h)`
    pub coarse: f64,
    /// `A(h/2)`
    pub fine: f64,
    /// Extrapolated derivative `R`.
    pub value: f64,
    /// Exact derivative, when the caller knows it.
    pub reference: Option<f64>,
}

impl Estimation {
    pub fn with_reference(mut self, exact: f64) -> Self {
        self.reference = Some(exact);
        self
    }

    /// `|R - f'(x)|`, if a reference derivative was attached.
    pub fn absolute_error(&self) -> Option<f64> {
        self.reference.map(|r| (self.value - r).abs())
    }

    pub fn sample(&self, point: SamplePoint) -> Option<&Sample> {
        self.samples.iter().find(|s| s.point == point)
    }
}
