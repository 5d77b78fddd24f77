use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use strum_macros::IntoStaticStr;

use crate::differentiation::DifferentiationError;

/// Base finite-difference formula for a first derivative.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DifferenceScheme {
    Forward,
    Backward,
    #[default]
    Central,
}

impl Display for DifferenceScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Where a sample sits relative to the evaluation point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SamplePoint {
    Center,
    PlusH,
    MinusH,
    PlusHalfH,
    MinusHalfH,
}

impl SamplePoint {
    /// Abscissa of this stencil point for the given `x` and `h`.
    #[inline]
    pub fn abscissa(self, x: f64, h: f64) -> f64 {
        match self {
            SamplePoint::Center => x,
            SamplePoint::PlusH => x + h,
            SamplePoint::MinusH => x - h,
            SamplePoint::PlusHalfH => x + h / 2.0,
            SamplePoint::MinusHalfH => x - h / 2.0,
        }
    }
}

impl Display for SamplePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SamplePoint::Center => "x",
            SamplePoint::PlusH => "x+h",
            SamplePoint::MinusH => "x-h",
            SamplePoint::PlusHalfH => "x+h/2",
            SamplePoint::MinusHalfH => "x-h/2",
        };
        write!(f, "{s}")
    }
}

/// One function evaluation taken while differentiating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub point: SamplePoint,
    pub x: f64,
    pub fx: f64,
}

impl DifferenceScheme {
    /// Leading truncation-error order `p` of the formula, `O(h^p)`.
    pub fn error_order(self) -> u32 {
        match self {
            DifferenceScheme::Forward | DifferenceScheme::Backward => 1,
            DifferenceScheme::Central => 2,
        }
    }

    /// Upper and lower stencil points, at step `h` or `h/2`.
    pub(crate) fn stencil(self, half: bool) -> (SamplePoint, SamplePoint) {
        let (plus, minus) = if half {
            (SamplePoint::PlusHalfH, SamplePoint::MinusHalfH)
        } else {
            (SamplePoint::PlusH, SamplePoint::MinusH)
        };
        match self {
            DifferenceScheme::Forward => (plus, SamplePoint::Center),
            DifferenceScheme::Backward => (SamplePoint::Center, minus),
            DifferenceScheme::Central => (plus, minus),
        }
    }

    pub(crate) fn divisor(self, step: f64) -> f64 {
        match self {
            DifferenceScheme::Central => 2.0 * step,
            _ => step,
        }
    }

    /// Single finite-difference approximation of `f'(x)` with step `h`.
    pub fn approximate<F>(self, f: F, x: f64, h: f64) -> Result<f64, DifferentiationError>
    where
        F: Fn(f64) -> f64,
    {
        validate_inputs(x, h)?;
        let mut sampler = Sampler::new(&f, x, h);
        sampler.difference(self, false)
    }
}

/// Second derivative by the three-point central formula.
pub fn second_central<F>(f: F, x: f64, h: f64) -> Result<f64, DifferentiationError>
where
    F: Fn(f64) -> f64,
{
    validate_inputs(x, h)?;
    let mut sampler = Sampler::new(&f, x, h);
    let up = sampler.value(SamplePoint::PlusH)?;
    let mid = sampler.value(SamplePoint::Center)?;
    let down = sampler.value(SamplePoint::MinusH)?;
    Ok((up - 2.0 * mid + down) / (h * h))
}

pub(crate) fn validate_inputs(x: f64, h: f64) -> Result<(), DifferentiationError> {
    if h == 0.0 || !h.is_finite() {
        return Err(DifferentiationError::InvalidStep { h });
    }
    if !x.is_finite() {
        return Err(DifferentiationError::InvalidPoint { x });
    }
    Ok(())
}

/// Evaluates `f` on stencil points, at most once per point.
pub(crate) struct Sampler<'a, F> {
    f: &'a F,
    x: f64,
    h: f64,
    samples: Vec<Sample>,
}

impl<'a, F: Fn(f64) -> f64> Sampler<'a, F> {
    pub(crate) fn new(f: &'a F, x: f64, h: f64) -> Self {
        Self {
            f,
            x,
            h,
            samples: Vec::with_capacity(4),
        }
    }

    pub(crate) fn value(&mut self, point: SamplePoint) -> Result<f64, DifferentiationError> {
        if let Some(s) = self.samples.iter().find(|s| s.point == point) {
            return Ok(s.fx);
        }
        let x = point.abscissa(self.x, self.h);
        let fx = (self.f)(x);
        if !fx.is_finite() {
            return Err(DifferentiationError::NonFiniteSample { point, x, fx });
        }
        self.samples.push(Sample { point, x, fx });
        Ok(fx)
    }

    pub(crate) fn difference(
        &mut self,
        scheme: DifferenceScheme,
        half: bool,
    ) -> Result<f64, DifferentiationError> {
        let (upper, lower) = scheme.stencil(half);
        let fu = self.value(upper)?;
        let fl = self.value(lower)?;
        let step = if half { self.h / 2.0 } else { self.h };
        Ok((fu - fl) / scheme.divisor(step))
    }

    pub(crate) fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn error_orders() {
        assert_eq!(DifferenceScheme::Forward.error_order(), 1);
        assert_eq!(DifferenceScheme::Backward.error_order(), 1);
        assert_eq!(DifferenceScheme::Central.error_order(), 2);
        assert_eq!(DifferenceScheme::default(), DifferenceScheme::Central);
    }

    #[test]
    fn schemes_on_a_quadratic() {
        // f = x^2, f'(1) = 2; forward/backward carry an h*f''/2 = h bias
        let f = |x: f64| x * x;
        let h = 0.1;
        assert_relative_eq!(
            DifferenceScheme::Forward.approximate(f, 1.0, h).unwrap(),
            2.0 + h,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            DifferenceScheme::Backward.approximate(f, 1.0, h).unwrap(),
            2.0 - h,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            DifferenceScheme::Central.approximate(f, 1.0, h).unwrap(),
            2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn second_derivative_of_cubic() {
        // f = x^3, f''(2) = 12, central formula exact up to rounding for cubics
        let v = second_central(|x| x * x * x, 2.0, 0.01).unwrap();
        assert_relative_eq!(v, 12.0, epsilon = 1e-6);
    }

    #[test]
    fn rejects_zero_and_non_finite_steps() {
        for h in [0.0, f64::NAN, f64::INFINITY] {
            let err = DifferenceScheme::Central.approximate(|x| x, 1.0, h).unwrap_err();
            assert!(matches!(err, DifferentiationError::InvalidStep { .. }));
        }
        let err = second_central(|x| x, f64::NAN, 0.1).unwrap_err();
        assert!(matches!(err, DifferentiationError::InvalidPoint { .. }));
    }

    #[test]
    fn non_finite_sample_names_point() {
        let err = DifferenceScheme::Backward
            .approximate(|x: f64| 1.0 / x, 0.1, 0.1)
            .unwrap_err();
        match err {
            DifferentiationError::NonFiniteSample { point, x, .. } => {
                assert_eq!(point, SamplePoint::MinusH);
                assert_eq!(x, 0.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn labels() {
        assert_eq!(SamplePoint::PlusHalfH.to_string(), "x+h/2");
        assert_eq!(DifferenceScheme::Central.to_string(), "central");
    }
}
