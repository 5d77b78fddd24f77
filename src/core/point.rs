use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// An `(x, y)` sample used as an interpolation node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterpolatedPoint {
    x: f64,
    y: f64,
}

impl InterpolatedPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Samples `f` at `x`.
    pub fn sample<F: Fn(f64) -> f64>(f: F, x: f64) -> Self {
        Self { x, y: f(x) }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for InterpolatedPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Display for InterpolatedPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.p$}, {:.p$})", self.x, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_evaluates_function() {
        let p = InterpolatedPoint::sample(|x| x * x, 3.0);
        assert_eq!(p.x(), 3.0);
        assert_eq!(p.y(), 9.0);
        assert!(p.is_finite());
    }

    #[test]
    fn display_honours_precision() {
        let p = InterpolatedPoint::from((1.0, 2.0 / 3.0));
        assert_eq!(format!("{p:.2}"), "(1.00, 0.67)");
        assert_eq!(format!("{}", InterpolatedPoint::new(1.5, -2.0)), "(1.5, -2)");
    }

    #[test]
    fn non_finite_detected() {
        assert!(!InterpolatedPoint::new(0.0, f64::NAN).is_finite());
    }
}
