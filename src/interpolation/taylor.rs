//! Taylor polynomial `T_n(x) = Σ f^(k)(c) (x - c)^k / k!` around a center `c`.

use serde::Serialize;

use crate::interpolation::InterpolationError;

/// Past this degree `k!` no longer fits in an `f64`.
pub const MAX_DEGREE: usize = 170;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaylorPolynomial {
    center: f64,
    derivatives: Vec<f64>,
}

impl TaylorPolynomial {
    /// `derivatives[k]` is `f^(k)(center)`.
    pub fn new(center: f64, derivatives: Vec<f64>) -> Result<Self, InterpolationError> {
        if !center.is_finite() {
            return Err(InterpolationError::NonFiniteCenter { center });
        }
        if derivatives.is_empty() || derivatives.len() > MAX_DEGREE + 1 {
            return Err(InterpolationError::InvalidDegree {
                got: derivatives.len().saturating_sub(1),
                max: MAX_DEGREE,
            });
        }
        if let Some(order) = derivatives.iter().position(|d| !d.is_finite()) {
            return Err(InterpolationError::NonFiniteDerivative { order, x: center });
        }
        Ok(Self {
            center,
            derivatives,
        })
    }

    /// Samples `f^(k)(center)` for `k = 0..=degree`.
    pub fn from_derivatives<F>(f: F, center: f64, degree: usize) -> Result<Self, InterpolationError>
    where
        F: Fn(u32, f64) -> f64,
    {
        if degree > MAX_DEGREE {
            return Err(InterpolationError::InvalidDegree {
                got: degree,
                max: MAX_DEGREE,
            });
        }
        let derivatives = (0..=degree as u32).map(|k| f(k, center)).collect();
        Self::new(center, derivatives)
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn degree(&self) -> usize {
        self.derivatives.len() - 1
    }

    pub fn derivatives(&self) -> &[f64] {
        &self.derivatives
    }

    /// The individual terms `f^(k)(c) (x - c)^k / k!` at `x`.
    pub fn terms(&self, x: f64) -> Vec<f64> {
        let dx = x - self.center;
        let mut weight = 1.0;
        self.derivatives
            .iter()
            .enumerate()
            .map(|(k, d)| {
                if k > 0 {
                    weight *= dx / k as f64;
                }
                d * weight
            })
            .collect()
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.terms(x).iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn exp_series_around_zero() {
        let t = TaylorPolynomial::from_derivatives(|_, x| x.exp(), 0.0, 10).unwrap();
        assert_eq!(t.degree(), 10);
        assert_relative_eq!(t.eval(1.0), std::f64::consts::E, epsilon = 1e-7);
        let terms = t.terms(1.0);
        assert_relative_eq!(terms[3], 1.0 / 6.0, epsilon = 1e-15);
    }

    #[test]
    fn polynomial_is_reproduced_at_full_degree() {
        // x^2 - 3x + 1 around c = 2: derivatives -1, 1, 2
        let t = TaylorPolynomial::new(2.0, vec![-1.0, 1.0, 2.0]).unwrap();
        for x in [-3.0, 0.0, 5.5] {
            assert_relative_eq!(t.eval(x), x * x - 3.0 * x + 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn degree_zero_is_the_value_at_the_center() {
        let t = TaylorPolynomial::new(1.0, vec![4.0]).unwrap();
        assert_eq!(t.eval(100.0), 4.0);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(
            TaylorPolynomial::from_derivatives(|_, x| x.ln(), -1.0, 2),
            Err(InterpolationError::NonFiniteDerivative { order: 0, x: -1.0 })
        );
        assert!(matches!(
            TaylorPolynomial::from_derivatives(|_, x| x, 0.0, MAX_DEGREE + 1),
            Err(InterpolationError::InvalidDegree { .. })
        ));
        assert!(matches!(
            TaylorPolynomial::new(0.0, vec![]),
            Err(InterpolationError::InvalidDegree { got: 0, .. })
        ));
        assert!(TaylorPolynomial::new(f64::NAN, vec![1.0]).is_err());
    }
}
