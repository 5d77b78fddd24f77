//! All roots of a real polynomial by repeated deflation.
//!
//! Each pass takes the smallest-magnitude eigenvalue of the companion matrix
//! of the current polynomial and divides it out: a real root by synthetic
//! division, a complex root together with its conjugate by the real
//! quadratic factor `x² - 2Re(z)x + |z|²`, so the quotient stays real.

use nalgebra::{Complex, DMatrix};
use tracing::debug;

use crate::roots::RootError;

/// Imaginary parts below this, relative to `max(1, |z|)`, are rounding noise.
const REAL_ROOT_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeflationStep {
    /// Degree of the polynomial the root was removed from.
    pub degree: usize,
    pub root: Complex<f64>,
    /// `|p(root)|` on the original polynomial.
    pub residual: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeflationReport {
    pub degree: usize,
    pub steps: Vec<DeflationStep>,
}

impl DeflationReport {
    pub fn roots(&self) -> impl Iterator<Item = Complex<f64>> + '_ {
        self.steps.iter().map(|s| s.root)
    }

    pub fn real_roots(&self) -> impl Iterator<Item = f64> + '_ {
        self.roots().filter(|z| z.im == 0.0).map(|z| z.re)
    }

    pub fn max_residual(&self) -> f64 {
        self.steps.iter().map(|s| s.residual).fold(0.0, f64::max)
    }
}

/// Finds every root of `c[0] + c[1] x + ... + c[n] x^n`.
///
/// Trailing zero coefficients are ignored; what remains must have degree
/// at least one.
pub fn deflate(coefficients: &[f64]) -> Result<DeflationReport, RootError> {
    let not_polynomial = || RootError::NotPolynomial {
        function: format!("{coefficients:?}"),
    };
    if coefficients.iter().any(|c| !c.is_finite()) {
        return Err(not_polynomial());
    }
    let len = coefficients
        .iter()
        .rposition(|c| *c != 0.0)
        .map_or(0, |i| i + 1);
    if len < 2 {
        return Err(not_polynomial());
    }

    let original = &coefficients[..len];
    let degree = len - 1;
    let mut poly = original.to_vec();
    let mut steps = Vec::with_capacity(degree);

    while poly.len() > 1 {
        let current = poly.len() - 1;
        let z = smallest_root(&poly);
        let scale = z.norm().max(1.0);

        if z.im.abs() <= REAL_ROOT_TOLERANCE * scale || current == 1 {
            let root = Complex::new(z.re, 0.0);
            steps.push(step(original, current, root));
            poly = divide_linear(&poly, z.re);
        } else {
            for root in [z, z.conj()] {
                steps.push(step(original, current, root));
            }
            poly = divide_quadratic(&poly, 2.0 * z.re, z.norm_sqr());
        }
        debug!(target: "numlab::roots", degree = current, re = z.re, im = z.im, "deflated");
    }

    Ok(DeflationReport { degree, steps })
}

fn step(original: &[f64], degree: usize, root: Complex<f64>) -> DeflationStep {
    DeflationStep {
        degree,
        root,
        residual: horner(original, root).norm(),
    }
}

fn smallest_root(poly: &[f64]) -> Complex<f64> {
    let n = poly.len() - 1;
    if n == 1 {
        return Complex::new(-poly[0] / poly[1], 0.0);
    }
    let lead = poly[n];
    // first row holds -a_{n-1} .. -a_0 of the monic polynomial
    let companion = DMatrix::from_fn(n, n, |i, j| {
        if i == 0 {
            -poly[n - 1 - j] / lead
        } else if i == j + 1 {
            1.0
        } else {
            0.0
        }
    });
    companion
        .complex_eigenvalues()
        .iter()
        .copied()
        .min_by(|a, b| a.norm().total_cmp(&b.norm()))
        .unwrap_or_else(|| Complex::new(0.0, 0.0))
}

fn horner(poly: &[f64], z: Complex<f64>) -> Complex<f64> {
    poly.iter()
        .rev()
        .fold(Complex::new(0.0, 0.0), |acc, &c| acc * z + c)
}

/// Quotient of `p(x) / (x - r)`, remainder dropped.
fn divide_linear(poly: &[f64], r: f64) -> Vec<f64> {
    let n = poly.len() - 1;
    let mut q = vec![0.0; n];
    let mut carry = 0.0;
    for k in (1..=n).rev() {
        carry = poly[k] + r * carry;
        q[k - 1] = carry;
    }
    q
}

/// Quotient of `p(x) / (x² - s x + t)`, remainder dropped.
fn divide_quadratic(poly: &[f64], s: f64, t: f64) -> Vec<f64> {
    let n = poly.len() - 1;
    let mut q = vec![0.0; n - 1];
    let (mut b1, mut b2) = (0.0, 0.0);
    for k in (0..n - 1).rev() {
        let b = poly[k + 2] + s * b1 - t * b2;
        q[k] = b;
        (b1, b2) = (b, b1);
    }
    q
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sorted_real(report: &DeflationReport) -> Vec<f64> {
        let mut r: Vec<f64> = report.real_roots().collect();
        r.sort_by(f64::total_cmp);
        r
    }

    #[test]
    fn three_real_roots() {
        // (x - 1)(x - 2)(x - 3)
        let r = deflate(&[-6.0, 11.0, -6.0, 1.0]).unwrap();
        assert_eq!(r.degree, 3);
        let roots = sorted_real(&r);
        assert_eq!(roots.len(), 3);
        for (got, want) in roots.iter().zip([1.0, 2.0, 3.0]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-9);
        }
        // smallest magnitude goes first
        assert_abs_diff_eq!(r.steps[0].root.re, 1.0, epsilon = 1e-9);
        assert_eq!(r.steps.iter().map(|s| s.degree).collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn cubic_with_a_conjugate_pair() {
        // x^3 + 3x^2 + 12x + 8
        let r = deflate(&[8.0, 12.0, 3.0, 1.0]).unwrap();
        let real = sorted_real(&r);
        assert_eq!(real.len(), 1);
        assert_abs_diff_eq!(real[0], -0.778_977_462_6, epsilon = 1e-9);

        let complex: Vec<_> = r.roots().filter(|z| z.im != 0.0).collect();
        assert_eq!(complex.len(), 2);
        assert_abs_diff_eq!(complex[0].re, complex[1].re, epsilon = 1e-12);
        assert_abs_diff_eq!(complex[0].im, -complex[1].im, epsilon = 1e-12);
        assert!(r.max_residual() < 1e-9);
    }

    #[test]
    fn trailing_zeros_and_constants() {
        let r = deflate(&[-2.0, 1.0, 0.0, 0.0]).unwrap();
        assert_eq!(r.degree, 1);
        assert_abs_diff_eq!(r.steps[0].root.re, 2.0, epsilon = 1e-15);

        assert!(matches!(deflate(&[5.0, 0.0]), Err(RootError::NotPolynomial { .. })));
        assert!(matches!(deflate(&[]), Err(RootError::NotPolynomial { .. })));
        assert!(deflate(&[1.0, f64::NAN]).is_err());
    }

    #[test]
    fn synthetic_division() {
        // (x^2 - 3x + 2) / (x - 1) = x - 2
        assert_eq!(divide_linear(&[2.0, -3.0, 1.0], 1.0), [-2.0, 1.0]);
        // (x^3 + x^2 + x + 1) / (x^2 + 1) = x + 1
        assert_eq!(divide_quadratic(&[1.0, 1.0, 1.0, 1.0], 0.0, 1.0), [1.0, 1.0]);
    }
}
