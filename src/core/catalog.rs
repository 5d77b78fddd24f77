use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Closed-form functions the toolkit can work on.
///
/// Every entry knows its exact first derivative, and an antiderivative when
/// one exists in closed form, so methods can report the error of their
/// estimates against the true value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogFunction {
    /// `x * exp(x)`
    XExp,
    Sine,
    Cosine,
    Exp,
    /// Natural logarithm, defined for `x > 0`.
    Ln,
    /// Defined for `x >= 0`.
    Sqrt,
    /// `c[0] + c[1] x + c[2] x^2 + ...`
    Polynomial(Vec<f64>),
}

impl CatalogFunction {
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            CatalogFunction::XExp => x * x.exp(),
            CatalogFunction::Sine => x.sin(),
            CatalogFunction::Cosine => x.cos(),
            CatalogFunction::Exp => x.exp(),
            CatalogFunction::Ln => {
                if x > 0.0 {
                    x.ln()
                } else {
                    f64::NAN
                }
            }
            CatalogFunction::Sqrt => x.sqrt(),
            CatalogFunction::Polynomial(c) => horner(c, x),
        }
    }

    /// Exact first derivative.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            CatalogFunction::XExp => (1.0 + x) * x.exp(),
            CatalogFunction::Sine => x.cos(),
            CatalogFunction::Cosine => -x.sin(),
            CatalogFunction::Exp => x.exp(),
            CatalogFunction::Ln => {
                if x > 0.0 {
                    1.0 / x
                } else {
                    f64::NAN
                }
            }
            CatalogFunction::Sqrt => {
                if x > 0.0 {
                    0.5 / x.sqrt()
                } else {
                    f64::NAN
                }
            }
            CatalogFunction::Polynomial(c) => {
                let d: Vec<f64> = c
                    .iter()
                    .enumerate()
                    .skip(1)
                    .map(|(k, ck)| k as f64 * ck)
                    .collect();
                horner(&d, x)
            }
        }
    }

    /// Exact `k`-th derivative; `k = 0` is the function itself.
    pub fn nth_derivative(&self, k: u32, x: f64) -> f64 {
        if k == 0 {
            return self.eval(x);
        }
        let quarter_turns = f64::from(k) * std::f64::consts::FRAC_PI_2;
        match self {
            CatalogFunction::XExp => (x + f64::from(k)) * x.exp(),
            CatalogFunction::Sine => (x + quarter_turns).sin(),
            CatalogFunction::Cosine => (x + quarter_turns).cos(),
            CatalogFunction::Exp => x.exp(),
            CatalogFunction::Ln => {
                if x > 0.0 {
                    // (-1)^(k-1) (k-1)! / x^k
                    let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
                    (1..k).fold(sign, |acc, j| acc * f64::from(j)) / x.powf(f64::from(k))
                } else {
                    f64::NAN
                }
            }
            CatalogFunction::Sqrt => {
                if x > 0.0 {
                    let factor = (0..k).fold(1.0, |acc, j| acc * (0.5 - f64::from(j)));
                    factor * x.powf(0.5 - f64::from(k))
                } else {
                    f64::NAN
                }
            }
            CatalogFunction::Polynomial(c) => {
                let d: Vec<f64> = c
                    .iter()
                    .enumerate()
                    .skip(k as usize)
                    .map(|(n, cn)| {
                        let falling = (0..k).fold(1.0, |acc, j| acc * (n as f64 - f64::from(j)));
                        falling * cn
                    })
                    .collect();
                horner(&d, x)
            }
        }
    }

    pub fn antiderivative(&self, x: f64) -> Option<f64> {
        let v = match self {
            CatalogFunction::XExp => (x - 1.0) * x.exp(),
            CatalogFunction::Sine => -x.cos(),
            CatalogFunction::Cosine => x.sin(),
            CatalogFunction::Exp => x.exp(),
            CatalogFunction::Ln => {
                if x > 0.0 {
                    x * x.ln() - x
                } else if x == 0.0 {
                    0.0
                } else {
                    return None;
                }
            }
            CatalogFunction::Sqrt => {
                if x >= 0.0 {
                    2.0 / 3.0 * x.powf(1.5)
                } else {
                    return None;
                }
            }
            CatalogFunction::Polynomial(c) => {
                let mut anti = Vec::with_capacity(c.len() + 1);
                anti.push(0.0);
                anti.extend(c.iter().enumerate().map(|(k, ck)| ck / (k as f64 + 1.0)));
                horner(&anti, x)
            }
        };
        Some(v)
    }

    /// Exact value of the integral over `[a, b]`, when available.
    pub fn definite_integral(&self, a: f64, b: f64) -> Option<f64> {
        Some(self.antiderivative(b)? - self.antiderivative(a)?)
    }

    pub fn label(&self) -> String {
        match self {
            CatalogFunction::XExp => "x*exp(x)".into(),
            CatalogFunction::Sine => "sin(x)".into(),
            CatalogFunction::Cosine => "cos(x)".into(),
            CatalogFunction::Exp => "exp(x)".into(),
            CatalogFunction::Ln => "ln(x)".into(),
            CatalogFunction::Sqrt => "sqrt(x)".into(),
            CatalogFunction::Polynomial(c) => polynomial_label(c),
        }
    }
}

impl Display for CatalogFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

fn polynomial_label(coefficients: &[f64]) -> String {
    let terms: Vec<String> = coefficients
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, c)| **c != 0.0)
        .map(|(k, c)| match k {
            0 => format!("{c}"),
            1 => format!("{c}*x"),
            _ => format!("{c}*x^{k}"),
        })
        .collect();

    if terms.is_empty() {
        "0".into()
    } else {
        terms.join(" + ")
    }
}
