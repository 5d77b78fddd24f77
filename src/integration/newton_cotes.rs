//! Composite closed Newton-Cotes rules over `n` equal subintervals.

use crate::integration::IntegrationError;

pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, IntegrationError>
where
    F: Fn(f64) -> f64,
{
    check_bounds(a, b)?;
    if n == 0 {
        return Err(IntegrationError::InvalidSubintervals {
            rule: "trapezoid",
            requirement: "must be > 0",
            n,
        });
    }
    composite(&f, a, b, n, |_| 1.0, 0.5, 1.0)
}

/// Simpson's 1/3 rule; exact for cubics.
pub fn simpson_one_third<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, IntegrationError>
where
    F: Fn(f64) -> f64,
{
    check_bounds(a, b)?;
    if n == 0 || n % 2 != 0 {
        return Err(IntegrationError::InvalidSubintervals {
            rule: "simpson 1/3",
            requirement: "must be even and > 0",
            n,
        });
    }
    composite(
        &f,
        a,
        b,
        n,
        |i| if i % 2 == 0 { 2.0 } else { 4.0 },
        1.0,
        1.0 / 3.0,
    )
}

/// Simpson's 3/8 rule; exact for cubics.
pub fn simpson_three_eighths<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, IntegrationError>
where
    F: Fn(f64) -> f64,
{
    check_bounds(a, b)?;
    if n == 0 || n % 3 != 0 {
        return Err(IntegrationError::InvalidSubintervals {
            rule: "simpson 3/8",
            requirement: "must be a multiple of 3 and > 0",
            n,
        });
    }
    composite(
        &f,
        a,
        b,
        n,
        |i| if i % 3 == 0 { 2.0 } else { 3.0 },
        1.0,
        3.0 / 8.0,
    )
}

pub(crate) fn check_bounds(a: f64, b: f64) -> Result<(), IntegrationError> {
    if !a.is_finite() || !b.is_finite() {
        return Err(IntegrationError::InvalidBounds { a, b });
    }
    Ok(())
}

pub(crate) fn eval_checked<F: Fn(f64) -> f64>(f: &F, x: f64) -> Result<f64, IntegrationError> {
    let fx = f(x);
    if fx.is_finite() {
        Ok(fx)
    } else {
        Err(IntegrationError::NonFiniteSample { x, fx })
    }
}

/// `scale * h * (end_weight * (f(a) + f(b)) + Σ weight(i) f(a + i h))`
fn composite<F, W>(
    f: &F,
    a: f64,
    b: f64,
    n: usize,
    weight: W,
    end_weight: f64,
    scale: f64,
) -> Result<f64, IntegrationError>
where
    F: Fn(f64) -> f64,
    W: Fn(usize) -> f64,
{
    let h = (b - a) / n as f64;
    let mut sum = end_weight * (eval_checked(f, a)? + eval_checked(f, b)?);
    for i in 1..n {
        sum += weight(i) * eval_checked(f, a + i as f64 * h)?;
    }
    Ok(scale * h * sum)
}
