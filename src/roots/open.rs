use tracing::debug;

use crate::differentiation::RichardsonEstimator;
use crate::roots::report::{aitken, check_settings, check_start, eval_checked};
use crate::roots::{RootError, RootReport, RootStep, StepDetail};

/// Newton-Raphson with the slope taken from a Richardson estimate at step `h`.
/// Stops when `|f(x)| <= tolerance`, which may already hold at `x0`.
pub fn newton<F>(
    f: F,
    x0: f64,
    tolerance: f64,
    max_iterations: usize,
    h: f64,
) -> Result<RootReport, RootError>
where
    F: Fn(f64) -> f64,
{
    check_settings(tolerance, max_iterations)?;
    check_start(x0)?;

    let estimator = RichardsonEstimator::default();
    let mut steps = Vec::new();
    let mut x = x0;
    let mut fx = eval_checked(&f, x)?;
    if fx.abs() <= tolerance {
        return Ok(RootReport::immediate(x, fx));
    }

    for iteration in 1..=max_iterations {
        let slope = estimator.estimate(&f, x, h)?.value;
        if slope == 0.0 {
            return Err(RootError::ZeroDerivative { x });
        }
        let next = x - fx / slope;
        let f_next = eval_checked(&f, next)?;
        let detail = StepDetail::Tangent { x, slope };
        steps.push(RootStep::new(iteration, detail, next, f_next, (next - x).abs()));
        debug!(target: "numlab::roots", iteration, x = next, fx = f_next, slope, "newton");

        x = next;
        fx = f_next;
        if fx.abs() <= tolerance {
            return Ok(RootReport {
                root: x,
                f_root: fx,
                steps,
            });
        }
    }

    Err(RootError::NoConvergence {
        iterations: max_iterations,
        last: x,
    })
}

/// Secant method from two starting points. Stops when `|f(x)| <= tolerance`.
pub fn secant<F>(
    f: F,
    x0: f64,
    x1: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootReport, RootError>
where
    F: Fn(f64) -> f64,
{
    secant_iteration(f, x0, x1, tolerance, max_iterations, false)
}

/// Secant iterates accelerated with Aitken's Δ² process once three are
/// available. Stops when `|f(x̂)| <= tolerance` at the accelerated estimate
/// `x̂`.
pub fn aitken_secant<F>(
    f: F,
    x0: f64,
    x1: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootReport, RootError>
where
    F: Fn(f64) -> f64,
{
    secant_iteration(f, x0, x1, tolerance, max_iterations, true)
}

fn secant_iteration<F>(
    f: F,
    x0: f64,
    x1: f64,
    tolerance: f64,
    max_iterations: usize,
    accelerate: bool,
) -> Result<RootReport, RootError>
where
    F: Fn(f64) -> f64,
{
    check_settings(tolerance, max_iterations)?;
    check_start(x0)?;
    check_start(x1)?;

    let (mut x0, mut x1) = (x0, x1);
    let mut f0 = eval_checked(&f, x0)?;
    let mut f1 = eval_checked(&f, x1)?;
    let mut steps = Vec::new();

    for iteration in 1..=max_iterations {
        if f1 == f0 {
            return Err(RootError::FlatSecant { x0, x1 });
        }
        let x2 = x1 - (x1 - x0) * f1 / (f1 - f0);
        let f2 = eval_checked(&f, x2)?;
        let detail = StepDetail::Chord { x0, x1 };
        let mut step = RootStep::new(iteration, detail, x2, f2, (x2 - x1).abs());

        let (candidate, f_candidate) = if accelerate && iteration >= 2 {
            let estimate = aitken(x0, x1, x2).unwrap_or(x2);
            step.accelerated = Some(estimate);
            (estimate, eval_checked(&f, estimate)?)
        } else {
            (x2, f2)
        };
        steps.push(step);
        debug!(target: "numlab::roots", iteration, x = x2, fx = f2, "secant");

        if f_candidate.abs() <= tolerance {
            return Ok(RootReport {
                root: candidate,
                f_root: f_candidate,
                steps,
            });
        }
        (x0, f0) = (x1, f1);
        (x1, f1) = (x2, f2);
    }

    Err(RootError::NoConvergence {
        iterations: max_iterations,
        last: x1,
    })
}

/// Steffensen's method: `x - f(x)² / (f(x + f(x)) - f(x))`, quadratically
/// convergent without a derivative. Stops when `|f(x)| <= tolerance`.
pub fn steffensen<F>(
    f: F,
    x0: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootReport, RootError>
where
    F: Fn(f64) -> f64,
{
    check_settings(tolerance, max_iterations)?;
    check_start(x0)?;

    let mut x = x0;
    let mut fx = eval_checked(&f, x)?;
    if fx.abs() <= tolerance {
        return Ok(RootReport::immediate(x, fx));
    }

    let mut steps = Vec::new();
    for iteration in 1..=max_iterations {
        let f_shift = eval_checked(&f, x + fx)?;
        let denominator = f_shift - fx;
        if denominator == 0.0 {
            return Err(RootError::ZeroDerivative { x });
        }
        let next = x - fx * fx / denominator;
        let f_next = eval_checked(&f, next)?;
        let detail = StepDetail::Shift { x, fx, f_shift };
        steps.push(RootStep::new(iteration, detail, next, f_next, (next - x).abs()));
        debug!(target: "numlab::roots", iteration, x = next, fx = f_next, "steffensen");

        x = next;
        fx = f_next;
        if fx.abs() <= tolerance {
            return Ok(RootReport {
                root: x,
                f_root: fx,
                steps,
            });
        }
    }

    Err(RootError::NoConvergence {
        iterations: max_iterations,
        last: x,
    })
}

/// Müller's method: the next iterate is the root of the parabola through the
/// last three points closest to the newest one. Stops when
/// `|f(x)| <= tolerance`.
///
/// Only real iterates are followed; a negative discriminant is an error.
pub fn muller<F>(
    f: F,
    x0: f64,
    x1: f64,
    x2: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootReport, RootError>
where
    F: Fn(f64) -> f64,
{
    check_settings(tolerance, max_iterations)?;
    for x in [x0, x1, x2] {
        check_start(x)?;
    }

    let (mut x0, mut x1, mut x2) = (x0, x1, x2);
    let mut f0 = eval_checked(&f, x0)?;
    let mut f1 = eval_checked(&f, x1)?;
    let mut f2 = eval_checked(&f, x2)?;
    let mut steps = Vec::new();

    for iteration in 1..=max_iterations {
        let h1 = x1 - x0;
        let h2 = x2 - x1;
        if h1 == 0.0 || h2 == 0.0 || h1 + h2 == 0.0 {
            return Err(RootError::DegenerateParabola { x0, x1, x2 });
        }
        let d1 = (f1 - f0) / h1;
        let d2 = (f2 - f1) / h2;
        let a = (d2 - d1) / (h2 + h1);
        let b = a * h2 + d2;
        let c = f2;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Err(RootError::ComplexStep {
                iteration,
                discriminant,
            });
        }
        let root = discriminant.sqrt();
        let denominator = if (b + root).abs() > (b - root).abs() {
            b + root
        } else {
            b - root
        };
        if denominator == 0.0 {
            return Err(RootError::DegenerateParabola { x0, x1, x2 });
        }

        let x3 = x2 - 2.0 * c / denominator;
        let f3 = eval_checked(&f, x3)?;
        let detail = StepDetail::Parabola { x0, x1, x2 };
        steps.push(RootStep::new(iteration, detail, x3, f3, (x3 - x2).abs()));
        debug!(target: "numlab::roots", iteration, x = x3, fx = f3, "muller");

        if f3.abs() <= tolerance {
            return Ok(RootReport {
                root: x3,
                f_root: f3,
                steps,
            });
        }
        (x0, f0) = (x1, f1);
        (x1, f1) = (x2, f2);
        (x2, f2) = (x3, f3);
    }

    Err(RootError::NoConvergence {
        iterations: max_iterations,
        last: x2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differentiation::DifferentiationError;
    use crate::testing::{cubic_with_one_root, sqrt_two_quadratic};
    use approx::assert_abs_diff_eq;

    const CUBIC_ROOT: f64 = -0.778_977_462_6;

    #[test]
    fn newton_on_quadratic_converges_quickly() {
        let f = sqrt_two_quadratic();
        let r = newton(|x| f.eval(x), 1.0, 1e-12, 20, 0.1).unwrap();
        assert_abs_diff_eq!(r.root, 2f64.sqrt(), epsilon = 1e-10);
        assert!(r.iterations() <= 6, "took {} iterations", r.iterations());
        // the Richardson slope is exact on a quadratic
        let StepDetail::Tangent { x, slope } = r.steps[0].detail else {
            panic!("unexpected detail {:?}", r.steps[0].detail);
        };
        assert_eq!(x, 1.0);
        assert_abs_diff_eq!(slope, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn newton_accepts_a_starting_root() {
        let r = newton(|x| x - 1.0, 1.0, 1e-8, 10, 0.1).unwrap();
        assert_eq!(r.root, 1.0);
        assert_eq!(r.iterations(), 0);
    }

    #[test]
    fn secant_on_cubic() {
        let f = cubic_with_one_root();
        let r = secant(|x| f.eval(x), -2.0, 0.0, 1e-12, 50).unwrap();
        assert_abs_diff_eq!(r.root, CUBIC_ROOT, epsilon = 1e-7);
        assert_eq!(r.steps[0].detail, StepDetail::Chord { x0: -2.0, x1: 0.0 });
    }

    #[test]
    fn aitken_secant_accelerates_from_the_second_step() {
        let f = cubic_with_one_root();
        let r = aitken_secant(|x| f.eval(x), -2.0, 0.0, 1e-10, 50).unwrap();
        assert_abs_diff_eq!(r.root, CUBIC_ROOT, epsilon = 1e-8);
        assert!(r.f_root.abs() <= 1e-10);
        assert_eq!(r.steps[0].accelerated, None);
        assert!(r.steps[1..].iter().all(|s| s.accelerated.is_some()));
    }

    #[test]
    fn steffensen_on_quadratic() {
        let f = sqrt_two_quadratic();
        let r = steffensen(|x| f.eval(x), 1.5, 1e-12, 50).unwrap();
        assert_abs_diff_eq!(r.root, 2f64.sqrt(), epsilon = 1e-10);
        let StepDetail::Shift { x, fx, f_shift } = r.steps[0].detail else {
            panic!("unexpected detail {:?}", r.steps[0].detail);
        };
        assert_eq!(x, 1.5);
        assert_eq!(fx, 0.25);
        assert_abs_diff_eq!(f_shift, 1.75 * 1.75 - 2.0, epsilon = 1e-15);
    }

    #[test]
    fn steffensen_flat_shift() {
        let err = steffensen(|_| 1.0, 0.0, 1e-8, 10).unwrap_err();
        assert_eq!(err, RootError::ZeroDerivative { x: 0.0 });
    }

    #[test]
    fn muller_on_cubic() {
        let f = cubic_with_one_root();
        let r = muller(|x| f.eval(x), -2.0, -1.0, 0.0, 1e-12, 50).unwrap();
        assert_abs_diff_eq!(r.root, CUBIC_ROOT, epsilon = 1e-9);
        assert_eq!(
            r.steps[0].detail,
            StepDetail::Parabola {
                x0: -2.0,
                x1: -1.0,
                x2: 0.0
            }
        );
    }

    #[test]
    fn muller_is_exact_on_quadratics() {
        let f = sqrt_two_quadratic();
        let r = muller(|x| f.eval(x), 0.0, 1.0, 2.0, 1e-12, 5).unwrap();
        assert_abs_diff_eq!(r.root, 2f64.sqrt(), epsilon = 1e-12);
        assert_eq!(r.iterations(), 1);
    }

    #[test]
    fn muller_rejects_complex_and_degenerate_steps() {
        let err = muller(|x| x * x + 1.0, -1.0, 0.0, 1.0, 1e-8, 10).unwrap_err();
        assert!(matches!(err, RootError::ComplexStep { iteration: 1, .. }));
        let err = muller(|x| x, 0.0, 0.0, 1.0, 1e-8, 10).unwrap_err();
        assert!(matches!(err, RootError::DegenerateParabola { .. }));
    }

    #[test]
    fn newton_zero_slope() {
        let err = newton(|x| x * x + 1.0, 0.0, 1e-8, 10, 0.1).unwrap_err();
        assert_eq!(err, RootError::ZeroDerivative { x: 0.0 });
    }

    #[test]
    fn newton_propagates_step_errors() {
        let err = newton(|x| x - 1.0, 0.0, 1e-8, 10, 0.0).unwrap_err();
        assert_eq!(
            err,
            RootError::Derivative(DifferentiationError::InvalidStep { h: 0.0 })
        );
    }

    #[test]
    fn secant_flat_and_settings() {
        let err = secant(|_| 1.0, 0.0, 1.0, 1e-8, 10).unwrap_err();
        assert!(matches!(err, RootError::FlatSecant { .. }));
        let err = secant(|x| x, 0.0, 1.0, -1.0, 10).unwrap_err();
        assert!(matches!(err, RootError::InvalidTolerance { .. }));
        let err = newton(|x| x, f64::INFINITY, 1e-8, 10, 0.1).unwrap_err();
        assert!(matches!(err, RootError::InvalidStart { .. }));
    }
}
