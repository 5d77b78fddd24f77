use tracing::debug;

use crate::roots::report::{aitken, check_settings, eval_checked};
use crate::roots::{RootError, RootReport, RootStep, StepDetail};

/// Halves `[a, b]` until successive midpoints differ by at most `tolerance`.
pub fn bisection<F>(
    f: F,
    a: f64,
    b: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootReport, RootError>
where
    F: Fn(f64) -> f64,
{
    let Bracket { mut a, mut b, mut fa, fb } = open_bracket(&f, a, b, tolerance, max_iterations)?;
    if let Some(done) = endpoint_root(a, b, fa, fb) {
        return Ok(done);
    }

    let mut steps = Vec::new();
    let mut previous = a;
    for iteration in 1..=max_iterations {
        let x = 0.5 * (a + b);
        let fx = eval_checked(&f, x)?;
        let error = if iteration == 1 {
            0.5 * (b - a).abs()
        } else {
            (x - previous).abs()
        };
        steps.push(RootStep::new(iteration, StepDetail::Bracket { a, b }, x, fx, error));
        debug!(target: "numlab::roots", iteration, x, fx, error, "bisection");

        if fx == 0.0 || error <= tolerance {
            return Ok(RootReport {
                root: x,
                f_root: fx,
                steps,
            });
        }
        if fa * fx < 0.0 {
            b = x;
        } else {
            a = x;
            fa = fx;
        }
        previous = x;
    }

    Err(RootError::NoConvergence {
        iterations: max_iterations,
        last: previous,
    })
}

/// Regula falsi: replaces the midpoint by the secant through the bracket.
/// Stops when `|f(x)| <= tolerance`.
pub fn false_position<F>(
    f: F,
    a: f64,
    b: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootReport, RootError>
where
    F: Fn(f64) -> f64,
{
    let Bracket {
        mut a,
        mut b,
        mut fa,
        mut fb,
    } = open_bracket(&f, a, b, tolerance, max_iterations)?;
    if let Some(done) = endpoint_root(a, b, fa, fb) {
        return Ok(done);
    }

    let mut steps = Vec::new();
    let mut previous = a;
    for iteration in 1..=max_iterations {
        let x = a - (a - b) * fa / (fa - fb);
        let fx = eval_checked(&f, x)?;
        let detail = StepDetail::Bracket { a, b };
        steps.push(RootStep::new(iteration, detail, x, fx, (x - previous).abs()));
        debug!(target: "numlab::roots", iteration, x, fx, "false position");

        if fx.abs() <= tolerance {
            return Ok(RootReport {
                root: x,
                f_root: fx,
                steps,
            });
        }
        if fa * fx < 0.0 {
            b = x;
            fb = fx;
        } else {
            a = x;
            fa = fx;
        }
        previous = x;
    }

    Err(RootError::NoConvergence {
        iterations: max_iterations,
        last: previous,
    })
}

/// Bisection whose midpoints are accelerated with Aitken's Δ² process.
///
/// Stops when the half-width of the bracket or `|f(c)|` drops below
/// `tolerance`; the root is the last accelerated estimate that stays inside
/// the bracket, or the midpoint when there is none.
pub fn aitken_bisection<F>(
    f: F,
    a: f64,
    b: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootReport, RootError>
where
    F: Fn(f64) -> f64,
{
    let Bracket { mut a, mut b, mut fa, fb } = open_bracket(&f, a, b, tolerance, max_iterations)?;
    if let Some(done) = endpoint_root(a, b, fa, fb) {
        return Ok(done);
    }

    let mut steps: Vec<RootStep> = Vec::new();
    let mut midpoints: Vec<f64> = Vec::new();
    for iteration in 1..=max_iterations {
        let detail = StepDetail::Bracket { a, b };
        let c = 0.5 * (a + b);
        let fc = eval_checked(&f, c)?;
        if fa * fc <= 0.0 {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
        midpoints.push(c);

        let (lo, hi) = (a.min(b), a.max(b));
        let accelerated = match midpoints[..] {
            [.., x0, x1, x2] => aitken(x0, x1, x2).filter(|x| (lo..=hi).contains(x)),
            _ => None,
        };
        let half_width = 0.5 * (b - a).abs();
        steps.push(RootStep {
            accelerated,
            ..RootStep::new(iteration, detail, c, fc, half_width)
        });
        debug!(
            target: "numlab::roots",
            iteration,
            x = c,
            fx = fc,
            ?accelerated,
            "aitken bisection"
        );

        if half_width < tolerance || fc.abs() < tolerance {
            let root = accelerated.unwrap_or(c);
            return Ok(RootReport {
                root,
                f_root: eval_checked(&f, root)?,
                steps,
            });
        }
    }

    Err(RootError::NoConvergence {
        iterations: max_iterations,
        last: 0.5 * (a + b),
    })
}

struct Bracket {
    a: f64,
    b: f64,
    fa: f64,
    fb: f64,
}

fn open_bracket<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<Bracket, RootError> {
    check_settings(tolerance, max_iterations)?;
    if !a.is_finite() || !b.is_finite() || a == b {
        return Err(RootError::InvalidBracket { a, b });
    }
    let fa = eval_checked(f, a)?;
    let fb = eval_checked(f, b)?;
    if fa * fb > 0.0 {
        return Err(RootError::NoSignChange { a, b, fa, fb });
    }
    Ok(Bracket { a, b, fa, fb })
}

fn endpoint_root(a: f64, b: f64, fa: f64, fb: f64) -> Option<RootReport> {
    let (root, f_root) = if fa == 0.0 {
        (a, fa)
    } else if fb == 0.0 {
        (b, fb)
    } else {
        return None;
    };
    Some(RootReport::immediate(root, f_root))
}
