use tracing::debug;

use crate::roots::report::{check_settings, check_start, eval_checked};
use crate::roots::{RootError, RootReport, RootStep, StepDetail};

/// Iterates `x_{k+1} = g(x_k)` until `|g(x_k) - x_k| <= tolerance`.
///
/// Each step stores the residual `g(x_k) - x_k` in `fx`. The iteration is
/// abandoned as diverging when the residual more than doubles between two
/// steps.
pub fn fixed_point<G>(
    g: G,
    x0: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootReport, RootError>
where
    G: Fn(f64) -> f64,
{
    check_settings(tolerance, max_iterations)?;
    check_start(x0)?;

    let mut x = x0;
    let mut previous_error = f64::INFINITY;
    let mut steps = Vec::new();
    for iteration in 1..=max_iterations {
        let gx = eval_checked(&g, x)?;
        let residual = gx - x;
        let error = residual.abs();
        steps.push(RootStep::new(iteration, StepDetail::Image { x, gx }, gx, residual, error));
        debug!(target: "numlab::roots", iteration, x, gx, error, "fixed point");

        if error <= tolerance {
            let f_root = eval_checked(&g, gx)? - gx;
            return Ok(RootReport {
                root: gx,
                f_root,
                steps,
            });
        }
        if error > 2.0 * previous_error {
            return Err(RootError::Diverging { iteration, error });
        }
        previous_error = error;
        x = gx;
    }

    Err(RootError::NoConvergence {
        iterations: max_iterations,
        last: x,
    })
}
