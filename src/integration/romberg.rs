//! Romberg integration: Richardson extrapolation applied to the trapezoid
//! rule with successively halved steps.

use serde::Serialize;
use tracing::debug;

use crate::integration::IntegrationError;
use crate::integration::newton_cotes::{check_bounds, eval_checked};

/// Row `i` uses `2^i` trapezoid panels, so the table is capped.
pub const MAX_ROMBERG_ROWS: usize = 25;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RombergTable {
    /// `rows[i][j]`, with `j <= i`.
    pub rows: Vec<Vec<f64>>,
    pub estimate: f64,
    pub converged: bool,
}

impl RombergTable {
    pub fn iterations(&self) -> usize {
        self.rows.len()
    }
}

pub fn romberg<F>(
    f: F,
    a: f64,
    b: f64,
    max_iterations: usize,
    tolerance: f64,
) -> Result<RombergTable, IntegrationError>
where
    F: Fn(f64) -> f64,
{
    check_bounds(a, b)?;
    if max_iterations == 0 || max_iterations > MAX_ROMBERG_ROWS {
        return Err(IntegrationError::InvalidMaxIterations {
            got: max_iterations,
            max: MAX_ROMBERG_ROWS,
        });
    }
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(IntegrationError::InvalidTolerance { got: tolerance });
    }

    let mut h = b - a;
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(max_iterations);
    rows.push(vec![0.5 * h * (eval_checked(&f, a)? + eval_checked(&f, b)?)]);

    for i in 1..max_iterations {
        h /= 2.0;
        let panels = 1usize << (i - 1);
        let mut sum = 0.0;
        for k in 1..=panels {
            sum += eval_checked(&f, a + (2 * k - 1) as f64 * h)?;
        }

        let prev = &rows[i - 1];
        let mut row = Vec::with_capacity(i + 1);
        row.push(0.5 * prev[0] + sum * h);
        for j in 1..=i {
            let factor = 4f64.powi(j as i32);
            row.push(row[j - 1] + (row[j - 1] - prev[j - 1]) / (factor - 1.0));
        }

        let delta = (row[i] - prev[i - 1]).abs();
        debug!(target: "numlab::integration", row = i, estimate = row[i], delta, "romberg row");
        rows.push(row);

        if delta < tolerance {
            let estimate = rows[i][i];
            return Ok(RombergTable {
                rows,
                estimate,
                converged: true,
            });
        }
    }

    let last = rows.len() - 1;
    let estimate = rows[last][last];
    Ok(RombergTable {
        rows,
        estimate,
        converged: false,
    })
}
