use serde::Serialize;

use crate::roots::RootError;

/// Method-specific state recorded with each iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StepDetail {
    /// Bracket the iterate was taken from.
    Bracket { a: f64, b: f64 },
    /// Point and slope of the Newton tangent.
    Tangent { x: f64, slope: f64 },
    /// The two previous iterates of a secant step.
    Chord { x0: f64, x1: f64 },
    /// The three points the Müller parabola passes through.
    Parabola { x0: f64, x1: f64, x2: f64 },
    /// Fixed-point iterate and its image.
    Image { x: f64, gx: f64 },
    /// Steffensen samples `f(x)` and `f(x + f(x))`.
    Shift { x: f64, fx: f64, f_shift: f64 },
}

impl StepDetail {
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            StepDetail::Bracket { .. } => &["a", "b"],
            StepDetail::Tangent { .. } => &["x_k", "f'(x_k)"],
            StepDetail::Chord { .. } => &["x_k-1", "x_k"],
            StepDetail::Parabola { .. } => &["x_k-2", "x_k-1", "x_k"],
            StepDetail::Image { .. } => &["x_k", "g(x_k)"],
            StepDetail::Shift { .. } => &["x_k", "f(x_k)", "f(x_k + f(x_k))"],
        }
    }

    pub fn values(&self) -> Vec<f64> {
        match *self {
            StepDetail::Bracket { a, b } => vec![a, b],
            StepDetail::Tangent { x, slope } => vec![x, slope],
            StepDetail::Chord { x0, x1 } => vec![x0, x1],
            StepDetail::Parabola { x0, x1, x2 } => vec![x0, x1, x2],
            StepDetail::Image { x, gx } => vec![x, gx],
            StepDetail::Shift { x, fx, f_shift } => vec![x, fx, f_shift],
        }
    }
}

/// One row of an iteration table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RootStep {
    pub iteration: usize,
    pub detail: StepDetail,
    pub x: f64,
    pub fx: f64,
    pub error: f64,
    /// Aitken Δ² estimate, for the accelerated methods.
    pub accelerated: Option<f64>,
}

impl RootStep {
    pub(crate) fn new(iteration: usize, detail: StepDetail, x: f64, fx: f64, error: f64) -> Self {
        Self {
            iteration,
            detail,
            x,
            fx,
            error,
            accelerated: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootReport {
    pub root: f64,
    pub f_root: f64,
    pub steps: Vec<RootStep>,
}

impl RootReport {
    pub fn iterations(&self) -> usize {
        self.steps.len()
    }

    pub(crate) fn immediate(root: f64, f_root: f64) -> Self {
        Self {
            root,
            f_root,
            steps: vec![],
        }
    }
}

/// Aitken Δ² extrapolation of three successive iterates.
///
/// `None` when the second difference vanishes.
pub fn aitken(x0: f64, x1: f64, x2: f64) -> Option<f64> {
    let denominator = x2 - 2.0 * x1 + x0;
    if denominator.abs() <= f64::EPSILON * x2.abs().max(1.0) {
        return None;
    }
    Some(x2 - (x2 - x1).powi(2) / denominator)
}

pub(crate) fn check_settings(tolerance: f64, max_iterations: usize) -> Result<(), RootError> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(RootError::InvalidTolerance { got: tolerance });
    }
    if max_iterations == 0 {
        return Err(RootError::InvalidMaxIterations { got: max_iterations });
    }
    Ok(())
}

pub(crate) fn check_start(x: f64) -> Result<(), RootError> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(RootError::InvalidStart { x })
    }
}

pub(crate) fn eval_checked<F: Fn(f64) -> f64>(f: &F, x: f64) -> Result<f64, RootError> {
    let fx = f(x);
    if fx.is_finite() {
        Ok(fx)
    } else {
        Err(RootError::NonFinite { x, fx })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn aitken_recovers_geometric_limit() {
        // x_k = 1 + 0.5^k
        let x = aitken(1.5, 1.25, 1.125).unwrap();
        assert_relative_eq!(x, 1.0, epsilon = 1e-15);
        assert_eq!(aitken(1.0, 2.0, 3.0), None);
    }

    #[test]
    fn detail_columns_match_values() {
        let details = [
            StepDetail::Bracket { a: 0.0, b: 1.0 },
            StepDetail::Tangent { x: 0.0, slope: 1.0 },
            StepDetail::Chord { x0: 0.0, x1: 1.0 },
            StepDetail::Parabola { x0: 0.0, x1: 1.0, x2: 2.0 },
            StepDetail::Image { x: 0.0, gx: 1.0 },
            StepDetail::Shift { x: 0.0, fx: 1.0, f_shift: 2.0 },
        ];
        for d in details {
            assert_eq!(d.columns().len(), d.values().len(), "{d:?}");
        }
    }
}
