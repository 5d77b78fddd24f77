use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::IntoStaticStr;

use crate::core::CatalogFunction;
use crate::methods::{Measurement, MethodError, NumericalMethod, Outcome};
use crate::report::{Cell, Table};
use crate::roots::{
    DeflationReport, RootError, RootReport, aitken_bisection, aitken_secant, bisection, deflate,
    false_position, fixed_point, muller, newton, secant, steffensen,
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BracketingRule {
    #[default]
    Bisection,
    FalsePosition,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketingMethod {
    pub rule: BracketingRule,
    pub a: f64,
    pub b: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl NumericalMethod for BracketingMethod {
    fn name(&self) -> &'static str {
        match self.rule {
            BracketingRule::Bisection => "Bisection",
            BracketingRule::FalsePosition => "False position",
        }
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let f = |x| function.eval(x);
        let report = match self.rule {
            BracketingRule::Bisection => {
                bisection(f, self.a, self.b, self.tolerance, self.max_iterations)?
            }
            BracketingRule::FalsePosition => {
                false_position(f, self.a, self.b, self.tolerance, self.max_iterations)?
            }
        };
        Ok(outcome(self.name(), function, &report, &["a", "b"]))
    }
}

/// Newton-Raphson with Richardson-estimated slopes at step `h`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonMethod {
    pub x0: f64,
    pub h: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl NumericalMethod for NewtonMethod {
    fn name(&self) -> &'static str {
        "Newton-Raphson"
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let report = newton(
            |x| function.eval(x),
            self.x0,
            self.tolerance,
            self.max_iterations,
            self.h,
        )?;
        Ok(outcome(self.name(), function, &report, &["x_k", "f'(x_k)"]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantMethod {
    pub x0: f64,
    pub x1: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl NumericalMethod for SecantMethod {
    fn name(&self) -> &'static str {
        "Secant"
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let report = secant(
            |x| function.eval(x),
            self.x0,
            self.x1,
            self.tolerance,
            self.max_iterations,
        )?;
        Ok(outcome(self.name(), function, &report, &["x_k-1", "x_k"]))
    }
}

/// Bisection whose midpoints are extrapolated with Aitken's Δ².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AitkenBisectionMethod {
    pub a: f64,
    pub b: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl NumericalMethod for AitkenBisectionMethod {
    fn name(&self) -> &'static str {
        "Bisection with Aitken acceleration"
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let report = aitken_bisection(
            |x| function.eval(x),
            self.a,
            self.b,
            self.tolerance,
            self.max_iterations,
        )?;
        Ok(outcome(self.name(), function, &report, &["a", "b"]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AitkenSecantMethod {
    pub x0: f64,
    pub x1: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl NumericalMethod for AitkenSecantMethod {
    fn name(&self) -> &'static str {
        "Secant with Aitken acceleration"
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let report = aitken_secant(
            |x| function.eval(x),
            self.x0,
            self.x1,
            self.tolerance,
            self.max_iterations,
        )?;
        Ok(outcome(self.name(), function, &report, &["x_k-1", "x_k"]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteffensenMethod {
    pub x0: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl NumericalMethod for SteffensenMethod {
    fn name(&self) -> &'static str {
        "Steffensen"
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let report = steffensen(
            |x| function.eval(x),
            self.x0,
            self.tolerance,
            self.max_iterations,
        )?;
        let columns = &["x_k", "f(x_k)", "f(x_k + f(x_k))"];
        Ok(outcome(self.name(), function, &report, columns))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MullerMethod {
    pub x0: f64,
    pub x1: f64,
    pub x2: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl NumericalMethod for MullerMethod {
    fn name(&self) -> &'static str {
        "Muller"
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let report = muller(
            |x| function.eval(x),
            self.x0,
            self.x1,
            self.x2,
            self.tolerance,
            self.max_iterations,
        )?;
        let columns = &["x_k-2", "x_k-1", "x_k"];
        Ok(outcome(self.name(), function, &report, columns))
    }
}

/// Iterates `x = g(x)` with the selected function playing the role of `g`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPointMethod {
    pub x0: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl NumericalMethod for FixedPointMethod {
    fn name(&self) -> &'static str {
        "Fixed point"
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let report = fixed_point(
            |x| function.eval(x),
            self.x0,
            self.tolerance,
            self.max_iterations,
        )?;
        Ok(Outcome::new(self.name(), function.label())
            .with(Measurement::scalar("Fixed point", report.root))
            .with(Measurement::at("g", report.root, report.root + report.f_root))
            .with(Measurement::error("Residual", report.f_root.abs()))
            .with(Measurement::count("Iterations", report.iterations()))
            .with_table(iteration_table(&report, &["x_k", "g(x_k)"])))
    }
}

/// Every root, real and complex, of a polynomial function.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeflationMethod;

impl NumericalMethod for DeflationMethod {
    fn name(&self) -> &'static str {
        "Polynomial deflation"
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let CatalogFunction::Polynomial(coefficients) = function else {
            return Err(RootError::NotPolynomial {
                function: function.label(),
            }
            .into());
        };
        let report = deflate(coefficients)?;
        Ok(deflation_outcome(self.name(), function, &report))
    }
}

fn deflation_outcome(
    method: &'static str,
    function: &CatalogFunction,
    report: &DeflationReport,
) -> Outcome {
    let mut out = Outcome::new(method, function.label())
        .with(Measurement::count("Degree", report.degree))
        .with(Measurement::count("Real roots", report.real_roots().count()));
    let mut table = Table::new(["root", "degree", "Re", "Im", "|p(z)|"]);
    for (i, s) in report.steps.iter().enumerate() {
        let n = i + 1;
        out = if s.root.im == 0.0 {
            out.with(Measurement::scalar(format!("Root {n}"), s.root.re))
        } else {
            out.with(Measurement::scalar(format!("Root {n} (re)"), s.root.re))
                .with(Measurement::scalar(format!("Root {n} (im)"), s.root.im))
        };
        table.push(vec![
            Cell::from(n),
            Cell::from(s.degree),
            s.root.re.into(),
            s.root.im.into(),
            s.residual.into(),
        ]);
    }
    out.with(Measurement::error("Max residual", report.max_residual()))
        .with_table(table)
}

/// `columns` names the method-specific detail of each step; an `aitken`
/// column is appended when any step carries an accelerated estimate.
fn iteration_table(report: &RootReport, columns: &[&str]) -> Table {
    let accelerated = report.steps.iter().any(|s| s.accelerated.is_some());
    let mut headers = vec!["iteration"];
    headers.extend_from_slice(columns);
    headers.extend(["x", "f(x)", "error"]);
    if accelerated {
        headers.push("aitken");
    }

    let mut table = Table::new(headers);
    for s in &report.steps {
        let mut row = vec![Cell::from(s.iteration)];
        row.extend(s.detail.values().into_iter().map(Cell::from));
        row.extend([s.x, s.fx, s.error].map(Cell::from));
        if accelerated {
            row.push(s.accelerated.into());
        }
        table.push(row);
    }
    table
}

fn outcome(
    method: &'static str,
    function: &CatalogFunction,
    report: &RootReport,
    columns: &[&str],
) -> Outcome {
    Outcome::new(method, function.label())
        .with(Measurement::scalar("Root", report.root))
        .with(Measurement::at("f", report.root, report.f_root))
        .with(Measurement::count("Iterations", report.iterations()))
        .with_table(iteration_table(report, columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{cubic_with_one_root, sqrt_two_quadratic};
    use approx::assert_abs_diff_eq;

    const CUBIC_ROOT: f64 = -0.778_977_462_6;

    #[test]
    fn bisection_table_matches_iterations() {
        let m = BracketingMethod {
            rule: BracketingRule::Bisection,
            a: -1.0,
            b: 0.0,
            tolerance: 1e-8,
            max_iterations: 100,
        };
        let out = m.solve(&cubic_with_one_root()).unwrap();
        assert_abs_diff_eq!(out.get("Root").unwrap(), CUBIC_ROOT, epsilon = 1e-7);

        let table = out.table.as_ref().unwrap();
        assert_eq!(table.len() as f64, out.get("Iterations").unwrap());
        assert_eq!(table.headers()[1], "a");
        assert_eq!(table.rows()[0][0], Cell::Int(1));
    }

    #[test]
    fn false_position_without_sign_change() {
        let m = BracketingMethod {
            rule: BracketingRule::FalsePosition,
            a: 0.0,
            b: 1.0,
            tolerance: 1e-8,
            max_iterations: 100,
        };
        let err = m.solve(&cubic_with_one_root()).unwrap_err();
        assert!(matches!(err, MethodError::Root(RootError::NoSignChange { .. })));
    }

    #[test]
    fn newton_reports_slopes() {
        let m = NewtonMethod {
            x0: 1.0,
            h: 0.1,
            tolerance: 1e-12,
            max_iterations: 20,
        };
        let out = m.solve(&sqrt_two_quadratic()).unwrap();
        assert_abs_diff_eq!(out.get("Root").unwrap(), 2f64.sqrt(), epsilon = 1e-10);
        let table = out.table.as_ref().unwrap();
        assert_eq!(table.headers()[2], "f'(x_k)");
        let Cell::Num(slope) = table.rows()[0][2] else {
            panic!("slope cell should be numeric");
        };
        assert_abs_diff_eq!(slope, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn secant_converges_on_cubic() {
        let m = SecantMethod {
            x0: -2.0,
            x1: 0.0,
            tolerance: 1e-12,
            max_iterations: 50,
        };
        let out = m.solve(&cubic_with_one_root()).unwrap();
        assert_abs_diff_eq!(out.get("Root").unwrap(), CUBIC_ROOT, epsilon = 1e-7);
        assert!(out.get("f").unwrap().abs() <= 1e-12);
    }

    #[test]
    fn newton_starting_on_the_root_has_an_empty_table() {
        let m = NewtonMethod {
            x0: 2.0,
            h: 0.1,
            tolerance: 1e-12,
            max_iterations: 20,
        };
        let out = m.solve(&CatalogFunction::Polynomial(vec![-4.0, 0.0, 1.0])).unwrap();
        assert_eq!(out.get("Root"), Some(2.0));
        assert_eq!(out.get("Iterations"), Some(0.0));
        let table = out.table.as_ref().unwrap();
        assert_eq!(table.len(), 0);
        assert_eq!(table.headers()[1], "x_k");
    }

    #[test]
    fn aitken_bisection_adds_an_accelerated_column() {
        let m = AitkenBisectionMethod {
            a: -1.0,
            b: 0.0,
            tolerance: 1e-10,
            max_iterations: 100,
        };
        let out = m.solve(&cubic_with_one_root()).unwrap();
        assert_abs_diff_eq!(out.get("Root").unwrap(), CUBIC_ROOT, epsilon = 1e-8);
        let table = out.table.as_ref().unwrap();
        assert_eq!(table.headers().last().map(String::as_str), Some("aitken"));
        assert_eq!(table.rows()[0].last(), Some(&Cell::Empty));
    }

    #[test]
    fn aitken_secant_converges_on_cubic() {
        let m = AitkenSecantMethod {
            x0: -2.0,
            x1: 0.0,
            tolerance: 1e-12,
            max_iterations: 50,
        };
        let out = m.solve(&cubic_with_one_root()).unwrap();
        assert_abs_diff_eq!(out.get("Root").unwrap(), CUBIC_ROOT, epsilon = 1e-7);
        assert_eq!(out.table.as_ref().unwrap().headers()[1], "x_k-1");
    }

    #[test]
    fn steffensen_on_quadratic() {
        let m = SteffensenMethod {
            x0: 1.0,
            tolerance: 1e-12,
            max_iterations: 50,
        };
        let out = m.solve(&sqrt_two_quadratic()).unwrap();
        assert_abs_diff_eq!(out.get("Root").unwrap(), 2f64.sqrt(), epsilon = 1e-12);
        let table = out.table.as_ref().unwrap();
        assert_eq!(table.headers()[3], "f(x_k + f(x_k))");
        // first step samples f(1) = -1 and f(0) = -2
        assert_eq!(table.rows()[0][2], Cell::Num(-1.0));
        assert_eq!(table.rows()[0][3], Cell::Num(-2.0));
    }

    #[test]
    fn muller_on_cubic() {
        let m = MullerMethod {
            x0: -2.0,
            x1: -1.0,
            x2: 0.0,
            tolerance: 1e-12,
            max_iterations: 50,
        };
        let out = m.solve(&cubic_with_one_root()).unwrap();
        assert_abs_diff_eq!(out.get("Root").unwrap(), CUBIC_ROOT, epsilon = 1e-9);
        let table = out.table.as_ref().unwrap();
        assert_eq!(table.headers()[1..4], ["x_k-2", "x_k-1", "x_k"]);
        assert_eq!(table.rows()[0][1], Cell::Num(-2.0));
    }

    #[test]
    fn fixed_point_of_cosine() {
        let m = FixedPointMethod {
            x0: 1.0,
            tolerance: 1e-10,
            max_iterations: 200,
        };
        let out = m.solve(&CatalogFunction::Cosine).unwrap();
        let x = out.get("Fixed point").unwrap();
        assert_abs_diff_eq!(x, 0.739_085_133_2, epsilon = 1e-9);
        assert_abs_diff_eq!(out.get("g").unwrap(), x, epsilon = 1e-9);
        assert!(out.get("Residual").unwrap() <= 1e-9);
        assert_eq!(out.table.as_ref().unwrap().headers()[2], "g(x_k)");
    }

    #[test]
    fn fixed_point_divergence_surfaces() {
        let m = FixedPointMethod {
            x0: 0.0,
            tolerance: 1e-8,
            max_iterations: 50,
        };
        let err = m.solve(&CatalogFunction::Exp).unwrap_err();
        assert!(matches!(err, MethodError::Root(RootError::Diverging { .. })));
    }

    #[test]
    fn deflation_lists_every_root() {
        let out = DeflationMethod.solve(&cubic_with_one_root()).unwrap();
        assert_eq!(out.get("Degree"), Some(3.0));
        assert_eq!(out.get("Real roots"), Some(1.0));
        assert!(out.get("Max residual").unwrap() < 1e-9);

        let real = out
            .measurements
            .iter()
            .find(|m| m.name.starts_with("Root") && !m.name.contains('('))
            .unwrap();
        assert_abs_diff_eq!(real.value, CUBIC_ROOT, epsilon = 1e-9);
        assert_eq!(out.table.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn deflation_needs_a_polynomial() {
        let err = DeflationMethod.solve(&CatalogFunction::Sine).unwrap_err();
        assert_eq!(
            err,
            MethodError::Root(RootError::NotPolynomial {
                function: "sin(x)".into()
            })
        );
    }
}
