use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::IntoStaticStr;

use crate::core::CatalogFunction;
use crate::differentiation::{DifferenceScheme, RichardsonEstimator, second_central, unequal};
use crate::methods::{Measurement, MethodError, NumericalMethod, Outcome};
use crate::report::{Cell, Table};

/// Richardson-extrapolated first derivative at `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RichardsonMethod {
    pub estimator: RichardsonEstimator,
    pub x: f64,
    pub h: f64,
}

impl RichardsonMethod {
    pub fn new(estimator: RichardsonEstimator, x: f64, h: f64) -> Self {
        Self { estimator, x, h }
    }
}

impl NumericalMethod for RichardsonMethod {
    fn name(&self) -> &'static str {
        "Richardson extrapolation"
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let est = self
            .estimator
            .estimate(|x| function.eval(x), self.x, self.h)?
            .with_reference(function.derivative(self.x));

        // the first two samples always form the h stencil
        let mut out = Outcome::new(self.name(), function.label());
        for (i, s) in est.samples.iter().enumerate() {
            out = out.with(Measurement::at("f", s.x, s.fx));
            if i == 1 {
                out = out.with(Measurement::at("A", est.h, est.coarse));
            }
        }
        out = out
            .with(Measurement::at("A", est.h / 2.0, est.fine))
            .with(Measurement::scalar("Richardson extrapolation", est.value))
            .with_reference("f'", Some(est.x), est.value, est.reference);

        let mut table = Table::new(["point", "x", "f(x)"]);
        for s in &est.samples {
            table.push(vec![Cell::from(s.point.to_string()), s.x.into(), s.fx.into()]);
        }
        Ok(out.with_table(table))
    }
}

/// Plain finite-difference first derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiniteDifferenceMethod {
    pub scheme: DifferenceScheme,
    pub x: f64,
    pub h: f64,
}

impl NumericalMethod for FiniteDifferenceMethod {
    fn name(&self) -> &'static str {
        match self.scheme {
            DifferenceScheme::Forward => "Forward difference",
            DifferenceScheme::Backward => "Backward difference",
            DifferenceScheme::Central => "Central difference",
        }
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let value = self.scheme.approximate(|x| function.eval(x), self.x, self.h)?;
        Ok(Outcome::new(self.name(), function.label())
            .with(Measurement::at("A", self.h, value))
            .with_reference("f'", Some(self.x), value, Some(function.derivative(self.x))))
    }
}

/// Three-point central second derivative. No exact reference is reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondDerivativeMethod {
    pub x: f64,
    pub h: f64,
}

impl NumericalMethod for SecondDerivativeMethod {
    fn name(&self) -> &'static str {
        "Second derivative"
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let value = second_central(|x| function.eval(x), self.x, self.h)?;
        Ok(Outcome::new(self.name(), function.label()).with(Measurement::at("f''", self.x, value)))
    }
}

/// Formula used on tabulated, unequally spaced samples.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TabulatedFormula {
    Forward,
    Backward,
    #[default]
    Centered,
}

/// Derivative at node `index` of `f` sampled on the abscissae `xs`.
#[derive(Debug, Clone, PartialEq)]
pub struct TabulatedDerivativeMethod {
    pub xs: Vec<f64>,
    pub index: usize,
    pub formula: TabulatedFormula,
}

impl NumericalMethod for TabulatedDerivativeMethod {
    fn name(&self) -> &'static str {
        "Unequal-spacing difference"
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let ys: Vec<f64> = self.xs.iter().map(|&x| function.eval(x)).collect();
        let value = match self.formula {
            TabulatedFormula::Forward => unequal::forward(&self.xs, &ys, self.index)?,
            TabulatedFormula::Backward => unequal::backward(&self.xs, &ys, self.index)?,
            TabulatedFormula::Centered => unequal::centered(&self.xs, &ys, self.index)?,
        };
        let x = self.xs[self.index];

        let mut table = Table::new(["x", "f(x)"]);
        for (&x, &y) in self.xs.iter().zip(&ys) {
            table.push(vec![x.into(), y.into()]);
        }
        Ok(Outcome::new(self.name(), function.label())
            .with(Measurement::scalar("Derivative estimate", value))
            .with_reference("f'", Some(x), value, Some(function.derivative(x)))
            .with_table(table))
    }
}
