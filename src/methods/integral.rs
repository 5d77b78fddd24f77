use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::IntoStaticStr;

use crate::core::CatalogFunction;
use crate::integration::{romberg, simpson_one_third, simpson_three_eighths, trapezoid};
use crate::methods::{Measurement, MethodError, NumericalMethod, Outcome};
use crate::report::{Cell, Table};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum NewtonCotesRule {
    Trapezoid,
    #[default]
    SimpsonOneThird,
    SimpsonThreeEighths,
}

/// Composite Newton-Cotes quadrature over `[a, b]` with `n` subintervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonCotesMethod {
    pub rule: NewtonCotesRule,
    pub a: f64,
    pub b: f64,
    pub n: usize,
}

impl NumericalMethod for NewtonCotesMethod {
    fn name(&self) -> &'static str {
        match self.rule {
            NewtonCotesRule::Trapezoid => "Trapezoid rule",
            NewtonCotesRule::SimpsonOneThird => "Simpson 1/3 rule",
            NewtonCotesRule::SimpsonThreeEighths => "Simpson 3/8 rule",
        }
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let f = |x| function.eval(x);
        let value = match self.rule {
            NewtonCotesRule::Trapezoid => trapezoid(f, self.a, self.b, self.n)?,
            NewtonCotesRule::SimpsonOneThird => simpson_one_third(f, self.a, self.b, self.n)?,
            NewtonCotesRule::SimpsonThreeEighths => {
                simpson_three_eighths(f, self.a, self.b, self.n)?
            }
        };
        Ok(Outcome::new(self.name(), function.label())
            .with(Measurement::count("Subintervals", self.n))
            .with(Measurement::scalar("Integral", value))
            .with_reference(
                "Exact integral",
                None,
                value,
                function.definite_integral(self.a, self.b),
            ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RombergMethod {
    pub a: f64,
    pub b: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl NumericalMethod for RombergMethod {
    fn name(&self) -> &'static str {
        "Romberg integration"
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let t = romberg(
            |x| function.eval(x),
            self.a,
            self.b,
            self.max_iterations,
            self.tolerance,
        )?;

        let width = t.iterations();
        let mut table = Table::new((0..width).map(|j| format!("R{j}")));
        for row in &t.rows {
            table.push(row.iter().map(|&v| Cell::from(v)).collect());
        }

        Ok(Outcome::new(self.name(), function.label())
            .with(Measurement::count("Rows", width))
            .with(Measurement::count("Converged", t.converged as usize))
            .with(Measurement::scalar("Integral", t.estimate))
            .with_reference(
                "Exact integral",
                None,
                t.estimate,
                function.definite_integral(self.a, self.b),
            )
            .with_table(table))
    }
}
