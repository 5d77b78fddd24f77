use crate::core::CatalogFunction;
use crate::interpolation::{InterpolationError, LagrangePolynomial, TaylorPolynomial};
use crate::methods::{Measurement, MethodError, NumericalMethod, Outcome};
use crate::report::{Cell, Table};

/// Lagrange interpolation through `nodes` equally spaced samples on `[a, b]`,
/// evaluated at `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagrangeMethod {
    pub a: f64,
    pub b: f64,
    pub nodes: usize,
    pub x: f64,
}

impl LagrangeMethod {
    pub fn abscissae(&self) -> Result<Vec<f64>, InterpolationError> {
        match self.nodes {
            0 => Err(InterpolationError::InvalidNodeCount { got: 0 }),
            1 => Ok(vec![self.a]),
            n => {
                let step = (self.b - self.a) / (n - 1) as f64;
                Ok((0..n).map(|i| self.a + i as f64 * step).collect())
            }
        }
    }
}

impl NumericalMethod for LagrangeMethod {
    fn name(&self) -> &'static str {
        "Lagrange interpolation"
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let xs = self.abscissae()?;
        let poly = LagrangePolynomial::from_function(|x| function.eval(x), &xs)?;
        let value = poly.eval(self.x);
        let exact = function.eval(self.x);

        let mut table = Table::new(["i", "x_i", "f(x_i)", "L_i(x)"]);
        for (i, p) in poly.nodes().iter().enumerate() {
            table.push(vec![
                Cell::from(i),
                p.x().into(),
                p.y().into(),
                poly.basis(i, self.x).into(),
            ]);
        }

        Ok(Outcome::new(self.name(), function.label())
            .with(Measurement::count("Degree", poly.degree()))
            .with(Measurement::at("P", self.x, value))
            .with_reference("f", Some(self.x), value, Some(exact))
            .with_table(table))
    }
}

/// Taylor polynomial of degree `degree` around `x0`, evaluated at `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaylorMethod {
    pub x0: f64,
    pub degree: usize,
    pub x: f64,
}

impl NumericalMethod for TaylorMethod {
    fn name(&self) -> &'static str {
        "Taylor polynomial"
    }

    fn solve(&self, function: &CatalogFunction) -> Result<Outcome, MethodError> {
        let poly = TaylorPolynomial::from_derivatives(
            |k, x| function.nth_derivative(k, x),
            self.x0,
            self.degree,
        )?;
        let terms = poly.terms(self.x);
        let value: f64 = terms.iter().sum();

        let mut table = Table::new(["k", "f^(k)(x0)", "term", "partial sum"]);
        let mut partial = 0.0;
        for (k, (d, term)) in poly.derivatives().iter().zip(&terms).enumerate() {
            partial += term;
            table.push(vec![Cell::from(k), (*d).into(), (*term).into(), partial.into()]);
        }

        Ok(Outcome::new(self.name(), function.label())
            .with(Measurement::count("Degree", poly.degree()))
            .with(Measurement::at("T", self.x, value))
            .with_reference("f", Some(self.x), value, Some(function.eval(self.x)))
            .with_table(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cubic_reproduced_by_four_nodes() {
        let m = LagrangeMethod {
            a: -2.0,
            b: 1.0,
            nodes: 4,
            x: 0.3,
        };
        let f = crate::testing::cubic_with_one_root();
        let out = m.solve(&f).unwrap();
        assert_eq!(out.get("Degree"), Some(3.0));
        assert_relative_eq!(out.get("P").unwrap(), f.eval(0.3), epsilon = 1e-10);
        assert!(out.get("Absolute error").unwrap() < 1e-10);
        assert_eq!(out.table.unwrap().len(), 4);
    }

    #[test]
    fn sine_error_shrinks_with_more_nodes() {
        let err = |nodes| {
            LagrangeMethod {
                a: 0.0,
                b: 3.0,
                nodes,
                x: 1.3,
            }
            .solve(&CatalogFunction::Sine)
            .unwrap()
            .get("Absolute error")
            .unwrap()
        };
        assert!(err(6) < err(3));
    }

    #[test]
    fn degenerate_node_sets() {
        let m = LagrangeMethod {
            a: 0.0,
            b: 1.0,
            nodes: 0,
            x: 0.5,
        };
        assert_eq!(
            m.solve(&CatalogFunction::Exp).unwrap_err(),
            MethodError::Interpolation(InterpolationError::InvalidNodeCount { got: 0 })
        );

        // a == b collapses every node onto the same abscissa
        let m = LagrangeMethod { b: 0.0, nodes: 3, ..m };
        assert!(matches!(
            m.solve(&CatalogFunction::Exp).unwrap_err(),
            MethodError::Interpolation(InterpolationError::DuplicateNode { .. })
        ));

        let constant = LagrangeMethod { nodes: 1, ..m }
            .solve(&CatalogFunction::Exp)
            .unwrap();
        assert_eq!(constant.get("P"), Some(1.0));
    }

    #[test]
    fn taylor_of_exp_around_zero() {
        let m = TaylorMethod {
            x0: 0.0,
            degree: 8,
            x: 0.5,
        };
        let out = m.solve(&CatalogFunction::Exp).unwrap();
        assert_eq!(out.get("Degree"), Some(8.0));
        assert_relative_eq!(out.get("T").unwrap(), 0.5f64.exp(), epsilon = 1e-8);
        assert!(out.get("Absolute error").unwrap() < 1e-8);

        let table = out.table.unwrap();
        assert_eq!(table.len(), 9);
        // partial sums 1, 1.5, 1.625
        assert_eq!(table.rows()[2][3], Cell::Num(1.625));
    }

    #[test]
    fn taylor_reproduces_the_cubic() {
        let f = crate::testing::cubic_with_one_root();
        let m = TaylorMethod {
            x0: 1.0,
            degree: 3,
            x: -2.5,
        };
        let out = m.solve(&f).unwrap();
        assert_relative_eq!(out.get("T").unwrap(), f.eval(-2.5), epsilon = 1e-10);
    }

    #[test]
    fn taylor_centered_outside_the_domain() {
        let m = TaylorMethod {
            x0: -1.0,
            degree: 2,
            x: 1.0,
        };
        assert!(matches!(
            m.solve(&CatalogFunction::Ln).unwrap_err(),
            MethodError::Interpolation(InterpolationError::NonFiniteDerivative { order: 0, .. })
        ));
    }
}
