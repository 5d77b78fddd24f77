//! Lagrange form of the interpolating polynomial.
//!
//! `P(x) = Σ y_i L_i(x)` with `L_i(x) = Π_{j≠i} (x - x_j) / (x_i - x_j)`.
//! Evaluation is `O(n²)`; the node set is small in practice.

use serde::Serialize;

use crate::core::InterpolatedPoint;
use crate::interpolation::InterpolationError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LagrangePolynomial {
    nodes: Vec<InterpolatedPoint>,
}

impl LagrangePolynomial {
    pub fn new(nodes: Vec<InterpolatedPoint>) -> Result<Self, InterpolationError> {
        if nodes.is_empty() {
            return Err(InterpolationError::Empty);
        }
        if let Some(index) = nodes.iter().position(|p| !p.is_finite()) {
            return Err(InterpolationError::NonFinite { index });
        }
        for (i, p) in nodes.iter().enumerate() {
            if let Some(j) = nodes[..i].iter().position(|q| q.x() == p.x()) {
                return Err(InterpolationError::DuplicateNode {
                    first: j,
                    second: i,
                    x: p.x(),
                });
            }
        }
        Ok(Self { nodes })
    }

    /// Samples `f` at the given abscissae.
    pub fn from_function<F>(f: F, xs: &[f64]) -> Result<Self, InterpolationError>
    where
        F: Fn(f64) -> f64,
    {
        Self::new(xs.iter().map(|&x| InterpolatedPoint::sample(&f, x)).collect())
    }

    pub fn nodes(&self) -> &[InterpolatedPoint] {
        &self.nodes
    }

    /// Upper bound on the polynomial degree.
    pub fn degree(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Value of the `i`-th basis polynomial `L_i` at `x`, or `None` when
    /// there is no node `i`.
    pub fn basis(&self, i: usize, x: f64) -> Option<f64> {
        let xi = self.nodes.get(i)?.x();
        Some(self.basis_at(i, xi, x))
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, p)| p.y() * self.basis_at(i, p.x(), x))
            .sum()
    }

    fn basis_at(&self, i: usize, xi: f64, x: f64) -> f64 {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, p)| (x - p.x()) / (xi - p.x()))
            .product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reproduces_nodes_and_quadratics() {
        let p = LagrangePolynomial::from_function(|x| 2.0 * x * x - x + 3.0, &[-1.0, 0.5, 2.0])
            .unwrap();
        assert_eq!(p.degree(), 2);
        for node in p.nodes() {
            assert_relative_eq!(p.eval(node.x()), node.y(), epsilon = 1e-12);
        }
        assert_relative_eq!(p.eval(1.0), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn basis_is_a_partition_of_unity() {
        let p = LagrangePolynomial::new(vec![
            (0.0, 1.0).into(),
            (1.0, 5.0).into(),
            (3.0, -2.0).into(),
            (4.5, 0.0).into(),
        ])
        .unwrap();
        let total: f64 = (0..4).filter_map(|i| p.basis(i, 2.2)).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        assert_eq!(p.basis(1, 1.0), Some(1.0));
        assert_eq!(p.basis(1, 3.0), Some(0.0));
    }

    #[test]
    fn basis_outside_the_node_range_is_none() {
        let p = LagrangePolynomial::new(vec![(0.0, 1.0).into(), (1.0, 2.0).into()]).unwrap();
        assert_eq!(p.basis(2, 0.5), None);
        assert_eq!(p.basis(usize::MAX, 0.5), None);
    }

    #[test]
    fn single_node_is_constant() {
        let p = LagrangePolynomial::new(vec![InterpolatedPoint::new(2.0, 7.0)]).unwrap();
        assert_eq!(p.degree(), 0);
        assert_eq!(p.eval(-10.0), 7.0);
    }

    #[test]
    fn rejects_bad_nodes() {
        assert_eq!(
            LagrangePolynomial::new(vec![]),
            Err(InterpolationError::Empty)
        );
        assert_eq!(
            LagrangePolynomial::new(vec![(1.0, 2.0).into(), (1.0, 3.0).into()]),
            Err(InterpolationError::DuplicateNode {
                first: 0,
                second: 1,
                x: 1.0
            })
        );
        assert_eq!(
            LagrangePolynomial::from_function(f64::ln, &[1.0, -1.0]),
            Err(InterpolationError::NonFinite { index: 1 })
        );
    }
}
