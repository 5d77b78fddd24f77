use crate::core::CatalogFunction;

/// `x^3 + 3x^2 + 12x + 8`, single real root near `-0.77898`.
pub fn cubic_with_one_root() -> CatalogFunction {
    CatalogFunction::Polynomial(vec![8.0, 12.0, 3.0, 1.0])
}

/// `x^2 - 2`, roots at `±sqrt(2)`.
pub fn sqrt_two_quadratic() -> CatalogFunction {
    CatalogFunction::Polynomial(vec![-2.0, 0.0, 1.0])
}
