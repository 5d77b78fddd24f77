mod catalog;
mod point;

pub use catalog::CatalogFunction;
pub use point::InterpolatedPoint;
