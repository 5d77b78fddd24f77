mod derivative;
mod integral;
mod interpolation;
mod measurement;
mod numerical_method;
mod outcome;
mod root_finding;

pub use derivative::{
    FiniteDifferenceMethod, RichardsonMethod, SecondDerivativeMethod, TabulatedDerivativeMethod,
    TabulatedFormula,
};
pub use integral::{NewtonCotesMethod, NewtonCotesRule, RombergMethod};
pub use interpolation::{LagrangeMethod, TaylorMethod};
pub use measurement::{Measurement, MeasurementKind};
pub use numerical_method::{MethodError, NumericalMethod};
pub use outcome::Outcome;
pub use root_finding::{
    AitkenBisectionMethod, AitkenSecantMethod, BracketingMethod, BracketingRule, DeflationMethod,
    FixedPointMethod, MullerMethod, NewtonMethod, SecantMethod, SteffensenMethod,
};
