use crate::interpolation::MAX_TAYLOR_DEGREE;
use crate::methods::{
    AitkenBisectionMethod, AitkenSecantMethod, BracketingMethod, DeflationMethod,
    FiniteDifferenceMethod, FixedPointMethod, LagrangeMethod, MullerMethod, NewtonCotesMethod,
    NewtonMethod, NumericalMethod, RichardsonMethod, RombergMethod, SecantMethod,
    SecondDerivativeMethod, SteffensenMethod, TabulatedDerivativeMethod, TaylorMethod,
};
use crate::ui::types::build::BuildError;
use crate::ui::types::build::error::{count, finite};
use crate::ui::types::choices::{LagrangeParams, MethodChoice, TaylorParams};

mod derivative;
mod integral;
mod roots;

impl TryFrom<LagrangeParams> for LagrangeMethod {
    type Error = BuildError;

    fn try_from(p: LagrangeParams) -> Result<Self, Self::Error> {
        Ok(LagrangeMethod {
            a: finite("a", p.a)?,
            b: finite("b", p.b)?,
            nodes: count("nodes", p.nodes)?,
            x: finite("x", p.x)?,
        })
    }
}

impl TryFrom<TaylorParams> for TaylorMethod {
    type Error = BuildError;

    fn try_from(p: TaylorParams) -> Result<Self, Self::Error> {
        let degree = usize::try_from(p.degree)
            .ok()
            .filter(|d| *d <= MAX_TAYLOR_DEGREE)
            .ok_or_else(|| {
                BuildError::InvalidParameter(format!(
                    "degree must be at most {MAX_TAYLOR_DEGREE}, got {}",
                    p.degree
                ))
            })?;
        Ok(TaylorMethod {
            x0: finite("x0", p.x0)?,
            degree,
            x: finite("x", p.x)?,
        })
    }
}

pub fn build_method(choice: MethodChoice) -> Result<Box<dyn NumericalMethod>, BuildError> {
    Ok(match choice {
        MethodChoice::Richardson(p) => Box::new(RichardsonMethod::try_from(p)?),
        MethodChoice::FiniteDifference(p) => Box::new(FiniteDifferenceMethod::try_from(p)?),
        MethodChoice::SecondDerivative(p) => Box::new(SecondDerivativeMethod::try_from(p)?),
        MethodChoice::Tabulated(p) => Box::new(TabulatedDerivativeMethod::from(p)),
        MethodChoice::NewtonCotes(p) => Box::new(NewtonCotesMethod::try_from(p)?),
        MethodChoice::Romberg(p) => Box::new(RombergMethod::try_from(p)?),
        MethodChoice::Bracketing(p) => Box::new(BracketingMethod::try_from(p)?),
        MethodChoice::Newton(p) => Box::new(NewtonMethod::try_from(p)?),
        MethodChoice::Secant(p) => Box::new(SecantMethod::try_from(p)?),
        MethodChoice::AitkenBisection(p) => Box::new(AitkenBisectionMethod::try_from(p)?),
        MethodChoice::AitkenSecant(p) => Box::new(AitkenSecantMethod::try_from(p)?),
        MethodChoice::Steffensen(p) => Box::new(SteffensenMethod::try_from(p)?),
        MethodChoice::Muller(p) => Box::new(MullerMethod::try_from(p)?),
        MethodChoice::FixedPoint(p) => Box::new(FixedPointMethod::try_from(p)?),
        MethodChoice::Deflation(_) => Box::new(DeflationMethod),
        MethodChoice::Lagrange(p) => Box::new(LagrangeMethod::try_from(p)?),
        MethodChoice::Taylor(p) => Box::new(TaylorMethod::try_from(p)?),
    })
}
