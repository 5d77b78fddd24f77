use crate::differentiation::RichardsonEstimator;
use crate::methods::{
    FiniteDifferenceMethod, RichardsonMethod, SecondDerivativeMethod, TabulatedDerivativeMethod,
};
use crate::ui::types::build::BuildError;
use crate::ui::types::build::error::finite;
use crate::ui::types::choices::{
    DifferenceParams, RichardsonParams, SecondDerivativeParams, TabulatedParams,
};
use std::convert::TryFrom;

impl TryFrom<RichardsonParams> for RichardsonMethod {
    type Error = BuildError;

    fn try_from(p: RichardsonParams) -> Result<Self, Self::Error> {
        let mut estimator = RichardsonEstimator::new(p.scheme);
        if let Some(order) = p.order {
            estimator = estimator
                .with_order(order)
                .map_err(|e| BuildError::InvalidParameter(e.to_string()))?;
        }
        Ok(RichardsonMethod::new(
            estimator,
            finite("x", p.x)?,
            finite("h", p.h)?,
        ))
    }
}

impl TryFrom<DifferenceParams> for FiniteDifferenceMethod {
    type Error = BuildError;

    fn try_from(p: DifferenceParams) -> Result<Self, Self::Error> {
        Ok(FiniteDifferenceMethod {
            scheme: p.scheme,
            x: finite("x", p.x)?,
            h: finite("h", p.h)?,
        })
    }
}

impl TryFrom<SecondDerivativeParams> for SecondDerivativeMethod {
    type Error = BuildError;

    fn try_from(p: SecondDerivativeParams) -> Result<Self, Self::Error> {
        Ok(SecondDerivativeMethod {
            x: finite("x", p.x)?,
            h: finite("h", p.h)?,
        })
    }
}

impl From<TabulatedParams> for TabulatedDerivativeMethod {
    fn from(p: TabulatedParams) -> Self {
        TabulatedDerivativeMethod {
            xs: p.xs,
            index: p.index,
            formula: p.formula,
        }
    }
}
