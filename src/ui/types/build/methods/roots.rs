use crate::methods::{
    AitkenBisectionMethod, AitkenSecantMethod, BracketingMethod, FixedPointMethod, MullerMethod,
    NewtonMethod, SecantMethod, SteffensenMethod,
};
use crate::ui::types::build::BuildError;
use crate::ui::types::build::error::count;
use crate::ui::types::choices::{
    AitkenBisectionParams, BracketingParams, MullerParams, NewtonParams, SecantParams,
    SingleGuessParams,
};
use std::convert::TryFrom;

fn ordered_bracket(a: f64, b: f64) -> Result<(), BuildError> {
    if a >= b {
        return Err(BuildError::InvalidParameter(format!(
            "bracket needs a < b, got a={a} b={b}"
        )));
    }
    Ok(())
}

fn distinct_guesses(x0: f64, x1: f64) -> Result<(), BuildError> {
    if x0 == x1 {
        return Err(BuildError::InvalidParameter(
            "secant needs two distinct starting points".into(),
        ));
    }
    Ok(())
}

impl TryFrom<BracketingParams> for BracketingMethod {
    type Error = BuildError;

    fn try_from(p: BracketingParams) -> Result<Self, Self::Error> {
        ordered_bracket(p.a, p.b)?;
        Ok(BracketingMethod {
            rule: p.rule,
            a: p.a,
            b: p.b,
            tolerance: p.tolerance,
            max_iterations: count("max_iterations", p.max_iterations)?,
        })
    }
}

impl TryFrom<NewtonParams> for NewtonMethod {
    type Error = BuildError;

    fn try_from(p: NewtonParams) -> Result<Self, Self::Error> {
        Ok(NewtonMethod {
            x0: p.x0,
            h: p.h,
            tolerance: p.tolerance,
            max_iterations: count("max_iterations", p.max_iterations)?,
        })
    }
}

impl TryFrom<SecantParams> for SecantMethod {
    type Error = BuildError;

    fn try_from(p: SecantParams) -> Result<Self, Self::Error> {
        distinct_guesses(p.x0, p.x1)?;
        Ok(SecantMethod {
            x0: p.x0,
            x1: p.x1,
            tolerance: p.tolerance,
            max_iterations: count("max_iterations", p.max_iterations)?,
        })
    }
}

impl TryFrom<AitkenBisectionParams> for AitkenBisectionMethod {
    type Error = BuildError;

    fn try_from(p: AitkenBisectionParams) -> Result<Self, Self::Error> {
        ordered_bracket(p.a, p.b)?;
        Ok(AitkenBisectionMethod {
            a: p.a,
            b: p.b,
            tolerance: p.tolerance,
            max_iterations: count("max_iterations", p.max_iterations)?,
        })
    }
}

impl TryFrom<SecantParams> for AitkenSecantMethod {
    type Error = BuildError;

    fn try_from(p: SecantParams) -> Result<Self, Self::Error> {
        let SecantMethod {
            x0,
            x1,
            tolerance,
            max_iterations,
        } = SecantMethod::try_from(p)?;
        Ok(AitkenSecantMethod {
            x0,
            x1,
            tolerance,
            max_iterations,
        })
    }
}

impl TryFrom<SingleGuessParams> for SteffensenMethod {
    type Error = BuildError;

    fn try_from(p: SingleGuessParams) -> Result<Self, Self::Error> {
        Ok(SteffensenMethod {
            x0: p.x0,
            tolerance: p.tolerance,
            max_iterations: count("max_iterations", p.max_iterations)?,
        })
    }
}

impl TryFrom<SingleGuessParams> for FixedPointMethod {
    type Error = BuildError;

    fn try_from(p: SingleGuessParams) -> Result<Self, Self::Error> {
        Ok(FixedPointMethod {
            x0: p.x0,
            tolerance: p.tolerance,
            max_iterations: count("max_iterations", p.max_iterations)?,
        })
    }
}

impl TryFrom<MullerParams> for MullerMethod {
    type Error = BuildError;

    fn try_from(p: MullerParams) -> Result<Self, Self::Error> {
        if p.x0 == p.x1 || p.x1 == p.x2 || p.x0 == p.x2 {
            return Err(BuildError::InvalidParameter(
                "Muller needs three distinct starting points".into(),
            ));
        }
        Ok(MullerMethod {
            x0: p.x0,
            x1: p.x1,
            x2: p.x2,
            tolerance: p.tolerance,
            max_iterations: count("max_iterations", p.max_iterations)?,
        })
    }
}
