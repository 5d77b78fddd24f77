use crate::methods::{NewtonCotesMethod, RombergMethod};
use crate::ui::types::build::BuildError;
use crate::ui::types::build::error::{count, finite};
use crate::ui::types::choices::{NewtonCotesParams, RombergParams};
use std::convert::TryFrom;

impl TryFrom<NewtonCotesParams> for NewtonCotesMethod {
    type Error = BuildError;

    fn try_from(p: NewtonCotesParams) -> Result<Self, Self::Error> {
        Ok(NewtonCotesMethod {
            rule: p.rule,
            a: finite("a", p.a)?,
            b: finite("b", p.b)?,
            n: count("n", p.n)?,
        })
    }
}

impl TryFrom<RombergParams> for RombergMethod {
    type Error = BuildError;

    fn try_from(p: RombergParams) -> Result<Self, Self::Error> {
        Ok(RombergMethod {
            a: finite("a", p.a)?,
            b: finite("b", p.b)?,
            max_iterations: count("max_iterations", p.max_iterations)?,
            tolerance: p.tolerance,
        })
    }
}
