use crate::core::CatalogFunction;
use crate::ui::types::build::BuildError;
use crate::ui::types::build::error::finite;
use crate::ui::types::choices::FunctionChoice;

pub fn build_function(choice: FunctionChoice) -> Result<CatalogFunction, BuildError> {
    Ok(match choice {
        FunctionChoice::XExp => CatalogFunction::XExp,
        FunctionChoice::Sine => CatalogFunction::Sine,
        FunctionChoice::Cosine => CatalogFunction::Cosine,
        FunctionChoice::Exp => CatalogFunction::Exp,
        FunctionChoice::Ln => CatalogFunction::Ln,
        FunctionChoice::Sqrt => CatalogFunction::Sqrt,
        FunctionChoice::Polynomial(p) => {
            let mut coefficients = p
                .coefficients()
                .into_iter()
                .enumerate()
                .map(|(i, c)| finite(&format!("c{i}"), c))
                .collect::<Result<Vec<_>, _>>()?;
            while coefficients.len() > 1 && coefficients.last() == Some(&0.0) {
                coefficients.pop();
            }
            CatalogFunction::Polynomial(coefficients)
        }
    })
}
