use crate::ui::types::choices::UIChoice;
use crate::ui::types::choices::ui_choice::params_of;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// Coefficients of `c0 + c1 x + c2 x^2 + c3 x^3 + c4 x^4`.
///
/// Defaults to `x^3 + 3x^2 + 12x + 8`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PolynomialParams {
    #[schemars(title = "c0", description = "Constant term")]
    pub c0: f64,
    #[schemars(title = "c1", description = "Coefficient of x")]
    pub c1: f64,
    #[schemars(title = "c2", description = "Coefficient of x^2")]
    pub c2: f64,
    #[schemars(title = "c3", description = "Coefficient of x^3")]
    pub c3: f64,
    #[schemars(title = "c4", description = "Coefficient of x^4")]
    pub c4: f64,
}

impl Default for PolynomialParams {
    fn default() -> Self {
        Self {
            c0: 8.0,
            c1: 12.0,
            c2: 3.0,
            c3: 1.0,
            c4: 0.0,
        }
    }
}

impl PolynomialParams {
    pub fn coefficients(&self) -> Vec<f64> {
        vec![self.c0, self.c1, self.c2, self.c3, self.c4]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(FunctionKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum FunctionChoice {
    #[strum_discriminants(strum(message = "x·eˣ", detailed_message = "f'(x) = (1 + x)·eˣ"))]
    XExp,

    #[strum_discriminants(strum(message = "sin(x)"))]
    Sine,

    #[strum_discriminants(strum(message = "cos(x)"))]
    Cosine,

    #[strum_discriminants(strum(message = "eˣ"))]
    Exp,

    #[strum_discriminants(strum(message = "ln(x)", detailed_message = "Defined for x > 0."))]
    Ln,

    #[strum_discriminants(strum(message = "√x", detailed_message = "Defined for x ≥ 0."))]
    Sqrt,

    #[strum_discriminants(strum(
        message = "Polynomial",
        detailed_message = "Up to degree 4, coefficients entered one by one."
    ))]
    Polynomial(PolynomialParams),
}

impl UIChoice for FunctionChoice {
    type Kind = FunctionKind;

    fn schema() -> Schema {
        schema_for!(FunctionChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a function:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            FunctionKind::Polynomial => params_of(PolynomialParams::default()),
            _ => Value::Null,
        }
    }

    fn from_parts(kind: Self::Kind, params: Value) -> anyhow::Result<Self> {
        Ok(match kind {
            FunctionKind::XExp => FunctionChoice::XExp,
            FunctionKind::Sine => FunctionChoice::Sine,
            FunctionKind::Cosine => FunctionChoice::Cosine,
            FunctionKind::Exp => FunctionChoice::Exp,
            FunctionKind::Ln => FunctionChoice::Ln,
            FunctionKind::Sqrt => FunctionChoice::Sqrt,
            FunctionKind::Polynomial => FunctionChoice::Polynomial(serde_json::from_value(params)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unit_variants_need_no_params() {
        let f: FunctionChoice = serde_json::from_value(json!({ "type": "x-exp" })).unwrap();
        assert_eq!(f, FunctionChoice::XExp);
        assert_eq!(
            FunctionChoice::from_parts(FunctionKind::Sine, json!({})).unwrap(),
            FunctionChoice::Sine
        );
    }

    #[test]
    fn polynomial_defaults_fill_missing_coefficients() {
        let f: FunctionChoice =
            serde_json::from_value(json!({ "type": "polynomial", "params": { "c2": 0.5 } }))
                .unwrap();
        let FunctionChoice::Polynomial(p) = f else {
            panic!("expected polynomial");
        };
        assert_eq!(p.coefficients(), [8.0, 12.0, 0.5, 1.0, 0.0]);
    }
}
