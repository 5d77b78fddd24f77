use crate::differentiation::DifferenceScheme;
use crate::methods::{BracketingRule, NewtonCotesRule, TabulatedFormula};
use crate::ui::types::choices::UIChoice;
use crate::ui::types::choices::ui_choice::params_of;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_TOLERANCE: f64 = 1e-8;
const DEFAULT_MAX_ITERATIONS: u64 = 100;

fn default_x() -> f64 {
    2.0
}
fn default_h() -> f64 {
    0.2
}
fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}
fn default_max_iterations() -> u64 {
    DEFAULT_MAX_ITERATIONS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RichardsonParams {
    #[serde(default)]
    #[schemars(
        title = "Scheme",
        description = "Base difference formula; sets the error order p"
    )]
    pub scheme: DifferenceScheme,

    #[serde(default = "default_x")]
    #[schemars(title = "Point x", description = "Where to differentiate", default = "default_x")]
    pub x: f64,

    #[serde(default = "default_h")]
    #[schemars(
        title = "Step h",
        description = "Initial step, must be non-zero",
        default = "default_h"
    )]
    pub h: f64,

    #[serde(default)]
    #[schemars(
        title = "Error Order",
        description = "Override p (None = taken from the scheme)",
        range(min = 1, max = 52)
    )]
    pub order: Option<u32>,
}

impl Default for RichardsonParams {
    fn default() -> Self {
        Self {
            scheme: DifferenceScheme::Central,
            x: default_x(),
            h: default_h(),
            order: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DifferenceParams {
    #[serde(default)]
    #[schemars(title = "Scheme", description = "Forward, backward or central")]
    pub scheme: DifferenceScheme,

    #[serde(default = "default_x")]
    #[schemars(title = "Point x", description = "Where to differentiate", default = "default_x")]
    pub x: f64,

    #[serde(default = "default_h")]
    #[schemars(title = "Step h", description = "Step, must be non-zero", default = "default_h")]
    pub h: f64,
}

impl Default for DifferenceParams {
    fn default() -> Self {
        Self {
            scheme: DifferenceScheme::Central,
            x: default_x(),
            h: default_h(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SecondDerivativeParams {
    #[serde(default = "default_x")]
    #[schemars(title = "Point x", description = "Where to differentiate", default = "default_x")]
    pub x: f64,

    #[serde(default = "default_h")]
    #[schemars(title = "Step h", description = "Step, must be non-zero", default = "default_h")]
    pub h: f64,
}

impl Default for SecondDerivativeParams {
    fn default() -> Self {
        Self {
            x: default_x(),
            h: default_h(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TabulatedParams {
    #[schemars(
        title = "Abscissae",
        description = "Strictly increasing sample points, comma separated"
    )]
    pub xs: Vec<f64>,

    #[schemars(title = "Index", description = "Zero-based node to differentiate at")]
    pub index: usize,

    #[serde(default)]
    #[schemars(
        title = "Formula",
        description = "Two-point forward/backward or three-point centered"
    )]
    pub formula: TabulatedFormula,
}

impl Default for TabulatedParams {
    fn default() -> Self {
        Self {
            xs: vec![1.0, 1.5, 2.2, 3.0],
            index: 1,
            formula: TabulatedFormula::Centered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NewtonCotesParams {
    #[serde(default)]
    #[schemars(title = "Rule", description = "Trapezoid, Simpson 1/3 or Simpson 3/8")]
    pub rule: NewtonCotesRule,

    #[schemars(title = "Lower Bound a")]
    pub a: f64,

    #[schemars(title = "Upper Bound b")]
    pub b: f64,

    #[schemars(
        title = "Subintervals",
        description = "Even for Simpson 1/3, a multiple of 3 for Simpson 3/8",
        range(min = 1)
    )]
    pub n: u64,
}

impl Default for NewtonCotesParams {
    fn default() -> Self {
        Self {
            rule: NewtonCotesRule::SimpsonOneThird,
            a: 0.0,
            b: 1.0,
            n: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RombergParams {
    #[schemars(title = "Lower Bound a")]
    pub a: f64,

    #[schemars(title = "Upper Bound b")]
    pub b: f64,

    #[schemars(
        title = "Max Rows",
        description = "Rows of the Romberg table",
        range(min = 1, max = 25)
    )]
    pub max_iterations: u64,

    #[serde(default = "default_tolerance")]
    #[schemars(
        title = "Tolerance",
        description = "Stop when successive diagonal entries differ by less",
        default = "default_tolerance"
    )]
    pub tolerance: f64,
}

impl Default for RombergParams {
    fn default() -> Self {
        Self {
            a: 0.0,
            b: 1.0,
            max_iterations: 10,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BracketingParams {
    #[serde(default)]
    #[schemars(title = "Rule", description = "Bisection or false position")]
    pub rule: BracketingRule,

    #[schemars(title = "Left Endpoint a")]
    pub a: f64,

    #[schemars(title = "Right Endpoint b", description = "f(a) and f(b) must differ in sign")]
    pub b: f64,

    #[serde(default = "default_tolerance")]
    #[schemars(title = "Tolerance", default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(default = "default_max_iterations")]
    #[schemars(title = "Max Iterations", range(min = 1), default = "default_max_iterations")]
    pub max_iterations: u64,
}

impl Default for BracketingParams {
    fn default() -> Self {
        Self {
            rule: BracketingRule::Bisection,
            a: -1.0,
            b: 0.0,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NewtonParams {
    #[schemars(title = "Initial Guess x0")]
    pub x0: f64,

    #[serde(default = "default_h")]
    #[schemars(
        title = "Step h",
        description = "Step of the Richardson slope estimate",
        default = "default_h"
    )]
    pub h: f64,

    #[serde(default = "default_tolerance")]
    #[schemars(title = "Tolerance", default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(default = "default_max_iterations")]
    #[schemars(title = "Max Iterations", range(min = 1), default = "default_max_iterations")]
    pub max_iterations: u64,
}

impl Default for NewtonParams {
    fn default() -> Self {
        Self {
            x0: 0.0,
            h: default_h(),
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SecantParams {
    #[schemars(title = "First Guess x0")]
    pub x0: f64,

    #[schemars(title = "Second Guess x1")]
    pub x1: f64,

    #[serde(default = "default_tolerance")]
    #[schemars(title = "Tolerance", default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(default = "default_max_iterations")]
    #[schemars(title = "Max Iterations", range(min = 1), default = "default_max_iterations")]
    pub max_iterations: u64,
}

impl Default for SecantParams {
    fn default() -> Self {
        Self {
            x0: -2.0,
            x1: 0.0,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AitkenBisectionParams {
    #[schemars(title = "Left Endpoint a")]
    pub a: f64,

    #[schemars(title = "Right Endpoint b", description = "f(a) and f(b) must differ in sign")]
    pub b: f64,

    #[serde(default = "default_tolerance")]
    #[schemars(title = "Tolerance", default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(default = "default_max_iterations")]
    #[schemars(title = "Max Iterations", range(min = 1), default = "default_max_iterations")]
    pub max_iterations: u64,
}

impl Default for AitkenBisectionParams {
    fn default() -> Self {
        Self {
            a: -1.0,
            b: 0.0,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Methods started from a single guess (Steffensen, fixed point).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SingleGuessParams {
    #[schemars(title = "Initial Guess x0")]
    pub x0: f64,

    #[serde(default = "default_tolerance")]
    #[schemars(title = "Tolerance", default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(default = "default_max_iterations")]
    #[schemars(title = "Max Iterations", range(min = 1), default = "default_max_iterations")]
    pub max_iterations: u64,
}

impl Default for SingleGuessParams {
    fn default() -> Self {
        Self {
            x0: 1.0,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MullerParams {
    #[schemars(title = "First Guess x0")]
    pub x0: f64,

    #[schemars(title = "Second Guess x1")]
    pub x1: f64,

    #[schemars(title = "Third Guess x2")]
    pub x2: f64,

    #[serde(default = "default_tolerance")]
    #[schemars(title = "Tolerance", default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(default = "default_max_iterations")]
    #[schemars(title = "Max Iterations", range(min = 1), default = "default_max_iterations")]
    pub max_iterations: u64,
}

impl Default for MullerParams {
    fn default() -> Self {
        Self {
            x0: -2.0,
            x1: -1.0,
            x2: 0.0,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Deflation takes everything from the polynomial itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct DeflationParams {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaylorParams {
    #[schemars(title = "Center x0", description = "Expansion point")]
    pub x0: f64,

    #[schemars(title = "Degree", range(min = 0, max = 170))]
    pub degree: u64,

    #[schemars(title = "Point x", description = "Where to evaluate the polynomial")]
    pub x: f64,
}

impl Default for TaylorParams {
    fn default() -> Self {
        Self {
            x0: 0.0,
            degree: 5,
            x: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LagrangeParams {
    #[schemars(title = "Lower Bound a", description = "First node")]
    pub a: f64,

    #[schemars(title = "Upper Bound b", description = "Last node")]
    pub b: f64,

    #[schemars(
        title = "Nodes",
        description = "Number of equally spaced nodes",
        range(min = 1)
    )]
    pub nodes: u64,

    #[schemars(title = "Point x", description = "Where to evaluate the polynomial")]
    pub x: f64,
}

impl Default for LagrangeParams {
    fn default() -> Self {
        Self {
            a: 0.0,
            b: 3.0,
            nodes: 4,
            x: 1.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(MethodKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum MethodChoice {
    #[strum_discriminants(strum(
        message = "Richardson Extrapolation",
        detailed_message = "First derivative from steps h and h/2."
    ))]
    Richardson(RichardsonParams),

    #[strum_discriminants(strum(
        message = "Finite Difference",
        detailed_message = "Single forward, backward or central difference."
    ))]
    FiniteDifference(DifferenceParams),

    #[strum_discriminants(strum(
        message = "Second Derivative",
        detailed_message = "Three-point central formula."
    ))]
    SecondDerivative(SecondDerivativeParams),

    #[strum_discriminants(strum(
        message = "Unequal Spacing",
        detailed_message = "Derivative from tabulated, unevenly spaced samples."
    ))]
    Tabulated(TabulatedParams),

    #[strum_discriminants(strum(
        message = "Newton-Cotes Integration",
        detailed_message = "Composite trapezoid or Simpson rules."
    ))]
    NewtonCotes(NewtonCotesParams),

    #[strum_discriminants(strum(
        message = "Romberg Integration",
        detailed_message = "Richardson extrapolation of the trapezoid rule."
    ))]
    Romberg(RombergParams),

    #[strum_discriminants(strum(
        message = "Bracketing Root",
        detailed_message = "Bisection or false position on a sign change."
    ))]
    Bracketing(BracketingParams),

    #[strum_discriminants(strum(
        message = "Newton-Raphson Root",
        detailed_message = "Open method with a Richardson slope."
    ))]
    Newton(NewtonParams),

    #[strum_discriminants(strum(
        message = "Secant Root",
        detailed_message = "Open method from two starting points."
    ))]
    Secant(SecantParams),

    #[strum_discriminants(strum(
        message = "Bisection with Aitken",
        detailed_message = "Bisection midpoints accelerated with Aitken's delta-squared."
    ))]
    AitkenBisection(AitkenBisectionParams),

    #[strum_discriminants(strum(
        message = "Secant with Aitken",
        detailed_message = "Secant iterates accelerated with Aitken's delta-squared."
    ))]
    AitkenSecant(SecantParams),

    #[strum_discriminants(strum(
        message = "Steffensen Root",
        detailed_message = "Derivative-free, quadratically convergent open method."
    ))]
    Steffensen(SingleGuessParams),

    #[strum_discriminants(strum(
        message = "Muller Root",
        detailed_message = "Parabola through the last three iterates."
    ))]
    Muller(MullerParams),

    #[strum_discriminants(strum(
        message = "Fixed Point",
        detailed_message = "Iterates x = g(x) with the function as g."
    ))]
    FixedPoint(SingleGuessParams),

    #[strum_discriminants(strum(
        message = "Polynomial Deflation",
        detailed_message = "Every real and complex root of a polynomial."
    ))]
    Deflation(DeflationParams),

    #[strum_discriminants(strum(
        message = "Lagrange Interpolation",
        detailed_message = "Polynomial through equally spaced samples."
    ))]
    Lagrange(LagrangeParams),

    #[strum_discriminants(strum(
        message = "Taylor Polynomial",
        detailed_message = "Truncated Taylor series from exact derivatives."
    ))]
    Taylor(TaylorParams),
}

impl UIChoice for MethodChoice {
    type Kind = MethodKind;

    fn schema() -> Schema {
        schema_for!(MethodChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a method:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            MethodKind::Richardson => params_of(RichardsonParams::default()),
            MethodKind::FiniteDifference => params_of(DifferenceParams::default()),
            MethodKind::SecondDerivative => params_of(SecondDerivativeParams::default()),
            MethodKind::Tabulated => params_of(TabulatedParams::default()),
            MethodKind::NewtonCotes => params_of(NewtonCotesParams::default()),
            MethodKind::Romberg => params_of(RombergParams::default()),
            MethodKind::Bracketing => params_of(BracketingParams::default()),
            MethodKind::Newton => params_of(NewtonParams::default()),
            MethodKind::Secant | MethodKind::AitkenSecant => params_of(SecantParams::default()),
            MethodKind::AitkenBisection => params_of(AitkenBisectionParams::default()),
            MethodKind::Steffensen | MethodKind::FixedPoint => {
                params_of(SingleGuessParams::default())
            }
            MethodKind::Muller => params_of(MullerParams::default()),
            MethodKind::Deflation => params_of(DeflationParams::default()),
            MethodKind::Lagrange => params_of(LagrangeParams::default()),
            MethodKind::Taylor => params_of(TaylorParams::default()),
        }
    }
}
