use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::methods::{Measurement, MeasurementKind, Outcome};

pub const DEFAULT_PRECISION: usize = 4;
pub const DEFAULT_ERROR_PRECISION: usize = 8;

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_error_precision() -> usize {
    DEFAULT_ERROR_PRECISION
}

/// Decimal places used when rendering an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportFormat {
    #[serde(default = "default_precision")]
    #[schemars(
        title = "Precision",
        description = "Decimal places for values",
        range(max = 17),
        default = "default_precision"
    )]
    pub precision: usize,

    #[serde(default = "default_error_precision")]
    #[schemars(
        title = "Error Precision",
        description = "Decimal places for absolute errors",
        range(max = 17),
        default = "default_error_precision"
    )]
    pub error_precision: usize,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            error_precision: DEFAULT_ERROR_PRECISION,
        }
    }
}

impl ReportFormat {
    pub fn measurement(&self, m: &Measurement) -> String {
        let p = self.precision;
        let label = match m.argument {
            Some(a) => format!("{}({a:.p$})", m.name),
            None => m.name.clone(),
        };
        match m.kind {
            MeasurementKind::Value => format!("{label} = {:.p$}", m.value),
            MeasurementKind::Error => {
                format!("{label} = {:.e$}", m.value, e = self.error_precision)
            }
            MeasurementKind::Count => format!("{label} = {}", m.value as u64),
        }
    }
}

/// Text report: a title line followed by one `name = value` line per
/// measurement.
pub fn render(outcome: &Outcome, format: &ReportFormat) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} of {}", outcome.method, outcome.function);
    for m in &outcome.measurements {
        let _ = writeln!(out, "{}", format.measurement(m));
    }
    out
}
