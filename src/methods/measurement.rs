use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeasurementKind {
    Value,
    /// Rendered with the error precision.
    Error,
    /// Rendered as an integer.
    Count,
}

/// Named scalar produced by a numerical method.
///
/// Typical examples: `f(2.2)`, `"Richardson extrapolation"`, `"Absolute error"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub name: String,
    /// Rendered as `name(argument)` when present.
    pub argument: Option<f64>,
    pub value: f64,
    pub kind: MeasurementKind,
}

impl Measurement {
    #[inline]
    pub fn scalar<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            argument: None,
            value,
            kind: MeasurementKind::Value,
        }
    }

    #[inline]
    pub fn at<N: Into<String>>(name: N, argument: f64, value: f64) -> Self {
        Self {
            argument: Some(argument),
            ..Self::scalar(name, value)
        }
    }

    #[inline]
    pub fn error<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            kind: MeasurementKind::Error,
            ..Self::scalar(name, value)
        }
    }

    #[inline]
    pub fn count<N: Into<String>>(name: N, n: usize) -> Self {
        Self {
            kind: MeasurementKind::Count,
            ..Self::scalar(name, n as f64)
        }
    }
}
