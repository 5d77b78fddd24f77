use crate::methods::Measurement;
use crate::report::Table;

/// Result of running one method on one function.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub method: String,
    pub function: String,
    pub measurements: Vec<Measurement>,
    pub table: Option<Table>,
}

impl Outcome {
    pub fn new<M: Into<String>, F: Into<String>>(method: M, function: F) -> Self {
        Self {
            method: method.into(),
            function: function.into(),
            measurements: vec![],
            table: None,
        }
    }

    pub fn with(mut self, measurement: Measurement) -> Self {
        self.measurements.push(measurement);
        self
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.table = Some(table);
        self
    }

    /// Appends the exact value and absolute error when the reference is known.
    pub fn with_reference(
        self,
        name: &str,
        argument: Option<f64>,
        estimate: f64,
        exact: Option<f64>,
    ) -> Self {
        match exact.filter(|e| e.is_finite()) {
            Some(e) => {
                let m = match argument {
                    Some(a) => Measurement::at(name, a, e),
                    None => Measurement::scalar(name, e),
                };
                self.with(m)
                    .with(Measurement::error("Absolute error", (estimate - e).abs()))
            }
            None => self,
        }
    }

    /// First measurement with the given name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.measurements
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.value)
    }
}
