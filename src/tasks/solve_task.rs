use crate::core::CatalogFunction;
use crate::methods::{MethodError, NumericalMethod, Outcome};
use crate::report::{ReportFormat, TableFormat, render};
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

/// Largest number of decimals `f64` can meaningfully show.
const MAX_PRECISION: usize = 17;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Method(#[from] MethodError),

    #[error("failed to export table to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: Error,
    },
}

/// Runs one numerical method on one catalog function and reports the result.
pub struct SolveTask {
    method: Box<dyn NumericalMethod>,
    function: CatalogFunction,
    format: ReportFormat,
    export: Option<PathBuf>,

    report_tx: Option<Sender<String>>,
}

impl SolveTask {
    pub fn new(
        method: Box<dyn NumericalMethod>,
        function: CatalogFunction,
        format: ReportFormat,
        export: Option<PathBuf>,
    ) -> Result<Self, Error> {
        if format.precision > MAX_PRECISION || format.error_precision > MAX_PRECISION {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("precision must be <= {MAX_PRECISION}"),
            ));
        }
        if let Some(p) = &export {
            if p.as_os_str().is_empty() || p.is_dir() {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    "export path must name a file",
                ));
            }
        }

        Ok(Self {
            method,
            function,
            format,
            export,
            report_tx: None,
        })
    }

    /// Sends the rendered report to `tx` once the run finishes.
    pub fn with_report_channel(mut self, tx: Sender<String>) -> Self {
        self.report_tx = Some(tx);
        self
    }

    pub fn format(&self) -> &ReportFormat {
        &self.format
    }

    pub fn export_path(&self) -> Option<&Path> {
        self.export.as_deref()
    }

    pub fn run(&self) -> Result<Outcome, TaskError> {
        let start = Instant::now();
        info!(
            target: "numlab::tasks",
            method = self.method.name(),
            function = %self.function,
            "solving"
        );

        let outcome = self.method.solve(&self.function)?;

        info!(
            target: "numlab::tasks",
            measurements = outcome.measurements.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "solved"
        );

        if let Some(path) = &self.export {
            match &outcome.table {
                Some(table) => {
                    table
                        .export(path, TableFormat::from_path(path))
                        .map_err(|source| TaskError::Export {
                            path: path.clone(),
                            source,
                        })?;
                    info!(
                        target: "numlab::tasks",
                        path = %path.display(),
                        rows = table.len(),
                        "table exported"
                    );
                }
                None => {
                    warn!(
                        target: "numlab::tasks",
                        method = self.method.name(),
                        "method produces no table; nothing exported"
                    );
                }
            }
        }

        if let Some(tx) = &self.report_tx {
            let _ = tx.send(render(&outcome, &self.format));
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differentiation::{DifferentiationError, RichardsonEstimator};
    use crate::methods::{FiniteDifferenceMethod, RichardsonMethod};
    use std::fs;
    use std::sync::mpsc;
    use tempfile::tempdir;

    fn richardson(h: f64) -> Box<dyn NumericalMethod> {
        Box::new(RichardsonMethod::new(RichardsonEstimator::default(), 2.0, h))
    }

    #[test]
    fn ctor_guards() {
        let bad = ReportFormat {
            precision: 18,
            ..ReportFormat::default()
        };
        let err = SolveTask::new(richardson(0.2), CatalogFunction::XExp, bad, None)
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let dir = tempdir().unwrap();
        let err = SolveTask::new(
            richardson(0.2),
            CatalogFunction::XExp,
            ReportFormat::default(),
            Some(dir.path().to_path_buf()),
        )
        .err()
        .unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn run_renders_and_exports() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("samples.csv");
        let (tx, rx) = mpsc::channel();

        let task = SolveTask::new(
            richardson(0.2),
            CatalogFunction::XExp,
            ReportFormat::default(),
            Some(path.clone()),
        )
        .unwrap()
        .with_report_channel(tx);
        let outcome = task.run().unwrap();
        assert_eq!(outcome.method, "Richardson extrapolation");

        let text = rx.recv().unwrap();
        assert!(text.starts_with("Richardson extrapolation of x*exp(x)\n"));
        assert!(text.contains("f(2.2000) = 19.8550\n"));
        assert!(text.contains("Richardson extrapolation = 22.1670\n"));

        let csv = fs::read_to_string(&path).unwrap();
        assert_eq!(csv.lines().count(), 5);
        assert!(csv.starts_with("point,x,f(x)\nx+h,"));
    }

    #[test]
    fn missing_table_is_not_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nothing.csv");
        let method = Box::new(FiniteDifferenceMethod {
            scheme: Default::default(),
            x: 1.0,
            h: 0.1,
        });
        let task = SolveTask::new(
            method,
            CatalogFunction::Sine,
            ReportFormat::default(),
            Some(path.clone()),
        )
        .unwrap();
        task.run().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn method_errors_propagate() {
        let task = SolveTask::new(
            richardson(0.0),
            CatalogFunction::XExp,
            ReportFormat::default(),
            None,
        )
        .unwrap();
        match task.run() {
            Err(TaskError::Method(MethodError::Differentiation(
                DifferentiationError::InvalidStep { h },
            ))) => assert_eq!(h, 0.0),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
