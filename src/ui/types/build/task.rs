use crate::tasks::SolveTask;
use crate::ui::types::build::{BuildError, build_function, build_method};
use crate::ui::types::choices::TaskChoice;
use std::path::PathBuf;

pub fn build_task(choice: TaskChoice) -> Result<SolveTask, BuildError> {
    match choice {
        TaskChoice::Solve(p) => {
            let method = build_method(p.method)?;
            let function = build_function(p.function)?;
            let export = p
                .export_path
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from);

            Ok(SolveTask::new(method, function, p.format, export)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn solve(params: serde_json::Value) -> TaskChoice {
        serde_json::from_value(json!({ "type": "solve", "params": params })).unwrap()
    }

    #[test]
    fn builds_and_runs_richardson_on_x_exp() {
        let task = build_task(solve(json!({
            "method": { "type": "richardson", "params": { "x": 2.0, "h": 0.2 } },
            "function": { "type": "x-exp" },
            "precision": 4,
            "error_precision": 6,
        })))
        .unwrap();
        assert!(task.export_path().is_none());

        let outcome = task.run().unwrap();
        let r = outcome.get("Richardson extrapolation").unwrap();
        assert!((r - 22.1670).abs() < 5e-5);
    }

    #[test]
    fn blank_export_path_means_no_export() {
        let task = build_task(solve(json!({
            "method": {
                "type": "lagrange",
                "params": { "a": 0.0, "b": 3.0, "nodes": 4, "x": 1.3 }
            },
            "function": { "type": "sine" },
            "export_path": "  ",
        })))
        .unwrap();
        assert!(task.export_path().is_none());
    }

    #[test]
    fn oversized_precision_surfaces_as_io_error() {
        let err = build_task(solve(json!({
            "method": {
                "type": "romberg",
                "params": { "a": 0.0, "b": 1.0, "max_iterations": 8 }
            },
            "function": { "type": "exp" },
            "precision": 30,
        })))
        .err()
        .unwrap();
        assert!(matches!(err, BuildError::Io(_)));
    }
}
