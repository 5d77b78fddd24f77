use numlab::ui::types::build::build_task;
use numlab::ui::types::choices::TaskChoice;
use std::fs;

const RICHARDSON_TASK: &str = r#"{
    "type": "solve",
    "params": {
        "method": {
            "type": "richardson",
            "params": { "scheme": "central", "x": 2.0, "h": 0.2 }
        },
        "function": { "type": "x-exp" },
        "precision": 4,
        "error_precision": 6
    }
}"#;

#[test]
fn richardson_task_from_json() {
    let choice: TaskChoice = serde_json::from_str(RICHARDSON_TASK).unwrap();
    let task = build_task(choice).unwrap();
    let outcome = task.run().unwrap();

    let r = outcome.get("Richardson extrapolation").unwrap();
    approx::assert_abs_diff_eq!(r, 22.1670, epsilon = 5e-5);

    let exact = 3.0 * 2f64.exp();
    let err = outcome.get("Absolute error").unwrap();
    approx::assert_abs_diff_eq!(err, (r - exact).abs(), epsilon = 1e-12);
    assert!(err < 2e-4);
}

#[test]
fn romberg_task_exports_its_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("romberg.csv");
    let json = serde_json::json!({
        "type": "solve",
        "params": {
            "method": {
                "type": "romberg",
                "params": { "a": 0.0, "b": 1.0, "max_iterations": 6 }
            },
            "function": { "type": "exp" },
            "export_path": path.to_str().unwrap(),
        }
    });

    let choice: TaskChoice = serde_json::from_value(json).unwrap();
    let outcome = build_task(choice).unwrap().run().unwrap();

    let integral = outcome.get("Integral").unwrap();
    approx::assert_abs_diff_eq!(integral, 1f64.exp() - 1.0, epsilon = 1e-8);

    let csv = fs::read_to_string(&path).unwrap();
    assert!(csv.lines().next().unwrap().starts_with("R0"));
}
