use crate::report::ReportFormat;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::wizard::prompt_choice;
use crate::ui::types::choices::{FunctionChoice, MethodChoice, UIChoice};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SolveParams {
    #[schemars(skip)]
    pub method: MethodChoice,
    #[schemars(skip)]
    pub function: FunctionChoice,

    #[serde(flatten)]
    pub format: ReportFormat,

    #[serde(default)]
    #[schemars(
        title = "Export Path",
        description = "Write the method's table as .csv, .tsv or .json (None = no export)"
    )]
    pub export_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Solve",
        detailed_message = "Apply one numerical method to one function and report."
    ))]
    Solve(SolveParams),
}

impl UIChoice for TaskChoice {
    type Kind = TaskKind;

    fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }
    fn default_params(kind: Self::Kind) -> Value {
        let format = ReportFormat::default();
        match kind {
            TaskKind::Solve => json!({
                "precision": format.precision,
                "error_precision": format.error_precision,
                "export_path": null,
            }),
        }
    }

    fn subprompts<D: PromptDriver>(
        driver: &D,
        kind: Self::Kind,
    ) -> anyhow::Result<Option<Map<String, Value>>> {
        match kind {
            TaskKind::Solve => {
                let method = prompt_choice::<MethodChoice, _>(driver)?;
                let function = prompt_choice::<FunctionChoice, _>(driver)?;

                let mut m = Map::new();
                m.insert("method".into(), serde_json::to_value(method)?);
                m.insert("function".into(), serde_json::to_value(function)?);
                Ok(Some(m))
            }
        }
    }

    fn from_parts(kind: Self::Kind, params: Value) -> anyhow::Result<Self> {
        match kind {
            TaskKind::Solve => {
                let p: SolveParams = serde_json::from_value(params)?;
                Ok(TaskChoice::Solve(p))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::specs_for_kind;

    #[test]
    fn parses_minimal_config() {
        let t: TaskChoice = serde_json::from_value(json!({
            "type": "solve",
            "params": {
                "method": { "type": "richardson", "params": {} },
                "function": { "type": "x-exp" }
            }
        }))
        .unwrap();
        let TaskChoice::Solve(p) = t;
        assert_eq!(p.format, ReportFormat::default());
        assert_eq!(p.export_path, None);
        assert_eq!(p.function, FunctionChoice::XExp);
    }

    #[test]
    fn schema_lists_format_fields_but_not_nested_choices() {
        let schema = TaskChoice::schema();
        let specs = specs_for_kind(&schema, "solve").unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"precision"));
        assert!(names.contains(&"error_precision"));
        assert!(names.contains(&"export_path"));
        assert!(!names.contains(&"method"));
        assert!(!names.contains(&"function"));
    }
}
