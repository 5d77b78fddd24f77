use anyhow::{Context, Result, anyhow, bail};
use schemars::{Schema, schema_for};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
    /// Array of numbers, entered as a comma-separated list.
    NumberList,
    /// String restricted to [`FieldSpec::options`].
    Enum,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub options: Vec<String>,
}

// Return the whole tagged-enum schema for T
pub fn schema_for<T: schemars::JsonSchema>() -> Schema {
    schema_for!(T)
}

pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let alts = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(|v| v.as_array())
        .context("missing oneOf/anyOf")?;

    for branch in alts {
        let bobj = branch.as_object().context("branch is not object")?;
        let props = match bobj.get("properties").and_then(|v| v.as_object()) {
            Some(p) => p,
            None => continue,
        };

        if !discriminant_matches(props, kind_key) {
            continue;
        }

        let Some(params_obj) = props
            .get("params")
            .and_then(|v| v.as_object())
            .and_then(|o| resolve_ref_obj(root_obj, o))
        else {
            return Ok(vec![]);
        };

        let Some(params_props) = params_obj.get("properties").and_then(|v| v.as_object()) else {
            return Ok(vec![]);
        };

        let required: Vec<String> = params_obj
            .get("required")
            .and_then(|v| v.as_array())
            .map(|a| {
                a.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        let mut out = Vec::new();
        for (name, field_schema) in params_props {
            let field_obj = field_schema
                .as_object()
                .context("field schema not object")?;

            // metadata may sit next to the $ref, the type lives behind it
            let target = resolve_ref_obj(root_obj, field_obj)
                .ok_or_else(|| anyhow!("failed to resolve field $ref for '{name}'"))?;
            let meta = |key: &str| field_obj.get(key).or_else(|| target.get(key));

            let title = meta("title")
                .and_then(|v| v.as_str())
                .unwrap_or(name)
                .to_string();

            let description = meta("description")
                .and_then(|v| v.as_str())
                .map(str::to_string);

            let default = meta("default").cloned();

            let options: Vec<String> = target
                .get("enum")
                .and_then(|v| v.as_array())
                .map(|a| {
                    a.iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default();

            let Some(kind) = detect_field_kind(target, !options.is_empty()) else {
                continue;
            };

            let min = meta("minimum")
                .or_else(|| meta("exclusiveMinimum"))
                .and_then(|v| v.as_f64());

            let max = meta("maximum")
                .or_else(|| meta("exclusiveMaximum"))
                .and_then(|v| v.as_f64());

            out.push(FieldSpec {
                name: name.clone(),
                title,
                description,
                required: required.iter().any(|r| r == name),
                kind,
                default,
                min,
                max,
                options,
            });
        }

        return Ok(out);
    }

    bail!("no branch found for type={kind_key}");
}

fn discriminant_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tobj) = props.get("type").and_then(|v| v.as_object()) else {
        return false;
    };

    if tobj.get("const").and_then(|v| v.as_str()) == Some(kind_key) {
        return true;
    }
    // unit variants can be grouped into one branch
    tobj.get("enum")
        .and_then(|v| v.as_array())
        .is_some_and(|arr| arr.iter().any(|v| v.as_str() == Some(kind_key)))
}

/// Resolve a local $ref like "#/$defs/RichardsonParams" against the root object.
/// Returns the referenced object map, or None if it can't be resolved.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    match obj.get("$ref") {
        Some(Value::String(r)) => {
            let path = r.strip_prefix("#/")?;
            let mut cur: &Map<String, Value> = root_obj;
            for raw_seg in path.split('/') {
                // JSON Pointer unescape (~1 => /, ~0 => ~)
                let seg = raw_seg.replace("~1", "/").replace("~0", "~");
                cur = cur.get(&seg)?.as_object()?;
            }
            Some(cur)
        }
        _ => Some(obj),
    }
}

fn scalar_kind(s: &str) -> Option<FieldKind> {
    match s {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    }
}

fn detect_field_kind(obj: &Map<String, Value>, has_options: bool) -> Option<FieldKind> {
    if has_options {
        return Some(FieldKind::Enum);
    }
    let names: Vec<&str> = match obj.get("type") {
        Some(Value::String(s)) => vec![s.as_str()],
        // handle unions like ["null","integer"] for Option<T>
        Some(Value::Array(arr)) => arr.iter().filter_map(|v| v.as_str()).collect(),
        _ => return None,
    };
    if names.contains(&"array") {
        let item = obj
            .get("items")
            .and_then(|v| v.as_object())
            .and_then(|o| o.get("type"))
            .and_then(|v| v.as_str());
        return matches!(item, Some("number") | Some("integer")).then_some(FieldKind::NumberList);
    }
    names.into_iter().find_map(scalar_kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn root() -> Schema {
        let v = json!({
            "oneOf": [
                {
                    "type": "object",
                    "properties": { "type": { "type": "string", "enum": ["sine", "cosine"] } },
                    "required": ["type"]
                },
                {
                    "type": "object",
                    "properties": {
                        "type": { "type": "string", "const": "step" },
                        "params": { "$ref": "#/$defs/StepParams" }
                    }
                }
            ],
            "$defs": {
                "Scheme": { "type": "string", "enum": ["forward", "central"] },
                "StepParams": {
                    "type": "object",
                    "properties": {
                        "h": {
                            "type": "number",
                            "title": "Step h",
                            "exclusiveMinimum": 0.0,
                            "default": 0.2
                        },
                        "n": { "type": ["integer", "null"], "minimum": 1 },
                        "xs": { "type": "array", "items": { "type": "number" } },
                        "scheme": { "$ref": "#/$defs/Scheme", "title": "Scheme" },
                        "tags": { "type": "array", "items": { "type": "string" } }
                    },
                    "required": ["h", "xs"]
                }
            }
        });
        Schema::try_from(v).unwrap()
    }

    #[test]
    fn grouped_unit_variants_have_no_fields() {
        let root = root();
        assert!(specs_for_kind(&root, "cosine").unwrap().is_empty());
        assert!(specs_for_kind(&root, "tangent").is_err());
    }

    #[test]
    fn field_kinds_and_metadata() {
        let specs = specs_for_kind(&root(), "step").unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["h", "n", "xs", "scheme"]);

        assert_eq!(specs[0].title, "Step h");
        assert_eq!(specs[0].kind, FieldKind::Number);
        assert_eq!(specs[0].min, Some(0.0));
        assert_eq!(specs[0].default, Some(json!(0.2)));
        assert!(specs[0].required);

        assert_eq!(specs[1].kind, FieldKind::Integer);
        assert!(!specs[1].required);
        assert_eq!(specs[2].kind, FieldKind::NumberList);

        assert_eq!(specs[3].kind, FieldKind::Enum);
        assert_eq!(specs[3].title, "Scheme");
        assert_eq!(specs[3].options, ["forward", "central"]);
    }
}
