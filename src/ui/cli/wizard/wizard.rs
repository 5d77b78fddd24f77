use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, UIChoice, schema_for, specs_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

const EXPORT_EXTENSIONS: &[&str] = &["csv", "tsv", "json"];

fn kind_items<K>() -> Vec<(K, String)>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            (k, text)
        })
        .collect()
}

pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let items = kind_items::<C::Kind>();
    let texts: Vec<String> = items.iter().map(|(_, t)| t.clone()).collect();

    let index = driver.ask_select(C::prompt_label(), C::prompt_help().unwrap_or(""), &texts, 0)?;
    let (choice_kind, _) = *items
        .get(index)
        .with_context(|| format!("selection {index} out of range"))?;

    let key: &'static str = choice_kind.into();
    let schema = schema_for::<C>();
    let specs = specs_for_kind(&schema, key)?;

    let defaults = C::default_params(choice_kind);

    let mut params = Map::new();
    for s in specs {
        let init = s.default.clone().or_else(|| defaults.get(&s.name).cloned());
        if let Some(val) = prompt_field(driver, &s, init)? {
            params.insert(s.name.clone(), val);
        }
    }

    if let Some(extra) = C::subprompts(driver, choice_kind)? {
        params.extend(extra);
    }
    C::from_parts(choice_kind, Value::Object(params))
}

fn prompt_field<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    init: Option<Value>,
) -> Result<Option<Value>> {
    let help = s.description.as_deref().unwrap_or("");

    let is_optional = !s.required
        && matches!(
            s.kind,
            FieldKind::Integer | FieldKind::Number | FieldKind::String
        )
        && matches!(init, None | Some(Value::Null));

    if is_optional {
        return prompt_optional(driver, s, help, init.as_ref());
    }

    Ok(Some(match s.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&s.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            Value::String(driver.ask_string(&s.title, help, &def)?)
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(
                &s.title,
                help,
                def,
                s.min.map(|x| x as u64),
                s.max.map(|x| x as u64),
            )?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(driver.ask_f64(&s.title, help, def, s.min, s.max)?)
        }
        FieldKind::NumberList => {
            let def = init
                .as_ref()
                .and_then(|v| v.as_array())
                .map(|a| {
                    a.iter()
                        .filter_map(Value::as_f64)
                        .map(|x| x.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            loop {
                let answer = driver.ask_string(&s.title, help, &def)?;
                match parse_number_list(&answer) {
                    Ok(xs) => break Value::from(xs),
                    Err(msg) => eprintln!("✗ {msg}"),
                }
            }
        }
        FieldKind::Enum => {
            let current = init.as_ref().and_then(|v| v.as_str());
            let def = s
                .options
                .iter()
                .position(|o| Some(o.as_str()) == current)
                .unwrap_or(0);
            let i = driver.ask_select(&s.title, help, &s.options, def)?;
            let picked = s
                .options
                .get(i)
                .with_context(|| format!("selection {i} out of range for {}", s.title))?;
            Value::String(picked.clone())
        }
    }))
}

/// Blank answer means "none"; export paths are re-asked until valid.
fn prompt_optional<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    help: &str,
    init: Option<&Value>,
) -> Result<Option<Value>> {
    let def_txt = match s.kind {
        FieldKind::Integer => init.and_then(|v| v.as_u64()).map(|n| n.to_string()),
        FieldKind::Number => init.and_then(|v| v.as_f64()).map(|x| x.to_string()),
        FieldKind::String => init.and_then(|v| v.as_str()).map(str::to_string),
        _ => None,
    }
    .unwrap_or_default();
    let help = format!("{help}\n(leave blank for none)");

    loop {
        let answer = driver.ask_string(&s.title, &help, &def_txt)?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        return Ok(Some(match s.kind {
            FieldKind::Integer => {
                let n: u64 = answer
                    .parse()
                    .with_context(|| format!("invalid integer for {}", s.title))?;
                Value::from(n)
            }
            FieldKind::Number => {
                let x: f64 = answer
                    .parse()
                    .with_context(|| format!("invalid number for {}", s.title))?;
                Value::from(x)
            }
            _ if s.name == "export_path" => {
                if let Err(msg) = validate_path_str(answer, false, true, EXPORT_EXTENSIONS) {
                    eprintln!("✗ {msg}");
                    continue;
                }
                Value::String(answer.to_string())
            }
            _ => Value::String(answer.to_string()),
        }));
    }
}

fn parse_number_list(input: &str) -> Result<Vec<f64>, String> {
    let xs = input
        .split([',', ' ', ';'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<f64>().map_err(|_| format!("not a number: {t}")))
        .collect::<Result<Vec<_>, _>>()?;
    if xs.is_empty() {
        return Err("Enter at least one number".into());
    }
    Ok(xs)
}

fn validate_path_str(
    input: &str,
    must_exist: bool,
    must_be_file: bool,
    allowed_exts: &[&str],
) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Path cannot be empty".into());
    }
    let p = Path::new(trimmed);

    if must_exist && !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if must_be_file && p.exists() && !p.is_file() {
        return Err("Expected a file path, not a directory".into());
    }
    if !allowed_exts.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if allowed_exts.iter().any(|e| e.eq_ignore_ascii_case(ext)) => {}
            _ => return Err(format!("Expected a .{} file", allowed_exts.join(" / ."))),
        }
    }
    Ok(())
}
