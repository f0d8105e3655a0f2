//! JavaScript snippets shared by the targets.

use gsl_model::Argument;
use serde_json::{Map, Number, Value};

/// Single-quoted JavaScript string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Typed parameter list, e.g. `text: string, level: number`.
pub fn params(args: &[Argument]) -> String {
    args.iter()
        .map(|a| format!("{}: {}", a.name, a.ty))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Comma-separated argument names.
pub fn names(args: &[Argument]) -> String {
    args.iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Destructuring pattern for a command payload: `{ a, b }`, or `{}`.
pub fn payload(args: &[Argument]) -> String {
    if args.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", names(args))
    }
}

/// Block-editor argument definition as it appears in `args0`.
///
/// Keys keep declaration order: `type`, `name`, then the editor attributes.
pub fn block_arg_json(arg: &Argument) -> Value {
    let mut map = Map::new();
    map.insert("type".to_string(), Value::String(arg.ty.clone()));
    if !arg.name.is_empty() {
        map.insert("name".to_string(), Value::String(arg.name.clone()));
    }
    for (key, value) in &arg.extra {
        map.insert(key.clone(), toml_to_json(value));
    }
    Value::Object(map)
}

fn toml_to_json(value: &toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Integer(i) => Value::Number((*i).into()),
        toml::Value::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(*b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), toml_to_json(v)))
                .collect(),
        ),
    }
}
