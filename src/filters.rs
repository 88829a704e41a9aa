//! Client-side keyword filtering for player search.
//!
//! A record matches when the string form of any of its top-level field values
//! contains the keyword, compared case-insensitively. The string form is
//! deliberately loose: nested objects render as `[object Object]` and arrays
//! join their elements with `,`, so a keyword can hit numeric ids or link
//! fields.

use serde_json::{Number, Value};


/// String form of a field value used for keyword matching.
pub fn field_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(field_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Integral floats print without a fraction (`1.0` -> `1`), as integers do.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{f:.0}")
            }
        }
        _ => n.to_string(),
    }
}

/// Whether any top-level field of `record` contains `keyword`.
///
/// Non-object records are matched on their own string form.
pub fn matches_keyword(record: &Value, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    match record {
        Value::Object(fields) => fields
            .values()
            .any(|v| field_text(v).to_lowercase().contains(&needle)),
        other => field_text(other).to_lowercase().contains(&needle),
    }
}

/// Records from `people` that match `keyword`, in their original order.
pub fn filter_by_keyword<'a>(people: &'a [Value], keyword: &str) -> Vec<&'a Value> {
    people
        .iter()
        .filter(|p| matches_keyword(p, keyword))
        .collect()
}
