//! JSON validation: parse, pretty-print, and summarize.

use serde_json::Value;

/// Maximum nesting depth the structure summarizer will describe.
const MAX_SUMMARY_DEPTH: usize = 3;

pub fn validate(code: &str) -> String {
    match serde_json::from_str::<Value>(code) {
        Ok(parsed) => report(&parsed),
        Err(err) => format!(
            "JSON parsing error: {err}

Tip: Check for:
- Missing quotes around strings
- Trailing commas
- Unescaped quotes in strings"
        ),
    }
}

fn report(parsed: &Value) -> String {
    // to_string_pretty uses two-space indentation, the same rendering as
    // JSON.stringify(value, null, 2).
    let pretty = serde_json::to_string_pretty(parsed).unwrap_or_else(|_| parsed.to_string());

    let type_name = if parsed.is_array() {
        "Array"
    } else {
        js_typeof(parsed)
    };

    let count_line = match parsed {
        Value::Array(items) => format!("Length: {}", items.len()),
        _ => format!("Keys: {}", key_count(parsed)),
    };

    format!(
        "JSON is valid! ✅

Parsed object:
{pretty}

Analysis:
- Type: {type_name}
- {count_line}
- Structure: {}",
        summarize(parsed, 0)
    )
}

/// JavaScript `typeof` names for parsed JSON values (`typeof null` is
/// "object").
fn js_typeof(value: &Value) -> &'static str {
    match value {
        Value::Null => "object",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) | Value::Object(_) => "object",
    }
}

/// Key count per `Object.keys` semantics: object keys, string index keys
/// (UTF-16 units), zero for everything else.
fn key_count(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.len(),
        Value::String(s) => s.encode_utf16().count(),
        _ => 0,
    }
}

fn summarize(value: &Value, depth: usize) -> String {
    if depth > MAX_SUMMARY_DEPTH {
        return "[Too deep to analyze]".to_string();
    }

    match value {
        Value::Array(items) => format!("Array({})", items.len()),
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
            let shown = keys
                .iter()
                .take(5)
                .copied()
                .collect::<Vec<_>>()
                .join(", ");
            let ellipsis = if keys.len() > 5 { "..." } else { "" };
            format!("Object{{{shown}{ellipsis}}}")
        }
        scalar => format!("{}: {}", js_typeof(scalar), coerce(scalar)),
    }
}

/// JavaScript string coercion for scalar values (no quotes around strings).
fn coerce(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_object() {
        let report = validate(r#"{"name": "Ada", "age": 36}"#);
        assert!(report.starts_with("JSON is valid! ✅"));
        assert!(report.contains("- Type: object"));
        assert!(report.contains("- Keys: 2"));
        assert!(report.contains("- Structure: Object{name, age}"));
    }

    #[test]
    fn test_valid_array() {
        let report = validate("[1, 2, 3]");
        assert!(report.contains("- Type: Array"));
        assert!(report.contains("- Length: 3"));
        assert!(report.contains("- Structure: Array(3)"));
    }

    #[test]
    fn test_pretty_print_round_trips() {
        let input = r#"{"b": [1, {"c": true}], "a": null}"#;
        let report = validate(input);

        // The pretty-printed block sits between the fixed markers.
        let start = report.find("Parsed object:\n").unwrap() + "Parsed object:\n".len();
        let end = report.find("\n\nAnalysis:").unwrap();
        let pretty = &report[start..end];

        let reparsed: Value = serde_json::from_str(pretty).expect("pretty block should parse");
        let original: Value = serde_json::from_str(input).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_key_order_preserved() {
        let report = validate(r#"{"zeta": 1, "alpha": 2}"#);
        assert!(report.contains("Object{zeta, alpha}"));
    }

    #[test]
    fn test_object_key_ellipsis() {
        let report = validate(r#"{"a":1,"b":2,"c":3,"d":4,"e":5,"f":6}"#);
        assert!(report.contains("Object{a, b, c, d, e...}"));
    }

    #[test]
    fn test_scalar_input() {
        let report = validate("42");
        assert!(report.contains("- Type: number"));
        assert!(report.contains("- Keys: 0"));
        assert!(report.contains("- Structure: number: 42"));
    }

    #[test]
    fn test_null_input_is_total() {
        let report = validate("null");
        assert!(report.contains("- Type: object"));
        assert!(report.contains("- Structure: object: null"));
    }

    #[test]
    fn test_invalid_input() {
        let report = validate("{invalid}");
        assert!(report.starts_with("JSON parsing error: "));
        assert!(report.contains("- Missing quotes around strings"));
        assert!(report.contains("- Trailing commas"));
        assert!(report.contains("- Unescaped quotes in strings"));
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        let report = validate("");
        assert!(report.starts_with("JSON parsing error: "));
    }
}
