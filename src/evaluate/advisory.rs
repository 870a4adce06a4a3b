//! TypeScript feature advisories.
//!
//! The evaluator does not transpile. When a submission carries TypeScript
//! syntax these notes are prepended to the output so the author knows which
//! constructs the sandbox saw.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ANNOTATED_ASSIGN: Regex = Regex::new(r":\s*\w+\s*=").unwrap();
    static ref TYPE_ANNOTATION: Regex =
        Regex::new(r":\s*(string|number|boolean|object|any|void|null|undefined)\b").unwrap();
    static ref GENERICS: Regex = Regex::new(r"<[A-Z]\w*>").unwrap();
    static ref ACCESS_MODIFIER: Regex = Regex::new(r"(public|private|protected)\s+").unwrap();
    static ref OPTIONAL_PARAM: Regex = Regex::new(r"\w+\?\s*:").unwrap();
}

/// Advisory lines, in the order they should appear before program output.
pub fn notes(code: &str) -> Vec<String> {
    let mut lines = Vec::new();

    if code.contains(':') && ANNOTATED_ASSIGN.is_match(code) {
        lines.push("🔷 Note: TypeScript type annotations are stripped during execution.".to_string());
    }

    let features = detect_features(code);
    if !features.is_empty() {
        lines.push(format!(
            "🔷 TypeScript features detected: {}",
            features.join(", ")
        ));
        lines.push("🔷 Some features may not work in browser JavaScript execution.".to_string());
    }

    lines
}

/// Scan for TypeScript-only constructs. Order is fixed; it determines how
/// the detected-features line reads.
fn detect_features(code: &str) -> Vec<&'static str> {
    let mut features = Vec::new();

    if TYPE_ANNOTATION.is_match(code) {
        features.push("type annotations");
    }
    if code.contains("interface ") {
        features.push("interfaces");
    }
    if code.contains("enum ") {
        features.push("enums");
    }
    if GENERICS.is_match(code) {
        features.push("generics");
    }
    if ACCESS_MODIFIER.is_match(code) {
        features.push("access modifiers");
    }
    if OPTIONAL_PARAM.is_match(code) {
        features.push("optional parameters");
    }

    features
}
