//! Output formatting for execution results.
//!
//! Two formats:
//! - Pretty: the result text verbatim under a small colored header
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::Serialize;

use crate::language::{self, Language};
use crate::outcome::{FailureKind, Outcome};
use crate::remote;

/// JSON report structure: one object per execution, stable field names.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub language: &'a str,
    pub kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_kind: Option<FailureKind>,
    pub text: &'a str,
}

impl<'a> JsonReport<'a> {
    /// `language_id` is whatever the caller asked for. Unknown ids are
    /// still reportable, their outcome is the not-supported note.
    pub fn new(language_id: &'a str, outcome: &'a Outcome) -> Self {
        Self {
            language: language_id,
            kind: outcome.kind_str(),
            failure_kind: outcome.failure_kind(),
            text: outcome.text(),
        }
    }
}

/// Write one outcome as JSON.
pub fn write_json(language_id: &str, outcome: &Outcome) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&JsonReport::new(language_id, outcome))?;
    println!("{}", json);
    Ok(())
}

/// Write one outcome for a human. The result text is the product and goes
/// through verbatim; only the header line around it gets color.
pub fn write_pretty(language_id: &str, outcome: &Outcome) {
    let display = Language::parse(language_id)
        .map(|lang| lang.display_name())
        .unwrap_or(language_id);
    print!("  {}", display.cyan().bold());
    match outcome {
        Outcome::Success(_) => println!("  {}", "ok".green()),
        Outcome::Diagnostic(_) => println!("  {}", "report".blue()),
        Outcome::Failure { kind, .. } => println!("  {}", format!("failed ({})", kind).red()),
    }
    println!();
    println!("{}", outcome.text());
}

/// Write the language listing with execution tiers.
pub fn write_languages() {
    println!();
    println!(
        "  {} ({})",
        "Supported languages".bold(),
        language::ALL.len()
    );
    println!();
    for lang in language::ALL {
        let remote_note = if remote::language_id(*lang).is_some() {
            "  [remote]"
        } else {
            ""
        };
        println!(
            "    {:<12} {:<12} {:<10}{}",
            lang.as_str(),
            lang.display_name(),
            lang.strategy().as_str(),
            remote_note.yellow()
        );
    }
    println!();
    println!("  Remote execution needs a judge API key (POLYRUN_JUDGE_API_KEY).");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_report_failure_shape() {
        let outcome = Outcome::failure(FailureKind::Runtime, "❌ boom");
        let value = serde_json::to_value(JsonReport::new("python", &outcome)).unwrap();
        assert_eq!(value["language"], "python");
        assert_eq!(value["kind"], "failure");
        assert_eq!(value["failure_kind"], "runtime");
        assert_eq!(value["text"], "❌ boom");
    }

    #[test]
    fn test_json_report_omits_failure_kind_when_not_failed() {
        let outcome = Outcome::success("hi");
        let value = serde_json::to_value(JsonReport::new("javascript", &outcome)).unwrap();
        assert_eq!(value["kind"], "success");
        assert!(value.get("failure_kind").is_none());
    }

    #[test]
    fn test_json_report_accepts_unknown_ids() {
        let outcome = Outcome::diagnostic("Code execution for brainfuck is not supported yet.");
        let value = serde_json::to_value(JsonReport::new("brainfuck", &outcome)).unwrap();
        assert_eq!(value["language"], "brainfuck");
        assert_eq!(value["kind"], "diagnostic");
    }
}
