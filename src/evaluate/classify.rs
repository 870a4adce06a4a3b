//! Runtime error reports.
//!
//! Thrown errors are grouped by message pattern into one of five templates.
//! Matching is case-insensitive so the grouping survives engine wording
//! differences; the raw message always appears in the rendered report.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CONST_CONTEXT: Regex =
        Regex::new(r"Missing initializer in const declaration (.+)").unwrap();
    static ref UNDEFINED_NAME: Regex = Regex::new(r"(\w+) is not defined").unwrap();
}

/// Render the classified report for a thrown error message.
pub fn report(message: &str, code: &str) -> String {
    let lowered = message.to_lowercase();

    if lowered.contains("missing initializer") {
        let context = CONST_CONTEXT
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or("");
        return format!(
            "❌ JavaScript/TypeScript Error: Missing initializer in const declaration {context}

🔧 Common fixes:
• Add a value: const myVar = 'value';
• Use let instead: let myVar;
• Use var instead: var myVar;

📝 Your code:
{code}"
        );
    }

    if lowered.contains("unexpected token") {
        return format!(
            "❌ JavaScript/TypeScript Error: {message}

🔍 This might be due to:
• TypeScript syntax that's not supported in browser execution
• Missing semicolons or brackets
• Invalid JavaScript syntax
• Template literal syntax errors

🔧 Try these fixes:
• Check for missing quotes or brackets
• Remove TypeScript-specific syntax for browser execution
• Verify all strings are properly closed

📝 Your code:
{code}"
        );
    }

    if lowered.contains("is not defined") {
        let variable = UNDEFINED_NAME
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or("variable");
        return format!(
            "❌ ReferenceError: {variable} is not defined

🔍 Possible causes:
• Variable declared after it's used
• Typo in variable name
• Missing import statement
• Variable declared in different scope

🔧 Quick fixes:
• Check spelling: {variable}
• Declare before use: let {variable} = ...;
• Check variable scope

📝 Your code:
{code}"
        );
    }

    if lowered.contains("cannot read propert") {
        return format!(
            "❌ TypeError: {message}

🔍 This usually means you're trying to access a property of null/undefined

🔧 Common fixes:
• Check if object exists: if (obj && obj.property)
• Use optional chaining: obj?.property
• Initialize objects properly
• Add null/undefined checks

📝 Your code:
{code}"
        );
    }

    format!(
        "❌ JavaScript/TypeScript Error: {message}

📝 Your code:
{code}

💡 Need help? Check the browser console for more details."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_initializer_without_context() {
        let report = report("SyntaxError: Missing initializer in const declaration", "const a;");
        // No trailing context in the message: the header keeps its trailing
        // space and the template follows.
        assert!(report.starts_with(
            "❌ JavaScript/TypeScript Error: Missing initializer in const declaration \n"
        ));
        assert!(report.contains("• Add a value: const myVar = 'value';"));
    }

    #[test]
    fn test_missing_initializer_with_context() {
        let report = report(
            "Missing initializer in const declaration for pattern",
            "const [a];",
        );
        assert!(report
            .starts_with("❌ JavaScript/TypeScript Error: Missing initializer in const declaration for pattern"));
    }

    #[test]
    fn test_unexpected_token() {
        let message = "SyntaxError: Unexpected token ')'";
        let report = report(message, "f(;)");
        assert!(report.starts_with("❌ JavaScript/TypeScript Error: SyntaxError: Unexpected token ')'"));
        assert!(report.contains("• Template literal syntax errors"));
        assert!(report.contains("📝 Your code:\nf(;)"));
    }

    #[test]
    fn test_unexpected_token_lowercase_engine_wording() {
        let report = report("unexpected token ';' at line 1", "f(;)");
        assert!(report.starts_with("❌ JavaScript/TypeScript Error: unexpected token ';' at line 1"));
    }

    #[test]
    fn test_reference_not_defined() {
        let report = report("ReferenceError: total is not defined", "console.log(total);");
        assert!(report.starts_with("❌ ReferenceError: total is not defined"));
        assert!(report.contains("• Check spelling: total"));
        assert!(report.contains("• Declare before use: let total = ...;"));
    }

    #[test]
    fn test_property_of_null() {
        let message = "TypeError: Cannot read properties of null (reading 'name')";
        let report = report(message, "user.name");
        assert!(report.starts_with(&format!("❌ TypeError: {message}")));
        assert!(report.contains("• Use optional chaining: obj?.property"));
    }

    #[test]
    fn test_legacy_property_wording() {
        let report = report("Cannot read property 'x' of undefined", "o.x");
        assert!(report.starts_with("❌ TypeError: Cannot read property 'x' of undefined"));
    }

    #[test]
    fn test_generic_fallback() {
        let report = report("Error: boom", "throw new Error('boom')");
        assert!(report.starts_with("❌ JavaScript/TypeScript Error: Error: boom"));
        assert!(report.ends_with("💡 Need help? Check the browser console for more details."));
    }
}
