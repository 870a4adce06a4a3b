//! Pre-evaluation syntax screening.
//!
//! These checks run before the sandbox sees the source and produce friendlier
//! reports than a bare engine parse error. Bracket counting is deliberately
//! naive (it counts occurrences inside strings too); the checks are advisory
//! screens, not a parser.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CONST_NO_INIT: Regex = Regex::new(r"const\s+(\w+)\s*;").unwrap();
}

/// Returns the rejection report for the first failed check, if any.
/// Check order: const initializer, then braces, parentheses, brackets.
pub fn check(code: &str) -> Option<String> {
    if code.contains("const ") {
        if let Some(caps) = CONST_NO_INIT.captures(code) {
            let name = caps.get(1).map(|m| m.as_str()).unwrap_or("variable");
            return Some(format!(
                "❌ JavaScript/TypeScript Error: Missing initializer in const declaration for '{name}'

🔧 Quick fixes:
• Add a value: const {name} = 'your_value';
• Use let instead: let {name};
• Use var instead: var {name};

📝 Your code:
{code}

💡 Tip: const variables must be initialized when declared."
            ));
        }
    }

    let opened = code.matches('{').count();
    let closed = code.matches('}').count();
    if opened != closed {
        return Some(format!(
            "❌ Syntax Error: Mismatched curly braces {{ }}

🔍 Found: {opened} opening {{ and {closed} closing }}
🔧 Check your function definitions, if statements, and object literals.

📝 Your code:
{code}"
        ));
    }

    let opened = code.matches('(').count();
    let closed = code.matches(')').count();
    if opened != closed {
        return Some(format!(
            "❌ Syntax Error: Mismatched parentheses ( )

🔍 Found: {opened} opening ( and {closed} closing )
🔧 Check your function calls and expressions.

📝 Your code:
{code}"
        ));
    }

    let opened = code.matches('[').count();
    let closed = code.matches(']').count();
    if opened != closed {
        return Some(format!(
            "❌ Syntax Error: Mismatched square brackets [ ]

🔍 Found: {opened} opening [ and {closed} closing ]
🔧 Check your array definitions and property access.

📝 Your code:
{code}"
        ));
    }

    None
}
