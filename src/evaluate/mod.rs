//! In-process JavaScript/TypeScript evaluation.
//!
//! Each call runs in a fresh boa context. The sandbox exposes exactly one
//! host surface: a replacement `console` installed by a prelude script. No
//! timers, no fetch, no filesystem, no process state. TypeScript is not
//! transpiled: annotated sources run as-is when they happen to be valid
//! JavaScript, and advisory notes explain the gap.

mod advisory;
mod classify;
mod preflight;

use boa_engine::{Context, Source};

use crate::outcome::{FailureKind, Outcome};

const CONSOLE_PRELUDE: &str = include_str!("console.js");

/// Reads the buffered console lines back out of the sandbox. Programs can
/// reassign the buffer, so the readback checks it is still an array.
const READ_OUTPUT: &str =
    r#"Array.isArray(globalThis.__lines) ? globalThis.__lines.join("\n") : """#;

/// Evaluate one submission and produce its displayable outcome.
///
/// Pre-flight rejections are diagnostics; thrown errors come back as
/// classified runtime failures; advisory lines survive only successful runs.
pub fn run(code: &str) -> Outcome {
    if let Some(rejection) = preflight::check(code) {
        return Outcome::diagnostic(rejection);
    }

    let mut output = advisory::notes(code);

    let mut context = Context::default();
    if let Err(err) = context.eval(Source::from_bytes(CONSOLE_PRELUDE)) {
        return Outcome::failure(
            FailureKind::Internal,
            format!("Error: console setup failed: {err}"),
        );
    }

    if let Err(err) = context.eval(Source::from_bytes(code)) {
        return Outcome::failure(
            FailureKind::Runtime,
            classify::report(&err.to_string(), code),
        );
    }

    let printed = printed_lines(&mut context);
    if !printed.is_empty() {
        output.push(printed);
    }

    if output.is_empty() {
        Outcome::success("✅ Code executed successfully (no output)")
    } else {
        Outcome::success(output.join("\n"))
    }
}

fn printed_lines(context: &mut Context) -> String {
    let Ok(value) = context.eval(Source::from_bytes(READ_OUTPUT)) else {
        return String::new();
    };
    match value.to_string(context) {
        Ok(text) => text.to_std_string_escaped(),
        Err(_) => String::new(),
    }
}
