//! Polyrun - multi-language code execution dispatcher.
//!
//! Polyrun takes a snippet of source code and a language id and always
//! resolves to a displayable result. Languages with a local runtime run
//! in-process: JavaScript and TypeScript in a sandboxed boa engine, Python
//! on an embedded rustpython interpreter. Markup and data formats are
//! structurally validated, compiled and backend languages get a heuristic
//! source analysis with setup guidance, and a closed subset can optionally
//! run on a remote judge service.
//!
//! # Architecture
//!
//! - `dispatch`: the single entry point, routing by language strategy
//! - `language`: the closed language vocabulary and strategy table
//! - `outcome`: the tagged result every strategy resolves to
//! - `evaluate`: in-process JavaScript/TypeScript sandbox
//! - `python`: embedded Python runtime bridge
//! - `validate`: structural validators (HTML, CSS, JSON, XML, YAML, Markdown)
//! - `analyze`: heuristic analyzers for compiled/backend languages
//! - `remote`: remote judge client
//! - `config`: YAML configuration with environment overrides
//! - `report`: CLI output formatting (pretty, JSON)
//!
//! # Adding a New Language
//!
//! Add the variant in `language`, pick its `Strategy`, and route it in
//! `dispatch::Executor::try_run`. The match there is total, so the compiler
//! walks you through every spot that needs it.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod evaluate;
pub mod language;
pub mod outcome;
pub mod python;
pub mod remote;
pub mod report;
pub mod validate;

pub use config::Config;
pub use dispatch::Executor;
pub use language::{Language, Strategy};
pub use outcome::{FailureKind, Outcome};

/// Checklist glyph used across validator and analyzer reports.
pub(crate) fn glyph(present: bool) -> &'static str {
    if present {
        "✅"
    } else {
        "❌"
    }
}
