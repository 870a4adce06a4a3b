//! Structural validators for markup and data formats.
//!
//! Each validator is pure and synchronous: it takes the raw source text and
//! produces a finished report string. Invalid input is a finding, not an
//! error, so every validator resolves to a diagnostic outcome.
//!
//! HTML, CSS, and XML parse through tree-sitter grammars; JSON goes through
//! serde_json; YAML and Markdown stay at line-level heuristics.

mod css;
mod html;
mod json;
mod markdown;
mod xml;
mod yaml;

use crate::outcome::Outcome;

pub fn html(source: &str) -> Outcome {
    Outcome::diagnostic(html::validate(source))
}

pub fn css(source: &str) -> Outcome {
    Outcome::diagnostic(css::validate(source))
}

pub fn json(source: &str) -> Outcome {
    Outcome::diagnostic(json::validate(source))
}

pub fn xml(source: &str) -> Outcome {
    Outcome::diagnostic(xml::validate(source))
}

pub fn yaml(source: &str) -> Outcome {
    Outcome::diagnostic(yaml::validate(source))
}

pub fn markdown(source: &str) -> Outcome {
    Outcome::diagnostic(markdown::validate(source))
}

/// Parse source with the given tree-sitter grammar.
pub(crate) fn parse(
    language: &tree_sitter::Language,
    source: &str,
) -> anyhow::Result<tree_sitter::Tree> {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(language)?;
    parser
        .parse(source, None)
        .ok_or_else(|| anyhow::anyhow!("failed to parse source"))
}

/// Locate the leftmost syntax error in a parse tree and describe its
/// position. Used by the validators whose report has a parse-error branch.
pub(crate) fn first_error(root: tree_sitter::Node) -> String {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            return format!(
                "Syntax error at line {}, column {}",
                pos.row + 1,
                pos.column + 1
            );
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        for child in children.into_iter().rev() {
            stack.push(child);
        }
    }
    "Unknown syntax error".to_string()
}
