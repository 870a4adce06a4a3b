//! XML validation: well-formedness, root element, and namespace presence.

use streaming_iterator::StreamingIterator;
use tree_sitter::{Query, QueryCursor};

use super::{first_error, parse};

/// Every element opens with exactly one start tag or empty-element tag.
const TAG_QUERY: &str = r#"
(STag (Name) @tag)
(EmptyElemTag (Name) @tag)
"#;

pub fn validate(code: &str) -> String {
    match analyze(code) {
        Ok(report) => report,
        Err(err) => format!("XML validation error: {err}"),
    }
}

fn analyze(code: &str) -> anyhow::Result<String> {
    let source = code.as_bytes();
    let language: tree_sitter::Language = tree_sitter_xml::LANGUAGE_XML.into();
    let tree = parse(&language, code)?;
    let root = tree.root_node();

    if root.has_error() {
        return Ok(format!(
            "XML parsing errors found:
{}",
            first_error(root)
        ));
    }

    let query = Query::new(&language, TAG_QUERY)?;
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, root, source);

    let mut total_elements = 0usize;
    let mut root_name: Option<String> = None;
    let mut has_namespace = false;

    while let Some(m) = matches.next() {
        for capture in m.captures {
            total_elements += 1;
            if root_name.is_none() {
                // The first tag in document order belongs to the root element.
                root_name = Some(capture.node.utf8_text(source).unwrap_or("").to_string());
                if let Some(tag) = capture.node.parent() {
                    has_namespace = declares_namespace(tag, source);
                }
            }
        }
    }

    let namespaces = if has_namespace { "Present" } else { "None" };

    Ok(format!(
        "XML is valid! ✅

Document Analysis:
- Root element: {}
- Total elements: {total_elements}
- Namespaces: {namespaces}

XML structure is well-formed and ready to use!",
        root_name.as_deref().unwrap_or("None")
    ))
}

/// Whether a start tag carries an `xmlns` or `xmlns:*` attribute.
fn declares_namespace(tag: tree_sitter::Node, source: &[u8]) -> bool {
    let mut cursor = tag.walk();
    for child in tag.named_children(&mut cursor) {
        if child.kind() != "Attribute" {
            continue;
        }
        let mut inner = child.walk();
        for part in child.named_children(&mut inner) {
            if part.kind() == "Name" {
                let name = part.utf8_text(source).unwrap_or("");
                if name == "xmlns" || name.starts_with("xmlns:") {
                    return true;
                }
                break;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_document() {
        let code = "<?xml version=\"1.0\"?>\n<library>\n  <book id=\"1\"/>\n  <book id=\"2\"/>\n</library>";
        let report = validate(code);
        assert!(report.starts_with("XML is valid! ✅"));
        assert!(report.contains("- Root element: library"));
        assert!(report.contains("- Total elements: 3"));
        assert!(report.contains("- Namespaces: None"));
        assert!(report.ends_with("XML structure is well-formed and ready to use!"));
    }

    #[test]
    fn test_root_case_preserved() {
        let report = validate("<Library><Shelf/></Library>");
        assert!(report.contains("- Root element: Library"));
    }

    #[test]
    fn test_namespace_detected() {
        let report = validate("<root xmlns=\"http://example.com/ns\"><child/></root>");
        assert!(report.contains("- Namespaces: Present"));
    }

    #[test]
    fn test_prefixed_namespace_detected() {
        let report = validate("<ns:root xmlns:ns=\"http://example.com/ns\"><ns:child/></ns:root>");
        assert!(report.contains("- Namespaces: Present"));
    }

    #[test]
    fn test_unclosed_root_is_error() {
        let report = validate("<root>");
        assert!(report.starts_with("XML parsing errors found:"));
    }

    #[test]
    fn test_nested_count() {
        let report = validate("<a><b><c/></b><d/></a>");
        assert!(report.contains("- Total elements: 4"));
    }
}
