//! HTML validation: element census, accessibility checklist, and a preview
//! scaffold the caller can paste into a browser.

use streaming_iterator::StreamingIterator;
use tree_sitter::{Query, QueryCursor};

use crate::glyph;

use super::{first_error, parse};

/// One pattern per way an element opens. Each match carries the element node
/// and its tag name.
const TAG_QUERY: &str = r#"
(element (start_tag (tag_name) @tag)) @element
(element (self_closing_tag (tag_name) @tag)) @element
(script_element (start_tag (tag_name) @tag)) @element
(style_element (start_tag (tag_name) @tag)) @element
"#;

const SEMANTIC_TAGS: &[&str] = &[
    "header", "nav", "main", "section", "article", "aside", "footer",
];

pub fn validate(code: &str) -> String {
    match analyze(code) {
        Ok(report) => report,
        Err(err) => format!("❌ HTML validation error: {err}"),
    }
}

fn analyze(code: &str) -> anyhow::Result<String> {
    let source = code.as_bytes();
    let language: tree_sitter::Language = tree_sitter_html::LANGUAGE.into();
    let tree = parse(&language, code)?;
    let root = tree.root_node();

    if root.has_error() {
        return Ok(format!(
            "❌ HTML parsing errors found:
{}

Please check your HTML syntax.",
            first_error(root)
        ));
    }

    let query = Query::new(&language, TAG_QUERY)?;
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, root, source);

    let mut total_elements = 0usize;
    let mut unique_tags: Vec<String> = Vec::new();
    let mut title: Option<String> = None;

    while let Some(m) = matches.next() {
        let mut tag_name = None;
        let mut element = None;
        for capture in m.captures {
            match query.capture_names()[capture.index as usize] {
                "tag" => tag_name = Some(capture.node.utf8_text(source).unwrap_or("")),
                "element" => element = Some(capture.node),
                _ => {}
            }
        }
        let Some(tag) = tag_name else { continue };

        total_elements += 1;
        let tag = tag.to_lowercase();
        if tag == "title" && title.is_none() {
            title = element.map(|node| element_text(node, source));
        }
        if !unique_tags.contains(&tag) {
            unique_tags.push(tag);
        }
    }

    let title = match title.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => "No title set",
    };

    let has_semantic = SEMANTIC_TAGS
        .iter()
        .any(|tag| unique_tags.iter().any(|t| t == tag));
    let has_alt_text = code.contains("alt=");
    let has_aria_labels = code.contains("aria-");
    let has_form_labels = code.contains("<label");
    let score = [has_alt_text, has_aria_labels, has_form_labels]
        .iter()
        .filter(|&&flag| flag)
        .count();

    Ok(format!(
        "✅ HTML is valid!

📊 Document Analysis:
- Total elements: {total_elements}
- Unique tags: {}
- Document title: {title}
- {} Semantic HTML5 elements
- {} Image alt attributes
- {} ARIA accessibility labels
- {} Form labels

💡 Accessibility Score: {score}/3{}",
        unique_tags.join(", "),
        glyph(has_semantic),
        glyph(has_alt_text),
        glyph(has_aria_labels),
        glyph(has_form_labels),
        preview(code),
    ))
}

/// Concatenated text of an element's direct text children.
fn element_text(node: tree_sitter::Node, source: &[u8]) -> String {
    let mut cursor = node.walk();
    let mut text = String::new();
    for child in node.children(&mut cursor) {
        if child.kind() == "text" {
            text.push_str(child.utf8_text(source).unwrap_or(""));
        }
    }
    text.trim().to_string()
}

/// Complete documents are quoted back as-is; fragments get wrapped in a
/// minimal page so they can be previewed directly.
fn preview(code: &str) -> String {
    let is_complete = code.contains("<!DOCTYPE html>") && code.contains("<html>");
    if is_complete {
        format!(
            "

🖼️ Live Preview Available:
You can copy this HTML to a .html file and open it in a browser to see the result.

📋 Copy this code to preview:
{code}"
        )
    } else {
        format!(
            "

🖼️ Fragment Preview (wrap in complete HTML):
<!DOCTYPE html>
<html>
<head>
    <title>Preview</title>
    <style>body {{ font-family: Arial, sans-serif; margin: 20px; }}</style>
</head>
<body>
{code}
</body>
</html>"
        )
    }
}
