//! YAML validation: indentation consistency and a shape summary.

pub fn validate(code: &str) -> String {
    let lines: Vec<&str> = code.lines().filter(|line| !line.trim().is_empty()).collect();

    // Two-space indentation convention: any odd leading-whitespace width is
    // flagged before the document is summarized.
    let consistent = lines.iter().all(|line| leading_whitespace(line) % 2 == 0);
    if !consistent {
        return "YAML validation warning: Inconsistent indentation detected (should be 2 spaces)"
            .to_string();
    }

    let has_key_value = lines.iter().any(|line| line.contains(':'));
    let structure = if has_key_value {
        "Key-value pairs detected"
    } else {
        "List format detected"
    };

    format!(
        "YAML appears valid! ✅

Document Analysis:
- Lines: {}
- Structure: {structure}

Note: This is a basic validation. For full YAML parsing, consider using a backend service.",
        lines.len()
    )
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_document() {
        let report = validate("name: demo\nversion: 1\nnested:\n  key: value\n");
        assert!(report.starts_with("YAML appears valid! ✅"));
        assert!(report.contains("- Lines: 4"));
        assert!(report.contains("- Structure: Key-value pairs detected"));
    }

    #[test]
    fn test_list_document() {
        let report = validate("- apples\n- oranges\n- pears\n");
        assert!(report.contains("- Lines: 3"));
        assert!(report.contains("- Structure: List format detected"));
    }

    #[test]
    fn test_blank_lines_not_counted() {
        let report = validate("a: 1\n\n\nb: 2\n");
        assert!(report.contains("- Lines: 2"));
    }

    #[test]
    fn test_odd_indentation_warns() {
        let report = validate("root:\n   child: oops\n");
        assert_eq!(
            report,
            "YAML validation warning: Inconsistent indentation detected (should be 2 spaces)"
        );
    }

    #[test]
    fn test_even_indentation_passes() {
        let report = validate("root:\n  child:\n    leaf: 1\n");
        assert!(report.starts_with("YAML appears valid! ✅"));
    }
}
