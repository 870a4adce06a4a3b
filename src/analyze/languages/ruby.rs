//! Ruby analysis profile.

use crate::analyze::{Check, Profile};

pub(crate) static PROFILE: Profile = Profile {
    intro: "Ruby execution requires a backend service with Ruby interpreter.",
    source_label: "Your Ruby code:",
    needs_header: "To run Ruby code, you would need:",
    needs: &[
        "Ruby interpreter",
        "A backend service that can execute Ruby",
        "Or use an online Ruby runner service",
    ],
    features_label: "Features detected in your code:",
    checks: &[
        Check {
            present: "Output statements",
            absent: "No output statements",
            test: |code| code.contains("puts") || code.contains("print"),
        },
        Check {
            present: "Method definitions",
            absent: "No method definitions",
            test: |code| code.contains("def "),
        },
        Check {
            present: "Class definitions",
            absent: "No class definitions",
            test: |code| code.contains("class "),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_script() {
        let report = PROFILE.render("def greet\n  puts \"hi\"\nend\ngreet");
        assert!(report.starts_with("Ruby execution requires a backend service with Ruby interpreter."));
        assert!(report.contains("- ✅ Output statements"));
        assert!(report.contains("- ✅ Method definitions"));
        assert!(report.contains("- ❌ No class definitions"));
    }
}
