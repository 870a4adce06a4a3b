//! PHP analysis profile.

use crate::analyze::{Check, Profile};

pub(crate) static PROFILE: Profile = Profile {
    intro: "PHP execution requires a backend service with PHP interpreter.",
    source_label: "Your PHP code:",
    needs_header: "To run PHP code, you would need:",
    needs: &[
        "PHP interpreter",
        "A backend service that can execute PHP",
        "Or use an online PHP runner service",
    ],
    features_label: "Features detected in your code:",
    checks: &[
        Check {
            present: "PHP opening tag",
            absent: "No PHP opening tag",
            test: |code| code.contains("<?php"),
        },
        Check {
            present: "Output statements",
            absent: "No output statements",
            test: |code| code.contains("echo") || code.contains("print"),
        },
        Check {
            present: "Function definitions",
            absent: "No function definitions",
            test: |code| code.contains("function"),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_script() {
        let report = PROFILE.render("<?php\necho \"hi\";\n");
        assert!(report.starts_with("PHP execution requires a backend service with PHP interpreter."));
        assert!(report.contains("- ✅ PHP opening tag"));
        assert!(report.contains("- ✅ Output statements"));
        assert!(report.contains("- ❌ No function definitions"));
    }
}
