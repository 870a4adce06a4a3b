//! Swift analysis profile.

use crate::analyze::{Check, Profile};

pub(crate) static PROFILE: Profile = Profile {
    intro: "Swift compilation and execution requires a backend service.",
    source_label: "Your Swift code:",
    needs_header: "To run Swift code, you would need:",
    needs: &[
        "Swift compiler and runtime",
        "A backend service that can compile and execute Swift",
        "Or use an online Swift playground",
    ],
    features_label: "Features detected in your code:",
    checks: &[
        Check {
            present: "Import statements",
            absent: "No import statements",
            test: |code| code.contains("import"),
        },
        Check {
            present: "Print statements",
            absent: "No print statements",
            test: |code| code.contains("print("),
        },
        Check {
            present: "Function definitions",
            absent: "No function definitions",
            test: |code| code.contains("func "),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_program() {
        let report = PROFILE.render("import Foundation\nprint(\"hi\")");
        assert!(report.starts_with("Swift compilation and execution requires a backend service."));
        assert!(report.contains("- ✅ Import statements"));
        assert!(report.contains("- ✅ Print statements"));
        assert!(report.contains("- ❌ No function definitions"));
    }
}
