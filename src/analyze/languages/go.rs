//! Go analysis profile.

use crate::analyze::{Check, Profile};

pub(crate) static PROFILE: Profile = Profile {
    intro: "Go compilation and execution requires a backend service.",
    source_label: "Your Go code:",
    needs_header: "To run Go code, you would need:",
    needs: &[
        "Go compiler and runtime",
        "A backend service that can compile and execute Go",
        "Or use an online Go playground",
    ],
    features_label: "Features detected in your code:",
    checks: &[
        Check {
            present: "Main package",
            absent: "No main package",
            test: |code| code.contains("package main"),
        },
        Check {
            present: "Import statements",
            absent: "No import statements",
            test: |code| code.contains("import"),
        },
        Check {
            present: "Main function",
            absent: "No main function",
            test: |code| code.contains("func main"),
        },
        Check {
            present: "Output statements",
            absent: "No output statements",
            test: |code| code.contains("fmt.Print"),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_program() {
        let code = "package main\n\nimport \"fmt\"\n\nfunc main() {\n    fmt.Println(\"hi\")\n}";
        let report = PROFILE.render(code);
        assert!(report.starts_with("Go compilation and execution requires a backend service."));
        assert!(report.contains("- ✅ Main package"));
        assert!(report.contains("- ✅ Import statements"));
        assert!(report.contains("- ✅ Main function"));
        assert!(report.contains("- ✅ Output statements"));
    }
}
