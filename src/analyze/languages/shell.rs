//! Shell script analysis profile.

use crate::analyze::{Check, Profile};

pub(crate) static PROFILE: Profile = Profile {
    intro: "Shell script execution requires a backend service with shell access.",
    source_label: "Your Shell script:",
    needs_header: "To run shell scripts, you would need:",
    needs: &[
        "Shell environment (bash, zsh, etc.)",
        "A backend service that can execute shell commands safely",
        "Proper security measures for command execution",
    ],
    features_label: "Commands detected:",
    checks: &[
        Check {
            present: "Echo commands",
            absent: "No echo commands",
            test: |code| code.contains("echo"),
        },
        Check {
            present: "List commands",
            absent: "No list commands",
            test: |code| code.contains("ls"),
        },
        Check {
            present: "Directory navigation",
            absent: "No directory navigation",
            test: |code| code.contains("cd"),
        },
        Check {
            present: "Pipes",
            absent: "No pipes",
            test: |code| code.contains('|'),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_script() {
        let report = PROFILE.render("#!/bin/bash\necho hello | tr a-z A-Z");
        assert!(report.starts_with("Shell script execution requires a backend service with shell access."));
        assert!(report.contains("Commands detected:"));
        assert!(report.contains("- ✅ Echo commands"));
        assert!(report.contains("- ✅ Pipes"));
        assert!(report.contains("- ❌ No directory navigation"));
    }
}
