//! Kotlin analysis profile.

use crate::analyze::{Check, Profile};

pub(crate) static PROFILE: Profile = Profile {
    intro: "Kotlin compilation and execution requires a backend service.",
    source_label: "Your Kotlin code:",
    needs_header: "To run Kotlin code, you would need:",
    needs: &[
        "Kotlin compiler and JVM",
        "A backend service that can compile and execute Kotlin",
        "Or use an online Kotlin playground",
    ],
    features_label: "Features detected in your code:",
    checks: &[
        Check {
            present: "Main function",
            absent: "No main function",
            test: |code| code.contains("fun main"),
        },
        Check {
            present: "Print statements",
            absent: "No print statements",
            test: |code| code.contains("println("),
        },
        Check {
            present: "Import statements",
            absent: "No import statements",
            test: |code| code.contains("import "),
        },
    ],
};
