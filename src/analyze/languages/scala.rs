//! Scala analysis profile.

use crate::analyze::{Check, Profile};

pub(crate) static PROFILE: Profile = Profile {
    intro: "Scala compilation and execution requires a backend service.",
    source_label: "Your Scala code:",
    needs_header: "To run Scala code, you would need:",
    needs: &[
        "Scala compiler and JVM",
        "A backend service that can compile and execute Scala",
        "Or use an online Scala playground",
    ],
    features_label: "Features detected in your code:",
    checks: &[
        Check {
            present: "App object",
            absent: "No App object",
            test: |code| code.contains("object") && code.contains("extends App"),
        },
        Check {
            present: "Main method",
            absent: "No main method",
            test: |code| code.contains("def main"),
        },
        Check {
            present: "Print statements",
            absent: "No print statements",
            test: |code| code.contains("println("),
        },
    ],
};
