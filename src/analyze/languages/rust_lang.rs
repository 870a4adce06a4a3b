//! Rust analysis profile.

use crate::analyze::{Check, Profile};

pub(crate) static PROFILE: Profile = Profile {
    intro: "Rust compilation and execution requires a backend service.",
    source_label: "Your Rust code:",
    needs_header: "To run Rust code, you would need:",
    needs: &[
        "Rust compiler (rustc) and cargo",
        "A backend service that can compile and execute Rust",
        "Or use an online Rust playground",
    ],
    features_label: "Features detected in your code:",
    checks: &[
        Check {
            present: "Main function",
            absent: "No main function",
            test: |code| code.contains("fn main"),
        },
        Check {
            present: "Print macro",
            absent: "No print macro",
            test: |code| code.contains("println!"),
        },
        Check {
            present: "Use statements",
            absent: "No use statements",
            test: |code| code.contains("use "),
        },
    ],
};
