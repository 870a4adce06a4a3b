//! C# analysis profile.

use crate::analyze::{Check, Profile};

pub(crate) static PROFILE: Profile = Profile {
    intro: "C# compilation and execution requires a backend service.",
    source_label: "Your C# code:",
    needs_header: "To run C# code, you would need:",
    needs: &[
        ".NET compiler and runtime",
        "A backend service that can compile and execute C#",
        "Or use an online C# compiler service",
    ],
    features_label: "Features detected in your code:",
    checks: &[
        Check {
            present: "Using statements",
            absent: "No using statements",
            test: |code| code.contains("using"),
        },
        Check {
            present: "Class definition",
            absent: "No class definition",
            test: |code| code.contains("class"),
        },
        Check {
            present: "Main method",
            absent: "No main method",
            test: |code| code.contains("static void Main"),
        },
        Check {
            present: "Output statements",
            absent: "No output statements",
            test: |code| code.contains("Console.WriteLine"),
        },
    ],
};
