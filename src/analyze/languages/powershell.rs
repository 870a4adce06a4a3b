//! PowerShell analysis profile.

use crate::analyze::{Check, Profile};

pub(crate) static PROFILE: Profile = Profile {
    intro: "PowerShell execution requires a backend service with PowerShell access.",
    source_label: "Your PowerShell script:",
    needs_header: "To run PowerShell scripts, you would need:",
    needs: &[
        "PowerShell environment",
        "A backend service that can execute PowerShell safely",
        "Proper security measures for script execution",
    ],
    features_label: "Features detected:",
    checks: &[
        Check {
            present: "Output commands",
            absent: "No output commands",
            test: |code| code.contains("Write-Host") || code.contains("Write-Output"),
        },
        Check {
            present: "Get cmdlets",
            absent: "No Get cmdlets",
            test: |code| code.contains("Get-"),
        },
        Check {
            present: "Set cmdlets",
            absent: "No Set cmdlets",
            test: |code| code.contains("Set-"),
        },
        Check {
            present: "Pipeline",
            absent: "No pipeline",
            test: |code| code.contains('|'),
        },
    ],
};
