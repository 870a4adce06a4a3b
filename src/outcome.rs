//! Execution outcomes.
//!
//! Every strategy resolves to an [`Outcome`]: success output, an
//! informational diagnostic, or a classified failure. The UI-facing text for
//! each variant is already fully formatted (`into_text` never rewrites it),
//! so callers that only want a displayable string lose nothing, while
//! callers that care can branch on the tag instead of sniffing markers.

use serde::Serialize;

/// The result of running one piece of source through one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Code ran to completion; the text is its (possibly fixed no-output)
    /// output.
    Success(String),
    /// An informational result that did not execute code: validator and
    /// analyzer reports, pre-flight rejections, unsupported-language notes.
    Diagnostic(String),
    /// Something went wrong; `detail` is the complete rendered message.
    Failure { kind: FailureKind, detail: String },
}

/// The failure taxonomy. Kinds, not exception types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// An exception raised during sandboxed or interpreted execution.
    Runtime,
    /// The interpreter could not be brought up at all.
    Load,
    /// Diagnostics relayed verbatim from the remote judge.
    Provider,
    /// Transport-level failure talking to the remote judge.
    Network,
    /// Anything caught at the dispatcher's outer boundary.
    Internal,
}

impl Outcome {
    pub fn success(text: impl Into<String>) -> Self {
        Outcome::Success(text.into())
    }

    pub fn diagnostic(text: impl Into<String>) -> Self {
        Outcome::Diagnostic(text.into())
    }

    pub fn failure(kind: FailureKind, detail: impl Into<String>) -> Self {
        Outcome::Failure {
            kind,
            detail: detail.into(),
        }
    }

    /// Render for display. The text of each variant is already complete.
    pub fn into_text(self) -> String {
        match self {
            Outcome::Success(text) => text,
            Outcome::Diagnostic(text) => text,
            Outcome::Failure { detail, .. } => detail,
        }
    }

    /// Borrowing accessor for the display text.
    pub fn text(&self) -> &str {
        match self {
            Outcome::Success(text) => text,
            Outcome::Diagnostic(text) => text,
            Outcome::Failure { detail, .. } => detail,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure { .. })
    }

    /// Stable tag name used by the JSON report.
    pub fn kind_str(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "success",
            Outcome::Diagnostic(_) => "diagnostic",
            Outcome::Failure { .. } => "failure",
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Outcome::Failure { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Runtime => "runtime",
            FailureKind::Load => "load",
            FailureKind::Provider => "provider",
            FailureKind::Network => "network",
            FailureKind::Internal => "internal",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
