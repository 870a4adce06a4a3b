//! Heuristic source analyzers for languages that have no local runtime.
//!
//! These never execute anything. Each analyzer echoes the submitted source,
//! runs a checklist of substring probes against it, and explains what a real
//! toolchain for that language would need. Java and C++ additionally extract
//! names from the source to personalize their setup guides; every other
//! language is a data-driven [`Profile`].

mod languages;

use crate::glyph;
use crate::outcome::Outcome;

/// One checklist line: a probe plus the label for each verdict.
pub(crate) struct Check {
    pub(crate) present: &'static str,
    pub(crate) absent: &'static str,
    pub(crate) test: fn(&str) -> bool,
}

/// Report template for a profile-driven analyzer.
pub(crate) struct Profile {
    pub(crate) intro: &'static str,
    pub(crate) source_label: &'static str,
    pub(crate) needs_header: &'static str,
    pub(crate) needs: &'static [&'static str],
    pub(crate) features_label: &'static str,
    pub(crate) checks: &'static [Check],
}

impl Profile {
    pub(crate) fn render(&self, code: &str) -> String {
        let needs = self
            .needs
            .iter()
            .enumerate()
            .map(|(i, need)| format!("{}. {need}", i + 1))
            .collect::<Vec<_>>()
            .join("\n");

        let checks = self
            .checks
            .iter()
            .map(|check| {
                let present = (check.test)(code);
                let label = if present { check.present } else { check.absent };
                format!("- {} {label}", glyph(present))
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "{}\n\n{}\n{code}\n\n{}\n{needs}\n\n{}\n{checks}",
            self.intro, self.source_label, self.needs_header, self.features_label
        )
    }
}

pub fn java(source: &str) -> Outcome {
    Outcome::diagnostic(languages::java::report(source))
}

pub fn cpp(source: &str) -> Outcome {
    Outcome::diagnostic(languages::cpp::report(source))
}

pub fn csharp(source: &str) -> Outcome {
    Outcome::diagnostic(languages::csharp::PROFILE.render(source))
}

pub fn php(source: &str) -> Outcome {
    Outcome::diagnostic(languages::php::PROFILE.render(source))
}

pub fn ruby(source: &str) -> Outcome {
    Outcome::diagnostic(languages::ruby::PROFILE.render(source))
}

pub fn go(source: &str) -> Outcome {
    Outcome::diagnostic(languages::go::PROFILE.render(source))
}

pub fn rust(source: &str) -> Outcome {
    Outcome::diagnostic(languages::rust_lang::PROFILE.render(source))
}

pub fn swift(source: &str) -> Outcome {
    Outcome::diagnostic(languages::swift::PROFILE.render(source))
}

pub fn kotlin(source: &str) -> Outcome {
    Outcome::diagnostic(languages::kotlin::PROFILE.render(source))
}

pub fn scala(source: &str) -> Outcome {
    Outcome::diagnostic(languages::scala::PROFILE.render(source))
}

pub fn sql(source: &str) -> Outcome {
    Outcome::diagnostic(languages::sql::PROFILE.render(source))
}

pub fn shell(source: &str) -> Outcome {
    Outcome::diagnostic(languages::shell::PROFILE.render(source))
}

pub fn powershell(source: &str) -> Outcome {
    Outcome::diagnostic(languages::powershell::PROFILE.render(source))
}
