//! The execution front door.
//!
//! One entry point maps `(source, language id)` to a displayable result.
//! Routing is a total match over the [`Language`] enum, so adding a language
//! without a handler is a compile error, not a runtime surprise.

use crate::config::Config;
use crate::language::Language;
use crate::outcome::{FailureKind, Outcome};
use crate::remote::JudgeClient;
use crate::{analyze, evaluate, python, remote, validate};

/// Owns the configuration and the judge client; everything else the
/// strategies need (the Python interpreter singleton) lives in their own
/// modules.
pub struct Executor {
    config: Config,
    judge: JudgeClient,
}

impl Executor {
    pub fn new(config: Config) -> Self {
        let judge = JudgeClient::new(config.judge.clone());
        Self { config, judge }
    }

    /// Run source through the local strategy for `language_id` and render
    /// the result. Always resolves to a displayable string: unknown ids get
    /// the not-supported note, and nothing panics or propagates an error.
    pub async fn execute(&self, source: &str, language_id: &str) -> String {
        self.run(source, language_id, false).await.into_text()
    }

    /// Tagged variant of [`Executor::execute`]: same routing and the same text, for
    /// callers that branch on the outcome kind (exit codes, JSON reports).
    /// `remote` reroutes the remotely-executable languages through the
    /// judge; languages outside the judge map keep their local strategy.
    pub async fn run(&self, source: &str, language_id: &str, remote: bool) -> Outcome {
        let Some(language) = Language::parse(language_id) else {
            return Outcome::diagnostic(format!(
                "Code execution for {language_id} is not supported yet."
            ));
        };
        match self.try_run(source, language, remote).await {
            Ok(outcome) => outcome,
            Err(err) => Outcome::failure(FailureKind::Internal, format!("Error: {err}")),
        }
    }

    /// The typed layer. Free to return `Err`; [`Executor::run`] is the only
    /// failure boundary and renders every escaped error the same way.
    async fn try_run(
        &self,
        source: &str,
        language: Language,
        remote: bool,
    ) -> anyhow::Result<Outcome> {
        if remote && remote::language_id(language).is_some() {
            return Ok(self.judge.run(source, language).await);
        }
        Ok(match language {
            Language::JavaScript | Language::TypeScript => evaluate::run(source),
            Language::Python => python::run(source, self.config.python.enabled).await,
            Language::Html => validate::html(source),
            Language::Css => validate::css(source),
            Language::Json => validate::json(source),
            Language::Xml => validate::xml(source),
            Language::Yaml => validate::yaml(source),
            Language::Markdown => validate::markdown(source),
            Language::Java => analyze::java(source),
            // C and C++ share one analyzer, as the original dispatcher did.
            Language::Cpp | Language::C => analyze::cpp(source),
            Language::CSharp => analyze::csharp(source),
            Language::Php => analyze::php(source),
            Language::Ruby => analyze::ruby(source),
            Language::Go => analyze::go(source),
            Language::Rust => analyze::rust(source),
            Language::Swift => analyze::swift(source),
            Language::Kotlin => analyze::kotlin(source),
            Language::Scala => analyze::scala(source),
            Language::Sql => analyze::sql(source),
            Language::Shell => analyze::shell(source),
            Language::PowerShell => analyze::powershell(source),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language;

    fn executor() -> Executor {
        Executor::new(Config::default())
    }

    #[tokio::test]
    async fn test_unknown_id_gets_not_supported_note() {
        let text = executor().execute("print 'x'", "brainfuck").await;
        assert_eq!(text, "Code execution for brainfuck is not supported yet.");

        let outcome = executor().run("print 'x'", "brainfuck", false).await;
        assert!(!outcome.is_failure());
        assert_eq!(outcome.kind_str(), "diagnostic");
    }

    #[tokio::test]
    async fn test_javascript_routes_to_evaluator() {
        let text = executor().execute("console.log('hi')", "javascript").await;
        assert_eq!(text, "hi");
    }

    #[tokio::test]
    async fn test_json_routes_to_validator() {
        let text = executor().execute("{\"a\": 1}", "json").await;
        assert!(text.starts_with("JSON is valid! ✅"));
    }

    #[tokio::test]
    async fn test_c_shares_the_cpp_analyzer() {
        let text = executor()
            .execute("#include <stdio.h>\nint main() { printf(\"x\"); }", "c")
            .await;
        assert!(text.starts_with("⚡ C++ Analysis Complete"));
    }

    #[tokio::test]
    async fn test_remote_flag_is_ignored_for_unmapped_languages() {
        let outcome = executor().run("# title", "markdown", true).await;
        assert!(outcome.into_text().starts_with("Markdown analyzed! ✅"));
    }

    #[tokio::test]
    async fn test_empty_source_never_fails() {
        let executor = executor();
        for lang in language::ALL {
            let outcome = executor.run("", lang.as_str(), false).await;
            assert!(
                !outcome.is_failure(),
                "empty source failed for {}: {}",
                lang,
                outcome.text()
            );
            assert!(
                !outcome.text().is_empty(),
                "empty source produced empty text for {}",
                lang
            );
        }
    }
}
