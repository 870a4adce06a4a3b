//! Remote judge client.
//!
//! Submits source to a Judge0-compatible judge in synchronous mode:
//! `POST {endpoint}?base64_encoded=false&wait=true`. Exactly one field of
//! the response is relayed back, by fixed precedence: `stderr`, then
//! `compile_output`, then `stdout`, then `message`, then a raw dump of the
//! whole response. The provider credential comes from configuration and is
//! only ever written into the request header.

use lazy_static::lazy_static;
use phf::phf_map;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::JudgeConfig;
use crate::language::Language;
use crate::outcome::{FailureKind, Outcome};

/// Judge0 language ids for the remotely executable subset.
static LANGUAGE_IDS: phf::Map<&'static str, u32> = phf_map! {
    "java" => 62,       // Java (OpenJDK 17)
    "cpp" => 54,        // C++ (GCC 9.2.0)
    "typescript" => 74, // TypeScript (3.7.4)
    "c" => 50,          // C (GCC 9.2.0)
    "php" => 68,        // PHP (7.4.1)
    "go" => 60,         // Go (1.13.5)
    "rust" => 73,       // Rust (1.40.0)
};

lazy_static! {
    static ref PUBLIC_CLASS: Regex = Regex::new(r"public\s+class\s+\w+").unwrap();
}

/// Errors raised before or during a submission round-trip.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("no judge API key configured; set POLYRUN_JUDGE_API_KEY or judge.api_key")]
    MissingCredential,
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// The judge's response surface. Every field is optional and extra fields
/// are carried along untouched so the raw-dump fallback loses nothing.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JudgeResponse {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Serialize)]
struct SubmissionBody<'a> {
    source_code: &'a str,
    language_id: u32,
}

/// The Judge0 id for a language, if it executes remotely at all.
pub fn language_id(language: Language) -> Option<u32> {
    LANGUAGE_IDS.get(language.as_str()).copied()
}

/// Judge client holding the HTTP connection pool and judge settings.
pub struct JudgeClient {
    http: reqwest::Client,
    config: JudgeConfig,
}

impl JudgeClient {
    pub fn new(config: JudgeConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("polyrun/0.1.0")
            .build()
            .expect("failed to create HTTP client");

        Self { http, config }
    }

    /// Submit one piece of source and relay the judge's answer.
    ///
    /// Unmapped languages are refused here, before any credential check or
    /// network traffic.
    pub async fn run(&self, source: &str, language: Language) -> Outcome {
        let Some(id) = language_id(language) else {
            return Outcome::diagnostic(format!(
                "Code execution for {} is not supported yet.",
                language.as_str()
            ));
        };
        let prepared = prepare_source(source, language);
        match self.submit(&prepared, id).await {
            Ok(response) => relay(&response),
            Err(err @ RemoteError::MissingCredential) => {
                Outcome::failure(FailureKind::Internal, format!("Error: {err}"))
            }
            Err(err) => Outcome::failure(FailureKind::Network, format!("Error: {err}")),
        }
    }

    async fn submit(&self, source: &str, id: u32) -> Result<JudgeResponse, RemoteError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(RemoteError::MissingCredential)?;
        let url = format!("{}?base64_encoded=false&wait=true", self.config.endpoint);

        if std::env::var("POLYRUN_DEBUG").is_ok() {
            eprintln!("[debug] Submitting to judge: language_id={}", id);
        }

        // Non-2xx answers still carry a JSON body (usually a `message`
        // field); they flow through the normal relay rather than erroring.
        let response = self
            .http
            .post(&url)
            .header("X-RapidAPI-Key", key)
            .header("X-RapidAPI-Host", &self.config.api_host)
            .json(&SubmissionBody {
                source_code: source,
                language_id: id,
            })
            .send()
            .await?
            .json::<JudgeResponse>()
            .await?;

        Ok(response)
    }
}

/// Judge0 names the submitted file `Main`, so any public class in a Java
/// submission has to match it. Other languages go through untouched.
fn prepare_source(source: &str, language: Language) -> String {
    if language == Language::Java {
        PUBLIC_CLASS
            .replace_all(source, "public class Main")
            .into_owned()
    } else {
        source.to_owned()
    }
}

fn relay(response: &JudgeResponse) -> Outcome {
    if let Some(text) = filled(&response.stderr) {
        return Outcome::failure(FailureKind::Provider, text);
    }
    if let Some(text) = filled(&response.compile_output) {
        return Outcome::failure(FailureKind::Provider, text);
    }
    if let Some(text) = filled(&response.stdout) {
        return Outcome::success(text);
    }
    if let Some(text) = filled(&response.message) {
        return Outcome::diagnostic(text);
    }
    let dump = serde_json::to_string(response)
        .unwrap_or_else(|err| format!("unserializable judge response: {err}"));
    Outcome::diagnostic(dump)
}

/// Present-and-non-empty filter; the judge sends both nulls and `""`.
fn filled(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_id_map_is_closed() {
        assert_eq!(language_id(Language::Java), Some(62));
        assert_eq!(language_id(Language::Cpp), Some(54));
        assert_eq!(language_id(Language::TypeScript), Some(74));
        assert_eq!(language_id(Language::C), Some(50));
        assert_eq!(language_id(Language::Php), Some(68));
        assert_eq!(language_id(Language::Go), Some(60));
        assert_eq!(language_id(Language::Rust), Some(73));

        assert_eq!(language_id(Language::JavaScript), None);
        assert_eq!(language_id(Language::Python), None);
        assert_eq!(language_id(Language::CSharp), None);
        assert_eq!(language_id(Language::Ruby), None);
    }

    #[test]
    fn test_java_public_class_renamed_to_main() {
        let source = "public class HelloWorld {\n    public static void main(String[] args) {}\n}";
        let prepared = prepare_source(source, Language::Java);
        assert!(prepared.starts_with("public class Main {"));
        assert!(!prepared.contains("HelloWorld"));
    }

    #[test]
    fn test_every_public_class_is_renamed() {
        let source = "public class A {}\nclass Helper {}\npublic class B {}";
        let prepared = prepare_source(source, Language::Java);
        assert_eq!(
            prepared,
            "public class Main {}\nclass Helper {}\npublic class Main {}"
        );
    }

    #[test]
    fn test_only_java_is_rewritten() {
        let source = "public class Widget {}";
        assert_eq!(prepare_source(source, Language::Cpp), source);
        assert_eq!(prepare_source(source, Language::Php), source);
    }

    #[test]
    fn test_relay_stderr_dominates_everything() {
        let response = JudgeResponse {
            stdout: Some("out".to_owned()),
            stderr: Some("boom".to_owned()),
            compile_output: Some("warn".to_owned()),
            message: Some("note".to_owned()),
            ..Default::default()
        };
        let outcome = relay(&response);
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Provider));
        assert_eq!(outcome.into_text(), "boom");
    }

    #[test]
    fn test_relay_compile_output_beats_stdout() {
        let response = JudgeResponse {
            stdout: Some("out".to_owned()),
            compile_output: Some("error: expected `;`".to_owned()),
            ..Default::default()
        };
        let outcome = relay(&response);
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Provider));
        assert_eq!(outcome.into_text(), "error: expected `;`");
    }

    #[test]
    fn test_relay_stdout_is_success() {
        let response = JudgeResponse {
            stdout: Some("Hello World\n".to_owned()),
            ..Default::default()
        };
        let outcome = relay(&response);
        assert!(!outcome.is_failure());
        assert_eq!(outcome.into_text(), "Hello World\n");
    }

    #[test]
    fn test_relay_message_then_raw_dump() {
        let response = JudgeResponse {
            message: Some("queue is full".to_owned()),
            ..Default::default()
        };
        assert_eq!(relay(&response).into_text(), "queue is full");

        let mut empty = JudgeResponse::default();
        empty
            .extra
            .insert("token".to_owned(), Value::String("abc".to_owned()));
        let dump = relay(&empty).into_text();
        let parsed: Value = serde_json::from_str(&dump).expect("dump is valid JSON");
        assert_eq!(parsed["token"], Value::String("abc".to_owned()));
    }

    #[test]
    fn test_relay_skips_empty_strings_like_missing_fields() {
        let response = JudgeResponse {
            stderr: Some(String::new()),
            stdout: Some("hi".to_owned()),
            ..Default::default()
        };
        assert_eq!(relay(&response).into_text(), "hi");
    }

    #[tokio::test]
    async fn test_missing_credential_fails_before_sending() {
        let client = JudgeClient::new(JudgeConfig::default());
        let outcome = client.run("int main() {}", Language::C).await;
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Internal));
        assert!(outcome.text().starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_unmapped_language_never_submits() {
        let client = JudgeClient::new(JudgeConfig::default());
        let outcome = client.run("puts 'hi'", Language::Ruby).await;
        assert!(!outcome.is_failure());
        assert_eq!(
            outcome.into_text(),
            "Code execution for ruby is not supported yet."
        );
    }
}
