//! Integration tests for the embedded Python runtime.
//!
//! The interpreter is a process-wide singleton behind a job channel. These
//! tests exercise it both directly and through the dispatcher, including the
//! single-flight guarantee under concurrent first calls.

use polyrun::config::PythonConfig;
use polyrun::{python, Config, Executor, FailureKind};

#[tokio::test]
async fn test_concurrent_calls_share_one_interpreter() {
    let (a, b, c) = tokio::join!(
        python::run("print('a')", true),
        python::run("print('b')", true),
        python::run("print('c')", true),
    );
    assert_eq!(a.into_text(), "a\n");
    assert_eq!(b.into_text(), "b\n");
    assert_eq!(c.into_text(), "c\n");
    assert_eq!(
        python::load_count(),
        1,
        "a process must never build a second interpreter"
    );
}

#[tokio::test]
async fn test_stdout_is_verbatim_including_newlines() {
    let outcome = python::run("print('x')\nprint('y')", true).await;
    assert!(!outcome.is_failure());
    assert_eq!(outcome.into_text(), "x\ny\n");
}

#[tokio::test]
async fn test_stderr_wins_over_stdout() {
    let source = "import sys\nprint('kept quiet')\nsys.stderr.write('warning: deprecated')";
    let outcome = python::run(source, true).await;
    assert_eq!(outcome.failure_kind(), Some(FailureKind::Runtime));
    assert_eq!(outcome.into_text(), "Error: warning: deprecated");
}

#[tokio::test]
async fn test_exceptions_render_the_message_only() {
    let outcome = python::run("raise RuntimeError('kaput')", true).await;
    assert_eq!(outcome.failure_kind(), Some(FailureKind::Runtime));
    assert_eq!(outcome.into_text(), "Python Error: kaput");
}

#[tokio::test]
async fn test_system_exit_escapes_the_guard() {
    let outcome = python::run("import sys\nsys.exit(3)", true).await;
    assert_eq!(outcome.failure_kind(), Some(FailureKind::Runtime));
    let text = outcome.into_text();
    assert!(text.starts_with("Python execution error: "), "wrong prefix: {text}");
    assert!(text.contains("SystemExit"), "traceback lost: {text}");
}

#[tokio::test]
async fn test_stdlib_modules_are_available() {
    let outcome = python::run("import json\nprint(json.dumps({'k': 1}))", true).await;
    assert!(!outcome.is_failure());
    assert_eq!(outcome.into_text(), "{\"k\": 1}\n");
}

#[tokio::test]
async fn test_state_does_not_leak_between_runs() {
    let first = python::run("secret = 'hunter2'", true).await;
    assert!(!first.is_failure());

    let second = python::run("print(secret)", true).await;
    assert_eq!(
        second.into_text(),
        "Python Error: name 'secret' is not defined"
    );
}

#[tokio::test]
async fn test_dispatcher_routes_python_through_the_runtime() {
    let executor = Executor::new(Config::default());
    let text = executor.execute("print(2 ** 10)", "python").await;
    assert_eq!(text, "1024\n");
}

#[tokio::test]
async fn test_dispatcher_honors_disabled_python() {
    let config = Config {
        python: PythonConfig { enabled: false },
        ..Config::default()
    };
    let executor = Executor::new(config);
    let outcome = executor.run("print('hi')", "python", false).await;
    assert_eq!(outcome.failure_kind(), Some(FailureKind::Load));
    assert_eq!(
        outcome.into_text(),
        "Python execution error: Python execution is disabled in this configuration"
    );
}
