//! Embedded Python execution on a process-wide interpreter.
//!
//! The interpreter is expensive to build and not `Send`, so a dedicated OS
//! thread owns it for the life of the process and callers talk to it through
//! a job channel. The first caller pays for construction; concurrent first
//! callers share that single in-flight load. A failed load is sticky: later
//! requests see the same failure instead of spawning another interpreter.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use rustpython_vm::scope::Scope;
use rustpython_vm::{compiler, Interpreter, PyResult, VirtualMachine};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, OnceCell};

use crate::outcome::{FailureKind, Outcome};

/// The capture harness around every execution. It reads the source from the
/// `__source__` global rather than splicing user text into program text.
const CAPTURE_PROGRAM: &str = include_str!("capture.py");

/// Failures of the bridge itself, as opposed to errors raised by the
/// executed source (those come back as regular capture results).
#[derive(Debug, Error)]
pub enum PythonError {
    #[error("Python execution is disabled in this configuration")]
    Disabled,
    #[error("unable to start the Python interpreter: {0}")]
    Load(String),
    #[error("the Python interpreter stopped unexpectedly")]
    Closed,
}

/// One piece of source queued for the interpreter thread.
struct Job {
    source: String,
    reply: oneshot::Sender<RunResult>,
}

/// What the interpreter thread hands back per job.
#[derive(Debug)]
enum RunResult {
    /// The guarded block ran to its end; `failed` mirrors its error flag
    /// (captured stderr or an exception caught inside the guard).
    Captured { failed: bool, text: String },
    /// The exception escaped the guard entirely (`SystemExit` and friends,
    /// or a failure in the harness itself). Holds the rendered traceback.
    Escaped(String),
}

#[derive(Clone)]
struct Handle {
    jobs: mpsc::UnboundedSender<Job>,
}

static RUNTIME: OnceCell<Result<Handle, String>> = OnceCell::const_new();
static LOAD_COUNT: AtomicUsize = AtomicUsize::new(0);

/// How many interpreter constructions this process has attempted. Stays at
/// one no matter how many executions race the first load.
pub fn load_count() -> usize {
    LOAD_COUNT.load(Ordering::SeqCst)
}

/// Run one piece of Python source on the shared interpreter.
///
/// Stream capture is scoped to the single execution: stdout/stderr are
/// swapped for sinks and restored on every exit path. Captured stderr is
/// authoritative: it wins over stdout and renders as a failure.
pub async fn run(source: &str, enabled: bool) -> Outcome {
    match execute(source, enabled).await {
        Ok(RunResult::Captured { failed: false, text }) => Outcome::success(text),
        Ok(RunResult::Captured { failed: true, text }) => {
            Outcome::failure(FailureKind::Runtime, text)
        }
        Ok(RunResult::Escaped(message)) => Outcome::failure(
            FailureKind::Runtime,
            format!("Python execution error: {message}"),
        ),
        Err(PythonError::Load(_)) => Outcome::failure(FailureKind::Load, load_failure(source)),
        Err(err) => {
            Outcome::failure(FailureKind::Load, format!("Python execution error: {err}"))
        }
    }
}

async fn execute(source: &str, enabled: bool) -> Result<RunResult, PythonError> {
    if !enabled {
        // Fail fast: never touch the singleton when the host config has
        // Python switched off.
        return Err(PythonError::Disabled);
    }
    let handle = shared_handle().await?;
    let (reply_tx, reply_rx) = oneshot::channel();
    handle
        .jobs
        .send(Job {
            source: source.to_owned(),
            reply: reply_tx,
        })
        .map_err(|_| PythonError::Closed)?;
    reply_rx.await.map_err(|_| PythonError::Closed)
}

async fn shared_handle() -> Result<Handle, PythonError> {
    let slot = RUNTIME
        .get_or_init(|| async {
            LOAD_COUNT.fetch_add(1, Ordering::SeqCst);
            if std::env::var("POLYRUN_DEBUG").is_ok() {
                eprintln!("[debug] Starting embedded Python interpreter...");
            }
            let outcome = spawn_interpreter().await;
            if std::env::var("POLYRUN_DEBUG").is_ok() {
                match &outcome {
                    Ok(_) => eprintln!("[debug] Python interpreter ready"),
                    Err(message) => {
                        eprintln!("[debug] Python interpreter failed to start: {message}")
                    }
                }
            }
            outcome
        })
        .await;
    match slot {
        Ok(handle) => Ok(handle.clone()),
        Err(message) => Err(PythonError::Load(message.clone())),
    }
}

async fn spawn_interpreter() -> Result<Handle, String> {
    let (jobs_tx, jobs_rx) = mpsc::unbounded_channel();
    let (ready_tx, ready_rx) = oneshot::channel();
    thread::Builder::new()
        .name("python-runtime".into())
        .spawn(move || interpreter_thread(jobs_rx, ready_tx))
        .map_err(|err| err.to_string())?;
    match ready_rx.await {
        Ok(Ok(())) => Ok(Handle { jobs: jobs_tx }),
        Ok(Err(message)) => Err(message),
        Err(_) => Err("interpreter thread exited before signalling readiness".to_owned()),
    }
}

/// Thread body. Owns the interpreter; drains jobs until every sender is gone.
fn interpreter_thread(
    mut jobs: mpsc::UnboundedReceiver<Job>,
    ready: oneshot::Sender<Result<(), String>>,
) {
    let interpreter = match std::panic::catch_unwind(|| {
        Interpreter::with_init(Default::default(), |vm| {
            vm.add_native_modules(rustpython_stdlib::get_module_inits());
            vm.add_frozen(rustpython_pylib::FROZEN_STDLIB);
        })
    }) {
        Ok(interpreter) => interpreter,
        Err(panic) => {
            let _ = ready.send(Err(panic_text(panic)));
            return;
        }
    };
    if ready.send(Ok(())).is_err() {
        return;
    }
    while let Some(job) = jobs.blocking_recv() {
        let result = run_job(&interpreter, &job.source);
        let _ = job.reply.send(result);
    }
}

fn run_job(interpreter: &Interpreter, source: &str) -> RunResult {
    interpreter.enter(|vm| {
        // A fresh scope per job: nothing leaks between executions.
        let scope = vm.new_scope_with_builtins();
        match run_capture(vm, &scope, source) {
            Ok(result) => result,
            Err(exc) => {
                let mut rendered = String::new();
                if vm.write_exception(&mut rendered, &exc).is_err() {
                    rendered = "unrenderable Python exception".to_owned();
                }
                RunResult::Escaped(rendered.trim_end().to_owned())
            }
        }
    })
}

fn run_capture(vm: &VirtualMachine, scope: &Scope, source: &str) -> PyResult<RunResult> {
    scope
        .globals
        .set_item("__source__", vm.new_pyobj(source), vm)?;
    let program = vm
        .compile(
            CAPTURE_PROGRAM,
            compiler::Mode::Exec,
            "<capture>".to_owned(),
        )
        .map_err(|err| vm.new_syntax_error(&err, Some(CAPTURE_PROGRAM)))?;
    vm.run_code_obj(program, scope.clone())?;
    let text = read_global(vm, scope, "__result__")?;
    let kind = read_global(vm, scope, "__kind__")?;
    Ok(RunResult::Captured {
        failed: kind == "error",
        text,
    })
}

fn read_global(vm: &VirtualMachine, scope: &Scope, name: &str) -> PyResult<String> {
    let value = scope.globals.get_item(name, vm)?;
    Ok(value.str(vm)?.as_str().to_owned())
}

fn panic_text(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(text) = panic.downcast_ref::<&str>() {
        (*text).to_owned()
    } else if let Some(text) = panic.downcast_ref::<String>() {
        text.clone()
    } else {
        "interpreter construction panicked".to_owned()
    }
}

fn load_failure(source: &str) -> String {
    format!(
        "Python execution failed: Unable to load the Python runtime. Please check your internet connection.\n\nYour Python code:\n{source}\n\nNote: Python execution requires downloading the Python runtime (~30MB) on first use."
    )
}
