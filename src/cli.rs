//! Command-line interface for polyrun.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::dispatch::Executor;
use crate::language::Language;
use crate::report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Multi-language code execution dispatcher.
///
/// Polyrun routes source code to the strategy that can say something useful
/// about it: an in-process JavaScript sandbox, an embedded Python
/// interpreter, structural validators for markup and data formats,
/// heuristic analyzers for compiled languages, and an optional remote
/// judge for the languages it maps.
#[derive(Parser)]
#[command(name = "polyrun")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute one piece of source code
    Run(RunArgs),
    /// List supported languages and their execution tiers
    Languages,
}

/// Arguments for the run command.
#[derive(Parser)]
pub struct RunArgs {
    /// Source file to execute (language inferred from the extension)
    pub file: Option<PathBuf>,

    /// Source given inline instead of a file
    #[arg(short = 'c', long)]
    pub code: Option<String>,

    /// Language id (overrides extension inference)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Execute through the remote judge where available
    #[arg(long)]
    pub remote: bool,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Path to a config YAML file (default: auto-discover)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Run the run command.
pub fn run(args: &RunArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let (source, language_id) = match resolve_input(args) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let config = match Config::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let executor = Executor::new(config);
    let runtime = tokio::runtime::Runtime::new()?;
    let outcome = runtime.block_on(executor.run(&source, &language_id, args.remote));

    match args.format.as_str() {
        "json" => report::write_json(&language_id, &outcome)?,
        _ => report::write_pretty(&language_id, &outcome),
    }

    if outcome.is_failure() {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Run the languages command.
pub fn languages() -> anyhow::Result<i32> {
    report::write_languages();
    Ok(EXIT_SUCCESS)
}

/// Work out what to run and as which language.
///
/// The language id is passed through as given. Unknown ids are the
/// dispatcher's business (it answers with its not-supported note), not a
/// CLI validation error.
fn resolve_input(args: &RunArgs) -> anyhow::Result<(String, String)> {
    let source = match (&args.file, &args.code) {
        (Some(_), Some(_)) => anyhow::bail!("give either a file or --code, not both"),
        (None, None) => anyhow::bail!("nothing to run; give a file or --code"),
        (Some(path), None) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {:?}: {}", path, e))?,
        (None, Some(code)) => code.clone(),
    };

    let language_id = match &args.language {
        Some(id) => id.clone(),
        None => {
            let path = args
                .file
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("--code needs --language"))?;
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            match Language::from_extension(ext) {
                Some(lang) => lang.as_str().to_owned(),
                None => anyhow::bail!(
                    "cannot infer a language from {:?}; use --language",
                    path
                ),
            }
        }
    };

    Ok((source, language_id))
}
