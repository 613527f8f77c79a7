//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - initializes logging
//! - loads the trained artifact (fail fast)
//! - dispatches to scoring, inspection, or the terminal form

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::{Command, ScoreArgs};
use crate::config::Settings;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `credisure` binary.
pub fn run() -> Result<(), AppError> {
    // `credisure` and `credisure --artifact x.json` open the form, like
    // `credisure tui`. Clap requires a subcommand name, so rewrite argv first.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let settings = Settings::from_env().with_artifact_override(cli.artifact);
    let interactive = matches!(cli.command, Command::Tui);
    init_tracing(&settings, interactive);

    match cli.command {
        Command::Score(args) => handle_score(&settings, &args),
        Command::Inspect => handle_inspect(&settings),
        Command::Tui => handle_tui(&settings),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean.
///
/// The form draws on the terminal, so it defaults to warnings only.
fn init_tracing(settings: &Settings, interactive: bool) {
    let default = if interactive { "credisure=warn" } else { "credisure=info" };
    let (filter, rejected) = log_filter(settings.log_filter.as_deref(), default);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if let Some(reason) = rejected {
        tracing::warn!(%reason, "ignoring log filter, using '{default}'");
    }
}

/// Build the filter from the configured directive, falling back to `default`.
///
/// A directive that does not parse is returned as the second value so it can
/// be reported once logging is up.
fn log_filter(directive: Option<&str>, default: &str) -> (EnvFilter, Option<String>) {
    let Some(directive) = directive else {
        return (EnvFilter::new(default), None);
    };
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(default), Some(format!("'{directive}': {e}"))),
    }
}

fn handle_score(settings: &Settings, args: &ScoreArgs) -> Result<(), AppError> {
    let engine = pipeline::load_engine(settings)?;
    let input = args.to_input();
    let result = pipeline::score_applicant(&engine, &input)?;

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| AppError::internal(format!("Failed to serialize result: {e}")))?;
        println!("{json}");
    } else {
        println!("{}", crate::report::format_score_result(&input, &result));
    }
    Ok(())
}

fn handle_inspect(settings: &Settings) -> Result<(), AppError> {
    let engine = pipeline::load_engine(settings)?;
    println!(
        "{}",
        crate::report::format_artifact_summary(engine.artifact(), &settings.artifact_path)
    );
    Ok(())
}

fn handle_tui(settings: &Settings) -> Result<(), AppError> {
    let engine = pipeline::load_engine(settings)?;
    crate::tui::run(engine)
}

/// Rewrite argv so `credisure` defaults to `credisure tui`.
///
/// Rules:
/// - `credisure`                     -> `credisure tui`
/// - `credisure --artifact x ...`    -> `credisure tui --artifact x ...`
/// - `credisure --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "score" | "inspect" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
