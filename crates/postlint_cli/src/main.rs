//! postlint command line interface.
//!
//! # Responsibility
//! - Resolve file and directory arguments into lint runs over
//!   `postlint_core`.
//! - Render reports as text or JSON and map findings to exit codes.
//!
//! # Invariants
//! - Exit code 0: no error-severity findings. 1: at least one error
//!   finding. 2: usage or I/O failure.
//! - Report entries keep a stable slug order across runs.

use clap::{Parser, ValueEnum};
use log::{error, info};
use postlint_core::{
    default_log_level, init_logging, logging_status, FsPostStore, LintReport, LintService,
    PostReport,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "postlint",
    version,
    about = "Structural lint checks for markdown posts with front-matter"
)]
struct Cli {
    /// Post files or post directories to lint.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Report output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Directory for rolling log files. Logging is off when absent.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level used with `--log-dir`.
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(message) = init_logging(&cli.log_level, log_dir) {
            eprintln!("postlint: {message}");
            return ExitCode::from(2);
        }
        if let Some((level, dir)) = logging_status() {
            info!(
                "event=cli_start module=cli level={level} log_dir={} paths={}",
                dir.display(),
                cli.paths.len()
            );
        }
    }

    let report = match collect_report(&cli.paths) {
        Ok(report) => report,
        Err(message) => {
            error!("event=run_failed module=cli reason={message}");
            eprintln!("postlint: {message}");
            return ExitCode::from(2);
        }
    };

    match cli.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("postlint: failed to encode report: {err}");
                return ExitCode::from(2);
            }
        },
    }

    if report.error_count() > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// Lints every argument path and merges the results into one report.
fn collect_report(paths: &[PathBuf]) -> Result<LintReport, String> {
    let mut entries = Vec::new();
    for path in paths {
        if path.is_dir() {
            let store = FsPostStore::open(path).map_err(|err| err.to_string())?;
            let service = LintService::new(store);
            let report = service.lint_all().map_err(|err| err.to_string())?;
            entries.extend(report.entries);
        } else {
            entries.push(lint_single_file(path)?);
        }
    }
    entries.sort_by(|a, b| a.slug.cmp(&b.slug));
    Ok(LintReport { entries })
}

fn lint_single_file(path: &PathBuf) -> Result<PostReport, String> {
    use postlint_core::{lint_post, Diagnostic, StoreError, RULE_STRUCTURE};

    match FsPostStore::load_file(path) {
        Ok(post) => {
            let diagnostics = lint_post(&post);
            Ok(PostReport {
                slug: post.slug,
                diagnostics,
            })
        }
        // Parse failures are findings, matching whole-store runs.
        Err(StoreError::Parse { slug, source }) => Ok(PostReport {
            slug,
            diagnostics: vec![Diagnostic::error(RULE_STRUCTURE, None, source.to_string())],
        }),
        Err(other) => Err(other.to_string()),
    }
}

fn render_text(report: &LintReport) {
    for entry in &report.entries {
        for diagnostic in &entry.diagnostics {
            println!("{}: {diagnostic}", entry.slug);
        }
    }

    let posts = report.entries.len();
    let clean = report
        .entries
        .iter()
        .filter(|entry| entry.diagnostics.is_empty())
        .count();
    println!(
        "{posts} post(s) checked, {clean} clean, {} error(s), {} warning(s)",
        report.error_count(),
        report.warning_count()
    );
}
