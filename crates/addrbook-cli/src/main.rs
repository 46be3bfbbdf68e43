mod commands;
mod error;
mod render;
mod repl;
mod session;
mod suggest;

use anyhow::{Context as _, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::error::{exit_code_for, report_error};
use crate::session::{Session, Step};
use addrbook_config as config;
use addrbook_store::paths;

#[derive(Debug, Parser)]
#[command(
    name = "addrbook",
    version,
    about = "Contacts, notes and birthday reminders from the terminal"
)]
struct Cli {
    /// Database file to use instead of the default data directory.
    #[arg(long)]
    book_path: Option<PathBuf>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
    /// Pins the session date (DD.MM.YYYY).
    #[arg(long, hide = true, value_parser = parse_today)]
    today: Option<NaiveDate>,
    /// A single command line to run instead of the interactive prompt.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        book_path,
        config: config_path,
        verbose,
        today,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let book_path = paths::resolve_db_path(book_path.or_else(|| app_config.book_path.clone()))
        .with_context(|| "resolve book path")?;
    debug!(path = %book_path.display(), "book path resolved");

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let mut session = Session::open(&book_path, app_config, today);

    if command.is_empty() {
        let stdin = io::stdin();
        return repl::run(&mut session, stdin.lock(), io::stdout().lock());
    }

    if let Step::Reply(message) = session.execute(&command.join(" "))? {
        println!("{message}");
    }
    session.close()
}

fn parse_today(raw: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%d.%m.%Y").map_err(|err| format!("{err}: use DD.MM.YYYY"))
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
