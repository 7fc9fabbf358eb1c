use clap::Parser;
use directories::ProjectDirs;
use focusframe::api::{CmdResult, ConfigAction, FocusApi, Outcome};
use focusframe::config::FocusConfig;
use focusframe::error::Result;
use focusframe::store::fs::FileStore;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_json, print_messages, print_stats, print_timer};

/// Overrides the data directory (sessions and config).
const HOME_ENV: &str = "FOCUSFRAME_HOME";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("focusframe=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("focusframe=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

struct AppContext {
    api: FocusApi<FileStore>,
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Stats { json }) => handle_stats(&ctx, json),
        Some(Commands::Save {
            duration,
            notes,
            json,
        }) => handle_save(&mut ctx, duration, notes, json),
        Some(Commands::Clear { json }) => handle_clear(&mut ctx, json),
        Some(Commands::Start { minutes }) => handle_start(&ctx, minutes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_stats(&ctx, false),
    }
}

fn data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "focusframe", "focusframe")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".focusframe"))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir();
    let config = FocusConfig::load(&data_dir)?;
    let sessions_path = config.sessions_path(&data_dir);
    debug!(data_dir = %data_dir.display(), sessions = %sessions_path.display(), "resolved paths");

    let store = FileStore::new(sessions_path);
    let api = FocusApi::new(store, data_dir, config);
    Ok(AppContext { api })
}

fn handle_stats(ctx: &AppContext, json: bool) -> Result<ExitCode> {
    let stats = ctx.api.stats();
    if json {
        print_json(&stats)?;
    } else {
        print_stats(&stats);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_save(
    ctx: &mut AppContext,
    duration: String,
    notes: Vec<String>,
    json: bool,
) -> Result<ExitCode> {
    let notes = notes.join(" ");
    let result = ctx.api.save_session(duration, Some(notes.as_str()));
    finish(result, json)
}

fn handle_clear(ctx: &mut AppContext, json: bool) -> Result<ExitCode> {
    let result = ctx.api.clear_sessions();
    finish(result, json)
}

fn handle_start(ctx: &AppContext, minutes: i64) -> Result<ExitCode> {
    let result = ctx.api.start_timer(minutes)?;
    print_messages(&result.messages);
    if let Some(plan) = &result.timer {
        print_timer(plan);
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<ExitCode> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            println!("sessions-file = {}", config.sessions_file);
            println!("max-timer-minutes = {}", config.max_timer_minutes);
        }
    }
    print_messages(&result.messages);
    Ok(ExitCode::SUCCESS)
}

/// Prints a mutation result. In JSON mode failures are reported on stdout as an
/// `Outcome` instead of an `Error:` line.
fn finish(result: Result<CmdResult>, json: bool) -> Result<ExitCode> {
    if json {
        let outcome = Outcome::from_result(&result);
        print_json(&outcome)?;
        return Ok(if outcome.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let result = result?;
    print_messages(&result.messages);
    Ok(ExitCode::SUCCESS)
}
