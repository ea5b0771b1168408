//! CLI entrypoint for Student Registrar
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use registrar_application::RecordSession;
use registrar_domain::CourseCatalog;
use registrar_infrastructure::{ConfigLoader, FileConfig, JsonFileStudentRepository};
use registrar_presentation::{
    BufReadLines, Cli, LineReader, OutputConfig, ReedlineLines, RegistrarShell, ReplConfig,
    ShellExit,
};
use std::io::{self, IsTerminal};
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting Student Registrar");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.show_config {
        println!("{}", ConfigLoader::describe_sources(cli.config.as_ref()));
        println!();
        println!("Effective configuration:");
        print!(
            "{}",
            config
                .to_toml()
                .context("Failed to render configuration")?
        );
        return Ok(());
    }

    let output_config = OutputConfig {
        color: config.output.color && !cli.no_color,
    };
    output_config.apply();

    let repl_config = repl_config(&config);

    // === Dependency Injection ===
    let mut settings = config.store.to_settings();
    if let Some(path) = &cli.store {
        settings = settings.with_path(path);
    }
    let repository = JsonFileStudentRepository::new(settings);

    let session = RecordSession::open(repository, CourseCatalog::seed())
        .context("Failed to open the record store")?;

    let stdin = io::stdin();
    let input: Box<dyn LineReader> = if stdin.is_terminal() {
        Box::new(ReedlineLines::new(repl_config.history_path()))
    } else {
        Box::new(BufReadLines::new(stdin.lock(), io::stdout()))
    };

    let mut shell = RegistrarShell::new(session, input, io::stdout()).with_config(repl_config);
    match shell.run()? {
        ShellExit::Saved => info!("Records saved, exiting"),
        ShellExit::InputClosed => info!("Input closed, exiting without saving"),
    }

    Ok(())
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over `-v`. Logs go to stderr unless
/// `log_file` is given; the returned guard flushes the file writer on drop.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn repl_config(config: &FileConfig) -> ReplConfig {
    ReplConfig {
        history_file: config.repl.history_path(),
        ask_semester_details: config.repl.ask_semester_details,
    }
}
