//! Tracing configuration for Visdom Wave
//!
//! Installs the global `tracing-subscriber` registry: an env-filter, a stdout
//! fmt layer and, when a log directory is configured, a non-blocking file
//! layer.
//!
//! ## Filter precedence / 过滤器优先级
//!
//! 1. `RUST_LOG`
//! 2. `[logging] level` from the config file
//! 3. Built-in defaults (debug builds: `debug`, release: `info`)

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};
use vw_core::config::LoggingConfig;

const LOG_FILE_NAME: &str = "visdomwave.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug level for the workspace crates
/// - **Production**: info level, timer adapter kept at info so per-tick
///   debug events stay out of the log
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "info" }.to_string(),
        if is_dev {
            "vw_app=debug"
        } else {
            "vw_app=info"
        }
        .to_string(),
        "vw_infra::time=info".to_string(),
    ]
}

fn build_env_filter(logging: &LoggingConfig, is_dev: bool) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directives = match &logging.level {
        Some(level) => level.clone(),
        None => build_filter_directives(is_dev).join(","),
    };
    Ok(EnvFilter::try_new(directives)?)
}

/// Initialize the tracing subscriber with appropriate configuration
///
/// Call once at startup, after the config file is loaded and before any
/// service is wired.
///
/// ```ignore
/// let config = visdomwave_lib::bootstrap::load_config("visdomwave.toml")?;
/// visdomwave_lib::bootstrap::init_tracing_subscriber(&config.logging)?;
/// ```
///
/// ## Errors / 错误
///
/// Returns `Err` if:
/// - Subscriber is already registered (should only call once)
/// - Invalid filter directives in `RUST_LOG` or the config file
pub fn init_tracing_subscriber(logging: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = build_env_filter(logging, is_development())?;

    let stdout_writer: BoxMakeWriter = BoxMakeWriter::new(io::stdout);
    let file_writer = match &logging.directory {
        Some(directory) => match build_file_writer(directory) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
                None
            }
        },
        None => None,
    };

    // "2026-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stdout_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(directory: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(directory)?;
    let file_appender = tracing_appender::rolling::never(directory, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
