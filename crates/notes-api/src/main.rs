//! notes-api - HTTP API server for the notes service

use std::path::Path;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use notes_api::config::LogFormat;
use notes_api::{ApiConfig, AppState};
use notes_core::defaults;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env();
    let _log_guard = init_tracing(&config);

    info!(
        log_format = ?config.log_format,
        log_file = config.log_file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );
    info!(
        environment = %config.environment,
        cors = ?config.cors_origins,
        max_body_bytes = config.max_body_bytes,
        "Configuration loaded"
    );

    let state = AppState::in_memory(config);
    info!(
        notes = state.notes.count().await?,
        "In-memory note store seeded"
    );

    notes_api::app::serve(state).await
}

/// Install the global subscriber.
///
/// Output goes to stdout, or to a daily-rotated file when `LOG_FILE` is set.
/// `RUST_LOG` overrides the default filter. The returned guard flushes the
/// file writer on drop and must live as long as the process.
fn init_tracing(config: &ApiConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| defaults::LOG_FILTER.into());

    let (writer, guard) = match config.log_file.as_deref() {
        Some(path) => {
            let (dir, file_name) = split_log_path(path);
            let appender = tracing_appender::rolling::daily(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stdout), None),
    };

    // Files get plain text unless LOG_ANSI asks otherwise.
    let ansi = config.log_ansi.unwrap_or(guard.is_none());

    let output: Box<dyn Layer<Registry> + Send + Sync> = match config.log_format {
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
        LogFormat::Text => fmt::layer().with_ansi(ansi).with_writer(writer).boxed(),
    };

    tracing_subscriber::registry()
        .with(output)
        .with(filter)
        .init();

    guard
}

/// Directory and file name for the rolling appender.
fn split_log_path(path: &str) -> (&Path, &str) {
    let path = Path::new(path);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or(defaults::LOG_FILE_NAME);
    (dir, file_name)
}
