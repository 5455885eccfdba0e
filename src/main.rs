use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use codefixd::config::ServiceConfig;
use codefixd::{rest, AppContext};

#[derive(Parser)]
#[command(
    name = "codefixd",
    about = "Code-fix relay — forwards code and errors to Gemini and returns structured fixes",
    version
)]
struct Args {
    /// Gemini API key (sent as the `key` query credential)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// HTTP server port
    #[arg(long, env = "CODEFIXD_PORT")]
    port: Option<u16>,

    /// Bind address (default: 127.0.0.1; use 0.0.0.0 for LAN access)
    #[arg(long, env = "CODEFIXD_BIND")]
    bind_address: Option<String>,

    /// Base URL of the generateContent API
    #[arg(long, env = "CODEFIXD_API_BASE_URL")]
    api_base_url: Option<String>,

    /// Model name
    #[arg(long, env = "CODEFIXD_MODEL")]
    model: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long, env = "CODEFIXD_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CODEFIXD_LOG")]
    log: Option<String>,

    /// Write logs to this file path (rotated daily). Optional.
    #[arg(long, env = "CODEFIXD_LOG_FILE")]
    log_file: Option<std::path::PathBuf>,

    /// Log format: "pretty" (default) or "json"
    #[arg(long, env = "CODEFIXD_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = args.log.clone().unwrap_or_else(|| "info".to_string());
    let _guard = setup_logging(&log_level, args.log_file.as_deref(), &args.log_format);

    let config = ServiceConfig::new(
        args.api_key,
        args.port,
        args.bind_address,
        args.api_base_url,
        args.model,
        args.timeout_secs,
    );
    info!(
        model = %config.model,
        timeout_secs = config.timeout_secs,
        "starting codefixd v{}",
        env!("CARGO_PKG_VERSION")
    );

    let ctx = Arc::new(AppContext::new(config)?);
    rest::start_rest_server(ctx).await
}

/// Initialize tracing with an env-filter level, optional JSON format, and an
/// optional daily-rolling log file.
///
/// Returns a `WorkerGuard` that must stay alive for the process lifetime when
/// file logging is active. If the log directory cannot be created, falls back
/// to stdout-only logging with a warning — never panics.
fn setup_logging(
    log_level: &str,
    log_file: Option<&std::path::Path>,
    log_format: &str,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let use_json = log_format == "json";

    let Some(path) = log_file else {
        if use_json {
            tracing_subscriber::fmt().json().with_env_filter(log_level).init();
        } else {
            tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
        }
        return None;
    };

    let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
    let filename = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("codefixd.log"));

    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!(
            "warn: could not create log directory '{}': {e}; falling back to stdout",
            dir.display()
        );
        if use_json {
            tracing_subscriber::fmt().json().with_env_filter(log_level).init();
        } else {
            tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
        }
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    if use_json {
        tracing_subscriber::registry()
            .with(EnvFilter::new(log_level))
            .with(fmt::layer().json())
            .with(fmt::layer().json().with_writer(non_blocking))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(EnvFilter::new(log_level))
            .with(fmt::layer().compact())
            .with(fmt::layer().with_writer(non_blocking))
            .init();
    }

    Some(guard)
}
