//! `access-log`: write access-log records from the command line.
//!
//! Logs one record built from flags, or with `--stdin` one JSON request per
//! input line:
//!
//! ```text
//! access-log --level INFO --ip 10.0.0.7 --method GET --url /health --message ok
//! echo '{"logMsg":"boom","level":"ERROR"}' | access-log --stdin
//! ```

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;

use access_logger::config::{load_config, validation::validate_config};
use access_logger::observability::logging::{init_tracing, DEFAULT_FILTER};
use access_logger::{Level, LogDispatcher, LogRequest, LoggerConfig, Threshold};

#[derive(Parser)]
#[command(name = "access-log")]
#[command(about = "Leveled access logger: file always, console by threshold", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file path (overrides config and ACCESS_LOG_FILE).
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Console threshold (overrides config and DEBUG).
    #[arg(short, long)]
    threshold: Option<String>,

    /// Disable level coloring.
    #[arg(long)]
    no_color: bool,

    /// Read JSON requests from stdin, one per line.
    #[arg(long, conflicts_with_all = ["message", "method", "url", "ip", "level"])]
    stdin: bool,

    #[arg(long)]
    message: Option<String>,

    #[arg(long)]
    method: Option<String>,

    #[arg(long)]
    url: Option<String>,

    #[arg(long)]
    ip: Option<String>,

    #[arg(long)]
    level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(DEFAULT_FILTER);

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::from_env(),
    };
    if let Some(path) = cli.file.clone() {
        config.file.path = path;
    }
    if let Some(raw) = &cli.threshold {
        config.threshold = Threshold::parse(raw);
    }
    if cli.no_color {
        config.console.color = false;
    }
    if let Err(errors) = validate_config(&config) {
        for error in &errors {
            tracing::error!(%error, "Invalid configuration");
        }
        return Err(access_logger::config::ConfigError::Validation(errors).into());
    }

    tracing::debug!(
        threshold = %config.threshold,
        file = %config.file.path.display(),
        "Configuration loaded"
    );

    let mut dispatcher = LogDispatcher::from_config(&config);

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<LogRequest>(&line) {
                Ok(request) => dispatcher.log(&request),
                Err(e) => tracing::warn!(error = %e, "Skipping malformed request line"),
            }
        }
    } else {
        let request = LogRequest {
            message: cli.message,
            method: cli.method,
            url: cli.url,
            ip: cli.ip,
            level: cli.level.as_deref().map(Level::parse),
        };
        dispatcher.log(&request);
    }

    Ok(())
}
