//! resilient-fetch command line.
//!
//! Issues one HTTP request under a deadline and prints the status line and
//! body. Exits non-zero on timeout or network failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use resilient_fetch::config::validation::validate_config;
use resilient_fetch::config::{load_config, ConfigError, FetchConfig, TimeoutPolicy};
use resilient_fetch::observability::logging;
use resilient_fetch::{HttpTransport, RequestIssuer, RequestOptions};

#[derive(Parser)]
#[command(name = "resilient-fetch")]
#[command(about = "Issue an HTTP request with a hard deadline", long_about = None)]
struct Cli {
    /// Target URL
    url: String,

    /// HTTP method (defaults to the configured method, GET)
    #[arg(short = 'X', long)]
    method: Option<String>,

    /// Header in "Name: value" form; repeatable
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Request body
    #[arg(short = 'd', long)]
    data: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the request deadline in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Abort the in-flight request when the deadline fires
    #[arg(long)]
    abort_on_timeout: bool,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected 'Name: value', got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in '{raw}'"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FetchConfig::default(),
    };
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeouts.request_ms = timeout_ms;
    }
    if cli.abort_on_timeout {
        config.timeouts.on_timeout = TimeoutPolicy::Abort;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_logging(&config.observability)?;

    tracing::debug!(
        request_timeout_ms = config.timeouts.request_ms,
        on_timeout = ?config.timeouts.on_timeout,
        "Configuration loaded"
    );

    let transport = HttpTransport::from_config(&config)?;
    let issuer = RequestIssuer::from_config(transport, &config);

    let mut options = RequestOptions::new().headers(cli.headers);
    if let Some(method) = cli.method {
        options = options.method(method);
    }
    if let Some(data) = cli.data {
        options = options.body(data);
    }

    let outcome = issuer.issue(&cli.url, options).await;
    let code = exit_status(&outcome);
    match outcome {
        Ok(response) => {
            println!("{:?} {}", response.version(), response.status());
            let body = response.text().await?;
            println!("{body}");
        }
        Err(e) => eprintln!("Error: {e}"),
    }

    Ok(ExitCode::from(code))
}

/// Any response, whatever its status, is a success; only timeouts and
/// network failures are not.
fn exit_status<R, E>(outcome: &Result<R, E>) -> u8 {
    if outcome.is_ok() {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resilient_fetch::FetchError;

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("Content-Type: text/plain").unwrap(),
            ("Content-Type".to_string(), "text/plain".to_string())
        );
        assert_eq!(
            parse_header("X-Empty:").unwrap(),
            ("X-Empty".to_string(), String::new())
        );
        assert!(parse_header("no-colon").is_err());
        assert!(parse_header(": value").is_err());
    }

    #[test]
    fn test_cli_shape() {
        let cli = Cli::parse_from([
            "resilient-fetch",
            "https://api.example.com/items",
            "-X",
            "POST",
            "-H",
            "Accept: application/json",
            "-d",
            "{}",
            "--timeout-ms",
            "1500",
        ]);
        assert_eq!(cli.method.as_deref(), Some("POST"));
        assert_eq!(cli.headers.len(), 1);
        assert_eq!(cli.timeout_ms, Some(1500));
        assert!(!cli.abort_on_timeout);
    }

    #[test]
    fn test_exit_status_ignores_http_status() {
        let server_error: Result<u16, FetchError<std::io::Error>> = Ok(500);
        assert_eq!(exit_status(&server_error), 0);

        let timeout: Result<u16, FetchError<std::io::Error>> = Err(FetchError::Timeout);
        assert_eq!(exit_status(&timeout), 1);

        let refused: Result<u16, FetchError<std::io::Error>> = Err(FetchError::Network(
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        ));
        assert_eq!(exit_status(&refused), 1);
    }
}
