//! Command line and environment configuration for the server.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

/// The port the server listens on when none is configured.
pub const DEFAULT_PORT: u16 = 8000;
/// The number of seconds a request may take when no timeout is configured.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 100;

/// The REST API server for recording transactions and categories.
///
/// Every option can also be set with the environment variable named in its help text.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// The port to serve the API from.
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// File path to the application SQLite database.
    #[arg(long, env = "DATABASE_PATH", default_value = "finance.db")]
    pub db_path: PathBuf,

    /// The maximum number of seconds a request may take before it is aborted.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    /// Respond with 404 instead of 500 when a requested category or transaction does not exist.
    ///
    /// The environment variable accepts the usual spellings, e.g. "1", "yes" or "false".
    #[arg(
        long,
        env = "DISTINCT_NOT_FOUND",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub distinct_not_found: bool,

    /// Log filter directives, e.g. "info" or "finance_rs=debug,tower_http=debug".
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Config {
    /// The per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod config_tests {
    use std::{path::PathBuf, time::Duration};

    use clap::Parser;

    use super::Config;

    #[test]
    fn parses_command_line_flags() {
        let config = Config::try_parse_from([
            "server",
            "--port",
            "9000",
            "--db-path",
            "/tmp/test.db",
            "--request-timeout-secs",
            "5",
            "--distinct-not-found",
            "--log-filter",
            "debug",
        ])
        .expect("Could not parse config");

        assert_eq!(
            config,
            Config {
                port: 9000,
                db_path: PathBuf::from("/tmp/test.db"),
                request_timeout_secs: 5,
                distinct_not_found: true,
                log_filter: "debug".to_owned(),
            }
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn distinct_not_found_accepts_boolish_environment_values() {
        let parse = |value: &str| {
            // SAFETY: no other test writes this variable, and the tests that parse a config
            // pass `--distinct-not-found` explicitly, which takes precedence.
            unsafe { std::env::set_var("DISTINCT_NOT_FOUND", value) };
            Config::try_parse_from(["server"]).map(|config| config.distinct_not_found)
        };

        let results = [parse("1"), parse("yes"), parse("true"), parse("0"), parse("off")];
        // SAFETY: as above.
        unsafe { std::env::remove_var("DISTINCT_NOT_FOUND") };

        let results: Vec<_> = results.into_iter().map(Result::ok).collect();
        assert_eq!(
            results,
            vec![Some(true), Some(true), Some(true), Some(false), Some(false)]
        );
    }

    #[test]
    fn rejects_invalid_port() {
        let result = Config::try_parse_from(["server", "--port", "not-a-port"]);

        assert!(result.is_err());
    }
}
