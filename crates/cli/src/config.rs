//! Command line configuration

use std::path::PathBuf;

use clap::{Args, Parser};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Lattice Carts command line configuration
#[derive(Debug, Parser)]
#[command(
    name = "lattice-carts",
    about = "Resolve cart item prices from a cart fixture",
    long_about = None
)]
pub struct CliConfig {
    /// Directory containing `carts/<name>.yml` fixtures
    #[arg(short, long, env = "FIXTURES_PATH", default_value = "./fixtures")]
    pub fixtures: PathBuf,

    /// Name of the cart fixture to resolve
    #[arg(short, long, env = "CART_FIXTURE")]
    pub cart: String,

    /// Pretty-print the JSON output
    #[arg(long, env = "PRETTY_OUTPUT", default_value_t = false)]
    pub pretty: bool,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_cart_and_defaults() -> TestResult {
        let config = CliConfig::try_parse_from(["lattice-carts", "--cart", "spring_sale"])?;

        assert_eq!(config.cart, "spring_sale");
        assert_eq!(config.fixtures, PathBuf::from("./fixtures"));
        assert!(!config.pretty);
        assert_eq!(config.logging.log_format, LogFormat::Compact);

        Ok(())
    }

    #[test]
    fn parses_json_log_format() -> TestResult {
        let config = CliConfig::try_parse_from([
            "lattice-carts",
            "--cart",
            "spring_sale",
            "--log-format",
            "json",
            "--pretty",
        ])?;

        assert_eq!(config.logging.log_format, LogFormat::Json);
        assert!(config.pretty);

        Ok(())
    }
}
