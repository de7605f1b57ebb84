//! Lattice Carts command line driver
//!
//! Loads a cart fixture, resolves every line item's prices in one pass and
//! prints the result as JSON.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use thiserror::Error;
use tracing::{error, info};

use lattice_carts::{
    fixtures::{Fixture, FixtureError},
    resolvers::{CartItemPriceResolver, ResolveError},
    totals::StoredTotalsCollector,
};

use crate::{config::CliConfig, report::build_report};

mod config;
mod observability;
mod report;

/// Errors that abort a run.
#[derive(Debug, Error)]
enum CliError {
    /// Loading the cart fixture failed.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// Resolving prices failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Encoding the report failed.
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(config_error) => {
            // clap renders its own help/usage output
            _ = config_error.print();

            return if config_error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(init_error) = observability::init_logging(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Failed to initialize logging: {init_error}");
        }

        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(run_error) => {
            error!("{run_error}");

            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig) -> Result<(), CliError> {
    let cart = Fixture::with_base_path(&config.fixtures).load_cart(&config.cart)?;

    info!(
        cart = %cart.uuid(),
        items = cart.items().len(),
        fixture = %config.cart,
        "loaded cart fixture"
    );

    let resolver = CartItemPriceResolver::new(StoredTotalsCollector);
    let report = build_report(&resolver, &cart)?;

    let mut stdout = io::stdout().lock();

    if config.pretty {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
    } else {
        serde_json::to_writer(&mut stdout, &report)?;
    }

    writeln!(stdout)?;

    Ok(())
}
