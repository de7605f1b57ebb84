//! Fixtures
//!
//! Carts described in YAML, for tests and the command line driver. Amounts
//! are read as-is; nothing is recalculated on load.

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::carts::{Cart, CartItemError};

pub mod carts;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A discount referenced a rule the fixture does not define
    #[error("Rule not found: {0}")]
    RuleNotFound(String),

    /// A line item could not be built
    #[error("Invalid cart item: {0}")]
    Item(#[from] CartItemError),
}

/// Loads cart fixtures from a directory tree.
#[derive(Debug, Clone)]
pub struct Fixture {
    base_path: PathBuf,
}

impl Fixture {
    /// Create a fixture loader rooted at `./fixtures`
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load `<base>/carts/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, names an unknown
    /// currency, or references an undefined rule.
    pub fn load_cart(&self, name: &str) -> Result<Cart, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        parse_cart(&contents)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a cart from YAML
///
/// # Errors
///
/// Returns an error if the YAML is malformed, names an unknown currency, or
/// references an undefined rule.
pub fn parse_cart(yaml: &str) -> Result<Cart, FixtureError> {
    let fixture: carts::CartFixture = serde_norway::from_str(yaml)?;

    fixture.try_into()
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use testresult::TestResult;

    use super::*;

    fn write_cart(base_path: &Path, name: &str, contents: &str) -> TestResult {
        let dir = base_path.join("carts");

        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("{name}.yml")), contents)?;

        Ok(())
    }

    #[test]
    fn load_cart_reads_from_carts_directory() -> TestResult {
        let dir = tempfile::tempdir()?;

        write_cart(dir.path(), "single", "currency: GBP\nitems:\n  - sku: mug\n    price: '4.50'\n")?;

        let cart = Fixture::with_base_path(dir.path()).load_cart("single")?;

        assert_eq!(cart.currency().iso_alpha_code, "GBP");
        assert_eq!(cart.items().len(), 1);

        Ok(())
    }

    #[test]
    fn load_cart_missing_file_is_io_error() -> TestResult {
        let dir = tempfile::tempdir()?;

        let result = Fixture::with_base_path(dir.path()).load_cart("missing");

        assert!(matches!(result, Err(FixtureError::Io(_))));

        Ok(())
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let result = parse_cart("currency: [USD");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(Fixture::default().base_path, PathBuf::from("./fixtures"));
    }
}
