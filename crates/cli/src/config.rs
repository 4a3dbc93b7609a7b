//! Environment-driven configuration for the `bevstock` binary.

use std::path::PathBuf;

use thiserror::Error;

use bevstock_inventory::InsertionScope;

pub const REPORT_PATH_VAR: &str = "BEVSTOCK_REPORT_PATH";
pub const LAYOUT_VAR: &str = "BEVSTOCK_LAYOUT";
pub const INSERT_SCOPE_VAR: &str = "BEVSTOCK_INSERT_SCOPE";
pub const BRAND_VAR: &str = "BEVSTOCK_BRAND";
pub const COLUMN_VAR: &str = "BEVSTOCK_COLUMN";

pub const DEFAULT_REPORT_PATH: &str = "GaseosasYAguas.txt";
pub const DEFAULT_BRAND: &str = "CocaCola";
pub const DEFAULT_COLUMN: usize = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the stock report is written.
    pub report_path: PathBuf,
    /// Optional JSON shelf layout; the built-in sample shelf is used otherwise.
    pub layout_path: Option<PathBuf>,
    /// Overrides the layout's insertion scope when set.
    pub insertion_scope: Option<InsertionScope>,
    pub brand: String,
    pub column: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            layout_path: None,
            insertion_scope: None,
            brand: DEFAULT_BRAND.to_string(),
            column: DEFAULT_COLUMN,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// Unset and blank variables fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get(REPORT_PATH_VAR) {
            config.report_path = PathBuf::from(path);
        }
        config.layout_path = get(LAYOUT_VAR).map(PathBuf::from);

        if let Some(raw) = get(INSERT_SCOPE_VAR) {
            let scope = raw.parse::<InsertionScope>().map_err(|message| ConfigError::Invalid {
                var: INSERT_SCOPE_VAR,
                message,
            })?;
            config.insertion_scope = Some(scope);
        }

        if let Some(brand) = get(BRAND_VAR) {
            config.brand = brand;
        }

        if let Some(raw) = get(COLUMN_VAR) {
            config.column = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                var: COLUMN_VAR,
                message: format!("`{raw}` is not a column index ({e})"),
            })?;
        }

        Ok(config)
    }
}
