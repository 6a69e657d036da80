//! Grid parameters: defaults, config files, and query-string mirroring.
//!
//! Parameters are resolved in layers. Each layer overrides only the keys it
//! sets, so a config file or query string need only name what differs:
//!
//! ```text
//! stock defaults            ← GridParameters::default()
//!   ↓ grid.toml             ← --config (optional)
//!   ↓ query string          ← --query "columns=16&namespace=ui"
//!   ↓ explicit CLI flags    ← --columns 16
//! ```
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! namespace = "gs"
//! columns = 12
//!
//! breakpoint_tablet = "width >= 48rem"
//! breakpoint_desktop = "width >= 60rem"
//!
//! column_gap_tablet = "var(--column-gap-tablet, 1.125rem)"
//! column_gap_desktop = "var(--column-gap-desktop, 1.5rem)"
//!
//! row_gap_mobile = "var(--row-gap-mobile, 1lh)"
//! row_gap_tablet = "var(--row-gap-tablet, 0.75lh)"
//! row_gap_desktop = "var(--row-gap-desktop, 1.5lh)"
//! ```
//!
//! ## Query String
//!
//! The same parameters serialize to a flat string mapping with camelCase keys
//! (`breakpointTablet`, `rowGapMobile`, ...), which round-trips through a URL
//! query string. This is how a configured grid is shared as a link.
//!
//! String values are never inspected. Breakpoints and gaps are raw CSS and are
//! copied into the stylesheet as-is; only `columns` is checked.

use crate::factorize::{FactorizeError, parse_columns};
use crate::selectors::COLUMNS_MULTIPLIER;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Factorize(#[from] FactorizeError),
}

/// Largest column count accepted for generation.
///
/// The stylesheet grows linearly with `columns` (one column-span rule each),
/// so the cap keeps output in the tens of kilobytes.
pub const MAX_COLUMNS: u32 = 1024;

/// Query-string keys, in serialization order.
pub const QUERY_KEYS: [&str; 9] = [
    "namespace",
    "columns",
    "breakpointTablet",
    "breakpointDesktop",
    "columnGapTablet",
    "columnGapDesktop",
    "rowGapMobile",
    "rowGapTablet",
    "rowGapDesktop",
];

/// Everything the stylesheet depends on.
///
/// All fields have defaults. Unknown keys in a config file are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridParameters {
    /// Prefix for every generated class and custom property.
    pub namespace: String,
    /// Public column count at desktop sizes.
    pub columns: u32,
    /// Media condition for the tablet tier, e.g. `width >= 48rem`.
    pub breakpoint_tablet: String,
    /// Media condition for the desktop tier.
    pub breakpoint_desktop: String,
    pub column_gap_tablet: String,
    pub column_gap_desktop: String,
    pub row_gap_mobile: String,
    pub row_gap_tablet: String,
    pub row_gap_desktop: String,
}

impl Default for GridParameters {
    fn default() -> Self {
        Self {
            namespace: "gs".to_string(),
            columns: 12,
            breakpoint_tablet: "width >= 48rem".to_string(),
            breakpoint_desktop: "width >= 60rem".to_string(),
            column_gap_tablet: "var(--column-gap-tablet, 1.125rem)".to_string(),
            column_gap_desktop: "var(--column-gap-desktop, 1.5rem)".to_string(),
            row_gap_mobile: "var(--row-gap-mobile, 1lh)".to_string(),
            row_gap_tablet: "var(--row-gap-tablet, 0.75lh)".to_string(),
            row_gap_desktop: "var(--row-gap-desktop, 1.5lh)".to_string(),
        }
    }
}

impl GridParameters {
    /// Validate that `columns` is a usable positive integer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::Validation("columns must be at least 1".into()));
        }
        if self.columns > MAX_COLUMNS {
            return Err(ConfigError::Validation(format!(
                "columns must be at most {MAX_COLUMNS}"
            )));
        }
        Ok(())
    }

    /// Internal grid track count.
    pub fn columns_actual(&self) -> u32 {
        COLUMNS_MULTIPLIER * self.columns
    }

    /// Read a parameter by its query-string key.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "namespace" => self.namespace.clone(),
            "columns" => self.columns.to_string(),
            "breakpointTablet" => self.breakpoint_tablet.clone(),
            "breakpointDesktop" => self.breakpoint_desktop.clone(),
            "columnGapTablet" => self.column_gap_tablet.clone(),
            "columnGapDesktop" => self.column_gap_desktop.clone(),
            "rowGapMobile" => self.row_gap_mobile.clone(),
            "rowGapTablet" => self.row_gap_tablet.clone(),
            "rowGapDesktop" => self.row_gap_desktop.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Set a parameter by its query-string key.
    ///
    /// Returns `Ok(false)` for keys that aren't parameters; query strings often
    /// carry unrelated keys and those are ignored rather than rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<bool, ConfigError> {
        let field = match key {
            "namespace" => &mut self.namespace,
            "columns" => {
                self.columns = parse_columns(value)?;
                return Ok(true);
            }
            "breakpointTablet" => &mut self.breakpoint_tablet,
            "breakpointDesktop" => &mut self.breakpoint_desktop,
            "columnGapTablet" => &mut self.column_gap_tablet,
            "columnGapDesktop" => &mut self.column_gap_desktop,
            "rowGapMobile" => &mut self.row_gap_mobile,
            "rowGapTablet" => &mut self.row_gap_tablet,
            "rowGapDesktop" => &mut self.row_gap_desktop,
            _ => return Ok(false),
        };
        *field = value.to_string();
        Ok(true)
    }

    /// Flatten into a string-keyed mapping.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        QUERY_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }

    /// Apply every known key of a mapping on top of the current values.
    pub fn apply_map(&mut self, map: &BTreeMap<String, String>) -> Result<(), ConfigError> {
        for (key, value) in map {
            self.set(key, value)?;
        }
        self.validate()
    }

    /// Build parameters from defaults plus a mapping.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let mut params = Self::default();
        params.apply_map(map)?;
        Ok(params)
    }

    /// Serialize as `application/x-www-form-urlencoded`, keys in fixed order.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for key in QUERY_KEYS {
            if let Some(value) = self.get(key) {
                serializer.append_pair(key, &value);
            }
        }
        serializer.finish()
    }

    /// Apply a query string (with or without the leading `?`).
    ///
    /// Later occurrences of a repeated key win.
    pub fn apply_query_string(&mut self, query: &str) -> Result<(), ConfigError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let map: BTreeMap<String, String> = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        self.apply_map(&map)
    }

    /// Build parameters from defaults plus a query string.
    pub fn from_query_string(query: &str) -> Result<Self, ConfigError> {
        let mut params = Self::default();
        params.apply_query_string(query)?;
        Ok(params)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Stock parameters as a TOML table, the bottom layer of every load.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GridParameters::default()).expect("default parameters must serialize")
}

/// Overlay the keys of a `grid.toml` table onto `base`.
///
/// `grid.toml` is flat, so each key in `overlay` replaces the base value
/// outright. A non-table overlay is returned as is and fails deserialization.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            base_table.extend(overlay_table);
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read `grid.toml` if present. `Ok(None)` when there is no such file.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Apply the file layer to the defaults and check the result.
///
/// Unknown keys surface as `ConfigError::Toml`, a bad column count as
/// `ConfigError::Validation`.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<GridParameters, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let params: GridParameters = merged.try_into()?;
    params.validate()?;
    Ok(params)
}

/// Stock defaults with `grid.toml` at `path` on top.
///
/// Query strings and CLI flags are layered afterwards by the caller.
pub fn load_config(path: &Path) -> Result<GridParameters, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(path)?)
}

/// Returns a fully-commented stock `grid.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Grid System Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Breakpoints and gaps are raw CSS. They are copied into the generated
# stylesheet verbatim and are not validated.

# Prefix for every generated class and custom property.
# "gs" gives classes like .gs, .gs--ec3, .gs__cs4 and variables like
# --gs-grid-column-span.
namespace = "gs"

# Number of public columns at desktop sizes. Mobile always uses 1 column
# and tablet 2. Equal-column classes are generated for every divisor > 1.
# Must be between 1 and 1024.
columns = 12

# ---------------------------------------------------------------------------
# Breakpoints (CSS media conditions)
# ---------------------------------------------------------------------------
breakpoint_tablet = "width >= 48rem"
breakpoint_desktop = "width >= 60rem"

# ---------------------------------------------------------------------------
# Column gaps (no gap at mobile sizes)
# ---------------------------------------------------------------------------
column_gap_tablet = "var(--column-gap-tablet, 1.125rem)"
column_gap_desktop = "var(--column-gap-desktop, 1.5rem)"

# ---------------------------------------------------------------------------
# Row gaps
# ---------------------------------------------------------------------------
row_gap_mobile = "var(--row-gap-mobile, 1lh)"
row_gap_tablet = "var(--row-gap-tablet, 0.75lh)"
row_gap_desktop = "var(--row-gap-desktop, 1.5lh)"
"##
}
