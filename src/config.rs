//! Gallery configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! the base layer; a user file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! data_path = "data/portfolio.json"   # Artwork dataset (JSON array)
//!
//! [search]
//! threshold = 0.4           # 0.0 = exact matches only, 1.0 = match anything
//! case_sensitive = false
//!
//! [search.weights]
//! title = 0.4
//! description = 0.3
//! category = 0.2
//! tags = 0.1
//!
//! [pagination]
//! page_size = 8             # Items revealed per "load more"
//!
//! [facets]
//! tag_preview = 8           # Tags shown before "Show All"
//!
//! [colors.light]
//! background = "#ffffff"
//! surface = "#f9fafb"       # Cards, filter buttons
//! text = "#111827"
//! text_muted = "#4b5563"    # Result counts, descriptions
//! border = "#e5e7eb"
//! accent = "#2563eb"        # Selected filters, links
//! accent_text = "#ffffff"
//!
//! [colors.dark]
//! background = "#111827"
//! surface = "#1f2937"
//! text = "#f9fafb"
//! text_muted = "#9ca3af"
//! border = "#374151"
//! accent = "#3b82f6"
//! accent_text = "#ffffff"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Path to the artwork dataset, relative to the working directory.
    #[serde(default = "default_data_path")]
    pub data_path: String,
    /// Fuzzy search tuning.
    pub search: SearchConfig,
    /// Incremental reveal settings.
    pub pagination: PaginationConfig,
    /// Filter panel settings.
    pub facets: FacetsConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

fn default_data_path() -> String {
    "data/portfolio.json".to_string()
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            search: SearchConfig::default(),
            pagination: PaginationConfig::default(),
            facets: FacetsConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.search.threshold) {
            return Err(ConfigError::Validation(
                "search.threshold must be between 0.0 and 1.0".into(),
            ));
        }
        let w = &self.search.weights;
        let weights = [w.title, w.description, w.category, w.tags];
        if weights.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::Validation(
                "search.weights must be non-negative numbers".into(),
            ));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(ConfigError::Validation(
                "search.weights must not all be zero".into(),
            ));
        }
        if self.pagination.page_size == 0 {
            return Err(ConfigError::Validation(
                "pagination.page_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Fuzzy search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Acceptance threshold on the 0.0 (exact only) to 1.0 (anything) scale.
    pub threshold: f64,
    /// Match letter case exactly instead of folding to lowercase.
    pub case_sensitive: bool,
    /// Relative contribution of each field to the ranking.
    pub weights: FieldWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: crate::search::fuzzy::DEFAULT_THRESHOLD,
            case_sensitive: false,
            weights: FieldWeights::default(),
        }
    }
}

/// Per-field search weights. Higher weight = stronger pull on ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldWeights {
    pub title: f64,
    pub description: f64,
    pub category: f64,
    pub tags: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 0.4,
            description: 0.3,
            category: 0.2,
            tags: 0.1,
        }
    }
}

impl FieldWeights {
    /// Scale the weights so they sum to 1.
    ///
    /// All-zero weights are returned unchanged (validation rejects them).
    pub fn normalized(&self) -> Self {
        let total = self.title + self.description + self.category + self.tags;
        if total <= 0.0 {
            return *self;
        }
        Self {
            title: self.title / total,
            description: self.description / total,
            category: self.category / total,
            tags: self.tags / total,
        }
    }
}

/// Incremental reveal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    /// Items shown initially and added by each "load more".
    pub page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: crate::view::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Filter panel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacetsConfig {
    /// Number of tags listed before the "Show All" control.
    pub tag_preview: usize,
}

impl Default for FacetsConfig {
    fn default() -> Self {
        Self { tag_preview: 8 }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Card and button background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (result count, descriptions).
    pub text_muted: String,
    /// Border color.
    pub border: String,
    /// Selected filters and links.
    pub accent: String,
    /// Text drawn on top of `accent`.
    pub accent_text: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f9fafb".to_string(),
            text: "#111827".to_string(),
            text_muted: "#4b5563".to_string(),
            border: "#e5e7eb".to_string(),
            accent: "#2563eb".to_string(),
            accent_text: "#ffffff".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#111827".to_string(),
            surface: "#1f2937".to_string(),
            text: "#f9fafb".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "#374151".to_string(),
            accent: "#3b82f6".to_string(),
            accent_text: "#ffffff".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GalleryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<GalleryConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<GalleryConfig, ConfigError> {
    let overlay = load_raw_config(dir)?;
    if overlay.is_none() {
        tracing::debug!("no {} in {}, using defaults", CONFIG_FILENAME, dir.display());
    }
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Artwork dataset: a JSON array of records with id, title, description,
# imagePath, category, tags and date (width/height optional).
data_path = "data/portfolio.json"

# ---------------------------------------------------------------------------
# Search
# ---------------------------------------------------------------------------
[search]
# How close a word must be to count as a match.
# 0.0 accepts exact matches only, 1.0 accepts anything. At 0.4 a short word
# with one typo still matches while unrelated words do not.
threshold = 0.4

# Match letter case exactly.
case_sensitive = false

# Relative weight of each field when ranking results.
[search.weights]
title = 0.4
description = 0.3
category = 0.2
tags = 0.1

# ---------------------------------------------------------------------------
# Pagination
# ---------------------------------------------------------------------------
[pagination]
# Items shown at first and added by each "load more".
page_size = 8

# ---------------------------------------------------------------------------
# Filter panel
# ---------------------------------------------------------------------------
[facets]
# Tags listed before the "Show All" control.
tag_preview = 8

# ---------------------------------------------------------------------------
# Colors - Light mode
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#f9fafb"       # Cards, filter buttons
text = "#111827"
text_muted = "#4b5563"    # Result counts, descriptions
border = "#e5e7eb"
accent = "#2563eb"        # Selected filters, links
accent_text = "#ffffff"

# ---------------------------------------------------------------------------
# Colors - Dark mode (html.dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#111827"
surface = "#1f2937"
text = "#f9fafb"
text_muted = "#9ca3af"
border = "#374151"
accent = "#3b82f6"
accent_text = "#ffffff"
"##
}

/// Generate CSS custom properties from color config.
///
/// Dark mode is class-driven (`<html class="dark">`), so the stored theme
/// preference wins over the system setting.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

:root.dark {{
{dark}
}}"#,
        light = scheme_properties(&colors.light),
        dark = scheme_properties(&colors.dark),
    )
}

fn scheme_properties(scheme: &ColorScheme) -> String {
    [
        ("--color-bg", &scheme.background),
        ("--color-surface", &scheme.surface),
        ("--color-text", &scheme.text),
        ("--color-text-muted", &scheme.text_muted),
        ("--color-border", &scheme.border),
        ("--color-accent", &scheme.accent),
        ("--color-accent-text", &scheme.accent_text),
    ]
    .iter()
    .map(|(name, value)| format!("    {name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}
