//! Light/dark theme preference.
//!
//! The first visit follows the system preference and saves it; from then on
//! the stored choice wins, and toggling replaces it. Storage sits behind
//! [`ThemeStore`] so the CLI can persist to a file and tests can stay in
//! memory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Name of the preference file inside the state directory.
const THEME_FILENAME: &str = "theme";

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown theme '{0}' (expected 'light' or 'dark')")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::Unknown(other.to_string())),
        }
    }
}

/// Where the preference lives between sessions.
pub trait ThemeStore {
    /// The saved preference, if any.
    fn load(&self) -> Result<Option<Theme>, ThemeError>;

    fn save(&self, theme: Theme) -> Result<(), ThemeError>;
}

/// Plain-text preference file (`light` or `dark`).
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Store inside `state_dir`; the directory is created on first save.
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(THEME_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        content.parse().map(Some)
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, theme.as_str())?;
        Ok(())
    }
}

/// Saved preference first, then the system setting.
///
/// When nothing usable is saved, the system choice is written back so it
/// sticks on later visits even if the system setting changes. An unreadable
/// or corrupt store is logged and treated as "no preference"; a failed write
/// is logged and the resolved theme is still returned.
pub fn resolve_theme(store: &dyn ThemeStore, system_prefers_dark: bool) -> Theme {
    match store.load() {
        Ok(Some(theme)) => return theme,
        Ok(None) => {}
        Err(e) => tracing::warn!("ignoring saved theme: {e}"),
    }
    let theme = system_theme(system_prefers_dark);
    if let Err(e) = store.save(theme) {
        tracing::warn!("could not save theme preference: {e}");
    }
    theme
}

fn system_theme(prefers_dark: bool) -> Theme {
    if prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Flip the current theme and persist the result.
pub fn toggle_theme(store: &dyn ThemeStore, system_prefers_dark: bool) -> Result<Theme, ThemeError> {
    let next = resolve_theme(store, system_prefers_dark).toggle();
    store.save(next)?;
    Ok(next)
}
