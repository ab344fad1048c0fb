//! # Configuration
//!
//! Settings for the menu and table defaults, with an override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.climenu/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use crossterm::style::Color;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::menu::MenuStyle;
use super::option::MenuOption;
use super::strings::{StringOverrides, Strings};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ClimenuConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub strings: StringOverrides,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub locale: Option<String>,
    pub wait_for_user: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StyleConfig {
    pub marker: Option<String>,
    pub selected_color: Option<String>,
    pub normal_color: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOCALE: &str = "en";
pub const LOCALE_ENV_VAR: &str = "CLIMENU_LOCALE";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub locale: String,
    pub wait_for_user: bool,
    pub style: MenuStyle,
    pub strings: Strings,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.climenu/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".climenu").join("config.toml"))
}

/// Load config from `~/.climenu/config.toml`, or defaults if the home
/// directory can't be determined.
pub fn load_config() -> Result<ClimenuConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(ClimenuConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// A missing file gets a commented-out default written in its place and
/// yields `ClimenuConfig::default()`. A malformed file is `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<ClimenuConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(ClimenuConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ClimenuConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# climenu configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# locale = "en"                      # "en" or "fr" (or set CLIMENU_LOCALE)
# wait_for_user = true               # pause for a key after each action

# [style]
# marker = "> "
# selected_color = "magenta"
# normal_color = "grey"

# [strings]
# exit_label = "Exit"
# table_empty = "The table is empty."
# press_any_key = "Press any key to continue..."
# navigation_hint = "Use the arrow keys to navigate the menu. Select an option by pressing enter."
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_locale` comes from the command line (None = not specified).
pub fn resolve(config: &ClimenuConfig, cli_locale: Option<&str>) -> ResolvedConfig {
    let locale = cli_locale
        .map(|s| s.to_string())
        .or_else(|| std::env::var(LOCALE_ENV_VAR).ok())
        .or_else(|| config.general.locale.clone())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    let strings = Strings::for_locale(&locale).with_overrides(&config.strings);

    let defaults = MenuStyle::default();
    let style = MenuStyle {
        marker: config
            .style
            .marker
            .clone()
            .unwrap_or(defaults.marker),
        selected_color: parse_color(config.style.selected_color.as_deref())
            .unwrap_or(defaults.selected_color),
        normal_color: parse_color(config.style.normal_color.as_deref())
            .unwrap_or(defaults.normal_color),
    };

    ResolvedConfig {
        locale,
        wait_for_user: config
            .general
            .wait_for_user
            .unwrap_or(MenuOption::DEFAULT_WAIT_FOR_USER),
        style,
        strings,
    }
}

/// Parses a crossterm color name (`"magenta"`, `"dark_grey"`, ...).
fn parse_color(name: Option<&str>) -> Option<Color> {
    let name = name?;
    match Color::try_from(name) {
        Ok(color) => Some(color),
        Err(()) => {
            warn!("Unknown color {name:?} in config, using default");
            None
        }
    }
}
