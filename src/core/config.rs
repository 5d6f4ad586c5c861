//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.rankfavs/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::LayoutMode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FavsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub data_dir: Option<String>,
    pub app_name: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub mode: Option<LayoutMode>,
    pub dual_pane_min_width: Option<u16>,
    pub list_pane_percent: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_APP_NAME: &str = "Rank Favs";
pub const DEFAULT_DUAL_PANE_MIN_WIDTH: u16 = 100;
pub const DEFAULT_LIST_PANE_PERCENT: u16 = 40;
const LIST_PANE_PERCENT_RANGE: (u16, u16) = (20, 80);

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_dir: PathBuf,
    pub app_name: String,
    pub log_level: LevelFilter,
    pub layout: LayoutMode,
    pub dual_pane_min_width: u16,
    pub list_pane_percent: u16,
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

/// `~/.rankfavs`, the default home for config and data.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".rankfavs"))
}

/// Returns the path to `~/.rankfavs/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    home_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.rankfavs/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FavsConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FavsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FavsConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<FavsConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FavsConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FavsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# rankfavs configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_dir = "~/.rankfavs"          # Or set RANKFAVS_DATA_DIR, or --data-dir
# app_name = "Rank Favs"            # Title of the lists pane on narrow screens
# log_level = "debug"               # "error", "warn", "info", "debug", "trace", "off"

# [layout]
# mode = "auto"                     # "auto", "single", "dual"
# dual_pane_min_width = 100         # Columns needed for side-by-side panes
# list_pane_percent = 40            # Width share of the lists pane (20-80)
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
pub fn resolve(
    config: &FavsConfig,
    cli_data_dir: Option<&Path>,
    cli_layout: Option<LayoutMode>,
) -> ResolvedConfig {
    let data_dir = resolve_data_dir(
        cli_data_dir,
        std::env::var("RANKFAVS_DATA_DIR").ok(),
        config.general.data_dir.as_deref(),
    );

    // Log level: env → config → default
    let log_level = std::env::var("RANKFAVS_LOG")
        .ok()
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| match level.parse::<LevelFilter>() {
            Ok(filter) => Some(filter),
            Err(_) => {
                warn!("Unknown log level {:?}, using debug", level);
                None
            }
        })
        .unwrap_or(LevelFilter::Debug);

    let (min_percent, max_percent) = LIST_PANE_PERCENT_RANGE;

    ResolvedConfig {
        data_dir,
        app_name: config
            .general
            .app_name
            .clone()
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
        log_level,
        layout: cli_layout.or(config.layout.mode).unwrap_or_default(),
        dual_pane_min_width: config
            .layout
            .dual_pane_min_width
            .unwrap_or(DEFAULT_DUAL_PANE_MIN_WIDTH),
        list_pane_percent: config
            .layout
            .list_pane_percent
            .unwrap_or(DEFAULT_LIST_PANE_PERCENT)
            .clamp(min_percent, max_percent),
    }
}

/// Data dir: CLI → env → config → default. Env and config values may start
/// with `~/`; a CLI path has already been through the shell.
fn resolve_data_dir(
    cli_data_dir: Option<&Path>,
    env_data_dir: Option<String>,
    config_data_dir: Option<&str>,
) -> PathBuf {
    cli_data_dir
        .map(Path::to_path_buf)
        .or_else(|| env_data_dir.as_deref().map(expand_home))
        .or_else(|| config_data_dir.map(expand_home))
        .or_else(home_dir)
        .unwrap_or_else(|| PathBuf::from(".rankfavs"))
}

/// Expand a leading `~/` against the home directory.
fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|h| h.join(rest))
            .unwrap_or_else(|| PathBuf::from(raw)),
        None => PathBuf::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = FavsConfig::default();
        let resolved = resolve(&config, Some(Path::new("/tmp/favs")), None);
        assert_eq!(resolved.app_name, DEFAULT_APP_NAME);
        assert_eq!(resolved.layout, LayoutMode::Auto);
        assert_eq!(resolved.dual_pane_min_width, DEFAULT_DUAL_PANE_MIN_WIDTH);
        assert_eq!(resolved.list_pane_percent, DEFAULT_LIST_PANE_PERCENT);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = FavsConfig {
            general: GeneralConfig {
                app_name: Some("My Favs".to_string()),
                ..Default::default()
            },
            layout: LayoutConfig {
                mode: Some(LayoutMode::Dual),
                dual_pane_min_width: Some(120),
                list_pane_percent: Some(30),
            },
        };
        let resolved = resolve(&config, Some(Path::new("/tmp/favs")), None);
        assert_eq!(resolved.app_name, "My Favs");
        assert_eq!(resolved.layout, LayoutMode::Dual);
        assert_eq!(resolved.dual_pane_min_width, 120);
        assert_eq!(resolved.list_pane_percent, 30);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = FavsConfig {
            general: GeneralConfig {
                data_dir: Some("/srv/favs".to_string()),
                ..Default::default()
            },
            layout: LayoutConfig {
                mode: Some(LayoutMode::Dual),
                ..Default::default()
            },
        };
        let resolved = resolve(
            &config,
            Some(Path::new("/tmp/cli")),
            Some(LayoutMode::Single),
        );
        assert_eq!(resolved.data_dir, PathBuf::from("/tmp/cli"));
        assert_eq!(resolved.layout, LayoutMode::Single);
    }

    #[test]
    fn test_list_pane_percent_is_clamped() {
        let config = FavsConfig {
            layout: LayoutConfig {
                list_pane_percent: Some(95),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Path::new("/tmp/favs")), None);
        assert_eq!(resolved.list_pane_percent, 80);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[layout]
mode = "single"
"#;
        let config: FavsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.layout.mode, Some(LayoutMode::Single));
        assert!(config.layout.dual_pane_min_width.is_none());
        assert!(config.general.app_name.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[layout\nmode = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_config_generates_commented_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.layout.mode.is_none());

        // The generated file is all comments, so it parses back to defaults
        let generated = fs::read_to_string(&path).unwrap();
        let reparsed: FavsConfig = toml::from_str(&generated).unwrap();
        assert!(reparsed.general.data_dir.is_none());
    }

    #[test]
    fn test_env_data_dir_expands_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let resolved = resolve_data_dir(None, Some("~/favs".to_string()), Some("/srv/favs"));
        assert_eq!(resolved, home.join("favs"));
    }

    #[test]
    fn test_data_dir_precedence() {
        let cli = Path::new("/tmp/cli");
        assert_eq!(
            resolve_data_dir(Some(cli), Some("/tmp/env".to_string()), Some("/srv/favs")),
            PathBuf::from("/tmp/cli")
        );
        assert_eq!(
            resolve_data_dir(None, Some("/tmp/env".to_string()), Some("/srv/favs")),
            PathBuf::from("/tmp/env")
        );
        assert_eq!(
            resolve_data_dir(None, None, Some("/srv/favs")),
            PathBuf::from("/srv/favs")
        );
    }

    #[test]
    fn test_expand_home_leaves_absolute_paths() {
        assert_eq!(expand_home("/srv/favs"), PathBuf::from("/srv/favs"));
    }
}
