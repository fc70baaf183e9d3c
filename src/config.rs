//! Application configuration with deterministic precedence: built-in
//! defaults, then `~/.athletica/config.toml` (or an explicit path), then
//! environment overrides.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context};
use serde::Deserialize;
use tracing_subscriber::filter::Directive;

use crate::app::state::Page;
use crate::model::profile::UnitSystem;
use crate::Result;

const DEFAULT_LEVEL: &str = "info";
/// Frame poll interval when neither the config file nor the CLI sets one.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(120);
const MIN_TICK_RATE: Duration = Duration::from_millis(30);
const MAX_TICK_RATE: Duration = Duration::from_millis(1000);

/// Environment variable naming an alternate config file.
pub const CONFIG_PATH_ENV: &str = "ATHLETICA_CONFIG";
/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "ATHLETICA_LOG";

/// Resolved application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub logging: LogSettings,
}

/// Dashboard behavior settings.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// How long the event loop waits for input before redrawing.
    pub tick_rate: Duration,
    /// Page shown when the dashboard opens.
    pub start_page: Page,
    /// Measurement system preselected in the profile settings tab.
    pub units: UnitSystem,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            start_page: Page::Dashboard,
            units: UnitSystem::Imperial,
        }
    }
}

/// File logging settings. The terminal belongs to the dashboard, so
/// logs only ever go to a file.
#[derive(Debug, Clone)]
pub struct LogSettings {
    pub level: String,
    /// Log directory. Relative paths resolve under `~/.athletica`.
    pub dir: Option<PathBuf>,
    pub enable_file: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            dir: None,
            enable_file: true,
        }
    }
}

impl AppConfig {
    /// Load configuration with deterministic precedence: defaults,
    /// config file, env overrides. `explicit` wins over
    /// `$ATHLETICA_CONFIG`, which wins over the default path.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = AppConfig::default();
        if let Some(raw) = read_config_file(explicit)? {
            config.apply(raw)?;
        }
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply(&mut self, raw: TomlConfig) -> Result<()> {
        if let Some(ui) = raw.ui {
            if let Some(tick_rate_ms) = ui.tick_rate_ms {
                self.ui.tick_rate = Duration::from_millis(tick_rate_ms);
            }
            if let Some(start_page) = ui.start_page {
                self.ui.start_page = start_page
                    .parse()
                    .context("invalid ui.start_page in config file")?;
            }
            if let Some(units) = ui.units {
                self.ui.units = units.parse().context("invalid ui.units in config file")?;
            }
        }
        if let Some(logging) = raw.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(dir) = logging.dir {
                self.logging.dir = Some(PathBuf::from(dir));
            }
            if let Some(enable_file) = logging.enable_file {
                self.logging.enable_file = enable_file;
            }
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var(LOG_LEVEL_ENV) {
            if !level.trim().is_empty() {
                self.logging.level = level;
            }
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.ui.tick_rate < MIN_TICK_RATE || self.ui.tick_rate > MAX_TICK_RATE {
            return Err(anyhow!(
                "ui.tick_rate_ms must be between {} and {}",
                MIN_TICK_RATE.as_millis(),
                MAX_TICK_RATE.as_millis()
            ));
        }
        Directive::from_str(&self.logging.level)
            .map_err(|_| anyhow!("logging.level must be a valid tracing directive"))?;
        Ok(())
    }
}

/// Directory holding user state: the default config file and logs.
pub fn athletica_home() -> Result<PathBuf> {
    dirs_next::home_dir()
        .map(|home| home.join(".athletica"))
        .ok_or_else(|| anyhow!("could not determine a home directory"))
}

/// Default config file location, `~/.athletica/config.toml`.
pub fn default_config_path() -> Result<PathBuf> {
    Ok(athletica_home()?.join("config.toml"))
}

fn read_config_file(explicit: Option<&Path>) -> Result<Option<TomlConfig>> {
    // An explicitly requested file must exist; the default path is
    // allowed to be absent.
    if let Some(path) = explicit {
        return parse_config_file(path).map(Some);
    }
    if let Ok(from_env) = env::var(CONFIG_PATH_ENV) {
        if !from_env.trim().is_empty() {
            return parse_config_file(Path::new(&from_env)).map(Some);
        }
    }
    let default_path = default_config_path()?;
    if !default_path.exists() {
        return Ok(None);
    }
    parse_config_file(&default_path).map(Some)
}

fn parse_config_file(path: &Path) -> Result<TomlConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

#[derive(Debug, Deserialize)]
struct TomlConfig {
    pub ui: Option<TomlUiSection>,
    pub logging: Option<TomlLoggingSection>,
}

#[derive(Debug, Deserialize)]
struct TomlUiSection {
    pub tick_rate_ms: Option<u64>,
    pub start_page: Option<String>,
    pub units: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlLoggingSection {
    pub level: Option<String>,
    pub dir: Option<String>,
    pub enable_file: Option<bool>,
}
