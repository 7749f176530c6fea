use std::fs;
use std::path::{Path, PathBuf};

use super::AdminConfig;
use super::errors::ConfigError;

const CONFIG_PATH_ENV: &str = "FOLIO_ADMIN_CONFIG";
const APP_DIR: &str = "folio-admin";
const CONFIG_FILE: &str = "config.json";

/// Status describing how the configuration was loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the configuration from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: AdminConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub(crate) fn new(config: AdminConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (AdminConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Load the configuration, writing defaults when no file exists yet.
///
/// Read failures degrade to the default configuration with a warning; the
/// dashboard must always start.
pub(crate) fn load_or_init_config() -> AdminConfig {
    let path = config_path();
    let load = match load_config_from_path(&path) {
        Ok(load) => load,
        Err(err) => {
            log::warn!("config read failed at {}: {err}", path.display());
            return AdminConfig::default();
        },
    };

    let (config, status) = load.into_parts();
    match status {
        ConfigLoadStatus::Loaded => {
            log::info!("config loaded from {}", path.display());
        },
        ConfigLoadStatus::Missing => {
            match save_config_to_path(&path, &config) {
                Ok(()) => {
                    log::info!("default config written to {}", path.display())
                },
                Err(err) => log::warn!("config write failed: {err}"),
            }
        },
        ConfigLoadStatus::Invalid(message) => {
            log::warn!("config file invalid, using defaults: {message}");
        },
    }

    config
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                AdminConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<AdminConfig>(&data) {
        Ok(config) => Ok(ConfigLoad::new(config, ConfigLoadStatus::Loaded)),
        Err(err) => Ok(ConfigLoad::new(
            AdminConfig::default(),
            ConfigLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn save_config_to_path(
    path: &Path,
    config: &AdminConfig,
) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let payload = serde_json::to_string_pretty(config)?;
    write_atomic(path, payload.as_bytes())?;

    Ok(())
}

fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    app_dir().join(CONFIG_FILE)
}

/// Default panel data directory, next to the config file.
pub(crate) fn default_data_dir() -> PathBuf {
    match config_path().parent() {
        Some(dir) => dir.join("data"),
        None => app_dir().join("data"),
    }
}

fn app_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join(APP_DIR);
    }

    std::env::temp_dir().join(APP_DIR)
}

/// Write through a temporary sibling so readers never see a partial file.
pub(crate) fn write_atomic(
    path: &Path,
    payload: &[u8],
) -> Result<(), std::io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
