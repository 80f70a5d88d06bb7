use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::models::SearchMode;
use crate::global_constants;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

/// How the search API exposes its endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EndpointLayout {
    /// One path per search mode.
    Split {
        links_path: String,
        images_path: String,
    },
    /// A single path answering with links only.
    Echo { path: String },
}

impl Default for EndpointLayout {
    fn default() -> Self {
        EndpointLayout::Split {
            links_path: global_constants::LINKS_ENDPOINT_PATH.to_string(),
            images_path: global_constants::IMAGES_ENDPOINT_PATH.to_string(),
        }
    }
}

impl EndpointLayout {
    pub fn echo() -> Self {
        EndpointLayout::Echo {
            path: global_constants::ECHO_ENDPOINT_PATH.to_string(),
        }
    }
}

fn default_server_address() -> String {
    global_constants::DEFAULT_SERVER_ADDRESS.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default = "default_server_address")]
    pub server_address: String,
    #[serde(default)]
    pub endpoint_layout: EndpointLayout,
    #[serde(default)]
    pub default_mode: SearchMode,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            server_address: default_server_address(),
            endpoint_layout: EndpointLayout::default(),
            default_mode: SearchMode::default(),
            theme_mode: ThemeMode::default(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Server address: {}", settings.server_address);
        log::debug!("[SETTINGS] Endpoint layout: {:?}", settings.endpoint_layout);

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;
        self.save_to(&settings_path)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
