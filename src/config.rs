//! Persisted user preferences.

use color_eyre::eyre::Result;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::ui::colors::Theme;

/// User preferences stored as YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub theme: String,
    /// Optional path to a YAML deal catalog used instead of the built in one
    #[serde(default)]
    pub catalog: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default().to_string(),
            catalog: None,
        }
    }
}

/// Loads and persists [`Config`] to a YAML file.
#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct ConfigManager {
    /// The path the config file
    path: String,
    #[builder(setter(skip))]
    config: Config,
}

impl ConfigManagerBuilder {
    pub fn build(&self) -> Result<ConfigManager> {
        let mut manager = self._build()?;

        match std::fs::File::open(&manager.path) {
            Ok(file) => {
                manager.config = match serde_yaml::from_reader(file) {
                    Ok(c) => c,
                    Err(e) => {
                        log::warn!("Failed to parse config file, using defaults: {}", e);
                        Config::default()
                    }
                };
                Ok(manager)
            }
            Err(_) => {
                log::info!("no config found at {}, writing defaults", manager.path);
                manager.config = Config::default();
                manager.write()?;
                Ok(manager)
            }
        }
    }
}

impl ConfigManager {
    /// Returns a new instance of ConfigManagerBuilder.
    pub fn builder() -> ConfigManagerBuilder {
        ConfigManagerBuilder::default()
    }

    pub fn get(&self) -> &Config {
        &self.config
    }

    /// Replaces the config and persists it to disk.
    pub fn update_config(&mut self, config: Config) -> Result<()> {
        self.config = config;
        self.write()
    }

    /// Persists a newly selected theme.
    pub fn update_theme(&mut self, theme: Theme) -> Result<()> {
        let config = Config {
            theme: theme.to_string(),
            ..self.config.clone()
        };
        self.update_config(config)
    }

    fn write(&self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self.config)?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
