//! User configuration.
//!
//! Loaded from ~/.config/agenda/config.toml. A commented default file is
//! created on first run so the available options are discoverable.

use std::path::{Path, PathBuf};

use chrono::Duration;
use ::config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AgendaConfig {
    /// Fallback duration for events created without an end time (humantime
    /// syntax, e.g. "45m", "1h 30m").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_duration: Option<String>,

    /// chrono format string for the date headings in the list view.
    /// When unset, relative labels ("Today", "Tomorrow") are used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl AgendaConfig {
    pub fn config_path() -> AgendaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendaError::Config("Could not determine config directory".into()))?
            .join("agenda");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> AgendaResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: AgendaConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| AgendaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AgendaError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Save the current config to ~/.config/agenda/config.toml
    pub fn save(&self) -> AgendaResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| AgendaError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| AgendaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> AgendaResult<()> {
        let contents = "\
# agenda configuration

# Fallback duration for events created without an end time:
# default_duration = \"1h\"

# Date heading format for the list view (chrono syntax):
# date_format = \"%a %b %-d\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AgendaError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AgendaError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Parse `default_duration` into a chrono duration.
    pub fn default_duration(&self) -> AgendaResult<Option<Duration>> {
        let Some(raw) = &self.default_duration else {
            return Ok(None);
        };

        let std_duration = humantime::parse_duration(raw)
            .map_err(|e| AgendaError::Config(format!("Invalid default_duration \"{raw}\": {e}")))?;

        let duration = Duration::from_std(std_duration)
            .map_err(|_| AgendaError::Config(format!("default_duration \"{raw}\" is too large")))?;

        Ok(Some(duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_duration_unset_is_none() {
        let config = AgendaConfig::default();
        assert!(config.default_duration().unwrap().is_none());
    }

    #[test]
    fn default_duration_parses_humantime_syntax() {
        let config = AgendaConfig {
            default_duration: Some("1h 30m".to_string()),
            ..Default::default()
        };

        assert_eq!(
            config.default_duration().unwrap(),
            Some(Duration::minutes(90))
        );
    }

    #[test]
    fn default_duration_rejects_garbage() {
        let config = AgendaConfig {
            default_duration: Some("soonish".to_string()),
            ..Default::default()
        };

        let err = config.default_duration().unwrap_err();
        assert!(matches!(err, AgendaError::Config(_)));
    }
}
