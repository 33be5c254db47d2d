use crate::config::toml_config::TomlConfig;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::Path;

pub const DEFAULT_FIRST_PROMPT: &str = "Enter first number: ";
pub const DEFAULT_SECOND_PROMPT: &str = "Enter second number: ";
pub const DEFAULT_PAUSE_PROMPT: &str = "Press any key to continue...";

/// Resolved presentation settings handed to the comparator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub first_prompt: String,
    pub second_prompt: String,
    pub pause_prompt: String,
    pub pause: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_prompt: DEFAULT_FIRST_PROMPT.to_string(),
            second_prompt: DEFAULT_SECOND_PROMPT.to_string(),
            pause_prompt: DEFAULT_PAUSE_PROMPT.to_string(),
            pause: true,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            first_prompt: config
                .first_prompt()
                .map(str::to_string)
                .unwrap_or(defaults.first_prompt),
            second_prompt: config
                .second_prompt()
                .map(str::to_string)
                .unwrap_or(defaults.second_prompt),
            pause_prompt: config
                .pause_prompt()
                .map(str::to_string)
                .unwrap_or(defaults.pause_prompt),
            pause: config.pause_enabled().unwrap_or(defaults.pause),
        }
    }

    /// 優先順序: --no-pause > 設定檔 > 預設值
    pub fn resolve(config_path: Option<&Path>, no_pause: bool) -> Result<Self> {
        let mut settings = match config_path {
            Some(path) => {
                tracing::info!("📁 Loading settings from: {}", path.display());
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Self::from_toml(&config)
            }
            None => Self::default(),
        };

        if no_pause {
            settings.pause = false;
        }

        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn first_prompt(&self) -> &str {
        &self.first_prompt
    }

    fn second_prompt(&self) -> &str {
        &self.second_prompt
    }

    fn pause_prompt(&self) -> &str {
        &self.pause_prompt
    }

    fn pause_enabled(&self) -> bool {
        self.pause
    }
}
