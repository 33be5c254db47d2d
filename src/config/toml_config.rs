use crate::utils::error::{CompareError, Result};
use crate::utils::validation::{validate_optional_non_empty, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub prompts: Option<PromptsConfig>,
    pub behavior: Option<BehaviorConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    pub first: Option<String>,
    pub second: Option<String>,
    pub pause: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    pub pause: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CompareError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CompareError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GREETING})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CompareError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn first_prompt(&self) -> Option<&str> {
        self.prompts.as_ref().and_then(|p| p.first.as_deref())
    }

    pub fn second_prompt(&self) -> Option<&str> {
        self.prompts.as_ref().and_then(|p| p.second.as_deref())
    }

    pub fn pause_prompt(&self) -> Option<&str> {
        self.prompts.as_ref().and_then(|p| p.pause.as_deref())
    }

    pub fn pause_enabled(&self) -> Option<bool> {
        self.behavior.as_ref().and_then(|b| b.pause)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_optional_non_empty("prompts.first", self.first_prompt())?;
        validate_optional_non_empty("prompts.second", self.second_prompt())?;
        Ok(())
    }
}
