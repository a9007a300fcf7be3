use crate::core::birthdays::DEFAULT_WINDOW_DAYS;
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_GREETING: &str = "Welcome to the assistant bot!";
pub const DEFAULT_PROMPT: &str = "Enter a command: ";
pub const DEFAULT_FAREWELL: &str = "Good bye!";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default)]
    pub assistant: AssistantSection,
    #[serde(default)]
    pub birthdays: BirthdaysSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantSection {
    pub greeting: Option<String>,
    pub prompt: Option<String>,
    pub farewell: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BirthdaysSection {
    pub window_days: Option<u32>,
}

impl AssistantConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ContactError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ASSISTANT_PROMPT})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ContactError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn greeting(&self) -> &str {
        self.assistant.greeting.as_deref().unwrap_or(DEFAULT_GREETING)
    }

    pub fn prompt(&self) -> &str {
        self.assistant.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    pub fn farewell(&self) -> &str {
        self.assistant.farewell.as_deref().unwrap_or(DEFAULT_FAREWELL)
    }

    pub fn window_days(&self) -> u32 {
        self.birthdays.window_days.unwrap_or(DEFAULT_WINDOW_DAYS)
    }
}

impl Validate for AssistantConfig {
    fn validate(&self) -> Result<()> {
        if let Some(window) = self.birthdays.window_days {
            validate_range("birthdays.window_days", window, 1, 366)?;
        }

        if let Some(prompt) = &self.assistant.prompt {
            validate_non_empty_string("assistant.prompt", prompt).map_err(|_| {
                ContactError::ConfigError {
                    message: "assistant.prompt cannot be blank".to_string(),
                }
            })?;
        }

        Ok(())
    }
}
