use crate::adapters::display::OutputFormat;
use crate::adapters::keyboard::{self, Keymap};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub keyboard: Option<KeyboardConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyboardConfig {
    pub reset_keys: Option<Vec<String>>,
    pub equals_keys: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub format: Option<String>,
    pub trace: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_vars(content, |name| std::env::var(name).ok())?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換變數 (例如 ${RESET_KEY}); 查不到的變數保持原樣
    fn substitute_vars<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn reset_keys(&self) -> &[String] {
        self.keyboard
            .as_ref()
            .and_then(|k| k.reset_keys.as_deref())
            .unwrap_or(&[])
    }

    pub fn equals_keys(&self) -> &[String] {
        self.keyboard
            .as_ref()
            .and_then(|k| k.equals_keys.as_deref())
            .unwrap_or(&[])
    }

    pub fn format(&self) -> Option<OutputFormat> {
        self.display
            .as_ref()
            .and_then(|d| d.format.as_deref())
            .and_then(OutputFormat::from_name)
    }

    pub fn trace(&self) -> Option<bool> {
        self.display.as_ref().and_then(|d| d.trace)
    }

    /// Standard keymap plus the configured extra bindings.
    pub fn keymap(&self) -> Keymap {
        Keymap::standard()
            .with_reset_keys(self.reset_keys().iter().cloned())
            .with_equals_keys(self.equals_keys().iter().cloned())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        for (field, keys) in [
            ("keyboard.reset_keys", self.reset_keys()),
            ("keyboard.equals_keys", self.equals_keys()),
        ] {
            for key in keys {
                validation::validate_non_empty_string(field, key)?;
                if keyboard::is_fixed_key(key) {
                    return Err(CalcError::InvalidConfigValueError {
                        field: field.to_string(),
                        value: key.clone(),
                        reason: "Digits, '.' and + - * / cannot be rebound".to_string(),
                    });
                }
            }
        }

        // 內建的鍵也要算進去, 否則 equals_keys = ["Escape"] 會被 reset 吃掉
        let effective_reset: Vec<String> = keyboard::DEFAULT_RESET_KEYS
            .iter()
            .map(|k| k.to_string())
            .chain(self.reset_keys().iter().cloned())
            .collect();
        let effective_equals: Vec<String> = keyboard::DEFAULT_EQUALS_KEYS
            .iter()
            .map(|k| k.to_string())
            .chain(self.equals_keys().iter().cloned())
            .collect();
        validation::validate_disjoint("keyboard", &effective_reset, &effective_equals)?;

        if let Some(format) = self.display.as_ref().and_then(|d| d.format.as_deref()) {
            validation::validate_one_of("display.format", format, &OutputFormat::NAMES)?;
        }

        Ok(())
    }
}
