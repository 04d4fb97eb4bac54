//! Resolver configuration loaded from an optional TOML file.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Top-level configuration for the CLI and library entry points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Locale used for generated headings.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Values used when the macro omits a parameter.
    #[serde(default)]
    pub defaults: ParameterDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { locale: default_locale(), defaults: ParameterDefaults::default() }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.locale.trim().is_empty() {
            return Err(AppError::InvalidConfig("locale must not be empty".to_string()));
        }
        self.defaults.validate()
    }
}

/// Declared defaults for numeric macro parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterDefaults {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_max_result")]
    pub max_result: i32,
    /// Popup width when the report covers the current page only.
    #[serde(default = "default_popup_width")]
    pub popup_width: i32,
    /// Popup height when the report covers the current page only.
    #[serde(default = "default_popup_height")]
    pub popup_height: i32,
}

impl Default for ParameterDefaults {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            max_result: default_max_result(),
            popup_width: default_popup_width(),
            popup_height: default_popup_height(),
        }
    }
}

impl ParameterDefaults {
    pub fn validate(&self) -> Result<(), AppError> {
        let checks = [
            ("width", self.width),
            ("height", self.height),
            ("max_result", self.max_result),
            ("popup_width", self.popup_width),
            ("popup_height", self.popup_height),
        ];
        for (name, value) in checks {
            if value <= 0 {
                return Err(AppError::InvalidConfig(format!(
                    "defaults.{name} must be greater than 0"
                )));
            }
        }
        Ok(())
    }
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_width() -> i32 {
    500
}

fn default_height() -> i32 {
    500
}

fn default_max_result() -> i32 {
    30
}

fn default_popup_width() -> i32 {
    800
}

fn default_popup_height() -> i32 {
    600
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
