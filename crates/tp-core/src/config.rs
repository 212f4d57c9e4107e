use std::path::PathBuf;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::calendar::MonthCursor;
use crate::types::{Theme, ThemeFilter, ViewKind};

/// Top-level configuration loaded from `~/.training-plan/config.toml`.
///
/// Every section is optional; missing keys take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

impl Config {
    /// Load config from `~/.training-plan/config.toml`, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(path)
        } else {
            let cfg = Config::default();
            cfg.validate()?;
            Ok(cfg)
        }
    }

    /// Load from a specific path.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let cfg: Config = toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// Serialize config to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Semantic validation for settings that are not expressible via types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.validate()
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".training-plan")
            .join("config.toml")
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("validation: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Section structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_plan_title")]
    pub plan_title: String,
    #[serde(default = "default_organisation")]
    pub organisation: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            plan_title: default_plan_title(),
            organisation: default_organisation(),
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

fn default_plan_title() -> String {
    "Sales & Client Service Training Plan".into()
}
fn default_organisation() -> String {
    "Physique 57".into()
}
fn default_log_level() -> String {
    "warn".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// One of `timeline`, `clusters`, `calendar`, `analytics`, `list`.
    #[serde(default = "default_view")]
    pub default_view: String,
    /// `All` or a theme label.
    #[serde(default = "default_theme")]
    pub default_theme: String,
    /// First month shown by the calendar, `YYYY-MM`.
    #[serde(default = "default_calendar_start")]
    pub calendar_start: String,
    #[serde(default = "default_highlight_weekday")]
    pub highlight_weekday: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_view: default_view(),
            default_theme: default_theme(),
            calendar_start: default_calendar_start(),
            highlight_weekday: default_highlight_weekday(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.default_view
            .parse::<ViewKind>()
            .map_err(|e| ConfigError::Validation(format!("display.default_view: {e}")))?;
        if let ThemeFilter::Unknown(label) = ThemeFilter::parse(&self.default_theme) {
            return Err(ConfigError::Validation(format!(
                "display.default_theme: `{label}` is neither \"All\" nor one of {}",
                Theme::ALL.map(|t| t.label()).join(", ")
            )));
        }
        self.calendar_start
            .parse::<MonthCursor>()
            .map_err(|e| ConfigError::Validation(format!("display.calendar_start: {e}")))?;
        self.highlight_weekday.trim().parse::<Weekday>().map_err(|_| {
            ConfigError::Validation(format!(
                "display.highlight_weekday: unknown weekday `{}`",
                self.highlight_weekday
            ))
        })?;
        Ok(())
    }

    /// Falls back to the timeline when the value does not parse.
    pub fn view(&self) -> ViewKind {
        self.default_view.parse().unwrap_or_default()
    }

    pub fn theme_filter(&self) -> ThemeFilter {
        ThemeFilter::parse(&self.default_theme)
    }

    pub fn calendar_start(&self) -> MonthCursor {
        self.calendar_start.parse().unwrap_or_default()
    }

    pub fn weekday(&self) -> Weekday {
        self.highlight_weekday
            .trim()
            .parse()
            .unwrap_or(crate::calendar::DEFAULT_TRAINING_WEEKDAY)
    }
}

fn default_view() -> String {
    ViewKind::Timeline.key().into()
}
fn default_theme() -> String {
    ThemeFilter::SENTINEL.into()
}
fn default_calendar_start() -> String {
    "2025-08".into()
}
fn default_highlight_weekday() -> String {
    "wednesday".into()
}

/// Which sessions count toward the headline "Training Hours" figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursPool {
    /// Completed and upcoming sessions.
    #[default]
    All,
    Upcoming,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatsConfig {
    #[serde(default)]
    pub hours_pool: HoursPool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        Config::default().validate().expect("defaults are valid");
    }

    #[test]
    fn accessors_fall_back_on_bad_values() {
        let display = DisplayConfig {
            default_view: "kanban".into(),
            calendar_start: "soon".into(),
            highlight_weekday: "blursday".into(),
            ..DisplayConfig::default()
        };
        assert_eq!(display.view(), ViewKind::Timeline);
        assert_eq!(display.calendar_start(), MonthCursor::default());
        assert_eq!(display.weekday(), Weekday::Wed);
    }
}
