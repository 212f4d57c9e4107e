use std::io::Write;

use chrono::Weekday;
use tp_core::calendar::MonthCursor;
use tp_core::config::{Config, HoursPool};
use tp_core::{Theme, ThemeFilter, ViewKind};

#[test]
fn default_config() {
    let cfg = Config::default();
    assert_eq!(cfg.general.organisation, "Physique 57");
    assert_eq!(cfg.general.log_level, "warn");
    assert!(!cfg.general.json_logs);
    assert_eq!(cfg.display.view(), ViewKind::Timeline);
    assert_eq!(cfg.display.theme_filter(), ThemeFilter::All);
    assert_eq!(cfg.display.calendar_start(), MonthCursor::new(2025, 8).unwrap());
    assert_eq!(cfg.display.weekday(), Weekday::Wed);
    assert_eq!(cfg.stats.hours_pool, HoursPool::All);
}

#[test]
fn config_roundtrip() {
    let cfg = Config::default();
    let toml_str = cfg.to_toml().expect("serialize to toml");
    assert!(toml_str.contains("Physique 57"));

    let parsed: Config = toml::from_str(&toml_str).expect("parse toml back");
    assert_eq!(parsed.general.plan_title, cfg.general.plan_title);
    assert_eq!(parsed.display.default_view, cfg.display.default_view);
    assert_eq!(parsed.stats.hours_pool, cfg.stats.hours_pool);
    parsed.validate().expect("config validates");
}

#[test]
fn config_partial_toml() {
    let partial = r#"
[display]
default_view = "analytics"
default_theme = "Sales"

[stats]
hours_pool = "upcoming"
"#;
    let cfg: Config = toml::from_str(partial).expect("parse partial");
    assert_eq!(cfg.display.view(), ViewKind::Analytics);
    assert_eq!(cfg.display.theme_filter(), ThemeFilter::Only(Theme::Sales));
    assert_eq!(cfg.stats.hours_pool, HoursPool::Upcoming);
    // defaults fill in the rest
    assert_eq!(cfg.general.log_level, "warn");
    assert_eq!(cfg.display.calendar_start, "2025-08");
    cfg.validate().expect("config validates");
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[display]\ncalendar_start = \"2025-11\"").unwrap();
    let cfg = Config::load_from(file.path()).expect("load");
    assert_eq!(cfg.display.calendar_start(), MonthCursor::new(2025, 11).unwrap());
}

#[test]
fn load_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from(dir.path().join("absent.toml")).expect_err("should fail");
    assert!(err.to_string().starts_with("io:"));
}

#[test]
fn unknown_hours_pool_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[stats]\nhours_pool = \"someday\"").unwrap();
    let err = Config::load_from(file.path()).expect_err("should fail");
    assert!(err.to_string().starts_with("parse:"));
}

#[test]
fn invalid_view_fails_validation() {
    let mut cfg = Config::default();
    cfg.display.default_view = "kanban".to_string();
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("default_view"));
}

#[test]
fn invalid_theme_fails_validation() {
    let mut cfg = Config::default();
    cfg.display.default_theme = "Leadership".to_string();
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("default_theme"));
}

#[test]
fn invalid_calendar_start_fails_validation() {
    let mut cfg = Config::default();
    cfg.display.calendar_start = "2025-13".to_string();
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("calendar_start"));
}

#[test]
fn invalid_weekday_fails_validation() {
    let mut cfg = Config::default();
    cfg.display.highlight_weekday = "funday".to_string();
    let err = cfg.validate().expect_err("validation should fail");
    assert!(err.to_string().contains("highlight_weekday"));
}
