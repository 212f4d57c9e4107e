use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::normalize_duration_to_hours;

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Topical classification of a session, used for grouping and colouring.
///
/// `Other` is reserved for labels that name none of the known themes; it is
/// never offered as a filter choice but keeps grouping lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    Communication,
    Sales,
    Culture,
    Retention,
    Product,
    Operations,
    Marketing,
    #[serde(other)]
    Other,
}

impl Theme {
    /// The seven selectable themes, in filter-bar order.
    pub const ALL: [Theme; 7] = [
        Theme::Communication,
        Theme::Sales,
        Theme::Culture,
        Theme::Retention,
        Theme::Product,
        Theme::Operations,
        Theme::Marketing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Communication => "Communication",
            Theme::Sales => "Sales",
            Theme::Culture => "Culture",
            Theme::Retention => "Retention",
            Theme::Product => "Product",
            Theme::Operations => "Operations",
            Theme::Marketing => "Marketing",
            Theme::Other => "Other",
        }
    }

    /// Strict lookup: `None` when the label names no theme (including `Other`).
    pub fn from_label(label: &str) -> Option<Theme> {
        let label = label.trim();
        Theme::ALL
            .into_iter()
            .chain(std::iter::once(Theme::Other))
            .find(|t| t.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lenient parse: unknown labels become [`Theme::Other`].
impl FromStr for Theme {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Theme::from_label(s).unwrap_or(Theme::Other))
    }
}

// ---------------------------------------------------------------------------
// ThemeFilter
// ---------------------------------------------------------------------------

/// The theme selection driving every filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThemeFilter {
    /// The `"All"` sentinel: no filtering.
    #[default]
    All,
    Only(Theme),
    /// A label naming no theme. Matches nothing.
    Unknown(String),
}

impl ThemeFilter {
    pub const SENTINEL: &'static str = "All";

    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case(Self::SENTINEL) {
            return ThemeFilter::All;
        }
        match Theme::from_label(label) {
            Some(theme) => ThemeFilter::Only(theme),
            None => ThemeFilter::Unknown(label.to_string()),
        }
    }

    pub fn matches(&self, theme: Theme) -> bool {
        match self {
            ThemeFilter::All => true,
            ThemeFilter::Only(t) => *t == theme,
            ThemeFilter::Unknown(_) => false,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ThemeFilter::All => Self::SENTINEL,
            ThemeFilter::Only(t) => t.label(),
            ThemeFilter::Unknown(s) => s,
        }
    }

    /// Filter-bar choices: `All` followed by every selectable theme.
    pub fn choices() -> Vec<ThemeFilter> {
        std::iter::once(ThemeFilter::All)
            .chain(Theme::ALL.into_iter().map(ThemeFilter::Only))
            .collect()
    }

    /// Next choice in filter-bar order, wrapping. Unknown labels restart at `All`.
    pub fn cycle_next(&self) -> ThemeFilter {
        let choices = Self::choices();
        match choices.iter().position(|c| c == self) {
            Some(i) => choices[(i + 1) % choices.len()].clone(),
            None => ThemeFilter::All,
        }
    }

    pub fn cycle_prev(&self) -> ThemeFilter {
        let choices = Self::choices();
        match choices.iter().position(|c| c == self) {
            Some(0) => choices[choices.len() - 1].clone(),
            Some(i) => choices[i - 1].clone(),
            None => ThemeFilter::All,
        }
    }
}

impl fmt::Display for ThemeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One training event. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    /// Free text such as `"2h"` or `"1–2h"`; see [`Session::hours`].
    #[serde(rename = "duration")]
    pub duration_label: String,
    pub format: String,
    pub trainer: String,
    /// Display label, e.g. `"August"`.
    pub month: String,
    /// ISO `YYYY-MM-DD`, only for calendar-placed sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    pub theme: Theme,
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub is_leadership: bool,
    #[serde(default)]
    pub is_completed: bool,
    /// Key into the presentation layer's icon registry.
    #[serde(default)]
    pub icon: String,
}

impl Session {
    pub fn new(id: impl Into<String>, title: impl Into<String>, theme: Theme) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_label: "2h".to_string(),
            format: "Workshop".to_string(),
            trainer: String::new(),
            month: String::new(),
            scheduled_date: None,
            theme,
            outcomes: Vec::new(),
            description: String::new(),
            rationale: String::new(),
            methods: Vec::new(),
            sources: Vec::new(),
            links: Vec::new(),
            is_leadership: false,
            is_completed: false,
            icon: String::new(),
        }
    }

    pub fn with_duration(mut self, label: impl Into<String>) -> Self {
        self.duration_label = label.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_trainer(mut self, trainer: impl Into<String>) -> Self {
        self.trainer = trainer.into();
        self
    }

    pub fn in_month(mut self, month: impl Into<String>) -> Self {
        self.month = month.into();
        self
    }

    pub fn scheduled(mut self, iso_date: impl Into<String>) -> Self {
        self.scheduled_date = Some(iso_date.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn with_rationale(mut self, text: impl Into<String>) -> Self {
        self.rationale = text.into();
        self
    }

    pub fn with_outcomes(mut self, items: &[&str]) -> Self {
        self.outcomes = items.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_methods(mut self, items: &[&str]) -> Self {
        self.methods = items.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_sources(mut self, items: &[&str]) -> Self {
        self.sources = items.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_links(mut self, items: &[&str]) -> Self {
        self.links = items.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn leadership(mut self) -> Self {
        self.is_leadership = true;
        self
    }

    pub fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }

    /// Normalised duration in hours.
    pub fn hours(&self) -> f64 {
        normalize_duration_to_hours(&self.duration_label)
    }

    /// The scheduled date, when present and well-formed.
    pub fn scheduled_on(&self) -> Option<NaiveDate> {
        self.scheduled_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }
}

// ---------------------------------------------------------------------------
// MonthGroup
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthGroup {
    pub name: String,
    pub focus: String,
    pub sessions: Vec<Session>,
}

impl MonthGroup {
    pub fn new(name: impl Into<String>, focus: impl Into<String>, sessions: Vec<Session>) -> Self {
        Self {
            name: name.into(),
            focus: focus.into(),
            sessions,
        }
    }
}

// ---------------------------------------------------------------------------
// ViewKind
// ---------------------------------------------------------------------------

/// The interchangeable dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    #[default]
    Timeline,
    Clusters,
    Calendar,
    Analytics,
    List,
}

impl ViewKind {
    pub const ALL: [ViewKind; 5] = [
        ViewKind::Timeline,
        ViewKind::Clusters,
        ViewKind::Calendar,
        ViewKind::Analytics,
        ViewKind::List,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ViewKind::Timeline => "Timeline",
            ViewKind::Clusters => "By Skills",
            ViewKind::Calendar => "Calendar",
            ViewKind::Analytics => "Analytics",
            ViewKind::List => "List View",
        }
    }

    /// Machine key used in config files and commands.
    pub fn key(&self) -> &'static str {
        match self {
            ViewKind::Timeline => "timeline",
            ViewKind::Clusters => "clusters",
            ViewKind::Calendar => "calendar",
            ViewKind::Analytics => "analytics",
            ViewKind::List => "list",
        }
    }

    pub fn index(&self) -> usize {
        ViewKind::ALL.iter().position(|v| v == self).unwrap_or(0)
    }
}

impl FromStr for ViewKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ViewKind::ALL
            .into_iter()
            .find(|v| v.key().eq_ignore_ascii_case(s) || v.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownView(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown view: {0}")]
    UnknownView(String),
    #[error("invalid month `{0}`, expected YYYY-MM")]
    InvalidMonth(String),
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parse_is_lenient() {
        assert_eq!("sales".parse::<Theme>().unwrap(), Theme::Sales);
        assert_eq!("Leadership".parse::<Theme>().unwrap(), Theme::Other);
        assert_eq!(Theme::from_label("Leadership"), None);
    }

    #[test]
    fn theme_filter_cycles_through_all_choices() {
        let mut filter = ThemeFilter::All;
        for _ in 0..ThemeFilter::choices().len() {
            filter = filter.cycle_next();
        }
        assert_eq!(filter, ThemeFilter::All);
        assert_eq!(ThemeFilter::All.cycle_prev(), ThemeFilter::Only(Theme::Marketing));
        assert_eq!(ThemeFilter::parse("Leadership").cycle_next(), ThemeFilter::All);
    }

    #[test]
    fn view_kind_parses_keys_and_labels() {
        assert_eq!("clusters".parse::<ViewKind>().unwrap(), ViewKind::Clusters);
        assert_eq!("By Skills".parse::<ViewKind>().unwrap(), ViewKind::Clusters);
        assert!("kanban".parse::<ViewKind>().is_err());
    }

    #[test]
    fn scheduled_on_rejects_malformed_dates() {
        let s = Session::new("x", "X", Theme::Sales).scheduled("2025-13-40");
        assert!(s.scheduled_on().is_none());
        let s = Session::new("y", "Y", Theme::Sales).scheduled("2025-08-06");
        assert_eq!(s.scheduled_on(), NaiveDate::from_ymd_opt(2025, 8, 6));
    }
}
