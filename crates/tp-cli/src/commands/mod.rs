pub mod calendar;
pub mod clusters;
pub mod export;
pub mod list;
pub mod on;
pub mod show;
pub mod stats;
pub mod timeline;
pub mod trainers;

use tp_core::{Config, DashboardStats, Session, SessionStore, ThemeFilter};

/// Everything a subcommand reads: the catalog, its headline numbers and the
/// loaded config.
pub struct Context {
    pub store: SessionStore,
    pub stats: DashboardStats,
    pub config: Config,
}

impl Context {
    pub fn new(store: SessionStore, config: Config) -> Self {
        let stats = DashboardStats::compute(&store);
        Self { store, stats, config }
    }

    /// `--theme` when given, otherwise the configured default filter.
    pub fn filter(&self, theme: Option<&str>) -> ThemeFilter {
        match theme {
            Some(label) => ThemeFilter::parse(label),
            None => self.config.display.theme_filter(),
        }
    }

    pub fn heading(&self) -> String {
        format!(
            "{} \u{00b7} {}",
            self.config.general.organisation, self.config.general.plan_title
        )
    }
}

/// One line per session: status mark, date, title, theme, trainer.
pub fn session_row(session: &Session) -> String {
    let mark = if session.is_completed { "\u{2713}" } else { " " };
    let when = session.scheduled_date.as_deref().unwrap_or(&session.month);
    format!(
        "{mark} {when:<10}  {:<44}  {:<16}  {}",
        session.title,
        session.theme.label(),
        session.trainer
    )
}

/// Appends a note for unknown filter labels so empty output is explained.
pub fn unknown_filter_note(filter: &ThemeFilter) -> Option<String> {
    match filter {
        ThemeFilter::Unknown(label) => Some(format!("no theme named {label:?}")),
        _ => None,
    }
}
