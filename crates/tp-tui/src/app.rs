use chrono::Weekday;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tp_core::aggregate::{filter_by_theme, group_by_theme, sort_for_list};
use tp_core::calendar::{MonthCursor, MonthGrid};
use tp_core::config::Config;
use tp_core::{DashboardStats, Session, SessionStore, ThemeFilter, ViewKind};

// ---------------------------------------------------------------------------
// Timeline sections
// ---------------------------------------------------------------------------

/// A titled run of sessions in the timeline view.
#[derive(Debug, Clone)]
pub struct TimelineSection<'a> {
    pub title: String,
    pub focus: Option<&'a str>,
    pub sessions: Vec<&'a Session>,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub view: ViewKind,
    pub filter: ThemeFilter,
    pub should_quit: bool,
    pub show_help: bool,

    /// Cursor into the current view's session list.
    pub selected_index: usize,
    /// Id of the session shown in the detail modal.
    pub detail: Option<String>,
    /// Month shown by the calendar view.
    pub calendar: MonthCursor,
    pub highlight_weekday: Weekday,

    pub stats: DashboardStats,
    pub config: Config,
    store: SessionStore,
    /// The store filtered by `filter`; rebuilt only when the filter changes.
    filtered: Vec<Session>,
}

impl App {
    pub fn new(store: SessionStore, config: Config) -> Self {
        let filter = config.display.theme_filter();
        let filtered = filter_by_theme(store.all_sessions(), &filter)
            .into_iter()
            .cloned()
            .collect();
        Self {
            view: config.display.view(),
            filter,
            should_quit: false,
            show_help: false,
            selected_index: 0,
            detail: None,
            calendar: config.display.calendar_start(),
            highlight_weekday: config.display.weekday(),
            stats: DashboardStats::compute(&store),
            config,
            store,
            filtered,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// The full pool under the active theme filter.
    pub fn filtered(&self) -> &[Session] {
        &self.filtered
    }

    // -- View and filter ----------------------------------------------------

    pub fn set_view(&mut self, view: ViewKind) {
        if self.view != view {
            tracing::debug!(from = self.view.key(), to = view.key(), "view changed");
        }
        self.view = view;
        self.selected_index = 0;
    }

    pub fn next_view(&mut self) {
        let next = (self.view.index() + 1) % ViewKind::ALL.len();
        self.set_view(ViewKind::ALL[next]);
    }

    pub fn prev_view(&mut self) {
        let len = ViewKind::ALL.len();
        let prev = (self.view.index() + len - 1) % len;
        self.set_view(ViewKind::ALL[prev]);
    }

    pub fn set_filter(&mut self, filter: ThemeFilter) {
        if self.filter == filter {
            return;
        }
        self.filtered = filter_by_theme(self.store.all_sessions(), &filter)
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(theme = %filter, sessions = self.filtered.len(), "theme filter changed");
        self.filter = filter;
        self.selected_index = 0;
    }

    // -- Derived views ------------------------------------------------------

    /// Completed sessions, then one section per month group, each filtered.
    /// Sections left empty by the filter are omitted.
    pub fn timeline_sections(&self) -> Vec<TimelineSection<'_>> {
        let mut sections = Vec::new();
        let completed = filter_by_theme(self.store.completed(), &self.filter);
        if !completed.is_empty() {
            sections.push(TimelineSection {
                title: "Completed".to_string(),
                focus: None,
                sessions: completed,
            });
        }
        for group in self.store.month_groups() {
            let sessions = filter_by_theme(&group.sessions, &self.filter);
            if sessions.is_empty() {
                continue;
            }
            sections.push(TimelineSection {
                title: group.name.clone(),
                focus: Some(group.focus.as_str()),
                sessions,
            });
        }
        sections
    }

    pub fn month_grid(&self) -> MonthGrid<'_> {
        MonthGrid::build(self.calendar, &self.filtered, self.highlight_weekday)
    }

    /// Sessions in the order the current view lists them; selection indexes
    /// into this. Analytics lists none.
    pub fn visible_sessions(&self) -> Vec<&Session> {
        match self.view {
            ViewKind::Timeline => self
                .timeline_sections()
                .into_iter()
                .flat_map(|s| s.sessions)
                .collect(),
            ViewKind::Clusters => group_by_theme(&self.filtered)
                .into_vec()
                .into_iter()
                .flat_map(|(_, sessions)| sessions)
                .collect(),
            ViewKind::Calendar => self
                .month_grid()
                .days
                .into_iter()
                .flat_map(|d| d.sessions)
                .collect(),
            ViewKind::Analytics => Vec::new(),
            ViewKind::List => sort_for_list(&self.filtered),
        }
    }

    pub fn selected_session(&self) -> Option<&Session> {
        self.visible_sessions().get(self.selected_index).copied()
    }

    // -- Selection and modal ------------------------------------------------

    pub fn select(&mut self, index: usize) {
        let len = self.visible_sessions().len();
        self.selected_index = index.min(len.saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        let len = self.visible_sessions().len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Open the detail modal on the selected session. No-op when nothing is selectable.
    pub fn open_detail(&mut self) {
        if let Some(id) = self.selected_session().map(|s| s.id.clone()) {
            tracing::debug!(session = %id, "detail opened");
            self.detail = Some(id);
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn detail_session(&self) -> Option<&Session> {
        self.detail.as_deref().and_then(|id| self.store.find(id))
    }

    // -- Calendar -----------------------------------------------------------

    pub fn month_next(&mut self) {
        self.calendar = self.calendar.next();
        self.selected_index = 0;
    }

    pub fn month_prev(&mut self) {
        self.calendar = self.calendar.prev();
        self.selected_index = 0;
    }

    // -- Keys ---------------------------------------------------------------

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Help modal intercepts Esc and ?
        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        if self.detail.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace) {
                self.close_detail();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,

            // View switching: 1-5
            KeyCode::Char(c @ '1'..='5') => {
                let idx = (c as usize) - ('1' as usize);
                self.set_view(ViewKind::ALL[idx]);
            }
            KeyCode::Tab => self.next_view(),
            KeyCode::BackTab => self.prev_view(),

            // Theme filter
            KeyCode::Char('f') => self.set_filter(self.filter.cycle_next()),
            KeyCode::Char('F') => self.set_filter(self.filter.cycle_prev()),
            KeyCode::Char('a') => self.set_filter(ThemeFilter::All),

            // List navigation
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char('g') | KeyCode::Home => self.selected_index = 0,

            // Calendar months
            KeyCode::Char('h') | KeyCode::Left if self.view == ViewKind::Calendar => self.month_prev(),
            KeyCode::Char('l') | KeyCode::Right if self.view == ViewKind::Calendar => self.month_next(),

            KeyCode::Enter => self.open_detail(),
            KeyCode::Char('?') => self.show_help = true,

            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SessionStore::builtin(), Config::default())
    }
}
