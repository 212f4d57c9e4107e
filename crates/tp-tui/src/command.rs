//! Scriptable command surface for the training plan TUI.
//!
//! Two inputs feed the same [`AppCommand`] enum:
//! - **Command mode**: `:` prefixed text commands, e.g. `:view calendar`.
//! - **JSON pipe**: `{"cmd":"theme","args":["Sales"]}` lines on stdin.
//!
//! Query commands return the state as a JSON string so a driver can inspect
//! the dashboard without rendering it.

use serde_json::{json, Value};

use tp_core::aggregate::{group_by_theme, theme_distribution, trainer_workload};
use tp_core::{Session, ThemeFilter, ViewKind};

use crate::app::App;

// ---------------------------------------------------------------------------
// AppCommand enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Navigation
    View(ViewKind),
    NextView,
    PrevView,
    Select(usize),
    Up,
    Down,

    // Filtering
    Theme(ThemeFilter),
    NextTheme,
    PrevTheme,

    // Detail modal
    Open,
    Close,

    // Calendar
    MonthNext,
    MonthPrev,

    // Queries
    QueryState,
    QueryView,
    QuerySelected,

    // System
    Quit,
    Help,
}

/// A view named by key (`calendar`), label (`By Skills`) or 1-based position.
fn parse_view_arg(arg: &str) -> Option<ViewKind> {
    if let Ok(n) = arg.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| ViewKind::ALL.get(i).copied());
    }
    arg.parse().ok()
}

fn parse_theme_arg(arg: &str) -> Option<ThemeFilter> {
    let arg = arg.trim();
    if arg.is_empty() {
        return None;
    }
    Some(ThemeFilter::parse(arg))
}

// ---------------------------------------------------------------------------
// Text command parser (`:` prefixed)
// ---------------------------------------------------------------------------

/// Parse a `:` prefixed command string.
///
/// Examples: `:view 3`, `:theme Sales`, `:month next`, `:query state`.
pub fn parse_command(input: &str) -> Option<AppCommand> {
    let input = input.trim().strip_prefix(':')?;
    let mut parts = input.splitn(2, ' ');
    let verb = parts.next()?.trim();
    let arg = parts.next().map(str::trim);

    match verb {
        "view" | "v" => parse_view_arg(arg?).map(AppCommand::View),
        "next" | "next_view" => Some(AppCommand::NextView),
        "prev" | "prev_view" => Some(AppCommand::PrevView),
        "select" | "sel" => Some(AppCommand::Select(arg?.parse().ok()?)),
        "up" | "k" => Some(AppCommand::Up),
        "down" | "j" => Some(AppCommand::Down),
        "theme" | "filter" => match arg? {
            "next" => Some(AppCommand::NextTheme),
            "prev" => Some(AppCommand::PrevTheme),
            other => parse_theme_arg(other).map(AppCommand::Theme),
        },
        "open" => Some(AppCommand::Open),
        "close" => Some(AppCommand::Close),
        "month" => match arg? {
            "next" => Some(AppCommand::MonthNext),
            "prev" => Some(AppCommand::MonthPrev),
            _ => None,
        },
        "month_next" => Some(AppCommand::MonthNext),
        "month_prev" => Some(AppCommand::MonthPrev),
        "query" => match arg? {
            "state" => Some(AppCommand::QueryState),
            "view" => Some(AppCommand::QueryView),
            "selected" => Some(AppCommand::QuerySelected),
            _ => None,
        },
        "quit" | "q" => Some(AppCommand::Quit),
        "help" | "?" => Some(AppCommand::Help),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// JSON command parser
// ---------------------------------------------------------------------------

/// Parse a JSON command line: `{"cmd":"view","args":["list"]}` or `{"cmd":"query_state"}`.
pub fn parse_json_command(line: &str) -> Option<AppCommand> {
    let v: Value = serde_json::from_str(line).ok()?;
    let cmd = v.get("cmd")?.as_str()?;
    let args = v.get("args").and_then(Value::as_array);

    let arg = |idx: usize| args.and_then(|a| a.get(idx));
    let arg_usize = |idx: usize| arg(idx)?.as_u64().map(|n| n as usize);
    let arg_str = |idx: usize| arg(idx)?.as_str();

    match cmd {
        "view" => match arg_usize(0) {
            Some(n) => parse_view_arg(&n.to_string()).map(AppCommand::View),
            None => parse_view_arg(arg_str(0)?).map(AppCommand::View),
        },
        "next_view" => Some(AppCommand::NextView),
        "prev_view" => Some(AppCommand::PrevView),
        "select" => Some(AppCommand::Select(arg_usize(0)?)),
        "up" => Some(AppCommand::Up),
        "down" => Some(AppCommand::Down),
        "theme" => parse_theme_arg(arg_str(0)?).map(AppCommand::Theme),
        "next_theme" => Some(AppCommand::NextTheme),
        "prev_theme" => Some(AppCommand::PrevTheme),
        "open" => Some(AppCommand::Open),
        "close" => Some(AppCommand::Close),
        "month_next" => Some(AppCommand::MonthNext),
        "month_prev" => Some(AppCommand::MonthPrev),
        "query_state" => Some(AppCommand::QueryState),
        "query_view" => Some(AppCommand::QueryView),
        "query_selected" => Some(AppCommand::QuerySelected),
        "quit" => Some(AppCommand::Quit),
        "help" => Some(AppCommand::Help),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Command execution
// ---------------------------------------------------------------------------

/// Execute a command against the application state.
///
/// Returns `Some(json_string)` for query commands, `None` for everything else.
pub fn execute_command(app: &mut App, cmd: AppCommand) -> Option<String> {
    match cmd {
        AppCommand::View(view) => app.set_view(view),
        AppCommand::NextView => app.next_view(),
        AppCommand::PrevView => app.prev_view(),
        AppCommand::Select(idx) => app.select(idx),
        AppCommand::Up => app.select_prev(),
        AppCommand::Down => app.select_next(),

        AppCommand::Theme(filter) => app.set_filter(filter),
        AppCommand::NextTheme => app.set_filter(app.filter.cycle_next()),
        AppCommand::PrevTheme => app.set_filter(app.filter.cycle_prev()),

        AppCommand::Open => app.open_detail(),
        AppCommand::Close => app.close_detail(),

        AppCommand::MonthNext => app.month_next(),
        AppCommand::MonthPrev => app.month_prev(),

        AppCommand::QueryState => return serde_json::to_string(&state_json(app)).ok(),
        AppCommand::QueryView => return serde_json::to_string(&view_json(app)).ok(),
        AppCommand::QuerySelected => {
            let selected = app
                .selected_session()
                .map(session_summary)
                .unwrap_or(Value::Null);
            return serde_json::to_string(&selected).ok();
        }

        AppCommand::Quit => app.should_quit = true,
        AppCommand::Help => app.show_help = true,
    }
    None
}

// ---------------------------------------------------------------------------
// Serialization helpers
// ---------------------------------------------------------------------------

fn state_json(app: &App) -> Value {
    json!({
        "view": app.view.key(),
        "view_label": app.view.label(),
        "view_index": app.view.index(),
        "theme": app.filter.label(),
        "selected_index": app.selected_index,
        "detail": app.detail,
        "calendar_month": app.calendar.to_string(),
        "counts": {
            "all": app.store().all_sessions().len(),
            "completed": app.store().completed().len(),
            "upcoming": app.store().upcoming().len(),
            "filtered": app.filtered().len(),
            "visible": app.visible_sessions().len(),
        }
    })
}

fn session_summary(s: &Session) -> Value {
    json!({
        "id": s.id,
        "title": s.title,
        "theme": s.theme.label(),
        "month": s.month,
        "date": s.scheduled_date,
        "duration": s.duration_label,
        "hours": s.hours(),
        "trainer": s.trainer,
        "completed": s.is_completed,
        "leadership": s.is_leadership,
    })
}

fn ids(sessions: &[&Session]) -> Vec<String> {
    sessions.iter().map(|s| s.id.clone()).collect()
}

fn view_json(app: &App) -> Value {
    match app.view {
        ViewKind::Timeline => json!(app
            .timeline_sections()
            .iter()
            .map(|section| json!({
                "title": section.title,
                "focus": section.focus,
                "sessions": ids(&section.sessions),
            }))
            .collect::<Vec<_>>()),
        ViewKind::Clusters => json!(group_by_theme(app.filtered())
            .iter()
            .map(|(theme, sessions)| json!({
                "theme": theme.label(),
                "sessions": ids(sessions),
            }))
            .collect::<Vec<_>>()),
        ViewKind::Calendar => {
            let grid = app.month_grid();
            let days: Vec<Value> = grid
                .days
                .iter()
                .filter(|d| !d.sessions.is_empty())
                .map(|d| json!({ "date": d.iso_date, "sessions": ids(&d.sessions) }))
                .collect();
            json!({
                "month": grid.cursor.to_string(),
                "label": grid.cursor.label(),
                "leading_blanks": grid.leading_blanks,
                "days": days,
            })
        }
        ViewKind::Analytics => {
            let all = app.store().all_sessions();
            json!({
                "stats": app.stats,
                "themes": theme_distribution(all),
                "trainers": trainer_workload(all)
                    .into_iter()
                    .map(|(trainer, count)| json!({ "trainer": trainer, "count": count }))
                    .collect::<Vec<_>>(),
            })
        }
        ViewKind::List => json!(app
            .visible_sessions()
            .into_iter()
            .map(session_summary)
            .collect::<Vec<_>>()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
