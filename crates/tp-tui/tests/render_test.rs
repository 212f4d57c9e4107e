//! Render tests for every view and overlay.
//!
//! Each test draws the full UI into a 120x40 buffer and checks that the
//! expected text made it to the screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

#[path = "../src/app.rs"]
mod app;
#[path = "../src/command.rs"]
mod command;
#[path = "../src/palette.rs"]
mod palette;
#[path = "../src/tabs/mod.rs"]
mod tabs;
#[path = "../src/ui.rs"]
mod ui;
#[path = "../src/widgets/mod.rs"]
mod widgets;

use tp_core::{Theme, ThemeFilter, ViewKind};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn render_to_string(app: &app::App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    buffer_to_string(terminal.backend().buffer())
}

/// Rows of the buffer joined by newlines.
fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut lines = Vec::new();
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            line.push_str(buf[(x, y)].symbol());
        }
        lines.push(line);
    }
    lines.join("\n")
}

fn render_view(view: ViewKind) -> String {
    let mut app = app::App::default();
    app.set_view(view);
    render_to_string(&app)
}

fn assert_contains(output: &str, needle: &str) {
    assert!(
        output.contains(needle),
        "expected to find {needle:?} in rendered output:\n{output}"
    );
}

fn assert_not_contains(output: &str, needle: &str) {
    assert!(
        !output.contains(needle),
        "did not expect {needle:?} in rendered output:\n{output}"
    );
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

#[test]
fn header_lists_every_view() {
    let out = render_view(ViewKind::Timeline);
    for view in ViewKind::ALL {
        assert_contains(&out, view.label());
    }
    assert_contains(&out, "Physique 57");
}

#[test]
fn filter_bar_and_headline_are_always_shown() {
    for view in ViewKind::ALL {
        let out = render_view(view);
        assert_contains(&out, "Theme:");
        assert_contains(&out, "Marketing");
        assert_contains(&out, "Sessions 36");
        assert_contains(&out, "Training Hours 63h");
        assert_contains(&out, "Progress 52.8%");
    }
}

#[test]
fn status_bar_shows_active_filter() {
    let mut app = app::App::default();
    app.set_filter(ThemeFilter::Only(Theme::Sales));
    let out = render_to_string(&app);
    assert_contains(&out, "theme: Sales");
    assert_contains(&out, "[q]");
}

#[test]
fn upcoming_hours_pool_changes_headline() {
    let mut config = tp_core::Config::default();
    config.stats.hours_pool = tp_core::config::HoursPool::Upcoming;
    let app = app::App::new(tp_core::SessionStore::builtin(), config);
    let out = render_to_string(&app);
    assert_contains(&out, "Training Hours 32h");
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[test]
fn timeline_shows_completed_then_months() {
    let out = render_view(ViewKind::Timeline);
    assert_contains(&out, "Timeline (36)");
    assert_contains(&out, "Completed");
    assert_contains(&out, "How to handle Sales Objections");
}

#[test]
fn timeline_respects_filter() {
    let mut app = app::App::default();
    app.set_filter(ThemeFilter::Only(Theme::Marketing));
    let out = render_to_string(&app);
    assert_contains(&out, "Client Personas - 1");
    assert_contains(&out, "November");
    assert_not_contains(&out, "How to handle Sales Objections");
}

#[test]
fn clusters_view_groups_by_theme() {
    let out = render_view(ViewKind::Clusters);
    assert_contains(&out, "By Skills (7 clusters)");
    assert_contains(&out, "Sales");
    assert_contains(&out, "sessions,");
}

#[test]
fn calendar_view_shows_month_grid() {
    let out = render_view(ViewKind::Calendar);
    assert_contains(&out, "August 2025");
    assert_contains(&out, "4 sessions");
    for day in ["Sun", "Mon", "Wed", "Sat"] {
        assert_contains(&out, day);
    }
    assert_contains(&out, "31");
    assert_contains(&out, "training day");
}

#[test]
fn calendar_month_navigation_rerenders() {
    let mut app = app::App::default();
    app.on_key(key(KeyCode::Char('3')));
    app.on_key(key(KeyCode::Char('l')));
    let out = render_to_string(&app);
    assert_contains(&out, "September 2025");
}

#[test]
fn analytics_view_shows_kpis_and_charts() {
    let out = render_view(ViewKind::Analytics);
    assert_contains(&out, "Total Sessions");
    assert_contains(&out, "36");
    assert_contains(&out, "53%");
    assert_contains(&out, "Training Distribution by Theme");
    assert_contains(&out, "Trainer Workload");
    assert_contains(&out, "Sales Lead");
}

#[test]
fn list_view_shows_table() {
    let out = render_view(ViewKind::List);
    assert_contains(&out, "List View (36)");
    assert_contains(&out, "Date");
    assert_contains(&out, "Trainer");
    assert_contains(&out, "2025-01-08");
}

#[test]
fn empty_filter_renders_without_panicking() {
    let mut app = app::App::default();
    app.set_filter(ThemeFilter::parse("Leadership"));
    for view in ViewKind::ALL {
        app.set_view(view);
        let out = render_to_string(&app);
        assert_contains(&out, "Leadership?");
    }
}

// ---------------------------------------------------------------------------
// Overlays
// ---------------------------------------------------------------------------

#[test]
fn help_modal_renders_over_view() {
    let mut app = app::App::default();
    app.on_key(key(KeyCode::Char('?')));
    let out = render_to_string(&app);
    assert_contains(&out, "Keybindings");
    assert_contains(&out, "Open session details");
}

#[test]
fn detail_modal_shows_session() {
    let mut app = app::App::default();
    app.on_key(key(KeyCode::Enter));
    let out = render_to_string(&app);
    assert_contains(&out, "jan-objections");
    assert_contains(&out, "Description & Rationale");
    assert_contains(&out, "Key Outcomes");
    assert_contains(&out, "Training Methods");
    assert_contains(&out, "No external sources cited");
    assert_contains(&out, "Esc to close");
}

#[test]
fn closing_detail_removes_overlay() {
    let mut app = app::App::default();
    app.on_key(key(KeyCode::Enter));
    app.on_key(key(KeyCode::Esc));
    let out = render_to_string(&app);
    assert_not_contains(&out, "Key Outcomes");
}

#[test]
fn small_terminal_does_not_panic() {
    let mut app = app::App::default();
    for view in ViewKind::ALL {
        app.set_view(view);
        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal.draw(|frame| ui::render(frame, &app)).unwrap();
    }
}
