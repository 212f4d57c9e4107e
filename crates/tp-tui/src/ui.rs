use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use tp_core::ViewKind;

use crate::app::App;
use crate::tabs;
use crate::widgets::{detail_modal, filter_bar, help_modal, status_bar};

/// Master render function: view tabs, filter bar, headline stats, content,
/// status bar, then any open modal.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // view tabs
            Constraint::Length(1), // theme filter
            Constraint::Length(1), // headline stats
            Constraint::Min(0),    // content
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    render_tab_bar(frame, app, chunks[0]);
    filter_bar::render(frame, app, chunks[1]);
    render_headline(frame, app, chunks[2]);
    render_content(frame, app, chunks[3]);
    status_bar::render(frame, app, chunks[4]);

    if let Some(session) = app.detail_session() {
        detail_modal::render(frame, session);
    }
    if app.show_help {
        help_modal::render(frame);
    }
}

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ViewKind::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            Line::from(vec![
                Span::styled(
                    format!("{}", i + 1),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
                ),
                Span::raw(":"),
                Span::raw(view.label()),
            ])
        })
        .collect();

    let title = format!(
        " {} \u{00b7} {} ",
        app.config.general.organisation, app.config.general.plan_title
    );
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title(title)
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .select(app.view.index())
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .divider(Span::raw(" | "));

    frame.render_widget(tabs, area);
}

fn render_headline(frame: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let hours = stats.headline_hours(app.config.stats.hours_pool);
    let value = |v: String| Span::styled(v, Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    let label = |l: &'static str| Span::styled(l, Style::default().fg(Color::DarkGray));

    let line = Line::from(vec![
        label(" Sessions "),
        value(stats.total_sessions.to_string()),
        label("  Completed "),
        value(stats.completed_sessions.to_string()),
        label("  Upcoming "),
        value(stats.upcoming_sessions.to_string()),
        label("  Training Hours "),
        value(format!("{hours}h")),
        label("  Progress "),
        value(format!("{:.1}%", stats.completion_rate)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.view {
        ViewKind::Timeline => tabs::timeline::render(frame, app, area),
        ViewKind::Clusters => tabs::clusters::render(frame, app, area),
        ViewKind::Calendar => tabs::calendar::render(frame, app, area),
        ViewKind::Analytics => tabs::analytics::render(frame, app, area),
        ViewKind::List => tabs::list::render(frame, app, area),
    }
}
