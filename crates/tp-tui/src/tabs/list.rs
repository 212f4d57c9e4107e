use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::app::App;
use crate::palette;

/// View 5: every filtered session in month/date order, one table row each.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let sessions = app.visible_sessions();

    let header = Row::new(["", "Date", "Title", "Theme", "Duration", "Format", "Trainer"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = sessions
        .iter()
        .map(|s| {
            let theme = palette::theme_style(s.theme);
            let when = s.scheduled_date.clone().unwrap_or_else(|| s.month.clone());
            let mark = if s.is_completed { palette::DONE_GLYPH } else { " " };
            let row = Row::new(vec![
                Cell::from(Span::styled(mark, Style::default().fg(Color::Green))),
                Cell::from(when),
                Cell::from(s.title.clone()),
                Cell::from(Span::styled(
                    format!("{} {}", theme.glyph, s.theme.label()),
                    Style::default().fg(theme.color),
                )),
                Cell::from(s.duration_label.clone()),
                Cell::from(s.format.clone()),
                Cell::from(s.trainer.clone()),
            ]);
            if s.is_completed {
                row.style(Style::default().fg(Color::DarkGray))
            } else {
                row
            }
        })
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Length(11),
        Constraint::Min(30),
        Constraint::Length(16),
        Constraint::Length(9),
        Constraint::Length(18),
        Constraint::Length(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" List View ({}) ", sessions.len()))
                .border_style(Style::default().fg(Color::Cyan)),
        );

    let selected = (!sessions.is_empty()).then_some(app.selected_index);
    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);
}
