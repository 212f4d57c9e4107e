use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use tp_core::aggregate::sum_hours;

use crate::app::App;
use crate::tabs::{heading_item, session_item};

/// View 1: completed sessions, then each month with its focus line.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_row = None;
    let mut position = 0;

    for section in app.timeline_sections() {
        let hours = sum_hours(section.sessions.iter().copied());
        let detail = match section.focus {
            Some(focus) => format!("{focus} \u{00b7} {} sessions, {hours}h", section.sessions.len()),
            None => format!("{} sessions, {hours}h", section.sessions.len()),
        };
        items.push(heading_item(section.title.clone(), Some(detail)));
        for session in &section.sessions {
            if position == app.selected_index {
                selected_row = Some(items.len());
            }
            items.push(session_item(session, position == app.selected_index));
            position += 1;
        }
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Timeline ({position}) "))
            .border_style(Style::default().fg(Color::Cyan)),
    );
    let mut state = ListState::default().with_selected(selected_row);
    frame.render_stateful_widget(list, area, &mut state);
}
