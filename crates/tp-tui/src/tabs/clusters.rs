use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use tp_core::aggregate::{group_by_theme, sum_hours};

use crate::app::App;
use crate::palette;
use crate::tabs::{heading_item, session_item};

/// View 2: sessions clustered by theme, clusters in first-occurrence order.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let clusters = group_by_theme(app.filtered());
    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_row = None;
    let mut position = 0;

    for (theme, sessions) in clusters.iter() {
        let style = palette::theme_style(*theme);
        let hours = sum_hours(sessions.iter().copied());
        items.push(heading_item(
            format!("{} {}", style.glyph, theme.label()),
            Some(format!("{} sessions, {hours}h", sessions.len())),
        ));
        for session in sessions {
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
            .title(format!(" By Skills ({} clusters) ", clusters.len()))
            .border_style(Style::default().fg(Color::Cyan)),
    );
    let mut state = ListState::default().with_selected(selected_row);
    frame.render_stateful_widget(list, area, &mut state);
}
