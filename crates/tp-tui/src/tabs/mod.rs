pub mod analytics;
pub mod calendar;
pub mod clusters;
pub mod list;
pub mod timeline;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use tp_core::Session;

use crate::palette;

/// One selectable session row: theme glyph, icon, title, duration and trainer.
/// Completed sessions are dimmed and ticked.
pub fn session_item(session: &Session, selected: bool) -> ListItem<'static> {
    let theme = palette::theme_style(session.theme);
    let (mark, title_style) = if session.is_completed {
        (palette::DONE_GLYPH, Style::default().fg(Color::DarkGray))
    } else {
        (" ", Style::default().fg(Color::White))
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", theme.glyph), Style::default().fg(theme.color)),
        Span::styled(format!("{mark} "), Style::default().fg(Color::Green)),
        Span::raw(format!("{} ", palette::icon_glyph(&session.icon))),
        Span::styled(session.title.clone(), title_style),
        Span::styled(
            format!("  {} \u{00b7} {}", session.duration_label, session.trainer),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if session.is_leadership {
        spans.push(Span::styled(" [leadership]", Style::default().fg(Color::Magenta)));
    }

    let item = ListItem::new(Line::from(spans));
    if selected {
        item.style(Style::default().add_modifier(Modifier::REVERSED))
    } else {
        item
    }
}

/// A non-selectable section heading row.
pub fn heading_item(title: String, detail: Option<String>) -> ListItem<'static> {
    let mut spans = vec![Span::styled(
        format!(" {title}"),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if let Some(detail) = detail {
        spans.push(Span::styled(format!("  {detail}"), Style::default().fg(Color::DarkGray)));
    }
    ListItem::new(Line::from(spans))
}
