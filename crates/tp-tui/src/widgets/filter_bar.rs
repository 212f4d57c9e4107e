use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use tp_core::ThemeFilter;

use crate::app::App;
use crate::palette;

/// One chip per filter choice; the active one is reversed. An unknown
/// filter label gets an extra red chip so the empty views are explained.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(" Theme: ", Style::default().fg(Color::DarkGray))];

    for choice in ThemeFilter::choices() {
        let color = match &choice {
            ThemeFilter::Only(theme) => palette::theme_color(*theme),
            _ => Color::White,
        };
        let mut style = Style::default().fg(color);
        if choice == app.filter {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        spans.push(Span::styled(format!(" {} ", choice.label()), style));
        spans.push(Span::raw(" "));
    }

    if let ThemeFilter::Unknown(label) = &app.filter {
        spans.push(Span::styled(
            format!(" {label}? "),
            Style::default().fg(Color::Red).add_modifier(Modifier::REVERSED),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
