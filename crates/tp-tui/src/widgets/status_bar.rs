use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Render the bottom status bar: key hints left, view and filter right.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hint = |key: &'static str, text: &'static str| {
        [
            Span::styled(key, Style::default().fg(Color::Yellow)),
            Span::raw(text),
        ]
    };
    let mut spans: Vec<Span> = [
        hint("[Enter]", " Details  "),
        hint("[f]", " Filter  "),
        hint("[?]", " Help  "),
        hint("[q]", " Quit"),
    ]
    .into_iter()
    .flatten()
    .collect();

    let right = format!(
        "{} \u{00b7} theme: {} \u{00b7} {} shown ",
        app.view.label(),
        app.filter.label(),
        app.visible_sessions().len()
    );
    let left_len: usize = spans.iter().map(|s| s.content.width()).sum();
    let padding = (area.width as usize)
        .saturating_sub(left_len + right.width())
        .max(1);

    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(right, Style::default().fg(Color::Cyan)));

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(bar, area);
}
