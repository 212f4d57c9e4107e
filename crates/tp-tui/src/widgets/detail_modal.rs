use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use tp_core::Session;

use crate::palette;
use crate::widgets::help_modal::centered_rect;

/// Render the session detail overlay.
pub fn render(frame: &mut Frame, session: &Session) {
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let style = palette::theme_style(session.theme);
    let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} {} ", palette::icon_glyph(&session.icon), session.theme.label()),
                Style::default().fg(style.color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(status_label(session), dim),
        ]),
        Line::from(Span::styled(
            format!(" {}", session.title),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        facts_line(session),
        Line::from(""),
        Line::from(Span::styled(" Description & Rationale", heading)),
        Line::from(format!(" {}", session.description)),
    ];
    if !session.rationale.is_empty() {
        lines.push(Line::from(Span::styled(format!(" {}", session.rationale), dim)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Key Outcomes", heading)));
    lines.extend(bullets(&session.outcomes));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Training Methods", heading)));
    lines.push(Line::from(format!(" {}", session.methods.join(" \u{00b7} "))));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Research Sources", heading)));
    if session.sources.is_empty() && session.links.is_empty() {
        lines.push(Line::from(Span::styled(" No external sources cited", dim)));
    } else {
        lines.extend(bullets(&session.sources));
        lines.extend(session.links.iter().map(|link| {
            Line::from(Span::styled(
                format!("   https://{link}"),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
            ))
        }));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", session.id))
                .title_bottom(" Esc to close ")
                .border_style(Style::default().fg(style.color)),
        );
    frame.render_widget(paragraph, area);
}

fn status_label(session: &Session) -> String {
    let mut parts = Vec::new();
    if session.is_completed {
        parts.push("completed");
    }
    if session.is_leadership {
        parts.push("leadership");
    }
    parts.join(", ")
}

fn facts_line(session: &Session) -> Line<'static> {
    let date = session
        .scheduled_on()
        .map(|d| d.format("%a %d %b %Y").to_string())
        .unwrap_or_else(|| session.month.clone());
    let fact = |label: &str, value: String| {
        [
            Span::styled(format!(" {label}: "), Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ]
    };
    Line::from(
        [
            fact("Duration", session.duration_label.clone()),
            fact("Format", session.format.clone()),
            fact("Trainer", session.trainer.clone()),
            fact("When", date),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>(),
    )
}

fn bullets(items: &[String]) -> impl Iterator<Item = Line<'static>> + '_ {
    items.iter().map(|item| Line::from(format!("   \u{2022} {item}")))
}
