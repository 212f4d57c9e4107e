use chrono::Weekday;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use tp_core::calendar::DayCell;

use crate::app::App;
use crate::palette;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Session lines shown per day before collapsing into "+N more".
const LINES_PER_DAY: usize = 2;

/// View 3: Sunday-first month grid. The training weekday is highlighted and
/// completed sessions are greyed.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let grid = app.month_grid();
    let selected_id = app.selected_session().map(|s| s.id.as_str());
    let column_width = (chunks[0].width.saturating_sub(2) / 7).saturating_sub(1) as usize;

    let header = Row::new(WEEKDAYS.map(|day| {
        let mut style = Style::default().fg(Color::Yellow);
        if day == app.highlight_weekday {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        Cell::from(Span::styled(day.to_string(), style))
    }));

    let rows: Vec<Row> = grid
        .weeks()
        .into_iter()
        .map(|week| {
            let cells = week.map(|cell| match cell {
                Some(day) => day_cell(day, selected_id, column_width),
                None => Cell::from(""),
            });
            Row::new(cells).height(1 + LINES_PER_DAY as u16)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Ratio(1, 7); 7])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} \u{00b7} {} sessions ", grid.cursor.label(), grid.session_count()))
                .title_bottom(" h/l: month ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(table, chunks[0]);

    render_legend(frame, app, chunks[1]);
}

fn day_cell<'a>(day: &DayCell<'_>, selected_id: Option<&str>, width: usize) -> Cell<'a> {
    let mut number_style = Style::default().fg(Color::White);
    if day.highlighted {
        number_style = number_style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }
    let mut lines = vec![Line::from(Span::styled(format!("{:>2}", day.day), number_style))];

    let overflow = day.sessions.len().saturating_sub(LINES_PER_DAY);
    let shown = if overflow > 0 { LINES_PER_DAY - 1 } else { LINES_PER_DAY };
    for session in day.sessions.iter().take(shown) {
        let theme = palette::theme_style(session.theme);
        let mut style = if session.is_completed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(theme.color)
        };
        if selected_id == Some(session.id.as_str()) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let label = truncate(&format!("{} {}", theme.glyph, session.title), width);
        lines.push(Line::from(Span::styled(label, style)));
    }
    if overflow > 0 {
        lines.push(Line::from(Span::styled(
            format!("+{} more", overflow + 1),
            Style::default().fg(Color::DarkGray),
        )));
    }

    Cell::from(Text::from(lines))
}

/// Cut `text` to `width` columns, ending with an ellipsis when shortened.
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('\u{2026}');
    out
}

fn render_legend(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} training day  ", app.highlight_weekday),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::styled(
        format!("{} completed  ", palette::DONE_GLYPH),
        Style::default().fg(Color::DarkGray),
    ));
    for theme in tp_core::Theme::ALL {
        let style = palette::theme_style(theme);
        spans.push(Span::styled(
            format!("{} {}  ", style.glyph, theme.label()),
            Style::default().fg(style.color),
        ));
    }
    let legend = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(legend, area);
}
