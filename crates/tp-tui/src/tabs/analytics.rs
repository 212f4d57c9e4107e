use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use tp_core::aggregate::{theme_distribution, trainer_workload};

use crate::app::App;
use crate::palette;
use crate::widgets::gauge_bar;

/// View 4: KPI cards, theme distribution and trainer workload over the whole
/// plan. The theme filter does not apply here.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // KPI cards
            Constraint::Min(0),    // bottom panels
        ])
        .split(area);

    render_kpi_cards(frame, app, chunks[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_distribution(frame, app, bottom[0]);
    render_workload(frame, app, bottom[1]);
}

fn render_kpi_cards(frame: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let hours = stats.headline_hours(app.config.stats.hours_pool);
    let cards: [(&str, String, Color); 6] = [
        ("Total Sessions", stats.total_sessions.to_string(), Color::Cyan),
        ("Completed", stats.completed_sessions.to_string(), Color::Green),
        ("Progress", format!("{}%", stats.completion_rate.round()), Color::Blue),
        ("Training Hours", format!("{hours}h"), Color::Yellow),
        ("Trainers", stats.trainer_count.to_string(), Color::Magenta),
        ("Leadership", stats.leadership_sessions.to_string(), Color::LightRed),
    ];

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, cards.len() as u32); 6])
        .split(area);

    for ((title, value, color), col) in cards.iter().zip(cols.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .border_style(Style::default().fg(*color));
        let text = Paragraph::new(Line::from(Span::styled(
            value.clone(),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        )))
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(text, *col);
    }
}

fn render_distribution(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Training Distribution by Theme ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let shares = theme_distribution(app.store().all_sessions());
    let label_width = shares.iter().map(|s| s.theme.label().len()).max().unwrap_or(0);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(shares.iter().map(|_| Constraint::Length(1)).chain([Constraint::Min(0)]))
        .split(inner);

    for (share, row) in shares.iter().zip(rows.iter()) {
        gauge_bar::render_gauge(
            frame,
            *row,
            share.theme.label(),
            label_width,
            share.percentage,
            &format!("{:>2} ({:>2}%)", share.count, share.percentage.round()),
            palette::theme_color(share.theme),
        );
    }
}

fn render_workload(frame: &mut Frame, app: &App, area: Rect) {
    let workload = trainer_workload(app.store().all_sessions());
    let items: Vec<ListItem> = workload
        .iter()
        .map(|(trainer, count)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {count:>2} "), Style::default().fg(Color::Yellow)),
                Span::raw(trainer.clone()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Trainer Workload ({}) ", workload.len())),
    );
    frame.render_widget(list, area);
}
