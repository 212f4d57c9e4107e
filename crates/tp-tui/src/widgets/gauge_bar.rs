use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Renders one labelled bar of a distribution chart.
///
/// Example output: ` Sales        [██████░░░░░░░░░░] 12 (33%)`
///
/// `label_width` pads the label column so stacked bars line up; `percentage`
/// is clamped to `[0, 100]`.
pub fn render_gauge(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    label_width: usize,
    percentage: f64,
    suffix: &str,
    color: Color,
) {
    if area.height == 0 {
        return;
    }
    let percentage = percentage.clamp(0.0, 100.0);
    let label_cols = label_width.max(label.width());
    let label_display = format!(" {label}{}", " ".repeat(label_cols - label.width()));
    let suffix_display = format!(" {suffix}");

    // " label" + " [" + bar + "]" + " suffix"
    let overhead = label_display.width() + 2 + 1 + suffix_display.width();
    let bar_width = (area.width as usize).saturating_sub(overhead);
    if bar_width == 0 {
        return;
    }

    let filled_count = ((bar_width as f64) * percentage / 100.0).round() as usize;
    let empty_count = bar_width.saturating_sub(filled_count);

    let line = Line::from(vec![
        Span::styled(label_display, Style::default().fg(Color::White)),
        Span::raw(" ["),
        Span::styled("\u{2588}".repeat(filled_count), Style::default().fg(color)),
        Span::styled("\u{2591}".repeat(empty_count), Style::default().fg(Color::DarkGray)),
        Span::raw("]"),
        Span::styled(suffix_display, Style::default().fg(Color::White)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
