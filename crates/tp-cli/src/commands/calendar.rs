use anyhow::Context as _;
use chrono::Weekday;

use tp_core::aggregate::filter_by_theme;
use tp_core::calendar::{MonthCursor, MonthGrid};
use tp_core::ThemeFilter;

use super::{session_row, unknown_filter_note, Context};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Sunday-first grid for `month` (`YYYY-MM`, default from config). Days with
/// sessions carry a `*`; the sessions follow the grid.
pub fn render(ctx: &Context, month: Option<&str>, filter: &ThemeFilter) -> anyhow::Result<String> {
    let cursor = match month {
        Some(m) => m
            .parse::<MonthCursor>()
            .with_context(|| format!("--month {m:?} is not YYYY-MM"))?,
        None => ctx.config.display.calendar_start(),
    };
    let weekday = ctx.config.display.weekday();
    let sessions = filter_by_theme(ctx.store.all_sessions(), filter);
    let grid = MonthGrid::build(cursor, sessions.iter().copied(), weekday);

    let mut out = format!("{} ({} sessions)\n", grid.cursor.label(), grid.session_count());
    if let Some(note) = unknown_filter_note(filter) {
        out.push_str(&format!("{note}\n"));
    }

    let header: Vec<String> = WEEKDAYS
        .iter()
        .map(|day| {
            let name = day.to_string();
            if *day == weekday { name.to_uppercase() } else { name }
        })
        .map(|name| format!("{name:>4}"))
        .collect();
    out.push_str(&header.concat());
    out.push('\n');

    for week in grid.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                Some(day) if !day.sessions.is_empty() => format!("{:>3}*", day.day),
                Some(day) => format!("{:>3} ", day.day),
                None => "    ".to_string(),
            })
            .collect();
        out.push_str(row.concat().trim_end());
        out.push('\n');
    }

    for day in grid.days.iter().filter(|d| !d.sessions.is_empty()) {
        for session in &day.sessions {
            out.push_str(&session_row(session));
            out.push('\n');
        }
    }
    Ok(out)
}
