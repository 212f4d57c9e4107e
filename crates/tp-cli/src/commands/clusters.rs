use tp_core::aggregate::{filter_by_theme, group_by_theme};
use tp_core::ThemeFilter;

use super::{session_row, unknown_filter_note, Context};

/// One block per theme, in first-occurrence order.
pub fn render(ctx: &Context, filter: &ThemeFilter) -> String {
    let filtered = filter_by_theme(ctx.store.all_sessions(), filter);
    let clusters = group_by_theme(filtered.iter().copied());

    let mut out = String::new();
    if let Some(note) = unknown_filter_note(filter) {
        out.push_str(&format!("{note}\n"));
    }
    for (theme, sessions) in clusters.iter() {
        out.push_str(&format!("{} ({})\n", theme.label(), sessions.len()));
        for session in sessions {
            out.push_str("  ");
            out.push_str(&session_row(session));
            out.push('\n');
        }
    }
    out
}
