use tp_core::aggregate::{filter_by_theme, sort_for_list};
use tp_core::ThemeFilter;

use super::{session_row, unknown_filter_note, Context};

/// Sessions in list-view order under `filter`.
pub fn render(ctx: &Context, filter: &ThemeFilter) -> String {
    let sessions = sort_for_list(filter_by_theme(ctx.store.all_sessions(), filter));
    let mut out = format!("{} sessions (theme: {})\n", sessions.len(), filter.label());
    if let Some(note) = unknown_filter_note(filter) {
        out.push_str(&format!("{note}\n"));
    }
    for session in sessions {
        out.push_str(&session_row(session));
        out.push('\n');
    }
    out
}
