use tp_core::aggregate::filter_by_theme;
use tp_core::ThemeFilter;

use super::{session_row, unknown_filter_note, Context};

/// Completed sessions, then each upcoming month with its focus. Sections the
/// filter leaves empty are skipped.
pub fn render(ctx: &Context, filter: &ThemeFilter) -> String {
    let mut out = String::new();
    if let Some(note) = unknown_filter_note(filter) {
        out.push_str(&format!("{note}\n"));
    }

    let completed = filter_by_theme(ctx.store.completed(), filter);
    let months = ctx.store.month_groups().iter().map(|group| {
        (
            group.name.as_str(),
            Some(group.focus.as_str()),
            filter_by_theme(&group.sessions, filter),
        )
    });

    for (title, focus, sessions) in std::iter::once(("Completed", None, completed)).chain(months) {
        if sessions.is_empty() {
            continue;
        }
        match focus {
            Some(focus) => out.push_str(&format!("== {title} \u{00b7} {focus} ==\n")),
            None => out.push_str(&format!("== {title} ==\n")),
        }
        for session in sessions {
            out.push_str(&session_row(session));
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_core::{Config, SessionStore, Theme};

    #[test]
    fn sections_follow_plan_order() {
        let ctx = Context::new(SessionStore::builtin(), Config::default());
        let out = render(&ctx, &ThemeFilter::All);
        let headings: Vec<&str> = out.lines().filter(|l| l.starts_with("==")).collect();
        assert_eq!(headings[0], "== Completed ==");
        assert_eq!(headings.len(), 1 + ctx.store.month_groups().len());
        assert!(headings[1].contains("Strength & Cycle launch readiness"));
    }

    #[test]
    fn empty_sections_are_skipped() {
        let ctx = Context::new(SessionStore::builtin(), Config::default());
        let out = render(&ctx, &ThemeFilter::Only(Theme::Product));
        let headings: Vec<&str> = out.lines().filter(|l| l.starts_with("==")).collect();
        assert_eq!(headings.len(), 1);
        assert!(headings[0].starts_with("== August"));
        assert!(out.lines().filter(|l| !l.starts_with("==")).all(|l| l.contains("Product")));
    }
}
