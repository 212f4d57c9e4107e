use tp_core::aggregate::filter_by_theme;
use tp_core::ThemeFilter;

use super::Context;

/// Sessions under `filter` as a pretty-printed JSON array.
pub fn render(ctx: &Context, filter: &ThemeFilter) -> anyhow::Result<String> {
    let sessions = filter_by_theme(ctx.store.all_sessions(), filter);
    tracing::debug!(count = sessions.len(), theme = filter.label(), "exporting sessions");
    Ok(format!("{}\n", serde_json::to_string_pretty(&sessions)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_core::{Config, Session, SessionStore, Theme};

    #[test]
    fn export_parses_back_into_sessions() {
        let ctx = Context::new(SessionStore::builtin(), Config::default());
        let out = render(&ctx, &ThemeFilter::All).unwrap();
        let sessions: Vec<Session> = serde_json::from_str(&out).unwrap();
        assert_eq!(sessions, ctx.store.all_sessions());
    }

    #[test]
    fn export_honours_filter() {
        let ctx = Context::new(SessionStore::builtin(), Config::default());
        let out = render(&ctx, &ThemeFilter::Only(Theme::Marketing)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let items = value.as_array().unwrap();
        assert!(!items.is_empty());
        assert!(items.iter().all(|s| s["theme"] == "Marketing"));
        assert!(items[0].get("scheduledDate").is_some());
    }
}
