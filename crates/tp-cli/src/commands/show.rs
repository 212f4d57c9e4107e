use tp_core::Session;

use super::Context;

/// Every field of one session, in the same order as the detail overlay.
pub fn render(ctx: &Context, id: &str) -> anyhow::Result<String> {
    let Some(session) = ctx.store.find(id) else {
        anyhow::bail!("no session with id {id:?}");
    };
    Ok(describe(session))
}

fn describe(session: &Session) -> String {
    let mut status = Vec::new();
    if session.is_completed {
        status.push("completed");
    }
    if session.is_leadership {
        status.push("leadership");
    }

    let mut lines = vec![
        format!("{} [{}]", session.title, session.id),
        format!("Theme:    {}", session.theme.label()),
        format!("When:     {}", session.scheduled_date.as_deref().unwrap_or(&session.month)),
        format!("Duration: {}", session.duration_label),
        format!("Format:   {}", session.format),
        format!("Trainer:  {}", session.trainer),
    ];
    if !status.is_empty() {
        lines.push(format!("Status:   {}", status.join(", ")));
    }

    lines.push(String::new());
    lines.push("Description & Rationale".into());
    lines.push(format!("  {}", session.description));
    if !session.rationale.is_empty() {
        lines.push(format!("  {}", session.rationale));
    }

    lines.push(String::new());
    lines.push("Key Outcomes".into());
    lines.extend(session.outcomes.iter().map(|o| format!("  - {o}")));

    lines.push(String::new());
    lines.push("Training Methods".into());
    lines.push(format!("  {}", session.methods.join(", ")));

    if !session.sources.is_empty() || !session.links.is_empty() {
        lines.push(String::new());
        lines.push("Research Sources".into());
        lines.extend(session.sources.iter().map(|s| format!("  - {s}")));
        lines.extend(session.links.iter().map(|l| format!("  https://{l}")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_core::{Config, SessionStore};

    fn ctx() -> Context {
        Context::new(SessionStore::builtin(), Config::default())
    }

    #[test]
    fn shows_known_session() {
        let out = render(&ctx(), "aug-comm").unwrap();
        assert!(out.starts_with("Communication Bootcamp [aug-comm]"));
        assert!(out.contains("When:     2025-08-20"));
        assert!(out.contains("Key Outcomes"));
        assert!(out.contains("Training Methods"));
    }

    #[test]
    fn sources_section_only_when_cited() {
        let out = render(&ctx(), "jan-objections").unwrap();
        assert!(out.contains("Status:   completed"));
        assert!(!out.contains("Research Sources"));
    }

    #[test]
    fn unknown_id_is_an_error() {
        let err = render(&ctx(), "nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
