use chrono::NaiveDate;

use tp_core::aggregate::sessions_on_date;

use super::{session_row, Context};

/// Sessions scheduled on `date` (`YYYY-MM-DD`).
pub fn render(ctx: &Context, date: &str) -> anyhow::Result<String> {
    let Ok(parsed) = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") else {
        anyhow::bail!("{date:?} is not a date (expected YYYY-MM-DD)");
    };
    let iso = parsed.format("%Y-%m-%d").to_string();
    let sessions = sessions_on_date(ctx.store.all_sessions(), &iso);

    let mut out = format!("{} \u{00b7} {} sessions\n", parsed.format("%A %d %B %Y"), sessions.len());
    for session in sessions {
        out.push_str(&session_row(session));
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_core::{Config, SessionStore};

    fn ctx() -> Context {
        Context::new(SessionStore::builtin(), Config::default())
    }

    #[test]
    fn finds_scheduled_session() {
        let out = render(&ctx(), "2025-08-20").unwrap();
        assert!(out.starts_with("Wednesday 20 August 2025 \u{00b7} 1 sessions"));
        assert!(out.contains("Communication Bootcamp"));
    }

    #[test]
    fn empty_day() {
        let out = render(&ctx(), "2025-08-21").unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("0 sessions"));
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(render(&ctx(), "20 August").is_err());
        assert!(render(&ctx(), "2025-02-30").is_err());
    }
}
