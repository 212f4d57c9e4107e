use tp_core::aggregate::trainer_workload;

use super::Context;

/// Sessions per trainer across the whole plan, busiest first.
pub fn render(ctx: &Context) -> String {
    let workload = trainer_workload(ctx.store.all_sessions());
    let width = workload.iter().map(|(t, _)| t.chars().count()).max().unwrap_or(0);

    let mut out = format!("{} trainers\n", workload.len());
    for (trainer, count) in &workload {
        out.push_str(&format!("{trainer:<width$}  {count:>3}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_core::{Config, SessionStore};

    #[test]
    fn counts_cover_every_session() {
        let ctx = Context::new(SessionStore::builtin(), Config::default());
        let out = render(&ctx);
        assert_eq!(out.lines().next(), Some(format!("{} trainers", ctx.stats.trainer_count).as_str()));
        let total: usize = out
            .lines()
            .skip(1)
            .filter_map(|l| l.split_whitespace().last()?.parse::<usize>().ok())
            .sum();
        assert_eq!(total, ctx.store.all_sessions().len());
    }

    #[test]
    fn busiest_first() {
        let ctx = Context::new(SessionStore::builtin(), Config::default());
        let counts: Vec<usize> = render(&ctx)
            .lines()
            .skip(1)
            .filter_map(|l| l.split_whitespace().last()?.parse().ok())
            .collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }
}
