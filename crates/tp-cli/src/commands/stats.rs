use tp_core::config::HoursPool;

use super::Context;

/// Headline numbers as aligned text.
pub fn render(ctx: &Context) -> String {
    let stats = &ctx.stats;
    let pool = ctx.config.stats.hours_pool;
    let pool_label = match pool {
        HoursPool::All => "all sessions",
        HoursPool::Upcoming => "upcoming only",
    };
    let heading = ctx.heading();

    let lines = [
        heading.clone(),
        "-".repeat(heading.chars().count()),
        format!("Total sessions:     {}", stats.total_sessions),
        format!("  completed:        {}", stats.completed_sessions),
        format!("  upcoming:         {}", stats.upcoming_sessions),
        format!("Completion rate:    {:.1}%", stats.completion_rate),
        format!("Training hours:     {}h ({pool_label})", stats.headline_hours(pool)),
        format!("Upcoming hours:     {}h", stats.upcoming_hours),
        format!("Leadership:         {} upcoming", stats.leadership_sessions),
        format!("Trainers:           {}", stats.trainer_count),
        format!("Themes:             {}", stats.theme_count),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Headline numbers as a JSON object.
pub fn render_json(ctx: &Context) -> anyhow::Result<String> {
    let value = serde_json::json!({
        "organisation": ctx.config.general.organisation,
        "plan_title": ctx.config.general.plan_title,
        "hours_pool": ctx.config.stats.hours_pool,
        "headline_hours": ctx.stats.headline_hours(ctx.config.stats.hours_pool),
        "stats": ctx.stats,
    });
    Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
}
