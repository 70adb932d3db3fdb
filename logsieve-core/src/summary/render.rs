use crate::record::format_timestamp;
use crate::summary::Summary;

pub fn render_summary(summary: Option<&Summary>) -> String {
    let Some(summary) = summary else {
        return "No logs available for summary.\n".to_string();
    };

    let mut out = String::new();

    out.push_str(&format!(
        "Log Summary ({} records, {} actors)\n\
         ===================================\n",
        summary.total, summary.actor_count
    ));

    out.push_str(&format!(
        "Time duration: {} - {}\n",
        format_timestamp(&summary.span.start),
        format_timestamp(&summary.span.end)
    ));

    let levels = summary
        .level_counts
        .iter()
        .map(|(level, count)| format!("{level}={count}"))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(&format!("Number of logs by category: {levels}\n"));

    out.push_str(&format!(
        "Most active user: UserID {} ({} records)\n",
        summary.most_active_actor.actor_id, summary.most_active_actor.count
    ));

    out
}
