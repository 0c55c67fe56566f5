//! Plain-text rendering of a plan for the terminal.

use voyage_core::{catalog, CampaignPlan};

fn heading(lines: &mut Vec<String>, title: &str) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(title.to_uppercase());
    lines.push("=".repeat(title.len()));
}

/// Render the executive capsule, measurement pulse, platform notes, the first
/// `preview_limit` posts, and the engagement rituals.
pub(crate) fn render_plan(plan: &CampaignPlan, preview_limit: usize) -> String {
    let mut lines = Vec::new();

    heading(&mut lines, "Executive Capsule");
    lines.push(plan.executive_summary.clone());
    lines.push(plan.hero_statement.clone());
    lines.push(plan.performance_north_star.clone());
    lines.push("Content pillars:".to_string());
    lines.extend(plan.content_pillars.iter().map(|p| format!("  - {p}")));

    heading(&mut lines, "Measurement Pulse");
    lines.extend(plan.measurement_pulse.iter().map(|m| format!("  - {m}")));

    heading(&mut lines, "Platform Field Notes");
    for (key, insight) in &plan.platform_insights {
        let profile = key.profile();
        lines.push(format!(
            "{} ({}x weekly)",
            profile.label, profile.cadence_per_week
        ));
        lines.push(format!("  {insight}"));
        lines.push("  Creative prompts:".to_string());
        lines.extend(profile.asset_guidance.iter().map(|g| format!("    - {g}")));
        lines.push(format!("  Hashtags: {}", profile.hashtag_buckets.join(" · ")));
    }

    heading(&mut lines, "Publishing Runway");
    lines.push(format!(
        "Optimised windows across {} activations",
        plan.posts.len()
    ));
    for post in plan.posts.iter().take(preview_limit) {
        lines.push(String::new());
        lines.push(format!(
            "{} · {} · {}",
            post.platform.profile().label,
            post.posting_date.format("%a, %b %-d"),
            post.posting_window
        ));
        lines.push(format!("  {}", post.title));
        lines.extend(post.caption.lines().filter(|l| !l.is_empty()).map(|l| format!("  {l}")));
        lines.push(format!("  Asset: {}", post.asset_direction));
        lines.push(format!("  Mood: {}", post.mood));
        lines.push(format!("  CTA: {}", post.call_to_action));
        lines.push(format!("  Concierge Move: {}", post.concierge_touch));
        lines.push(format!("  Hashtags: {}", post.hashtags.join(" ")));
    }
    if plan.posts.len() > preview_limit {
        lines.push(String::new());
        lines.push(format!(
            "... {} more; export to CSV for the full calendar",
            plan.posts.len() - preview_limit
        ));
    }

    heading(&mut lines, "Concierge Engagement Rituals");
    for entry in &plan.engagement_playbook {
        lines.push(entry.day_label.clone());
        lines.extend(entry.moves.iter().map(|m| format!("  - {m}")));
    }

    lines.push(String::new());
    lines.join("\n")
}

pub(crate) fn render_platforms() -> String {
    let mut lines = Vec::new();
    for profile in catalog() {
        lines.push(format!(
            "{:<10} {:<10} {}x weekly  {}",
            profile.key.as_str(),
            profile.label,
            profile.cadence_per_week,
            profile.audience_mood
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}
