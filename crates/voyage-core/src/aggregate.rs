//! Plan-level narrative derived from the brief and the finished post list.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::input::CampaignInput;
use crate::platforms::PlatformKey;
use crate::scheduler::CampaignPhase;
use crate::synth::{lower_first, ScheduledPost};

/// Campaigns longer than this get a weekly playbook instead of a daily one.
pub const DAILY_PLAYBOOK_MAX_DAYS: u32 = 21;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementPlaybookEntry {
    pub day_label: String,
    pub moves: Vec<String>,
}

#[must_use]
pub fn executive_summary(input: &CampaignInput, posts: &[ScheduledPost]) -> String {
    let platforms = input.primary_platforms();
    format!(
        "{} will publish {} couture-grade moments across {} {} ({}) over {} days, \
         leading with {} for the {} season.",
        input.brand_name(),
        posts.len(),
        platforms.len(),
        plural(platforms.len(), "platform", "platforms"),
        join_natural(&labels(platforms.iter().copied())),
        input.campaign_length(),
        join_natural(input.hero_destinations()),
        input.travel_season(),
    )
}

#[must_use]
pub fn hero_statement(input: &CampaignInput) -> String {
    format!(
        "{}, orchestrated for {} in a voice that stays {}.",
        input.signature_experience(),
        lower_first(input.guest_persona()),
        lower_first(input.brand_voice())
    )
}

#[must_use]
pub fn performance_north_star(input: &CampaignInput, posts: &[ScheduledPost]) -> String {
    format!(
        "North star: turn {} scheduled touchpoints across {} {} into private consultations, \
         with {} as the conversion hook and {} as the proof.",
        posts.len(),
        input.primary_platforms().len(),
        plural(input.primary_platforms().len(), "platform", "platforms"),
        lower_first(input.vip_offer()),
        lower_first(input.differentiator())
    )
}

/// One pillar per theme: differentiator, signature experience, persona, offer.
#[must_use]
pub fn content_pillars(input: &CampaignInput) -> Vec<String> {
    vec![
        format!("Anticipatory Intelligence: {}", input.differentiator()),
        format!("Signature Journeys: {}", input.signature_experience()),
        format!(
            "Guest Intimacy: stories told through the eyes of {}",
            lower_first(input.guest_persona())
        ),
        format!(
            "Privileged Access: {} framed as an invitation, never a discount",
            input.vip_offer()
        ),
    ]
}

/// Per-platform metric guidance for the selected platforms, then two
/// platform-neutral conversion metrics.
#[must_use]
pub fn measurement_pulse(input: &CampaignInput, posts: &[ScheduledPost]) -> Vec<String> {
    let mut pulse: Vec<String> = input
        .primary_platforms()
        .iter()
        .map(|key| {
            let profile = key.profile();
            format!("{}: track {}.", profile.label, profile.measurement_focus)
        })
        .collect();
    pulse.push(format!(
        "Concierge inquiries: log every message and briefing request traced back to the {} scheduled posts.",
        posts.len()
    ));
    pulse.push(format!(
        "Offer uptake: measure how many conversations end with {} being claimed.",
        lower_first(input.vip_offer())
    ));
    pulse
}

/// Exactly one entry per selected platform.
#[must_use]
pub fn platform_insights(
    input: &CampaignInput,
    posts: &[ScheduledPost],
) -> BTreeMap<PlatformKey, String> {
    input
        .primary_platforms()
        .iter()
        .map(|&key| {
            let profile = key.profile();
            let own: Vec<&ScheduledPost> = posts.iter().filter(|p| p.platform == key).collect();
            let lead_window = own
                .first()
                .map_or(profile.posting_windows[0], |p| p.posting_window.as_str());
            let insight = format!(
                "{} audiences are {}. {} {} keep a {} register, led by the {} window.",
                profile.label,
                profile.audience_mood.to_lowercase(),
                own.len(),
                plural(own.len(), "post", "posts"),
                lower_first(input.brand_voice()),
                lead_window
            );
            (key, insight)
        })
        .collect()
}

/// Group posts by day (or by week past [`DAILY_PLAYBOOK_MAX_DAYS`]) and
/// script two to four concierge moves for each group.
#[must_use]
pub fn engagement_playbook(
    input: &CampaignInput,
    posts: &[ScheduledPost],
) -> Vec<EngagementPlaybookEntry> {
    let weekly = input.campaign_length() > DAILY_PLAYBOOK_MAX_DAYS;

    let mut groups: BTreeMap<u32, Vec<&ScheduledPost>> = BTreeMap::new();
    for post in posts {
        let key = if weekly {
            post.day_index / 7
        } else {
            post.day_index
        };
        groups.entry(key).or_default().push(post);
    }

    groups
        .into_iter()
        .map(|(key, group)| {
            let day_label = if weekly {
                week_label(input, key)
            } else {
                let date = input.date_at(key);
                format!("Day {} · {}", key + 1, date.format("%a, %b %-d"))
            };
            EngagementPlaybookEntry {
                day_label,
                moves: moves_for(input, &group, weekly),
            }
        })
        .collect()
}

fn week_label(input: &CampaignInput, week: u32) -> String {
    let first = week * 7;
    let last = (first + 6).min(input.campaign_length() - 1);
    format!(
        "Week {} · {} to {}",
        week + 1,
        input.date_at(first).format("%b %-d"),
        input.date_at(last).format("%b %-d")
    )
}

fn moves_for(input: &CampaignInput, group: &[&ScheduledPost], weekly: bool) -> Vec<String> {
    let active: BTreeSet<PlatformKey> = group.iter().map(|p| p.platform).collect();
    let active_labels = labels(active.iter().copied());
    let period = if weekly { "week" } else { "day" };

    let mut moves = vec![
        format!(
            "Reply personally within the hour to every comment on {} with a preview of {}.",
            join_natural(&active_labels),
            lower_first(input.vip_offer())
        ),
        format!(
            "Route high-intent messages from {} to a named concierge before the {period} closes.",
            lower_first(input.guest_persona())
        ),
    ];

    if let Some((lead, rest)) = active_labels.split_first() {
        if !rest.is_empty() {
            moves.push(format!(
                "Reshare the strongest {lead} moment to {} so the story stays continuous.",
                join_natural(rest)
            ));
        }
    }

    if group.iter().any(|p| p.phase == CampaignPhase::Closing) {
        moves.push(format!(
            "Extend {} as a time-held invitation to every warm lead engaged so far.",
            lower_first(input.vip_offer())
        ));
    }

    moves
}

fn labels(keys: impl Iterator<Item = PlatformKey>) -> Vec<String> {
    keys.map(|k| k.profile().label.to_string()).collect()
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// `a`, `a and b`, `a, b and c`.
fn join_natural<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}
