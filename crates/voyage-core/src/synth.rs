//! Turns schedule slots into fully written posts.
//!
//! All copy is assembled from fixed templates filled with the brief's fields,
//! the slot's platform and campaign phase, and the destination picked by a
//! [`DestinationCursor`]. Nothing here is random: the same slot, destination
//! and input always produce the same post.

use chrono::NaiveDate;
use serde::Serialize;

use crate::input::{CampaignInput, TravelSeason};
use crate::platforms::{PlatformKey, PlatformProfile};
use crate::scheduler::{CampaignPhase, ScheduleSlot};

/// Upper bound on hashtags attached to a single post.
pub const MAX_HASHTAGS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPost {
    /// `<platform>-<nn>`, unique within a plan.
    pub id: String,
    pub platform: PlatformKey,
    pub posting_date: NaiveDate,
    pub posting_window: String,
    pub day_index: u32,
    pub phase: CampaignPhase,
    pub destination: String,
    pub title: String,
    pub caption: String,
    pub asset_direction: String,
    pub call_to_action: String,
    pub concierge_touch: String,
    pub mood: String,
    pub hashtags: Vec<String>,
}

/// Rotation over the hero destinations, advanced once per post in global
/// schedule order and wrapping when exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DestinationCursor {
    next: usize,
}

impl DestinationCursor {
    /// Return the current destination and move the cursor forward.
    pub fn advance<'a>(&mut self, destinations: &'a [String]) -> &'a str {
        let picked = self
            .next
            .checked_rem(destinations.len())
            .and_then(|i| destinations.get(i))
            .map_or("", String::as_str);
        self.next += 1;
        picked
    }

    /// Number of destinations handed out so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.next
    }
}

/// Write every post for an ordered schedule.
#[must_use]
pub fn synthesize_posts(slots: &[ScheduleSlot], input: &CampaignInput) -> Vec<ScheduledPost> {
    let mut cursor = DestinationCursor::default();
    let posts: Vec<ScheduledPost> = slots
        .iter()
        .map(|slot| {
            let destination = cursor.advance(input.hero_destinations());
            synthesize_post(slot, destination, input)
        })
        .collect();
    tracing::debug!(
        posts = posts.len(),
        destinations_used = cursor.position(),
        "posts synthesized"
    );
    posts
}

/// Write one post. Pure in `(slot, destination, input)`.
#[must_use]
pub fn synthesize_post(slot: &ScheduleSlot, destination: &str, input: &CampaignInput) -> ScheduledPost {
    let profile = slot.platform.profile();
    let guidance = profile.asset_guidance[slot.sequence as usize % profile.asset_guidance.len()];

    ScheduledPost {
        id: format!("{}-{:02}", slot.platform, slot.sequence + 1),
        platform: slot.platform,
        posting_date: slot.date,
        posting_window: slot.window.to_string(),
        day_index: slot.day_index,
        phase: slot.phase,
        destination: destination.to_string(),
        title: title(slot.phase, destination, input),
        caption: format!(
            "{}\n\n{}",
            caption_lead(slot.phase, destination, input),
            caption_body(slot.platform, input)
        ),
        asset_direction: format!("{guidance}, set in {destination}"),
        call_to_action: call_to_action(slot.platform, slot.phase, input),
        concierge_touch: concierge_touch(slot.phase, destination, input),
        mood: format!("{} · {}", phase_tone(slot.phase), profile.audience_mood),
        hashtags: hashtags(profile, slot.sequence, destination, input.brand_name()),
    }
}

fn title(phase: CampaignPhase, destination: &str, input: &CampaignInput) -> String {
    match phase {
        CampaignPhase::Opening => {
            format!("{destination}: The {} Prologue", input.travel_season())
        }
        CampaignPhase::Midpoint => format!("Inside {destination} with {}", input.brand_name()),
        CampaignPhase::Closing => format!("Last Call for {destination}"),
    }
}

fn season_phrase(season: TravelSeason) -> &'static str {
    match season {
        TravelSeason::Spring => "this spring",
        TravelSeason::Summer => "this summer",
        TravelSeason::Autumn => "this autumn",
        TravelSeason::Winter => "this winter",
        TravelSeason::Evergreen => "in any season",
    }
}

fn caption_lead(phase: CampaignPhase, destination: &str, input: &CampaignInput) -> String {
    match phase {
        CampaignPhase::Opening => format!(
            "Imagine {destination} {}: {}.",
            season_phrase(input.travel_season()),
            lower_first(input.signature_experience())
        ),
        CampaignPhase::Midpoint => format!(
            "Halfway into the journey, {destination} shows what {} feels like in person.",
            lower_first(input.differentiator())
        ),
        CampaignPhase::Closing => format!(
            "The final chapter in {destination} is being held for a select few, \
             with {} waiting on arrival.",
            lower_first(input.vip_offer())
        ),
    }
}

fn caption_body(platform: PlatformKey, input: &CampaignInput) -> String {
    let brand = input.brand_name();
    match platform {
        PlatformKey::Instagram => format!(
            "Every frame is composed for {}, in a voice that stays {}.",
            lower_first(input.guest_persona()),
            lower_first(input.brand_voice())
        ),
        PlatformKey::Facebook => format!(
            "Bring everyone: {brand} choreographs each generation's day so the family simply arrives."
        ),
        PlatformKey::Linkedin => format!(
            "For leaders who delegate nothing lightly, {brand} pairs {} with absolute discretion.",
            lower_first(input.differentiator())
        ),
        PlatformKey::Tiktok => {
            format!("Stay to the end to see what {brand} arranged before anyone asked.")
        }
        PlatformKey::Pinterest => format!(
            "Save this for the itinerary you keep returning to. {brand} will handle the rest."
        ),
        PlatformKey::Youtube => format!(
            "Watch the full journey, chaptered from door to dome, and see how {brand} plans ahead."
        ),
    }
}

fn call_to_action(platform: PlatformKey, phase: CampaignPhase, input: &CampaignInput) -> String {
    let offer = lower_first(input.vip_offer());
    let action = match platform {
        PlatformKey::Instagram => format!("Send us a DM to claim {offer}."),
        PlatformKey::Facebook => format!("Message the concierge desk to reserve {offer}."),
        PlatformKey::Linkedin => format!("Book a confidential briefing to secure {offer}."),
        PlatformKey::Tiktok => format!("Tap the link in bio before {offer} is gone."),
        PlatformKey::Pinterest => {
            format!("Save the pin and request the itinerary to receive {offer}.")
        }
        PlatformKey::Youtube => {
            format!("Use the consultation link in the description to request {offer}.")
        }
    };
    match phase {
        CampaignPhase::Closing => format!("Final days: {action}"),
        CampaignPhase::Opening | CampaignPhase::Midpoint => action,
    }
}

fn concierge_touch(phase: CampaignPhase, destination: &str, input: &CampaignInput) -> String {
    match phase {
        CampaignPhase::Opening => format!(
            "Send a personal welcome note to every engaged follower from {}, previewing {destination}.",
            lower_first(input.guest_persona())
        ),
        CampaignPhase::Midpoint => format!(
            "Offer engaged followers a private call to sketch a {destination} itinerary around {}.",
            lower_first(input.signature_experience())
        ),
        CampaignPhase::Closing => format!(
            "Personally extend {} to warm leads before the {destination} window closes.",
            lower_first(input.vip_offer())
        ),
    }
}

fn phase_tone(phase: CampaignPhase) -> &'static str {
    match phase {
        CampaignPhase::Opening => "Anticipatory",
        CampaignPhase::Midpoint => "Immersive",
        CampaignPhase::Closing => "Urgent yet gracious",
    }
}

/// `#` plus the lower-cased ASCII alphanumerics of `text`; `None` if nothing is left.
#[must_use]
pub fn hashtag_for(text: &str) -> Option<String> {
    let slug: String = text
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    (!slug.is_empty()).then(|| format!("#{slug}"))
}

/// Two or three platform tags taken round-robin, then destination and brand
/// tags, de-duplicated case-insensitively and capped at [`MAX_HASHTAGS`].
fn hashtags(
    profile: &PlatformProfile,
    sequence: u32,
    destination: &str,
    brand_name: &str,
) -> Vec<String> {
    let buckets = profile.hashtag_buckets;
    let sequence = sequence as usize;
    let take = 2 + sequence % 2;
    // Earlier posts consumed 2, 3, 2, 3, ... tags.
    let start = sequence * 5 / 2;

    let bucket_tags = (0..take)
        .filter_map(|offset| buckets.get((start + offset) % buckets.len().max(1)))
        .map(|tag| (*tag).to_string());

    let mut tags: Vec<String> = Vec::with_capacity(MAX_HASHTAGS);
    for tag in bucket_tags
        .chain(hashtag_for(destination))
        .chain(hashtag_for(brand_name))
    {
        if tags.len() == MAX_HASHTAGS {
            break;
        }
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            tags.push(tag);
        }
    }
    tags
}

/// Lower-case the first letter unless the text opens with an acronym.
pub(crate) fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if chars.clone().next().is_some_and(char::is_uppercase) {
        return text.to_string();
    }
    first.to_lowercase().chain(chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::build_schedule;
    use crate::test_support::input_with;

    #[test]
    fn cursor_wraps_around_destinations() {
        let destinations = vec!["Hydra".to_string(), "Paros".to_string()];
        let mut cursor = DestinationCursor::default();
        let picked: Vec<&str> = (0..5).map(|_| cursor.advance(&destinations)).collect();
        assert_eq!(picked, vec!["Hydra", "Paros", "Hydra", "Paros", "Hydra"]);
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn cursor_on_empty_list_yields_empty_text() {
        let mut cursor = DestinationCursor::default();
        assert_eq!(cursor.advance(&[]), "");
    }

    #[test]
    fn destinations_rotate_in_global_schedule_order() {
        let input = input_with(14, "instagram, linkedin", "balanced");
        let slots = build_schedule(&input);
        let posts = synthesize_posts(&slots, &input);
        let destinations = input.hero_destinations();
        for (i, post) in posts.iter().enumerate() {
            assert_eq!(post.destination, destinations[i % destinations.len()]);
        }
        // Same-day posts on different platforms still get different destinations.
        assert_eq!(posts[0].day_index, posts[1].day_index);
        assert_ne!(posts[0].destination, posts[1].destination);
    }

    #[test]
    fn post_copies_slot_placement() {
        let input = input_with(7, "instagram", "balanced");
        let slots = build_schedule(&input);
        let posts = synthesize_posts(&slots, &input);
        assert_eq!(posts.len(), slots.len());
        for (post, slot) in posts.iter().zip(&slots) {
            assert_eq!(post.platform, slot.platform);
            assert_eq!(post.posting_date, slot.date);
            assert_eq!(post.posting_window, slot.window);
        }
        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["instagram-01", "instagram-02", "instagram-03"]);
    }

    #[test]
    fn same_slot_and_destination_give_identical_posts() {
        let input = input_with(21, "tiktok", "high");
        let slots = build_schedule(&input);
        let a = synthesize_post(&slots[3], "Kyoto", &input);
        let b = synthesize_post(&slots[3], "Kyoto", &input);
        assert_eq!(a, b);
    }

    #[test]
    fn templates_follow_phase() {
        let input = input_with(21, "instagram", "balanced");
        let slots = build_schedule(&input);
        let posts = synthesize_posts(&slots, &input);

        let opening = posts.iter().find(|p| p.phase == CampaignPhase::Opening).unwrap();
        assert!(opening.title.ends_with("The Summer Prologue"));
        assert!(opening.caption.contains("this summer"));
        assert!(opening.mood.starts_with("Anticipatory"));

        let closing = posts.iter().find(|p| p.phase == CampaignPhase::Closing).unwrap();
        assert!(closing.title.starts_with("Last Call for "));
        assert!(closing.call_to_action.starts_with("Final days: "));
        assert!(closing
            .concierge_touch
            .contains("complimentary fragrance sommelier"));
    }

    #[test]
    fn templates_follow_platform() {
        let input = input_with(7, "linkedin, tiktok", "balanced");
        let slots = build_schedule(&input);
        let posts = synthesize_posts(&slots, &input);
        let linkedin = posts.iter().find(|p| p.platform == PlatformKey::Linkedin).unwrap();
        let tiktok = posts.iter().find(|p| p.platform == PlatformKey::Tiktok).unwrap();
        assert!(linkedin.call_to_action.contains("confidential briefing"));
        assert!(tiktok.call_to_action.contains("link in bio"));
        assert!(linkedin.mood.contains(PlatformKey::Linkedin.profile().audience_mood));
    }

    #[test]
    fn asset_direction_rotates_guidance() {
        let input = input_with(21, "instagram", "balanced");
        let slots = build_schedule(&input);
        let posts = synthesize_posts(&slots, &input);
        let guidance = PlatformKey::Instagram.profile().asset_guidance;
        for (k, post) in posts.iter().enumerate() {
            assert!(post.asset_direction.starts_with(guidance[k % guidance.len()]));
            assert!(post.asset_direction.ends_with(&post.destination));
        }
    }

    #[test]
    fn hashtags_are_bounded_distinct_and_branded() {
        let input = input_with(45, "instagram, facebook, linkedin, tiktok, pinterest, youtube", "high");
        let slots = build_schedule(&input);
        for post in synthesize_posts(&slots, &input) {
            assert!((1..=MAX_HASHTAGS).contains(&post.hashtags.len()));
            let mut lowered: Vec<String> = post.hashtags.iter().map(|t| t.to_lowercase()).collect();
            lowered.sort();
            lowered.dedup();
            assert_eq!(lowered.len(), post.hashtags.len(), "duplicate tag in {}", post.id);
            assert!(post.hashtags.contains(&"#luminavoyageatelier".to_string()));
        }
    }

    #[test]
    fn hashtags_alternate_two_and_three_bucket_tags() {
        let profile = PlatformKey::Instagram.profile();
        let first = hashtags(profile, 0, "Kyoto", "Maison Azur");
        assert_eq!(first, vec!["#luxurytravel", "#quietluxury", "#kyoto", "#maisonazur"]);
        let second = hashtags(profile, 1, "Kyoto", "Maison Azur");
        assert_eq!(
            second,
            vec!["#travelinstyle", "#bespoketravel", "#wanderlust", "#kyoto", "#maisonazur"]
        );
    }

    #[test]
    fn bucket_tags_continue_where_the_previous_post_stopped() {
        let profile = PlatformKey::Instagram.profile();
        let buckets = profile.hashtag_buckets;
        let walked: Vec<String> = (0..6)
            .flat_map(|sequence| hashtags(profile, sequence, "Kyoto", "Maison Azur"))
            .filter(|tag| buckets.contains(&tag.as_str()))
            .collect();
        let expected: Vec<String> = buckets
            .iter()
            .cycle()
            .take(walked.len())
            .map(|tag| (*tag).to_string())
            .collect();
        assert_eq!(walked.len(), 15);
        assert_eq!(walked, expected);
    }

    #[test]
    fn hashtag_slug_strips_punctuation_and_non_ascii() {
        assert_eq!(hashtag_for("Uncle Arnie's").as_deref(), Some("#unclearnies"));
        assert_eq!(hashtag_for("BRĒZ").as_deref(), Some("#brz"));
        assert_eq!(hashtag_for("™ ™"), None);
    }

    #[test]
    fn lower_first_keeps_acronyms() {
        assert_eq!(lower_first("Complimentary spa"), "complimentary spa");
        assert_eq!(lower_first("VIP lounge access"), "VIP lounge access");
        assert_eq!(lower_first(""), "");
    }
}
