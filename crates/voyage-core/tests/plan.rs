//! End-to-end checks against the public `validate` + `generate_plan` surface.

use std::collections::HashSet;

use chrono::NaiveDate;
use voyage_core::{
    generate_plan, plan_from_request, validate, CadenceIntensity, CampaignRequest, Constraint,
    LooseNumber, PlanError, PlatformKey, TextOrList,
};

fn request(days: i64, platforms: &[&str], intensity: &str) -> CampaignRequest {
    let mut request = CampaignRequest::sample(NaiveDate::from_ymd_opt(2025, 11, 17).unwrap());
    request.campaign_length = Some(LooseNumber::Integer(days));
    request.primary_platforms = Some(TextOrList::List(
        platforms.iter().map(|p| (*p).to_string()).collect(),
    ));
    request.cadence_intensity = Some(intensity.to_string());
    request
}

const ALL_PLATFORMS: [&str; 6] = [
    "instagram",
    "facebook",
    "linkedin",
    "tiktok",
    "pinterest",
    "youtube",
];

#[test]
fn same_input_yields_identical_plans() {
    let input = validate(&request(30, &ALL_PLATFORMS, "high")).unwrap();
    let first = generate_plan(&input);
    let second = generate_plan(&input);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn plans_hold_their_invariants_across_the_input_space() {
    for intensity in ["calm", "balanced", "high"] {
        for days in [7, 8, 13, 21, 22, 30, 45] {
            for platforms in [&ALL_PLATFORMS[..1], &ALL_PLATFORMS[2..4], &ALL_PLATFORMS[..]] {
                let input = validate(&request(days, platforms, intensity)).unwrap();
                let plan = generate_plan(&input);
                let end = input.end_date();

                let insight_keys: HashSet<PlatformKey> =
                    plan.platform_insights.keys().copied().collect();
                let selected: HashSet<PlatformKey> =
                    input.primary_platforms().iter().copied().collect();
                assert_eq!(insight_keys, selected);

                for &platform in input.primary_platforms() {
                    let count = plan.posts_for(platform).count();
                    let cadence = f64::from(platform.profile().cadence_per_week);
                    let bound = (cadence * 1.4 * days as f64 / 7.0).ceil() as usize + 1;
                    assert!(count >= 1, "{platform} missing at {days} days");
                    assert!(count <= bound, "{platform}: {count} > {bound}");
                }

                for post in &plan.posts {
                    assert!(post.posting_date >= input.start_date());
                    assert!(post.posting_date <= end);
                    assert!((1..=6).contains(&post.hashtags.len()));
                    let distinct: HashSet<&String> = post.hashtags.iter().collect();
                    assert_eq!(distinct.len(), post.hashtags.len());
                }

                let ids: HashSet<&str> = plan.posts.iter().map(|p| p.id.as_str()).collect();
                assert_eq!(ids.len(), plan.posts.len());
                assert!(plan
                    .posts
                    .windows(2)
                    .all(|w| (w[0].posting_date, w[0].platform) <= (w[1].posting_date, w[1].platform)));
            }
        }
    }
}

#[test]
fn one_week_of_instagram_is_three_evenly_spaced_posts() {
    let input = validate(&request(7, &["instagram"], "balanced")).unwrap();
    let plan = generate_plan(&input);
    let offsets: Vec<i64> = plan
        .posts
        .iter()
        .map(|p| (p.posting_date - input.start_date()).num_days())
        .collect();
    assert_eq!(offsets, vec![0, 2, 4]);
}

#[test]
fn higher_intensity_never_shrinks_the_plan() {
    for days in 7..=45 {
        let calm_input = validate(&request(days, &ALL_PLATFORMS, "calm")).unwrap();
        let high_input = calm_input.with_intensity(CadenceIntensity::High);
        assert_eq!(high_input.campaign_length(), calm_input.campaign_length());
        let calm = generate_plan(&calm_input);
        let high = generate_plan(&high_input);
        assert!(
            calm.posts.len() <= high.posts.len(),
            "calm {} > high {} at {days} days",
            calm.posts.len(),
            high.posts.len()
        );
    }
}

#[test]
fn out_of_range_lengths_are_rejected() {
    for days in [6, 46] {
        let err = validate(&request(days, &["instagram"], "balanced")).unwrap_err();
        assert_eq!(err.field, "campaignLength");
        assert!(matches!(err.constraint, Constraint::OutOfRange { .. }));
    }
}

#[test]
fn empty_destinations_are_a_presence_error() {
    let mut raw = request(14, &["instagram"], "balanced");
    raw.hero_destinations = Some(TextOrList::Text(String::new()));
    let err = validate(&raw).unwrap_err();
    assert_eq!(err.field, "heroDestinations");
    assert!(err.is_presence());
}

#[test]
fn unknown_platforms_are_rejected() {
    let err = validate(&request(14, &["instagram", "friendster"], "balanced")).unwrap_err();
    assert_eq!(
        err.constraint,
        Constraint::UnknownPlatform("friendster".to_string())
    );
}

#[test]
fn plan_from_request_runs_the_whole_pipeline() {
    let plan = plan_from_request(&request(21, &["instagram", "facebook"], "balanced")).unwrap();
    assert!(!plan.posts.is_empty());
    assert_eq!(plan.platform_insights.len(), 2);

    let err = plan_from_request(&CampaignRequest::default()).unwrap_err();
    assert!(matches!(err, PlanError::Validation(ref v) if v.field == "brandName"));
}

#[test]
fn plan_serializes_with_camel_case_fields() {
    let input = validate(&request(7, &["instagram", "linkedin"], "balanced")).unwrap();
    let json = serde_json::to_value(generate_plan(&input)).unwrap();

    for key in [
        "executiveSummary",
        "heroStatement",
        "performanceNorthStar",
        "contentPillars",
        "measurementPulse",
        "platformInsights",
        "posts",
        "engagementPlaybook",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert!(json["platformInsights"].get("instagram").is_some());
    assert!(json["platformInsights"].get("linkedin").is_some());

    let post = &json["posts"][0];
    assert_eq!(post["platform"], "instagram");
    assert_eq!(post["postingDate"], "2025-11-17");
    assert_eq!(post["postingWindow"], "Morning Arrival");
    assert!(post["callToAction"].is_string());
    assert!(post["conciergeTouch"].is_string());
    assert!(json["engagementPlaybook"][0]["dayLabel"].is_string());
}
