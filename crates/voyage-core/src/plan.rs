//! End-to-end pipeline: schedule, synthesize, aggregate, audit.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::aggregate::{self, EngagementPlaybookEntry};
use crate::error::PlanError;
use crate::input::{validate, CampaignInput, CampaignRequest};
use crate::platforms::PlatformKey;
use crate::scheduler::build_schedule;
use crate::synth::{synthesize_posts, ScheduledPost, MAX_HASHTAGS};

/// The complete publishing calendar and its narrative rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPlan {
    pub executive_summary: String,
    pub hero_statement: String,
    pub performance_north_star: String,
    pub content_pillars: Vec<String>,
    pub measurement_pulse: Vec<String>,
    pub platform_insights: BTreeMap<PlatformKey, String>,
    /// Ordered by date, then platform, then sequence within the platform.
    pub posts: Vec<ScheduledPost>,
    pub engagement_playbook: Vec<EngagementPlaybookEntry>,
}

impl CampaignPlan {
    /// Posts published on one platform, in schedule order.
    pub fn posts_for(&self, platform: PlatformKey) -> impl Iterator<Item = &ScheduledPost> {
        self.posts.iter().filter(move |p| p.platform == platform)
    }
}

/// Build the plan for a validated input. Pure: same input, same plan.
#[must_use]
pub fn generate_plan(input: &CampaignInput) -> CampaignPlan {
    let slots = build_schedule(input);
    let posts = synthesize_posts(&slots, input);

    let plan = CampaignPlan {
        executive_summary: aggregate::executive_summary(input, &posts),
        hero_statement: aggregate::hero_statement(input),
        performance_north_star: aggregate::performance_north_star(input, &posts),
        content_pillars: aggregate::content_pillars(input),
        measurement_pulse: aggregate::measurement_pulse(input, &posts),
        platform_insights: aggregate::platform_insights(input, &posts),
        engagement_playbook: aggregate::engagement_playbook(input, &posts),
        posts,
    };

    tracing::info!(
        brand = %input.brand_name(),
        posts = plan.posts.len(),
        platforms = input.primary_platforms().len(),
        days = input.campaign_length(),
        "campaign plan generated"
    );
    plan
}

/// Validate a raw request, generate its plan, and audit the result.
///
/// # Errors
///
/// Returns [`PlanError::Validation`] for a bad request and
/// [`PlanError::ContractViolation`] if the generated plan breaks an invariant.
pub fn plan_from_request(request: &CampaignRequest) -> Result<CampaignPlan, PlanError> {
    let input = validate(request)?;
    let plan = generate_plan(&input);
    audit_plan(&input, &plan)?;
    Ok(plan)
}

/// Check the structural guarantees every plan must hold.
///
/// # Errors
///
/// Returns [`PlanError::ContractViolation`] describing the first broken invariant.
pub fn audit_plan(input: &CampaignInput, plan: &CampaignPlan) -> Result<(), PlanError> {
    let violation = |detail: String| Err(PlanError::ContractViolation { detail });

    let selected: HashSet<PlatformKey> = input.primary_platforms().iter().copied().collect();
    let covered: HashSet<PlatformKey> = plan.platform_insights.keys().copied().collect();
    if selected != covered {
        return violation(format!(
            "platform insights cover {covered:?}, expected {selected:?}"
        ));
    }

    for &platform in input.primary_platforms() {
        let count = plan.posts_for(platform).count();
        if count == 0 {
            return violation(format!("{platform} has no posts"));
        }
        let ceiling = cadence_ceiling(platform, input.campaign_length());
        if count > ceiling {
            return violation(format!(
                "{platform} has {count} posts, above the ceiling of {ceiling}"
            ));
        }
    }

    let mut ids = HashSet::new();
    for post in &plan.posts {
        if !selected.contains(&post.platform) {
            return violation(format!("{} targets unselected platform {}", post.id, post.platform));
        }
        if !input.spans(post.posting_date) {
            return violation(format!(
                "{} is dated {}, outside {} to {}",
                post.id,
                post.posting_date,
                input.start_date(),
                input.end_date()
            ));
        }
        if !(1..=MAX_HASHTAGS).contains(&post.hashtags.len()) {
            return violation(format!("{} has {} hashtags", post.id, post.hashtags.len()));
        }
        let distinct: HashSet<&String> = post.hashtags.iter().collect();
        if distinct.len() != post.hashtags.len() {
            return violation(format!("{} repeats a hashtag", post.id));
        }
        if !ids.insert(post.id.as_str()) {
            return violation(format!("duplicate post id {}", post.id));
        }
    }

    let ordered = plan
        .posts
        .windows(2)
        .all(|w| (w[0].posting_date, w[0].platform) <= (w[1].posting_date, w[1].platform));
    if !ordered {
        return violation("posts are not ordered by date then platform".to_string());
    }

    Ok(())
}

/// `ceil(cadence * 1.4 * days / 7) + 1`, the most posts any intensity may yield.
fn cadence_ceiling(platform: PlatformKey, days: u32) -> usize {
    let scaled = platform.profile().cadence_per_week * 14 * days;
    (scaled.div_ceil(70) + 1) as usize
}
