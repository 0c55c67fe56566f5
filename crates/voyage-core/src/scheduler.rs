//! Decides which platform posts on which day, and in which window.
//!
//! Each platform is scheduled independently: its weekly cadence is scaled by
//! the intensity multiplier and the campaign length, then the resulting posts
//! are spread across the span with a fixed stride. Same-day posts on different
//! platforms are expected and left alone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::input::{CadenceIntensity, CampaignInput};
use crate::platforms::PlatformKey;

/// Where in the campaign a day falls, by thirds of the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignPhase {
    Opening,
    Midpoint,
    Closing,
}

impl CampaignPhase {
    #[must_use]
    pub fn for_day(day_index: u32, campaign_length: u32) -> Self {
        let scaled = u64::from(day_index) * 3;
        let length = u64::from(campaign_length);
        if scaled < length {
            CampaignPhase::Opening
        } else if scaled < length * 2 {
            CampaignPhase::Midpoint
        } else {
            CampaignPhase::Closing
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CampaignPhase::Opening => "opening",
            CampaignPhase::Midpoint => "midpoint",
            CampaignPhase::Closing => "closing",
        }
    }
}

impl std::fmt::Display for CampaignPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One future post: where and when, before any copy is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSlot {
    pub platform: PlatformKey,
    /// Zero-based offset from the campaign start.
    pub day_index: u32,
    pub date: NaiveDate,
    pub window: &'static str,
    /// Zero-based position among this platform's posts.
    pub sequence: u32,
    pub phase: CampaignPhase,
}

/// `round(cadence * multiplier * days / 7)`, rounding halves up, never below 1.
#[must_use]
pub fn target_post_count(cadence_per_week: u32, intensity: CadenceIntensity, days: u32) -> u32 {
    let scaled = cadence_per_week * intensity.multiplier_tenths() * days;
    // scaled / 70 rounded half-up
    ((scaled * 2 + 70) / 140).max(1)
}

/// Day offsets for `count` posts spread over `days` with stride `days / count`.
///
/// The k-th post lands on `floor(k * days / count)`, clamped to the last day.
#[must_use]
pub fn day_indices(count: u32, days: u32) -> Vec<u32> {
    if count == 0 || days == 0 {
        return Vec::new();
    }
    let last = days - 1;
    (0..count)
        .map(|k| {
            let day = u64::from(k) * u64::from(days) / u64::from(count);
            u32::try_from(day).map_or(last, |d| d.min(last))
        })
        .collect()
}

/// Build every slot for the campaign, ordered by date, then platform in
/// catalog order, then sequence within the platform.
#[must_use]
pub fn build_schedule(input: &CampaignInput) -> Vec<ScheduleSlot> {
    let days = input.campaign_length();
    let mut slots = Vec::new();

    for &platform in input.primary_platforms() {
        let profile = platform.profile();
        let target = target_post_count(profile.cadence_per_week, input.cadence_intensity(), days);
        tracing::debug!(
            platform = %platform,
            posts = target,
            days,
            intensity = %input.cadence_intensity(),
            "platform cadence resolved"
        );

        for (sequence, day_index) in (0u32..).zip(day_indices(target, days)) {
            let window_count = profile.posting_windows.len();
            let window = profile.posting_windows[sequence as usize % window_count];
            slots.push(ScheduleSlot {
                platform,
                day_index,
                date: input.date_at(day_index),
                window,
                sequence,
                phase: CampaignPhase::for_day(day_index, days),
            });
        }
    }

    slots.sort_by_key(|slot| (slot.date, slot.platform, slot.sequence));
    slots
}
