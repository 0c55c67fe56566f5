//! Static registry of the social platforms a campaign can target.
//!
//! The catalog is closed: [`PlatformKey`] enumerates every supported key and
//! [`profile`] resolves each one to exactly one [`PlatformProfile`]. Nothing
//! here is mutated at runtime, so the profiles are plain `static` data.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKey {
    Instagram,
    Facebook,
    Linkedin,
    Tiktok,
    Pinterest,
    Youtube,
}

impl PlatformKey {
    /// Every key, in catalog order. Scheduling ties are broken in this order.
    pub const ALL: [PlatformKey; 6] = [
        PlatformKey::Instagram,
        PlatformKey::Facebook,
        PlatformKey::Linkedin,
        PlatformKey::Tiktok,
        PlatformKey::Pinterest,
        PlatformKey::Youtube,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PlatformKey::Instagram => "instagram",
            PlatformKey::Facebook => "facebook",
            PlatformKey::Linkedin => "linkedin",
            PlatformKey::Tiktok => "tiktok",
            PlatformKey::Pinterest => "pinterest",
            PlatformKey::Youtube => "youtube",
        }
    }

    /// Shorthand for `profile(self)`.
    #[must_use]
    pub fn profile(self) -> &'static PlatformProfile {
        profile(self)
    }
}

impl std::fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a catalog platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlatform(pub String);

impl FromStr for PlatformKey {
    type Err = UnknownPlatform;

    /// Matches case-insensitively after trimming surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PlatformKey::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| UnknownPlatform(s.trim().to_string()))
    }
}

/// Posting characteristics for one platform.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformProfile {
    pub key: PlatformKey,
    pub label: &'static str,
    /// Baseline posts per week at `balanced` intensity.
    pub cadence_per_week: u32,
    pub audience_mood: &'static str,
    /// Creative-direction prompts, used in rotation.
    pub asset_guidance: &'static [&'static str],
    /// Hashtags (with the leading `#`) this platform's audience follows.
    pub hashtag_buckets: &'static [&'static str],
    /// Time-of-day labels, used in rotation.
    pub posting_windows: &'static [&'static str],
    /// What `measurementPulse` tells the team to watch on this platform.
    pub measurement_focus: &'static str,
}

static INSTAGRAM: PlatformProfile = PlatformProfile {
    key: PlatformKey::Instagram,
    label: "Instagram",
    cadence_per_week: 3,
    audience_mood: "Aspirational escapists craving cinematic, sensory detail",
    asset_guidance: &[
        "Slow-pan reel opening on an untouched horizon before revealing the suite",
        "Carousel of texture close-ups: linen, stone, citrus, water",
        "Golden-light portrait of a host preparing an in-villa ritual",
        "Overhead flat lay of the arrival amenity with handwritten note",
    ],
    hashtag_buckets: &[
        "#luxurytravel",
        "#quietluxury",
        "#travelinstyle",
        "#bespoketravel",
        "#wanderlust",
    ],
    posting_windows: &["Morning Arrival", "Golden Hour", "Evening Wind-down"],
    measurement_focus: "saves and shares per thousand reached on reels and carousels",
};

static FACEBOOK: PlatformProfile = PlatformProfile {
    key: PlatformKey::Facebook,
    label: "Facebook",
    cadence_per_week: 2,
    audience_mood: "Multi-generational planners seeking reassurance and social proof",
    asset_guidance: &[
        "Family-scale photo story showing every generation catered for",
        "Guest testimonial quote card over a softly blurred terrace",
        "Short walkthrough video of the private transfer experience",
    ],
    hashtag_buckets: &[
        "#familytravel",
        "#luxuryholidays",
        "#travelplanning",
        "#villalife",
    ],
    posting_windows: &["Breakfast Planning", "Lunchtime Browse", "After-dinner Lounge"],
    measurement_focus: "comment threads that turn into Messenger itinerary requests",
};

static LINKEDIN: PlatformProfile = PlatformProfile {
    key: PlatformKey::Linkedin,
    label: "LinkedIn",
    cadence_per_week: 2,
    audience_mood: "Executive travellers and family-office gatekeepers valuing discretion",
    asset_guidance: &[
        "Minimalist document-style carousel outlining the concierge methodology",
        "Founder-voice still with a single pull quote on anticipatory service",
        "Clean data card contrasting planning hours saved per itinerary",
    ],
    hashtag_buckets: &[
        "#executivetravel",
        "#hospitalityleadership",
        "#luxuryconcierge",
        "#familyoffice",
    ],
    posting_windows: &["Pre-market Brief", "Midday Pause", "Late Commute"],
    measurement_focus: "profile visits and direct messages from senior decision-makers",
};

static TIKTOK: PlatformProfile = PlatformProfile {
    key: PlatformKey::Tiktok,
    label: "TikTok",
    cadence_per_week: 4,
    audience_mood: "Culture-hungry explorers who reward behind-the-velvet-rope access",
    asset_guidance: &[
        "POV arrival sequence cut to the beat, no voiceover",
        "Concierge answers one impossible guest request in under thirty seconds",
        "Before-and-after of a suite being staged for arrival",
    ],
    hashtag_buckets: &[
        "#traveltok",
        "#luxurytok",
        "#hiddengems",
        "#dreamtrip",
        "#travelhacks",
    ],
    posting_windows: &["Lunch Scroll", "After-work Reset", "Late-night Wanderlust"],
    measurement_focus: "completion rate and profile taps on the first two seconds of each hook",
};

static PINTEREST: PlatformProfile = PlatformProfile {
    key: PlatformKey::Pinterest,
    label: "Pinterest",
    cadence_per_week: 3,
    audience_mood: "Meticulous dreamers curating mood boards months ahead",
    asset_guidance: &[
        "Vertical mood board pin pairing palette, texture and destination",
        "Itinerary idea pin with three hero moments per day",
        "Packing-edit pin styled for the season",
    ],
    hashtag_buckets: &[
        "#travelinspiration",
        "#dreamdestinations",
        "#honeymoonideas",
        "#luxuryaesthetic",
    ],
    posting_windows: &["Weekend Planning", "Evening Daydream", "Sunday Reset"],
    measurement_focus: "outbound clicks and board saves on itinerary pins",
};

static YOUTUBE: PlatformProfile = PlatformProfile {
    key: PlatformKey::Youtube,
    label: "YouTube",
    cadence_per_week: 1,
    audience_mood: "Long-form researchers who binge immersive walk-throughs",
    asset_guidance: &[
        "Twelve-minute narrated journey from door to dome",
        "Chaptered suite tour with on-screen itinerary timestamps",
        "Host-led destination primer filmed at first light",
    ],
    hashtag_buckets: &[
        "#luxurytravelvlog",
        "#hoteltour",
        "#travelguide",
    ],
    posting_windows: &["Weekend Deep Dive", "Evening Premiere", "Sunday Morning Watch"],
    measurement_focus: "average view duration and description-link consultations",
};

/// Resolve a key to its catalog profile.
#[must_use]
pub fn profile(key: PlatformKey) -> &'static PlatformProfile {
    match key {
        PlatformKey::Instagram => &INSTAGRAM,
        PlatformKey::Facebook => &FACEBOOK,
        PlatformKey::Linkedin => &LINKEDIN,
        PlatformKey::Tiktok => &TIKTOK,
        PlatformKey::Pinterest => &PINTEREST,
        PlatformKey::Youtube => &YOUTUBE,
    }
}

/// Every profile in catalog order.
pub fn catalog() -> impl Iterator<Item = &'static PlatformProfile> {
    PlatformKey::ALL.into_iter().map(profile)
}
