//! Campaign request validation.
//!
//! [`CampaignRequest`] is the loosely-typed record a form or request file
//! supplies. [`validate`] is the only way to obtain a [`CampaignInput`], so
//! every downstream component can rely on its fields being present, trimmed
//! and in range without checking again.

use std::collections::HashSet;

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Constraint, ValidationError};
use crate::platforms::PlatformKey;

pub const MIN_CAMPAIGN_DAYS: u32 = 7;
pub const MAX_CAMPAIGN_DAYS: u32 = 45;

/// A field that may arrive as one delimited string or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

/// A number that may arrive as an integer, a float, or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// Raw campaign request, as collected by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRequest {
    pub brand_name: Option<String>,
    pub brand_voice: Option<String>,
    pub hero_destinations: Option<TextOrList>,
    pub signature_experience: Option<String>,
    pub guest_persona: Option<String>,
    pub travel_season: Option<String>,
    pub differentiator: Option<String>,
    pub vip_offer: Option<String>,
    pub start_date: Option<String>,
    pub campaign_length: Option<LooseNumber>,
    pub primary_platforms: Option<TextOrList>,
    pub cadence_intensity: Option<String>,
}

impl CampaignRequest {
    /// The showcase brief the studio opens with.
    #[must_use]
    pub fn sample(start_date: NaiveDate) -> Self {
        Self {
            brand_name: Some("Lumina Voyage Atelier".to_string()),
            brand_voice: Some("Quietly opulent, anticipatory, sophisticated".to_string()),
            hero_destinations: Some(TextOrList::Text(
                "Amalfi Coast; Maldives atoll; Kyoto bamboo retreats".to_string(),
            )),
            signature_experience: Some(
                "Door-to-dome private jet transfer paired with a 48-hour superyacht prologue"
                    .to_string(),
            ),
            guest_persona: Some(
                "Ultra-high-net-worth families and inward-focused power couples".to_string(),
            ),
            travel_season: Some("Summer".to_string()),
            differentiator: Some(
                "Predictive concierge intelligence that scripts every micro-moment before arrival"
                    .to_string(),
            ),
            vip_offer: Some(
                "Complimentary fragrance sommelier and 36-hour itinerary hold".to_string(),
            ),
            start_date: Some(start_date.format("%Y-%m-%d").to_string()),
            campaign_length: Some(LooseNumber::Integer(21)),
            primary_platforms: Some(TextOrList::List(vec![
                "instagram".to_string(),
                "facebook".to_string(),
                "linkedin".to_string(),
            ])),
            cadence_intensity: Some("balanced".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelSeason {
    Spring,
    Summer,
    Autumn,
    Winter,
    Evergreen,
}

impl TravelSeason {
    const ALL: [TravelSeason; 5] = [
        TravelSeason::Spring,
        TravelSeason::Summer,
        TravelSeason::Autumn,
        TravelSeason::Winter,
        TravelSeason::Evergreen,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TravelSeason::Spring => "Spring",
            TravelSeason::Summer => "Summer",
            TravelSeason::Autumn => "Autumn",
            TravelSeason::Winter => "Winter",
            TravelSeason::Evergreen => "Evergreen",
        }
    }
}

impl std::fmt::Display for TravelSeason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CadenceIntensity {
    Calm,
    Balanced,
    High,
}

impl CadenceIntensity {
    const ALL: [CadenceIntensity; 3] = [
        CadenceIntensity::Calm,
        CadenceIntensity::Balanced,
        CadenceIntensity::High,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CadenceIntensity::Calm => "calm",
            CadenceIntensity::Balanced => "balanced",
            CadenceIntensity::High => "high",
        }
    }

    /// Scale applied to every platform's weekly cadence, in tenths
    /// (0.7, 1.0, 1.4) so rounding stays exact.
    #[must_use]
    pub fn multiplier_tenths(self) -> u32 {
        match self {
            CadenceIntensity::Calm => 7,
            CadenceIntensity::Balanced => 10,
            CadenceIntensity::High => 14,
        }
    }
}

impl std::fmt::Display for CadenceIntensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated, normalized campaign brief.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInput {
    brand_name: String,
    brand_voice: String,
    guest_persona: String,
    signature_experience: String,
    differentiator: String,
    vip_offer: String,
    hero_destinations: Vec<String>,
    travel_season: TravelSeason,
    start_date: NaiveDate,
    campaign_length: u32,
    primary_platforms: Vec<PlatformKey>,
    cadence_intensity: CadenceIntensity,
}

impl CampaignInput {
    #[must_use]
    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    #[must_use]
    pub fn brand_voice(&self) -> &str {
        &self.brand_voice
    }

    #[must_use]
    pub fn guest_persona(&self) -> &str {
        &self.guest_persona
    }

    #[must_use]
    pub fn signature_experience(&self) -> &str {
        &self.signature_experience
    }

    #[must_use]
    pub fn differentiator(&self) -> &str {
        &self.differentiator
    }

    #[must_use]
    pub fn vip_offer(&self) -> &str {
        &self.vip_offer
    }

    /// Never empty; entries are distinct.
    #[must_use]
    pub fn hero_destinations(&self) -> &[String] {
        &self.hero_destinations
    }

    #[must_use]
    pub fn travel_season(&self) -> TravelSeason {
        self.travel_season
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Campaign length in days, within `7..=45`.
    #[must_use]
    pub fn campaign_length(&self) -> u32 {
        self.campaign_length
    }

    /// Never empty; entries are distinct and in request order.
    #[must_use]
    pub fn primary_platforms(&self) -> &[PlatformKey] {
        &self.primary_platforms
    }

    #[must_use]
    pub fn cadence_intensity(&self) -> CadenceIntensity {
        self.cadence_intensity
    }

    /// Last day of the campaign span (inclusive).
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.date_at(self.campaign_length - 1)
    }

    /// Calendar date of a zero-based day index. `validate` guarantees every index
    /// inside the campaign span resolves; later indices saturate at the range end.
    #[must_use]
    pub fn date_at(&self, day_index: u32) -> NaiveDate {
        self.start_date
            .checked_add_days(Days::new(u64::from(day_index)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Whether `date` lies inside `[start_date, end_date]`.
    #[must_use]
    pub fn spans(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date()
    }

    /// Copy of this input with a different intensity. Used to compare cadences.
    #[must_use]
    pub fn with_intensity(&self, cadence_intensity: CadenceIntensity) -> Self {
        Self {
            cadence_intensity,
            ..self.clone()
        }
    }
}

/// Validate and normalize a raw request.
///
/// Fails fast on the first violated constraint, checking in this order:
/// presence of every field, non-blank brand text, destination tokens,
/// campaign length, start date, platforms, then intensity and season.
///
/// # Errors
///
/// Returns [`ValidationError`] naming the offending field and constraint.
pub fn validate(request: &CampaignRequest) -> Result<CampaignInput, ValidationError> {
    let brand_name = required("brandName", request.brand_name.as_ref())?;
    let brand_voice = required("brandVoice", request.brand_voice.as_ref())?;
    let hero_destinations = required("heroDestinations", request.hero_destinations.as_ref())?;
    let signature_experience =
        required("signatureExperience", request.signature_experience.as_ref())?;
    let guest_persona = required("guestPersona", request.guest_persona.as_ref())?;
    let travel_season = required("travelSeason", request.travel_season.as_ref())?;
    let differentiator = required("differentiator", request.differentiator.as_ref())?;
    let vip_offer = required("vipOffer", request.vip_offer.as_ref())?;
    let start_date = required("startDate", request.start_date.as_ref())?;
    let campaign_length = required("campaignLength", request.campaign_length.as_ref())?;
    let primary_platforms = required("primaryPlatforms", request.primary_platforms.as_ref())?;
    let cadence_intensity = required("cadenceIntensity", request.cadence_intensity.as_ref())?;

    let brand_name = non_blank("brandName", brand_name)?;
    let brand_voice = non_blank("brandVoice", brand_voice)?;
    let signature_experience = non_blank("signatureExperience", signature_experience)?;
    let guest_persona = non_blank("guestPersona", guest_persona)?;
    let differentiator = non_blank("differentiator", differentiator)?;
    let vip_offer = non_blank("vipOffer", vip_offer)?;

    let hero_destinations = tokenize(hero_destinations);
    if hero_destinations.is_empty() {
        return Err(ValidationError::new("heroDestinations", Constraint::Empty));
    }

    let campaign_length = parse_campaign_length(campaign_length)?;
    let start_date = parse_start_date(start_date)?;
    if start_date
        .checked_add_days(Days::new(u64::from(campaign_length - 1)))
        .is_none()
    {
        return Err(ValidationError::new(
            "startDate",
            Constraint::InvalidDate(format!(
                "{start_date} cannot hold a {campaign_length}-day campaign"
            )),
        ));
    }
    let primary_platforms = parse_platforms(primary_platforms)?;

    let cadence_intensity = parse_variant(
        "cadenceIntensity",
        cadence_intensity,
        &CadenceIntensity::ALL[..],
        CadenceIntensity::as_str,
        "calm, balanced, high",
    )?;
    let travel_season = parse_variant(
        "travelSeason",
        travel_season,
        &TravelSeason::ALL[..],
        TravelSeason::as_str,
        "Spring, Summer, Autumn, Winter, Evergreen",
    )?;

    Ok(CampaignInput {
        brand_name,
        brand_voice,
        guest_persona,
        signature_experience,
        differentiator,
        vip_offer,
        hero_destinations,
        travel_season,
        start_date,
        campaign_length,
        primary_platforms,
        cadence_intensity,
    })
}

fn required<'a, T>(field: &'static str, value: Option<&'a T>) -> Result<&'a T, ValidationError> {
    value.ok_or(ValidationError::new(field, Constraint::Missing))
}

fn non_blank(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, Constraint::Empty));
    }
    Ok(trimmed.to_string())
}

fn is_delimiter(c: char) -> bool {
    matches!(c, ',' | ';' | '\n')
}

/// Split on comma, semicolon or newline, trim, drop empties, and keep the
/// first occurrence of each entry.
pub(crate) fn tokenize(raw: &TextOrList) -> Vec<String> {
    let pieces: Vec<&str> = match raw {
        TextOrList::Text(text) => text.split(is_delimiter).collect(),
        TextOrList::List(items) => items
            .iter()
            .flat_map(|item| item.split(is_delimiter))
            .collect(),
    };

    let mut seen = HashSet::new();
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter(|entry| seen.insert(*entry))
        .map(str::to_string)
        .collect()
}

fn parse_campaign_length(raw: &LooseNumber) -> Result<u32, ValidationError> {
    const FIELD: &str = "campaignLength";

    let days = match raw {
        LooseNumber::Integer(n) => *n,
        #[allow(clippy::cast_possible_truncation)]
        LooseNumber::Float(f) if f.is_finite() && f.fract() == 0.0 => *f as i64,
        LooseNumber::Float(f) => {
            return Err(ValidationError::new(
                FIELD,
                Constraint::NotNumeric(f.to_string()),
            ))
        }
        LooseNumber::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::new(FIELD, Constraint::NotNumeric(s.clone())))?,
    };

    let range = i64::from(MIN_CAMPAIGN_DAYS)..=i64::from(MAX_CAMPAIGN_DAYS);
    if !range.contains(&days) {
        return Err(ValidationError::new(
            FIELD,
            Constraint::OutOfRange {
                min: *range.start(),
                max: *range.end(),
                actual: days,
            },
        ));
    }

    u32::try_from(days)
        .map_err(|_| ValidationError::new(FIELD, Constraint::NotNumeric(days.to_string())))
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, keeping only the UTC date.
fn parse_start_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("startDate", Constraint::Empty));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| {
            DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.with_timezone(&Utc).date_naive())
        })
        .map_err(|_| {
            ValidationError::new("startDate", Constraint::InvalidDate(trimmed.to_string()))
        })
}

fn parse_platforms(raw: &TextOrList) -> Result<Vec<PlatformKey>, ValidationError> {
    const FIELD: &str = "primaryPlatforms";

    let tokens = tokenize(raw);
    if tokens.is_empty() {
        return Err(ValidationError::new(FIELD, Constraint::Empty));
    }

    let mut platforms = Vec::with_capacity(tokens.len());
    for token in &tokens {
        let key = token
            .parse::<PlatformKey>()
            .map_err(|e| ValidationError::new(FIELD, Constraint::UnknownPlatform(e.0)))?;
        if !platforms.contains(&key) {
            platforms.push(key);
        }
    }
    Ok(platforms)
}

fn parse_variant<T: Copy>(
    field: &'static str,
    raw: &str,
    variants: &[T],
    name: impl Fn(T) -> &'static str,
    expected: &'static str,
) -> Result<T, ValidationError> {
    let wanted = raw.trim();
    variants
        .iter()
        .copied()
        .find(|v| name(*v).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| {
            ValidationError::new(
                field,
                Constraint::NotInEnum {
                    value: wanted.to_string(),
                    expected,
                },
            )
        })
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
