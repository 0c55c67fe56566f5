//! Deterministic multi-platform campaign planning for luxury travel brands.
//!
//! The engine exposes two operations: [`validate`] turns a loosely-typed
//! [`CampaignRequest`] into a [`CampaignInput`], and [`generate_plan`] turns
//! that input into a complete [`CampaignPlan`]. Both are pure; the rest of the
//! crate is the configuration the CLI shell needs.

pub mod aggregate;
pub mod app_config;
pub mod config;
pub mod error;
pub mod input;
pub mod plan;
pub mod platforms;
pub mod scheduler;
pub mod synth;

pub use aggregate::EngagementPlaybookEntry;
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, load_request};
pub use error::{ConfigError, Constraint, PlanError, ValidationError};
pub use input::{
    validate, CadenceIntensity, CampaignInput, CampaignRequest, LooseNumber, TextOrList,
    TravelSeason,
};
pub use plan::{audit_plan, generate_plan, plan_from_request, CampaignPlan};
pub use platforms::{catalog, profile, PlatformKey, PlatformProfile};
pub use scheduler::{CampaignPhase, ScheduleSlot};
pub use synth::ScheduledPost;
