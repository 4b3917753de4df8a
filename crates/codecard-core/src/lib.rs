//! Shared types for the codecard workspace: the [`Platform`] identifier,
//! the normalized [`ProfileSummary`] model with its per-platform
//! placeholders, and environment-driven application configuration.

mod app_config;
mod config;
mod platform;
mod summary;

pub use app_config::{AppConfig, FetchConfig};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use platform::{Platform, UnknownPlatform};
pub use summary::{CodechefSummary, LeetcodeSummary, ProfileSummary};
