//! HTTP surface for the profile-card service.

pub mod api;
pub mod middleware;
