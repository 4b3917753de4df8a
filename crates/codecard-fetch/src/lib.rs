//! Profile fetching for the two supported platforms.
//!
//! [`ProfileClient`] wraps `reqwest` with bearer credentials and typed
//! response deserialization; [`ProfileFetcher`] layers the soft-failure
//! policy on top: any fetch error is logged and replaced with the platform's
//! placeholder record, so callers always receive a complete
//! [`codecard_core::ProfileSummary`].

mod client;
mod error;
mod fetcher;
mod types;

pub use client::ProfileClient;
pub use error::FetchError;
pub use fetcher::{FetchOutcome, ProfileFetcher};
