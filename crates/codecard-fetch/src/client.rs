//! HTTP client for the platform profile APIs.
//!
//! Wraps `reqwest` with per-platform base URLs, bearer credentials, and
//! typed response deserialization. Both platforms expose the same path
//! (`/api/users/{username}`); only the host and the payload shape differ.

use std::time::Duration;

use reqwest::{Client, Url};

use codecard_core::{CodechefSummary, FetchConfig, LeetcodeSummary, Platform, ProfileSummary};

use crate::error::FetchError;
use crate::types::{CodechefEnvelope, LeetcodeUser};

const DEFAULT_LEETCODE_BASE_URL: &str = "https://leetcode.com";
const DEFAULT_CODECHEF_BASE_URL: &str = "https://api.codechef.com";

/// Client for the upstream platform profile APIs.
///
/// Holds one `reqwest::Client` shared across both platforms. Use
/// [`ProfileClient::new`] for production or [`ProfileClient::with_base_urls`]
/// to point at a mock server in tests.
pub struct ProfileClient {
    client: Client,
    config: FetchConfig,
    leetcode_base: Url,
    codechef_base: Url,
}

impl ProfileClient {
    /// Creates a client pointed at the production platform hosts.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: FetchConfig, timeout_secs: u64) -> Result<Self, FetchError> {
        Self::with_base_urls(
            config,
            timeout_secs,
            DEFAULT_LEETCODE_BASE_URL,
            DEFAULT_CODECHEF_BASE_URL,
        )
    }

    /// Creates a client with custom base URLs (for testing with wiremock, or
    /// for staging hosts configured via the environment).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FetchError::InvalidBaseUrl`] if either
    /// URL fails to parse.
    pub fn with_base_urls(
        config: FetchConfig,
        timeout_secs: u64,
        leetcode_base: &str,
        codechef_base: &str,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("codecard/0.1 (profile-cards)")
            .build()?;

        Ok(Self {
            client,
            config,
            leetcode_base: parse_base_url(leetcode_base)?,
            codechef_base: parse_base_url(codechef_base)?,
        })
    }

    /// Fetches and normalizes a profile from the given platform.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] on network failure or non-2xx HTTP status.
    /// - [`FetchError::Deserialize`] if the response does not match the
    ///   platform's expected shape.
    pub async fn fetch_summary(
        &self,
        platform: Platform,
        username: &str,
    ) -> Result<ProfileSummary, FetchError> {
        match platform {
            Platform::Leetcode => Ok(ProfileSummary::Leetcode(
                self.fetch_leetcode(username).await?,
            )),
            Platform::Codechef => Ok(ProfileSummary::Codechef(
                self.fetch_codechef(username).await?,
            )),
        }
    }

    async fn fetch_leetcode(&self, username: &str) -> Result<LeetcodeSummary, FetchError> {
        let url = user_url(&self.leetcode_base, username)?;
        let body = self.request_json(&url, Platform::Leetcode).await?;
        let user: LeetcodeUser =
            serde_json::from_value(body).map_err(|e| FetchError::Deserialize {
                context: format!("leetcode({username})"),
                source: e,
            })?;
        Ok(user.into())
    }

    async fn fetch_codechef(&self, username: &str) -> Result<CodechefSummary, FetchError> {
        let url = user_url(&self.codechef_base, username)?;
        let body = self.request_json(&url, Platform::Codechef).await?;
        let envelope: CodechefEnvelope =
            serde_json::from_value(body).map_err(|e| FetchError::Deserialize {
                context: format!("codechef({username})"),
                source: e,
            })?;
        Ok(envelope.result.data.content.into())
    }

    /// Sends a GET with the platform's bearer credential, asserts a 2xx
    /// status, and parses the body as JSON.
    async fn request_json(
        &self,
        url: &Url,
        platform: Platform,
    ) -> Result<serde_json::Value, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(self.config.api_key(platform))
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

/// Builds `{base}/api/users/{username}` with the username as a proper path
/// segment so reserved characters are percent-encoded.
fn user_url(base: &Url, username: &str) -> Result<Url, FetchError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| FetchError::InvalidBaseUrl {
            url: base.to_string(),
            reason: "cannot be a base".to_string(),
        })?
        .pop_if_empty()
        .extend(["api", "users", username]);
    Ok(url)
}

fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    // Trailing slashes would otherwise produce empty path segments.
    let trimmed = raw.trim_end_matches('/');
    Url::parse(trimmed).map_err(|e| FetchError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}
