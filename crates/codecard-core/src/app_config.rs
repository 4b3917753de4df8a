use std::net::SocketAddr;

use crate::Platform;

/// Bearer credentials for the upstream platform APIs.
///
/// Passed explicitly into the fetcher at construction; nothing in the
/// workspace reads credentials from the ambient environment after startup.
#[derive(Clone, Default)]
pub struct FetchConfig {
    pub leetcode_api_key: String,
    pub codechef_api_key: String,
}

impl FetchConfig {
    /// The bearer credential for one platform. May be empty; absence is not
    /// validated up front and surfaces as an upstream rejection.
    #[must_use]
    pub fn api_key(&self, platform: Platform) -> &str {
        match platform {
            Platform::Leetcode => &self.leetcode_api_key,
            Platform::Codechef => &self.codechef_api_key,
        }
    }
}

impl std::fmt::Debug for FetchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchConfig")
            .field("leetcode_api_key", &"[redacted]")
            .field("codechef_api_key", &"[redacted]")
            .finish()
    }
}

/// Process-wide configuration assembled from environment variables.
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub leetcode_base_url: String,
    pub codechef_base_url: String,
    pub fetch: FetchConfig,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("leetcode_base_url", &self.leetcode_base_url)
            .field("codechef_base_url", &self.codechef_base_url)
            .field("fetch", &self.fetch)
            .finish()
    }
}
