use codecard_core::{Platform, ProfileSummary};

use crate::client::ProfileClient;

/// Result of a soft-failure fetch: always a complete summary, with a flag
/// telling the caller whether the placeholder was substituted.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub summary: ProfileSummary,
    pub degraded: bool,
}

/// Soft-failure layer over [`ProfileClient`].
///
/// Transport failures, upstream error statuses, and payload-shape mismatches
/// all collapse into one outcome: a warning log entry plus the platform's
/// placeholder record. Callers can alert on the logged error variant to tell
/// "upstream down" from "upstream changed shape"; the returned value does
/// not distinguish them.
pub struct ProfileFetcher {
    client: ProfileClient,
}

impl ProfileFetcher {
    #[must_use]
    pub fn new(client: ProfileClient) -> Self {
        Self { client }
    }

    /// Fetches a profile, never failing outwardly.
    ///
    /// On any upstream error the platform's placeholder is returned with
    /// `degraded = true` and the cause is logged at warn level.
    pub async fn fetch(&self, platform: Platform, username: &str) -> FetchOutcome {
        match self.client.fetch_summary(platform, username).await {
            Ok(summary) => FetchOutcome {
                summary,
                degraded: false,
            },
            Err(error) => {
                tracing::warn!(
                    %platform,
                    username,
                    error = %error,
                    "upstream fetch failed, substituting placeholder"
                );
                FetchOutcome {
                    summary: ProfileSummary::placeholder(platform),
                    degraded: true,
                }
            }
        }
    }
}
