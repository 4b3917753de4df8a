//! The normalized profile model shared by the fetcher, renderer, and HTTP
//! surface.
//!
//! A [`ProfileSummary`] is always fully populated: the fetcher substitutes a
//! complete placeholder record on failure rather than exposing a partial or
//! null state to the renderer. JSON field names match the original platform
//! payloads (camelCase), so the server can relay a summary verbatim.

use serde::{Deserialize, Serialize};

use crate::Platform;

/// Normalized record of a user's stats on one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileSummary {
    Leetcode(LeetcodeSummary),
    Codechef(CodechefSummary),
}

/// LeetCode profile stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetcodeSummary {
    pub username: String,
    pub solved: u32,
    pub ranking: u32,
    pub contests: u32,
    pub contest_rating: i32,
    /// Topic badges in upstream order; empty when the platform reports none.
    #[serde(default)]
    pub badges: Vec<String>,
}

/// CodeChef profile stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodechefSummary {
    pub username: String,
    pub rating: i32,
    pub division: i32,
    pub contests_participated: u32,
    pub problems_solved: u32,
    pub highest_rank: u32,
}

impl ProfileSummary {
    /// The platform this summary belongs to.
    #[must_use]
    pub fn platform(&self) -> Platform {
        match self {
            ProfileSummary::Leetcode(_) => Platform::Leetcode,
            ProfileSummary::Codechef(_) => Platform::Codechef,
        }
    }

    /// The static record substituted when a fetch fails.
    #[must_use]
    pub fn placeholder(platform: Platform) -> Self {
        match platform {
            Platform::Leetcode => ProfileSummary::Leetcode(LeetcodeSummary {
                username: "techmaster".to_owned(),
                solved: 324,
                ranking: 45678,
                contests: 15,
                contest_rating: 1756,
                badges: vec![
                    "Dynamic Programming".to_owned(),
                    "Arrays".to_owned(),
                    "Trees".to_owned(),
                ],
            }),
            Platform::Codechef => ProfileSummary::Codechef(CodechefSummary {
                username: "techmaster".to_owned(),
                rating: 1892,
                division: 2,
                contests_participated: 12,
                problems_solved: 245,
                highest_rank: 234,
            }),
        }
    }
}
