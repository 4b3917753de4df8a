//! Platform API response types.
//!
//! Each platform returns its own JSON shape; these structs model the raw
//! payloads, and the `From` impls map them into the normalized summary
//! variants. CodeChef wraps its data in a three-level
//! `result.data.content` envelope.

use serde::Deserialize;

use codecard_core::{CodechefSummary, LeetcodeSummary};

/// Raw LeetCode user payload: `GET /api/users/{username}`.
#[derive(Debug, Deserialize)]
pub(crate) struct LeetcodeUser {
    pub username: String,
    #[serde(rename = "totalSolved")]
    pub total_solved: u32,
    #[serde(rename = "globalRanking")]
    pub global_ranking: u32,
    #[serde(rename = "totalContests")]
    pub total_contests: u32,
    pub rating: i32,
    /// Absent for accounts without topic badges.
    #[serde(default)]
    pub badges: Vec<String>,
}

/// Envelope for the CodeChef user payload: `{ "result": { "data": { "content": ... } } }`.
#[derive(Debug, Deserialize)]
pub(crate) struct CodechefEnvelope {
    pub result: CodechefResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CodechefResult {
    pub data: CodechefData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CodechefData {
    pub content: CodechefContent,
}

/// Raw CodeChef user record inside the envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CodechefContent {
    pub username: String,
    pub rating: i32,
    pub division: i32,
    pub contests_participated: u32,
    pub problems_solved: u32,
    pub highest_rank: u32,
}

impl From<LeetcodeUser> for LeetcodeSummary {
    fn from(user: LeetcodeUser) -> Self {
        LeetcodeSummary {
            username: user.username,
            solved: user.total_solved,
            ranking: user.global_ranking,
            contests: user.total_contests,
            contest_rating: user.rating,
            badges: user.badges,
        }
    }
}

impl From<CodechefContent> for CodechefSummary {
    fn from(content: CodechefContent) -> Self {
        CodechefSummary {
            username: content.username,
            rating: content.rating,
            division: content.division,
            contests_participated: content.contests_participated,
            problems_solved: content.problems_solved,
            highest_rank: content.highest_rank,
        }
    }
}
