//! The on-screen display model: a fixed-layout card of labeled rows.

use serde::Serialize;

use codecard_core::ProfileSummary;

/// One labeled stat row on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatRow {
    pub label: String,
    pub value: String,
}

/// Fixed-layout visual structure for one platform card.
///
/// `badges` is `Some` for platforms with a strong-areas section (LeetCode),
/// even when the list itself is empty; `None` means the section is absent
/// entirely (CodeChef).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardModel {
    pub title: String,
    pub rows: Vec<StatRow>,
    pub badges: Option<Vec<String>>,
}

fn row(label: &str, value: impl ToString) -> StatRow {
    StatRow {
        label: label.to_owned(),
        value: value.to_string(),
    }
}

/// Pure mapping from a summary to its card. Identical input yields
/// identical output.
#[must_use]
pub fn render(summary: &ProfileSummary) -> CardModel {
    let title = format!("{} Report", summary.platform().display_name());
    match summary {
        ProfileSummary::Leetcode(s) => CardModel {
            title,
            rows: vec![
                row("Problems Solved", s.solved),
                row("Global Ranking", format!("#{}", s.ranking)),
                row("Contest Rating", s.contest_rating),
                row("Contests Participated", s.contests),
            ],
            badges: Some(s.badges.clone()),
        },
        ProfileSummary::Codechef(s) => CardModel {
            title,
            rows: vec![
                row("Current Rating", s.rating),
                row("Division", s.division),
                row("Problems Solved", s.problems_solved),
                row("Contests Participated", s.contests_participated),
                row("Highest Contest Rank", format!("#{}", s.highest_rank)),
            ],
            badges: None,
        },
    }
}
