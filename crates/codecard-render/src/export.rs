//! Export layout: builds the 400×500 card document from a summary.
//!
//! Layout constants mirror the on-screen card: a tinted 60-unit header band,
//! bold title, stat rows every 40 units with right-anchored values, and for
//! LeetCode a row of pill-shaped badge labels. Pills are laid out
//! left-to-right at a fixed 140-unit pitch with no wrapping; a long badge
//! list extends past the canvas (accepted limitation).

use codecard_core::{Platform, ProfileSummary};

use crate::document::{FontWeight, Shape, TextAnchor, VectorDocument};
use crate::model::{render, CardModel};

const CANVAS_WIDTH: i32 = 400;
const CANVAS_HEIGHT: i32 = 500;
const HEADER_HEIGHT: i32 = 60;

const ROW_FIRST_Y: i32 = 100;
const ROW_PITCH: i32 = 40;
const LABEL_X: i32 = 20;
const VALUE_X: i32 = 380;
const LABEL_FILL: &str = "#4B5563";

const BADGE_HEADING_Y: i32 = 280;
const PILL_Y: i32 = 300;
const PILL_PITCH: i32 = 140;
const PILL_WIDTH: i32 = 130;
const PILL_HEIGHT: i32 = 30;
const PILL_RADIUS: i32 = 15;
const PILL_FILL: &str = "#F3F4F6";

fn header_fill(platform: Platform) -> &'static str {
    match platform {
        Platform::Leetcode => "#fff8f0",
        Platform::Codechef => "#fefce8",
    }
}

/// Builds the exportable vector document for a summary.
///
/// Pure and deterministic; the caller decides where the serialized SVG goes.
#[must_use]
pub fn export(summary: &ProfileSummary) -> VectorDocument {
    let platform = summary.platform();
    let card = render(summary);
    let mut doc = VectorDocument::new(CANVAS_WIDTH, CANVAS_HEIGHT);

    doc.push(Shape::Rect {
        x: 0,
        y: 0,
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        rx: 0,
        fill: "white".to_owned(),
    });
    doc.push(Shape::Rect {
        x: 0,
        y: 0,
        width: CANVAS_WIDTH,
        height: HEADER_HEIGHT,
        rx: 0,
        fill: header_fill(platform).to_owned(),
    });
    doc.push(Shape::Text {
        x: LABEL_X,
        y: 40,
        content: card.title.clone(),
        anchor: TextAnchor::Start,
        font_size: Some(24),
        font_weight: Some(FontWeight::Bold),
        fill: Some("black".to_owned()),
    });

    push_rows(&mut doc, &card);
    push_badges(&mut doc, &card);

    doc
}

fn push_rows(doc: &mut VectorDocument, card: &CardModel) {
    for (index, row) in card.rows.iter().enumerate() {
        let y = ROW_FIRST_Y + ROW_PITCH * i32::try_from(index).unwrap_or(i32::MAX);
        doc.push(Shape::Text {
            x: LABEL_X,
            y,
            content: row.label.clone(),
            anchor: TextAnchor::Start,
            font_size: None,
            font_weight: None,
            fill: Some(LABEL_FILL.to_owned()),
        });
        doc.push(Shape::Text {
            x: VALUE_X,
            y,
            content: row.value.clone(),
            anchor: TextAnchor::End,
            font_size: None,
            font_weight: Some(FontWeight::SemiBold),
            fill: None,
        });
    }
}

fn push_badges(doc: &mut VectorDocument, card: &CardModel) {
    let Some(badges) = &card.badges else {
        return;
    };

    // The heading renders even when the badge list is empty.
    doc.push(Shape::Text {
        x: LABEL_X,
        y: BADGE_HEADING_Y,
        content: "Strong Areas:".to_owned(),
        anchor: TextAnchor::Start,
        font_size: Some(14),
        font_weight: None,
        fill: Some(LABEL_FILL.to_owned()),
    });

    for (index, badge) in badges.iter().enumerate() {
        let offset = PILL_PITCH * i32::try_from(index).unwrap_or(i32::MAX);
        doc.push(Shape::Rect {
            x: LABEL_X + offset,
            y: PILL_Y,
            width: PILL_WIDTH,
            height: PILL_HEIGHT,
            rx: PILL_RADIUS,
            fill: PILL_FILL.to_owned(),
        });
        doc.push(Shape::Text {
            x: LABEL_X + PILL_WIDTH / 2 + offset,
            y: PILL_Y + 20,
            content: badge.clone(),
            anchor: TextAnchor::Middle,
            font_size: None,
            font_weight: None,
            fill: Some("black".to_owned()),
        });
    }
}
