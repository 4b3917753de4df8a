//! Typed drawing primitives and their SVG serialization.
//!
//! A [`VectorDocument`] is a fixed-size canvas plus an ordered list of
//! [`Shape`]s. Layout code works with the primitives; only
//! [`VectorDocument::to_svg`] produces text, escaping content at that
//! boundary.

use std::fmt::Write;

/// Horizontal text anchoring. `Start` is SVG's default and emits no
/// attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Bold,
    SemiBold,
}

impl FontWeight {
    fn as_svg(self) -> &'static str {
        match self {
            FontWeight::Bold => "bold",
            FontWeight::SemiBold => "600",
        }
    }
}

/// A single drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        /// Corner radius; 0 emits no `rx` attribute.
        rx: i32,
        fill: String,
    },
    Text {
        x: i32,
        y: i32,
        content: String,
        anchor: TextAnchor,
        font_size: Option<u32>,
        font_weight: Option<FontWeight>,
        fill: Option<String>,
    },
}

/// A self-contained vector image: fixed canvas plus ordered shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorDocument {
    pub width: i32,
    pub height: i32,
    pub shapes: Vec<Shape>,
}

impl VectorDocument {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Serializes the document as a standalone UTF-8 SVG string.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">",
            self.width, self.height
        );
        for shape in &self.shapes {
            match shape {
                Shape::Rect {
                    x,
                    y,
                    width,
                    height,
                    rx,
                    fill,
                } => {
                    let _ = write!(
                        out,
                        "  <rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\""
                    );
                    if *rx > 0 {
                        let _ = write!(out, " rx=\"{rx}\"");
                    }
                    let _ = writeln!(out, " fill=\"{}\"/>", escape_xml(fill));
                }
                Shape::Text {
                    x,
                    y,
                    content,
                    anchor,
                    font_size,
                    font_weight,
                    fill,
                } => {
                    let _ = write!(out, "  <text x=\"{x}\" y=\"{y}\"");
                    match anchor {
                        TextAnchor::Start => {}
                        TextAnchor::Middle => out.push_str(" text-anchor=\"middle\""),
                        TextAnchor::End => out.push_str(" text-anchor=\"end\""),
                    }
                    if let Some(size) = font_size {
                        let _ = write!(out, " font-size=\"{size}\"");
                    }
                    if let Some(weight) = font_weight {
                        let _ = write!(out, " font-weight=\"{}\"", weight.as_svg());
                    }
                    if let Some(fill) = fill {
                        let _ = write!(out, " fill=\"{}\"", escape_xml(fill));
                    }
                    let _ = writeln!(out, ">{}</text>", escape_xml(content));
                }
            }
        }
        out.push_str("</svg>\n");
        out
    }
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_root_carries_canvas_size() {
        let doc = VectorDocument::new(400, 500);
        let svg = doc.to_svg();
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"500\">"
        ));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn rect_omits_zero_corner_radius() {
        let mut doc = VectorDocument::new(10, 10);
        doc.push(Shape::Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 10,
            rx: 0,
            fill: "white".to_owned(),
        });
        assert!(!doc.to_svg().contains("rx="));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut doc = VectorDocument::new(10, 10);
        doc.push(Shape::Text {
            x: 1,
            y: 2,
            content: "Trees & <Graphs>".to_owned(),
            anchor: TextAnchor::Start,
            font_size: None,
            font_weight: None,
            fill: None,
        });
        let svg = doc.to_svg();
        assert!(svg.contains(">Trees &amp; &lt;Graphs&gt;</text>"));
    }

    #[test]
    fn anchor_and_weight_attributes_render() {
        let mut doc = VectorDocument::new(10, 10);
        doc.push(Shape::Text {
            x: 380,
            y: 100,
            content: "324".to_owned(),
            anchor: TextAnchor::End,
            font_size: None,
            font_weight: Some(FontWeight::SemiBold),
            fill: None,
        });
        let svg = doc.to_svg();
        assert!(svg.contains("text-anchor=\"end\""));
        assert!(svg.contains("font-weight=\"600\""));
    }
}
