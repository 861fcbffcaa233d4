//! Text style resolution and heading-tag selection.
//!
//! Applies only to `TEXT` nodes. The tag comes from a font-size cascade;
//! the text color comes from the node's first visible fill, solid fills
//! only (gradient-filled text keeps no explicit color).

use figweave_schema::{
    DesignNode, PaintType, TextAlignHorizontal, TextCase, TextDecoration,
};

use crate::css::{decl, Declaration};
use crate::paint::css_color;
use crate::{number, px};

/// Heading/paragraph tag for a text node, by font size.
pub(crate) fn tag_for(node: &DesignNode) -> &'static str {
    let font_size = node
        .text_style
        .as_ref()
        .and_then(|style| style.font_size)
        .unwrap_or(16.0);

    if font_size >= 32.0 {
        "h1"
    } else if font_size >= 24.0 {
        "h2"
    } else if font_size >= 20.0 {
        "h3"
    } else if font_size >= 18.0 {
        "h4"
    } else if font_size >= 16.0 {
        "h5"
    } else {
        "p"
    }
}

pub(crate) fn resolve(node: &DesignNode, out: &mut Vec<Declaration>) {
    if let Some(style) = &node.text_style {
        if let Some(family) = &style.font_family {
            out.push(decl("font-family", format!("\"{family}\", sans-serif")));
        }
        if let Some(size) = style.font_size {
            out.push(decl("font-size", px(size)));
        }
        if let Some(weight) = style.font_weight {
            out.push(decl("font-weight", number(weight)));
        }
        if let Some(spacing) = style.letter_spacing {
            out.push(decl("letter-spacing", px(spacing)));
        }
        if let Some(line_height) = style.line_height_px {
            out.push(decl("line-height", px(line_height)));
        }

        if let Some(align) = style.text_align_horizontal {
            let value = match align {
                TextAlignHorizontal::Left => Some("left"),
                TextAlignHorizontal::Right => Some("right"),
                TextAlignHorizontal::Center => Some("center"),
                TextAlignHorizontal::Justified => Some("justify"),
                TextAlignHorizontal::Other => None,
            };
            if let Some(value) = value {
                out.push(decl("text-align", value));
            }
        }

        if let Some(case) = style.text_case {
            let value = match case {
                TextCase::Upper => Some("uppercase"),
                TextCase::Lower => Some("lowercase"),
                TextCase::Title => Some("capitalize"),
                TextCase::Other => None,
            };
            if let Some(value) = value {
                out.push(decl("text-transform", value));
            }
        }

        if let Some(decoration) = style.text_decoration {
            let value = match decoration {
                TextDecoration::Underline => Some("underline"),
                TextDecoration::Strikethrough => Some("line-through"),
                TextDecoration::Other => None,
            };
            if let Some(value) = value {
                out.push(decl("text-decoration", value));
            }
        }
    }

    // Color from the first visible fill, solid only
    if let Some(fill) = node.fills.iter().find(|paint| paint.visible) {
        if fill.paint_type == PaintType::Solid {
            if let Some(color) = &fill.color {
                out.push(decl("color", css_color(color, fill.opacity)));
            }
        }
    }
}
