//! Auto-layout → flexbox mapping.
//!
//! Called only for nodes whose auto-layout is active (mode set, flex
//! emission enabled). Direction, gap, padding shorthands, alignment and
//! AUTO-sizing overrides all come from the node's layout metadata.

use figweave_schema::{AxisSizing, CounterAxisAlign, DesignNode, LayoutMode, PrimaryAxisAlign};

use crate::css::{decl, Declaration};
use crate::{number, px};

pub(crate) fn resolve(node: &DesignNode, out: &mut Vec<Declaration>) {
    let direction = match node.layout_mode {
        Some(LayoutMode::Horizontal) => "row",
        Some(LayoutMode::Vertical) => "column",
        _ => return,
    };

    out.push(decl("display", "flex"));
    out.push(decl("flex-direction", direction));

    if let Some(spacing) = node.item_spacing {
        if spacing > 0.0 {
            out.push(decl("gap", px(spacing)));
        }
    }

    resolve_padding(node, out);

    if let Some(align) = node.primary_axis_align_items {
        let value = match align {
            PrimaryAxisAlign::Min => Some("flex-start"),
            PrimaryAxisAlign::Max => Some("flex-end"),
            PrimaryAxisAlign::Center => Some("center"),
            PrimaryAxisAlign::SpaceBetween => Some("space-between"),
            PrimaryAxisAlign::Other => None,
        };
        if let Some(value) = value {
            out.push(decl("justify-content", value));
        }
    }

    if let Some(align) = node.counter_axis_align_items {
        let value = match align {
            CounterAxisAlign::Min => Some("flex-start"),
            CounterAxisAlign::Max => Some("flex-end"),
            CounterAxisAlign::Center => Some("center"),
            CounterAxisAlign::Baseline => Some("baseline"),
            CounterAxisAlign::Other => None,
        };
        if let Some(value) = value {
            out.push(decl("align-items", value));
        }
    }

    // AUTO sizing hugs content along that axis
    let (primary, counter) = if direction == "row" {
        ("width", "height")
    } else {
        ("height", "width")
    };
    if node.primary_axis_sizing_mode == Some(AxisSizing::Auto) {
        out.push(decl(primary, "auto"));
    }
    if node.counter_axis_sizing_mode == Some(AxisSizing::Auto) {
        out.push(decl(counter, "auto"));
    }

    if let Some(grow) = node.layout_grow {
        if grow > 0.0 {
            out.push(decl("flex-grow", number(grow)));
        }
    }
}

/// Padding shorthand: a single value when every present side agrees, the
/// four-value form when all four sides are present, nothing otherwise.
fn resolve_padding(node: &DesignNode, out: &mut Vec<Declaration>) {
    let sides = [
        node.padding_top,
        node.padding_right,
        node.padding_bottom,
        node.padding_left,
    ];
    let present: Vec<f64> = sides.iter().flatten().copied().collect();

    if present.is_empty() {
        return;
    }
    if present.iter().all(|side| *side == present[0]) {
        out.push(decl("padding", px(present[0])));
    } else if present.len() == 4 {
        out.push(decl(
            "padding",
            format!(
                "{} {} {} {}",
                px(present[0]),
                px(present[1]),
                px(present[2]),
                px(present[3])
            ),
        ));
    }
}
