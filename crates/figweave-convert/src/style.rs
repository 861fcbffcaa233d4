//! Per-node style resolution.
//!
//! Resolves base geometry (dimensions, opacity, corner radius) and composes
//! the layout, paint, effect and text resolvers into one declaration list.
//! Absent metadata contributes no declarations.

use figweave_schema::{DesignNode, LayoutMode, NodeType};

use crate::css::{decl, Declaration};
use crate::{effect, layout, paint, px, px_round, text, ConversionOptions, ImageHandle};

/// Resolve all style declarations for one node.
///
/// Declaration order is fixed (geometry, layout, paint, stroke, effects,
/// text) so output is deterministic.
pub(crate) fn resolve_node(
    node: &DesignNode,
    options: &ConversionOptions,
    images: &mut Vec<ImageHandle>,
) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    let auto_layout = matches!(
        node.layout_mode,
        Some(LayoutMode::Horizontal | LayoutMode::Vertical)
    ) && options.preserve_auto_layout;

    // Pixel dimensions, unless auto-layout manages the box
    if !auto_layout {
        if let Some(bounds) = &node.bounding_box {
            declarations.push(decl("width", px_round(bounds.width)));
            declarations.push(decl("height", px_round(bounds.height)));
        }
    }

    if let Some(opacity) = node.opacity {
        if opacity < 1.0 {
            declarations.push(decl("opacity", format!("{opacity:.2}")));
        }
    }

    // Corner radius; ellipses are always fully rounded
    if node.node_type == NodeType::Ellipse {
        declarations.push(decl("border-radius", "50%"));
    } else if let Some([tl, tr, br, bl]) = node.corner_radii {
        declarations.push(decl(
            "border-radius",
            format!("{} {} {} {}", px(tl), px(tr), px(br), px(bl)),
        ));
    } else if let Some(radius) = node.corner_radius {
        declarations.push(decl("border-radius", px(radius)));
    }

    if auto_layout && options.use_flexbox {
        layout::resolve(node, &mut declarations);
    }

    if node.node_type == NodeType::Text {
        text::resolve(node, &mut declarations);
    } else {
        paint::resolve_fill(node, &mut declarations, images);
    }
    paint::resolve_stroke(node, &mut declarations);

    if options.convert_effects {
        effect::resolve(node, &mut declarations);
    }

    declarations
}
