//! HTML generation.
//!
//! Walks the design node tree depth-first and emits HTML fragments,
//! resolving each node's styles into the shared class map on the way.
//! Container tags are inferred from node names; text tags come from the
//! font-size cascade in [`crate::text`].

use figweave_schema::{DesignNode, NodeType};

use crate::{css, style, text, ConversionContext, ConversionOptions};

/// Convert one node (and its subtree) into an HTML fragment.
pub(crate) fn convert_node(
    node: &DesignNode,
    options: &ConversionOptions,
    ctx: &mut ConversionContext,
    depth: usize,
) -> String {
    let class = css::sanitize(&node.name);
    let declarations = style::resolve_node(node, options, &mut ctx.images);
    ctx.styles.set(&class, declarations);

    let indent = "  ".repeat(depth);

    match &node.node_type {
        // Text nodes are leaves; children are never processed
        NodeType::Text => {
            let tag = text::tag_for(node);
            let content = escape_text(node.characters.as_deref().unwrap_or(""));
            format!("{indent}<{tag} class=\"{class}\">{content}</{tag}>\n")
        }

        NodeType::Rectangle | NodeType::Ellipse => {
            format!("{indent}<div class=\"{class}\"></div>\n")
        }

        // No path extraction; vectors render as labeled placeholders
        kind if kind.is_vector_like() => {
            format!(
                "{indent}<div class=\"{class}\" aria-label=\"{}\"></div>\n",
                escape_attr(&node.name)
            )
        }

        kind if kind.is_container() || !node.children.is_empty() => {
            let tag = infer_tag(&node.name);
            let mut out = format!("{indent}<{tag} class=\"{class}\">");
            if node.children.is_empty() {
                out.push_str(&format!("</{tag}>\n"));
            } else {
                out.push('\n');
                for child in &node.children {
                    out.push_str(&convert_node(child, options, ctx, depth + 1));
                }
                out.push_str(&indent);
                out.push_str(&format!("</{tag}>\n"));
            }
            out
        }

        // Unrecognized childless kinds degrade to an empty leaf
        _ => format!("{indent}<div class=\"{class}\"></div>\n"),
    }
}

/// Name-heuristic tag table. Priority-ordered: the first matching entry
/// wins, so reordering changes output for ambiguous names (a node named
/// "nav-item" matches `nav`, not `item`).
const TAG_RULES: &[(&[&str], &str)] = &[
    (&["nav", "menu"], "nav"),
    (&["header"], "header"),
    (&["footer"], "footer"),
    (&["section"], "section"),
    (&["article"], "article"),
    (&["aside", "sidebar"], "aside"),
    (&["main"], "main"),
    (&["button", "btn"], "button"),
    (&["link"], "a"),
    (&["image", "img", "photo"], "figure"),
    (&["list"], "ul"),
    (&["item"], "li"),
];

/// Infer a semantic HTML tag from a node's human-given name.
pub fn infer_tag(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    for (patterns, tag) in TAG_RULES {
        if patterns.iter().any(|pattern| lower.contains(pattern)) {
            return tag;
        }
    }
    "div"
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
