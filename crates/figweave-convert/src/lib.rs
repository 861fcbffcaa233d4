//! Figweave Converter
//!
//! Compiles a design document tree into two outputs: semantic HTML and a
//! stylesheet that visually reproduces the design. The conversion is a
//! deterministic depth-first walk; each visited node resolves its styles
//! into a shared ordered class map and returns an HTML fragment, and the
//! root call aggregates the map into a stylesheet.
//!
//! ```text
//! DesignNode tree → convert() → ConversionResult { html, css, images }
//! ```

pub mod css;
mod effect;
pub mod html;
mod layout;
mod paint;
mod style;
mod text;

use figweave_schema::DesignNode;
use serde::{Deserialize, Serialize};

use crate::css::StyleSheet;

/// Flags recognized by the converter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionOptions {
    /// Emit flexbox from auto-layout metadata; otherwise treat nodes as plain boxes.
    pub preserve_auto_layout: bool,
    /// Emit shadow and blur declarations.
    pub convert_effects: bool,
    /// Gate flex emission independently of `preserve_auto_layout`.
    pub use_flexbox: bool,
    /// Accepted but unused; read by the variant-import collaborator.
    pub import_variants: bool,
    /// Accepted but unused; read by the Tailwind-output collaborator.
    pub generate_tailwind: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            preserve_auto_layout: true,
            convert_effects: true,
            use_flexbox: true,
            import_variants: false,
            generate_tailwind: false,
        }
    }
}

/// An image fill reference collected during conversion.
///
/// The converter only records references; a downstream resolver turns each
/// `image_ref` into a usable URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageHandle {
    pub node_id: String,
    pub image_ref: String,
}

/// The converted output for one document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub html: String,
    pub css: String,
    pub images: Vec<ImageHandle>,
}

/// Accumulators threaded through a single `convert` call.
/// Created fresh per call; the converter holds no state between invocations.
#[derive(Default)]
pub(crate) struct ConversionContext {
    pub styles: StyleSheet,
    pub images: Vec<ImageHandle>,
}

/// Convert a design document tree into HTML + CSS.
///
/// Never fails for well-formed input: absent or unrecognized metadata
/// contributes no declarations instead of erroring.
///
/// The walk recurses once per tree level, so callers converting untrusted
/// documents should bound their depth first.
pub fn convert(root: &DesignNode, options: &ConversionOptions) -> ConversionResult {
    let mut ctx = ConversionContext::default();
    let html = html::convert_node(root, options, &mut ctx, 0);

    ConversionResult {
        html,
        css: ctx.styles.render(),
        images: ctx.images,
    }
}

// =========================================================================
// Value formatting
// =========================================================================

/// Format a number, removing `.0` for integers.
pub(crate) fn number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Format a pixel length, removing `.0` for integers.
pub(crate) fn px(n: f64) -> String {
    format!("{}px", number(n))
}

/// Format a pixel length rounded to the nearest integer.
pub(crate) fn px_round(n: f64) -> String {
    format!("{}px", n.round() as i64)
}
