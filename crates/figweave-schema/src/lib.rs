//! Figweave Schema
//!
//! Data model for the design-tool document tree: typed nodes carrying
//! geometry, paint, stroke, effect, auto-layout and text metadata.
//! Decodes the JSON shape the upstream design-tool API supplies; every
//! field beyond `id`/`name`/`type` is optional, and unknown node or paint
//! kinds decode to an `Other` variant instead of failing.
//!
//! # Example
//!
//! ```
//! use figweave_schema::parse_node;
//!
//! let node = parse_node(r#"{"id": "1:2", "name": "Hero", "type": "FRAME"}"#).unwrap();
//! assert_eq!(node.name, "Hero");
//! ```

pub mod effect;
pub mod node;
pub mod paint;

pub use effect::{Effect, EffectType};
pub use node::{
    AxisSizing, BoundingBox, CounterAxisAlign, DesignNode, LayoutMode, NodeType,
    PrimaryAxisAlign, TextAlignHorizontal, TextCase, TextDecoration, TextStyle,
};
pub use paint::{Color, GradientStop, Paint, PaintType, ScaleMode, Vector2};

/// Schema decoding error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Schema error: {message}")]
pub struct SchemaError {
    pub message: String,
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Decode a single design node from JSON.
pub fn parse_node(source: &str) -> Result<DesignNode, SchemaError> {
    Ok(serde_json::from_str(source)?)
}

/// Decode a design document from JSON.
///
/// Accepts either a bare node or the API's file response shape
/// `{"document": {...}, ...}` and returns the root node.
pub fn parse_document(source: &str) -> Result<DesignNode, SchemaError> {
    let value: serde_json::Value = serde_json::from_str(source)?;
    let root = match value.get("document") {
        Some(document) => document.clone(),
        None => value,
    };
    Ok(serde_json::from_value(root)?)
}
