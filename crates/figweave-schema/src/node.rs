//! Design node types.
//!
//! `DesignNode` is the unit of the document tree. The `type` discriminator
//! decodes to `NodeType`; unrecognized discriminators land in
//! `NodeType::Other` so the converter can degrade instead of failing.

use serde::Deserialize;

use crate::effect::Effect;
use crate::paint::Paint;

/// One element of the design document tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[serde(default)]
    pub children: Vec<DesignNode>,

    /// Layout geometry. The API reports this as `absoluteBoundingBox`.
    #[serde(alias = "absoluteBoundingBox")]
    pub bounding_box: Option<BoundingBox>,

    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    #[serde(default)]
    pub effects: Vec<Effect>,

    /// Uniform corner radius.
    pub corner_radius: Option<f64>,
    /// Per-corner radii in `[top-left, top-right, bottom-right, bottom-left]`
    /// order. The API reports this as `rectangleCornerRadii`.
    #[serde(alias = "rectangleCornerRadii")]
    pub corner_radii: Option<[f64; 4]>,

    pub opacity: Option<f64>,

    // Auto-layout metadata
    pub layout_mode: Option<LayoutMode>,
    pub primary_axis_sizing_mode: Option<AxisSizing>,
    pub counter_axis_sizing_mode: Option<AxisSizing>,
    pub primary_axis_align_items: Option<PrimaryAxisAlign>,
    pub counter_axis_align_items: Option<CounterAxisAlign>,
    pub padding_top: Option<f64>,
    pub padding_right: Option<f64>,
    pub padding_bottom: Option<f64>,
    pub padding_left: Option<f64>,
    pub item_spacing: Option<f64>,
    pub layout_grow: Option<f64>,

    // Text content and typography. The API reports the latter as `style`.
    pub characters: Option<String>,
    #[serde(alias = "style")]
    pub text_style: Option<TextStyle>,
}

impl DesignNode {
    /// Create a bare node with no metadata set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            children: Vec::new(),
            bounding_box: None,
            fills: Vec::new(),
            strokes: Vec::new(),
            effects: Vec::new(),
            corner_radius: None,
            corner_radii: None,
            opacity: None,
            layout_mode: None,
            primary_axis_sizing_mode: None,
            counter_axis_sizing_mode: None,
            primary_axis_align_items: None,
            counter_axis_align_items: None,
            padding_top: None,
            padding_right: None,
            padding_bottom: None,
            padding_left: None,
            item_spacing: None,
            layout_grow: None,
            characters: None,
            text_style: None,
        }
    }
}

/// Node kind discriminator.
///
/// Data-carrying `Other` preserves the raw discriminator of unknown kinds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum NodeType {
    Frame,
    Group,
    Component,
    ComponentSet,
    Instance,
    Text,
    Rectangle,
    Ellipse,
    Vector,
    Line,
    Polygon,
    Star,
    Other(String),
}

impl From<String> for NodeType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "FRAME" => Self::Frame,
            "GROUP" => Self::Group,
            "COMPONENT" => Self::Component,
            "COMPONENT_SET" => Self::ComponentSet,
            "INSTANCE" => Self::Instance,
            "TEXT" => Self::Text,
            "RECTANGLE" => Self::Rectangle,
            "ELLIPSE" => Self::Ellipse,
            "VECTOR" => Self::Vector,
            "LINE" => Self::Line,
            "POLYGON" => Self::Polygon,
            "STAR" => Self::Star,
            _ => Self::Other(raw),
        }
    }
}

impl NodeType {
    /// Container kinds whose children are converted recursively.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Frame | Self::Group | Self::Component | Self::ComponentSet | Self::Instance
        )
    }

    /// Vector-like kinds rendered as labeled placeholders (no path extraction).
    pub fn is_vector_like(&self) -> bool {
        matches!(self, Self::Vector | Self::Line | Self::Polygon | Self::Star)
    }
}

/// Axis-aligned bounding box in the document's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

/// Auto-layout flow direction. Unknown values decode to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum LayoutMode {
    None,
    Horizontal,
    Vertical,
}

impl From<String> for LayoutMode {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "HORIZONTAL" => Self::Horizontal,
            "VERTICAL" => Self::Vertical,
            _ => Self::None,
        }
    }
}

/// Axis sizing mode. Unknown values decode to `Fixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum AxisSizing {
    Fixed,
    Auto,
}

impl From<String> for AxisSizing {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "AUTO" => Self::Auto,
            _ => Self::Fixed,
        }
    }
}

/// Primary-axis alignment. `Other` values emit no declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PrimaryAxisAlign {
    Min,
    Max,
    Center,
    SpaceBetween,
    Other,
}

impl From<String> for PrimaryAxisAlign {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "MIN" => Self::Min,
            "MAX" => Self::Max,
            "CENTER" => Self::Center,
            "SPACE_BETWEEN" => Self::SpaceBetween,
            _ => Self::Other,
        }
    }
}

/// Counter-axis alignment. `Other` values emit no declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CounterAxisAlign {
    Min,
    Max,
    Center,
    Baseline,
    Other,
}

impl From<String> for CounterAxisAlign {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "MIN" => Self::Min,
            "MAX" => Self::Max,
            "CENTER" => Self::Center,
            "BASELINE" => Self::Baseline,
            _ => Self::Other,
        }
    }
}

/// Typography metadata on a `TEXT` node.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub font_family: Option<String>,
    pub font_weight: Option<f64>,
    pub font_size: Option<f64>,
    pub text_align_horizontal: Option<TextAlignHorizontal>,
    pub letter_spacing: Option<f64>,
    pub line_height_px: Option<f64>,
    pub text_case: Option<TextCase>,
    pub text_decoration: Option<TextDecoration>,
}

/// Horizontal text alignment. `Other` values emit no declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TextAlignHorizontal {
    Left,
    Right,
    Center,
    Justified,
    Other,
}

impl From<String> for TextAlignHorizontal {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "LEFT" => Self::Left,
            "RIGHT" => Self::Right,
            "CENTER" => Self::Center,
            "JUSTIFIED" => Self::Justified,
            _ => Self::Other,
        }
    }
}

/// Text case transform. `Other` values (including `ORIGINAL`) emit no declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TextCase {
    Upper,
    Lower,
    Title,
    Other,
}

impl From<String> for TextCase {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "UPPER" => Self::Upper,
            "LOWER" => Self::Lower,
            "TITLE" => Self::Title,
            _ => Self::Other,
        }
    }
}

/// Text decoration. `Other` values (including `NONE`) emit no declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TextDecoration {
    Underline,
    Strikethrough,
    Other,
}

impl From<String> for TextDecoration {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "UNDERLINE" => Self::Underline,
            "STRIKETHROUGH" => Self::Strikethrough,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decode(source: &str) -> DesignNode {
        serde_json::from_str(source).unwrap()
    }

    // =========================================================================
    // Node decoding
    // =========================================================================

    #[test]
    fn test_decode_frame_with_layout() {
        let node = decode(
            r#"{
                "id": "1:2",
                "name": "Card",
                "type": "FRAME",
                "absoluteBoundingBox": {"x": 0, "y": 0, "width": 320, "height": 200},
                "layoutMode": "VERTICAL",
                "primaryAxisAlignItems": "SPACE_BETWEEN",
                "counterAxisAlignItems": "CENTER",
                "paddingTop": 16,
                "paddingBottom": 16,
                "itemSpacing": 8
            }"#,
        );
        assert_eq!(node.layout_mode, Some(LayoutMode::Vertical));
        assert_eq!(node.primary_axis_align_items, Some(PrimaryAxisAlign::SpaceBetween));
        assert_eq!(node.counter_axis_align_items, Some(CounterAxisAlign::Center));
        assert_eq!(node.padding_top, Some(16.0));
        assert_eq!(node.padding_right, None);
        assert_eq!(node.item_spacing, Some(8.0));
        assert_eq!(node.bounding_box.unwrap().width, 320.0);
    }

    #[test]
    fn test_decode_bounding_box_plain_key() {
        let node = decode(
            r#"{"id": "1:3", "name": "Box", "type": "RECTANGLE",
                "boundingBox": {"x": 1, "y": 2, "width": 3, "height": 4}}"#,
        );
        assert_eq!(node.bounding_box.unwrap().height, 4.0);
    }

    #[test]
    fn test_decode_text_node_with_style_key() {
        let node = decode(
            r#"{
                "id": "2:1",
                "name": "Title",
                "type": "TEXT",
                "characters": "Hello",
                "style": {
                    "fontFamily": "Inter",
                    "fontWeight": 700,
                    "fontSize": 32,
                    "textAlignHorizontal": "CENTER",
                    "textCase": "UPPER",
                    "textDecoration": "UNDERLINE",
                    "letterSpacing": 0.5,
                    "lineHeightPx": 40
                }
            }"#,
        );
        let style = node.text_style.unwrap();
        assert_eq!(style.font_family.as_deref(), Some("Inter"));
        assert_eq!(style.font_size, Some(32.0));
        assert_eq!(style.text_align_horizontal, Some(TextAlignHorizontal::Center));
        assert_eq!(style.text_case, Some(TextCase::Upper));
        assert_eq!(style.text_decoration, Some(TextDecoration::Underline));
    }

    #[test]
    fn test_decode_corner_radii_api_key() {
        let node = decode(
            r#"{"id": "3:1", "name": "Pill", "type": "RECTANGLE",
                "rectangleCornerRadii": [4, 8, 12, 16]}"#,
        );
        assert_eq!(node.corner_radii, Some([4.0, 8.0, 12.0, 16.0]));
    }

    // =========================================================================
    // Enum decoding
    // =========================================================================

    #[test]
    fn test_unknown_node_type_preserved() {
        let node = decode(r#"{"id": "4:1", "name": "Slice", "type": "SLICE"}"#);
        assert_eq!(node.node_type, NodeType::Other("SLICE".into()));
        assert!(!node.node_type.is_container());
    }

    #[test]
    fn test_container_kinds() {
        for raw in ["FRAME", "GROUP", "COMPONENT", "COMPONENT_SET", "INSTANCE"] {
            assert!(NodeType::from(raw.to_string()).is_container(), "{raw}");
        }
        assert!(!NodeType::from("TEXT".to_string()).is_container());
    }

    #[test]
    fn test_vector_like_kinds() {
        for raw in ["VECTOR", "LINE", "POLYGON", "STAR"] {
            assert!(NodeType::from(raw.to_string()).is_vector_like(), "{raw}");
        }
        assert!(!NodeType::from("RECTANGLE".to_string()).is_vector_like());
    }

    #[test]
    fn test_unknown_layout_mode_degrades_to_none() {
        let node = decode(r#"{"id": "5:1", "name": "X", "type": "FRAME", "layoutMode": "WRAP"}"#);
        assert_eq!(node.layout_mode, Some(LayoutMode::None));
    }

    #[test]
    fn test_unknown_alignment_degrades_to_other() {
        assert_eq!(PrimaryAxisAlign::from("SPACE_AROUND".to_string()), PrimaryAxisAlign::Other);
        assert_eq!(CounterAxisAlign::from("STRETCH".to_string()), CounterAxisAlign::Other);
    }

    #[test]
    fn test_axis_sizing() {
        assert_eq!(AxisSizing::from("AUTO".to_string()), AxisSizing::Auto);
        assert_eq!(AxisSizing::from("FIXED".to_string()), AxisSizing::Fixed);
    }
}
