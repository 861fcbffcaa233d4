//! Paint types: solid colors, gradients, and image fills.

use serde::Deserialize;

/// A fill or stroke entry on a node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: PaintType,

    /// Hidden paints are skipped entirely.
    #[serde(default = "default_visible")]
    pub visible: bool,

    /// Paint-level opacity, multiplied with the color's own alpha.
    pub opacity: Option<f64>,

    pub color: Option<Color>,

    #[serde(default)]
    pub gradient_stops: Vec<GradientStop>,
    /// Coordinate points defining the gradient direction/origin.
    #[serde(default)]
    pub gradient_handle_positions: Vec<Vector2>,

    /// Opaque reference to an image asset, resolved downstream.
    pub image_ref: Option<String>,
    pub scale_mode: Option<ScaleMode>,
}

fn default_visible() -> bool {
    true
}

/// Paint kind discriminator.
///
/// Data-carrying `Other` preserves unsupported kinds (e.g. `GRADIENT_ANGULAR`),
/// which emit no background declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PaintType {
    Solid,
    GradientLinear,
    GradientRadial,
    Image,
    Other(String),
}

impl From<String> for PaintType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "SOLID" => Self::Solid,
            "GRADIENT_LINEAR" => Self::GradientLinear,
            "GRADIENT_RADIAL" => Self::GradientRadial,
            "IMAGE" => Self::Image,
            _ => Self::Other(raw),
        }
    }
}

/// An RGBA color with 0..1 channels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Color {
    #[serde(default)]
    pub r: f64,
    #[serde(default)]
    pub g: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

/// One stop of a gradient ramp.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GradientStop {
    #[serde(default)]
    pub position: f64,
    pub color: Color,
}

/// A 2D point in the document's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Vector2 {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Image fill scaling behavior. Only `Fit` changes output (`contain`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ScaleMode {
    Fill,
    Fit,
    Tile,
    Stretch,
    Other,
}

impl From<String> for ScaleMode {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "FILL" => Self::Fill,
            "FIT" => Self::Fit,
            "TILE" => Self::Tile,
            "STRETCH" => Self::Stretch,
            _ => Self::Other,
        }
    }
}
