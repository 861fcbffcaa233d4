//! Effect types: shadows and blurs attached to a node.

use serde::Deserialize;

use crate::paint::{Color, Vector2};

/// A shadow or blur effect.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: EffectType,

    #[serde(default = "default_visible")]
    pub visible: bool,

    /// Blur radius for shadows and blurs.
    pub radius: Option<f64>,
    pub color: Option<Color>,
    pub offset: Option<Vector2>,
    pub spread: Option<f64>,
}

fn default_visible() -> bool {
    true
}

/// Effect kind discriminator; unknown kinds decode to `Other` and are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum EffectType {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
    Other(String),
}

impl From<String> for EffectType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "DROP_SHADOW" => Self::DropShadow,
            "INNER_SHADOW" => Self::InnerShadow,
            "LAYER_BLUR" => Self::LayerBlur,
            "BACKGROUND_BLUR" => Self::BackgroundBlur,
            _ => Self::Other(raw),
        }
    }
}
