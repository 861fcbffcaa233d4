//! Effect resolution: shadow stacking and blur merging.
//!
//! All visible shadow effects join into one `box-shadow` declaration in
//! input order (CSS stacks them, preserving visual layering). Blur radii
//! merge max-wins across layer and background blurs into a single
//! `filter: blur()`.

use figweave_schema::{DesignNode, Effect, EffectType};

use crate::css::{decl, Declaration};
use crate::paint::css_color;
use crate::px;

pub(crate) fn resolve(node: &DesignNode, out: &mut Vec<Declaration>) {
    let mut shadows: Vec<String> = Vec::new();
    let mut blur_radius: Option<f64> = None;

    for effect in node.effects.iter().filter(|effect| effect.visible) {
        match &effect.effect_type {
            EffectType::DropShadow => shadows.push(shadow_term(effect, false)),
            EffectType::InnerShadow => shadows.push(shadow_term(effect, true)),
            EffectType::LayerBlur | EffectType::BackgroundBlur => {
                let radius = effect.radius.unwrap_or(0.0);
                blur_radius = Some(blur_radius.map_or(radius, |current| current.max(radius)));
            }
            EffectType::Other(_) => {}
        }
    }

    if !shadows.is_empty() {
        out.push(decl("box-shadow", shadows.join(", ")));
    }
    if let Some(radius) = blur_radius {
        out.push(decl("filter", format!("blur({})", px(radius))));
    }
}

fn shadow_term(effect: &Effect, inset: bool) -> String {
    let (x, y) = effect
        .offset
        .map(|offset| (offset.x, offset.y))
        .unwrap_or((0.0, 0.0));
    let radius = effect.radius.unwrap_or(0.0);
    let spread = effect.spread.unwrap_or(0.0);
    let color = effect
        .color
        .map(|color| css_color(&color, None))
        .unwrap_or_else(|| "rgba(0, 0, 0, 0.25)".to_string());
    let prefix = if inset { "inset " } else { "" };

    format!("{prefix}{} {} {} {} {color}", px(x), px(y), px(radius), px(spread))
}
