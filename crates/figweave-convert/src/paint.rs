//! Paint resolution: solid, gradient and image fills, and solid strokes.
//!
//! Only the first visible fill (and first visible stroke) is honored;
//! stacked paints are not composited. Unsupported paint kinds emit no
//! background declaration at all.

use figweave_schema::{Color, DesignNode, Paint, PaintType, ScaleMode};

use crate::css::{decl, Declaration};
use crate::{number, ImageHandle};

/// Resolve the node's background from its first visible fill.
pub(crate) fn resolve_fill(
    node: &DesignNode,
    out: &mut Vec<Declaration>,
    images: &mut Vec<ImageHandle>,
) {
    let Some(fill) = node.fills.iter().find(|paint| paint.visible) else {
        return;
    };

    match &fill.paint_type {
        PaintType::Solid => {
            if let Some(color) = &fill.color {
                out.push(decl("background-color", css_color(color, fill.opacity)));
            }
        }
        PaintType::GradientLinear => {
            out.push(decl("background", linear_gradient(fill)));
        }
        PaintType::GradientRadial => {
            out.push(decl("background", radial_gradient(fill)));
        }
        PaintType::Image => {
            // Reference only; byte/URL resolution happens downstream
            if let Some(image_ref) = &fill.image_ref {
                images.push(ImageHandle {
                    node_id: node.id.clone(),
                    image_ref: image_ref.clone(),
                });
            }
            let size = if fill.scale_mode == Some(ScaleMode::Fit) {
                "contain"
            } else {
                "cover"
            };
            out.push(decl("background-size", size));
            out.push(decl("background-position", "center"));
            out.push(decl("background-repeat", "no-repeat"));
        }
        PaintType::Other(_) => {}
    }
}

/// Resolve the node's border from its first visible stroke.
///
/// Only solid strokes with a color are honored, always at a fixed 1px —
/// stroke weight is not read from the node.
pub(crate) fn resolve_stroke(node: &DesignNode, out: &mut Vec<Declaration>) {
    let Some(stroke) = node.strokes.iter().find(|paint| paint.visible) else {
        return;
    };
    if stroke.paint_type != PaintType::Solid {
        return;
    }
    if let Some(color) = &stroke.color {
        out.push(decl(
            "border",
            format!("1px solid {}", css_color(color, stroke.opacity)),
        ));
    }
}

// =========================================================================
// Gradient math
// =========================================================================

/// CSS value for a linear gradient paint.
///
/// The angle derives from the first two gradient handle positions; stops
/// map in order to `color position%`. Missing stops or handles yield
/// `transparent`.
pub(crate) fn linear_gradient(paint: &Paint) -> String {
    let handles = &paint.gradient_handle_positions;
    if handles.len() < 2 {
        return "transparent".to_string();
    }
    let Some(stops) = gradient_stops(paint) else {
        return "transparent".to_string();
    };

    let dx = handles[1].x - handles[0].x;
    let dy = handles[1].y - handles[0].y;
    let angle = (dy.atan2(dx).to_degrees() + 90.0).round() as i64;

    format!("linear-gradient({angle}deg, {stops})")
}

/// CSS value for a radial gradient paint.
///
/// Always a centered circle; the source's radial parameters are not read.
pub(crate) fn radial_gradient(paint: &Paint) -> String {
    match gradient_stops(paint) {
        Some(stops) => format!("radial-gradient(circle, {stops})"),
        None => "transparent".to_string(),
    }
}

fn gradient_stops(paint: &Paint) -> Option<String> {
    if paint.gradient_stops.is_empty() {
        return None;
    }
    let stops = paint
        .gradient_stops
        .iter()
        .map(|stop| {
            format!(
                "{} {}%",
                css_color(&stop.color, paint.opacity),
                (stop.position * 100.0).round() as i64
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    Some(stops)
}

// =========================================================================
// Color formatting
// =========================================================================

/// Format a color as `rgb()`/`rgba()`, composing the paint-level opacity
/// with the color's own alpha.
pub(crate) fn css_color(color: &Color, paint_opacity: Option<f64>) -> String {
    let alpha = (color.a * paint_opacity.unwrap_or(1.0)).clamp(0.0, 1.0);
    let r = channel(color.r);
    let g = channel(color.g);
    let b = channel(color.b);

    if alpha >= 1.0 {
        format!("rgb({r}, {g}, {b})")
    } else {
        format!("rgba({r}, {g}, {b}, {})", alpha_value(alpha))
    }
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Alpha rounded to two decimals with trailing zeros trimmed.
fn alpha_value(alpha: f64) -> String {
    number((alpha * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figweave_schema::parse_node;
    use pretty_assertions::assert_eq;

    fn paint(source: &str) -> Paint {
        serde_json::from_str(source).unwrap()
    }

    fn fill_declarations(source: &str) -> (Vec<Declaration>, Vec<ImageHandle>) {
        let node = parse_node(source).unwrap();
        let mut out = Vec::new();
        let mut images = Vec::new();
        resolve_fill(&node, &mut out, &mut images);
        (out, images)
    }

    // =========================================================================
    // Color formatting
    // =========================================================================

    #[test]
    fn test_css_color_opaque() {
        let color = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
        assert_eq!(css_color(&color, None), "rgb(255, 0, 0)");
    }

    #[test]
    fn test_css_color_with_alpha() {
        let color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.5 };
        assert_eq!(css_color(&color, None), "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn test_css_color_composes_paint_opacity() {
        // 0.5 paint opacity × 0.5 color alpha → 0.25
        let color = Color { r: 0.2, g: 0.4, b: 0.6, a: 0.5 };
        assert_eq!(css_color(&color, Some(0.5)), "rgba(51, 102, 153, 0.25)");
    }

    // =========================================================================
    // Fills
    // =========================================================================

    #[test]
    fn test_solid_fill() {
        let (out, _) = fill_declarations(
            r#"{"id": "1", "name": "N", "type": "RECTANGLE",
                "fills": [{"type": "SOLID", "color": {"r": 0, "g": 0.5, "b": 1}}]}"#,
        );
        assert_eq!(out, vec![decl("background-color", "rgb(0, 128, 255)")]);
    }

    #[test]
    fn test_first_visible_fill_wins() {
        let (out, _) = fill_declarations(
            r#"{"id": "1", "name": "N", "type": "RECTANGLE", "fills": [
                {"type": "SOLID", "visible": false, "color": {"r": 1, "g": 0, "b": 0}},
                {"type": "SOLID", "color": {"r": 0, "g": 1, "b": 0}},
                {"type": "SOLID", "color": {"r": 0, "g": 0, "b": 1}}
            ]}"#,
        );
        assert_eq!(out, vec![decl("background-color", "rgb(0, 255, 0)")]);
    }

    #[test]
    fn test_unsupported_fill_emits_nothing() {
        let (out, _) = fill_declarations(
            r#"{"id": "1", "name": "N", "type": "RECTANGLE",
                "fills": [{"type": "GRADIENT_ANGULAR",
                           "gradientStops": [{"position": 0, "color": {"r": 1, "g": 0, "b": 0}}]}]}"#,
        );
        assert_eq!(out, vec![]);
    }

    #[test]
    fn test_image_fill_cover_and_reference() {
        let (out, images) = fill_declarations(
            r#"{"id": "9:1", "name": "N", "type": "RECTANGLE",
                "fills": [{"type": "IMAGE", "imageRef": "img-1"}]}"#,
        );
        assert_eq!(
            out,
            vec![
                decl("background-size", "cover"),
                decl("background-position", "center"),
                decl("background-repeat", "no-repeat"),
            ]
        );
        assert_eq!(images[0].node_id, "9:1");
        assert_eq!(images[0].image_ref, "img-1");
    }

    #[test]
    fn test_image_fill_fit_is_contain() {
        let (out, _) = fill_declarations(
            r#"{"id": "1", "name": "N", "type": "RECTANGLE",
                "fills": [{"type": "IMAGE", "imageRef": "img-1", "scaleMode": "FIT"}]}"#,
        );
        assert_eq!(out[0], decl("background-size", "contain"));
    }

    // =========================================================================
    // Gradients
    // =========================================================================

    #[test]
    fn test_linear_gradient_left_to_right() {
        let gradient = paint(
            r#"{
                "type": "GRADIENT_LINEAR",
                "gradientHandlePositions": [{"x": 0, "y": 0}, {"x": 1, "y": 0}],
                "gradientStops": [
                    {"position": 0, "color": {"r": 1, "g": 0, "b": 0}},
                    {"position": 1, "color": {"r": 0, "g": 0, "b": 1}}
                ]
            }"#,
        );
        assert_eq!(
            linear_gradient(&gradient),
            "linear-gradient(90deg, rgb(255, 0, 0) 0%, rgb(0, 0, 255) 100%)"
        );
    }

    #[test]
    fn test_linear_gradient_top_to_bottom() {
        let gradient = paint(
            r#"{
                "type": "GRADIENT_LINEAR",
                "gradientHandlePositions": [{"x": 0.5, "y": 0}, {"x": 0.5, "y": 1}],
                "gradientStops": [
                    {"position": 0, "color": {"r": 0, "g": 0, "b": 0}},
                    {"position": 1, "color": {"r": 1, "g": 1, "b": 1}}
                ]
            }"#,
        );
        assert_eq!(
            linear_gradient(&gradient),
            "linear-gradient(180deg, rgb(0, 0, 0) 0%, rgb(255, 255, 255) 100%)"
        );
    }

    #[test]
    fn test_linear_gradient_missing_handles() {
        let gradient = paint(
            r#"{"type": "GRADIENT_LINEAR",
                "gradientStops": [{"position": 0, "color": {"r": 1, "g": 0, "b": 0}}]}"#,
        );
        assert_eq!(linear_gradient(&gradient), "transparent");
    }

    #[test]
    fn test_linear_gradient_missing_stops() {
        let gradient = paint(
            r#"{"type": "GRADIENT_LINEAR",
                "gradientHandlePositions": [{"x": 0, "y": 0}, {"x": 1, "y": 0}]}"#,
        );
        assert_eq!(linear_gradient(&gradient), "transparent");
    }

    #[test]
    fn test_gradient_alpha_composition() {
        // Paint opacity 0.5 × stop alpha 0.5 → 0.25
        let gradient = paint(
            r#"{
                "type": "GRADIENT_LINEAR",
                "opacity": 0.5,
                "gradientHandlePositions": [{"x": 0, "y": 0}, {"x": 1, "y": 0}],
                "gradientStops": [
                    {"position": 0, "color": {"r": 1, "g": 0, "b": 0, "a": 0.5}},
                    {"position": 1, "color": {"r": 0, "g": 0, "b": 1, "a": 1}}
                ]
            }"#,
        );
        assert_eq!(
            linear_gradient(&gradient),
            "linear-gradient(90deg, rgba(255, 0, 0, 0.25) 0%, rgba(0, 0, 255, 0.5) 100%)"
        );
    }

    #[test]
    fn test_radial_gradient_always_circle() {
        let gradient = paint(
            r#"{
                "type": "GRADIENT_RADIAL",
                "gradientHandlePositions": [{"x": 0.5, "y": 0.5}, {"x": 1, "y": 0.5}],
                "gradientStops": [
                    {"position": 0, "color": {"r": 1, "g": 1, "b": 1}},
                    {"position": 0.754, "color": {"r": 0, "g": 0, "b": 0}}
                ]
            }"#,
        );
        assert_eq!(
            radial_gradient(&gradient),
            "radial-gradient(circle, rgb(255, 255, 255) 0%, rgb(0, 0, 0) 75%)"
        );
    }

    #[test]
    fn test_radial_gradient_missing_stops() {
        let gradient = paint(r#"{"type": "GRADIENT_RADIAL"}"#);
        assert_eq!(radial_gradient(&gradient), "transparent");
    }

    // =========================================================================
    // Strokes
    // =========================================================================

    #[test]
    fn test_solid_stroke() {
        let node = parse_node(
            r#"{"id": "1", "name": "N", "type": "RECTANGLE",
                "strokes": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0, "a": 0.8}}]}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        resolve_stroke(&node, &mut out);
        assert_eq!(out, vec![decl("border", "1px solid rgba(0, 0, 0, 0.8)")]);
    }

    #[test]
    fn test_gradient_stroke_ignored() {
        let node = parse_node(
            r#"{"id": "1", "name": "N", "type": "RECTANGLE",
                "strokes": [{"type": "GRADIENT_LINEAR"}]}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        resolve_stroke(&node, &mut out);
        assert_eq!(out, vec![]);
    }

    #[test]
    fn test_hidden_stroke_ignored() {
        let node = parse_node(
            r#"{"id": "1", "name": "N", "type": "RECTANGLE",
                "strokes": [{"type": "SOLID", "visible": false,
                             "color": {"r": 0, "g": 0, "b": 0}}]}"#,
        )
        .unwrap();
        let mut out = Vec::new();
        resolve_stroke(&node, &mut out);
        assert_eq!(out, vec![]);
    }
}
