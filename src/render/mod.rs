//! Maps simulation state to visual-element descriptors
//!
//! The page's DOM/canvas layer consumes these verbatim; no drawing happens
//! here. Kind decides the silhouette (border radius / rotation), the glow
//! flag decides opacity and shadow.

use serde::Serialize;

use crate::sim::{CursorTrail, Shape, ShapeKind, TrailColor};

/// Corner rounding for a shape element
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// 50% radius, a full circle
    Full,
    /// Fixed radius in px
    Px(f32),
    None,
}

/// Shadow tint behind a glowing shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GlowTint {
    Red,
    White,
}

impl GlowTint {
    /// CSS color the shadow is rendered with
    pub fn rgba(&self) -> &'static str {
        match self {
            GlowTint::Red => "rgba(239, 68, 68, 0.6)",
            GlowTint::White => "rgba(255, 255, 255, 0.5)",
        }
    }
}

/// Everything the page needs to place one shape element
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapeVisual {
    /// Render key, stable across frames
    pub id: u32,
    pub left: f32,
    pub top: f32,
    pub size: f32,
    pub border_class: &'static str,
    pub rounding: Rounding,
    pub rotation_deg: f32,
    pub opacity: f32,
    /// Present only while the shape glows
    pub glow: Option<GlowTint>,
}

/// Descriptor for one cursor-trail dot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DotVisual {
    pub id: u64,
    pub left: f32,
    pub top: f32,
    pub color: TrailColor,
    pub opacity: f32,
    pub scale: f32,
}

/// Map one shape's current state to its element descriptor
pub fn shape_visual(shape: &Shape) -> ShapeVisual {
    let rounding = match shape.kind {
        ShapeKind::Circle => Rounding::Full,
        ShapeKind::Square => Rounding::Px(8.0),
        ShapeKind::Rectangle | ShapeKind::Rhombus => Rounding::None,
    };
    let rotation_deg = if shape.kind == ShapeKind::Rhombus {
        45.0
    } else {
        0.0
    };
    let glow = shape.glowing.then(|| {
        if shape.color.is_red() {
            GlowTint::Red
        } else {
            GlowTint::White
        }
    });

    ShapeVisual {
        id: shape.id,
        left: shape.pos.x,
        top: shape.pos.y,
        size: shape.size,
        border_class: shape.color.as_class(),
        rounding,
        rotation_deg,
        opacity: if shape.glowing { 0.8 } else { 0.5 },
        glow,
    }
}

/// Map every shape in a snapshot, preserving id order
pub fn shape_visuals(snapshot: &[Shape]) -> Vec<ShapeVisual> {
    snapshot.iter().map(shape_visual).collect()
}

/// Map the live trail points to dot descriptors
pub fn trail_visuals(trail: &CursorTrail, now_ms: f64) -> Vec<DotVisual> {
    trail
        .fade(now_ms)
        .into_iter()
        .map(|f| DotVisual {
            id: f.id,
            left: f.pos.x,
            top: f.pos.y,
            color: f.color,
            opacity: f.opacity,
            scale: f.scale,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ColorClass, ShapeConfig, ShapeField, Viewport};
    use glam::Vec2;

    fn shape(kind: ShapeKind, color: ColorClass, glowing: bool) -> Shape {
        Shape {
            id: 3,
            pos: Vec2::new(120.0, 80.0),
            vel: Vec2::ZERO,
            size: 90.0,
            kind,
            color,
            glowing,
        }
    }

    #[test]
    fn test_circle_is_fully_rounded() {
        let v = shape_visual(&shape(ShapeKind::Circle, ColorClass::Red500, false));
        assert_eq!(v.rounding, Rounding::Full);
        assert_eq!(v.rotation_deg, 0.0);
        assert_eq!(v.left, 120.0);
        assert_eq!(v.top, 80.0);
    }

    #[test]
    fn test_square_gets_8px_corners() {
        let v = shape_visual(&shape(ShapeKind::Square, ColorClass::Red600, false));
        assert_eq!(v.rounding, Rounding::Px(8.0));
    }

    #[test]
    fn test_rhombus_is_rotated_square() {
        let v = shape_visual(&shape(ShapeKind::Rhombus, ColorClass::Red400, false));
        assert_eq!(v.rounding, Rounding::None);
        assert_eq!(v.rotation_deg, 45.0);
    }

    #[test]
    fn test_glow_drives_opacity_and_shadow() {
        let dim = shape_visual(&shape(ShapeKind::Circle, ColorClass::Red500, false));
        assert_eq!(dim.opacity, 0.5);
        assert!(dim.glow.is_none());

        let lit = shape_visual(&shape(ShapeKind::Circle, ColorClass::Red500, true));
        assert_eq!(lit.opacity, 0.8);
        assert_eq!(lit.glow, Some(GlowTint::Red));

        let white = shape_visual(&shape(ShapeKind::Circle, ColorClass::White, true));
        assert_eq!(white.glow, Some(GlowTint::White));
        assert_eq!(white.glow.unwrap().rgba(), "rgba(255, 255, 255, 0.5)");
    }

    #[test]
    fn test_snapshot_mapping_preserves_order() {
        let configs = [
            ShapeConfig::new(ShapeKind::Circle, 80.0, 2.0),
            ShapeConfig::new(ShapeKind::Square, 130.0, 1.0),
        ];
        let field = ShapeField::new(&configs, Viewport::new(800.0, 600.0), 9);

        let visuals = shape_visuals(field.snapshot());
        assert_eq!(visuals.len(), 2);
        assert_eq!(visuals[0].id, 0);
        assert_eq!(visuals[1].id, 1);
        assert_eq!(visuals[0].border_class, field.snapshot()[0].color.as_class());
    }

    #[test]
    fn test_trail_visuals_follow_fade() {
        let mut trail = CursorTrail::new(0);
        trail.sample(Vec2::new(30.0, 40.0), 0.0);

        let dots = trail_visuals(&trail, 0.0);
        assert_eq!(dots.len(), 1);
        assert_eq!(dots[0].left, 30.0);
        assert!((dots[0].opacity - 0.8).abs() < 1e-6);

        assert!(trail_visuals(&trail, 2000.0).is_empty());
    }
}
