//! Pfeil-Geometrie für Normalen-Vektoren.
//!
//! Reine Geometrie → Zeichenaufrufe: identische Eingaben ergeben
//! bitidentische Screen-Koordinaten (Voraussetzung für
//! Golden-Image-Regressionstests).

use super::types::{flip, RenderContext};
use glam::Vec2;

/// Länge der beiden Pfeilspitzen-Striche.
pub const ARROWHEAD_LENGTH: f32 = 4.0;
/// Winkel der Pfeilspitzen-Striche relativ zur Schaft-Richtung.
pub const ARROWHEAD_ANGLE: f32 = 5.0 * std::f32::consts::PI / 6.0;
/// Schaftlänge für Kanten-Normalen.
pub const NORMAL_LENGTH_EDGE: f32 = 14.0;
/// Schaftlänge für B-Vertex-Normalen.
pub const NORMAL_LENGTH_B_VERTEX: f32 = 10.0;

/// Typ einer Normale; bestimmt Schaftlänge und Farbe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalKind {
    /// Normale an einer Segment-Kante
    Edge,
    /// Normale an einem B-Quad-Vertex
    BVertex,
}

impl NormalKind {
    /// Schaftlänge dieses Normalen-Typs (vor `inv_scale`-Skalierung).
    pub fn shaft_length(self) -> f32 {
        match self {
            NormalKind::Edge => NORMAL_LENGTH_EDGE,
            NormalKind::BVertex => NORMAL_LENGTH_B_VERTEX,
        }
    }

    fn rgba(self, options: &crate::shared::ViewerOptions) -> [f32; 4] {
        match self {
            NormalKind::Edge => options.normal_edge_color,
            NormalKind::BVertex => options.normal_b_vertex_color,
        }
    }
}

/// Zeichnet einen Normalen-Pfeil: Schaft plus zwei Spitzen-Striche.
///
/// Anker und Normale kommen in Mesh-Koordinaten; der Y-Flip wird hier
/// konsistent angewendet (Anker-Y negiert, Normale-Y geht negiert ein).
/// Die Spitzen entstehen aus der geschlossenen Form der 2D-Rotation um
/// `±ARROWHEAD_ANGLE` mit einem `sin_cos`-Paar für beide Flügel.
pub fn push_normal_arrow(
    out: &mut Vec<egui::Shape>,
    ctx: &RenderContext<'_>,
    anchor: Vec2,
    normal: Vec2,
    kind: NormalKind,
) {
    let dir = flip(normal);
    let base = flip(anchor);
    let tip = base + kind.shaft_length() * ctx.inv_scale * dir;

    let (sin_a, cos_a) = ARROWHEAD_ANGLE.sin_cos();
    let wing = ARROWHEAD_LENGTH * ctx.inv_scale;
    let left = tip + wing * Vec2::new(cos_a * dir.x - sin_a * dir.y, sin_a * dir.x + cos_a * dir.y);
    let right = tip + wing * Vec2::new(cos_a * dir.x + sin_a * dir.y, -sin_a * dir.x + cos_a * dir.y);

    let stroke = ctx.stroke(kind.rgba(ctx.options));
    let tip_screen = ctx.to_screen(tip);
    out.push(egui::Shape::line_segment([ctx.to_screen(base), tip_screen], stroke));
    out.push(egui::Shape::line_segment([tip_screen, ctx.to_screen(left)], stroke));
    out.push(egui::Shape::line_segment([tip_screen, ctx.to_screen(right)], stroke));
}
