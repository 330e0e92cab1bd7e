//! Renderer für B-Quad-Primitive.

use super::types::{color, flip, RenderContext};
use crate::core::{OverlayState, PathMesh};
use egui::epaint::QuadraticBezierShape;
use glam::Vec2;

/// Zeichnet B-Quads: Kanten, Seitenstriche und optionale Eckpunkt-Marker.
#[derive(Default)]
pub struct BQuadRenderer;

impl BQuadRenderer {
    /// Erstellt einen neuen B-Quad-Renderer.
    pub fn new() -> Self {
        Self
    }

    /// Rendert alle B-Quads des Meshes in die Shape-Liste.
    pub fn render(
        &self,
        out: &mut Vec<egui::Shape>,
        ctx: &RenderContext<'_>,
        mesh: &PathMesh,
        overlay: &OverlayState,
    ) {
        for index in 0..mesh.b_quad_count {
            let quad = mesh.b_quad(index);

            // Eckpunkt-Marker nur an den vier Ecken, nie an Kontrollpunkten
            if overlay.draw_vertices {
                let radius = ctx.screen_len(ctx.options.point_radius * ctx.inv_scale);
                for corner in [
                    quad.upper_left,
                    quad.upper_right,
                    quad.lower_right,
                    quad.lower_left,
                ] {
                    out.push(egui::Shape::circle_filled(
                        ctx.to_screen(flip(corner)),
                        radius,
                        color(ctx.options.vertex_color),
                    ));
                }
            }

            // Obere Kante, dann Seitenstrich rechts, untere Kante, Seitenstrich links
            self.push_edge(out, ctx, quad.upper_left, quad.upper_control, quad.upper_right);
            self.push_side(out, ctx, quad.upper_right, quad.lower_right);
            self.push_edge(out, ctx, quad.lower_right, quad.lower_control, quad.lower_left);
            self.push_side(out, ctx, quad.lower_left, quad.upper_left);
        }
    }

    /// Zeichnet eine Kante: Quadratische Kurve bei vorhandenem
    /// Kontrollpunkt, sonst gerade Linie. Entschieden pro Aufruf, nie gecacht.
    fn push_edge(
        &self,
        out: &mut Vec<egui::Shape>,
        ctx: &RenderContext<'_>,
        from: Vec2,
        control: Option<Vec2>,
        to: Vec2,
    ) {
        match control {
            Some(control) => out.push(
                QuadraticBezierShape::from_points_stroke(
                    [
                        ctx.to_screen(flip(from)),
                        ctx.to_screen(flip(control)),
                        ctx.to_screen(flip(to)),
                    ],
                    false,
                    egui::Color32::TRANSPARENT,
                    ctx.stroke(ctx.options.curve_edge_color),
                )
                .into(),
            ),
            None => out.push(egui::Shape::line_segment(
                [ctx.to_screen(flip(from)), ctx.to_screen(flip(to))],
                ctx.stroke(ctx.options.line_edge_color),
            )),
        }
    }

    /// Leichter Verbindungsstrich zwischen zwei Seiten-Ecken.
    fn push_side(&self, out: &mut Vec<egui::Shape>, ctx: &RenderContext<'_>, from: Vec2, to: Vec2) {
        out.push(egui::Shape::line_segment(
            [ctx.to_screen(flip(from)), ctx.to_screen(flip(to))],
            ctx.stroke(ctx.options.side_stroke_color),
        ));
    }
}
