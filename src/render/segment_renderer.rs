//! Renderer für Stencil-Segmente.

use super::normal_arrow::{push_normal_arrow, NormalKind};
use super::types::{color, flip, RenderContext};
use crate::core::{OverlayState, PathMesh, SegmentLayout};
use egui::epaint::CircleShape;

/// Zeichnet Stencil-Segmente: Endpunkt-Marker, Kontrollpunkt-Hüllen,
/// Normalen-Pfeile und optionale rohe Sehnen.
pub struct SegmentRenderer {
    /// Datensatz-Layout der Segment-Puffer
    pub layout: SegmentLayout,
}

impl SegmentRenderer {
    /// Erstellt einen Renderer mit dem Kurven-Layout.
    pub fn new() -> Self {
        Self {
            layout: SegmentLayout::CURVE,
        }
    }

    /// Rendert alle Stencil-Segmente des Meshes in die Shape-Liste.
    pub fn render(
        &self,
        out: &mut Vec<egui::Shape>,
        ctx: &RenderContext<'_>,
        mesh: &PathMesh,
        overlay: &OverlayState,
    ) {
        for index in 0..mesh.stencil_segment_count {
            let segment = mesh.stencil_segment(index, self.layout);

            if overlay.draw_normals {
                push_normal_arrow(out, ctx, segment.from, segment.from_normal, NormalKind::Edge);
                push_normal_arrow(out, ctx, segment.to, segment.to_normal, NormalKind::Edge);

                if overlay.draw_control_points {
                    if let (Some(control), Some(normal)) = (segment.control, segment.control_normal)
                    {
                        push_normal_arrow(out, ctx, control, normal, NormalKind::Edge);
                    }
                }
            }

            // Endpunkt-Marker, eigene Füll- und Randfarbe (nicht die der B-Quad-Ecken)
            let radius = ctx.screen_len(ctx.options.segment_point_radius * ctx.inv_scale);
            for endpoint in [segment.from, segment.to] {
                out.push(egui::Shape::Circle(CircleShape {
                    center: ctx.to_screen(flip(endpoint)),
                    radius,
                    fill: color(ctx.options.segment_point_color),
                    stroke: ctx.stroke(ctx.options.segment_point_stroke_color),
                }));
            }

            if overlay.draw_control_points {
                if let Some(control) = segment.control {
                    self.push_control_hull(out, ctx, segment.from, control, segment.to, radius);
                }
            }

            // Rohe Sehne: bewusst immer gerade, auch bei gekrümmten Segmenten
            if overlay.draw_segments {
                out.push(egui::Shape::line_segment(
                    [ctx.to_screen(flip(segment.from)), ctx.to_screen(flip(segment.to))],
                    ctx.stroke(ctx.options.segment_chord_color),
                ));
            }
        }
    }

    /// Gestrichelte Hülle `from → control → to` plus Kontrollpunkt-Marker.
    fn push_control_hull(
        &self,
        out: &mut Vec<egui::Shape>,
        ctx: &RenderContext<'_>,
        from: glam::Vec2,
        control: glam::Vec2,
        to: glam::Vec2,
        radius: f32,
    ) {
        let dash = ctx.screen_len(ctx.options.dash_length * ctx.inv_scale);
        out.extend(egui::Shape::dashed_line(
            &[
                ctx.to_screen(flip(from)),
                ctx.to_screen(flip(control)),
                ctx.to_screen(flip(to)),
            ],
            ctx.stroke(ctx.options.hull_color),
            dash,
            dash,
        ));

        out.push(egui::Shape::Circle(CircleShape {
            center: ctx.to_screen(flip(control)),
            radius,
            fill: color(ctx.options.control_point_color),
            stroke: ctx.stroke(ctx.options.control_point_stroke_color),
        }));
    }
}

impl Default for SegmentRenderer {
    fn default() -> Self {
        Self::new()
    }
}
