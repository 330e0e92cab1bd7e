//! Shape-Listen-Rendering der Mesh-Debug-Ansicht.
//!
//! Die Renderer erzeugen pro Frame eine Liste zustandsloser
//! `egui::Shape`-Werte. Strich- und Füllzustand hängt damit immer am
//! einzelnen Shape und kann nie ins nächste Primitiv lecken.

mod bquad_renderer;
mod normal_arrow;
mod segment_renderer;
mod types;

pub use bquad_renderer::BQuadRenderer;
pub use normal_arrow::{
    push_normal_arrow, NormalKind, ARROWHEAD_ANGLE, ARROWHEAD_LENGTH, NORMAL_LENGTH_B_VERTEX,
    NORMAL_LENGTH_EDGE,
};
pub use segment_renderer::SegmentRenderer;
pub use types::{color, flip, RenderContext};

use crate::shared::RenderScene;

/// Haupt-Renderer der Debug-Ansicht.
///
/// Rendert synchron in eine Shape-Liste. Einen eigenen Redraw-Takt gibt
/// es nicht, der Aufrufer triggert jeden Frame über sein Dirty-Signal.
#[derive(Default)]
pub struct Renderer {
    bquad_renderer: BQuadRenderer,
    segment_renderer: SegmentRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer.
    pub fn new() -> Self {
        Self {
            bquad_renderer: BQuadRenderer::new(),
            segment_renderer: SegmentRenderer::new(),
        }
    }

    /// Rendert die komplette Szene als Shape-Liste.
    ///
    /// Ohne Mesh ist der Redraw ein No-op: nichts löschen, nichts
    /// zeichnen. Mit Mesh wird zuerst der vorherige Frame mit dem
    /// Hintergrund überdeckt, dann B-Quads, dann Segmente.
    pub fn render_scene(&self, scene: &RenderScene, origin: egui::Pos2) -> Vec<egui::Shape> {
        let mut shapes = Vec::new();

        let Some(mesh) = scene.mesh.as_deref() else {
            log::debug!("Kein Mesh geladen, Redraw ist ein No-op");
            return shapes;
        };

        let ctx = RenderContext::new(
            &scene.camera,
            origin,
            scene.pixels_per_point,
            &scene.options,
        );

        let viewport_points = egui::vec2(
            scene.viewport_size[0] / scene.pixels_per_point,
            scene.viewport_size[1] / scene.pixels_per_point,
        );
        shapes.push(egui::Shape::rect_filled(
            egui::Rect::from_min_size(origin, viewport_points),
            egui::CornerRadius::ZERO,
            color(scene.options.background_color),
        ));

        self.bquad_renderer
            .render(&mut shapes, &ctx, mesh, &scene.overlay);
        self.segment_renderer
            .render(&mut shapes, &ctx, mesh, &scene.overlay);

        shapes
    }
}
