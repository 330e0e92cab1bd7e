//! Gemeinsamer Render-Kontext und Koordinaten-Abbildung.
//!
//! Mesh-Koordinaten haben Y nach oben, der Screen Y nach unten; jeder
//! Zeichenaufruf verwendet deshalb den geflippten Punkt `(x, -y)`.
//! Der Kontext bildet geflippte Koordinaten über Kamera-Translation und
//! -Scale auf egui-Points ab.

use crate::core::Camera2D;
use crate::shared::ViewerOptions;
use glam::Vec2;

/// Spiegelt einen Mesh-Punkt an der X-Achse (`(x, y)` → `(x, -y)`).
pub fn flip(point: Vec2) -> Vec2 {
    Vec2::new(point.x, -point.y)
}

/// Konvertiert eine RGBA-Farbe aus den Optionen nach `Color32`.
pub fn color(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

/// Read-only Kontext für alle Sub-Renderer eines Frames.
pub struct RenderContext<'a> {
    /// Kamera-Snapshot dieses Frames
    pub camera: &'a Camera2D,
    /// Viewport-Ursprung in egui-Points
    pub origin: egui::Pos2,
    /// Physische Pixel pro egui-Point
    pub pixels_per_point: f32,
    /// `pixels_per_point / camera.scale`; hält Markergrößen zoomstabil
    pub inv_scale: f32,
    /// Farben und Größen
    pub options: &'a ViewerOptions,
}

impl<'a> RenderContext<'a> {
    /// Baut den Kontext aus Kamera und Viewport-Parametern.
    pub fn new(
        camera: &'a Camera2D,
        origin: egui::Pos2,
        pixels_per_point: f32,
        options: &'a ViewerOptions,
    ) -> Self {
        Self {
            camera,
            origin,
            pixels_per_point,
            inv_scale: camera.inv_scale_factor(pixels_per_point),
            options,
        }
    }

    /// Bildet einen bereits geflippten Mesh-Punkt auf egui-Points ab.
    pub fn to_screen(&self, flipped: Vec2) -> egui::Pos2 {
        let pixels = self.camera.translation + self.camera.scale * flipped;
        egui::pos2(
            self.origin.x + pixels.x / self.pixels_per_point,
            self.origin.y + pixels.y / self.pixels_per_point,
        )
    }

    /// Konvertiert eine Länge in Mesh-Einheiten nach egui-Points.
    pub fn screen_len(&self, world_len: f32) -> f32 {
        world_len * self.camera.scale / self.pixels_per_point
    }

    /// Basis-Strich in der gegebenen Farbe, zoomstabil über `inv_scale`.
    pub fn stroke(&self, rgba: [f32; 4]) -> egui::Stroke {
        egui::Stroke::new(
            self.screen_len(self.options.stroke_width * self.inv_scale),
            color(rgba),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn identity_context<'a>(camera: &'a Camera2D, options: &'a ViewerOptions) -> RenderContext<'a> {
        RenderContext::new(camera, egui::pos2(0.0, 0.0), 1.0, options)
    }

    #[test]
    fn test_flip_negates_y_only() {
        let flipped = flip(Vec2::new(3.0, 7.0));
        assert_relative_eq!(flipped.x, 3.0);
        assert_relative_eq!(flipped.y, -7.0);
    }

    #[test]
    fn test_to_screen_applies_translation_and_scale() {
        let mut camera = Camera2D::new();
        camera.translation = Vec2::new(100.0, 40.0);
        camera.scale = 2.0;
        let options = ViewerOptions::default();
        let ctx = identity_context(&camera, &options);

        let screen = ctx.to_screen(flip(Vec2::new(5.0, 10.0)));
        assert_relative_eq!(screen.x, 110.0);
        // Y-Flip: Mesh-Y 10 landet oberhalb der Translation
        assert_relative_eq!(screen.y, 20.0);
    }

    #[test]
    fn test_marker_size_is_zoom_stable() {
        let options = ViewerOptions::default();
        for scale in [0.5f32, 1.0, 4.0, 32.0] {
            let mut camera = Camera2D::new();
            camera.scale = scale;
            let ctx = identity_context(&camera, &options);
            // Welt-Radius × invScaleFactor ergibt immer dieselbe Screen-Größe
            let screen_radius = ctx.screen_len(options.point_radius * ctx.inv_scale);
            assert_relative_eq!(screen_radius, options.point_radius, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_origin_offsets_screen_points() {
        let camera = Camera2D::new();
        let options = ViewerOptions::default();
        let ctx = RenderContext::new(&camera, egui::pos2(50.0, 30.0), 1.0, &options);
        let screen = ctx.to_screen(Vec2::ZERO);
        assert_relative_eq!(screen.x, 50.0);
        assert_relative_eq!(screen.y, 30.0);
    }
}
