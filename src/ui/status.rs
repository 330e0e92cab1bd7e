//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if state.mesh.is_some() {
                ui.label(format!(
                    "B-Quads: {} | Segments: {}",
                    state.b_quad_count(),
                    state.stencil_segment_count()
                ));
            } else {
                ui.label("No mesh loaded");
            }

            ui.separator();

            ui.label(format!(
                "Scale: {:.2}x | Translation: ({:.1}, {:.1})",
                state.view.camera.scale,
                state.view.camera.translation.x,
                state.view.camera.translation.y
            ));

            ui.separator();

            // Aktive Overlays als Kürzel (wie die Shortcut-Tasten)
            let overlay = &state.overlay;
            let mut active = String::new();
            for (flag, letter) in [
                (overlay.draw_control_points, 'C'),
                (overlay.draw_normals, 'N'),
                (overlay.draw_vertices, 'V'),
                (overlay.draw_segments, 'S'),
            ] {
                active.push(if flag { letter } else { '·' });
            }
            ui.label(format!("Overlays: {}", active));

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
