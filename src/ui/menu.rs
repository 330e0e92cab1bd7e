//! Top-Menü (File, View).

use crate::app::{AppIntent, AppState};
use crate::core::SampleMesh;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                for sample in SampleMesh::ALL {
                    if ui.button(sample.label()).clicked() {
                        events.push(AppIntent::SampleSelected { sample });
                        ui.close();
                    }
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                let has_mesh = state.mesh.is_some();

                if ui
                    .add_enabled(has_mesh, egui::Button::new("Fit Mesh"))
                    .clicked()
                {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                // Overlay-Schalter; die Mutation läuft über Intents,
                // deshalb nur lokale Kopien an die Checkboxen
                let mut draw_control = state.overlay.draw_control_points;
                if ui.checkbox(&mut draw_control, "Control Points (C)").changed() {
                    events.push(AppIntent::ToggleControlPointsRequested);
                }

                let mut draw_normals = state.overlay.draw_normals;
                if ui.checkbox(&mut draw_normals, "Normals (N)").changed() {
                    events.push(AppIntent::ToggleNormalsRequested);
                }

                let mut draw_vertices = state.overlay.draw_vertices;
                if ui.checkbox(&mut draw_vertices, "Vertices (V)").changed() {
                    events.push(AppIntent::ToggleVerticesRequested);
                }

                let mut draw_segments = state.overlay.draw_segments;
                if ui.checkbox(&mut draw_segments, "Segments (S)").changed() {
                    events.push(AppIntent::ToggleSegmentsRequested);
                }

                if ui.button("Reset Overlays (R)").clicked() {
                    events.push(AppIntent::ResetOverlaysRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
