//! Application Controller für zentrale Event-Verarbeitung.

use super::{handlers, render_scene, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent. Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        match intent {
            // === Mesh & Anwendung ===
            AppIntent::SampleSelected { sample } => handlers::mesh::load_sample(state, sample),
            AppIntent::ExitRequested => handlers::view::request_exit(state),

            // === Kamera & Viewport ===
            AppIntent::ResetCameraRequested => handlers::view::reset_camera(state),
            AppIntent::ZoomInRequested => handlers::view::zoom_in(state),
            AppIntent::ZoomOutRequested => handlers::view::zoom_out(state),
            AppIntent::ViewportResized { size } => handlers::view::set_viewport_size(state, size),
            AppIntent::CameraPan { delta } => handlers::view::pan(state, delta),
            AppIntent::CameraZoom { factor, focus } => {
                handlers::view::zoom_towards(state, factor, focus)
            }

            // === Overlay-Schalter ===
            AppIntent::ToggleControlPointsRequested => {
                handlers::overlay::toggle_control_points(state)
            }
            AppIntent::ToggleNormalsRequested => handlers::overlay::toggle_normals(state),
            AppIntent::ToggleVerticesRequested => handlers::overlay::toggle_vertices(state),
            AppIntent::ToggleSegmentsRequested => handlers::overlay::toggle_segments(state),
            AppIntent::ResetOverlaysRequested => handlers::overlay::reset(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(
        &self,
        state: &AppState,
        viewport_size: [f32; 2],
        pixels_per_point: f32,
    ) -> RenderScene {
        render_scene::build(state, viewport_size, pixels_per_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SampleMesh;

    fn handle(state: &mut AppState, intent: AppIntent) {
        AppController::new()
            .handle_intent(state, intent)
            .expect("Intent-Verarbeitung fehlgeschlagen");
    }

    #[test]
    fn test_sample_selected_replaces_mesh_and_fits_camera() {
        let mut state = AppState::new();
        state.view.viewport_size = [800.0, 600.0];

        handle(&mut state, AppIntent::SampleSelected { sample: SampleMesh::Arch });
        assert_eq!(state.b_quad_count(), 3);
        // fit_to_bounds hat die Kamera vom Ausgangszustand wegbewegt
        assert_ne!(state.view.camera.scale, 1.0);

        handle(&mut state, AppIntent::SampleSelected { sample: SampleMesh::Quad });
        assert_eq!(state.b_quad_count(), 1);
        assert_eq!(state.stencil_segment_count(), 0);
    }

    #[test]
    fn test_toggle_intents_flip_single_flags() {
        let mut state = AppState::new();

        handle(&mut state, AppIntent::ToggleNormalsRequested);
        assert!(!state.overlay.draw_normals);
        // Die übrigen Schalter bleiben unverändert
        assert!(state.overlay.draw_control_points);
        assert!(state.overlay.draw_vertices);
        assert!(!state.overlay.draw_segments);

        handle(&mut state, AppIntent::ToggleSegmentsRequested);
        assert!(state.overlay.draw_segments);
    }

    #[test]
    fn test_reset_overlays_keeps_segments() {
        let mut state = AppState::new();
        handle(&mut state, AppIntent::ToggleControlPointsRequested);
        handle(&mut state, AppIntent::ToggleSegmentsRequested);

        handle(&mut state, AppIntent::ResetOverlaysRequested);
        assert!(state.overlay.draw_control_points);
        assert!(state.overlay.draw_segments);
    }

    #[test]
    fn test_exit_intent_sets_flag() {
        let mut state = AppState::new();
        handle(&mut state, AppIntent::ExitRequested);
        assert!(state.should_exit);
    }
}
