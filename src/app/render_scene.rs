//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2], pixels_per_point: f32) -> RenderScene {
    RenderScene {
        mesh: state.mesh.clone(),
        camera: state.view.camera.clone(),
        overlay: state.overlay,
        viewport_size,
        pixels_per_point,
        options: state.options.clone(),
    }
}
