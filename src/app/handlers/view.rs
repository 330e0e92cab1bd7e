//! Handler für Kamera und Viewport.

use crate::app::AppState;
use glam::Vec2;

/// Passt die Kamera auf das geladene Mesh ein.
///
/// Ohne Mesh (oder ohne finite Punkte) wird auf den Ausgangszustand
/// zurückgesetzt.
pub fn reset_camera(state: &mut AppState) {
    let bounds = state.mesh.as_ref().and_then(|mesh| mesh.bounds());
    match bounds {
        Some(bounds) => {
            let viewport = Vec2::from(state.view.viewport_size);
            state.view.camera.fit_to_bounds(bounds, viewport);
        }
        None => state.view.camera.reset(),
    }
}

/// Zoomt stufenweise hinein (auf die Viewport-Mitte).
pub fn zoom_in(state: &mut AppState) {
    let step = state.options.camera_zoom_step;
    zoom(state, step);
}

/// Zoomt stufenweise heraus (auf die Viewport-Mitte).
pub fn zoom_out(state: &mut AppState) {
    let step = state.options.camera_zoom_step;
    zoom(state, 1.0 / step);
}

fn zoom(state: &mut AppState, factor: f32) {
    let center = Vec2::from(state.view.viewport_size) * 0.5;
    state.view.camera.zoom_towards(factor, Some(center));
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Verschiebt die Kamera um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt mit optionalem Fokuspunkt (physische Pixel).
pub fn zoom_towards(state: &mut AppState, factor: f32, focus: Option<Vec2>) {
    state.view.camera.zoom_towards(factor, focus);
}

/// Markiert die Anwendung zum kontrollierten Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
