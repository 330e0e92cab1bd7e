//! Handler für die Overlay-Schalter.

use crate::app::AppState;

/// Schaltet die Kontrollpunkt-Anzeige um.
pub fn toggle_control_points(state: &mut AppState) {
    state.overlay.draw_control_points = !state.overlay.draw_control_points;
}

/// Schaltet die Normalen-Anzeige um.
pub fn toggle_normals(state: &mut AppState) {
    state.overlay.draw_normals = !state.overlay.draw_normals;
}

/// Schaltet die Eckpunkt-Anzeige um.
pub fn toggle_vertices(state: &mut AppState) {
    state.overlay.draw_vertices = !state.overlay.draw_vertices;
}

/// Schaltet die Segment-Sehnen-Anzeige um.
pub fn toggle_segments(state: &mut AppState) {
    state.overlay.draw_segments = !state.overlay.draw_segments;
}

/// Setzt Kontrollpunkte/Normalen/Eckpunkte zurück (Segmente unberührt).
pub fn reset(state: &mut AppState) {
    state.overlay.reset();
}
