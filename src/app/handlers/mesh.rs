//! Handler für das Laden von Meshes.

use crate::app::AppState;
use crate::core::SampleMesh;
use std::sync::Arc;

/// Lädt ein Beispiel-Mesh und passt die Kamera darauf ein.
///
/// Das neue Mesh ersetzt die Referenz für den nächsten Redraw;
/// ein laufender Frame liest noch das alte (Rendering ist synchron).
pub fn load_sample(state: &mut AppState, sample: SampleMesh) {
    let mesh = sample.build_mesh();
    log::info!(
        "Beispiel-Mesh geladen: {} ({} B-Quads, {} Segmente)",
        sample.label(),
        mesh.b_quad_count,
        mesh.stencil_segment_count
    );

    state.mesh = Some(Arc::new(mesh));
    super::view::reset_camera(state);
}
