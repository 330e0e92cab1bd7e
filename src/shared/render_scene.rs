//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::ViewerOptions;
use crate::core::{Camera2D, OverlayState, PathMesh};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Das aktuell geladene Mesh (None = Redraw ist ein No-op)
    pub mesh: Option<Arc<PathMesh>>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Overlay-Schalter für diesen Frame
    pub overlay: OverlayState,
    /// Viewport-Größe in physischen Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Physische Pixel pro egui-Point (devicePixelRatio-Äquivalent)
    pub pixels_per_point: f32,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: ViewerOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein Mesh für Rendering vorhanden ist.
    pub fn has_mesh(&self) -> bool {
        self.mesh.is_some()
    }
}
