//! Application State: geladenes Mesh, View und Overlay-Schalter.

use crate::core::{Camera2D, OverlayState, PathMesh};
use crate::shared::ViewerOptions;
use std::sync::Arc;

/// View-bezogener Anwendungszustand
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in physischen Pixeln
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell geladenes Mesh (None = nichts geladen)
    pub mesh: Option<Arc<PathMesh>>,
    /// View-State
    pub view: ViewState,
    /// Overlay-Schalter der Debug-Ansicht
    pub overlay: OverlayState,
    /// Laufzeit-Optionen (Farben, Größen)
    pub options: ViewerOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            mesh: None,
            view: ViewState::new(),
            overlay: OverlayState::new(),
            options: ViewerOptions::default(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der B-Quads zurück (für UI-Anzeige)
    pub fn b_quad_count(&self) -> usize {
        self.mesh.as_ref().map_or(0, |mesh| mesh.b_quad_count)
    }

    /// Gibt die Anzahl der Stencil-Segmente zurück (für UI-Anzeige)
    pub fn stencil_segment_count(&self) -> usize {
        self.mesh
            .as_ref()
            .map_or(0, |mesh| mesh.stencil_segment_count)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
