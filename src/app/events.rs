//! App-Intent Events.
//!
//! Intents sind Eingaben aus UI/System ohne direkte Mutationslogik;
//! der Controller dispatcht sie an die Feature-Handler.

use crate::core::SampleMesh;

/// Eingabe-Ereignisse der Anwendung.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Beispiel-Mesh laden (ersetzt das aktuelle Mesh)
    SampleSelected { sample: SampleMesh },
    /// Anwendung beenden
    ExitRequested,

    /// Kamera auf das geladene Mesh einpassen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (physische Pixel)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt in physischen Pixeln)
    CameraZoom {
        factor: f32,
        focus: Option<glam::Vec2>,
    },

    /// Kontrollpunkt-Anzeige umschalten
    ToggleControlPointsRequested,
    /// Normalen-Anzeige umschalten
    ToggleNormalsRequested,
    /// Eckpunkt-Anzeige umschalten
    ToggleVerticesRequested,
    /// Segment-Sehnen-Anzeige umschalten
    ToggleSegmentsRequested,
    /// Kontrollpunkte/Normalen/Eckpunkte zurück auf sichtbar
    ResetOverlaysRequested,
}
