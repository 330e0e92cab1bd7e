//! Zentrale Konfiguration des Mesh-Debuggers.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Marker-Größen (Screen-Pixel, via invScaleFactor zoomstabil) ─────

/// Radius der B-Quad-Eckpunkt-Marker.
pub const POINT_RADIUS: f32 = 4.0;
/// Radius der Segment-Endpunkt- und Kontrollpunkt-Marker.
pub const SEGMENT_POINT_RADIUS: f32 = 3.0;
/// Basis-Strichstärke aller Kanten und Pfeile.
pub const STROKE_WIDTH: f32 = 1.0;
/// Strichellänge der Kontrollpunkt-Hülle.
pub const DASH_LENGTH: f32 = 2.0;

// ── Farben (RGBA) ───────────────────────────────────────────────────

/// Hintergrund der Zeichenfläche.
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Gerade B-Quad-Kanten (Blau).
pub const LINE_EDGE_COLOR: [f32; 4] = [0.0, 0.25, 0.8, 1.0];
/// Gekrümmte B-Quad-Kanten (Magenta).
pub const CURVE_EDGE_COLOR: [f32; 4] = [0.75, 0.0, 0.75, 1.0];
/// Leichte Verbindungsstriche der B-Quad-Seiten (Hellgrau).
pub const SIDE_STROKE_COLOR: [f32; 4] = [0.78, 0.78, 0.78, 1.0];
/// B-Quad-Eckpunkt-Marker (Dunkelgrau).
pub const VERTEX_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
/// Füllung der Segment-Endpunkt-Marker (Grün).
pub const SEGMENT_POINT_COLOR: [f32; 4] = [0.1, 0.65, 0.25, 1.0];
/// Umrandung der Segment-Endpunkt-Marker (Dunkelgrün).
pub const SEGMENT_POINT_STROKE_COLOR: [f32; 4] = [0.0, 0.4, 0.15, 1.0];
/// Füllung der Kontrollpunkt-Marker (Orange).
pub const CONTROL_POINT_COLOR: [f32; 4] = [1.0, 0.6, 0.0, 1.0];
/// Umrandung der Kontrollpunkt-Marker (Dunkelorange).
pub const CONTROL_POINT_STROKE_COLOR: [f32; 4] = [0.7, 0.38, 0.0, 1.0];
/// Gestrichelte Kontrollpunkt-Hülle (Grau).
pub const HULL_COLOR: [f32; 4] = [0.55, 0.55, 0.55, 1.0];
/// Rohe Segment-Sehnen (Schwarz).
pub const SEGMENT_CHORD_COLOR: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
/// Normalen-Pfeile vom Typ `edge` (Rot).
pub const NORMAL_EDGE_COLOR: [f32; 4] = [0.85, 0.1, 0.1, 1.0];
/// Normalen-Pfeile vom Typ `bVertex` (Petrol).
pub const NORMAL_B_VERTEX_COLOR: [f32; 4] = [0.0, 0.55, 0.55, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `bquad_mesh_debugger.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerOptions {
    // ── Marker ──────────────────────────────────────────────────
    /// Radius der B-Quad-Eckpunkt-Marker in Screen-Pixeln
    pub point_radius: f32,
    /// Radius der Segment-Punkt-Marker in Screen-Pixeln
    pub segment_point_radius: f32,
    /// Basis-Strichstärke in Screen-Pixeln
    pub stroke_width: f32,
    /// Strichellänge der Kontrollpunkt-Hülle in Screen-Pixeln
    pub dash_length: f32,

    // ── Farben ──────────────────────────────────────────────────
    /// Hintergrundfarbe der Zeichenfläche
    pub background_color: [f32; 4],
    /// Farbe gerader B-Quad-Kanten
    pub line_edge_color: [f32; 4],
    /// Farbe gekrümmter B-Quad-Kanten
    pub curve_edge_color: [f32; 4],
    /// Farbe der seitlichen Verbindungsstriche
    pub side_stroke_color: [f32; 4],
    /// Farbe der Eckpunkt-Marker
    pub vertex_color: [f32; 4],
    /// Füllfarbe der Segment-Punkt-Marker
    pub segment_point_color: [f32; 4],
    /// Umrandungsfarbe der Segment-Punkt-Marker
    pub segment_point_stroke_color: [f32; 4],
    /// Füllfarbe der Kontrollpunkt-Marker
    pub control_point_color: [f32; 4],
    /// Umrandungsfarbe der Kontrollpunkt-Marker
    pub control_point_stroke_color: [f32; 4],
    /// Farbe der gestrichelten Kontrollpunkt-Hülle
    pub hull_color: [f32; 4],
    /// Farbe der rohen Segment-Sehnen
    pub segment_chord_color: [f32; 4],
    /// Farbe der Kanten-Normalen
    pub normal_edge_color: [f32; 4],
    /// Farbe der B-Vertex-Normalen
    pub normal_b_vertex_color: [f32; 4],

    // ── Kamera ──────────────────────────────────────────────────
    /// Zoom-Schritt bei Menü-Buttons
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            point_radius: POINT_RADIUS,
            segment_point_radius: SEGMENT_POINT_RADIUS,
            stroke_width: STROKE_WIDTH,
            dash_length: DASH_LENGTH,

            background_color: BACKGROUND_COLOR,
            line_edge_color: LINE_EDGE_COLOR,
            curve_edge_color: CURVE_EDGE_COLOR,
            side_stroke_color: SIDE_STROKE_COLOR,
            vertex_color: VERTEX_COLOR,
            segment_point_color: SEGMENT_POINT_COLOR,
            segment_point_stroke_color: SEGMENT_POINT_STROKE_COLOR,
            control_point_color: CONTROL_POINT_COLOR,
            control_point_stroke_color: CONTROL_POINT_STROKE_COLOR,
            hull_color: HULL_COLOR,
            segment_chord_color: SEGMENT_CHORD_COLOR,
            normal_edge_color: NORMAL_EDGE_COLOR,
            normal_b_vertex_color: NORMAL_B_VERTEX_COLOR,

            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bquad_mesh_debugger"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bquad_mesh_debugger.toml")
    }
}
