//! Overlay-Schalter der Debug-Ansicht.

/// Die vier unabhängigen Anzeige-Schalter.
///
/// Wird per Referenz in den Render-Aufruf gereicht, nicht als globaler
/// Zustand gehalten; mehrere Views würden sich nicht gegenseitig stören.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayState {
    /// Kontrollpunkt-Marker und gestrichelte Hüllen zeichnen
    pub draw_control_points: bool,
    /// Normalen-Pfeile zeichnen
    pub draw_normals: bool,
    /// B-Quad-Eckpunkte zeichnen
    pub draw_vertices: bool,
    /// Rohe Segment-Sehnen zeichnen
    pub draw_segments: bool,
}

impl OverlayState {
    /// Standard-Belegung: alles an außer Segment-Sehnen.
    pub fn new() -> Self {
        Self {
            draw_control_points: true,
            draw_normals: true,
            draw_vertices: true,
            draw_segments: false,
        }
    }

    /// Setzt Kontrollpunkte, Normalen und Eckpunkte zurück auf `true`.
    ///
    /// Der Segment-Schalter bleibt absichtlich unverändert.
    pub fn reset(&mut self) {
        self.draw_control_points = true;
        self.draw_normals = true;
        self.draw_vertices = true;
    }
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_overlay_flags() {
        let overlay = OverlayState::new();
        assert!(overlay.draw_control_points);
        assert!(overlay.draw_normals);
        assert!(overlay.draw_vertices);
        assert!(!overlay.draw_segments);
    }

    #[test]
    fn test_reset_restores_triple_regardless_of_prior_state() {
        let mut overlay = OverlayState {
            draw_control_points: false,
            draw_normals: false,
            draw_vertices: false,
            draw_segments: false,
        };
        overlay.reset();
        assert!(overlay.draw_control_points);
        assert!(overlay.draw_normals);
        assert!(overlay.draw_vertices);
    }

    #[test]
    fn test_reset_leaves_segments_untouched() {
        // Beide Ausgangslagen prüfen: an bleibt an, aus bleibt aus
        let mut with_segments = OverlayState::new();
        with_segments.draw_segments = true;
        with_segments.reset();
        assert!(with_segments.draw_segments);

        let mut without_segments = OverlayState::new();
        without_segments.draw_segments = false;
        without_segments.reset();
        assert!(!without_segments.draw_segments);
    }
}
