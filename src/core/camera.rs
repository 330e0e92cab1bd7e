//! 2D-Kamera für Pan und Zoom.
//!
//! Die Kamera liefert dem Renderer nur `translation` und `scale`;
//! mutiert wird sie ausschließlich durch Pointer-Gesten und Menü-Intents.

use glam::Vec2;

/// 2D-Kamera: Translation in physischen Pixeln, Scale in Pixeln pro Mesh-Einheit.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Verschiebung des Mesh-Ursprungs in physischen Pixeln
    pub translation: Vec2,
    /// Pixel pro Mesh-Einheit (1.0 = unskaliert)
    pub scale: f32,
}

impl Camera2D {
    /// Minimaler Scale-Faktor.
    pub const SCALE_MIN: f32 = 1e-3;
    /// Maximaler Scale-Faktor.
    pub const SCALE_MAX: f32 = 1e3;
    /// Rand-Anteil beim Einpassen eines Meshes in den Viewport.
    pub const FIT_MARGIN: f32 = 0.9;

    /// Erstellt eine neue Kamera ohne Verschiebung.
    pub fn new() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: 1.0,
        }
    }

    /// Verschiebt die Kamera (Pan) um ein Pixel-Delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.translation += delta;
    }

    /// Zoomt um `factor` und hält dabei den Fokuspunkt (Pixel) fest.
    ///
    /// Ohne Fokuspunkt wird um den Mesh-Ursprung gezoomt.
    pub fn zoom_towards(&mut self, factor: f32, focus: Option<Vec2>) {
        let old_scale = self.scale;
        self.scale = (self.scale * factor).clamp(Self::SCALE_MIN, Self::SCALE_MAX);

        if let Some(focus) = focus {
            // Fixpunkt-Zoom: der Punkt unter dem Cursor bleibt stehen
            let applied = self.scale / old_scale;
            self.translation = focus - applied * (focus - self.translation);
        }
    }

    /// Kompensationsfaktor, der Marker- und Strichgrößen unabhängig vom
    /// Zoom konstant in Screen-Pixeln hält.
    pub fn inv_scale_factor(&self, pixels_per_point: f32) -> f32 {
        pixels_per_point / self.scale
    }

    /// Passt die Kamera so an, dass `bounds` (Mesh-Koordinaten, Y nach
    /// oben) zentriert in den Viewport (physische Pixel) passt.
    pub fn fit_to_bounds(&mut self, bounds: (Vec2, Vec2), viewport: Vec2) {
        let (min, max) = bounds;
        let size = max - min;

        let scale_x = if size.x > f32::EPSILON { viewport.x / size.x } else { f32::MAX };
        let scale_y = if size.y > f32::EPSILON { viewport.y / size.y } else { f32::MAX };
        let scale = (Self::FIT_MARGIN * scale_x.min(scale_y))
            .clamp(Self::SCALE_MIN, Self::SCALE_MAX);
        let scale = if scale.is_finite() { scale } else { 1.0 };

        // Mesh-Y wächst nach oben, Screen-Y nach unten: Zentrum geflippt
        let center_flipped = Vec2::new((min.x + max.x) * 0.5, -(min.y + max.y) * 0.5);
        self.scale = scale;
        self.translation = viewport * 0.5 - scale * center_flipped;
    }

    /// Setzt die Kamera auf den Ausgangszustand zurück.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
