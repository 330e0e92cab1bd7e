//! Dekodierung der gepackten Mesh-Puffer.
//!
//! Ein `PathMesh` besteht aus flachen `f32`-Puffern, wie sie der
//! Partitionierer liefert: B-Quad-Eckpunkte und Stencil-Segmente mit
//! parallelen Normalen. Adressiert wird immer über
//! `(primitiv_index * stride + slot) * 2 + komponente`; Strides und
//! Slots sind Format-Konstanten, nie aus der Pufferlänge abgeleitet.

use glam::Vec2;

/// Punkte pro B-Quad-Datensatz (4 Ecken + 2 optionale Kontrollpunkte).
pub const B_QUAD_POINT_STRIDE: usize = 6;

// Slot-Offsets innerhalb eines B-Quad-Datensatzes.
const SLOT_UPPER_LEFT: usize = 0;
const SLOT_UPPER_CONTROL: usize = 1;
const SLOT_UPPER_RIGHT: usize = 2;
const SLOT_LOWER_RIGHT: usize = 3;
const SLOT_LOWER_CONTROL: usize = 4;
const SLOT_LOWER_LEFT: usize = 5;

/// Sentinel-Wert für fehlende Kontrollpunkte im Puffer.
///
/// Der Accessor behandelt jede nicht-finite Komponente als "kein Punkt";
/// beim Erzeugen eigener Puffer wird dieser Wert geschrieben.
pub const MISSING_POINT: f32 = f32::INFINITY;

/// Unveränderliches Mesh aus parallelen, gepackten Puffern.
///
/// Wird einmal pro Ladevorgang erzeugt und ersetzt dabei das vorherige
/// Mesh; während eines Render-Durchlaufs nur geliehen, nie mutiert.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMesh {
    /// B-Quad-Eckpunkte, 6 Punkte (12 Floats) pro B-Quad
    pub b_quad_vertex_positions: Vec<f32>,
    /// Anzahl der B-Quads
    pub b_quad_count: usize,
    /// Stencil-Segment-Punkte, `point_stride` Punkte pro Segment
    pub stencil_segments: Vec<f32>,
    /// Normalen-Puffer, gleiche Indizierung wie `stencil_segments`
    pub stencil_normals: Vec<f32>,
    /// Anzahl der Stencil-Segmente
    pub stencil_segment_count: usize,
}

/// Dekodierter B-Quad-Datensatz.
///
/// Fehlende Kontrollpunkte sind hier bereits echte `None`-Werte;
/// Renderer verzweigen auf das `Option`, nicht auf Sentinel-Floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BQuad {
    pub upper_left: Vec2,
    pub upper_control: Option<Vec2>,
    pub upper_right: Vec2,
    pub lower_right: Vec2,
    pub lower_control: Option<Vec2>,
    pub lower_left: Vec2,
}

/// Dekodiertes Stencil-Segment samt Normalen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StencilSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub control: Option<Vec2>,
    pub from_normal: Vec2,
    pub to_normal: Vec2,
    pub control_normal: Option<Vec2>,
}

/// Datensatz-Layout der Stencil-Segmente: Stride plus Slot-Indizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentLayout {
    /// Punkte pro Segment-Datensatz
    pub point_stride: usize,
    /// Slots der beiden Endpunkte
    pub endpoint_slots: [usize; 2],
    /// Slot des optionalen Kontrollpunkts
    pub control_slot: Option<usize>,
}

impl SegmentLayout {
    /// Kurven-Layout: Endpunkte außen, Kontrollpunkt in der Mitte.
    pub const CURVE: Self = Self {
        point_stride: 3,
        endpoint_slots: [0, 2],
        control_slot: Some(1),
    };

    /// Linien-Layout ohne Kontrollpunkt-Slot.
    pub const LINE: Self = Self {
        point_stride: 2,
        endpoint_slots: [0, 1],
        control_slot: None,
    };
}

/// Liest den Punkt an `(primitiv * stride + slot)` aus einem flachen Puffer.
///
/// Keine Bereichsprüfung über die Zusicherung hinaus; Indizes außerhalb
/// der Zählerangaben sind ein Aufruferfehler.
pub fn point_at(buffer: &[f32], primitive: usize, stride: usize, slot: usize) -> Vec2 {
    debug_assert!(slot < stride, "Slot {} außerhalb des Strides {}", slot, stride);
    let base = (primitive * stride + slot) * 2;
    debug_assert!(
        base + 1 < buffer.len(),
        "Puffer-Index {} außerhalb der Länge {}",
        base + 1,
        buffer.len()
    );
    Vec2::new(buffer[base], buffer[base + 1])
}

/// Wie [`point_at`], dekodiert aber den Fehlend-Sentinel zu `None`.
pub fn optional_point_at(
    buffer: &[f32],
    primitive: usize,
    stride: usize,
    slot: usize,
) -> Option<Vec2> {
    let point = point_at(buffer, primitive, stride, slot);
    if point.is_finite() {
        Some(point)
    } else {
        None
    }
}

impl PathMesh {
    /// Erstellt ein leeres Mesh (kein B-Quad, kein Segment).
    pub fn empty() -> Self {
        Self {
            b_quad_vertex_positions: Vec::new(),
            b_quad_count: 0,
            stencil_segments: Vec::new(),
            stencil_normals: Vec::new(),
            stencil_segment_count: 0,
        }
    }

    /// Gibt zurück, ob das Mesh weder B-Quads noch Segmente enthält.
    pub fn is_empty(&self) -> bool {
        self.b_quad_count == 0 && self.stencil_segment_count == 0
    }

    /// Dekodiert den B-Quad-Datensatz `index`.
    pub fn b_quad(&self, index: usize) -> BQuad {
        debug_assert!(index < self.b_quad_count, "B-Quad-Index {} >= {}", index, self.b_quad_count);
        let buffer = &self.b_quad_vertex_positions;
        BQuad {
            upper_left: point_at(buffer, index, B_QUAD_POINT_STRIDE, SLOT_UPPER_LEFT),
            upper_control: optional_point_at(buffer, index, B_QUAD_POINT_STRIDE, SLOT_UPPER_CONTROL),
            upper_right: point_at(buffer, index, B_QUAD_POINT_STRIDE, SLOT_UPPER_RIGHT),
            lower_right: point_at(buffer, index, B_QUAD_POINT_STRIDE, SLOT_LOWER_RIGHT),
            lower_control: optional_point_at(buffer, index, B_QUAD_POINT_STRIDE, SLOT_LOWER_CONTROL),
            lower_left: point_at(buffer, index, B_QUAD_POINT_STRIDE, SLOT_LOWER_LEFT),
        }
    }

    /// Dekodiert das Stencil-Segment `index` samt paralleler Normalen.
    ///
    /// Die Kontrollpunkt-Normale ist nur gesetzt, wenn auch der
    /// Kontrollpunkt selbst vorhanden ist.
    pub fn stencil_segment(&self, index: usize, layout: SegmentLayout) -> StencilSegment {
        debug_assert!(
            index < self.stencil_segment_count,
            "Segment-Index {} >= {}",
            index,
            self.stencil_segment_count
        );
        let stride = layout.point_stride;
        let [slot_from, slot_to] = layout.endpoint_slots;

        let control = layout
            .control_slot
            .and_then(|slot| optional_point_at(&self.stencil_segments, index, stride, slot));
        let control_normal = match (control, layout.control_slot) {
            (Some(_), Some(slot)) => {
                optional_point_at(&self.stencil_normals, index, stride, slot)
            }
            _ => None,
        };

        StencilSegment {
            from: point_at(&self.stencil_segments, index, stride, slot_from),
            to: point_at(&self.stencil_segments, index, stride, slot_to),
            control,
            from_normal: point_at(&self.stencil_normals, index, stride, slot_from),
            to_normal: point_at(&self.stencil_normals, index, stride, slot_to),
            control_normal,
        }
    }

    /// Bounding-Box über alle finiten Punkte beider Punkt-Puffer.
    ///
    /// Sentinel-Einträge (fehlende Kontrollpunkte) werden übersprungen.
    /// `None` bei einem Mesh ohne finite Punkte.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        let mut any = false;

        let points = self
            .b_quad_vertex_positions
            .chunks_exact(2)
            .chain(self.stencil_segments.chunks_exact(2));
        for chunk in points {
            let point = Vec2::new(chunk[0], chunk[1]);
            if !point.is_finite() {
                continue;
            }
            min = min.min(point);
            max = max.max(point);
            any = true;
        }

        any.then_some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Baut ein Mesh mit einem B-Quad; obere Kante mit, untere ohne Kontrollpunkt.
    fn one_quad_mesh() -> PathMesh {
        PathMesh {
            b_quad_vertex_positions: vec![
                0.0, 10.0, // upper_left
                5.0, 14.0, // upper_control
                10.0, 10.0, // upper_right
                10.0, 0.0, // lower_right
                MISSING_POINT, MISSING_POINT, // lower_control fehlt
                0.0, 0.0, // lower_left
            ],
            b_quad_count: 1,
            stencil_segments: Vec::new(),
            stencil_normals: Vec::new(),
            stencil_segment_count: 0,
        }
    }

    #[test]
    fn test_b_quad_decodes_corners_and_controls() {
        let mesh = one_quad_mesh();
        let quad = mesh.b_quad(0);

        assert_relative_eq!(quad.upper_left.x, 0.0);
        assert_relative_eq!(quad.upper_left.y, 10.0);
        assert_relative_eq!(quad.lower_right.x, 10.0);
        assert_eq!(quad.upper_control, Some(Vec2::new(5.0, 14.0)));
        assert_eq!(quad.lower_control, None);
    }

    #[test]
    fn test_missing_sentinel_decodes_to_none() {
        // NaN und Unendlich zählen beide als "kein Punkt"
        let buffer = vec![f32::NAN, 1.0, 2.0, 3.0];
        assert_eq!(optional_point_at(&buffer, 0, 2, 0), None);
        assert_eq!(optional_point_at(&buffer, 0, 2, 1), Some(Vec2::new(2.0, 3.0)));
    }

    #[test]
    fn test_point_at_uses_stride_and_slot() {
        // Zwei Datensätze mit Stride 3: zweiter Datensatz, Slot 2
        let buffer: Vec<f32> = (0..12).map(|i| i as f32).collect();
        let point = point_at(&buffer, 1, 3, 2);
        assert_relative_eq!(point.x, 10.0);
        assert_relative_eq!(point.y, 11.0);
    }

    #[test]
    fn test_stencil_segment_parallel_normals() {
        let mesh = PathMesh {
            b_quad_vertex_positions: Vec::new(),
            b_quad_count: 0,
            stencil_segments: vec![0.0, 0.0, 5.0, 5.0, 10.0, 0.0],
            stencil_normals: vec![0.0, -1.0, 0.0, 1.0, 1.0, 0.0],
            stencil_segment_count: 1,
        };

        let segment = mesh.stencil_segment(0, SegmentLayout::CURVE);
        assert_eq!(segment.from, Vec2::new(0.0, 0.0));
        assert_eq!(segment.to, Vec2::new(10.0, 0.0));
        assert_eq!(segment.control, Some(Vec2::new(5.0, 5.0)));
        assert_eq!(segment.from_normal, Vec2::new(0.0, -1.0));
        assert_eq!(segment.to_normal, Vec2::new(1.0, 0.0));
        assert_eq!(segment.control_normal, Some(Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn test_stencil_segment_missing_control_suppresses_normal() {
        let mesh = PathMesh {
            b_quad_vertex_positions: Vec::new(),
            b_quad_count: 0,
            stencil_segments: vec![0.0, 0.0, MISSING_POINT, MISSING_POINT, 10.0, 0.0],
            stencil_normals: vec![0.0, -1.0, 0.0, 1.0, 1.0, 0.0],
            stencil_segment_count: 1,
        };

        let segment = mesh.stencil_segment(0, SegmentLayout::CURVE);
        assert_eq!(segment.control, None);
        // Normale existiert im Puffer, wird aber ohne Kontrollpunkt nicht geliefert
        assert_eq!(segment.control_normal, None);
    }

    #[test]
    fn test_line_layout_has_no_control() {
        let mesh = PathMesh {
            b_quad_vertex_positions: Vec::new(),
            b_quad_count: 0,
            stencil_segments: vec![0.0, 0.0, 10.0, 0.0],
            stencil_normals: vec![0.0, -1.0, 0.0, 1.0],
            stencil_segment_count: 1,
        };

        let segment = mesh.stencil_segment(0, SegmentLayout::LINE);
        assert_eq!(segment.to, Vec2::new(10.0, 0.0));
        assert_eq!(segment.control, None);
        assert_eq!(segment.control_normal, None);
    }

    #[test]
    fn test_bounds_skips_sentinel_points() {
        let mesh = one_quad_mesh();
        let (min, max) = mesh.bounds().expect("Mesh hat finite Punkte");
        assert_relative_eq!(min.x, 0.0);
        assert_relative_eq!(min.y, 0.0);
        assert_relative_eq!(max.x, 10.0);
        // Kontrollpunkt (5, 14) zählt, Sentinel nicht
        assert_relative_eq!(max.y, 14.0);
    }

    #[test]
    fn test_empty_mesh_has_no_bounds() {
        assert_eq!(PathMesh::empty().bounds(), None);
        assert!(PathMesh::empty().is_empty());
    }
}
