//! Eingebaute Beispiel-Meshes.
//!
//! Font- und SVG-Lader samt Partitionierer sind externe Kollaborateure;
//! der Viewer bringt stattdessen handgebaute Meshes im selben Pufferformat
//! mit. Jede Variante liefert über `build_mesh` ein fertiges [`PathMesh`].

use super::mesh::{PathMesh, MISSING_POINT};
use glam::Vec2;

/// Auswahl der mitgelieferten Beispiel-Meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMesh {
    /// Ein einzelnes B-Quad mit vier geraden Kanten
    Quad,
    /// Bogenform aus drei B-Quads mit gekrümmten Oberkanten plus Stencil-Segmenten
    Arch,
    /// Nur Stencil-Segmente: Fächer aus Kurven mit Normalen
    StencilFan,
}

impl SampleMesh {
    /// Alle Varianten in Menü-Reihenfolge.
    pub const ALL: [SampleMesh; 3] = [SampleMesh::Quad, SampleMesh::Arch, SampleMesh::StencilFan];

    /// Anzeigename fürs Menü.
    pub fn label(&self) -> &'static str {
        match self {
            SampleMesh::Quad => "Einzelnes Quad",
            SampleMesh::Arch => "Bogen (gekrümmte Kanten)",
            SampleMesh::StencilFan => "Stencil-Fächer",
        }
    }

    /// Baut die Pufferdaten dieser Variante.
    pub fn build_mesh(&self) -> PathMesh {
        match self {
            SampleMesh::Quad => build_quad(),
            SampleMesh::Arch => build_arch(),
            SampleMesh::StencilFan => build_stencil_fan(),
        }
    }
}

/// Sammelt Datensätze und erzeugt daraus die flachen Puffer.
#[derive(Default)]
struct MeshBuilder {
    positions: Vec<f32>,
    b_quads: usize,
    segment_points: Vec<f32>,
    segment_normals: Vec<f32>,
    segments: usize,
}

impl MeshBuilder {
    fn push_point(buffer: &mut Vec<f32>, point: Vec2) {
        buffer.push(point.x);
        buffer.push(point.y);
    }

    fn push_optional(buffer: &mut Vec<f32>, point: Option<Vec2>) {
        match point {
            Some(point) => Self::push_point(buffer, point),
            None => {
                buffer.push(MISSING_POINT);
                buffer.push(MISSING_POINT);
            }
        }
    }

    /// Hängt einen B-Quad-Datensatz in Slot-Reihenfolge an.
    fn b_quad(
        &mut self,
        upper_left: Vec2,
        upper_control: Option<Vec2>,
        upper_right: Vec2,
        lower_right: Vec2,
        lower_control: Option<Vec2>,
        lower_left: Vec2,
    ) -> &mut Self {
        Self::push_point(&mut self.positions, upper_left);
        Self::push_optional(&mut self.positions, upper_control);
        Self::push_point(&mut self.positions, upper_right);
        Self::push_point(&mut self.positions, lower_right);
        Self::push_optional(&mut self.positions, lower_control);
        Self::push_point(&mut self.positions, lower_left);
        self.b_quads += 1;
        self
    }

    /// Hängt ein Stencil-Segment im Kurven-Layout an (Stride 3, Kontrollpunkt mittig).
    fn curve_segment(
        &mut self,
        from: Vec2,
        control: Option<Vec2>,
        to: Vec2,
        from_normal: Vec2,
        control_normal: Option<Vec2>,
        to_normal: Vec2,
    ) -> &mut Self {
        Self::push_point(&mut self.segment_points, from);
        Self::push_optional(&mut self.segment_points, control);
        Self::push_point(&mut self.segment_points, to);
        Self::push_point(&mut self.segment_normals, from_normal);
        Self::push_optional(&mut self.segment_normals, control_normal);
        Self::push_point(&mut self.segment_normals, to_normal);
        self.segments += 1;
        self
    }

    fn build(self) -> PathMesh {
        PathMesh {
            b_quad_vertex_positions: self.positions,
            b_quad_count: self.b_quads,
            stencil_segments: self.segment_points,
            stencil_normals: self.segment_normals,
            stencil_segment_count: self.segments,
        }
    }
}

/// Ein B-Quad, alle Kanten gerade, keine Segmente.
fn build_quad() -> PathMesh {
    let mut builder = MeshBuilder::default();
    builder.b_quad(
        Vec2::new(0.0, 10.0),
        None,
        Vec2::new(10.0, 10.0),
        Vec2::new(10.0, 0.0),
        None,
        Vec2::new(0.0, 0.0),
    );
    builder.build()
}

/// Drei B-Quads mit gekrümmten Oberkanten, dazu die passenden Stencil-Kurven.
fn build_arch() -> PathMesh {
    let mut builder = MeshBuilder::default();

    builder
        .b_quad(
            Vec2::new(0.0, 20.0),
            Some(Vec2::new(10.0, 32.0)),
            Vec2::new(20.0, 34.0),
            Vec2::new(20.0, 0.0),
            None,
            Vec2::new(0.0, 0.0),
        )
        .b_quad(
            Vec2::new(20.0, 34.0),
            Some(Vec2::new(30.0, 38.0)),
            Vec2::new(40.0, 34.0),
            Vec2::new(40.0, 0.0),
            None,
            Vec2::new(20.0, 0.0),
        )
        .b_quad(
            Vec2::new(40.0, 34.0),
            Some(Vec2::new(50.0, 32.0)),
            Vec2::new(60.0, 20.0),
            Vec2::new(60.0, 0.0),
            None,
            Vec2::new(40.0, 0.0),
        );

    builder
        .curve_segment(
            Vec2::new(0.0, 20.0),
            Some(Vec2::new(10.0, 32.0)),
            Vec2::new(20.0, 34.0),
            Vec2::new(-0.77, 0.64),
            Some(Vec2::new(-0.36, 0.93)),
            Vec2::new(-0.1, 0.99),
        )
        .curve_segment(
            Vec2::new(20.0, 34.0),
            Some(Vec2::new(30.0, 38.0)),
            Vec2::new(40.0, 34.0),
            Vec2::new(-0.1, 0.99),
            Some(Vec2::new(0.0, 1.0)),
            Vec2::new(0.1, 0.99),
        )
        .curve_segment(
            Vec2::new(40.0, 34.0),
            Some(Vec2::new(50.0, 32.0)),
            Vec2::new(60.0, 20.0),
            Vec2::new(0.1, 0.99),
            Some(Vec2::new(0.36, 0.93)),
            Vec2::new(0.77, 0.64),
        );

    builder.build()
}

/// Kurven-Fächer ohne B-Quads; ein Segment ist bewusst eine reine Linie.
fn build_stencil_fan() -> PathMesh {
    let mut builder = MeshBuilder::default();
    let hub = Vec2::new(0.0, 0.0);

    builder
        .curve_segment(
            hub,
            Some(Vec2::new(12.0, 26.0)),
            Vec2::new(30.0, 30.0),
            Vec2::new(-0.9, 0.44),
            Some(Vec2::new(-0.5, 0.87)),
            Vec2::new(-0.2, 0.98),
        )
        .curve_segment(
            hub,
            Some(Vec2::new(24.0, 14.0)),
            Vec2::new(38.0, 18.0),
            Vec2::new(-0.51, 0.86),
            Some(Vec2::new(-0.28, 0.96)),
            Vec2::new(0.27, 0.96),
        )
        .curve_segment(
            hub,
            None,
            Vec2::new(40.0, 4.0),
            Vec2::new(-0.1, 1.0),
            None,
            Vec2::new(0.1, 1.0),
        );

    builder.build()
}
