//! Core-Domänentypen: Mesh-Puffer, Kamera, Overlay-Zustand, Beispiel-Meshes.

pub mod camera;
pub mod mesh;
pub mod overlay;
pub mod sample;

pub use camera::Camera2D;
pub use mesh::{
    optional_point_at, point_at, BQuad, PathMesh, SegmentLayout, StencilSegment,
    B_QUAD_POINT_STRIDE, MISSING_POINT,
};
pub use overlay::OverlayState;
pub use sample::SampleMesh;
