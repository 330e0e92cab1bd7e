//! B-Quad Mesh Debugger Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppController, AppIntent, AppState, ViewState};
pub use core::{
    BQuad, Camera2D, OverlayState, PathMesh, SampleMesh, SegmentLayout, StencilSegment,
    B_QUAD_POINT_STRIDE, MISSING_POINT,
};
pub use render::{NormalKind, Renderer};
pub use shared::{RenderScene, ViewerOptions};
