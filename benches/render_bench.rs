use bquad_mesh_debugger::{Camera2D, OverlayState, PathMesh, RenderScene, Renderer, ViewerOptions};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

/// Baut ein synthetisches Mesh mit `quad_count` B-Quads und ebenso vielen
/// Stencil-Segmenten (jedes zweite Quad mit gekrümmter Oberkante).
fn build_synthetic_mesh(quad_count: usize) -> PathMesh {
    let mut positions = Vec::with_capacity(quad_count * 12);
    let mut segment_points = Vec::with_capacity(quad_count * 6);
    let mut segment_normals = Vec::with_capacity(quad_count * 6);

    for index in 0..quad_count {
        let x = (index as f32) * 12.0;
        let curved = index % 2 == 0;

        // upper_left, upper_control?, upper_right, lower_right, lower_control?, lower_left
        positions.extend_from_slice(&[x, 10.0]);
        if curved {
            positions.extend_from_slice(&[x + 5.0, 14.0]);
        } else {
            positions.extend_from_slice(&[f32::INFINITY, f32::INFINITY]);
        }
        positions.extend_from_slice(&[x + 10.0, 10.0, x + 10.0, 0.0]);
        positions.extend_from_slice(&[f32::INFINITY, f32::INFINITY]);
        positions.extend_from_slice(&[x, 0.0]);

        segment_points.extend_from_slice(&[x, 10.0, x + 5.0, 14.0, x + 10.0, 10.0]);
        segment_normals.extend_from_slice(&[-0.7, 0.7, 0.0, 1.0, 0.7, 0.7]);
    }

    PathMesh {
        b_quad_vertex_positions: positions,
        b_quad_count: quad_count,
        stencil_segments: segment_points,
        stencil_normals: segment_normals,
        stencil_segment_count: quad_count,
    }
}

fn build_scene(quad_count: usize) -> RenderScene {
    RenderScene {
        mesh: Some(Arc::new(build_synthetic_mesh(quad_count))),
        camera: Camera2D::new(),
        overlay: OverlayState::new(),
        viewport_size: [1920.0, 1080.0],
        pixels_per_point: 1.0,
        options: ViewerOptions::default(),
    }
}

fn bench_render_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_scene");
    let renderer = Renderer::new();

    for &quad_count in &[100usize, 1_000, 10_000] {
        let scene = build_scene(quad_count);
        group.bench_with_input(
            BenchmarkId::new("shape_list", quad_count),
            &scene,
            |b, scene| {
                b.iter(|| {
                    let shapes = renderer.render_scene(black_box(scene), egui::pos2(0.0, 0.0));
                    black_box(shapes.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_mesh_decode(c: &mut Criterion) {
    let mesh = build_synthetic_mesh(10_000);

    c.bench_function("b_quad_decode_10k", |b| {
        b.iter(|| {
            let mut curved = 0usize;
            for index in 0..mesh.b_quad_count {
                if black_box(mesh.b_quad(index)).upper_control.is_some() {
                    curved += 1;
                }
            }
            black_box(curved)
        })
    });
}

criterion_group!(benches, bench_render_scene, bench_mesh_decode);
criterion_main!(benches);
