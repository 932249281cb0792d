//! End-to-end pipeline tests against a recording surface.

use flatline::prelude::*;

#[derive(Debug)]
enum SurfaceCall {
    Clear,
    Fill { points: Vec<Vec4>, color: Vec4 },
}

struct RecordingSurface {
    viewport: (u32, u32),
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: (width, height),
            calls: Vec::new(),
        }
    }

    fn fills(&self) -> Vec<(&[Vec4], Vec4)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Fill { points, color } => Some((points.as_slice(), *color)),
                SurfaceCall::Clear => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    fn clear(&mut self) {
        self.calls.push(SurfaceCall::Clear);
    }

    fn fill_polygon(&mut self, points: &[Vec4], color: Vec4) {
        self.calls.push(SurfaceCall::Fill {
            points: points.to_vec(),
            color,
        });
    }
}

fn engine_at_origin(settings: EngineSettings) -> Engine {
    let mut engine = Engine::new(settings).unwrap();
    engine.set_camera_position(Vec4::ZERO);
    engine
}

#[test]
fn frame_clears_once_before_any_fill() {
    let mut settings = EngineSettings::default();
    settings.clipping_enabled = false;
    let engine = engine_at_origin(settings);

    let model = Model::new(vec![Face::triangle(
        [0.0, 0.0, 1.0],
        [0.0, 1.0, 1.0],
        [1.0, 0.0, 1.0],
    )]);

    let mut surface = RecordingSurface::new(800, 600);
    engine.render_frame(&[model], &mut surface);

    let clears = surface
        .calls
        .iter()
        .filter(|call| matches!(call, SurfaceCall::Clear))
        .count();
    assert_eq!(clears, 1);
    assert!(matches!(surface.calls[0], SurfaceCall::Clear));
    assert_eq!(surface.fills().len(), 1);
}

#[test]
fn back_face_never_reaches_the_surface() {
    let engine = engine_at_origin(EngineSettings::default());

    let model = Model::new(vec![Face::triangle(
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [0.0, 1.0, 1.0],
    )]);

    let mut surface = RecordingSurface::new(800, 600);
    engine.render_frame(&[model], &mut surface);
    assert!(surface.fills().is_empty());
}

#[test]
fn near_clip_yields_triangle_when_two_vertices_are_behind() {
    let engine = engine_at_origin(EngineSettings::default());
    let ctx = engine.setup_frame((800, 600));

    // Two vertices in front of the camera's near plane at z = 0.1,
    // one behind it.
    let model = Model::new(vec![Face::triangle(
        [-1.0, -1.0, 0.05],
        [-1.0, 1.0, 0.05],
        [1.0, -1.0, 0.5],
    )]);
    let draw_list = engine.build_draw_list(&ctx, &[model]);
    assert_eq!(draw_list.len(), 1);
    assert!(matches!(draw_list[0].primitive(), Primitive::Triangle(_)));
}

#[test]
fn near_clip_yields_quad_when_one_vertex_is_behind() {
    let engine = engine_at_origin(EngineSettings::default());
    let ctx = engine.setup_frame((800, 600));

    let model = Model::new(vec![Face::triangle(
        [-1.0, 1.0, 0.05],
        [1.0, 1.0, 0.5],
        [1.0, -1.0, 0.5],
    )]);
    let draw_list = engine.build_draw_list(&ctx, &[model]);
    assert_eq!(draw_list.len(), 1);
    assert!(matches!(draw_list[0].primitive(), Primitive::Quad(_)));
    assert_eq!(draw_list[0].points().len(), 4);
}

#[test]
fn straddling_quad_splits_and_clips_each_half() {
    let engine = engine_at_origin(EngineSettings::default());
    let ctx = engine.setup_frame((800, 600));

    // Two corners in front of the near plane at z = 0.1, two behind it.
    // The quad decomposes into triangles {0,1,3} and {1,2,3}: the first
    // half has two vertices behind the plane and clips to a triangle,
    // the second has one and clips to a quad.
    let model = Model::new(vec![Face::quad(
        [-1.0, -1.0, 0.05],
        [-1.0, 1.0, 0.05],
        [1.0, 1.0, 0.5],
        [1.0, -1.0, 0.5],
    )]);
    let draw_list = engine.build_draw_list(&ctx, &[model]);

    assert_eq!(draw_list.len(), 2);
    assert!(matches!(draw_list[0].primitive(), Primitive::Triangle(_)));
    assert!(matches!(draw_list[1].primitive(), Primitive::Quad(_)));
    assert!(draw_list.iter().all(|item| item.points().len() <= 4));
}

#[test]
fn fully_behind_the_near_plane_is_dropped() {
    let engine = engine_at_origin(EngineSettings::default());
    let ctx = engine.setup_frame((800, 600));

    let model = Model::new(vec![Face::triangle(
        [0.0, 0.0, 0.01],
        [0.0, 1.0, 0.01],
        [1.0, 0.0, 0.01],
    )]);
    assert!(engine.build_draw_list(&ctx, &[model]).is_empty());
}

#[test]
fn fills_arrive_back_to_front() {
    let mut settings = EngineSettings::default();
    settings.clipping_enabled = false;
    let engine = engine_at_origin(settings);
    let ctx = engine.setup_frame((800, 600));

    // Each item's x position marks it: mean Z 5 at x 500, 1 at 100,
    // 3 at 300.
    let marker_item = |x: f32, z: f32| {
        DrawItem::new(
            Primitive::Triangle([
                Vec4::point(x, 100.0, z),
                Vec4::point(x + 20.0, 100.0, z),
                Vec4::point(x, 120.0, z),
            ]),
            Vec::new(),
            0,
            Vec4::ZERO,
        )
    };
    let draw_list = vec![
        marker_item(500.0, 5.0),
        marker_item(100.0, 1.0),
        marker_item(300.0, 3.0),
    ];

    let mut surface = RecordingSurface::new(800, 600);
    engine.finalize_frame(&ctx, draw_list, &mut surface);

    let fills = surface.fills();
    let painted: Vec<f32> = fills.iter().map(|(points, _)| points[0].x).collect();
    // Farthest first: mean Z order 5, 3, 1.
    assert_eq!(painted, vec![500.0, 300.0, 100.0]);
}

#[test]
fn unlit_scene_resolves_to_the_ambient_ramp() {
    let mut settings = EngineSettings::default();
    settings.clipping_enabled = false;
    let engine = engine_at_origin(settings);

    // Normal (0, 0, -1): dead-on to the ambient direction, so the face
    // takes the brightest ambient entry, 99/100 of the ambient color.
    let model = Model::new(vec![Face::triangle(
        [0.0, 0.0, 1.0],
        [0.0, 1.0, 1.0],
        [1.0, 0.0, 1.0],
    )]);

    let mut surface = RecordingSurface::new(800, 600);
    engine.render_frame(&[model], &mut surface);

    let fills = surface.fills();
    assert_eq!(fills.len(), 1);
    let color = fills[0].1;
    assert!((color.x - 0.8 * 0.99).abs() < 1e-4);
    assert!((color.y - 0.3 * 0.99).abs() < 1e-4);
    assert!((color.z - 0.7 * 0.99).abs() < 1e-4);
}

#[test]
fn emitted_points_sit_on_the_pixel_grid() {
    let mut settings = EngineSettings::default();
    settings.clipping_enabled = false;
    settings.screen_scale = 2.0;
    let engine = engine_at_origin(settings);

    let model = Model::new(vec![Face::triangle(
        [0.0, 0.0, 1.0],
        [0.0, 1.0, 1.0],
        [1.0, 0.0, 1.0],
    )]);

    let mut surface = RecordingSurface::new(800, 600);
    engine.render_frame(&[model], &mut surface);

    for (points, _) in surface.fills() {
        for point in points {
            assert_eq!(point.x % 2.0, 0.0);
            assert_eq!(point.y % 2.0, 0.0);
        }
    }
}

#[test]
fn run_stops_when_the_predicate_fires() {
    let engine = engine_at_origin(EngineSettings::default());
    let mut surface = RecordingSurface::new(800, 600);

    let mut frames = 0;
    engine.run(
        &mut surface,
        || {
            vec![Model::new(vec![Face::triangle(
                [0.0, 0.0, 1.0],
                [0.0, 1.0, 1.0],
                [1.0, 0.0, 1.0],
            )])]
        },
        || {
            frames += 1;
            frames > 3
        },
    );

    let clears = surface
        .calls
        .iter()
        .filter(|call| matches!(call, SurfaceCall::Clear))
        .count();
    assert_eq!(clears, 3);
}
