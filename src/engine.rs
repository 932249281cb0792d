//! The geometry pipeline.
//!
//! [`Engine`] turns a list of posed [`Model`]s into a back-to-front
//! sorted list of shaded, clipped screen-space polygons and hands them
//! to a [`Surface`] for filling. Each frame runs the same fixed stages:
//!
//! 1. camera/projection setup from the current viewport
//! 2. per-light shade-table rebuild
//! 3. per face: world transform, quad decomposition, backface cull,
//!    shading-index computation, near clip, projection
//! 4. depth sort, viewport edge clips, pixel alignment, color resolve,
//!    fill
//!
//! All per-frame state lives in a [`FrameContext`] built at the top of
//! the frame and dropped at the end of it; the engine itself only keeps
//! the settings, the camera pose and the light list.

use crate::clipping::{clip_polygon, Plane};
use crate::light::{shading_index, FrameLights, PointLight};
use crate::math::{Mat4, Vec4};
use crate::model::Model;
use crate::settings::{EngineSettings, SettingsError};
use crate::surface::Surface;

/// Distance of the near clip plane from the camera. Fixed independent
/// of the projection's near plane.
const NEAR_CLIP_Z: f32 = 0.1;

/// A post-projection polygon: three or four screen-space vertices.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Triangle([Vec4; 3]),
    Quad([Vec4; 4]),
}

impl Primitive {
    pub fn points(&self) -> &[Vec4] {
        match self {
            Primitive::Triangle(points) => points,
            Primitive::Quad(points) => points,
        }
    }
}

/// One polygon pending fill: projected geometry, the shading index
/// chosen per light, and the pre-projection reference point used for
/// light-distance blending.
#[derive(Clone, Debug)]
pub struct DrawItem {
    primitive: Primitive,
    shading_indices: Vec<usize>,
    ambient_index: usize,
    reference: Vec4,
}

impl DrawItem {
    pub fn new(
        primitive: Primitive,
        shading_indices: Vec<usize>,
        ambient_index: usize,
        reference: Vec4,
    ) -> Self {
        Self {
            primitive,
            shading_indices,
            ambient_index,
            reference,
        }
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    pub fn points(&self) -> &[Vec4] {
        self.primitive.points()
    }

    pub fn shading_indices(&self) -> &[usize] {
        &self.shading_indices
    }

    pub fn ambient_index(&self) -> usize {
        self.ambient_index
    }

    pub fn reference(&self) -> Vec4 {
        self.reference
    }

    /// Mean vertex Z, the painter's-algorithm sort key.
    pub fn mean_z(&self) -> f32 {
        let points = self.points();
        let sum: f32 = points.iter().map(|p| p.z).sum();
        sum / points.len() as f32
    }
}

/// Everything a single frame needs: viewport, camera, matrices and the
/// rebuilt light tables. Built by [`Engine::setup_frame`], dropped when
/// the frame ends.
pub struct FrameContext {
    pub viewport: (u32, u32),
    pub camera_position: Vec4,
    pub view: Mat4,
    pub projection: Mat4,
    pub lights: FrameLights,
}

pub struct Engine {
    settings: EngineSettings,
    camera_position: Vec4,
    camera_yaw: f32,
    lights: Vec<PointLight>,
}

impl Engine {
    /// Build an engine from validated settings.
    pub fn new(settings: EngineSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            camera_position: Vec4::point(0.0, -1.0, 1.0),
            camera_yaw: 0.0,
            lights: Vec::new(),
        })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn set_camera_position(&mut self, position: Vec4) {
        self.camera_position = position;
    }

    pub fn camera_position(&self) -> Vec4 {
        self.camera_position
    }

    /// Rotate the camera around the Y axis (radians).
    pub fn set_camera_yaw(&mut self, yaw: f32) {
        self.camera_yaw = yaw;
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn clear_lights(&mut self) {
        self.lights.clear();
    }

    /// Drive the engine until the stop predicate fires.
    ///
    /// One frame per iteration: `should_stop` is checked first, then
    /// `next_models` supplies the frame's scene. Each closure is called
    /// exactly once per tick, and control returns to the caller only
    /// between frames.
    pub fn run<S, P, Q>(&self, surface: &mut S, mut next_models: P, mut should_stop: Q)
    where
        S: Surface,
        P: FnMut() -> Vec<Model>,
        Q: FnMut() -> bool,
    {
        loop {
            if should_stop() {
                return;
            }
            let models = next_models();
            self.render_frame(&models, surface);
        }
    }

    /// Render one frame: build the context and draw list, then resolve
    /// and emit it to the surface.
    pub fn render_frame<S: Surface>(&self, models: &[Model], surface: &mut S) {
        let ctx = self.setup_frame(surface.viewport());
        let draw_list = self.build_draw_list(&ctx, models);
        self.finalize_frame(&ctx, draw_list, surface);
    }

    /// Stage 1: camera, matrices and light tables for this frame.
    pub fn setup_frame(&self, viewport: (u32, u32)) -> FrameContext {
        let (width, height) = viewport;
        let aspect_ratio = height as f32 / width as f32;
        let fov_scale = 1.0 / (self.settings.camera_fov_degrees * 0.5).to_radians().tan();

        let look_dir = Vec4::FORWARD * Mat4::rotation_y(self.camera_yaw);
        let target = self.camera_position + look_dir;
        let view = Mat4::look_at(self.camera_position, target, Vec4::UP).inverse();
        let projection = Mat4::perspective(
            aspect_ratio,
            fov_scale,
            self.settings.camera_near,
            self.settings.camera_far,
        );

        FrameContext {
            viewport,
            camera_position: self.camera_position,
            view,
            projection,
            lights: FrameLights::build(&self.lights, self.settings.color_depth),
        }
    }

    /// Stage 2: transform, cull, light, clip and project every face
    /// into draw items.
    pub fn build_draw_list(&self, ctx: &FrameContext, models: &[Model]) -> Vec<DrawItem> {
        let near_plane = Plane::new(
            Vec4::point(0.0, 0.0, NEAR_CLIP_Z),
            Vec4::point(0.0, 0.0, 1.0),
        );
        let mut draw_list = Vec::new();

        for model in models {
            let world = world_matrix(model);

            for face in &model.faces {
                let transformed: Vec<Vec4> = face.vertices().map(|v| v * world).collect();

                // A quad is split into two triangles before culling and
                // clipping; each half is lit and clipped independently.
                let triangles: Vec<[Vec4; 3]> = if transformed.len() == 4 {
                    vec![
                        [transformed[0], transformed[1], transformed[3]],
                        [transformed[1], transformed[2], transformed[3]],
                    ]
                } else {
                    vec![[transformed[0], transformed[1], transformed[2]]]
                };

                for triangle in triangles {
                    if let Some(item) = self.process_triangle(ctx, &near_plane, triangle) {
                        draw_list.push(item);
                    }
                }
            }
        }

        draw_list
    }

    /// Cull, light, near-clip and project a single world-space
    /// triangle. Returns `None` for back faces and fully clipped
    /// geometry.
    fn process_triangle(
        &self,
        ctx: &FrameContext,
        near_plane: &Plane,
        triangle: [Vec4; 3],
    ) -> Option<DrawItem> {
        let normal = (triangle[1] - triangle[0])
            .cross(triangle[2] - triangle[0])
            .normalize();
        let camera_ray = triangle[0] - ctx.camera_position;

        // Visible iff the face normal points back toward the camera.
        if normal.dot(camera_ray) >= 0.0 {
            return None;
        }

        let depth = self.settings.color_depth;
        let shading_indices: Vec<usize> = ctx
            .lights
            .light_normals()
            .iter()
            .map(|&light_normal| shading_index(normal.dot(light_normal), depth))
            .collect();
        let ambient_index = shading_index(normal.dot(ctx.lights.ambient_normal()), depth);

        let mut polygon: Vec<Vec4> = triangle.to_vec();
        if self.settings.clipping_enabled {
            polygon = clip_polygon(near_plane, &polygon);
            if polygon.is_empty() {
                return None;
            }
        }

        // Reference point for light-distance blending: the first
        // vertex, before the view transform.
        let reference = polygon[0];

        let (width, height) = ctx.viewport;
        let projected: Vec<Vec4> = polygon
            .iter()
            .map(|&vertex| {
                let clip = vertex * ctx.view * ctx.projection;
                let ndc = clip / clip.w;
                Vec4::point(
                    (ndc.x + 1.0) * 0.5 * width as f32,
                    (ndc.y + 1.0) * 0.5 * height as f32,
                    ndc.z,
                )
            })
            .collect();

        let primitive = match projected.as_slice() {
            [a, b, c] => Primitive::Triangle([*a, *b, *c]),
            [a, b, c, d] => Primitive::Quad([*a, *b, *c, *d]),
            // The clip never outputs another vertex count.
            _ => return None,
        };

        Some(DrawItem::new(
            primitive,
            shading_indices,
            ambient_index,
            reference,
        ))
    }

    /// Stage 3: sort back-to-front, clip to the viewport, snap to the
    /// pixel grid, resolve colors and emit fills.
    pub fn finalize_frame<S: Surface>(
        &self,
        ctx: &FrameContext,
        mut draw_list: Vec<DrawItem>,
        surface: &mut S,
    ) {
        surface.clear();

        // Painter's algorithm: furthest first, with a proper three-way
        // comparator.
        draw_list.sort_by(|a, b| b.mean_z().total_cmp(&a.mean_z()));

        let edge_planes = viewport_planes(ctx.viewport);

        for item in &draw_list {
            let mut points = item.points().to_vec();

            if self.settings.clipping_enabled {
                for plane in &edge_planes {
                    points = clip_polygon(plane, &points);
                    if points.is_empty() {
                        break;
                    }
                }
                if points.is_empty() {
                    continue;
                }
            }

            for point in &mut points {
                *point = point.pixel_align(self.settings.screen_scale);
            }

            let color = ctx.lights.blend(
                item.shading_indices(),
                item.ambient_index(),
                item.reference(),
                self.settings.light_distance_cutoff,
            );

            surface.fill_polygon(&points, color);
        }
    }
}

/// World matrix for a model pose.
///
/// The multiply order `rotation * translation * scale` is part of the
/// renderer's contract: with row vectors this rotates first, then
/// translates, then scales, so translation distances are scaled too.
fn world_matrix(model: &Model) -> Mat4 {
    Mat4::identity()
        * Mat4::rotation(model.rotation)
        * Mat4::translation(model.translation)
        * Mat4::scaling(model.scale)
}

/// The four viewport edge planes, normals pointing into the screen
/// rectangle.
fn viewport_planes(viewport: (u32, u32)) -> [Plane; 4] {
    let (width, height) = viewport;
    let right_x = width as f32 - 1.0;
    let bottom_y = height as f32 - 1.0;
    [
        Plane::new(Vec4::ZERO, Vec4::point(0.0, 1.0, 0.0)),
        Plane::new(Vec4::point(0.0, bottom_y, 0.0), Vec4::point(0.0, -1.0, 0.0)),
        Plane::new(Vec4::ZERO, Vec4::point(1.0, 0.0, 0.0)),
        Plane::new(Vec4::point(right_x, 0.0, 0.0), Vec4::point(-1.0, 0.0, 0.0)),
    ]
}
