//! Built-in primitive meshes.
//!
//! Face corners are ordered so that `cross(v1 - v0, v2 - v0)` points
//! out of the solid for both triangles of each quad, matching the
//! backface-cull rule in the pipeline.

use crate::model::{Face, Model};

/// A cube spanning -1..1 on each axis, as six quad faces.
pub fn cube() -> Model {
    Model::new(vec![
        // Front (z = -1)
        Face::quad(
            [-1.0, -1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [1.0, 1.0, -1.0],
            [1.0, -1.0, -1.0],
        ),
        // Back (z = 1)
        Face::quad(
            [1.0, -1.0, 1.0],
            [1.0, 1.0, 1.0],
            [-1.0, 1.0, 1.0],
            [-1.0, -1.0, 1.0],
        ),
        // Right (x = 1)
        Face::quad(
            [1.0, -1.0, -1.0],
            [1.0, 1.0, -1.0],
            [1.0, 1.0, 1.0],
            [1.0, -1.0, 1.0],
        ),
        // Left (x = -1)
        Face::quad(
            [-1.0, -1.0, 1.0],
            [-1.0, 1.0, 1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, -1.0, -1.0],
        ),
        // Top (y = 1)
        Face::quad(
            [-1.0, 1.0, -1.0],
            [-1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
            [1.0, 1.0, -1.0],
        ),
        // Bottom (y = -1)
        Face::quad(
            [-1.0, -1.0, 1.0],
            [-1.0, -1.0, -1.0],
            [1.0, -1.0, -1.0],
            [1.0, -1.0, 1.0],
        ),
    ])
}

/// A flat square of `half_extent * 2` per side in the XZ plane at y = 0,
/// facing up.
pub fn plane(half_extent: f32) -> Model {
    let e = half_extent;
    Model::new(vec![Face::quad(
        [-e, 0.0, -e],
        [-e, 0.0, e],
        [e, 0.0, e],
        [e, 0.0, -e],
    )])
}
