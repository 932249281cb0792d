//! Discretized per-face lighting.
//!
//! Each light gets a *shade table*: `color_depth` precomputed colors
//! ramping from black to the light's full color. A face picks one entry
//! per light via a shading index computed from the face normal, and the
//! final fill color folds the point lights into the ambient base one at
//! a time, attenuated by distance to the face's reference point.
//!
//! Tables are cheap and are rebuilt every frame, since lights and color
//! depth may change between frames.

use crate::colors;
use crate::math::Vec4;

/// Color of the fixed ambient light.
pub const AMBIENT_COLOR: Vec4 = Vec4::point(0.8, 0.3, 0.7);

/// Direction of the fixed ambient light (normalized on use).
pub const AMBIENT_DIRECTION: Vec4 = Vec4::point(0.0, 0.0, -1.0);

/// A point light: an RGB color and a world-space position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: Vec4,
    pub position: Vec4,
}

impl PointLight {
    pub fn new(color: Vec4, position: Vec4) -> Self {
        Self { color, position }
    }
}

/// Scale each channel of `color` linearly by `percent`. Alpha is 1.
///
/// This is a plain pass-through scale, not gamma-correct.
pub fn shade_for_percentage(color: Vec4, percent: f32) -> Vec4 {
    Vec4::new(
        color.x * percent,
        color.y * percent,
        color.z * percent,
        1.0,
    )
}

/// Map a `dot(normal, light_direction)` value to a table index.
///
/// `round((depth - 1) * shade)`, clamped to `[0, depth - 1]`. Negative
/// shades (faces pointing away from the light) collapse to index 0, the
/// darkest entry; there is no two-sided lighting.
pub fn shading_index(shade: f32, color_depth: usize) -> usize {
    let max = color_depth.saturating_sub(1);
    let index = ((max as f32) * shade).round();
    (index.max(0.0) as usize).min(max)
}

/// Precomputed intensity ramp for one light at a fixed color depth.
#[derive(Clone, Debug)]
pub struct ShadeTable {
    colors: Vec<Vec4>,
}

impl ShadeTable {
    /// Build the table: entry `i` is the light's color at intensity
    /// `i / depth`.
    pub fn build(color: Vec4, color_depth: usize) -> Self {
        let colors = (0..color_depth)
            .map(|i| shade_for_percentage(color, i as f32 / color_depth as f32))
            .collect();
        Self { colors }
    }

    pub fn get(&self, index: usize) -> Vec4 {
        self.colors[index]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Per-frame lighting state: the ambient ramp plus one ramp, normal and
/// position per point light. Rebuilt at the start of every frame.
pub struct FrameLights {
    ambient_table: ShadeTable,
    ambient_normal: Vec4,
    tables: Vec<ShadeTable>,
    normals: Vec<Vec4>,
    positions: Vec<Vec4>,
}

impl FrameLights {
    pub fn build(lights: &[PointLight], color_depth: usize) -> Self {
        let mut tables = Vec::with_capacity(lights.len());
        let mut normals = Vec::with_capacity(lights.len());
        let mut positions = Vec::with_capacity(lights.len());

        for light in lights {
            tables.push(ShadeTable::build(light.color, color_depth));
            normals.push(light.position.normalize());
            positions.push(light.position);
        }

        Self {
            ambient_table: ShadeTable::build(AMBIENT_COLOR, color_depth),
            ambient_normal: AMBIENT_DIRECTION.normalize(),
            tables,
            normals,
            positions,
        }
    }

    /// Direction used for a light's shading-index dot product.
    pub fn light_normals(&self) -> &[Vec4] {
        &self.normals
    }

    pub fn ambient_normal(&self) -> Vec4 {
        self.ambient_normal
    }

    pub fn light_count(&self) -> usize {
        self.tables.len()
    }

    /// Resolve the final fill color for a face.
    ///
    /// Starts from the ambient table entry, then folds each point light
    /// in table order. A light at or beyond `cutoff` contributes
    /// nothing; inside the cutoff the mix ratio is `distance / cutoff`,
    /// so a farther light blends in more strongly relative to the
    /// accumulated base. That direction is deliberate and part of the
    /// renderer's look; do not invert it toward physical falloff.
    pub fn blend(
        &self,
        shading_indices: &[usize],
        ambient_index: usize,
        reference: Vec4,
        cutoff: f32,
    ) -> Vec4 {
        let mut color = self.ambient_table.get(ambient_index);

        for (i, table) in self.tables.iter().enumerate() {
            let distance = (self.positions[i] - reference).length();
            if distance >= cutoff {
                continue;
            }

            let added = table.get(shading_indices[i]);
            let ratio = distance / cutoff;
            color = Vec4::new(
                colors::mix_channel(
                    colors::to_byte_range(added.x),
                    colors::to_byte_range(color.x),
                    ratio,
                ) / 255.0,
                colors::mix_channel(
                    colors::to_byte_range(added.y),
                    colors::to_byte_range(color.y),
                    ratio,
                ) / 255.0,
                colors::mix_channel(
                    colors::to_byte_range(added.z),
                    colors::to_byte_range(color.z),
                    ratio,
                ) / 255.0,
                1.0,
            );
        }

        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn shading_index_clamps_to_table_bounds() {
        assert_eq!(shading_index(1.0, 100), 99);
        assert_eq!(shading_index(-1.0, 100), 0);
        assert_eq!(shading_index(2.0, 100), 99);
        for depth in [1, 2, 16, 100] {
            for shade in [-1.0, -0.5, 0.0, 0.33, 0.5, 1.0] {
                assert!(shading_index(shade, depth) < depth);
            }
        }
    }

    #[test]
    fn shading_index_rounds_to_nearest() {
        assert_eq!(shading_index(0.5, 100), 50);
        assert_eq!(shading_index(0.004, 100), 0);
        assert_eq!(shading_index(0.006, 100), 1);
    }

    #[test]
    fn shade_table_ramps_linearly() {
        let table = ShadeTable::build(Vec4::point(1.0, 0.5, 0.0), 10);
        assert_eq!(table.len(), 10);
        assert_relative_eq!(table.get(0).x, 0.0);
        assert_relative_eq!(table.get(5).x, 0.5);
        assert_relative_eq!(table.get(5).y, 0.25);
        // The top entry is (depth - 1) / depth, not quite full intensity.
        assert_relative_eq!(table.get(9).x, 0.9);
        assert_eq!(table.get(3).w, 1.0);
    }

    #[test]
    fn blend_without_lights_is_ambient_entry() {
        let lights = FrameLights::build(&[], 100);
        let color = lights.blend(&[], 99, Vec4::ZERO, 10.0);
        assert_relative_eq!(color.x, AMBIENT_COLOR.x * 0.99, epsilon = 1e-5);
        assert_relative_eq!(color.y, AMBIENT_COLOR.y * 0.99, epsilon = 1e-5);
    }

    #[test]
    fn light_beyond_cutoff_contributes_nothing() {
        let light = PointLight::new(Vec4::point(1.0, 1.0, 1.0), Vec4::point(0.0, 0.0, 50.0));
        let lights = FrameLights::build(&[light], 100);
        let base = lights.blend(&[], 50, Vec4::ZERO, 10.0);
        let blended = lights.blend(&[99], 50, Vec4::ZERO, 10.0);
        assert_eq!(base, blended);
    }

    #[test]
    fn farther_light_blends_in_more_strongly() {
        let depth = 100;
        let white = Vec4::point(1.0, 1.0, 1.0);
        let near = FrameLights::build(&[PointLight::new(white, Vec4::point(0.0, 0.0, 1.0))], depth);
        let far = FrameLights::build(&[PointLight::new(white, Vec4::point(0.0, 0.0, 9.0))], depth);

        // Ambient index 0 gives a black base, so the white light's
        // share is the whole result.
        let near_color = near.blend(&[99], 0, Vec4::ZERO, 10.0);
        let far_color = far.blend(&[99], 0, Vec4::ZERO, 10.0);
        assert!(far_color.x > near_color.x);
    }
}
