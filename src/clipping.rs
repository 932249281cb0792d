//! Single-plane polygon clipping.
//!
//! The same routine clips triangles against the camera-space near plane
//! and, after projection, against the four viewport edge planes. Planes
//! are defined by a point and a normal; the normal points toward the
//! inside (kept) half-space.

use crate::math::Vec4;

/// A plane defined by a point on the plane and its normal vector.
/// The normal points toward the "inside" (visible) half-space.
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    pub point: Vec4,
    pub normal: Vec4,
}

impl Plane {
    pub fn new(point: Vec4, normal: Vec4) -> Self {
        Self { point, normal }
    }

    /// Returns the signed distance from a point to this plane.
    /// Non-negative = inside (same side as normal), negative = outside.
    pub fn signed_distance(&self, position: Vec4) -> f32 {
        self.normal.dot(position) - self.normal.dot(self.point)
    }

    /// Intersection of the segment `start -> end` with this plane.
    pub fn intersect_segment(&self, start: Vec4, end: Vec4) -> Vec4 {
        let plane_d = -self.normal.dot(self.point);
        let ad = start.dot(self.normal);
        let bd = end.dot(self.normal);
        let t = (-plane_d - ad) / (bd - ad);
        start + (end - start) * t
    }
}

/// Clip an ordered point list against a single plane.
///
/// The plane normal is re-normalized on entry. The case analysis is
/// fixed and its output vertex order is load-bearing for the winding
/// (and therefore the cull result) of downstream geometry:
///
/// - empty input, or every point outside: empty output
/// - every point inside: the input, unchanged
/// - triangle with 1 point outside: a 4-point polygon
///   `[in0, in1, isect(in1, out0), isect(in0, out0)]`
/// - triangle with 2 points outside: a 3-point polygon
///   `[in0, isect(in0, out0), isect(in0, out1)]`
///
/// A 4-point polygon straddling the plane passes through unchanged; the
/// routine only splits triangles, which keeps every output at 4 points
/// or fewer.
pub fn clip_polygon(plane: &Plane, points: &[Vec4]) -> Vec<Vec4> {
    if points.is_empty() {
        return Vec::new();
    }

    let plane = Plane::new(plane.point, plane.normal.normalize());

    let mut inside = Vec::with_capacity(points.len());
    let mut outside = Vec::with_capacity(points.len());
    for &p in points {
        if plane.signed_distance(p) >= 0.0 {
            inside.push(p);
        } else {
            outside.push(p);
        }
    }

    if outside.is_empty() {
        return points.to_vec();
    }
    if inside.is_empty() {
        return Vec::new();
    }

    if points.len() == 3 && outside.len() == 1 {
        // The clipped triangle becomes a quad.
        return vec![
            inside[0],
            inside[1],
            plane.intersect_segment(inside[1], outside[0]),
            plane.intersect_segment(inside[0], outside[0]),
        ];
    }

    if points.len() == 3 && outside.len() == 2 {
        return vec![
            inside[0],
            plane.intersect_segment(inside[0], outside[0]),
            plane.intersect_segment(inside[0], outside[1]),
        ];
    }

    points.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn near_plane() -> Plane {
        Plane::new(Vec4::point(0.0, 0.0, 0.1), Vec4::point(0.0, 0.0, 1.0))
    }

    #[test]
    fn empty_input_clips_to_empty() {
        assert!(clip_polygon(&near_plane(), &[]).is_empty());
    }

    #[test]
    fn fully_inside_triangle_is_unchanged() {
        let tri = [
            Vec4::point(0.0, 0.0, 1.0),
            Vec4::point(1.0, 0.0, 2.0),
            Vec4::point(0.0, 1.0, 3.0),
        ];
        assert_eq!(clip_polygon(&near_plane(), &tri), tri.to_vec());
    }

    #[test]
    fn fully_outside_triangle_is_culled() {
        let tri = [
            Vec4::point(0.0, 0.0, -1.0),
            Vec4::point(1.0, 0.0, -2.0),
            Vec4::point(0.0, 1.0, 0.0),
        ];
        assert!(clip_polygon(&near_plane(), &tri).is_empty());
    }

    #[test]
    fn one_point_outside_produces_a_quad() {
        let inside_a = Vec4::point(-1.0, 0.0, 1.0);
        let inside_b = Vec4::point(1.0, 0.0, 1.0);
        let outside = Vec4::point(0.0, 0.0, -1.0);
        let clipped = clip_polygon(&near_plane(), &[inside_a, inside_b, outside]);

        assert_eq!(clipped.len(), 4);
        // Partition: the two original inside points survive, in order,
        // followed by two points on the plane.
        assert_eq!(clipped[0], inside_a);
        assert_eq!(clipped[1], inside_b);
        assert_relative_eq!(clipped[2].z, 0.1, epsilon = 1e-6);
        assert_relative_eq!(clipped[3].z, 0.1, epsilon = 1e-6);
    }

    #[test]
    fn two_points_outside_produce_a_triangle() {
        let inside = Vec4::point(0.0, 0.0, 1.0);
        let out_a = Vec4::point(-1.0, 0.0, -1.0);
        let out_b = Vec4::point(1.0, 0.0, -1.0);
        let clipped = clip_polygon(&near_plane(), &[inside, out_a, out_b]);

        assert_eq!(clipped.len(), 3);
        assert_eq!(clipped[0], inside);
        assert_relative_eq!(clipped[1].z, 0.1, epsilon = 1e-6);
        assert_relative_eq!(clipped[2].z, 0.1, epsilon = 1e-6);
    }

    #[test]
    fn clip_is_idempotent() {
        let tri = [
            Vec4::point(-1.0, 0.0, 1.0),
            Vec4::point(1.0, 0.0, 1.0),
            Vec4::point(0.0, 0.0, -1.0),
        ];
        let once = clip_polygon(&near_plane(), &tri);
        let twice = clip_polygon(&near_plane(), &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn straddling_quad_passes_through_unchanged() {
        let quad = [
            Vec4::point(-1.0, 0.0, 1.0),
            Vec4::point(1.0, 0.0, 1.0),
            Vec4::point(1.0, 0.0, -1.0),
            Vec4::point(-1.0, 0.0, -1.0),
        ];
        assert_eq!(clip_polygon(&near_plane(), &quad), quad.to_vec());
    }

    #[test]
    fn unnormalized_plane_normal_is_accepted() {
        let plane = Plane::new(Vec4::point(0.0, 0.0, 0.1), Vec4::point(0.0, 0.0, 10.0));
        let tri = [
            Vec4::point(0.0, 0.0, 1.0),
            Vec4::point(-1.0, 0.0, -1.0),
            Vec4::point(1.0, 0.0, -1.0),
        ];
        let clipped = clip_polygon(&plane, &tri);
        assert_eq!(clipped.len(), 3);
        assert_relative_eq!(clipped[1].z, 0.1, epsilon = 1e-6);
    }
}
