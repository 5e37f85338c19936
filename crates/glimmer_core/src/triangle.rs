//! Triangle primitive.
//!
//! Uses a plane intersection plus three half-space edge tests rather
//! than Möller-Trumbore, matching the face-normal-only shading model
//! (no barycentrics are ever needed).

use crate::hit::{HitRecord, Hittable};
use glimmer_math::{Ray, Vec3};

/// Which side of a triangle is hit-testable.
///
/// Culling is defined against the direction of travel relative to the
/// face normal, and is *inverted* for occlusion queries: a shadow ray
/// travels from the surface toward the light, against the convention
/// used for camera rays, so the face it may pass through is the mirror
/// of the one a camera ray may pass through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    BackFace,
    FrontFace,
    #[default]
    None,
}

/// A single triangle with a precomputed unit face normal.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub normal: Vec3,
    pub cull_mode: CullMode,
    pub material_index: u8,
}

impl Triangle {
    /// Create a triangle, deriving the face normal from the winding
    /// `(v1 - v0) x (v2 - v0)`.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize();
        Self::with_normal(v0, v1, v2, normal)
    }

    /// Create a triangle with an already-computed unit normal, as when
    /// lifting faces out of a mesh's cached arrays.
    pub fn with_normal(v0: Vec3, v1: Vec3, v2: Vec3, normal: Vec3) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal,
            cull_mode: CullMode::None,
            material_index: 0,
        }
    }

    pub fn with_cull_mode(mut self, cull_mode: CullMode) -> Self {
        self.cull_mode = cull_mode;
        self
    }

    pub fn with_material(mut self, material_index: u8) -> Self {
        self.material_index = material_index;
        self
    }

    /// Shared solve for both query modes. Returns the hit distance, or
    /// None on a cull rejection, range rejection, or containment
    /// failure.
    fn solve(&self, ray: &Ray, occlusion: bool) -> Option<f32> {
        let view_angle = self.normal.dot(ray.direction);
        if view_angle == 0.0 {
            // Ray is parallel to the triangle
            return None;
        }

        match self.cull_mode {
            CullMode::BackFace => {
                if !occlusion {
                    if view_angle > 0.0 {
                        return None;
                    }
                } else if view_angle < 0.0 {
                    return None;
                }
            }
            CullMode::FrontFace => {
                if !occlusion {
                    if view_angle < 0.0 {
                        return None;
                    }
                } else if view_angle > 0.0 {
                    return None;
                }
            }
            CullMode::None => {}
        }

        // The centroid satisfies the plane equation like any vertex;
        // using it keeps the solve numerically symmetric in the three
        // vertices.
        let center = (self.v0 + self.v1 + self.v2) / 3.0;
        let t = (center - ray.origin).dot(self.normal) / view_angle;

        if t < ray.min || t > ray.max {
            return None;
        }

        // Half-space containment. The sign convention on the middle
        // edge is opposite to the other two; it follows from the
        // winding the normals are derived with and must stay as is.
        let p = ray.at(t);

        let mut to_point = p - self.v0;
        let edge_a = self.v1 - self.v0;
        if self.normal.dot(edge_a.cross(to_point)) < 0.0 {
            return None;
        }

        let edge_b = self.v2 - self.v0;
        if self.normal.dot(edge_b.cross(to_point)) > 0.0 {
            return None;
        }

        to_point = p - self.v1;
        let edge_c = self.v2 - self.v1;
        if self.normal.dot(edge_c.cross(to_point)) < 0.0 {
            return None;
        }

        Some(t)
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let Some(t) = self.solve(ray, false) else {
            return false;
        };
        if t >= rec.t {
            return false;
        }

        rec.did_hit = true;
        rec.t = t;
        rec.point = ray.at(t);
        // Face normal, never interpolated
        rec.normal = self.normal;
        rec.material_index = self.material_index;
        true
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        self.solve(ray, true).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Triangle in the z=0 plane, normal facing -Z (toward a camera on
    /// the -Z side).
    fn facing_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(-0.75, 1.5, 0.0),
            Vec3::new(0.75, 0.0, 0.0),
            Vec3::new(-0.75, 0.0, 0.0),
        )
    }

    #[test]
    fn test_triangle_hit_center() {
        let tri = facing_triangle();
        let ray = Ray::new(Vec3::new(-0.25, 0.5, -3.0), Vec3::Z);

        let mut rec = HitRecord::default();
        assert!(tri.hit(&ray, &mut rec));
        assert!((rec.t - 3.0).abs() < 1e-4);
        assert!((rec.normal - tri.normal).length() < 1e-4);
    }

    #[test]
    fn test_triangle_miss_outside_edges() {
        let tri = facing_triangle();

        // Outside each of the three edges in turn
        for origin in [
            Vec3::new(0.5, 1.2, -3.0),
            Vec3::new(-1.2, 0.5, -3.0),
            Vec3::new(0.0, -0.5, -3.0),
        ] {
            let ray = Ray::new(origin, Vec3::Z);
            let mut rec = HitRecord::default();
            assert!(!tri.hit(&ray, &mut rec), "origin {:?} should miss", origin);
        }
    }

    #[test]
    fn test_triangle_parallel_ray_misses() {
        let tri = facing_triangle();
        let ray = Ray::new(Vec3::new(-2.0, 0.5, 0.0), Vec3::X);

        assert!(!tri.hit_any(&ray));
    }

    #[test]
    fn test_backface_culling_closest_hit() {
        let tri = facing_triangle().with_cull_mode(CullMode::BackFace);

        // From the front (normal points at the ray origin): visible
        let front = Ray::new(Vec3::new(-0.25, 0.5, -3.0), Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(tri.hit(&front, &mut rec));

        // From behind: culled
        let back = Ray::new(Vec3::new(-0.25, 0.5, 3.0), -Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(!tri.hit(&back, &mut rec));
    }

    #[test]
    fn test_frontface_culling_closest_hit() {
        let tri = facing_triangle().with_cull_mode(CullMode::FrontFace);

        let front = Ray::new(Vec3::new(-0.25, 0.5, -3.0), Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(!tri.hit(&front, &mut rec));

        let back = Ray::new(Vec3::new(-0.25, 0.5, 3.0), -Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(tri.hit(&back, &mut rec));
    }

    #[test]
    fn test_cull_inversion_for_occlusion() {
        let tri = facing_triangle().with_cull_mode(CullMode::BackFace);

        // A closest-hit query from the front succeeds...
        let front = Ray::new(Vec3::new(-0.25, 0.5, -3.0), Vec3::Z);
        let mut rec = HitRecord::default();
        assert!(tri.hit(&front, &mut rec));
        // ...but the same ray as an occlusion query is culled,
        assert!(!tri.hit_any(&front));
        // while the reverse ray (approaching from behind) occludes.
        let back = Ray::new(Vec3::new(-0.25, 0.5, 3.0), -Vec3::Z);
        assert!(tri.hit_any(&back));
    }

    #[test]
    fn test_no_culling_hits_both_sides() {
        let tri = facing_triangle();

        let front = Ray::new(Vec3::new(-0.25, 0.5, -3.0), Vec3::Z);
        let back = Ray::new(Vec3::new(-0.25, 0.5, 3.0), -Vec3::Z);

        assert!(tri.hit_any(&front));
        assert!(tri.hit_any(&back));
        let mut rec = HitRecord::default();
        assert!(tri.hit(&front, &mut rec));
        let mut rec = HitRecord::default();
        assert!(tri.hit(&back, &mut rec));
    }

    #[test]
    fn test_triangle_respects_ray_max() {
        let tri = facing_triangle();
        let short = Ray::with_bounds(Vec3::new(-0.25, 0.5, -3.0), Vec3::Z, 1e-4, 2.0);

        let mut rec = HitRecord::default();
        assert!(!tri.hit(&short, &mut rec));
        assert!(!tri.hit_any(&short));
    }
}
