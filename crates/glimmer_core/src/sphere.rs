//! Sphere primitive.

use crate::hit::{HitRecord, Hittable};
use glimmer_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material_index: u8,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32, material_index: u8) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self {
            center,
            radius,
            material_index,
        }
    }

    /// Geometric intersection test: project the center onto the ray,
    /// reject when the perpendicular distance reaches the radius
    /// (tangency counts as a miss), otherwise take the near root.
    ///
    /// The camera is assumed outside the sphere, so the far root is
    /// never considered.
    fn near_root(&self, ray: &Ray) -> Option<f32> {
        let to_center = self.center - ray.origin;
        let projection = to_center.dot(ray.direction);
        let perp_sq = to_center.length_squared() - projection * projection;

        let radius_sq = self.radius * self.radius;
        if perp_sq >= radius_sq {
            return None;
        }

        let half_chord = (radius_sq - perp_sq).sqrt();
        let t = projection - half_chord;

        if t < ray.min || t > ray.max {
            return None;
        }
        Some(t)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let Some(t) = self.near_root(ray) else {
            return false;
        };
        if t >= rec.t {
            return false;
        }

        rec.did_hit = true;
        rec.t = t;
        rec.point = ray.at(t);
        rec.normal = (rec.point - self.center).normalize();
        rec.material_index = self.material_index;
        true
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        self.near_root(ray).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit_head_on() {
        // Unit sphere 5 units down +Z, ray straight at it
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, 3);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, &mut rec));
        assert!((rec.t - 4.0).abs() < 1e-4);
        assert!((rec.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
        assert_eq!(rec.material_index, 3);
    }

    #[test]
    fn test_sphere_hit_point_on_surface() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, 7.0), 1.5, 0);
        let ray = Ray::new(Vec3::new(0.3, 0.1, -1.0), Vec3::new(0.1, 0.25, 1.0).normalize());

        let mut rec = HitRecord::default();
        if sphere.hit(&ray, &mut rec) {
            let distance = (ray.at(rec.t) - sphere.center).length();
            assert!(
                (distance - sphere.radius).abs() < 1e-4,
                "hit point should lie on the surface, off by {}",
                (distance - sphere.radius).abs()
            );
        }
    }

    #[test]
    fn test_sphere_tangent_misses() {
        // Ray grazing the sphere exactly at radius distance
        let sphere = Sphere::new(Vec3::new(0.0, 1.0, 5.0), 1.0, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let mut rec = HitRecord::default();
        assert!(!sphere.hit(&ray, &mut rec));
        assert!(!sphere.hit_any(&ray));
    }

    #[test]
    fn test_sphere_behind_origin_misses() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(!sphere.hit_any(&ray));
    }

    #[test]
    fn test_sphere_farther_than_record_not_committed() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, 1);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let mut rec = HitRecord::default();
        rec.did_hit = true;
        rec.t = 2.0; // something nearer already committed
        rec.material_index = 9;

        assert!(!sphere.hit(&ray, &mut rec));
        assert_eq!(rec.t, 2.0);
        assert_eq!(rec.material_index, 9);
    }

    #[test]
    fn test_sphere_occlusion_respects_ray_max() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, 0);

        // Shadow ray too short to reach the sphere
        let short = Ray::with_bounds(Vec3::ZERO, Vec3::Z, 1e-5, 3.0);
        assert!(!sphere.hit_any(&short));

        let long = Ray::with_bounds(Vec3::ZERO, Vec3::Z, 1e-5, 10.0);
        assert!(sphere.hit_any(&long));
    }
}
