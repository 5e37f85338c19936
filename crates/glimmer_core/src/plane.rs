//! Infinite plane primitive.

use crate::hit::{HitRecord, Hittable};
use glimmer_math::{Ray, Vec3};

/// An infinite plane through `origin` with unit `normal`.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material_index: u8,
}

impl Plane {
    pub fn new(origin: Vec3, normal: Vec3, material_index: u8) -> Self {
        Self {
            origin,
            normal,
            material_index,
        }
    }

    /// `t = dot(origin - ray.origin, n) / dot(ray.direction, n)`.
    ///
    /// A parallel ray divides by zero, producing a non-finite t that
    /// fails the range test below; no explicit parallel check is
    /// needed.
    fn solve(&self, ray: &Ray) -> Option<f32> {
        let t = (self.origin - ray.origin).dot(self.normal) / ray.direction.dot(self.normal);
        (t > ray.min && t < ray.max).then_some(t)
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let Some(t) = self.solve(ray) else {
            return false;
        };
        if t >= rec.t {
            return false;
        }

        rec.did_hit = true;
        rec.t = t;
        rec.point = ray.at(t);
        // The stored normal, never flipped toward the viewer
        rec.normal = self.normal;
        rec.material_index = self.material_index;
        true
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        self.solve(ray).is_some()
    }
}
