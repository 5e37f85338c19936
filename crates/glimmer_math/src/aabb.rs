use crate::{Ray, Vec3};

/// Axis-aligned bounding box, used as a single coarse pruning volume
/// per triangle mesh.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// An empty box (min > max on every axis, contains nothing).
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    /// Create a box from two corner points (in any order).
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Compute the bounding box of a point cloud.
    pub fn from_point_cloud(points: &[Vec3]) -> Self {
        let mut bounds = Self::EMPTY;
        for &p in points {
            bounds.min = bounds.min.min(p);
            bounds.max = bounds.max.max(p);
        }
        bounds
    }

    /// Create a box that surrounds two other boxes.
    pub fn surrounding(a: &Aabb, b: &Aabb) -> Self {
        Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        }
    }

    /// Slab test: does the ray's infinite line cross this box in front
    /// of the ray origin?
    ///
    /// The parametric overlap of the three axis slabs must be non-empty
    /// (`tmax >= tmin`) and not entirely behind the origin (`tmax > 0`).
    /// The ray's own `[min, max]` bounds are not consulted; this is a
    /// coarse pruning test, not an exact intersection.
    pub fn hit(&self, ray: &Ray) -> bool {
        let tx1 = (self.max.x - ray.origin.x) / ray.direction.x;
        let tx2 = (self.min.x - ray.origin.x) / ray.direction.x;

        let mut tmin = tx1.min(tx2);
        let mut tmax = tx1.max(tx2);

        let ty1 = (self.max.y - ray.origin.y) / ray.direction.y;
        let ty2 = (self.min.y - ray.origin.y) / ray.direction.y;

        tmin = tmin.max(ty1.min(ty2));
        tmax = tmax.min(ty1.max(ty2));

        let tz1 = (self.max.z - ray.origin.z) / ray.direction.z;
        let tz2 = (self.min.z - ray.origin.z) / ray.direction.z;

        tmin = tmin.max(tz1.min(tz2));
        tmax = tmax.min(tz1.max(tz2));

        tmax > 0.0 && tmax >= tmin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_points_any_order() {
        let aabb = Aabb::from_points(Vec3::new(10.0, -1.0, 3.0), Vec3::new(0.0, 1.0, -3.0));

        assert_eq!(aabb.min, Vec3::new(0.0, -1.0, -3.0));
        assert_eq!(aabb.max, Vec3::new(10.0, 1.0, 3.0));
    }

    #[test]
    fn test_aabb_from_point_cloud() {
        let points = [
            Vec3::new(-1.0, -2.0, -3.0),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::ZERO,
        ];
        let aabb = Aabb::from_point_cloud(&points);

        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(aabb.max, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_aabb_surrounding() {
        let a = Aabb::from_points(Vec3::ZERO, Vec3::splat(5.0));
        let b = Aabb::from_points(Vec3::splat(3.0), Vec3::splat(10.0));
        let outer = Aabb::surrounding(&a, &b);

        assert_eq!(outer.min, Vec3::ZERO);
        assert_eq!(outer.max, Vec3::splat(10.0));
    }

    #[test]
    fn test_aabb_hit() {
        let aabb = Aabb::from_points(Vec3::splat(-1.0), Vec3::splat(1.0));

        // Ray pointing at the box
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert!(aabb.hit(&ray));

        // Ray pointing away (box entirely behind the origin)
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), -Vec3::Z);
        assert!(!aabb.hit(&ray));

        // Ray missing the box sideways
        let ray = Ray::new(Vec3::new(10.0, 0.0, -5.0), Vec3::Z);
        assert!(!aabb.hit(&ray));
    }

    #[test]
    fn test_aabb_hit_from_inside() {
        let aabb = Aabb::from_points(Vec3::splat(-1.0), Vec3::splat(1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.3, 0.5, 0.8).normalize());

        assert!(aabb.hit(&ray));
    }

    #[test]
    fn test_aabb_hit_flat_box() {
        // Zero-thickness box (a single axis-aligned triangle produces one)
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);

        assert!(aabb.hit(&ray));
    }
}
