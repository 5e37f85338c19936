use crate::Vec3;

/// Default near bound for primary rays, keeps a surface from shadowing
/// or re-intersecting itself at t = 0.
pub const RAY_MIN: f32 = 1e-4;

/// A ray in 3D space with a valid parametric interval.
///
/// The ray represents points `origin + t * direction` for `t` in
/// `(min, max)`. Callers normalize `direction` before running any
/// intersection test; the hit-test code assumes unit length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub min: f32,
    pub max: f32,
}

impl Ray {
    /// Create a ray with the default bounds `(RAY_MIN, +inf)`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            min: RAY_MIN,
            max: f32::INFINITY,
        }
    }

    /// Create a ray with explicit parametric bounds.
    ///
    /// Used for shadow rays, where `max` is the distance to the light.
    pub fn with_bounds(origin: Vec3, direction: Vec3, min: f32, max: f32) -> Self {
        Self {
            origin,
            direction,
            min,
            max,
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_defaults() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert_eq!(ray.min, RAY_MIN);
        assert_eq!(ray.max, f32::INFINITY);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_with_bounds() {
        let ray = Ray::with_bounds(Vec3::ZERO, Vec3::Y, 1e-5, 10.0);

        assert_eq!(ray.min, 1e-5);
        assert_eq!(ray.max, 10.0);
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(Vec3::ZERO, Vec3::Y);
        let ray2 = ray1; // Copy, not move

        assert_eq!(ray1.origin, ray2.origin);
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }
}
