//! Hittable trait and HitRecord for ray-primitive intersection.

use glimmer_math::{Ray, Vec3};

/// Record of the closest ray-primitive intersection found so far.
///
/// A fresh record starts with `t = +inf`; closest-hit tests only commit
/// a candidate whose `t` is strictly smaller than the stored one, so a
/// single record can be threaded through a whole scene traversal.
///
/// When `did_hit` is false the remaining fields are unspecified and
/// must not be read.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    pub did_hit: bool,
    /// Hit distance along the ray
    pub t: f32,
    /// World-space hit point
    pub point: Vec3,
    /// World-space unit normal at the hit point
    pub normal: Vec3,
    /// Index into the scene's material arena
    pub material_index: u8,
}

impl Default for HitRecord {
    fn default() -> Self {
        Self {
            did_hit: false,
            t: f32::INFINITY,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            material_index: 0,
        }
    }
}

/// Trait for primitives that can be hit by rays.
///
/// Every primitive answers two kinds of query:
///
/// - `hit` (closest-hit): find the nearest intersection inside the
///   ray's `[min, max]` interval and commit it to `rec` when it beats
///   the record's current `t`.
/// - `hit_any` (occlusion): report whether any valid intersection
///   exists, skipping the hit point/normal computation. Used for
///   shadow rays. Triangle culling is inverted in this mode (see
///   [`CullMode`](crate::CullMode)).
pub trait Hittable {
    /// Test for the closest hit, committing into `rec` on success.
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool;

    /// Test whether anything along the ray blocks it.
    fn hit_any(&self, ray: &Ray) -> bool;
}
