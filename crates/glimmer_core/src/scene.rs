//! Scene container: flat primitive collections, lights, the material
//! arena, and the closest-hit / occlusion queries.

use crate::camera::Camera;
use crate::hit::{HitRecord, Hittable};
use crate::light::Light;
use crate::material::{Color, Material};
use crate::mesh::TriangleMesh;
use crate::plane::Plane;
use crate::sphere::Sphere;
use crate::triangle::{CullMode, Triangle};
use glimmer_math::{Ray, Vec3};

/// A renderable scene.
///
/// Populated once (or re-posed per frame for animated meshes), then
/// queried read-only for the whole render pass. Materials live in an
/// arena indexed by `u8`; index 0 is always a solid red fallback so an
/// unset material index renders loudly instead of crashing.
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub planes: Vec<Plane>,
    pub triangles: Vec<Triangle>,
    pub meshes: Vec<TriangleMesh>,
    pub lights: Vec<Light>,
    materials: Vec<Material>,
    pub camera: Camera,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            spheres: Vec::new(),
            planes: Vec::new(),
            triangles: Vec::new(),
            meshes: Vec::new(),
            lights: Vec::new(),
            materials: vec![Material::SolidColor {
                color: Color::new(1.0, 0.0, 0.0),
            }],
            camera: Camera::default(),
        }
    }

    /// Find the nearest intersection along `ray`.
    ///
    /// Primitive types are visited in a fixed order with the query
    /// ray's `max` tightened to the best `t` so far, so the result is
    /// the true minimum regardless of how the scene was populated.
    pub fn closest_hit(&self, ray: &Ray) -> HitRecord {
        let mut rec = HitRecord::default();
        let mut query = *ray;

        for sphere in &self.spheres {
            if sphere.hit(&query, &mut rec) {
                query.max = rec.t;
            }
        }
        for plane in &self.planes {
            if plane.hit(&query, &mut rec) {
                query.max = rec.t;
            }
        }
        for triangle in &self.triangles {
            if triangle.hit(&query, &mut rec) {
                query.max = rec.t;
            }
        }
        for mesh in &self.meshes {
            if mesh.hit(&query, &mut rec) {
                query.max = rec.t;
            }
        }

        rec
    }

    /// Does anything block `ray` within its bounds? Used for shadow
    /// rays; stops at the first occluder and never builds a record.
    pub fn any_hit(&self, ray: &Ray) -> bool {
        self.spheres.iter().any(|s| s.hit_any(ray))
            || self.planes.iter().any(|p| p.hit_any(ray))
            || self.triangles.iter().any(|t| t.hit_any(ray))
            || self.meshes.iter().any(|m| m.hit_any(ray))
    }

    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material_index: u8) {
        self.spheres.push(Sphere::new(center, radius, material_index));
    }

    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3, material_index: u8) {
        self.planes.push(Plane::new(origin, normal, material_index));
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Add an empty mesh and hand back a mutable reference for
    /// population (positions, indices, transform), after which the
    /// caller runs the mesh's update steps.
    pub fn add_triangle_mesh(&mut self, cull_mode: CullMode, material_index: u8) -> &mut TriangleMesh {
        self.meshes.push(TriangleMesh::new(cull_mode, material_index));
        self.meshes.last_mut().unwrap()
    }

    pub fn add_point_light(&mut self, origin: Vec3, intensity: f32, color: Color) {
        self.lights.push(Light::point(origin, intensity, color));
    }

    pub fn add_directional_light(&mut self, direction: Vec3, intensity: f32, color: Color) {
        self.lights.push(Light::directional(direction, intensity, color));
    }

    /// Add a material to the arena and return its handle.
    pub fn add_material(&mut self, material: Material) -> u8 {
        debug_assert!(self.materials.len() < 256, "material arena is full");
        self.materials.push(material);
        (self.materials.len() - 1) as u8
    }

    /// Look up a material by handle. Indices come from `add_material`
    /// and are trusted; an out-of-range handle is a scene-construction
    /// bug and panics.
    pub fn material(&self, index: u8) -> &Material {
        &self.materials[index as usize]
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sphere_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, 0);
        scene.add_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0, 0);
        scene
    }

    #[test]
    fn test_default_material_is_fallback() {
        let scene = Scene::new();
        assert_eq!(scene.material_count(), 1);
        assert_eq!(
            *scene.material(0),
            Material::SolidColor {
                color: Color::new(1.0, 0.0, 0.0)
            }
        );
    }

    #[test]
    fn test_material_handles_are_stable() {
        let mut scene = Scene::new();
        let blue = scene.add_material(Material::SolidColor {
            color: Color::new(0.0, 0.0, 1.0),
        });
        let lambert = scene.add_material(Material::Lambert {
            reflectance: 1.0,
            color: Color::ONE,
        });

        assert_eq!(blue, 1);
        assert_eq!(lambert, 2);
        assert!(matches!(scene.material(lambert), Material::Lambert { .. }));
    }

    #[test]
    fn test_closest_hit_finds_nearest_regardless_of_order() {
        // Far sphere first, then near: the near one must still win
        let mut scene = Scene::new();
        scene.add_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0, 0);
        scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, 0);

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let rec = scene.closest_hit(&ray);

        assert!(rec.did_hit);
        assert!((rec.t - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_closest_hit_across_primitive_types() {
        // A plane in front of a sphere
        let mut scene = two_sphere_scene();
        scene.add_plane(Vec3::new(0.0, 0.0, 2.0), -Vec3::Z, 0);

        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let rec = scene.closest_hit(&ray);

        assert!(rec.did_hit);
        assert!((rec.t - 2.0).abs() < 1e-4);
        assert!((rec.normal - -Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_closest_hit_is_minimum_over_primitives() {
        let scene = two_sphere_scene();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        let rec = scene.closest_hit(&ray);

        // Each primitive tested alone must not beat the traversal
        for sphere in &scene.spheres {
            let mut single = HitRecord::default();
            if sphere.hit(&ray, &mut single) {
                assert!(rec.t <= single.t + 1e-6);
            }
        }
    }

    #[test]
    fn test_closest_hit_is_idempotent() {
        let scene = two_sphere_scene();
        let ray = Ray::new(Vec3::new(0.1, -0.2, 0.0), Vec3::new(0.05, 0.02, 1.0).normalize());

        let a = scene.closest_hit(&ray);
        let b = scene.closest_hit(&ray);

        assert_eq!(a.did_hit, b.did_hit);
        assert_eq!(a.t, b.t);
        assert_eq!(a.point, b.point);
        assert_eq!(a.normal, b.normal);
        assert_eq!(a.material_index, b.material_index);
    }

    #[test]
    fn test_any_hit_and_miss() {
        let scene = two_sphere_scene();

        assert!(scene.any_hit(&Ray::new(Vec3::ZERO, Vec3::Z)));
        assert!(!scene.any_hit(&Ray::new(Vec3::ZERO, -Vec3::Z)));
    }

    #[test]
    fn test_any_hit_respects_ray_bounds() {
        let scene = two_sphere_scene();

        // Shadow-style ray stopping short of the first sphere
        let short = Ray::with_bounds(Vec3::ZERO, Vec3::Z, 1e-5, 3.0);
        assert!(!scene.any_hit(&short));
    }

    #[test]
    fn test_miss_returns_open_record() {
        let scene = two_sphere_scene();
        let rec = scene.closest_hit(&Ray::new(Vec3::ZERO, Vec3::Y));

        assert!(!rec.did_hit);
        assert_eq!(rec.t, f32::INFINITY);
    }
}
