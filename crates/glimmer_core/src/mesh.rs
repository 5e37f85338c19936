//! Triangle mesh with cached world-space data and AABB pruning.

use crate::hit::{HitRecord, Hittable};
use crate::triangle::{CullMode, Triangle};
use glimmer_math::{Aabb, Mat4, Mat4Ext, Quat, Ray, Vec3};

#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

/// An indexed triangle mesh with one face normal per triangle, a
/// single cull mode and material shared by all faces, and an
/// object-to-world transform.
///
/// Hit tests never read the object-space arrays; they run against the
/// cached `transformed_positions` / `transformed_normals` and the
/// world-space bounding box. The caches follow a two-phase protocol:
/// mutate the transform (or geometry) first, then call [`update_aabb`]
/// and [`update_transforms`] before issuing any hit test. Recomputation
/// is never implicit, which is what makes the caches safe to share
/// across render threads within a frame (single writer, then readers
/// only).
///
/// [`update_aabb`]: TriangleMesh::update_aabb
/// [`update_transforms`]: TriangleMesh::update_transforms
pub struct TriangleMesh {
    /// Object-space vertex positions
    pub positions: Vec<Vec3>,
    /// Per-face normals, one per index triple
    pub normals: Vec<Vec3>,
    /// Flattened index buffer, stride 3
    pub indices: Vec<u32>,

    pub cull_mode: CullMode,
    pub material_index: u8,

    translation: Vec3,
    rotation: Quat,
    scale: Vec3,

    /// World-space vertex positions, in sync with the last
    /// `update_transforms` call
    pub transformed_positions: Vec<Vec3>,
    /// World-space face normals, likewise
    pub transformed_normals: Vec<Vec3>,

    local_bounds: Aabb,
    /// World-space bounding box used for slab pruning
    pub world_bounds: Aabb,

    /// Number of per-triangle tests actually run, for asserting that
    /// the slab test prunes whole meshes.
    #[cfg(test)]
    pub(crate) triangles_probed: AtomicUsize,
}

impl TriangleMesh {
    pub fn new(cull_mode: CullMode, material_index: u8) -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
            cull_mode,
            material_index,
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            transformed_positions: Vec::new(),
            transformed_normals: Vec::new(),
            local_bounds: Aabb::EMPTY,
            world_bounds: Aabb::EMPTY,
            #[cfg(test)]
            triangles_probed: AtomicUsize::new(0),
        }
    }

    /// Append one triangle's vertices and indices. The face normal is
    /// derived from the given winding. Caches are not touched; call
    /// `update_aabb` and `update_transforms` when done appending.
    pub fn append_triangle(&mut self, v0: Vec3, v1: Vec3, v2: Vec3) {
        let base = self.positions.len() as u32;
        self.positions.extend([v0, v1, v2]);
        self.indices.extend([base, base + 1, base + 2]);
        self.normals.push((v1 - v0).cross(v2 - v0).normalize());
    }

    /// Derive all face normals from the current positions and indices,
    /// replacing whatever was there. Degenerate faces get +Y and a
    /// warning, so a bad asset shows up in the log instead of as NaN
    /// pixels.
    pub fn calculate_normals(&mut self) {
        self.normals.clear();
        self.normals.reserve(self.indices.len() / 3);

        for face in self.indices.chunks_exact(3) {
            let p0 = self.positions[face[0] as usize];
            let p1 = self.positions[face[1] as usize];
            let p2 = self.positions[face[2] as usize];

            let normal = (p1 - p0).cross(p2 - p0);
            let length = normal.length();
            if length > 0.0 {
                self.normals.push(normal / length);
            } else {
                log::warn!(
                    "degenerate face [{}, {}, {}], substituting +Y normal",
                    face[0],
                    face[1],
                    face[2]
                );
                self.normals.push(Vec3::Y);
            }
        }
    }

    /// Set the translation component of the object-to-world transform.
    pub fn translate(&mut self, translation: Vec3) {
        self.translation = translation;
    }

    /// Set the rotation component to a yaw around +Y (radians).
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation = Quat::from_rotation_y(angle);
    }

    /// Set the scale component.
    pub fn scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Recompute the object-space bounding box from `positions`.
    pub fn update_aabb(&mut self) {
        self.local_bounds = Aabb::from_point_cloud(&self.positions);
    }

    /// Rebuild the world-space caches from the current transform:
    /// positions through the full matrix, normals through its rotation
    /// and scale only (then renormalized), and the world bounds from
    /// the local box's eight corners.
    pub fn update_transforms(&mut self) {
        debug_assert!(
            self.indices.len() % 3 == 0,
            "index buffer length must be a multiple of 3"
        );
        debug_assert!(
            self.normals.len() == self.indices.len() / 3,
            "one face normal per index triple required"
        );

        let transform =
            Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation);

        self.transformed_positions.clear();
        self.transformed_positions
            .extend(self.positions.iter().map(|&p| transform.transform_point3(p)));

        self.transformed_normals.clear();
        self.transformed_normals.extend(
            self.normals
                .iter()
                .map(|&n| transform.transform_vector3(n).normalize()),
        );

        self.world_bounds = transform.transform_aabb(&self.local_bounds);
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Lift face `i` out of the world-space caches as a standalone
    /// triangle carrying the mesh's cull mode and material.
    fn world_triangle(&self, face: &[u32]) -> Triangle {
        Triangle {
            v0: self.transformed_positions[face[0] as usize],
            v1: self.transformed_positions[face[1] as usize],
            v2: self.transformed_positions[face[2] as usize],
            normal: Vec3::ZERO, // overwritten by caller
            cull_mode: self.cull_mode,
            material_index: self.material_index,
        }
    }
}

impl Hittable for TriangleMesh {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        if !self.world_bounds.hit(ray) {
            return false;
        }

        // Shrinking ray: once a face commits, later faces must beat it
        let mut query = *ray;
        let mut hit_anything = false;

        for (face, &normal) in self
            .indices
            .chunks_exact(3)
            .zip(self.transformed_normals.iter())
        {
            #[cfg(test)]
            self.triangles_probed.fetch_add(1, Ordering::Relaxed);

            let mut triangle = self.world_triangle(face);
            triangle.normal = normal;

            if triangle.hit(&query, rec) {
                hit_anything = true;
                query.max = rec.t;
            }
        }

        hit_anything
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        if !self.world_bounds.hit(ray) {
            return false;
        }

        for (face, &normal) in self
            .indices
            .chunks_exact(3)
            .zip(self.transformed_normals.iter())
        {
            #[cfg(test)]
            self.triangles_probed.fetch_add(1, Ordering::Relaxed);

            let mut triangle = self.world_triangle(face);
            triangle.normal = normal;

            if triangle.hit_any(ray) {
                return true;
            }
        }

        false
    }
}
