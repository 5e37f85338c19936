//! Glimmer core - geometry, shading, and scene types for the CPU ray tracer.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere`, `Plane`, `Triangle`, `TriangleMesh`
//! - **Hit queries**: the `Hittable` trait with closest-hit and occlusion modes
//! - **Shading**: BRDF terms, the closed `Material` enum, `Light`
//! - **Scene**: flat primitive/light/material collections plus demo scenes
//! - **OBJ loading**: a minimal position/face loader with face-normal derivation

pub mod brdf;
mod camera;
pub mod demo;
mod hit;
mod light;
mod material;
mod mesh;
pub mod obj;
mod plane;
mod scene;
mod sphere;
mod triangle;

pub use camera::Camera;
pub use hit::{HitRecord, Hittable};
pub use light::Light;
pub use material::{Color, Material};
pub use mesh::TriangleMesh;
pub use plane::Plane;
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::{CullMode, Triangle};

/// Re-export math types used throughout the public API.
pub use glimmer_math::{Aabb, Mat4, Quat, Ray, Vec3};
