//! Glimmer renderer - the per-pixel direct-lighting integrator.
//!
//! Casts one camera ray per pixel, resolves the closest hit through
//! the scene, and accumulates per-light radiance x BRDF x cosine with
//! optional shadow occlusion. Tiles are rendered in parallel with
//! rayon; the scene is read-only for the duration of a frame.

mod bucket;
mod renderer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use renderer::{
    color_to_rgb8, max_to_one, render, render_pixel, ImageBuffer, LightingMode, RenderConfig,
};

/// Re-export the scene-facing types callers need alongside the renderer.
pub use glimmer_core::{Color, Scene};
pub use glimmer_math::Vec3;
