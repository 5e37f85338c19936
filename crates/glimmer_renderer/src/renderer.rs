//! Core direct-lighting integrator.

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use glimmer_core::{Color, Scene};
use glimmer_math::{Ray, Vec3};
use rayon::prelude::*;

/// Offset applied along the surface normal when spawning shadow rays,
/// so a surface cannot shadow itself.
const SHADOW_BIAS: f32 = 1e-4;

/// Near bound for shadow rays.
const SHADOW_RAY_MIN: f32 = 1e-5;

/// What the integrator accumulates per light.
///
/// `Combined` is the physically meaningful product; the other three
/// isolate one factor each for debugging material and light setups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightingMode {
    /// Raw Lambertian cosine term only
    ObservedArea,
    /// Incident light radiance only, no BRDF
    Radiance,
    /// Material response only, radiance ignored
    Brdf,
    /// Radiance x BRDF x cosine
    #[default]
    Combined,
}

/// Immutable per-frame configuration. Passing this by value keeps the
/// integrator reentrant; two frames with different settings can render
/// concurrently from the same scene.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub mode: LightingMode,
    pub shadows: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            mode: LightingMode::Combined,
            shadows: true,
        }
    }
}

/// Rescale a color so no channel exceeds 1.0, preserving hue: if the
/// largest channel is above one, all channels divide by it.
pub fn max_to_one(color: Color) -> Color {
    let max = color.x.max(color.y).max(color.z);
    if max > 1.0 {
        color / max
    } else {
        color
    }
}

/// Quantize a tone-mapped color to 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let c = max_to_one(color);
    [
        (c.x.clamp(0.0, 1.0) * 255.0) as u8,
        (c.y.clamp(0.0, 1.0) * 255.0) as u8,
        (c.z.clamp(0.0, 1.0) * 255.0) as u8,
    ]
}

/// Shade one pixel.
///
/// `fov_scale` is `tan(fov/2)` and `aspect` is width/height, hoisted
/// out by the caller since they are constant across a frame. The
/// camera's cached camera-to-world matrix must be current.
pub fn render_pixel(
    scene: &Scene,
    config: &RenderConfig,
    fov_scale: f32,
    aspect: f32,
    px: u32,
    py: u32,
) -> Color {
    // Pixel center through the fov into camera space, then out to world
    let rx = px as f32 + 0.5;
    let ry = py as f32 + 0.5;
    let cx = (2.0 * rx / config.width as f32 - 1.0) * aspect * fov_scale;
    let cy = (1.0 - 2.0 * ry / config.height as f32) * fov_scale;

    let direction = scene
        .camera
        .camera_to_world
        .transform_vector3(Vec3::new(cx, cy, 1.0))
        .normalize();
    let view_ray = Ray::new(scene.camera.origin, direction);

    let closest = scene.closest_hit(&view_ray);

    let mut color = Color::ZERO;
    if closest.did_hit {
        for light in &scene.lights {
            let (light_dir, light_distance) = light.direction_to(closest.point);

            if config.shadows {
                let shadow_ray = Ray::with_bounds(
                    closest.point + closest.normal * SHADOW_BIAS,
                    light_dir,
                    SHADOW_RAY_MIN,
                    light_distance,
                );
                if scene.any_hit(&shadow_ray) {
                    continue;
                }
            }

            // Lambert cosine; surfaces facing away contribute nothing
            // in the modes that evaluate a surface response
            let observed_area = closest.normal.dot(light_dir);

            match config.mode {
                LightingMode::ObservedArea => {
                    if observed_area < 0.0 {
                        continue;
                    }
                    color += Color::splat(observed_area);
                }
                LightingMode::Radiance => {
                    color += light.radiance(closest.point);
                }
                LightingMode::Brdf => {
                    if observed_area < 0.0 {
                        continue;
                    }
                    color += scene
                        .material(closest.material_index)
                        .shade(&closest, light_dir, -direction);
                }
                LightingMode::Combined => {
                    if observed_area < 0.0 {
                        continue;
                    }
                    color += light.radiance(closest.point)
                        * scene
                            .material(closest.material_index)
                            .shade(&closest, light_dir, -direction)
                        * observed_area;
                }
            }
        }
    }

    max_to_one(color)
}

/// Frame storage: one linear color per pixel, row-major.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Quantize into an 8-bit RGB image for saving.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(color_to_rgb8(self.get(x, y)))
        })
    }
}

/// Render a full frame, tiles in parallel.
///
/// The scene must be frozen for the call: mesh caches updated and the
/// camera matrix calculated. Each tile writes a disjoint pixel range,
/// so no ordering between tiles is observable in the output.
pub fn render(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let fov_scale = scene.camera.fov_scale();
    let aspect = config.width as f32 / config.height as f32;

    let buckets = generate_buckets(config.width, config.height, DEFAULT_BUCKET_SIZE);
    log::debug!(
        "rendering {}x{} in {} buckets across {} threads",
        config.width,
        config.height,
        buckets.len(),
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            BucketResult::new(
                *bucket,
                render_bucket(bucket, scene, config, fov_scale, aspect),
            )
        })
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in results {
        let bucket = result.bucket;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let color = result.pixels[(local_y * bucket.width + local_x) as usize];
                image.set(bucket.x + local_x, bucket.y + local_y, color);
            }
        }
    }
    image
}
