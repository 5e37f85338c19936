//! Bucket-based tile rendering.
//!
//! Divides the image into tiles that render independently and in
//! parallel. Each tile only ever reads the scene, so the fan-out needs
//! no synchronization beyond the final join.

use crate::renderer::{render_pixel, RenderConfig};
use glimmer_core::{Color, Scene};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    /// X coordinate of the bucket's top-left corner
    pub x: u32,
    /// Y coordinate of the bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets for an image, sorted center-out.
///
/// Center tiles usually contain the subject, so an interactive
/// consumer sees the interesting part of the frame first.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_center_out(&mut buckets, width, height);

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from the image center.
fn sort_center_out(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    buckets.sort_by(|a, b| {
        let a_dx = a.x as f32 + a.width as f32 / 2.0 - center_x;
        let a_dy = a.y as f32 + a.height as f32 / 2.0 - center_y;
        let b_dx = b.x as f32 + b.width as f32 / 2.0 - center_x;
        let b_dy = b.y as f32 + b.height as f32 / 2.0 - center_y;

        let a_dist = a_dx * a_dx + a_dy * a_dy;
        let b_dist = b_dx * b_dx + b_dy * b_dy;

        a_dist.partial_cmp(&b_dist).unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Render a single bucket's pixels in row-major order.
pub fn render_bucket(
    bucket: &Bucket,
    scene: &Scene,
    config: &RenderConfig,
    fov_scale: f32,
    aspect: f32,
) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let color = render_pixel(
                scene,
                config,
                fov_scale,
                aspect,
                bucket.x + local_x,
                bucket.y + local_y,
            );
            pixels.push(color);
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 100, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid with partial buckets

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 100);
    }

    #[test]
    fn test_center_out_order() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9); // 3x3 grid

        // First bucket is the center one
        let first = &buckets[0];
        assert_eq!(first.x, 64);
        assert_eq!(first.y, 64);
    }

    #[test]
    fn test_buckets_tile_without_overlap() {
        let buckets = generate_buckets(100, 70, 32);
        let mut covered = vec![false; 100 * 70];

        for bucket in &buckets {
            for y in bucket.y..bucket.y + bucket.height {
                for x in bucket.x..bucket.x + bucket.width {
                    let i = (y * 100 + x) as usize;
                    assert!(!covered[i], "pixel ({}, {}) covered twice", x, y);
                    covered[i] = true;
                }
            }
        }
        assert!(covered.iter().all(|&c| c));
    }
}
