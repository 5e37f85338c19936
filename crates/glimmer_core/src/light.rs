//! Point and directional lights.

use crate::material::Color;
use glimmer_math::Vec3;

/// A light source.
///
/// `intensity` is a radiant-power-like scalar and must be
/// non-negative. Directional lights have no position; queries that
/// need a distance get `f32::INFINITY` back and must branch on it
/// before computing any distance-based attenuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Point {
        origin: Vec3,
        intensity: f32,
        color: Color,
    },
    Directional {
        /// Direction the light travels (unit vector)
        direction: Vec3,
        intensity: f32,
        color: Color,
    },
}

impl Light {
    pub fn point(origin: Vec3, intensity: f32, color: Color) -> Self {
        debug_assert!(intensity >= 0.0);
        Self::Point {
            origin,
            intensity,
            color,
        }
    }

    pub fn directional(direction: Vec3, intensity: f32, color: Color) -> Self {
        debug_assert!(intensity >= 0.0);
        Self::Directional {
            direction: direction.normalize(),
            intensity,
            color,
        }
    }

    /// Unit direction from `target` toward the light, and the distance
    /// to cover. Directional lights are infinitely far away; their
    /// distance is `f32::INFINITY`, which doubles as an unbounded
    /// shadow-ray `max`.
    pub fn direction_to(&self, target: Vec3) -> (Vec3, f32) {
        match *self {
            Light::Point { origin, .. } => {
                let delta = origin - target;
                let distance = delta.length();
                (delta / distance, distance)
            }
            Light::Directional { direction, .. } => (-direction, f32::INFINITY),
        }
    }

    /// Incident radiance at `target`: inverse-square falloff for point
    /// lights, constant for directional ones.
    pub fn radiance(&self, target: Vec3) -> Color {
        match *self {
            Light::Point {
                origin,
                intensity,
                color,
            } => color * (intensity / (origin - target).length_squared()),
            Light::Directional {
                intensity, color, ..
            } => color * intensity,
        }
    }
}
