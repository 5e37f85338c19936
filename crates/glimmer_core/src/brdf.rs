//! BRDF terms: Lambert, Phong, and the Cook-Torrance microfacet pieces.
//!
//! Every function here is pure and stateless. All vectors are assumed
//! pre-normalized by the caller; light directions point *toward* the
//! light, view directions toward the camera. None of these terms clamp
//! a negative `dot(n, l)` themselves, so callers must reject
//! backfacing configurations before evaluating them.

use crate::material::Color;
use glimmer_math::Vec3;
use std::f32::consts::PI;

/// Lambert diffuse: `kd * cd / pi`, energy-normalized over the
/// hemisphere.
pub fn lambert(kd: f32, cd: Color) -> Color {
    cd * kd / PI
}

/// Phong specular lobe. Reflects the incoming light direction about
/// the normal and raises the view alignment to `exponent`. Achromatic.
pub fn phong(ks: f32, exponent: f32, light: Vec3, view: Vec3, normal: Vec3) -> Color {
    let reflected = light - 2.0 * normal.dot(light) * normal;
    let cos_angle = reflected.dot(view).max(0.0);
    Color::splat(ks * cos_angle.powf(exponent))
}

/// Schlick's Fresnel approximation.
///
/// `f0` is the base reflectivity at normal incidence: ~0.04 for
/// dielectrics, the albedo for conductors.
pub fn fresnel_schlick(half: Vec3, view: Vec3, f0: Color) -> Color {
    f0 + (Color::ONE - f0) * (1.0 - half.dot(view)).powf(5.0)
}

/// Trowbridge-Reitz (GGX) normal distribution, with the UE4
/// `alpha^2 = roughness^2` remapping.
pub fn ggx_distribution(normal: Vec3, half: Vec3, roughness: f32) -> f32 {
    let alpha_sq = roughness * roughness;
    let n_dot_h = normal.dot(half);

    alpha_sq / (PI * (n_dot_h * n_dot_h * (alpha_sq - 1.0) + 1.0).powi(2))
}

/// Schlick-GGX masking term for one direction, direct-lighting
/// variant: `k = (roughness + 1)^2 / 8`.
pub fn schlick_ggx(normal: Vec3, v: Vec3, roughness: f32) -> f32 {
    let k = (roughness + 1.0) * (roughness + 1.0) / 8.0;
    let cos_angle = normal.dot(v);

    cos_angle / (cos_angle * (1.0 - k) + k)
}

/// Smith's separable masking-shadowing: the Schlick-GGX term for the
/// view direction times the same term for the light direction.
pub fn smith_geometry(normal: Vec3, view: Vec3, light: Vec3, roughness: f32) -> f32 {
    schlick_ggx(normal, view, roughness) * schlick_ggx(normal, light, roughness)
}
