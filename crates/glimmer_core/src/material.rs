//! Material variants and per-light shading dispatch.

use crate::brdf;
use crate::hit::HitRecord;
use glimmer_math::Vec3;
use std::f32::consts::PI;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Base reflectivity of dielectrics at normal incidence.
const DIELECTRIC_F0: f32 = 0.04;

/// A closed set of shading models. The scene owns all materials in an
/// arena and geometry refers to them by index, so one material can
/// serve any number of primitives.
///
/// `shade` evaluates the material's BRDF for one light: `light` points
/// from the hit toward the light, `view` from the hit toward the
/// camera, both unit length. Radiance and the cosine law are applied
/// by the integrator, not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Fixed color regardless of lighting; also the arena's index-0
    /// fallback.
    SolidColor { color: Color },
    /// Perfectly diffuse.
    Lambert { reflectance: f32, color: Color },
    /// Diffuse base plus a Phong specular lobe.
    LambertPhong {
        reflectance: f32,
        color: Color,
        specular: f32,
        exponent: f32,
    },
    /// Microfacet metal/dielectric (GGX distribution, Smith masking,
    /// Schlick Fresnel).
    CookTorrance {
        albedo: Color,
        metalness: f32,
        roughness: f32,
    },
    /// Perfect mirror. Contributes nothing to direct per-light
    /// shading; its appearance would come from reflection rays, which
    /// this renderer does not trace.
    Mirror,
}

impl Material {
    pub fn shade(&self, rec: &HitRecord, light: Vec3, view: Vec3) -> Color {
        match *self {
            Material::SolidColor { color } => color,
            Material::Lambert { reflectance, color } => brdf::lambert(reflectance, color),
            Material::LambertPhong {
                reflectance,
                color,
                specular,
                exponent,
            } => {
                brdf::lambert(reflectance, color)
                    + brdf::phong(specular, exponent, light, view, rec.normal)
            }
            Material::CookTorrance {
                albedo,
                metalness,
                roughness,
            } => cook_torrance(rec.normal, light, view, albedo, metalness, roughness),
            Material::Mirror => Color::ZERO,
        }
    }
}

/// Full Cook-Torrance evaluation: `D*G*F / (4 (n.v)(n.l))` specular
/// plus an energy-balanced diffuse term scaled by what Fresnel leaves
/// over and by the dielectric fraction.
fn cook_torrance(
    normal: Vec3,
    light: Vec3,
    view: Vec3,
    albedo: Color,
    metalness: f32,
    roughness: f32,
) -> Color {
    let half = (view + light).normalize();
    let f0 = Color::splat(DIELECTRIC_F0).lerp(albedo, metalness);

    let fresnel = brdf::fresnel_schlick(half, view, f0);
    let distribution = brdf::ggx_distribution(normal, half, roughness);
    let geometry = brdf::smith_geometry(normal, view, light, roughness);

    let n_dot_v = normal.dot(view);
    let n_dot_l = normal.dot(light);
    let denominator = 4.0 * n_dot_v * n_dot_l;

    let specular = if denominator.abs() < 1e-6 {
        Color::ZERO
    } else {
        fresnel * (distribution * geometry / denominator)
    };

    let diffuse = (Color::ONE - fresnel) * (1.0 - metalness) * albedo / PI;

    diffuse + specular
}
