//! Built-in demo scenes.
//!
//! Each builder returns a fully populated scene (meshes already
//! updated); the animated ones come with a companion `animate_*`
//! function that re-poses transforms for a given clock time. Callers
//! re-run the mesh update steps via those functions, never during a
//! render pass.

use crate::material::{Color, Material};
use crate::obj::{self, ObjResult};
use crate::scene::Scene;
use crate::triangle::CullMode;
use glimmer_math::Vec3;
use std::f32::consts::PI;
use std::path::Path;

const WHITE: Color = Color::new(1.0, 1.0, 1.0);
const RED: Color = Color::new(1.0, 0.0, 0.0);
const BLUE: Color = Color::new(0.0, 0.0, 1.0);
const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
const GREEN: Color = Color::new(0.0, 1.0, 0.0);
const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);

/// Shared silver-ish metal and gray plastic used by the microfacet
/// scenes.
const METAL_ALBEDO: Color = Color::new(0.972, 0.960, 0.915);
const PLASTIC_ALBEDO: Color = Color::new(0.75, 0.75, 0.75);

/// Add the five-sided room used by most demo scenes.
fn add_room(scene: &mut Scene, material: u8) {
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0), material); // back
    scene.add_plane(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), material); // bottom
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0), material); // top
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), material); // right
    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), material); // left
}

/// Solid-color spheres in a box room; exercises intersection without
/// any lighting response.
pub fn solid_spheres() -> Scene {
    let mut scene = Scene::new();
    scene.camera.origin = Vec3::new(0.0, 3.0, -9.0);
    scene.camera.fov_angle = 45.0;
    scene.camera.calculate_camera_to_world();

    // Material 0 is the built-in solid red
    let blue = scene.add_material(Material::SolidColor { color: BLUE });
    let yellow = scene.add_material(Material::SolidColor { color: YELLOW });
    let green = scene.add_material(Material::SolidColor { color: GREEN });
    let magenta = scene.add_material(Material::SolidColor { color: MAGENTA });

    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, green);
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), -Vec3::X, green);
    scene.add_plane(Vec3::new(0.0, 0.0, 0.0), Vec3::Y, yellow);
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), -Vec3::Y, yellow);
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, magenta);

    scene.add_sphere(Vec3::new(-1.75, 1.0, 0.0), 0.75, 0);
    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 0.75, blue);
    scene.add_sphere(Vec3::new(1.75, 1.0, 0.0), 0.75, 0);
    scene.add_sphere(Vec3::new(-1.75, 3.0, 0.0), 0.75, blue);
    scene.add_sphere(Vec3::new(0.0, 3.0, 0.0), 0.75, 0);
    scene.add_sphere(Vec3::new(1.75, 3.0, 0.0), 0.75, blue);

    scene.add_point_light(Vec3::new(0.0, 5.0, -5.0), 70.0, WHITE);

    log_scene("solid_spheres", &scene);
    scene
}

/// Two shaded spheres over a diffuse floor; the classic
/// Lambert-vs-Phong comparison.
pub fn shading_test() -> Scene {
    let mut scene = Scene::new();
    scene.camera.origin = Vec3::new(0.0, 1.0, -5.0);
    scene.camera.fov_angle = 45.0;
    scene.camera.calculate_camera_to_world();

    let lambert_red = scene.add_material(Material::Lambert {
        reflectance: 1.0,
        color: RED,
    });
    let phong_blue = scene.add_material(Material::LambertPhong {
        reflectance: 1.0,
        color: BLUE,
        specular: 1.0,
        exponent: 60.0,
    });
    let lambert_yellow = scene.add_material(Material::Lambert {
        reflectance: 1.0,
        color: YELLOW,
    });

    scene.add_plane(Vec3::ZERO, Vec3::Y, lambert_yellow);
    scene.add_sphere(Vec3::new(-0.75, 1.0, 0.0), 1.0, lambert_red);
    scene.add_sphere(Vec3::new(0.75, 1.0, 0.0), 1.0, phong_blue);

    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 25.0, WHITE);
    scene.add_point_light(Vec3::new(0.0, 2.5, -5.0), 25.0, WHITE);

    log_scene("shading_test", &scene);
    scene
}

/// Six Cook-Torrance spheres: metal on the bottom row, plastic on top,
/// roughness 1.0 / 0.6 / 0.1 left to right, under three colored
/// lights.
pub fn microfacet_spheres() -> Scene {
    let mut scene = Scene::new();
    scene.camera.origin = Vec3::new(0.0, 3.0, -9.0);
    scene.camera.fov_angle = 45.0;
    scene.camera.calculate_camera_to_world();

    let gray_blue = scene.add_material(Material::Lambert {
        reflectance: 1.0,
        color: Color::new(0.49, 0.57, 0.57),
    });
    add_room(&mut scene, gray_blue);

    for (row, metalness) in [(1.0, 1.0), (3.0, 0.0)] {
        let albedo = if metalness > 0.5 { METAL_ALBEDO } else { PLASTIC_ALBEDO };
        for (x, roughness) in [(-1.75, 1.0), (0.0, 0.6), (1.75, 0.1)] {
            let material = scene.add_material(Material::CookTorrance {
                albedo,
                metalness,
                roughness,
            });
            scene.add_sphere(Vec3::new(x, row, 0.0), 0.75, material);
        }
    }

    add_reference_lights(&mut scene);

    log_scene("microfacet_spheres", &scene);
    scene
}

/// The full reference scene: the microfacet spheres plus a row of
/// three rotating one-triangle meshes demonstrating each cull mode.
pub fn reference() -> Scene {
    let mut scene = microfacet_spheres();

    let white = scene.add_material(Material::Lambert {
        reflectance: 1.0,
        color: WHITE,
    });

    let base = [
        Vec3::new(-0.75, 1.5, 0.0),
        Vec3::new(0.75, 0.0, 0.0),
        Vec3::new(-0.75, 0.0, 0.0),
    ];
    let rigs = [
        (CullMode::BackFace, Vec3::new(-1.75, 4.5, 0.0)),
        (CullMode::FrontFace, Vec3::new(0.0, 4.5, 0.0)),
        (CullMode::None, Vec3::new(1.75, 4.5, 0.0)),
    ];

    for (cull_mode, position) in rigs {
        let mesh = scene.add_triangle_mesh(cull_mode, white);
        mesh.append_triangle(base[0], base[1], base[2]);
        mesh.translate(position);
        mesh.update_aabb();
        mesh.update_transforms();
    }

    log_scene("reference", &scene);
    scene
}

/// Spin the reference scene's triangle meshes. `total_time` is the
/// scene clock in seconds.
pub fn animate_reference(scene: &mut Scene, total_time: f32) {
    let yaw = (total_time.cos() + 1.0) / 2.0 * (PI * 2.0);
    for mesh in &mut scene.meshes {
        mesh.rotate_y(yaw);
        mesh.update_transforms();
    }
}

/// A Lambert-shaded OBJ mesh (back-face culled) in the gray-blue room.
pub fn mesh_scene(obj_path: &Path) -> ObjResult<Scene> {
    let mut scene = Scene::new();
    scene.camera.origin = Vec3::new(0.0, 3.0, -9.0);
    scene.camera.fov_angle = 45.0;
    scene.camera.calculate_camera_to_world();

    let gray_blue = scene.add_material(Material::Lambert {
        reflectance: 1.0,
        color: Color::new(0.49, 0.57, 0.57),
    });
    let white = scene.add_material(Material::Lambert {
        reflectance: 1.0,
        color: WHITE,
    });
    add_room(&mut scene, gray_blue);

    let data = obj::load_obj(obj_path)?;
    let mesh = scene.add_triangle_mesh(CullMode::BackFace, white);
    mesh.positions = data.positions;
    mesh.normals = data.normals;
    mesh.indices = data.indices;
    mesh.scale(Vec3::splat(2.0));
    mesh.update_aabb();
    mesh.update_transforms();

    add_reference_lights(&mut scene);

    log_scene("mesh_scene", &scene);
    Ok(scene)
}

/// Spin the OBJ mesh.
pub fn animate_mesh_scene(scene: &mut Scene, total_time: f32) {
    animate_reference(scene, total_time);
}

fn add_reference_lights(scene: &mut Scene) {
    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, Color::new(1.0, 0.61, 0.45)); // back
    scene.add_point_light(Vec3::new(-2.5, 5.0, -5.0), 70.0, Color::new(1.0, 0.8, 0.45)); // front left
    scene.add_point_light(Vec3::new(2.5, 2.5, -5.0), 50.0, Color::new(0.34, 0.47, 0.68));
}

fn log_scene(name: &str, scene: &Scene) {
    log::info!(
        "built scene '{}': {} spheres, {} planes, {} meshes, {} lights, {} materials",
        name,
        scene.spheres.len(),
        scene.planes.len(),
        scene.meshes.len(),
        scene.lights.len(),
        scene.material_count()
    );
}
