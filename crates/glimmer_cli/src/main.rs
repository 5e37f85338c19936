//! Glimmer CLI - renders a demo scene to a PNG.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use glimmer_core::{demo, Scene};
use glimmer_renderer::{render, LightingMode, RenderConfig};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SceneChoice {
    /// Solid-color spheres in a box room
    Solid,
    /// Lambert vs. Lambert-Phong spheres
    Shading,
    /// Six Cook-Torrance spheres under colored lights
    Microfacet,
    /// Microfacet spheres plus the cull-mode triangle row
    Reference,
    /// An OBJ mesh in the room (requires --obj)
    Mesh,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeChoice {
    ObservedArea,
    Radiance,
    Brdf,
    Combined,
}

impl From<ModeChoice> for LightingMode {
    fn from(mode: ModeChoice) -> Self {
        match mode {
            ModeChoice::ObservedArea => LightingMode::ObservedArea,
            ModeChoice::Radiance => LightingMode::Radiance,
            ModeChoice::Brdf => LightingMode::Brdf,
            ModeChoice::Combined => LightingMode::Combined,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "glimmer", about = "CPU direct-lighting ray tracer")]
struct Args {
    /// Which demo scene to render
    #[arg(long, value_enum, default_value_t = SceneChoice::Reference)]
    scene: SceneChoice,

    /// OBJ file for the mesh scene
    #[arg(long)]
    obj: Option<PathBuf>,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Lighting mode
    #[arg(long, value_enum, default_value_t = ModeChoice::Combined)]
    mode: ModeChoice,

    /// Disable shadow rays
    #[arg(long)]
    no_shadows: bool,

    /// Scene clock in seconds, poses the animated meshes
    #[arg(long, default_value_t = 0.0)]
    time: f32,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,
}

fn build_scene(args: &Args) -> Result<Scene> {
    let mut scene = match args.scene {
        SceneChoice::Solid => demo::solid_spheres(),
        SceneChoice::Shading => demo::shading_test(),
        SceneChoice::Microfacet => demo::microfacet_spheres(),
        SceneChoice::Reference => demo::reference(),
        SceneChoice::Mesh => {
            let Some(path) = &args.obj else {
                bail!("--scene mesh requires --obj <file>");
            };
            demo::mesh_scene(path).with_context(|| format!("loading {}", path.display()))?
        }
    };

    if args.time != 0.0 {
        match args.scene {
            SceneChoice::Reference => demo::animate_reference(&mut scene, args.time),
            SceneChoice::Mesh => demo::animate_mesh_scene(&mut scene, args.time),
            _ => {}
        }
    }

    scene.camera.calculate_camera_to_world();
    Ok(scene)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let scene = build_scene(&args)?;

    let config = RenderConfig {
        width: args.width,
        height: args.height,
        mode: args.mode.into(),
        shadows: !args.no_shadows,
    };

    log::info!(
        "rendering {}x{}, mode {:?}, shadows {}",
        config.width,
        config.height,
        config.mode,
        config.shadows
    );

    let start = Instant::now();
    let image = render(&scene, &config);
    log::info!("rendered in {:?}", start.elapsed());

    image
        .to_rgb_image()
        .save(&args.output)
        .with_context(|| format!("saving {}", args.output.display()))?;
    log::info!("saved {}", args.output.display());

    Ok(())
}
