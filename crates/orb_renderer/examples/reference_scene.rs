//! Renders the reference scene to a PNG.
//!
//! Five spheres (metal, wall, plastic, wood, and a huge ground sphere)
//! under one ambient and one point light, viewed from the origin with
//! zero view angles.

use std::path::Path;

use anyhow::Result;
use orb_renderer::{render_parallel, Camera, DVec3, Light, RenderConfig, Scene, Sphere};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let scene = build_scene()?;
    log::info!(
        "Scene: {} spheres, {} lights",
        scene.sphere_count(),
        scene.light_count()
    );

    let mut camera = Camera::new()
        .with_resolution(900, 900)
        .with_position(DVec3::ZERO)
        .with_view_angles(DVec3::ZERO);
    camera.initialize();

    let config = RenderConfig { max_depth: 2 };

    let start = std::time::Instant::now();
    let image = render_parallel(&camera, &scene, &config);
    log::info!(
        "Rendered {}x{} in {:?}",
        image.width,
        image.height,
        start.elapsed()
    );

    let output = Path::new("reference_scene.png");
    image.save_png(output)?;
    log::info!("Saved to {}", output.display());

    Ok(())
}

fn build_scene() -> Result<Scene> {
    let spheres = vec![
        // metal
        Sphere::new(
            DVec3::new(0.0, -0.5, 3.0),
            1.0,
            rgb(192, 192, 192),
            200.0,
            0.5,
            0.9,
            0.4,
            0.4,
        )?,
        // wall
        Sphere::new(
            DVec3::new(2.0, 0.0, 4.0),
            1.0,
            rgb(127, 255, 212),
            40.0,
            0.001,
            0.05,
            0.5,
            0.2,
        )?,
        // plastic
        Sphere::new(
            DVec3::new(-2.0, 1.0, 4.0),
            1.0,
            rgb(211, 211, 211),
            80.0,
            0.003,
            0.2,
            0.8,
            0.6,
        )?,
        // wood
        Sphere::new(
            DVec3::new(1.0, 3.0, 8.0),
            2.0,
            rgb(161, 102, 47),
            10.0,
            0.001,
            0.1,
            0.7,
            0.2,
        )?,
        // ground
        Sphere::new(
            DVec3::new(0.0, -5001.0, 0.0),
            5000.0,
            rgb(255, 255, 0),
            60.0,
            0.05,
            0.1,
            0.7,
            0.2,
        )?,
    ];

    let lights = vec![
        Light::Ambient { intensity: 0.05 },
        Light::Point {
            intensity: 1.25,
            position: DVec3::new(2.0, 1.0, 0.0),
        },
    ];

    Ok(Scene::new(spheres, lights))
}

fn rgb(r: u8, g: u8, b: u8) -> DVec3 {
    DVec3::new(r as f64, g as f64, b as f64) / 255.0
}
