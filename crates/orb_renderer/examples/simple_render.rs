//! Simple renderer example.
//!
//! Builds a three-sphere scene in code and saves it as a P6 PPM.

use orb_renderer::{
    render_parallel, write_ppm, Light, PpmFormat, Scene, Sphere, Vec3,
};

fn main() {
    env_logger::init();

    println!("Orb - Simple Example");
    println!("====================");

    let scene = build_scene();

    println!(
        "Rendering {}x{} with {} spheres...",
        scene.resolution.x,
        scene.resolution.y,
        scene.spheres.len()
    );

    let start = std::time::Instant::now();
    let image = render_parallel(&scene);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    write_ppm(&image, filename, PpmFormat::Binary).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let spheres = vec![
        // Big mirror sphere
        Sphere::new(
            0,
            "mirror",
            Vec3::new(-1.2, 0.0, -5.0),
            Vec3::ONE,
            Vec3::new(0.9, 0.9, 0.9),
            0.1,
            0.1,
            0.8,
            0.8,
            50,
        ),
        // Red diffuse sphere
        Sphere::new(
            1,
            "red",
            Vec3::new(1.2, 0.0, -5.0),
            Vec3::ONE,
            Vec3::new(1.0, 0.1, 0.1),
            0.2,
            0.9,
            0.3,
            0.0,
            20,
        ),
        // Squashed green floor sphere
        Sphere::new(
            2,
            "floor",
            Vec3::new(0.0, -4.0, -6.0),
            Vec3::new(8.0, 3.0, 8.0),
            Vec3::new(0.2, 0.8, 0.2),
            0.3,
            0.8,
            0.0,
            0.0,
            1,
        ),
    ];

    let lights = vec![
        Light::new("key", Vec3::new(4.0, 4.0, 0.0), Vec3::new(0.9, 0.9, 0.9)),
        Light::new("fill", Vec3::new(-4.0, 1.0, -2.0), Vec3::new(0.3, 0.3, 0.4)),
    ];

    Scene {
        near: 1.0,
        left: -1.0,
        right: 1.0,
        bottom: -1.0,
        top: 1.0,
        resolution: glam::UVec2::new(800, 800),
        spheres,
        lights,
        background: Vec3::new(0.05, 0.05, 0.1),
        ambient: Vec3::new(0.3, 0.3, 0.3),
        output: "output.ppm".to_string(),
    }
}
