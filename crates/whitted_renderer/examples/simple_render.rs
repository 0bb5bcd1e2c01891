//! Simple ray tracer example.
//!
//! Renders a small built-in scene with reflective spheres and saves to PPM format.

use whitted_renderer::{render, Color, DVec3, Frustum, Light, RenderConfig, Scene, Sphere, SphereParams};

fn main() {
    println!("Whitted Ray Tracer - Simple Example");
    println!("===================================");

    let scene = build_scene();

    println!(
        "Rendering {}x{} with {} spheres and {} lights...",
        scene.width,
        scene.height,
        scene.spheres.len(),
        scene.lights.len()
    );

    let start = std::time::Instant::now();
    let image = match render(&scene, &RenderConfig::default()) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Invalid scene: {}", e);
            return;
        }
    };
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    match image.save(filename) {
        Ok(()) => println!("Saved to {}", filename),
        Err(e) => eprintln!("Failed to save image: {}", e),
    }
}

fn build_scene() -> Scene {
    let mut scene = Scene::new(Frustum::new(1.0, -1.0, 1.0, -1.0, 1.0), 600, 600)
        .with_background(Color::new(1.0, 1.0, 1.0))
        .with_ambient(Color::new(0.2, 0.2, 0.2));

    // Stretched red ellipsoid in the middle
    scene.add_sphere(Sphere::new(SphereParams {
        ambient: 1.0,
        diffuse: 1.0,
        specular: 0.9,
        reflectivity: 0.0,
        specular_exponent: 50.0,
        ..SphereParams::new("red", DVec3::new(0.0, 0.0, -10.0), DVec3::new(2.0, 4.0, 2.0), Color::new(0.5, 0.0, 0.0))
    }));

    // Two mirrors either side
    scene.add_sphere(Sphere::new(SphereParams {
        ambient: 1.0,
        diffuse: 1.0,
        specular: 0.9,
        reflectivity: 0.5,
        specular_exponent: 50.0,
        ..SphereParams::new("green", DVec3::new(4.0, 4.0, -10.0), DVec3::new(1.0, 2.0, 1.0), Color::new(0.0, 0.5, 0.0))
    }));
    scene.add_sphere(Sphere::new(SphereParams {
        ambient: 1.0,
        diffuse: 1.0,
        specular: 0.9,
        reflectivity: 0.5,
        specular_exponent: 50.0,
        ..SphereParams::new("blue", DVec3::new(-4.0, 2.0, -10.0), DVec3::new(1.0, 2.0, 1.0), Color::new(0.0, 0.0, 0.5))
    }));

    scene.add_light(Light::new("key", DVec3::new(0.0, 0.0, 0.0), Color::new(0.9, 0.9, 0.9)));
    scene.add_light(Light::new("rim", DVec3::new(10.0, 10.0, -10.0), Color::new(0.9, 0.9, 0.0)));
    scene.add_light(Light::new("fill", DVec3::new(-10.0, 5.0, -5.0), Color::new(0.0, 0.0, 0.9)));

    scene
}
