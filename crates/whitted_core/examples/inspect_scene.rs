//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/reflection.txt

use std::env;

use whitted_core::load_scene;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-file>");
        println!("\nExamples:");
        println!("  cargo run --example inspect_scene -- scenes/reflection.txt");
        println!("  cargo run --example inspect_scene -- scenes/shadows.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            let f = &scene.frustum;
            println!("\n=== Scene: {}x{} ===", scene.width, scene.height);
            println!(
                "Frustum: near {:.2}, left {:.2}, right {:.2}, bottom {:.2}, top {:.2}",
                f.near, f.left, f.right, f.bottom, f.top
            );
            println!("Background: {}", scene.background);
            println!("Ambient: {}", scene.ambient);
            if let Some(output) = &scene.output {
                println!("Output: {}", output);
            }

            println!("\n--- Spheres ---");
            for (i, sphere) in scene.spheres.iter().enumerate() {
                println!(
                    "  [{}] {} at ({:.2}, {:.2}, {:.2}) scale ({:.2}, {:.2}, {:.2})",
                    i,
                    sphere.name(),
                    sphere.position().x,
                    sphere.position().y,
                    sphere.position().z,
                    sphere.scale().x,
                    sphere.scale().y,
                    sphere.scale().z
                );
                println!(
                    "       ka {:.2} kd {:.2} ks {:.2} kr {:.2} n {:.1}",
                    sphere.ambient(),
                    sphere.diffuse(),
                    sphere.specular(),
                    sphere.reflectivity(),
                    sphere.specular_exponent()
                );
            }

            println!("\n--- Lights ---");
            for (i, light) in scene.lights.iter().enumerate() {
                let pos = light.position();
                println!(
                    "  [{}] {} at ({:.2}, {:.2}, {:.2}) intensity {}",
                    i,
                    light.name(),
                    pos.x,
                    pos.y,
                    pos.z,
                    light.intensity()
                );
            }
        }
        Err(e) => {
            eprintln!("Error loading scene file: {}", e);
        }
    }
}
