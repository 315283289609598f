//! Pattern 6: Flyweight
//! Example: Game Particles Sharing Intrinsic Sprite Data
//!
//! Run with: cargo run --example p6_particle_world

use structural_patterns::flyweight::World;

fn main() {
    println!("=== Flyweight Demo - Particle System ===\n");

    let mut world = World::new();
    let spawns = [
        ("bullet", 10.0, 20.0, "yellow"),
        ("bullet", 15.0, 25.0, "red"),
        ("bullet", 20.0, 30.0, "blue"),
        ("missile", 50.0, 60.0, "white"),
        ("missile", 55.0, 65.0, "orange"),
        ("bullet", 30.0, 35.0, "green"),
    ];

    println!("Creating particles:");
    for (label, x, y, color) in spawns {
        match world.spawn(label, x, y, 5.0, 0.0, 1.0, color) {
            Ok(line) => println!("{line}"),
            Err(err) => println!("Spawn failed: {err}"),
        }
    }

    println!("\nTotal flyweight objects created: {}", world.kind_count());
    println!("Total particle instances: {}", world.particle_count());

    println!("\nSimulating one frame:");
    world.update(0.016);
    println!("\nRendering {} particles:", world.particle_count());
    for line in world.render() {
        println!("{line}");
    }

    println!("\nRequesting an unknown particle type:");
    if let Err(err) = world.spawn("comet", 0.0, 0.0, 0.0, 0.0, 1.0, "white") {
        println!("Spawn failed: {err}");
    }
}
