//! Pattern 4: Prototype
//! Example: Deep Clones from a Prototype Registry
//!
//! Run with: cargo run --example p4_prototype_registry

use creational_patterns::prototype::{CirclePrototype, PrototypeRegistry, RectanglePrototype};

fn main() {
    println!("=== Prototype Registry Demo ===\n");

    let mut registry = PrototypeRegistry::new();
    println!(
        "{}",
        registry.register("RedRectangle", Box::new(RectanglePrototype::new(0, 0, 100, 50, "Red")))
    );
    println!(
        "{}",
        registry.register("BlueCircle", Box::new(CirclePrototype::new(0, 0, 25, "Blue")))
    );

    println!("\n--- Creating shapes from prototypes ---");
    match registry.get("RedRectangle") {
        Ok(mut shape) => {
            shape.move_to(10, 20);
            println!("{}", shape.draw());
        }
        Err(err) => println!("{err}"),
    }

    match registry.get("BlueCircle") {
        Ok(mut shape) => {
            shape.move_to(50, 75);
            shape.set_color("Teal");
            println!("{}", shape.draw());
        }
        Err(err) => println!("{err}"),
    }

    println!("\n--- Original prototypes remain unchanged ---");
    match registry.get("RedRectangle") {
        Ok(shape) => println!("{}", shape.draw()),
        Err(err) => println!("{err}"),
    }
    match registry.get("BlueCircle") {
        Ok(shape) => println!("{}", shape.draw()),
        Err(err) => println!("{err}"),
    }

    println!("\n--- Unknown prototype ---");
    if let Err(err) = registry.get("GreenTriangle") {
        println!("{err}");
    }
}
