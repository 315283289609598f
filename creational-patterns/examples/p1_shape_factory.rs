//! Pattern 1: Factory and Factory Method
//! Example: Shape Factory with Parameter Validation
//!
//! Run with: cargo run --example p1_shape_factory

use creational_patterns::factory::{create_shape, ShapeKind};

fn main() {
    println!("=== Shape Factory Demo ===\n");

    let requests = [
        (ShapeKind::Circle, 5.0, 0.0),
        (ShapeKind::Rectangle, 4.0, 6.0),
        (ShapeKind::Triangle, 3.0, 4.0),
    ];

    for (kind, p1, p2) in requests {
        match create_shape(kind, p1, p2) {
            Ok(shape) => {
                println!("{}", shape.draw());
                println!("Area: {:.2}\n", shape.area());
            }
            Err(err) => println!("Failed to create shape: {err}\n"),
        }
    }

    println!("=== Invalid Parameters ===");
    if let Err(err) = create_shape(ShapeKind::Circle, -2.0, 0.0) {
        println!("Failed to create circle: {err}");
    }
}
