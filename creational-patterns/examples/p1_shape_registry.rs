//! Pattern 1: Factory and Factory Method
//! Example: Runtime-Registered Shape Creators
//!
//! Run with: cargo run --example p1_shape_registry

use creational_patterns::factory::{Shape, ShapeError, ShapeFactory};

struct Square {
    side: f64,
}

impl Shape for Square {
    fn draw(&self) -> String {
        format!("Drawing Square side {:.2}", self.side)
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }
}

fn main() {
    println!("=== Shape Registry Demo ===\n");

    let mut factory = ShapeFactory::with_builtins();

    println!("Creating built-in shapes:");
    for (name, p1, p2) in [("circle", 5.0, 0.0), ("rectangle", 4.0, 6.0)] {
        match factory.create(name, p1, p2) {
            Ok(shape) => {
                println!("{}", shape.draw());
                println!("Area: {:.2}", shape.area());
            }
            Err(err) => println!("Failed to create {name}: {err}"),
        }
    }

    println!("\nRegistering 'square' at runtime...");
    factory.register("square", |p1, _| {
        if p1 <= 0.0 {
            return Err(ShapeError::InvalidParam {
                shape: "Square",
                reason: format!("side must be positive, got {p1}"),
            });
        }
        Ok(Box::new(Square { side: p1 }))
    });

    match factory.create("square", 3.0, 0.0) {
        Ok(shape) => {
            println!("{}", shape.draw());
            println!("Area: {:.2}", shape.area());
        }
        Err(err) => println!("Failed to create square: {err}"),
    }

    println!("\nRequesting an unregistered type:");
    if let Err(err) = factory.create("hexagon", 1.0, 1.0) {
        println!("Failed to create hexagon: {err}");
    }
}
