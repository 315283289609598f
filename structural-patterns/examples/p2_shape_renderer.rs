//! Pattern 2: Bridge
//! Example: Shapes Decoupled from Rendering Backends
//!
//! Run with: cargo run --example p2_shape_renderer

use std::rc::Rc;

use structural_patterns::bridge::{Circle, DirectX, OpenGl, Rect, Renderer};

fn main() {
    println!("=== Bridge Demo - Shapes x Renderers ===\n");

    let opengl: Rc<dyn Renderer> = Rc::new(OpenGl);
    let directx: Rc<dyn Renderer> = Rc::new(DirectX);

    println!("1. Shapes on the OpenGL backend:");
    let mut circle = Circle::new(Rc::clone(&opengl), 10.0, 20.0, 5.0);
    let mut rect = Rect::new(Rc::clone(&opengl), 30.0, 40.0, 15.0, 10.0);
    println!("{}", circle.draw());
    println!("{}", rect.draw());

    println!("\n2. Shapes on the DirectX backend:");
    let circle_dx = Circle::new(Rc::clone(&directx), 50.0, 60.0, 8.0);
    println!("{}", circle_dx.draw());

    println!("\n3. Moving and resizing:");
    println!("{}", circle.translate(5.0, 3.0));
    println!("{}", circle.draw());
    println!("{}", rect.resize(1.5));
    println!("{}", rect.draw());

    println!("\n4. Switching the circle's renderer at runtime:");
    circle.set_renderer(directx);
    println!("{}", circle.draw());
}
