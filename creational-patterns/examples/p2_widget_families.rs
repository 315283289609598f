//! Pattern 2: Abstract Factory
//! Example: Widget Families per Operating System
//!
//! Run with: cargo run --example p2_widget_families

use creational_patterns::abstract_factory::{factory_for, Application};

fn main() {
    println!("=== Widget Families Demo ===\n");

    for os in ["windows", "mac", "linux"] {
        match factory_for(os) {
            Ok(factory) => {
                println!("Creating {} application:", factory.family());
                let app = Application::new(factory.as_ref());
                for line in app.render_ui() {
                    println!("{line}");
                }
                println!(
                    "Family consistent: {}\n",
                    if app.is_consistent() { "yes" } else { "NO" }
                );
            }
            Err(err) => println!("Cannot build UI: {err}\n"),
        }
    }

    println!("=== Unknown Family ===");
    if let Err(err) = factory_for("beos") {
        println!("Cannot build UI: {err}");
    }
}
