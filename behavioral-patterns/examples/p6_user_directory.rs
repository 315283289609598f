//! Pattern 6: Model-View-Controller
//! Example: User Directory with Swappable Views
//!
//! Run with: cargo run --example p6_user_directory

use behavioral_patterns::mvc::{FramedView, JsonView, PlainView, UserController};

fn main() {
    let mut controller = UserController::new(Box::new(PlainView));

    println!("=== Adding users (plain view) ===");
    for line in controller.add_user(1, "Ada", "ada@example.com") {
        println!("{line}");
    }
    for line in controller.add_user(2, "Grace", "grace@example.com") {
        println!("{line}");
    }

    println!("\n=== Validation failures surface through the view ===");
    for line in controller.add_user(1, "Eve", "eve@example.com") {
        println!("{line}");
    }
    for line in controller.add_user(3, "", "nobody@example.com") {
        println!("{line}");
    }
    for line in controller.show_user(42) {
        println!("{line}");
    }

    println!("\n=== Framed view ===");
    controller.set_view(Box::new(FramedView));
    for line in controller.show_user(1) {
        println!("{line}");
    }

    println!("\n=== JSON view ===");
    controller.set_view(Box::new(JsonView));
    for line in controller.change_email(2, "grace@hopper.io") {
        println!("{line}");
    }
    for line in controller.show_all() {
        println!("{line}");
    }

    println!("\n=== Removing users ===");
    controller.set_view(Box::new(PlainView));
    for line in controller.remove_user(1) {
        println!("{line}");
    }
    for line in controller.remove_user(1) {
        println!("{line}");
    }
    for line in controller.show_all() {
        println!("{line}");
    }
}
