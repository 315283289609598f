//! Pattern 7: Proxy
//! Example: Access Control, Lazy Loading and Caching
//!
//! Run with: cargo run --example p7_image_proxy

use structural_patterns::proxy::{ImageProxy, ImageView};

fn main() {
    println!("=== Image Proxy Demo ===\n");

    let mut admin_view = ImageProxy::new("vacation.jpg", "admin");
    let mut user_view = ImageProxy::new("document.pdf", "user");
    let mut guest_view = ImageProxy::new("secret.jpg", "guest");

    println!("1. Admin accessing image:");
    for line in admin_view.display() {
        println!("{line}");
    }

    println!("\n2. Admin accessing the same image again (cached):");
    for line in admin_view.display() {
        println!("{line}");
    }

    println!("\n3. Regular user accessing image:");
    for line in user_view.display() {
        println!("{line}");
    }

    println!("\n4. Guest trying to access image (access denied):");
    for line in guest_view.display() {
        println!("{line}");
    }
    println!(
        "Real image constructed for guest: {}",
        guest_view.is_materialized()
    );
}
