//! Pattern 5: Facade
//! Example: Computer Start/Status/Shutdown Sequences
//!
//! Run with: cargo run --example p5_computer_facade

use structural_patterns::facade::Computer;

fn main() {
    println!("=== Computer Facade Demo ===\n");

    let mut computer = Computer::new();

    println!("=== Starting Computer ===");
    for line in computer.start() {
        println!("{line}");
    }
    println!("Computer started successfully!\n");

    println!("=== Computer Status ===");
    for line in computer.status() {
        println!("{line}");
    }

    println!("\n=== Shutting Down Computer ===");
    for line in computer.shutdown() {
        println!("{line}");
    }
    println!("Computer shut down successfully!");
}
