//! Pattern 3: Builder
//! Example: Fluent Computer Builder with Ownership Transfer
//!
//! Run with: cargo run --example p3_computer_builder

use creational_patterns::builder::ComputerBuilder;

fn main() {
    println!("=== Computer Builder Demo ===\n");

    println!("Building Gaming Computer:");
    let mut builder = ComputerBuilder::new();
    match builder
        .cpu("Intel i9-13900K")
        .ram("32GB DDR5")
        .storage("1TB NVMe SSD")
        .gpu("RTX 4080")
        .motherboard("ASUS ROG Strix Z790")
        .wifi()
        .bluetooth()
        .build()
    {
        Ok(pc) => println!("{pc}\n"),
        Err(err) => println!("Build failed: {err}\n"),
    }

    println!("Building Office Computer:");
    let mut builder = ComputerBuilder::new();
    match builder
        .cpu("Intel i5-13400")
        .ram("16GB DDR4")
        .storage("512GB SSD")
        .motherboard("MSI Pro B660M")
        .wifi()
        .build()
    {
        Ok(pc) => println!("{pc}\n"),
        Err(err) => println!("Build failed: {err}\n"),
    }

    println!("Building Budget Computer (sparse configuration):");
    let mut builder = ComputerBuilder::new();
    match builder
        .cpu("AMD Ryzen 5 5600G")
        .ram("8GB DDR4")
        .storage("256GB SSD")
        .build()
    {
        Ok(pc) => println!("{pc}\n"),
        Err(err) => println!("Build failed: {err}\n"),
    }

    println!("Calling build() a second time:");
    match builder.build() {
        Ok(_) => println!("unexpectedly built again"),
        Err(err) => println!("Build failed: {err}"),
    }
}
