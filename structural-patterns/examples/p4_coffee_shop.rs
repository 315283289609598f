//! Pattern 4: Decorator
//! Example: Coffee Shop with Stackable Condiments
//!
//! Run with: cargo run --example p4_coffee_shop

use structural_patterns::decorator::{receipt, Beverage, Milk, SimpleCoffee, Sugar, Whip};

fn main() {
    println!("=== Coffee Shop Decorator Demo ===\n");

    let simple: Box<dyn Beverage> = Box::new(SimpleCoffee);
    println!("{}", receipt(simple.as_ref()));

    let with_milk = Milk::wrap(Box::new(SimpleCoffee));
    println!("{}", receipt(with_milk.as_ref()));

    let milk_and_sugar = Sugar::wrap(Milk::wrap(Box::new(SimpleCoffee)));
    println!("{}", receipt(milk_and_sugar.as_ref()));

    let fully_loaded = Whip::wrap(Sugar::wrap(Milk::wrap(Box::new(SimpleCoffee))));
    println!("{}", receipt(fully_loaded.as_ref()));

    println!("\nDecorators compose in any order:");
    let whip_first = Milk::wrap(Whip::wrap(Box::new(SimpleCoffee)));
    println!("{}", receipt(whip_first.as_ref()));
}
