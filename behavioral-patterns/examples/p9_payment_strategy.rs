//! Pattern 9: Strategy
//! Example: Checkout with Swappable Payment Strategies
//!
//! Run with: cargo run --example p9_payment_strategy

use behavioral_patterns::strategy::{Checkout, CreditCard, Crypto, PayPal};

fn main() {
    let mut checkout = Checkout::new();

    println!("=== No strategy yet ===");
    if let Err(e) = checkout.pay(100.0) {
        println!("{e}");
    }

    println!("\n=== Credit card ===");
    checkout.set_strategy(Box::new(CreditCard::new("1234-5678-9012-3456", "Ada Lovelace")));
    match checkout.pay(100.0) {
        Ok(line) => println!("{line}"),
        Err(e) => println!("{e}"),
    }

    println!("\n=== PayPal ===");
    checkout.set_strategy(Box::new(PayPal::new("ada@example.com")));
    match checkout.pay(50.0) {
        Ok(line) => println!("{line}"),
        Err(e) => println!("{e}"),
    }

    println!("\n=== Crypto ===");
    checkout.set_strategy(Box::new(Crypto::new("bc1qxy2kgdygjrsqtzq2n0yrf2493p8")));
    match checkout.pay(25.0) {
        Ok(line) => println!("{line}"),
        Err(e) => println!("{e}"),
    }
}
