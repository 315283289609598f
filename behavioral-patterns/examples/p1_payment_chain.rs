//! Pattern 1: Chain of Responsibility
//! Example: Payment Accounts Forwarding Requests
//!
//! Run with: cargo run --example p1_payment_chain

use behavioral_patterns::chain::Account;

fn main() {
    let chain = Account::new("Bank", 100.0)
        .chain(Account::new("PayPal", 200.0))
        .chain(Account::new("Bitcoin", 300.0));

    println!("=== Pay 250 ===");
    match chain.pay(250.0) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => println!("{e}"),
    }

    println!("\n=== Pay 50 ===");
    match chain.pay(50.0) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => println!("{e}"),
    }

    println!("\n=== Pay 1000 ===");
    match chain.pay(1000.0) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => println!("{e}"),
    }
}
