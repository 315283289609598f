//! Pattern 7: Null Object
//! Example: Customer Directory Returning Guests for Misses
//!
//! Run with: cargo run --example p7_guest_customer

use behavioral_patterns::null_object::CustomerDirectory;

fn main() {
    let directory = CustomerDirectory::new(&["Rob", "Joe", "Julie"]);

    println!("=== Lookups ===");
    for name in ["Rob", "Laura", "Julie", "Dave"] {
        let customer = directory.find(name);
        println!("{}", customer.greet());
        println!("{}", customer.purchase("a book"));
        println!("discount: {}%", customer.discount_percent());
        println!();
    }
}
