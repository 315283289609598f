//! Pattern 3: Iterator
//! Example: Bounded List with External and Internal Traversal
//!
//! Run with: cargo run --example p3_list_traversal

use behavioral_patterns::iterator::{BoundedList, Traverser};

fn main() {
    let mut list = BoundedList::new(4);
    for name in ["Alice", "Bob", "Carol", "Dave"] {
        if let Err(e) = list.push_back(name.to_string()) {
            println!("{e}");
        }
    }
    if let Err(e) = list.push_back("Eve".to_string()) {
        println!("push rejected: {e}");
    }

    println!("\n=== External iteration ===");
    let mut it = list.iterator();
    it.begin();
    while !it.is_done() {
        if let Some(item) = it.current_item() {
            println!("{item}");
        }
        it.next();
    }

    println!("\n=== Two independent iterators ===");
    let mut a = list.iterator();
    let mut b = list.iterator();
    a.next();
    a.next();
    println!("a at {:?}, b at {:?}", a.current_item(), b.current_item());

    println!("\n=== Hooked traversal, stop at Bob ===");
    let visited = Traverser::traverse(&list, |name| {
        println!("visiting {name}");
        name != "Bob"
    });
    println!("visited {visited} items");
}
