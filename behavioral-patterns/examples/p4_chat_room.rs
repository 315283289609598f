//! Pattern 4: Mediator
//! Example: Chat Room Routing Messages Between Users
//!
//! Run with: cargo run --example p4_chat_room

use behavioral_patterns::mediator::ChatRoom;

fn main() {
    let room = ChatRoom::new();
    let alice = ChatRoom::register(&room, "Alice");
    let bob = ChatRoom::register(&room, "Bob");
    let carol = ChatRoom::register(&room, "Carol");

    println!("=== Alice says hello ===");
    for line in alice.send("hello everyone") {
        println!("{line}");
    }

    println!("\n=== Bob replies ===");
    for line in bob.send("hi Alice") {
        println!("{line}");
    }

    println!("\n=== Inboxes ===");
    for user in [&alice, &bob, &carol] {
        println!("{}: {:?}", user.name(), user.inbox());
    }
}
