//! Pattern 11: State
//! Example: Traffic Light Cycling Through States
//!
//! Run with: cargo run --example p11_traffic_light

use behavioral_patterns::state::{TrafficLight, Yellow};

fn main() {
    let mut light = TrafficLight::new();
    println!("starting at: {}", light.current());

    for session in 1..=2 {
        println!("\n=== Session {session} ===");
        for line in light.run_session() {
            println!("{line}");
        }
    }

    println!("\n=== Forcing yellow ===");
    light.set_state(Box::new(Yellow));
    println!("{}", light.handle());
    println!("back at: {}", light.current());
}
