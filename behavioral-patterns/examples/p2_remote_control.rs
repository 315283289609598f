//! Pattern 2: Command
//! Example: Remote Control with Undo and History
//!
//! Run with: cargo run --example p2_remote_control

use std::rc::Rc;

use behavioral_patterns::command::{Light, LightOffCommand, LightOnCommand, RemoteControl};

fn main() {
    let living_room = Light::new("Living Room");
    let kitchen = Light::new("Kitchen");

    let mut remote = RemoteControl::new();
    let slots: Vec<(usize, Rc<dyn behavioral_patterns::command::Command>)> = vec![
        (0, Rc::new(LightOnCommand::new(Rc::clone(&living_room)))),
        (1, Rc::new(LightOffCommand::new(Rc::clone(&living_room)))),
        (2, Rc::new(LightOnCommand::new(Rc::clone(&kitchen)))),
        (3, Rc::new(LightOffCommand::new(Rc::clone(&kitchen)))),
    ];
    for (slot, command) in slots {
        if let Err(e) = remote.set_command(slot, command) {
            println!("setup failed: {e}");
        }
    }

    // living room on, kitchen on, living room off; undo lights it again
    println!("=== Pressing buttons ===");
    for slot in [0, 2, 1] {
        match remote.press(slot) {
            Ok(line) => println!("{line}"),
            Err(e) => println!("{e}"),
        }
    }

    println!("\n=== Undo ===");
    match remote.press_undo() {
        Some(line) => println!("{line}"),
        None => println!("Nothing to undo"),
    }
    match remote.press_undo() {
        Some(line) => println!("{line}"),
        None => println!("Nothing to undo"),
    }

    println!("\n=== Bad slots ===");
    if let Err(e) = remote.press(9) {
        println!("{e}");
    }
    if let Err(e) = remote.press(5) {
        println!("{e}");
    }

    println!("\n=== History ===");
    for label in remote.history() {
        println!("{label}");
    }
}
