//! Pattern 5: Memento
//! Example: Text Editor with Snapshot-Based Undo
//!
//! Run with: cargo run --example p5_editor_history

use behavioral_patterns::memento::{History, TextEditor};

fn main() {
    let mut editor = TextEditor::new();
    let mut history = History::new();

    println!("=== Typing with checkpoints ===");
    editor.type_text("Hello");
    history.push(editor.save());
    println!("content: {:?}", editor.content());

    editor.type_text(", world");
    history.push(editor.save());
    println!("content: {:?}", editor.content());

    editor.type_text("!!!");
    println!("content: {:?}", editor.content());

    println!("\n=== Undoing ===");
    while let Ok(snapshot) = history.pop() {
        editor.restore(&snapshot);
        println!("restored: {:?}", editor.content());
    }

    if let Err(e) = history.pop() {
        println!("{e}");
    }
}
