//! Pattern 1: Chain of Responsibility
//! Example: Help Handlers with a No-Topic Sentinel
//!
//! Run with: cargo run --example p1_help_chain

use behavioral_patterns::chain::HelpHandler;

fn main() {
    // widgets forward to their enclosing dialog, the dialog to the app
    let application = HelpHandler::new("Application", Some(3));
    let dialog = HelpHandler::new("PrintDialog", Some(1)).with_successor(application);
    let ok_button = HelpHandler::new("OkButton", None).with_successor(dialog);

    println!("=== Button without a topic ===");
    println!("has_help: {}", ok_button.has_help());
    println!("{}", ok_button.handle_help());

    println!("\n=== Button with its own topic ===");
    let orientation = HelpHandler::new("OrientationButton", Some(2))
        .with_successor(HelpHandler::new("PrintDialog", Some(1)));
    println!("{}", orientation.handle_help());

    println!("\n=== Lone handler without a topic ===");
    let lone = HelpHandler::new("OkButton", None);
    println!("{}", lone.handle_help());
}
