//! Pattern 9: Strategy
//! Example: List Formatting, Static and Dynamic Dispatch
//!
//! Run with: cargo run --example p9_list_format

use behavioral_patterns::strategy::{DynTextProcessor, HtmlList, MarkdownList, TextProcessor};

fn main() {
    let items = ["apples", "oranges", "pears"];

    println!("=== Markdown (static dispatch) ===");
    let markdown = TextProcessor::new(MarkdownList);
    for line in markdown.format_list(&items) {
        println!("{line}");
    }

    println!("\n=== HTML (static dispatch) ===");
    let html = TextProcessor::new(HtmlList);
    for line in html.format_list(&items) {
        println!("{line}");
    }

    println!("\n=== Swapped at runtime ===");
    let mut processor = DynTextProcessor::new(Box::new(MarkdownList));
    for line in processor.format_list(&items) {
        println!("{line}");
    }
    processor.set_strategy(Box::new(HtmlList));
    for line in processor.format_list(&items) {
        println!("{line}");
    }
}
