//! Pattern 10: Visitor
//! Example: Tagged-Union Rendition with Exhaustive Match
//!
//! Run with: cargo run --example p10_document_variant

use behavioral_patterns::visitor::Document;

fn main() {
    let documents = vec![
        Document::Markdown {
            text: "Introduction".to_string(),
        },
        Document::Html {
            items: vec!["first point".to_string(), "second point".to_string()],
        },
    ];

    println!("=== Rendering ===");
    for document in &documents {
        for line in document.render() {
            println!("{line}");
        }
    }

    println!("\n=== Item counts ===");
    let total: usize = documents.iter().map(Document::item_count).sum();
    println!("total items: {total}");
}
