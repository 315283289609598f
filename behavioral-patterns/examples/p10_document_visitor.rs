//! Pattern 10: Visitor
//! Example: Document Rendering via Double Dispatch
//!
//! Run with: cargo run --example p10_document_visitor

use behavioral_patterns::visitor::{
    render_document, DocumentElement, HtmlElement, MarkdownElement, RenderVisitor, StatsVisitor,
};

fn main() {
    let elements: Vec<Box<dyn DocumentElement>> = vec![
        Box::new(MarkdownElement {
            text: "Introduction".to_string(),
        }),
        Box::new(HtmlElement {
            items: vec!["first point".to_string(), "second point".to_string()],
        }),
        Box::new(MarkdownElement {
            text: "Conclusion".to_string(),
        }),
    ];

    println!("=== Rendering ===");
    let mut renderer = RenderVisitor;
    for line in render_document(&elements, &mut renderer) {
        println!("{line}");
    }

    println!("\n=== Statistics (new operation, same elements) ===");
    let mut stats = StatsVisitor::default();
    render_document(&elements, &mut stats);
    println!("{}", stats.report());
}
