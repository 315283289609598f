//! Pattern 12: Template Method
//! Example: Data Pipeline with Fixed Step Order
//!
//! Run with: cargo run --example p12_data_pipeline

use behavioral_patterns::template_method::{CsvProcessor, DataProcessor, JsonProcessor};

fn main() {
    println!("=== CSV input ===");
    let mut csv = CsvProcessor::new();
    for line in csv.process("name, city, country") {
        println!("{line}");
    }

    println!("\n=== JSON input (compression hook on) ===");
    let mut json = JsonProcessor::new();
    for line in json.process(r#"{"name":"Ada","city":"London"}"#) {
        println!("{line}");
    }

    println!("\n=== Invalid input stops early ===");
    let mut broken = JsonProcessor::new();
    for line in broken.process("{not json") {
        println!("{line}");
    }
}
