//! Pattern 5: Singleton
//! Example: Process-Wide Logger and Config
//!
//! Run with: cargo run --example p5_logger_singleton

use creational_patterns::singleton::{AppConfig, Logger, DEFAULT_LOG_PATH};

fn main() {
    println!("=== Singleton Logger Demo ===\n");

    let logger = Logger::global();
    logger.log("Application started");
    logger.log("Performing some operations");
    logger.log("Application finished");

    println!(
        "Logger sink: {}",
        if logger.is_active() {
            DEFAULT_LOG_PATH
        } else {
            "no-op (file unavailable)"
        }
    );

    // Identity: every access hands back the same instance.
    let again = Logger::global();
    println!(
        "Both logger references identical: {}",
        std::ptr::eq(logger, again)
    );

    println!("\n=== Singleton Config Demo ===");
    let config = AppConfig::global();
    println!("Initial connection: {}", config.connection_string());

    config.set_connection_string("database://replica:5433");
    println!("After update: {}", AppConfig::global().connection_string());
}
