//! Pattern 5: Singleton
//! Example: Concurrent First Access Constructs Exactly Once
//!
//! Run with: cargo run --example p5_concurrent_init

use std::thread;

use creational_patterns::singleton::{AppConfig, Logger};

fn main() {
    println!("=== Concurrent Singleton Initialisation ===\n");

    let mut addresses = Vec::new();
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|id| {
                scope.spawn(move || {
                    let logger = Logger::global();
                    logger.log(&format!("worker {id} checked in"));
                    logger as *const Logger as usize
                })
            })
            .collect();
        for handle in handles {
            if let Ok(addr) = handle.join() {
                addresses.push(addr);
            }
        }
    });

    let first = addresses[0];
    let all_same = addresses.iter().all(|addr| *addr == first);
    println!("Workers observed {} logger accesses", addresses.len());
    println!("All references identical: {all_same}");

    println!("\nConfig identity across threads:");
    let main_config = AppConfig::global() as *const AppConfig as usize;
    let worker_config = thread::spawn(|| AppConfig::global() as *const AppConfig as usize)
        .join()
        .unwrap_or(0);
    println!(
        "Main and worker see the same config: {}",
        main_config == worker_config
    );
}
