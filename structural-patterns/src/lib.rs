//! # Structural Design Patterns
//!
//! Demonstrations of the seven classic structural patterns. Each module
//! holds the participants; the matching driver under `examples/` exercises
//! them and prints the transcript.
//!
//! ## Pattern 1: Adapter
//! - A unified `play(format, file)` over incompatible player interfaces
//!
//! ## Pattern 2: Bridge
//! - Shape abstractions expressed via swappable renderer backends
//!
//! ## Pattern 3: Composite
//! - An owned tree of components drawn recursively, removal by identity
//!
//! ## Pattern 4: Decorator
//! - Stackable beverage wrappers composing description and cost
//!
//! ## Pattern 5: Facade
//! - One orchestrator issuing fixed call sequences to four subsystems
//!
//! ## Pattern 6: Flyweight
//! - Interned intrinsic particle state shared across many instances
//!
//! ## Pattern 7: Proxy
//! - Access control, lazy loading and caching in front of a real subject

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;
