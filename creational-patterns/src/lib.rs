//! # Creational Design Patterns
//!
//! Small, self-contained demonstrations of the five classic creational
//! patterns. Each module defines the participants; the matching driver
//! under `examples/` wires them together and prints a transcript.
//!
//! ## Pattern 1: Factory and Factory Method
//! - Enum-dispatched shape creation with parameter validation
//! - A registry variant with runtime-registered creators
//!
//! ## Pattern 2: Abstract Factory
//! - Widget families (Windows, Mac, Linux) produced by one factory each
//!
//! ## Pattern 3: Builder
//! - Fluent mutable builder with ownership transfer on `build()`
//!
//! ## Pattern 4: Prototype
//! - Deep-cloning shapes and a name-keyed prototype registry
//!
//! ## Pattern 5: Singleton
//! - Process-wide logger and config with atomic first-touch initialisation

pub mod abstract_factory;
pub mod builder;
pub mod factory;
pub mod prototype;
pub mod singleton;
