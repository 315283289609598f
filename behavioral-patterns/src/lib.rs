//! # Behavioural Design Patterns
//!
//! Demonstrations of twelve classic behavioural patterns. Each module
//! defines the participants; the matching driver under `examples/`
//! exercises them and prints the transcript.
//!
//! ## Pattern 1: Chain of Responsibility
//! - Payment accounts forwarding until one can pay
//! - Help topics with a "forward unconditionally" sentinel
//!
//! ## Pattern 2: Command
//! - Light commands with undo, a 7-slot remote and bounded history
//!
//! ## Pattern 3: Iterator
//! - External iteration over a bounded list, plus a hook-driven traverser
//!
//! ## Pattern 4: Mediator
//! - A chat room delivering each publish to every other colleague once
//!
//! ## Pattern 5: Memento
//! - Editor snapshots held opaquely by a caretaker stack
//!
//! ## Pattern 6: Model-View-Controller
//! - A user store, three view formats and a validating controller
//!
//! ## Pattern 7: Null Object
//! - A guest customer standing in for "not found"
//!
//! ## Pattern 8: Observer
//! - A weather station notifying displays and alerts in attach order
//!
//! ## Pattern 9: Strategy
//! - Swappable payment strategies; static and dynamic list formatters
//!
//! ## Pattern 10: Visitor
//! - Double dispatch over documents, and the tagged-union recast
//!
//! ## Pattern 11: State
//! - A traffic light whose behaviour lives in the current state object
//!
//! ## Pattern 12: Template Method
//! - A data pipeline with a fixed step order and a compression hook

pub mod chain;
pub mod command;
pub mod iterator;
pub mod mediator;
pub mod memento;
pub mod mvc;
pub mod null_object;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template_method;
pub mod visitor;
