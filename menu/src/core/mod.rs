//! Deterministic, pure logic for menu trees.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! records and return deterministic outputs suitable for tests.

pub mod builder;
pub mod invariants;
pub mod trail;
pub mod types;
