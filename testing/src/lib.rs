//! # Nexus Testing
//!
//! Testing utilities and helpers for the Nexus identity flows.
//!
//! The centerpiece is [`ReducerTest`], a fluent Given-When-Then harness for
//! exercising reducers without a running Store: state transitions are
//! asserted directly and effects are asserted as values.

pub mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};
