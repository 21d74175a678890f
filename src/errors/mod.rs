//! Error types and error handling for the parser.
//!
//! This module defines the syntax errors the parser collects. It includes:
//!
//! - Error variants for each kind of syntax problem
//! - Human-readable messages through `Display`
//! - Short suggestions for tooling that reports errors

pub mod errors;
