//! Shared infrastructure for the hashkit crates
//!
//! This crate provides the pieces every other hashkit crate leans on:
//! - The [`RandomSource`] capability and the process-wide [`SecureRandom`]
//! - A deterministic [`SeededRandom`] for tests and reproducible runs
//! - Logging bootstrap for binaries and test suites

#![forbid(unsafe_code)]

pub mod logging;
pub mod random;

pub use logging::LoggingTransformer;
pub use random::{RandomSource, SecureRandom, SeededRandom};
