//! Shroud - keyed payload obfuscation for package builders and launchers
//!
//! This crate provides the scrambling layer a packaging tool applies to
//! payload bytes before embedding them in an output artifact, and the
//! inverse transform used when reading the artifact back. The transform is
//! an involution: applying it twice with the same key is the identity, so
//! a single function covers both directions.
//!
//! This is reversible obfuscation, not cryptography. There is no
//! authentication tag and no nonce management; a caller holding the wrong
//! key gets garbage bytes back, not an error.

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Correctness
    missing_debug_implementations,
    unreachable_pub,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,

    // All warnings must be fixed
    warnings,
)]
#![warn(
    // Documentation
    missing_docs,

    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,

    // Best practices
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::explicit_iter_loop,
)]

pub mod api;
pub mod crypto;
pub mod exceptions;
pub mod exit_codes;
pub mod logger;
pub mod paths;
pub mod selftest;
pub mod version;

// Re-export the main API surface
pub use api::{KeySource, derive_key, transform_file};
pub use crypto::{CryptoKey, transform};
pub use exceptions::ShroudError;
pub use selftest::run_self_test;
