//! Error types for shroud
//!
//! The scrambling core itself is total and never fails; errors only arise
//! at the edges, when touching the filesystem, resolving key material, or
//! running the self-test harness.

use std::fmt;

/// Main error type for shroud operations
#[derive(Debug)]
pub enum ShroudError {
    /// No usable key material, or key material that failed to parse
    InvalidKey(String),

    /// The randomized round-trip self-test found a mismatch
    SelfTestFailed(String),

    /// IO error while reading or writing a payload
    IoError(std::io::Error),
}

impl fmt::Display for ShroudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShroudError::InvalidKey(msg) => write!(f, "Invalid key: {msg}"),
            ShroudError::SelfTestFailed(msg) => write!(f, "Self-test failed: {msg}"),
            ShroudError::IoError(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for ShroudError {}

impl From<std::io::Error> for ShroudError {
    fn from(err: std::io::Error) -> Self {
        ShroudError::IoError(err)
    }
}

/// Result type for shroud operations
pub type Result<T> = std::result::Result<T, ShroudError>;
