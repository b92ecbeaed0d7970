//! Standard exit codes for the shroud binary
//!
//! Kept aligned with the packaging toolchain that embeds this layer so
//! wrapper scripts can distinguish failure classes.

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Generic error (avoid using - be more specific)
pub const EXIT_ERROR: i32 = 1;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// Self-test found a round-trip mismatch
pub const EXIT_SELFTEST_ERROR: i32 = 102;

/// Invalid command-line arguments or key material
pub const EXIT_INVALID_ARGS: i32 = 105;

/// I/O error (file not found, permission denied, disk error)
pub const EXIT_IO_ERROR: i32 = 106;
