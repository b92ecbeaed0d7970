//! The scrambling core: key derivation and the keystream transform.
//!
//! Strictly layered: [`key`] is a leaf with no dependencies, [`stream`]
//! consumes a derived [`CryptoKey`] and nothing else.

pub mod key;
pub mod stream;

pub use key::CryptoKey;
pub use stream::transform;
