//! High-level API consumed by the packaging pipeline.
//!
//! The pipeline hands this module a payload file and key material; the
//! scrambled (or restored) bytes land in the output file. Because the
//! transform is an involution there is one file operation for both
//! directions.

use std::path::Path;

use log::{debug, info};

use crate::crypto::{CryptoKey, transform};
use crate::exceptions::Result;

/// Where the scrambling key comes from.
#[derive(Debug, Clone)]
pub enum KeySource {
    /// A raw 64-bit seed, typically shared out-of-band.
    Seed(u64),

    /// A memorable passphrase, hashed into the key.
    Passphrase(String),
}

/// Resolve key material into the fixed-width key.
pub fn derive_key(source: &KeySource) -> CryptoKey {
    match source {
        KeySource::Seed(seed) => CryptoKey::from_integer(*seed),
        KeySource::Passphrase(phrase) => CryptoKey::from_string(phrase),
    }
}

/// Scramble or unscramble the contents of `input` into `output`.
///
/// Reads the whole payload, applies the keystream transform, and writes
/// the result. Returns the number of bytes processed. The same call
/// restores a previously scrambled file; with the wrong key it silently
/// writes garbage, since the format carries no authentication tag.
pub fn transform_file(input: &Path, output: &Path, key: &CryptoKey) -> Result<u64> {
    debug!("transforming {} -> {}", input.display(), output.display());

    let data = std::fs::read(input)?;
    let scrambled = transform(&data, key);
    std::fs::write(output, &scrambled)?;

    info!(
        "transformed {} bytes from {} to {}",
        data.len(),
        input.display(),
        output.display()
    );
    Ok(data.len() as u64)
}
