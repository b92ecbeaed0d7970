//! The keystream transform: XOR each payload byte with an evolving
//! pseudo-random state seeded from the key.
//!
//! The generator constants below are an interoperability contract. A
//! builder and a launcher built from different revisions must produce
//! bit-identical keystreams or every embedded payload becomes unreadable,
//! so the constants and the 63-bit state mask must never change.

use super::key::CryptoKey;

/// Keystream generator multiplier.
const LCG_MULTIPLIER: u64 = 6364136223846793005;

/// Keystream generator increment.
const LCG_INCREMENT: u64 = 1;

/// The state is truncated to the low 63 bits after every update.
const LCG_STATE_MASK: u64 = (1 << 63) - 1;

/// One linear congruential step: `(a * state + c) mod 2^63 - 1`, written
/// as wrapping arithmetic plus an explicit mask so the modulus never
/// depends on integer overflow behavior.
fn next_state(state: u64) -> u64 {
    state
        .wrapping_mul(LCG_MULTIPLIER)
        .wrapping_add(LCG_INCREMENT)
        & LCG_STATE_MASK
}

/// Scramble or unscramble `data` with `key`.
///
/// Output byte `i` is `data[i] ^ (state_i & 0xFF)` where `state_0` is the
/// raw key value and each subsequent state is one generator step. The
/// keystream depends only on the key and the position, never on the data,
/// so the transform is its own inverse: applying it twice with the same
/// key returns the original bytes.
///
/// Total over its inputs. Empty input yields empty output; there are no
/// failure conditions.
pub fn transform(data: &[u8], key: &CryptoKey) -> Vec<u8> {
    let mut state = key.value();
    let mut out = Vec::with_capacity(data.len());

    for &byte in data {
        out.push(byte ^ (state & 0xFF) as u8);
        state = next_state(state);
    }

    // A length mismatch here is an implementation bug, not a runtime
    // condition.
    debug_assert_eq!(out.len(), data.len());
    out
}

#[cfg(test)]
mod tests {
    use super::{CryptoKey, next_state, transform};

    #[test]
    fn generator_sequence_is_bit_exact() {
        // Interop lock: these literals pin the constants and the 63-bit
        // mask. Any deviation breaks every artifact already written.
        let s1 = next_state(42);
        let s2 = next_state(s1);
        let s3 = next_state(s2);
        assert_eq!(s1, 9039304369631583587);
        assert_eq!(s2, 8647191391818483560);
        assert_eq!(s3, 1110940308255663433);
    }

    #[test]
    fn state_stays_within_63_bits() {
        let mut state = u64::MAX >> 1;
        for _ in 0..1000 {
            state = next_state(state);
            assert!(state < (1 << 63));
        }
    }

    #[test]
    fn first_byte_uses_raw_key() {
        // 'A' ^ (42 & 0xFF) == 0x6b
        let out = transform(b"A", &CryptoKey::from_integer(42));
        assert_eq!(out, vec![0x6b]);
    }

    #[test]
    fn round_trip_restores_input() {
        let key = CryptoKey::from_integer(0xDEADBEEF);
        let data = b"the quick brown fox jumps over the lazy dog";
        let scrambled = transform(data, &key);
        assert_ne!(scrambled.as_slice(), data.as_slice());
        assert_eq!(transform(&scrambled, &key), data);
    }

    #[test]
    fn empty_input_round_trips() {
        let key = CryptoKey::from_integer(7);
        let out = transform(&[], &key);
        assert!(out.is_empty());
        assert!(transform(&out, &key).is_empty());
    }

    #[test]
    fn output_length_matches_input_length() {
        let key = CryptoKey::from_string("len-check");
        for len in [0usize, 1, 2, 255, 256, 4096] {
            let data = vec![0xA5u8; len];
            assert_eq!(transform(&data, &key).len(), len);
        }
    }

    #[test]
    fn transform_is_deterministic() {
        let key = CryptoKey::from_integer(99);
        let data = b"same in, same out";
        assert_eq!(transform(data, &key), transform(data, &key));
    }

    #[test]
    fn distinct_keys_give_distinct_ciphertexts() {
        let data = b"key sensitivity probe, long enough to rule out luck";
        let a = transform(data, &CryptoKey::from_integer(1));
        let b = transform(data, &CryptoKey::from_integer(2));
        assert_ne!(a, b);
    }

    #[test]
    fn zero_key_still_round_trips() {
        let key = CryptoKey::from_string("");
        let data = b"weak key, still reversible";
        assert_eq!(transform(&transform(data, &key), &key), data);
    }

    #[test]
    fn golden_passphrase_scenario() {
        let key = CryptoKey::from_string("password");
        let scrambled = transform(b"hello world", &key);
        assert_eq!(hex::encode(&scrambled), "705c6a63cbf50564825dfa");

        assert_eq!(transform(&scrambled, &key), b"hello world");

        // The wrong passphrase silently yields garbage, never an error.
        let wrong = transform(&scrambled, &CryptoKey::from_string("wrong"));
        assert_ne!(wrong.as_slice(), b"hello world".as_slice());
        assert_eq!(wrong.len(), 11);
    }
}
