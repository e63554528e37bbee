//! Fowler-Noll-Vo (FNV-1a) non-cryptographic hashing.
//!
//! FNV-1a folds each byte into the state before multiplying by the FNV
//! prime, which gives it better avalanche behavior than plain FNV-1 while
//! staying a tight arithmetic loop. It is fast to compute with a low
//! collision rate, and is not suitable for anything adversarial.
//!
//! Empty input hashes to the offset basis.

const INIT_32: u32 = 0x811c_9dc5;
const PRIME_32: u32 = 16_777_619;

const INIT_64: u64 = 0xcbf2_9ce4_8422_2325;
const PRIME_64: u64 = 1_099_511_628_211;

/// 32-bit FNV-1a hash of `bytes`.
#[must_use]
pub fn hash32(bytes: &[u8]) -> u32 {
    let mut hash = INIT_32;
    for &byte in bytes {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(PRIME_32);
    }
    hash
}

/// 64-bit FNV-1a hash of `bytes`.
#[must_use]
pub fn hash64(bytes: &[u8]) -> u64 {
    let mut hash = INIT_64;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(PRIME_64);
    }
    hash
}
