//! Non-cryptographic random helpers.
//!
//! Both functions draw from `rand`'s thread-local generator, which is seeded once
//! per thread from the OS. Do not use them for tokens or secrets.

use crate::error::{UtilsError, UtilsResult};
use rand::Rng;

/// The 52 ASCII letters used by [`rand_string_runes`]
pub const LETTERS: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Random string of exactly `n` ASCII letters.
pub fn rand_string_runes(n: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| char::from(LETTERS[rng.gen_range(0..LETTERS.len())]))
        .collect()
}

/// Random integer in `[min, max)`.
pub fn rand_int(min: i64, max: i64) -> UtilsResult<i64> {
    if min >= max {
        return Err(UtilsError::InvalidRange { min, max });
    }
    Ok(rand::thread_rng().gen_range(min..max))
}
