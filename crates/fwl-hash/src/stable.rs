/// Initial value of both accumulator lanes.
pub const HASH_SEED: i32 = 5381;

/// Factor applied to the odd-index lane before the lanes are combined.
pub const HASH_MULTIPLIER: i32 = 1566083941;

/// Hash raw bytes into the game's stable 32-bit seed value.
///
/// Even-index bytes feed the first lane and odd-index bytes the second. A NUL
/// byte ends the input, so `"ab\0cd"` hashes like `"ab"`.
pub fn stable_hash_bytes(data: &[u8]) -> i32 {
    let mut hash1 = HASH_SEED;
    let mut hash2 = HASH_SEED;

    let mut i = 0;
    while i < data.len() && data[i] != 0 {
        hash1 = (hash1 << 5).wrapping_add(hash1) ^ i32::from(data[i]);
        if i == data.len() - 1 || data[i + 1] == 0 {
            break;
        }
        hash2 = (hash2 << 5).wrapping_add(hash2) ^ i32::from(data[i + 1]);
        i += 2;
    }

    hash1.wrapping_add(hash2.wrapping_mul(HASH_MULTIPLIER))
}

/// Hash a seed string. See [`stable_hash_bytes`].
pub fn stable_hash_code(s: &str) -> i32 {
    stable_hash_bytes(s.as_bytes())
}

/// Check that a stored seed value is the hash of its seed text.
pub fn verify_seed(seed: &str, seed_value: i32) -> bool {
    stable_hash_code(seed) == seed_value
}
