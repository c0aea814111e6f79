//! Seeded string hash
//!
//! Maps a seed string to a stable non-negative integer. Not a security
//! primitive; only stability across calls and builds matters.

// == Seed Hash ==
/// Polynomial (×31) hash over the UTF-16 code units of `seed`, computed
/// with wrapping 32-bit signed arithmetic, then made non-negative.
///
/// `unsigned_abs` keeps `i32::MIN` representable (2^31).
pub fn seed_hash(seed: &str) -> u32 {
    seed.encode_utf16()
        .fold(0i32, |hash, unit| {
            (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

// == Bounded Range ==
/// Value in `[min, max]` (inclusive) derived from `seed`.
///
/// Bounds given in the wrong order are swapped.
pub fn bounded(seed: &str, min: u32, max: u32) -> u32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let width = u64::from(hi) - u64::from(lo) + 1;
    (u64::from(lo) + u64::from(seed_hash(seed)) % width) as u32
}

// == Table Pick ==
/// Picks an element of `table` by seed. `table` must not be empty.
pub(crate) fn pick<'a>(table: &[&'a str], seed: &str) -> &'a str {
    table[seed_hash(seed) as usize % table.len()]
}
