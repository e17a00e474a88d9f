use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Multiplier of the per-byte mixing step. Must be odd.
const MIX_MULTIPLIER: u64 = 0x5bd1e995;

/// Seed of the second xxh3 hash used by double hashing.
const SECOND_HASH_SEED: u64 = 64;

/// Strategy used to derive the `k` bit positions of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashScheme {
    /// One seeded mixing function, seed = hash slot index.
    #[default]
    SeededMix,
    /// Two xxh3 hashes combined as `h1 + i * h2`.
    DoubleXxh3,
}

impl HashScheme {
    /// Bit position of `item` for hash slot `slot` in a vector of `m` bits.
    ///
    /// `m` must be positive.
    pub fn position(self, item: &[u8], slot: u64, m: u64) -> usize {
        match self {
            HashScheme::SeededMix => (seeded_mix(item, slot) % m) as usize,
            HashScheme::DoubleXxh3 => {
                let hash1 = xxh3_64_with_seed(item, 0) % m;
                let hash2 = xxh3_64_with_seed(item, SECOND_HASH_SEED) % m;
                (hash1.wrapping_add(slot.wrapping_mul(hash2)) % m) as usize
            }
        }
    }
}

/// Seeded byte-wise mixing: for every byte the accumulator is XORed with the
/// byte, multiplied by an odd constant and XORed with itself shifted right.
/// The result goes through the murmur3 64-bit finalizer.
pub fn seeded_mix(item: &[u8], seed: u64) -> u64 {
    let mut hash = seed;
    for &byte in item {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(MIX_MULTIPLIER);
        hash ^= hash >> 15;
    }
    fmix64(hash)
}

fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51afd7ed558ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ceb9fe1a85ec53);
    k ^ (k >> 33)
}
