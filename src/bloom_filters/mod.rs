mod classical_bloom_filter;
mod hashing;
mod planner;

pub use self::classical_bloom_filter::BloomFilter;
pub use self::hashing::{seeded_mix, HashScheme};
pub use self::planner::{optimal_parameters, SizingParameters};
