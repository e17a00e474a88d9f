//! Bloom filter with closed-form capacity planning, plus an analysis driver
//! comparing its footprint and false positive rate against an exact set.
//!
//! ```
//! use bloom_analyzer::BloomFilter;
//!
//! let params = BloomFilter::optimal_parameters(1000, 0.01).unwrap();
//! let mut bf = BloomFilter::new(params.num_bits, params.num_hashes).unwrap();
//! bf.insert("item0");
//! assert!(bf.might_contain("item0"));
//! ```

pub mod analysis;
pub mod bloom_filters;
pub mod error;

pub use bloom_filters::{optimal_parameters, BloomFilter, HashScheme, SizingParameters};
pub use error::{BloomError, Result};
