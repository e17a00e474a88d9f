use bit_vec::BitVec;
use tracing::trace;

use crate::bloom_filters::planner::{self, SizingParameters};
use crate::bloom_filters::HashScheme;
use crate::error::{BloomError, Result};

/// Insert-only Bloom filter over a packed bit array.
///
/// There is no removal. `might_contain` never returns `false` for an item
/// that was inserted into the same filter.
///
/// `insert` takes `&mut self`, so sharing a filter between threads that
/// insert needs external synchronization (e.g. a `Mutex<BloomFilter>`).
/// Concurrent `might_contain` calls through `&BloomFilter` are fine.
#[derive(Debug, Clone, PartialEq)]
pub struct BloomFilter {
    /// number of bits in a Bloom filter
    m: u64,
    /// number of hash functions
    k: u64,

    scheme: HashScheme,
    storage: BitVec,
}

impl BloomFilter {
    /// m -- number of bits, k -- number of hash functions
    pub fn new(m: usize, k: usize) -> Result<Self> {
        Self::with_scheme(m, k, HashScheme::default())
    }

    pub fn with_scheme(m: usize, k: usize, scheme: HashScheme) -> Result<Self> {
        if m == 0 {
            return Err(BloomError::ZeroBitCount);
        }
        if k == 0 {
            return Err(BloomError::ZeroHashCount);
        }
        trace!(m, k, ?scheme, "allocating bloom filter");
        Ok(Self {
            m: m as u64,
            k: k as u64,
            scheme,
            storage: BitVec::from_elem(m, false),
        })
    }

    /// n -- number of elements to insert
    /// p -- the false positive rate
    pub fn from_workload(n: usize, p: f64) -> Result<Self> {
        let params = Self::optimal_parameters(n, p)?;
        Self::new(params.num_bits, params.num_hashes)
    }

    /// See [`planner::optimal_parameters`].
    pub fn optimal_parameters(n: usize, p: f64) -> Result<SizingParameters> {
        planner::optimal_parameters(n, p)
    }

    pub fn insert<T: AsRef<[u8]> + ?Sized>(&mut self, item: &T) {
        let item = item.as_ref();
        for i in 0..self.k {
            let idx = self.scheme.position(item, i, self.m);
            self.storage.set(idx, true);
        }
    }

    /// `false` means definitely absent, `true` means possibly present.
    pub fn might_contain<T: AsRef<[u8]> + ?Sized>(&self, item: &T) -> bool {
        let item = item.as_ref();
        for i in 0..self.k {
            let idx = self.scheme.position(item, i, self.m);
            if self.storage.get(idx) == Some(false) {
                return false;
            }
        }
        true
    }

    /// Size of the packed bit array in bytes, rounded up.
    pub fn memory_usage_bytes(&self) -> usize {
        self.storage.len().div_ceil(8)
    }

    pub fn bit_array_size(&self) -> usize {
        self.storage.len()
    }

    pub fn hash_count(&self) -> usize {
        self.k as usize
    }

    pub fn scheme(&self) -> HashScheme {
        self.scheme
    }

    pub fn count_ones(&self) -> usize {
        self.storage.iter().filter(|bit| *bit).count()
    }

    pub fn fill_ratio(&self) -> f64 {
        self.count_ones() as f64 / self.m as f64
    }

    /// Probability that a fresh item hits k set bits at the current fill.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.fill_ratio().powi(self.k as i32)
    }
}
