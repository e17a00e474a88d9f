use thiserror::Error;

/// Errors returned when sizing or constructing a Bloom filter.
///
/// Every variant is a deterministic rejection of caller input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BloomError {
    #[error("expected number of items must be positive")]
    ZeroExpectedItems,

    #[error("false positive rate must be in (0, 1), got {0}")]
    InvalidFalsePositiveRate(f64),

    #[error("computed filter size does not fit in addressable memory")]
    CapacityOverflow,

    #[error("bit array size must be positive")]
    ZeroBitCount,

    #[error("hash count must be positive")]
    ZeroHashCount,

    #[error("probe count must be positive")]
    ZeroProbeCount,
}

impl BloomError {
    /// All current variants describe an invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            BloomError::ZeroExpectedItems
                | BloomError::InvalidFalsePositiveRate(_)
                | BloomError::CapacityOverflow
                | BloomError::ZeroBitCount
                | BloomError::ZeroHashCount
                | BloomError::ZeroProbeCount
        )
    }
}

pub type Result<T> = std::result::Result<T, BloomError>;
