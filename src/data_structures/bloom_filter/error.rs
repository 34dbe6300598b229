// Copyright (c) 2025 Bloom Sweep Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Bloom filter.

/// Errors that can occur while constructing a Bloom filter.
///
/// Only construction can fail. Once a filter exists, `add`, `exists` and
/// `info` are infallible.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum BloomFilterError {
    /// The requested bit array length is not positive
    #[error("Invalid filter size {0}: size must be greater than 0")]
    InvalidSize(usize),

    /// The hash bank has no hash functions
    #[error("Hash bank must contain at least one hash function")]
    EmptyHashBank,

    /// Two hash functions share a seed, so they would not be independent
    #[error("Duplicate hash seed {0}: seeds must be distinct")]
    DuplicateSeed(u64),

    /// The seed cannot be used by the 32-bit seeded hash function
    #[error("Unsupported hash seed {0}: seeds must fit in 32 bits")]
    UnsupportedSeed(u64),
}

/// Result type for Bloom filter operations
pub type Result<T> = std::result::Result<T, BloomFilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BloomFilterError::InvalidSize(0);
        assert_eq!(
            err.to_string(),
            "Invalid filter size 0: size must be greater than 0"
        );

        let err = BloomFilterError::UnsupportedSeed(1 << 40);
        assert_eq!(
            err.to_string(),
            "Unsupported hash seed 1099511627776: seeds must fit in 32 bits"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = BloomFilterError::DuplicateSeed(31);
        let err2 = BloomFilterError::DuplicateSeed(31);
        let err3 = BloomFilterError::EmptyHashBank;

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
