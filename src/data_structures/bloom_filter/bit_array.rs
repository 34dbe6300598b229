// Copyright (c) 2025 Bloom Sweep Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Fixed-length bit storage backing the Bloom filter.

/// A fixed-length array of bits packed into `u64` words.
///
/// Bits start cleared and can only be set. Indices must already be reduced
/// into `0..len()`; an out-of-range index panics like slice indexing does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    words: Vec<u64>,
    len: usize,
}

impl BitArray {
    /// Create a bit array of `len` cleared bits.
    pub fn new(len: usize) -> Self {
        let word_count = (len + 63) / 64;
        Self {
            words: vec![0; word_count],
            len,
        }
    }

    /// Number of bits in the array.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true when the array holds no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Set the bit at `index`.
    ///
    /// # Returns
    ///
    /// `true` if the bit was previously clear.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize) -> bool {
        let (word_index, bit_mask) = self.locate(index);
        let word = &mut self.words[word_index];
        let was_clear = *word & bit_mask == 0;
        *word |= bit_mask;
        was_clear
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn test(&self, index: usize) -> bool {
        let (word_index, bit_mask) = self.locate(index);
        self.words[word_index] & bit_mask != 0
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    fn locate(&self, index: usize) -> (usize, u64) {
        assert!(
            index < self.len,
            "bit index {index} out of range for length {}",
            self.len
        );
        (index / 64, 1u64 << (index % 64))
    }
}
