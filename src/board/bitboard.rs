//! Bitboard occupancy sets indexed by cell

use super::TOTAL_CELLS;

const WORDS: usize = (TOTAL_CELLS + 63) / 64;

/// One bit per cell: 6 x u64 cover the 361 cells (384 bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

impl Bitboard {
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    #[inline]
    pub fn set(&mut self, index: usize) {
        self.bits[index / 64] |= 1u64 << (index % 64);
    }

    #[inline]
    pub fn clear(&mut self, index: usize) {
        self.bits[index / 64] &= !(1u64 << (index % 64));
    }

    #[inline]
    pub fn get(&self, index: usize) -> bool {
        (self.bits[index / 64] >> (index % 64)) & 1 == 1
    }

    /// Popcount
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Cells set in either board
    #[inline]
    pub fn union(&self, other: &Bitboard) -> Bitboard {
        let mut bits = self.bits;
        for (word, theirs) in bits.iter_mut().zip(other.bits.iter()) {
            *word |= theirs;
        }
        Bitboard { bits }
    }

    /// Set cell indices in ascending order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word_idx: 0,
        }
    }
}

pub struct BitboardIter {
    bits: [u64; WORDS],
    word_idx: usize,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < WORDS {
            let word = &mut self.bits[self.word_idx];
            if *word == 0 {
                self.word_idx += 1;
                continue;
            }
            let idx = self.word_idx * 64 + word.trailing_zeros() as usize;
            *word &= *word - 1;
            // Padding bits past the last cell are never set
            return (idx < TOTAL_CELLS).then_some(idx);
        }
        None
    }
}
