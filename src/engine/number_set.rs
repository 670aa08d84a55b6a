//! A fixed-capacity set of card numbers packed into a `u32`.
//!
//! Bit `n` is set when number `n` is in the set, so only bits
//! `MIN_NUMBER..=MAX_NUMBER` are ever used. The type is `Copy`, `no_std`
//! friendly and never allocates.

use core::fmt;

use super::config::{MAX_NUMBER, MIN_NUMBER};

const UNIVERSE: u32 = ((1u32 << (MAX_NUMBER as u32 + 1)) - 1) & !((1u32 << MIN_NUMBER) - 1);

/// Errors returned by number set operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberSetError {
    /// Number lies outside `MIN_NUMBER..=MAX_NUMBER`.
    OutOfRange(u8),
}

impl fmt::Display for NumberSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberSetError::OutOfRange(n) => write!(
                f,
                "OutOfRange: {} is not in {}..={}",
                n, MIN_NUMBER, MAX_NUMBER
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NumberSetError {}

/// Set of numbers drawn from `MIN_NUMBER..=MAX_NUMBER`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberSet {
    bits: u32,
}

impl NumberSet {
    /// Empty set.
    #[inline]
    pub const fn new() -> Self {
        NumberSet { bits: 0 }
    }

    /// Set holding every number that can appear on a card.
    #[inline]
    pub const fn full() -> Self {
        NumberSet { bits: UNIVERSE }
    }

    /// Build a set from a slice, failing on the first out-of-range number.
    pub fn from_numbers(numbers: &[u8]) -> Result<Self, NumberSetError> {
        let mut set = Self::new();
        for &n in numbers {
            set.insert(n)?;
        }
        Ok(set)
    }

    #[inline]
    fn bit(n: u8) -> Result<u32, NumberSetError> {
        if (MIN_NUMBER..=MAX_NUMBER).contains(&n) {
            Ok(1u32 << n)
        } else {
            Err(NumberSetError::OutOfRange(n))
        }
    }

    /// Returns `true` if `n` is in the set. Out-of-range numbers never are.
    #[inline]
    pub fn contains(&self, n: u8) -> bool {
        Self::bit(n).map(|b| self.bits & b != 0).unwrap_or(false)
    }

    /// Adds `n`, returning `false` if it was already present.
    pub fn insert(&mut self, n: u8) -> Result<bool, NumberSetError> {
        let b = Self::bit(n)?;
        let fresh = self.bits & b == 0;
        self.bits |= b;
        Ok(fresh)
    }

    /// Clears all numbers.
    #[inline]
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns `true` when every card number is a member.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.bits == UNIVERSE
    }

    /// Card numbers that are not in the set.
    #[inline]
    pub fn complement(&self) -> Self {
        NumberSet {
            bits: UNIVERSE & !self.bits,
        }
    }

    /// The `index`-th smallest member.
    pub fn nth(&self, index: usize) -> Option<u8> {
        self.iter().nth(index)
    }

    /// Members in ascending order.
    #[inline]
    pub fn iter(&self) -> Iter {
        Iter { bits: self.bits }
    }
}

/// Ascending iterator over the members of a [`NumberSet`].
#[derive(Clone, Debug)]
pub struct Iter {
    bits: u32,
}

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }
        let n = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(n)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter {}

impl IntoIterator for NumberSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &NumberSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl fmt::Debug for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
