use std::collections::{btree_map, BTreeMap};
use std::fmt::{self, Write};

use bitvec::prelude::*;

use super::{DomainError, Result, Symbol};

/// A single code word, most significant (first transmitted) bit first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Code {
    bits: BitVec,
}

impl Code {
    pub(crate) fn from_bits(bits: BitVec) -> Self {
        Code { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &BitSlice {
        self.bits.as_bitslice()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(self.bits.as_bitslice())
    }

    /// Packs the code into an integer with a leading `1` in front of the
    /// code bits, e.g. `101` becomes `0b1101`. Codes of 64 bits or more do
    /// not fit.
    pub fn to_sentinel_pattern(&self) -> Option<u64> {
        if self.len() >= u64::BITS as usize {
            return None;
        }
        Some(
            self.bits
                .iter()
                .by_vals()
                .fold(1, |pattern, bit| (pattern << 1) | u64::from(bit)),
        )
    }

    /// Reverses [`Code::to_sentinel_pattern`]. Patterns below `0b10` do not
    /// hold a code.
    pub fn from_sentinel_pattern(pattern: u64) -> Result<Code> {
        let length = sentinel_pattern_length(pattern)?;
        let bits = (0..length)
            .rev()
            .map(|shift| (pattern >> shift) & 1 == 1)
            .collect();
        Ok(Code { bits })
    }
}

/// Number of code bits below the sentinel bit of `pattern`.
pub fn sentinel_pattern_length(pattern: u64) -> Result<usize> {
    if pattern < 0b10 {
        return Err(DomainError::InvalidSentinelPattern(pattern).into());
    }
    Ok((u64::BITS - 1 - pattern.leading_zeros()) as usize)
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter().by_vals() {
            f.write_char(if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Code per symbol, one entry for every symbol of the encoded alphabet.
#[derive(Clone, Debug)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, Code>,
}

impl<S: Symbol> CodeTable<S> {
    pub(crate) fn new() -> Self {
        CodeTable {
            codes: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, symbol: S, code: Code) {
        self.codes.insert(symbol, code);
    }

    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> btree_map::Iter<'_, S, Code> {
        self.codes.iter()
    }

    pub fn max_code_length(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    pub fn is_prefix_free(&self) -> bool {
        self.codes.iter().all(|(symbol, code)| {
            self.codes
                .iter()
                .all(|(other_symbol, other)| symbol == other_symbol || !code.is_prefix_of(other))
        })
    }
}

impl CodeTable<usize> {
    /// Codes of a position-indexed alphabet, in position order.
    pub fn into_dense(self) -> Vec<Code> {
        self.codes.into_values().collect()
    }
}

impl<'a, S> IntoIterator for &'a CodeTable<S> {
    type Item = (&'a S, &'a Code);
    type IntoIter = btree_map::Iter<'a, S, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
