//! Adapters turning the accepted weight shapes into `(symbol, weight)` pairs.
//!
//! Dense sequences use the 0-based position as symbol, maps use their keys,
//! pair slices name symbols explicitly.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::{Symbol, Weight};

pub trait WeightSource {
    type Symbol: Symbol;

    /// All `(symbol, weight)` pairs of the source. The tree builder orders
    /// them by symbol, so the order returned here does not matter.
    fn weighted_symbols(&self) -> Vec<(Self::Symbol, Weight)>;
}

impl WeightSource for [Weight] {
    type Symbol = usize;

    fn weighted_symbols(&self) -> Vec<(usize, Weight)> {
        self.iter().copied().enumerate().collect()
    }
}

impl<const N: usize> WeightSource for [Weight; N] {
    type Symbol = usize;

    fn weighted_symbols(&self) -> Vec<(usize, Weight)> {
        self.as_slice().weighted_symbols()
    }
}

impl WeightSource for Vec<Weight> {
    type Symbol = usize;

    fn weighted_symbols(&self) -> Vec<(usize, Weight)> {
        self.as_slice().weighted_symbols()
    }
}

impl<S: Symbol> WeightSource for BTreeMap<S, Weight> {
    type Symbol = S;

    fn weighted_symbols(&self) -> Vec<(S, Weight)> {
        self.iter()
            .map(|(symbol, &weight)| (symbol.clone(), weight))
            .collect()
    }
}

impl<S: Symbol, H: BuildHasher> WeightSource for HashMap<S, Weight, H> {
    type Symbol = S;

    fn weighted_symbols(&self) -> Vec<(S, Weight)> {
        let mut symbols_and_weights: Vec<(S, Weight)> = self
            .iter()
            .map(|(symbol, &weight)| (symbol.clone(), weight))
            .collect();
        symbols_and_weights.sort_by(|a, b| a.0.cmp(&b.0));
        symbols_and_weights
    }
}

/// Explicit pairs; a symbol listed twice is rejected when the tree is built.
impl<S: Symbol> WeightSource for [(S, Weight)] {
    type Symbol = S;

    fn weighted_symbols(&self) -> Vec<(S, Weight)> {
        self.to_vec()
    }
}

impl<S: Symbol> WeightSource for Vec<(S, Weight)> {
    type Symbol = S;

    fn weighted_symbols(&self) -> Vec<(S, Weight)> {
        self.as_slice().weighted_symbols()
    }
}
