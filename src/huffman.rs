//! Optimal prefix-free codes built with Huffman's algorithm.
//!
//! Every weight source goes through the same pipeline: leaves are pushed into
//! a min-weight queue in ascending symbol order, the two lightest pending
//! nodes are merged until a single root remains, and a depth-first walk hands
//! each leaf the path that leads to it.
//!
//! Conventions of the produced codes:
//! * on equal weights the node queued first is popped first,
//! * the first popped node of a merge becomes the left child,
//! * descending left appends a `1`, descending right appends a `0`,
//! * a single-symbol alphabet gets the code `0`.

use std::fmt::Debug;

pub mod alphabet;
pub mod code;
pub mod cost;
mod error;
mod queue;
pub mod trace;
pub mod tree;

pub use alphabet::WeightSource;
pub use code::{Code, CodeTable};
pub use cost::{weighted_path_length, weighted_path_length_of_patterns};
pub use error::{DomainError, Error};
pub use trace::{LoggingTrace, NoTrace, Trace, TraceEvent};
pub use tree::HuffmanTree;

pub type Weight = f64;

pub type Result<T> = std::result::Result<T, Error>;

/// Anything usable as an alphabet entry.
pub trait Symbol: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Symbol for T {}

/// Which bit each branch of an inner node receives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BitAssignment {
    /// Left branch `1`, right branch `0` at every inner node.
    #[default]
    LeftOne,
    /// Like `LeftOne`, except that a leaf hanging directly off the left of
    /// the root takes `0` and its sibling subtree `1`. Whenever one child of
    /// the root is a leaf, the only code starting with a zero is then the
    /// one-bit code `0`; if both children are inner nodes, every code below
    /// the right child still starts with `0`.
    AvoidLeadingZero,
}

impl BitAssignment {
    /// Bits for the (left, right) branches of an inner node.
    fn branch_bits(self, at_root: bool, left_is_leaf: bool) -> (bool, bool) {
        match self {
            Self::AvoidLeadingZero if at_root && left_is_leaf => (false, true),
            _ => (true, false),
        }
    }
}

/// Result of a single encoding: the code per symbol and the expected code
/// length in bits per symbol.
#[derive(Clone, Debug)]
pub struct Encoding<S> {
    pub codes: CodeTable<S>,
    pub expected_length: Weight,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HuffmanEncoder {
    bit_assignment: BitAssignment,
}

impl HuffmanEncoder {
    pub fn new(bit_assignment: BitAssignment) -> Self {
        HuffmanEncoder { bit_assignment }
    }

    pub fn bit_assignment(&self) -> BitAssignment {
        self.bit_assignment
    }

    pub fn encode<W>(&self, weights: &W) -> Result<Encoding<W::Symbol>>
    where
        W: WeightSource + ?Sized,
    {
        self.encode_traced(weights, &mut NoTrace)
    }

    /// Same as [`HuffmanEncoder::encode`], reporting every merge and every
    /// assigned code to `trace`.
    pub fn encode_traced<W, T>(&self, weights: &W, trace: &mut T) -> Result<Encoding<W::Symbol>>
    where
        W: WeightSource + ?Sized,
        T: Trace<W::Symbol>,
    {
        let tree = HuffmanTree::build(weights.weighted_symbols(), trace)?;
        let codes = tree.into_code_table(self.bit_assignment, trace);
        let expected_length = weighted_path_length(weights, &codes)?;
        Ok(Encoding {
            codes,
            expected_length,
        })
    }
}

/// Encodes `weights` with the default bit assignment.
///
/// ```
/// use huffman_coding::huffman::encode;
///
/// let encoding = encode(&[0.1, 0.2, 0.1, 0.6]).unwrap();
/// assert_eq!(encoding.codes.get(&3).unwrap().to_string(), "0");
/// assert!((encoding.expected_length - 1.6).abs() < 1e-9);
/// ```
pub fn encode<W>(weights: &W) -> Result<Encoding<W::Symbol>>
where
    W: WeightSource + ?Sized,
{
    HuffmanEncoder::default().encode(weights)
}
