use std::fmt;

use bitvec::prelude::*;

use super::code::{Code, CodeTable};
use super::queue::MinQueue;
use super::trace::{NoTrace, Trace, TraceEvent};
use super::{BitAssignment, DomainError, Error, Result, Symbol, Weight, WeightSource};

#[derive(Clone, Copy)]
enum NodeKind {
    // position in `HuffmanTree::symbols`
    Leaf { symbol: usize },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy)]
struct Node {
    weight: Weight,
    index: usize,
    kind: NodeKind,
}

/// Huffman tree stored as an arena. Leaves occupy the first indices, in
/// ascending symbol order, followed by the inner nodes in merge order.
pub struct HuffmanTree<S> {
    symbols: Vec<S>,
    nodes: Vec<Node>,
    root_index: usize,
}

impl<S: Symbol> HuffmanTree<S> {
    pub fn from_weights<W>(weights: &W) -> Result<HuffmanTree<S>>
    where
        W: WeightSource<Symbol = S> + ?Sized,
    {
        Self::build(weights.weighted_symbols(), &mut NoTrace)
    }

    pub fn build<T: Trace<S>>(
        symbols_and_weights: Vec<(S, Weight)>,
        trace: &mut T,
    ) -> Result<HuffmanTree<S>> {
        let mut symbols_and_weights = symbols_and_weights;
        symbols_and_weights.sort_by(|a, b| a.0.cmp(&b.0));
        Self::validate(&symbols_and_weights)?;

        let leaf_count = symbols_and_weights.len();
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * leaf_count - 1);
        let mut symbols: Vec<S> = Vec::with_capacity(leaf_count);
        let mut queue = MinQueue::with_capacity(leaf_count);
        for (index, (symbol, weight)) in symbols_and_weights.into_iter().enumerate() {
            nodes.push(Node {
                weight,
                index,
                kind: NodeKind::Leaf { symbol: index },
            });
            symbols.push(symbol);
            queue.push(index, weight);
        }

        let root_index = loop {
            let (left, left_weight) = queue.pop_min().ok_or(Error::EmptyAlphabet)?;
            let Some((right, right_weight)) = queue.pop_min() else {
                break left;
            };
            let node = Node {
                weight: left_weight + right_weight,
                index: nodes.len(),
                kind: NodeKind::Inner { left, right },
            };
            trace.record(TraceEvent::Merged {
                left_weight,
                right_weight,
                weight: node.weight,
            });
            queue.push(node.index, node.weight);
            nodes.push(node);
        };

        Ok(HuffmanTree {
            symbols,
            nodes,
            root_index,
        })
    }

    // expects the pairs sorted by symbol
    fn validate(symbols_and_weights: &[(S, Weight)]) -> Result<()> {
        if symbols_and_weights.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        if let Some((symbol, weight)) = symbols_and_weights
            .iter()
            .find(|(_, weight)| !weight.is_finite() || *weight < 0.0)
        {
            return Err(DomainError::InvalidWeight {
                symbol: format!("{:?}", symbol),
                weight: *weight,
            }
            .into());
        }
        if let Some(pair) = symbols_and_weights
            .windows(2)
            .find(|pair| pair[0].0 == pair[1].0)
        {
            return Err(DomainError::DuplicateSymbol {
                symbol: format!("{:?}", pair[0].0),
            }
            .into());
        }
        Ok(())
    }

    pub fn leaf_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn total_weight(&self) -> Weight {
        self.nodes[self.root_index].weight
    }

    /// Walks the tree depth first, left before right, and hands every leaf
    /// the bits of its path. A tree made of a single leaf yields the code `0`.
    pub fn into_code_table<T: Trace<S>>(
        self,
        bit_assignment: BitAssignment,
        trace: &mut T,
    ) -> CodeTable<S> {
        let mut table = CodeTable::new();
        if let NodeKind::Leaf { symbol } = self.nodes[self.root_index].kind {
            self.assign(&mut table, symbol, bitvec![0], trace);
            return table;
        }

        let mut pending: Vec<(usize, BitVec)> = vec![(self.root_index, BitVec::new())];
        while let Some((index, path)) = pending.pop() {
            match self.nodes[index].kind {
                NodeKind::Leaf { symbol } => self.assign(&mut table, symbol, path, trace),
                NodeKind::Inner { left, right } => {
                    let left_is_leaf = matches!(self.nodes[left].kind, NodeKind::Leaf { .. });
                    let (left_bit, right_bit) =
                        bit_assignment.branch_bits(index == self.root_index, left_is_leaf);
                    let mut right_path = path.clone();
                    right_path.push(right_bit);
                    let mut left_path = path;
                    left_path.push(left_bit);
                    pending.push((right, right_path));
                    pending.push((left, left_path));
                }
            }
        }
        table
    }

    fn assign<T: Trace<S>>(
        &self,
        table: &mut CodeTable<S>,
        symbol: usize,
        path: BitVec,
        trace: &mut T,
    ) {
        let symbol = self.symbols[symbol].clone();
        let code = Code::from_bits(path);
        trace.record(TraceEvent::Assigned {
            symbol: &symbol,
            code: &code,
        });
        table.insert(symbol, code);
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

fn center_of(line: &str) -> usize {
    (line.chars().position(|c| c != ' ').unwrap_or(0) * 2 + line.trim().chars().count()) / 2
}

// Node & Tree visualization
impl Node {
    fn get_string<S: Symbol>(&self, tree: &HuffmanTree<S>) -> Vec<String> {
        match self.kind {
            NodeKind::Leaf { symbol } => {
                vec![format!("({:?}:{})", tree.symbols[symbol], self.weight)]
            }
            NodeKind::Inner { left, right } => {
                let left_box = tree.nodes[left].get_string(tree);
                let right_box = tree.nodes[right].get_string(tree);
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let mut result: Vec<String> = Vec::new();

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = center_of(&left_box[0]);
                let right_pos = center_of(&right_box[0]);
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                for i in 0..std::cmp::max(left_box.len(), right_box.len()) {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }
}

impl<S: Symbol> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strs = self.nodes[self.root_index].get_string(self);
        for s in strs.iter() {
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{HuffmanTree, NodeKind};
    use crate::huffman::{DomainError, Error, NoTrace, Weight};

    fn calculate_depth_for_each_node<S>(tree: &HuffmanTree<S>) -> Vec<usize> {
        let mut return_value = vec![usize::default(); tree.nodes.len()];
        let mut node_index_stack = vec![tree.root_index];
        while let Some(index) = node_index_stack.pop() {
            if let NodeKind::Inner { left, right } = tree.nodes[index].kind {
                return_value[left] = return_value[index] + 1;
                return_value[right] = return_value[index] + 1;
                node_index_stack.push(left);
                node_index_stack.push(right);
            }
        }
        return_value
    }

    fn leaf_weight_sum_under_node<S>(node_index: usize, tree: &HuffmanTree<S>) -> Weight {
        match tree.nodes[node_index].kind {
            NodeKind::Leaf { .. } => tree.nodes[node_index].weight,
            NodeKind::Inner { left, right } => {
                leaf_weight_sum_under_node(left, tree) + leaf_weight_sum_under_node(right, tree)
            }
        }
    }

    const SYMBOLS_AND_WEIGHTS_ODD_LEN: &[(u8, Weight); 7] = &[
        (1, 17.0),
        (2, 3.0),
        (3, 12.0),
        (4, 3.0),
        (5, 18.0),
        (6, 12.0),
        (7, 13.0),
    ];

    fn odd_len_tree() -> HuffmanTree<u8> {
        HuffmanTree::build(SYMBOLS_AND_WEIGHTS_ODD_LEN.to_vec(), &mut NoTrace).unwrap()
    }

    #[test]
    fn test_calculate_depth_for_each_symbol_odd_len() {
        let tree = odd_len_tree();
        let symbol_depths = calculate_depth_for_each_node(&tree);
        let expected_symbol_depths = [2, 4, 3, 4, 2, 3, 3];
        for (index, (depth, expected_depth)) in symbol_depths
            .into_iter()
            .zip(expected_symbol_depths)
            .enumerate()
        {
            assert_eq!(
                depth, expected_depth,
                "Depth at index {} does not match",
                index
            );
        }
    }

    #[test]
    fn test_leaves_are_ordered_by_symbol() {
        let mut reversed = SYMBOLS_AND_WEIGHTS_ODD_LEN.to_vec();
        reversed.reverse();
        let tree = HuffmanTree::build(reversed, &mut NoTrace).unwrap();
        assert_eq!(tree.symbols, [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.leaf_count(), 7);
    }

    #[test]
    fn test_each_node_has_correct_index() {
        let tree = odd_len_tree();
        assert_eq!(tree.nodes.len(), 13);
        for (index, node) in tree.nodes.iter().enumerate() {
            assert_eq!(index, node.index);
        }
        assert_eq!(tree.root_index, 12);
    }

    #[test]
    fn test_inner_weight_is_sum_of_leaf_weights_below() {
        let tree = odd_len_tree();
        for node in &tree.nodes {
            if let NodeKind::Inner { left, right } = node.kind {
                assert_eq!(
                    node.weight,
                    tree.nodes[left].weight + tree.nodes[right].weight
                );
                assert_eq!(node.weight, leaf_weight_sum_under_node(node.index, &tree));
            }
        }
        assert_eq!(tree.total_weight(), 78.0);
    }

    #[test]
    fn test_first_popped_node_becomes_left_child() {
        let tree = odd_len_tree();
        // symbols 2 and 4 share the smallest weight, 2 was queued first
        match tree.nodes[7].kind {
            NodeKind::Inner { left, right } => assert_eq!((left, right), (1, 3)),
            NodeKind::Leaf { .. } => panic!("First merged node is a leaf"),
        }
    }

    #[test]
    fn test_higher_weighted_symbols_are_not_deeper() {
        let tree = odd_len_tree();
        let depths = calculate_depth_for_each_node(&tree);
        for a in 0..tree.leaf_count() {
            for b in 0..tree.leaf_count() {
                if tree.nodes[a].weight > tree.nodes[b].weight {
                    assert!(
                        depths[a] <= depths[b],
                        "Symbol {} with weight {} is deeper than symbol {} with weight {}",
                        tree.symbols[a],
                        tree.nodes[a].weight,
                        tree.symbols[b],
                        tree.nodes[b].weight
                    );
                }
            }
        }
    }

    #[test]
    fn test_single_leaf_is_root() {
        let tree = HuffmanTree::build(vec![('a', 1.0)], &mut NoTrace).unwrap();
        assert_eq!(tree.root_index, 0);
        assert_eq!(tree.nodes.len(), 1);
    }

    #[test]
    fn test_empty_alphabet() {
        let result = HuffmanTree::<u8>::build(vec![], &mut NoTrace);
        assert!(matches!(result, Err(Error::EmptyAlphabet)));
    }

    #[test]
    fn test_invalid_weights_are_rejected_before_building() {
        for weight in [-0.5, Weight::NAN, Weight::INFINITY] {
            let result = HuffmanTree::build(vec![('a', 0.5), ('b', weight)], &mut NoTrace);
            match result {
                Err(Error::Domain(DomainError::InvalidWeight { symbol, .. })) => {
                    assert_eq!(symbol, "'b'")
                }
                _ => panic!("Weight {} not rejected", weight),
            }
        }
    }

    #[test]
    fn test_zero_weights_are_accepted() {
        let tree = HuffmanTree::build(vec![('a', 0.0), ('b', 0.0), ('c', 1.0)], &mut NoTrace);
        assert_eq!(tree.unwrap().total_weight(), 1.0);
    }

    #[test]
    fn test_duplicate_symbol() {
        let result = HuffmanTree::build(vec![('a', 0.5), ('b', 0.2), ('a', 0.3)], &mut NoTrace);
        assert!(matches!(
            result,
            Err(Error::Domain(DomainError::DuplicateSymbol { symbol })) if symbol == "'a'"
        ));
    }

    #[test]
    fn test_display_draws_every_leaf() {
        let tree = HuffmanTree::build(vec![('a', 0.5), ('b', 0.25), ('c', 0.25)], &mut NoTrace)
            .unwrap();
        let drawing = tree.to_string();
        for label in ["('a':0.5)", "('b':0.25)", "('c':0.25)"] {
            assert!(drawing.contains(label), "{} missing in\n{}", label, drawing);
        }
        assert!(drawing.starts_with(' '));
    }
}
