use core::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::huffman::frequency::FrequencyMap;

/// A node of a Huffman tree. Every internal node exclusively owns its two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: u8,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub const fn weight(&self) -> usize {
        match self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub const fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// The symbol carried by a leaf, `None` for internal nodes.
    pub const fn symbol(&self) -> Option<u8> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(*symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    /// Follows one bit down the tree: `false` goes left, `true` goes right.
    /// Leaves have no children.
    pub fn child(&self, bit: bool) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { left, right, .. } => Some(if bit { right } else { left }),
        }
    }

    fn merge(left: Self, right: Self) -> Self {
        HuffmanNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Priority queue entry. Ordered so that [`BinaryHeap`] pops the lightest node first,
/// and among equal weights the one that was queued first.
struct QueueEntry {
    weight: usize,
    seq: usize,
    node: HuffmanNode,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.weight.cmp(&self.weight).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// An immutable Huffman tree built greedily from a frequency table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two lightest nodes.
    ///
    /// Leaves are queued in ascending symbol order and every merged node gets the next
    /// sequence number, so ties resolve the same way on every run. The first node popped
    /// becomes the left child.
    ///
    /// Returns `None` when no symbol has a non-zero count. A table with a single symbol
    /// produces a tree whose root is that symbol's leaf.
    pub fn from_frequencies(frequencies: &FrequencyMap) -> Option<Self> {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut seq = 0usize;

        for (&symbol, &weight) in frequencies.iter().filter(|&(_, &count)| count > 0) {
            heap.push(QueueEntry {
                weight,
                seq,
                node: HuffmanNode::Leaf { symbol, weight },
            });
            seq += 1;
        }

        loop {
            let first = heap.pop()?;
            let Some(second) = heap.pop() else {
                return Some(HuffmanTree { root: first.node });
            };

            let node = HuffmanNode::merge(first.node, second.node);
            heap.push(QueueEntry {
                weight: node.weight(),
                seq,
                node,
            });
            seq += 1;
        }
    }

    pub const fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Total weight of the tree, i.e. the length of the source buffer.
    pub const fn weight(&self) -> usize {
        self.root.weight()
    }

    /// Whether the tree consists of a single leaf (only one distinct symbol was counted).
    pub const fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                HuffmanNode::Leaf { .. } => count += 1,
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::frequency::build_frequency_map;

    fn assert_weights_consistent(node: &HuffmanNode) {
        if let HuffmanNode::Internal { weight, left, right } = node {
            assert_eq!(*weight, left.weight() + right.weight(), "internal weight must equal the sum of its children");
            assert_weights_consistent(left);
            assert_weights_consistent(right);
        }
    }

    #[test]
    fn empty_table_builds_no_tree() {
        assert!(HuffmanTree::from_frequencies(&FrequencyMap::new()).is_none());
    }

    #[test]
    fn zero_counts_are_ignored() {
        let freqs: FrequencyMap = [(b'x', 0), (b'y', 0)].into_iter().collect();
        assert!(HuffmanTree::from_frequencies(&freqs).is_none());
    }

    #[test]
    fn single_symbol_tree_is_a_leaf() {
        let tree = HuffmanTree::from_frequencies(&build_frequency_map(b"aaaa")).unwrap();
        assert!(tree.is_single_leaf());
        assert_eq!(tree.root(), &HuffmanNode::Leaf { symbol: b'a', weight: 4 });
    }

    #[test]
    fn abracadabra_tree_shape() {
        let tree = HuffmanTree::from_frequencies(&build_frequency_map(b"abracadabra")).unwrap();
        assert_eq!(tree.weight(), 11);
        assert_eq!(tree.leaf_count(), 5);
        assert_weights_consistent(tree.root());

        // c(1) and d(1) merge first, then b(2) and r(2), then the two pairs, then `a` joins at the top.
        let root = tree.root();
        assert_eq!(root.child(false).and_then(HuffmanNode::symbol), Some(b'a'));
        let rest = root.child(true).unwrap();
        assert_eq!(rest.weight(), 6);
    }

    #[test]
    fn construction_is_deterministic() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let freqs = build_frequency_map(data);
        let first = HuffmanTree::from_frequencies(&freqs).unwrap();
        let second = HuffmanTree::from_frequencies(&freqs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn leaves_are_not_traversable() {
        let leaf = HuffmanNode::Leaf { symbol: 7, weight: 1 };
        assert!(leaf.child(false).is_none());
        assert!(leaf.child(true).is_none());
        assert_eq!(leaf.symbol(), Some(7));
    }
}
