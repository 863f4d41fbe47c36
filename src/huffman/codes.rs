use std::collections::{BTreeMap, HashMap};

use crate::huffman::tree::{HuffmanNode, HuffmanTree};

/// Code assigned to the only symbol of a single-leaf tree. A lone root has no path,
/// and an empty code could never be found in a bit stream.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// Synchronized symbol → code and code → symbol mappings derived from one tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    encode: BTreeMap<u8, String>,
    decode: HashMap<String, u8>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks the tree depth-first in pre-order, appending `'0'` for every left turn and
    /// `'1'` for every right turn. The accumulated path at a leaf is that leaf's code.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = Self::new();
        let mut stack: Vec<(&HuffmanNode, String)> = vec![(tree.root(), String::new())];

        while let Some((node, path)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    let code = if path.is_empty() { SINGLE_SYMBOL_CODE.to_string() } else { path };
                    table.insert(*symbol, code);
                }
                HuffmanNode::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push('1');
                    let mut left_path = path;
                    left_path.push('0');
                    // right first so the left subtree is visited first
                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
            }
        }

        table
    }

    fn insert(&mut self, symbol: u8, code: String) {
        self.decode.insert(code.clone(), symbol);
        self.encode.insert(symbol, code);
    }

    pub fn clear(&mut self) {
        self.encode.clear();
        self.decode.clear();
    }

    pub fn code_for(&self, symbol: u8) -> Option<&str> {
        self.encode.get(&symbol).map(String::as_str)
    }

    pub fn symbol_for(&self, code: &str) -> Option<u8> {
        self.decode.get(code).copied()
    }

    /// Iterates `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.encode.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.encode.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encode.is_empty()
    }

    pub fn max_code_length(&self) -> usize {
        self.encode.values().map(String::len).max().unwrap_or(0)
    }

    /// Checks that no code is a prefix of another.
    ///
    /// After sorting, any code that prefixes another one sorts directly before some code
    /// it prefixes, so comparing neighbours is enough.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes = self.encode.values().map(String::as_str).collect::<Vec<_>>();
        codes.sort_unstable();
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::frequency::{FrequencyMap, build_frequency_map};

    fn table_for(data: &[u8]) -> CodeTable {
        let tree = HuffmanTree::from_frequencies(&build_frequency_map(data)).unwrap();
        CodeTable::from_tree(&tree)
    }

    #[test]
    fn abracadabra_codes() {
        let table = table_for(b"abracadabra");
        assert_eq!(table.len(), 5);
        assert_eq!(table.code_for(b'a'), Some("0"));
        assert_eq!(table.code_for(b'c'), Some("100"));
        assert_eq!(table.code_for(b'd'), Some("101"));
        assert_eq!(table.code_for(b'b'), Some("110"));
        assert_eq!(table.code_for(b'r'), Some("111"));
        assert_eq!(table.max_code_length(), 3);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn decode_side_mirrors_encode_side() {
        let table = table_for(b"mississippi river");
        for (symbol, code) in table.iter() {
            assert_eq!(table.symbol_for(code), Some(symbol));
        }
        assert_eq!(table.symbol_for("not a code"), None);
    }

    #[test]
    fn single_symbol_gets_one_bit() {
        let table = table_for(b"zzzzzz");
        assert_eq!(table.code_for(b'z'), Some(SINGLE_SYMBOL_CODE));
        assert_eq!(table.symbol_for(SINGLE_SYMBOL_CODE), Some(b'z'));
    }

    #[test]
    fn all_byte_values_are_prefix_free() {
        let data = (0..=255u8).flat_map(|b| std::iter::repeat_n(b, b as usize % 13 + 1)).collect::<Vec<_>>();
        let table = table_for(&data);
        assert_eq!(table.len(), 256);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn more_frequent_symbols_never_get_longer_codes() {
        let data = b"aaaaaaaaaaaaaaaabbbbbbbbccccddeffghhhhhhijjjjk";
        let freqs: FrequencyMap = build_frequency_map(data);
        let table = table_for(data);
        for (&x, &fx) in &freqs {
            for (&y, &fy) in &freqs {
                if fx > fy {
                    let (cx, cy) = (table.code_for(x).unwrap(), table.code_for(y).unwrap());
                    assert!(cx.len() <= cy.len(), "{:?} (freq {}) got {:?}, {:?} (freq {}) got {:?}", x as char, fx, cx, y as char, fy, cy);
                }
            }
        }
    }

    #[test]
    fn detects_prefix_violation() {
        let mut table = CodeTable::new();
        table.insert(b'a', "01".to_string());
        table.insert(b'b', "011".to_string());
        assert!(!table.is_prefix_free());
        table.clear();
        assert!(table.is_empty());
        assert!(table.is_prefix_free());
    }
}
