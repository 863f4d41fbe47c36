//! The Huffman codec.
//!
//! A [`HuffmanCodec`] holds one session at a time: [`encode_as_string`](HuffmanCodec::encode_as_string)
//! rebuilds the frequency table, tree and code tables from its input, and every following
//! [`decode`](HuffmanCodec::decode) walks that tree until the next encode replaces it.
//! Decoding a bit-string produced under a different session gives meaningless output.

use serde::Serialize;
use thiserror::Error;

use crate::huffman::{
    codes::CodeTable,
    frequency::{FrequencyMap, build_frequency_map},
    tree::HuffmanTree,
};

if_tracing! {
    use tracing::{Level, debug, info, span};
}

pub mod bits;
pub mod codes;
pub mod frequency;
pub mod tree;

/// Reasons [`HuffmanCodec::decode_strict`] rejects a bit-string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("no code table is available: nothing has been encoded in this session")]
    NoTree,

    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },

    #[error("bit-string ends inside a code: {dangling} trailing bit(s) starting at position {position}")]
    TruncatedCode { position: usize, dangling: usize },
}

/// Size diagnostics of the current session. Used for reporting only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Length of the encoded source, in bytes.
    pub source_len: usize,
    /// Length of the encoded bit-string.
    pub bit_length: usize,
    /// Bytes needed to pack the bit-string.
    pub packed_len: usize,
    pub distinct_symbols: usize,
    pub max_code_length: usize,
}

impl SessionStats {
    /// Packed size over source size. Zero for an empty source.
    pub fn ratio(&self) -> f64 {
        if self.source_len == 0 {
            return 0.0;
        }
        self.packed_len as f64 / self.source_len as f64
    }

    /// Average number of bits spent per source symbol.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.source_len == 0 {
            return 0.0;
        }
        self.bit_length as f64 / self.source_len as f64
    }
}

#[derive(Debug, Clone, Default)]
pub struct HuffmanCodec {
    frequencies: FrequencyMap,
    tree: Option<HuffmanTree>,
    table: CodeTable,
    source_len: usize,
    bit_length: usize,
}

impl HuffmanCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session for `data` and returns its bit-string.
    ///
    /// Any previous tree and code tables are discarded. Empty input leaves the codec
    /// without a tree and returns an empty string.
    pub fn encode_as_string(&mut self, data: &[u8]) -> String {
        if_tracing! {
            let span = span!(Level::INFO, "huffman_encode", input_len = data.len());
            let _enter = span.enter();
            debug!(target = "huffman", input_len = data.len(), "huffman encode start");
        }

        self.table.clear();
        self.frequencies = build_frequency_map(data);
        self.tree = HuffmanTree::from_frequencies(&self.frequencies);
        if let Some(tree) = &self.tree {
            self.table = CodeTable::from_tree(tree);
        }
        self.source_len = data.len();

        let bit_length = self
            .frequencies
            .iter()
            .filter_map(|(&symbol, &count)| self.table.code_for(symbol).map(|code| code.len() * count))
            .sum();

        let mut bits = String::with_capacity(bit_length);
        for &symbol in data {
            if let Some(code) = self.table.code_for(symbol) {
                bits.push_str(code);
            }
        }
        self.bit_length = bits.len();

        if_tracing! {
            info!(
                target = "huffman",
                input_len = data.len(),
                distinct_symbols = self.table.len(),
                bit_length = self.bit_length,
                "huffman encode complete"
            );
        }

        bits
    }

    /// Decodes a bit-string with the current session's tree.
    ///
    /// Tolerant by design: an empty bit-string or a codec without a tree yields empty
    /// output, characters other than `'0'` and `'1'` are skipped, and trailing bits that
    /// do not complete a code are dropped.
    pub fn decode(&self, bits: &str) -> Vec<u8> {
        match self.walk(bits, false) {
            Ok(decoded) => decoded,
            // tolerant walks never report
            Err(_) => Vec::new(),
        }
    }

    /// Like [`decode`](Self::decode), but reports malformed input instead of skipping it.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::NoTree`] for a non-empty bit-string while no session is active.
    /// - [`DecodeError::InvalidBit`] for a character other than `'0'`/`'1'`, or a `'1'`
    ///   under a single-symbol tree whose only code is `"0"`.
    /// - [`DecodeError::TruncatedCode`] when the final bits do not complete a code.
    pub fn decode_strict(&self, bits: &str) -> Result<Vec<u8>, DecodeError> {
        self.walk(bits, true)
    }

    fn walk(&self, bits: &str, strict: bool) -> Result<Vec<u8>, DecodeError> {
        if_tracing! {
            let span = span!(Level::INFO, "huffman_decode", bit_length = bits.len(), strict);
            let _enter = span.enter();
        }

        if bits.is_empty() {
            return Ok(Vec::new());
        }
        let Some(tree) = &self.tree else {
            if_tracing! {
                debug!(target = "huffman", "huffman decode without a tree");
            }
            return if strict { Err(DecodeError::NoTree) } else { Ok(Vec::new()) };
        };

        let root = tree.root();
        let mut decoded = Vec::with_capacity(self.source_len);
        let mut current = root;
        // position where the code currently being read started, and how many bits it has so far
        let mut code_start = 0usize;
        let mut dangling = 0usize;

        for (position, found) in bits.chars().enumerate() {
            let bit = match found {
                '0' => false,
                '1' => true,
                _ if strict => return Err(DecodeError::InvalidBit { position, found }),
                _ => continue,
            };

            if root.is_leaf() {
                if bit {
                    if strict {
                        return Err(DecodeError::InvalidBit { position, found });
                    }
                    continue;
                }
            } else if let Some(next) = current.child(bit) {
                if dangling == 0 {
                    code_start = position;
                }
                dangling += 1;
                current = next;
            }

            if let Some(symbol) = current.symbol() {
                decoded.push(symbol);
                current = root;
                dangling = 0;
            }
        }

        if dangling > 0 {
            if_tracing! {
                debug!(target = "huffman", position = code_start, dangling, "trailing partial code");
            }
            if strict {
                return Err(DecodeError::TruncatedCode {
                    position: code_start,
                    dangling,
                });
            }
        }

        if_tracing! {
            info!(target = "huffman", bit_length = bits.len(), output_len = decoded.len(), "huffman decode complete");
        }

        Ok(decoded)
    }

    /// Packs a bit-string MSB-first. See [`bits::pack_bits`].
    pub fn pack_bits(bits: &str) -> Vec<u8> {
        bits::pack_bits(bits)
    }

    /// Unpacks exactly `bit_length` bits. See [`bits::unpack_bits`].
    pub fn unpack_bits(packed: &[u8], bit_length: usize) -> String {
        bits::unpack_bits(packed, bit_length)
    }

    /// Whether a tree from a previous encode is available.
    pub const fn has_tree(&self) -> bool {
        self.tree.is_some()
    }

    pub const fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub const fn frequencies(&self) -> &FrequencyMap {
        &self.frequencies
    }

    pub const fn codes(&self) -> &CodeTable {
        &self.table
    }

    pub fn code_for(&self, symbol: u8) -> Option<&str> {
        self.table.code_for(symbol)
    }

    pub fn symbol_for(&self, code: &str) -> Option<u8> {
        self.table.symbol_for(code)
    }

    /// Length of the last encoded bit-string.
    pub const fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Bytes the last encoded bit-string occupies once packed.
    pub const fn packed_len(&self) -> usize {
        bits::packed_len(self.bit_length)
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            source_len: self.source_len,
            bit_length: self.bit_length,
            packed_len: self.packed_len(),
            distinct_symbols: self.table.len(),
            max_code_length: self.table.max_code_length(),
        }
    }
}
