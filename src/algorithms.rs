//! Compressors built on the codecs of this crate.

pub mod huffman;

pub use self::huffman::HuffmanCoding;
