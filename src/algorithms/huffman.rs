use std::fmt::Display;

use anyhow::anyhow;

use crate::compressor::{Compressor, DecompressionError, Result};
use crate::huffman::{HuffmanCodec, SessionStats, bits};

if_tracing! {
    use tracing::{debug, info};
}

/// Huffman coding as a [`Compressor`] session.
///
/// The code table is never written into the compressed bytes, and neither is the number of
/// padding bits in the last byte. Both live in this struct between
/// [`compress_bytes`](Compressor::compress_bytes) and
/// [`decompress_bytes`](Compressor::decompress_bytes).
#[derive(Clone, Debug, Default)]
pub struct HuffmanCoding {
    codec: HuffmanCodec,
    bit_length: Option<usize>,
}

impl Compressor for HuffmanCoding {
    fn compress_bytes(&mut self, data: &[u8]) -> Vec<u8> {
        self.huffman_encode(data)
    }

    fn decompress_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        self.huffman_decode(data).map_err(|e| anyhow!(e))
    }

    fn compressor_name(&self) -> String {
        self.to_string()
    }
}

impl Display for HuffmanCoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Huffman Coding")
    }
}

impl HuffmanCoding {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn codec(&self) -> &HuffmanCodec {
        &self.codec
    }

    pub fn stats(&self) -> SessionStats {
        self.codec.stats()
    }

    pub fn huffman_encode(&mut self, data: &[u8]) -> Vec<u8> {
        if_tracing! {
            debug!(target = "huffman", input_len = data.len(), "huffman compress start");
        }

        let encoded = self.codec.encode_as_string(data);
        self.bit_length = Some(encoded.len());
        let packed = bits::pack_bits(&encoded);

        if_tracing! {
            info!(target = "huffman", input_len = data.len(), bit_length = encoded.len(), output_len = packed.len(), "huffman compress complete");
        }
        packed
    }

    pub fn huffman_decode(&mut self, data: &[u8]) -> Result<Vec<u8>, DecompressionError> {
        let Some(bit_length) = self.bit_length else {
            return Err(DecompressionError::NoSession);
        };

        let expected = bits::packed_len(bit_length);
        if data.len() < expected {
            return Err(DecompressionError::InvalidInput(format!(
                "expected at least {} bytes to hold {} bits, got {}",
                expected,
                bit_length,
                data.len()
            )));
        }

        let encoded = bits::unpack_bits(data, bit_length);
        let decoded = self
            .codec
            .decode_strict(&encoded)
            .map_err(|e| DecompressionError::InvalidInput(e.to_string()))?;

        if_tracing! {
            info!(target = "huffman", input_len = data.len(), output_len = decoded.len(), "huffman decompress complete");
        }
        Ok(decoded)
    }
}
