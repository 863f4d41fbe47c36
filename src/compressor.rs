pub use anyhow::Result;
use thiserror::Error;

/// Represents an error emitted by a decompressor while decoding data.
#[derive(Debug, Error)]
pub enum DecompressionError {
    /// Input given to the decompressor was malformed, invalid, or otherwise incorrect for decoding.
    ///
    /// The argument is a string that describes what went wrong.
    #[error("Input data was malformed, and could not be decoded: {0}")]
    InvalidInput(String),

    /// The decompressor has no session state to decode with.
    #[error("Nothing was compressed in this session; there is no code table to decode with.")]
    NoSession,
}

/// Represents shared behavior for all compressors.
///
/// Provides a method [`compress_bytes`](Compressor::compress_bytes) to compress data and
/// [`decompress_bytes`](Compressor::decompress_bytes) to decompress data.
///
/// # Note
///
/// Compressors are sessions: a compressor may keep state from
/// [`compress_bytes`](Compressor::compress_bytes) that
/// [`decompress_bytes`](Compressor::decompress_bytes) needs, so the same instance has to
/// drive both directions.
pub trait Compressor: 'static {
    /// Compresses a given byte slice and returns the encoded data.
    ///
    /// No guarantees are made about the length of the resulting [`Vec<u8>`].
    /// It can be shorter, equal in length, or longer.
    fn compress_bytes(&mut self, data: &[u8]) -> Vec<u8>;

    /// Decompresses a given byte slice and returns the decoded data.
    ///
    /// # Errors
    ///
    /// Returns an error if the input data was malformed, or if the compressor has no
    /// session state to decode with.
    fn decompress_bytes(&mut self, data: &[u8]) -> Result<Vec<u8>>;

    /// Human readable name, for reports.
    fn compressor_name(&self) -> String {
        core::any::type_name::<Self>().to_string()
    }

    /// Performs a round-trip test on the compressor.
    ///
    /// Use for sanity checking the compressor and decompressor.
    fn test_roundtrip<'orig>(&mut self, data: &'orig [u8]) -> Result<RoundTripTestResult<'orig>> {
        let compressed = <Self as Compressor>::compress_bytes(self, data);
        let decompressed = <Self as Compressor>::decompress_bytes(self, &compressed)?;
        let equal = data == decompressed.as_slice();

        Ok(RoundTripTestResult {
            equal,
            original: data,
            compressed,
            decompressed,
        })
    }

    /// Converts the compressor into a boxed trait object.
    fn into_boxed(self) -> Box<dyn Compressor>
    where
        Self: Sized,
    {
        Box::new(self)
    }
}

/// Represents the result of a round-trip test.
///
/// Use accessor methods to retrieve the [`result`][RoundTripTestResult::is_successful],
/// the [`original data`][RoundTripTestResult::get_original],
/// the [`compressed data`][RoundTripTestResult::get_compressed],
/// and the [`decompressed data`][RoundTripTestResult::get_decompressed].
#[derive(Clone, Debug, Hash)]
pub struct RoundTripTestResult<'orig> {
    pub(crate) equal: bool,
    pub(crate) original: &'orig [u8],
    pub(crate) compressed: Vec<u8>,
    pub(crate) decompressed: Vec<u8>,
}

impl<'orig> RoundTripTestResult<'orig> {
    /// Whether the original and decompressed data were equal.
    pub const fn is_successful(&self) -> bool {
        self.equal
    }

    /// The original data before any action was taken.
    pub const fn get_original(&self) -> &'orig [u8] {
        self.original
    }

    /// The data after it has been encoded by the compressor.
    pub fn get_compressed(&self) -> &[u8] {
        self.compressed.as_slice()
    }

    /// The data after it has been decoded by the decompressor.
    pub fn get_decompressed(&self) -> &[u8] {
        self.decompressed.as_slice()
    }
}
