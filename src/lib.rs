//! huffpack: a canonical single-pass Huffman codec over 8-bit symbols.
//!
//! The [`huffman`] module holds the codec itself: frequency counting, tree construction,
//! code table generation, bit-string encoding/decoding and MSB-first bit packing.
//! [`algorithms::huffman`] wraps it as a [`compressor::Compressor`] session, and [`cli`]
//! is the `huffpack` command line built on top of both.

#[macro_export]
macro_rules! if_tracing {
    {$($body:tt)*} => {
        ::cfg_if::cfg_if! {
            if #[cfg(feature = "tracing")] {
                $($body)*
            }
        }
    };
}

#[macro_export]
macro_rules! if_not_tracing {
    {$($body:tt)*} => {
        ::cfg_if::cfg_if! {
            if #[cfg(not(feature = "tracing"))] {
                $($body)*
            }
        }
    };
}

pub mod algorithms;
pub mod cli;
pub mod compressor;
pub mod huffman;
