use anyhow::Result;
use voxell_timer::time_fn;

use crate::cli::{BitsArgs, hexify, read_input};
use crate::huffman::HuffmanCodec;

pub fn bits(args: BitsArgs) -> Result<()> {
    let input = read_input(&args.input)?;
    let mut codec = HuffmanCodec::new();

    let (encoded, _dur) = time_fn(|| codec.encode_as_string(&input));
    if_tracing! {
        tracing::info!(event = "bits_complete", input = %args.input.display(), elapsed_ms = %_dur.as_micros(), bit_length = encoded.len(), "bits finished");
    }

    println!("{}", encoded);
    if args.packed {
        println!("{}", hexify(&HuffmanCodec::pack_bits(&encoded)));
    }
    Ok(())
}
