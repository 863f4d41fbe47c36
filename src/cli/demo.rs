use anyhow::Result;
use serde::Serialize;

use crate::cli::{
    DemoArgs,
    codes::{CodeTableReport, code_table_report, print_code_table},
    hexify,
};
use crate::huffman::HuffmanCodec;

/// Every intermediate of one pass through the codec.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub text: String,
    pub encoded: String,
    pub bit_length: usize,
    pub packed_len: usize,
    pub packed_hex: String,
    pub unpacked: String,
    pub decoded: String,
    pub roundtrip_ok: bool,
    pub table: CodeTableReport,
}

pub fn demo_report(text: &str) -> DemoReport {
    let mut codec = HuffmanCodec::new();
    let encoded = codec.encode_as_string(text.as_bytes());
    let packed = HuffmanCodec::pack_bits(&encoded);
    let unpacked = HuffmanCodec::unpack_bits(&packed, encoded.len());
    let decoded = codec.decode(&unpacked);

    DemoReport {
        text: text.to_string(),
        bit_length: encoded.len(),
        packed_len: packed.len(),
        packed_hex: hexify(&packed),
        roundtrip_ok: decoded == text.as_bytes(),
        decoded: String::from_utf8_lossy(&decoded).into_owned(),
        table: code_table_report(&codec),
        encoded,
        unpacked,
    }
}

pub fn demo(args: DemoArgs) -> Result<()> {
    let report = demo_report(&args.text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Original text: {}", report.text);
    println!("Original size: {} bytes\n", report.text.len());
    print_code_table(&report.table);
    println!("\nEncoded string: {}", report.encoded);
    println!("Encoded size: {} bits", report.bit_length);
    println!("Packed size: {} bytes", report.packed_len);
    println!("Packed bytes: {}", report.packed_hex);
    println!("Unpacked string: {}", report.unpacked);
    println!("Decoded text: {}", report.decoded);
    println!("Roundtrip: {}", if report.roundtrip_ok { "ok" } else { "MISMATCH" });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abracadabra_demo() {
        let report = demo_report("abracadabra");
        assert_eq!(report.encoded, "01101110100010101101110");
        assert_eq!(report.bit_length, 23);
        assert_eq!(report.packed_len, 3);
        assert_eq!(report.packed_hex, "6e 8a dc");
        assert_eq!(report.unpacked, report.encoded);
        assert_eq!(report.decoded, "abracadabra");
        assert!(report.roundtrip_ok);
    }

    #[test]
    fn single_symbol_demo() {
        let report = demo_report("aaaa");
        assert_eq!(report.encoded, "0000");
        assert_eq!(report.packed_hex, "00");
        assert!(report.roundtrip_ok);
    }

    #[test]
    fn empty_demo() {
        let report = demo_report("");
        assert!(report.encoded.is_empty());
        assert_eq!(report.packed_len, 0);
        assert!(report.decoded.is_empty());
        assert!(report.roundtrip_ok);
    }

    #[test]
    fn demo_serializes() {
        let json = serde_json::to_value(demo_report("hello")).unwrap();
        assert_eq!(json["decoded"], "hello");
        assert_eq!(json["roundtrip_ok"], true);
    }
}
