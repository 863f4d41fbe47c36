use anyhow::Result;
use serde::Serialize;

use crate::cli::{CodesArgs, display_symbol, read_input};
use crate::huffman::{HuffmanCodec, SessionStats};

/// One row of the code table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEntry {
    pub symbol: u8,
    pub display: String,
    pub frequency: usize,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeTableReport {
    pub stats: SessionStats,
    pub entries: Vec<CodeEntry>,
}

/// Collects the code table of the codec's current session, in ascending symbol order.
pub fn code_table_report(codec: &HuffmanCodec) -> CodeTableReport {
    let entries = codec
        .codes()
        .iter()
        .map(|(symbol, code)| CodeEntry {
            symbol,
            display: display_symbol(symbol),
            frequency: codec.frequencies().get(&symbol).copied().unwrap_or(0),
            code: code.to_string(),
        })
        .collect();

    CodeTableReport {
        stats: codec.stats(),
        entries,
    }
}

pub fn print_code_table(report: &CodeTableReport) {
    println!("{:>6} {:>6} {:>10}  code", "byte", "symbol", "frequency");
    for entry in &report.entries {
        println!("{:>6} {:>6} {:>10}  {}", entry.symbol, entry.display, entry.frequency, entry.code);
    }
    let stats = &report.stats;
    println!(
        "\n{} symbols, {} distinct, {} bits ({:.3} bits/symbol), {} packed bytes, longest code {} bits",
        stats.source_len,
        stats.distinct_symbols,
        stats.bit_length,
        stats.bits_per_symbol(),
        stats.packed_len,
        stats.max_code_length
    );
}

pub fn codes(args: CodesArgs) -> Result<()> {
    let input = read_input(&args.input)?;
    let mut codec = HuffmanCodec::new();
    codec.encode_as_string(&input);
    let report = code_table_report(&codec);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_code_table(&report);
    }
    Ok(())
}
