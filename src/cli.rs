//! cli component of the huffpack project.
//!
//! every command runs a whole encode/decode session inside the process. the code table is
//! never written out, so there is no way to decode a file produced by an earlier run.
//!
//! > `$exename bits <path to file>`
//!
//! prints the bit-string the file encodes to.
//!
//! > `$exename codes <path to file> [--json]`
//!
//! prints the frequency and code table of the file, one symbol per line, or the same
//! information as json.
//!
//! > `$exename test <path to file> [--save-failed]`
//!
//! encodes the file, packs the bits, unpacks them and decodes the result, then compares the
//! roundtripped bytes with the original and reports timings and sizes. with `--save-failed`,
//! a mismatch writes `{file name}.expected.bin` and `{file name}.got.bin` in the
//! working directory.
//!
//! > `$exename corpus <path to folder> [--save-failed]`
//!
//! runs `test` on every file under the folder.
//!
//! > `$exename demo [text] [--json]`
//!
//! walks a piece of text through every stage of the codec and prints each intermediate.
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod bits;
pub mod codes;
pub mod corpus;
pub mod demo;

/// Error types for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("roundtrip failed for {}", .0.display())]
    RoundTripMismatch(PathBuf),

    #[error("{failed} of {total} files failed the roundtrip")]
    CorpusFailures { failed: usize, total: usize },
}

/// CLI arguments for the huffpack application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands for huffpack
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the encoded bit-string of a file
    Bits(BitsArgs),

    /// Print the frequency and code table of a file
    Codes(CodesArgs),

    /// Test the encode/pack/unpack/decode roundtrip of a file
    Test(TestArgs),

    /// Test the roundtrip of every file under a folder
    Corpus(CorpusArgs),

    /// Walk a piece of text through every stage of the codec
    Demo(DemoArgs),
}

/// Arguments specific to the bits command
#[derive(Args, Debug)]
pub struct BitsArgs {
    /// Path to the input file
    pub input: PathBuf,

    /// Also print the packed bytes as hex
    #[arg(long)]
    pub packed: bool,
}

/// Arguments specific to the codes command
#[derive(Args, Debug)]
pub struct CodesArgs {
    /// Path to the input file
    pub input: PathBuf,

    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments specific to the test command
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Path to the original file
    pub input: PathBuf,

    /// Write the expected and decoded bytes to disk when the roundtrip fails
    #[arg(long)]
    pub save_failed: bool,
}

/// Arguments specific to the corpus command
#[derive(Args, Debug)]
pub struct CorpusArgs {
    /// Folder to walk
    #[arg(default_value = "./test_data")]
    pub input: PathBuf,

    /// Write the expected and decoded bytes to disk when a roundtrip fails
    #[arg(long)]
    pub save_failed: bool,
}

/// Arguments specific to the demo command
#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Text to encode
    #[arg(default_value = "abracadabra")]
    pub text: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders a byte the way the reports show symbols: printable ASCII as itself,
/// everything else as an escape.
pub(crate) fn display_symbol(symbol: u8) -> String {
    match symbol {
        b' ' => "' '".to_string(),
        0x21..=0x7E => (symbol as char).to_string(),
        _ => core::ascii::escape_default(symbol).to_string(),
    }
}

pub(crate) fn hexify(data: &[u8]) -> String {
    use core::fmt::Write;
    let mut s = String::with_capacity(data.len() * 3);
    for (i, byte) in data.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        let _ = write!(s, "{:02x}", byte);
    }
    s
}

/// Runs the parsed command.
pub fn execute_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Bits(args) => bits::bits(args),
        Command::Codes(args) => codes::codes(args),
        Command::Test(args) => test::test(args),
        Command::Corpus(args) => corpus::corpus(args),
        Command::Demo(args) => demo::demo(args),
    }
}
