use std::path::Path;

use anyhow::Result;
use walkdir::WalkDir;

use crate::cli::{
    CliError, CorpusArgs,
    test::{RoundTripReport, print_report, roundtrip_file},
};

#[derive(Debug, Default)]
pub struct CorpusSummary {
    pub reports: Vec<RoundTripReport>,
    /// Files that could not be read, or whose failed roundtrip could not be saved.
    pub errors: Vec<CliError>,
}

impl CorpusSummary {
    pub fn total(&self) -> usize {
        self.reports.len() + self.errors.len()
    }

    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| !r.passed).count() + self.errors.len()
    }

    pub fn original_bytes(&self) -> usize {
        self.reports.iter().map(|r| r.original_len).sum()
    }

    pub fn compressed_bytes(&self) -> usize {
        self.reports.iter().map(|r| r.compressed_len).sum()
    }
}

/// Runs every regular file under `root` through its own roundtrip session.
pub fn run_corpus(root: &Path, save_failed: bool, mut on_report: impl FnMut(&RoundTripReport)) -> CorpusSummary {
    let mut summary = CorpusSummary::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                if_tracing! {
                    tracing::warn!(event = "walk_error", error = %e, "skipping unreadable corpus entry");
                }
                if_not_tracing! {
                    eprintln!("skipping unreadable corpus entry: {}", e);
                }
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        match roundtrip_file(entry.path(), save_failed) {
            Ok(report) => {
                on_report(&report);
                summary.reports.push(report);
            }
            Err(e) => {
                eprintln!("======== FAILED {} ========\n\t{}", entry.path().display(), e);
                summary.errors.push(e);
            }
        }
    }

    summary
}

pub fn corpus(args: CorpusArgs) -> Result<()> {
    let summary = run_corpus(&args.input, args.save_failed, print_report);

    let original = summary.original_bytes();
    let compressed = summary.compressed_bytes();
    eprintln!(
        "{} files, {} passed, {} failed\n{} bytes -> {} bytes ({:.1}%)",
        summary.total(),
        summary.total() - summary.failed(),
        summary.failed(),
        original,
        compressed,
        if original == 0 { 100.0 } else { compressed as f64 / original as f64 * 100.0 }
    );

    if summary.failed() > 0 {
        return Err(CliError::CorpusFailures {
            failed: summary.failed(),
            total: summary.total(),
        }
        .into());
    }
    Ok(())
}
