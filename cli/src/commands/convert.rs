//! Bulk conversion of allocation lists into CSV rows for range tables.
//!
//! Each non-empty line that is not a `#` comment names one block as its first
//! whitespace-separated token; anything after it (dates, status columns) is
//! ignored.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use allocmap_common::config::Config;
use allocmap_common::error::AddressError;
use allocmap_common::network::range::{self, Range};
use anyhow::Context;
use rayon::prelude::*;
use tracing::{info, warn};

pub const CSV_HEADER: &str = "block,low_first,low_second,high_first,high_second";

/// One resolved line of the input, keyed by its 1-based line number.
pub struct Entry<'a> {
    pub line_no: usize,
    pub block: &'a str,
    pub range: Result<Range, AddressError>,
}

pub fn convert(path: &Path, cfg: &Config) -> anyhow::Result<()> {
    // Stdout carries nothing but CSV
    if cfg.quiet == 0 {
        info!("converting allocation list {}", path.display());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let (converted, skipped) = convert_into(path, &mut out)?;
    out.flush().context("Failed to write CSV output")?;

    info!("{converted} blocks converted, {skipped} skipped");
    Ok(())
}

/// Reads the list at `path` and writes the CSV header and one row per
/// resolved block to `out`. Returns `(converted, skipped)`.
pub fn convert_into<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<(usize, usize)> {
    let content: String = fs::read_to_string(path)
        .with_context(|| format!("Failed to read allocation list '{}'", path.display()))?;
    let entries: Vec<Entry> = resolve_all(&content);

    writeln!(out, "{CSV_HEADER}").context("Failed to write CSV output")?;

    let mut converted: usize = 0;
    let mut skipped: usize = 0;
    for entry in &entries {
        match &entry.range {
            Ok(range) => {
                writeln!(out, "{}", csv_row(entry.block, range))
                    .context("Failed to write CSV output")?;
                converted += 1;
            }
            Err(e) => {
                warn!("line {}: {e}", entry.line_no);
                skipped += 1;
            }
        }
    }
    Ok((converted, skipped))
}

/// Picks the block token out of every relevant line and resolves them in
/// parallel. The result keeps input order.
pub fn resolve_all(content: &str) -> Vec<Entry<'_>> {
    let blocks: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            line.split_whitespace().next().map(|block| (idx + 1, block))
        })
        .collect();

    blocks
        .into_par_iter()
        .map(|(line_no, block)| Entry {
            line_no,
            block,
            range: range::cidr(block),
        })
        .collect()
}

pub fn csv_row(block: &str, range: &Range) -> String {
    let (low, high) = range.to_sql();
    format!(
        "{block},{},{},{},{}",
        low.first, low.second, high.first, high.second
    )
}
