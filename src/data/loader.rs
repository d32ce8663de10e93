use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{TimingDataset, TimingRow};
use crate::config;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a timing dataset from a file.  Dispatch by extension.
///
/// Only `.csv` is supported; the upstream measurement tool emits nothing
/// else.
pub fn load_file(path: &Path) -> Result<TimingDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            read_csv(file)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Parse a measurement CSV from any reader.
///
/// Expected layout: a header row with a `Sample` column (integer index)
/// plus one `Set<N>` column per monitored cache set (cycles). An empty cell
/// becomes NaN; any other non-numeric cell is an error. Sample indices must
/// be strictly increasing.
pub fn read_csv(input: impl Read) -> Result<TimingDataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let sample_idx = headers
        .iter()
        .position(|h| h == config::SAMPLE_COLUMN)
        .with_context(|| format!("CSV missing '{}' column", config::SAMPLE_COLUMN))?;

    let set_names: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != sample_idx)
        .map(|(_, h)| h.clone())
        .collect();

    let mut rows: Vec<TimingRow> = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let sample: i64 = record
            .get(sample_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| {
                format!("CSV row {row_no}: '{}' is not an integer sample index", record.get(sample_idx).unwrap_or(""))
            })?;

        if let Some(prev) = rows.last() {
            if sample <= prev.sample {
                bail!(
                    "CSV row {row_no}: sample index {sample} does not increase (previous was {})",
                    prev.sample
                );
            }
        }

        let mut readings = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            if col_idx == sample_idx {
                continue;
            }
            let cycles = parse_cycles(value)
                .with_context(|| {
                    format!("CSV row {row_no}, column '{}': '{value}' is not a number", headers[col_idx])
                })?;
            readings.insert(headers[col_idx].clone(), cycles);
        }

        rows.push(TimingRow { sample, readings });
    }

    Ok(TimingDataset { rows, set_names })
}

/// Parse a single access-time cell. Blank cells mark dropped probes.
fn parse_cycles(s: &str) -> Result<f64, std::num::ParseFloatError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(f64::NAN);
    }
    s.parse::<f64>()
}
