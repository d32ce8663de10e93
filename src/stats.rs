use std::fmt;

use serde::Serialize;

use crate::data::model::{DatasetError, TimingDataset};

// ---------------------------------------------------------------------------
// Requests – which statistics to compute, in output order
// ---------------------------------------------------------------------------

/// One requested summary statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatRequest {
    /// Maximum access time of a set column.
    Max(String),
    /// Count of samples whose access time strictly exceeds the threshold.
    HitsOver(String),
}

// ---------------------------------------------------------------------------
// Summary – the computed statistics
// ---------------------------------------------------------------------------

/// One computed statistic, tagged for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "stat", rename_all = "snake_case")]
pub enum Statistic {
    Max {
        set: String,
        cycles: f64,
    },
    Hits {
        set: String,
        threshold: f64,
        samples: usize,
    },
}

/// Ordered summary of a measurement run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub entries: Vec<Statistic>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            match entry {
                Statistic::Max { set, cycles } => {
                    writeln!(f, "{set} max: {} cycles", format_cycles(*cycles))?;
                }
                Statistic::Hits { set, samples, .. } => {
                    writeln!(f, "{set} hits: {samples} samples")?;
                }
            }
        }
        Ok(())
    }
}

/// Format an access time the way the measurement tool reports it:
/// whole values without a decimal point.
fn format_cycles(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Compute the requested statistics against one dataset.
///
/// Fails on an empty dataset or an unknown set name; both abort the whole
/// summary rather than reporting partial results.
pub fn summarize(
    dataset: &TimingDataset,
    requests: &[StatRequest],
    threshold: f64,
) -> Result<Summary, DatasetError> {
    if dataset.is_empty() {
        return Err(DatasetError::Empty);
    }

    let mut entries = Vec::with_capacity(requests.len());
    for request in requests {
        let entry = match request {
            StatRequest::Max(set) => Statistic::Max {
                set: set.clone(),
                cycles: max_of(dataset, set)?,
            },
            StatRequest::HitsOver(set) => Statistic::Hits {
                set: set.clone(),
                threshold,
                samples: hits_over(dataset, set, threshold)?,
            },
        };
        entries.push(entry);
    }
    Ok(Summary { entries })
}

/// Maximum reading of one set column, skipping NaN (dropped probes).
/// Yields NaN when every reading was dropped. Emptiness is checked once
/// in [`summarize`].
fn max_of(dataset: &TimingDataset, set: &str) -> Result<f64, DatasetError> {
    let mut seen = false;
    let mut max = f64::NEG_INFINITY;
    for (_, v) in dataset.series(set)? {
        if v.is_nan() {
            continue;
        }
        seen = true;
        max = max.max(v);
    }
    Ok(if seen { max } else { f64::NAN })
}

/// Count of samples whose reading strictly exceeds the threshold.
/// A reading exactly at the threshold is not a hit; NaN is never a hit.
fn hits_over(dataset: &TimingDataset, set: &str, threshold: f64) -> Result<usize, DatasetError> {
    Ok(dataset.series(set)?.filter(|&(_, v)| v > threshold).count())
}
