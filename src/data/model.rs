use std::collections::BTreeMap;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Domain errors for operations over a loaded dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A requested set column does not exist in the dataset.
    #[error("set column '{name}' not found (available: {available})")]
    MissingSet { name: String, available: String },

    /// The dataset contains no rows, so per-set statistics are undefined.
    #[error("dataset contains no rows")]
    Empty,
}

impl DatasetError {
    /// Build a [`DatasetError::MissingSet`] listing the dataset's columns.
    pub fn missing_set(name: &str, dataset: &TimingDataset) -> Self {
        DatasetError::MissingSet {
            name: name.to_string(),
            available: dataset.set_names.join(", "),
        }
    }
}

// ---------------------------------------------------------------------------
// TimingRow – one sample of the measurement run
// ---------------------------------------------------------------------------

/// A single probe round: one access-time reading per monitored cache set.
#[derive(Debug, Clone)]
pub struct TimingRow {
    /// Sample index (strictly increasing across the dataset).
    pub sample: i64,
    /// Per-set access time in cycles: set name → reading.
    /// A NaN reading marks a probe the measurement tool dropped.
    pub readings: BTreeMap<String, f64>,
}

// ---------------------------------------------------------------------------
// TimingDataset – the complete loaded measurement run
// ---------------------------------------------------------------------------

/// The full parsed measurement run. Immutable after construction.
#[derive(Debug, Clone)]
pub struct TimingDataset {
    /// All probe rounds, ordered by sample index.
    pub rows: Vec<TimingRow>,
    /// Set column names in file order (excludes the sample column).
    pub set_names: Vec<String>,
}

impl TimingDataset {
    /// Number of probe rounds.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the dataset carries a column for the given set.
    pub fn has_set(&self, name: &str) -> bool {
        self.set_names.iter().any(|s| s == name)
    }

    /// Iterate `(sample, reading)` pairs for one set column.
    ///
    /// Fails when the set is absent. Rows are yielded in sample order.
    pub fn series<'a>(
        &'a self,
        name: &'a str,
    ) -> Result<impl Iterator<Item = (i64, f64)> + 'a, DatasetError> {
        if !self.has_set(name) {
            return Err(DatasetError::missing_set(name, self));
        }
        Ok(self
            .rows
            .iter()
            .filter_map(move |row| row.readings.get(name).map(|&v| (row.sample, v))))
    }

    /// Contiguous runs of finite readings for one set column.
    ///
    /// A NaN reading (dropped probe) ends the current run, so renderers
    /// draw a gap instead of bridging the missing sample with a segment.
    pub fn finite_runs(&self, name: &str) -> Result<Vec<Vec<(i64, f64)>>, DatasetError> {
        let mut runs = Vec::new();
        let mut current: Vec<(i64, f64)> = Vec::new();
        for (sample, v) in self.series(name)? {
            if v.is_finite() {
                current.push((sample, v));
            } else if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        Ok(runs)
    }
}
