//! Default paths, columns, and thresholds for the analysis commands.
//!
//! These mirror the upstream measurement tool's conventions; every one of
//! them can be overridden on the command line.

use crate::stats::StatRequest;

/// CSV emitted by the Prime+Probe measurement tool.
pub const DEFAULT_INPUT: &str = "prime_probe_results.csv";

/// Rendered chart path.
pub const DEFAULT_PLOT_OUTPUT: &str = "prime_probe_plot.png";

/// Cycle count separating a cache hit from eviction by the victim.
pub const DEFAULT_THRESHOLD: f64 = 200.0;

/// Header name of the sample-index column.
pub const SAMPLE_COLUMN: &str = "Sample";

/// Sets plotted by default: the ones the victim's accesses conflict with.
pub const DEFAULT_PLOT_SETS: [&str; 3] = ["Set0", "Set16", "Set32"];

/// Rendered chart size in pixels.
pub const PLOT_SIZE: (u32, u32) = (1200, 600);

/// Default summary statistics, in output order.
pub fn default_stat_requests() -> Vec<StatRequest> {
    vec![
        StatRequest::Max("Set0".to_string()),
        StatRequest::HitsOver("Set16".to_string()),
        StatRequest::Max("Set32".to_string()),
    ]
}
