use crate::color::SetColors;
use crate::data::model::TimingDataset;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// State of the interactive viewer, independent of rendering.
///
/// The dataset is loaded and validated before the window opens, so the
/// viewer never deals with load errors.
pub struct ViewerState {
    /// Loaded measurement run.
    pub dataset: TimingDataset,

    /// Sets being displayed, in legend order.
    pub sets: Vec<String>,

    /// Decision threshold in cycles.
    pub threshold: f64,

    /// Per-set line colours (shared palette with the PNG renderer).
    pub colors: SetColors,

    /// Whether the threshold reference line is drawn.
    pub show_threshold: bool,
}

impl ViewerState {
    pub fn new(dataset: TimingDataset, sets: Vec<String>, threshold: f64) -> Self {
        let colors = SetColors::new(&sets);
        Self {
            dataset,
            sets,
            threshold,
            colors,
            show_threshold: true,
        }
    }
}
