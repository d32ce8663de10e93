use eframe::egui::{Color32, Ui};
use egui_plot::{HLine, Line, LineStyle, Plot, PlotPoints};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Timing plot (central panel)
// ---------------------------------------------------------------------------

/// Render the access-time plot in the central panel.
pub fn timing_plot(ui: &mut Ui, state: &ViewerState) {
    Plot::new("timing_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Sample")
        .y_axis_label("Access Time (cycles)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for set in &state.sets {
                let (r, g, b) = state.colors.color_for(set);
                // Partial opacity so overlapping spikes stay readable.
                let color = Color32::from_rgba_unmultiplied(r, g, b, 180);

                // Dropped probes (NaN) split the set into runs: draw each
                // run as its own line so the plot shows a gap, with a
                // single legend entry per set.
                let runs = state.dataset.finite_runs(set).unwrap_or_default();
                for (i, run) in runs.iter().enumerate() {
                    let points: PlotPoints =
                        run.iter().map(|&(s, v)| [s as f64, v]).collect();

                    let mut line = Line::new(points).color(color).width(1.5);
                    if i == 0 {
                        line = line.name(set);
                    }
                    plot_ui.line(line);
                }
            }

            if state.show_threshold {
                let hline = HLine::new(state.threshold)
                    .name(format!("Threshold ({} cycles)", state.threshold))
                    .color(Color32::RED)
                    .style(LineStyle::dashed_loose())
                    .width(1.5);
                plot_ui.hline(hline);
            }
        });
}
