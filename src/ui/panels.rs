use eframe::egui::Ui;

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: dataset shape plus the threshold-line toggle.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} samples, {} sets measured, showing {}",
            state.dataset.len(),
            state.dataset.set_names.len(),
            state.sets.join(", ")
        ));

        ui.separator();

        if ui
            .selectable_label(state.show_threshold, "Threshold line")
            .clicked()
        {
            state.show_threshold = !state.show_threshold;
        }
    });
}
