use egui::Grid;
use egui_adaptive::Fold;

/// Lists the state of the gallery's folds.
pub fn details_panel(ui: &mut egui::Ui, folds: &[(&str, Fold)]) {
    ui.heading("Details");
    ui.separator();

    for (name, fold) in folds {
        ui.strong(*name);
        Grid::new(("fold_details", *name))
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                ui.label("Width");
                ui.label(
                    fold.measured_width()
                        .map_or_else(|| "-".to_owned(), |width| width.to_string()),
                );
                ui.end_row();

                ui.label("Threshold");
                ui.label(fold.fold_threshold().to_string());
                ui.end_row();

                ui.label("Folded");
                ui.label(fold.is_folded().to_string());
                ui.end_row();

                ui.label("Side shown");
                ui.label(fold.side_is_revealed().to_string());
                ui.end_row();
            });
        ui.add_space(8.0);
    }
}
