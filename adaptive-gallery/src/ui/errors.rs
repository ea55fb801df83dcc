use anyhow::anyhow;
use egui_adaptive::{ErrorLabel, StatusPage};

pub struct ErrorsPage {
    label: ErrorLabel,
    status: StatusPage,
}

impl ErrorsPage {
    pub fn new() -> Self {
        let err = anyhow!("missing hard drive")
            .context("filesystem error")
            .context("failed to open hello.txt");

        let mut status = StatusPage::new();
        status.set_icon_name("🗋");
        status.set_title("No documents");
        status.set_description("Documents you open show up here.");

        Self {
            label: ErrorLabel::new(&*err),
            status,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.label("Click the error to expand it.");
        ui.add(&mut self.label);
        ui.add_space(16.0);
        ui.separator();
        self.status.show(ui);
    }
}
