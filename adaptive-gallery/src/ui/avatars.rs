use egui::ScrollArea;
use egui_adaptive::Avatar;

use crate::consts::AVATAR_SIZES;

const AVATAR_URI: &str = "https://www.rust-lang.org/logos/rust-logo-128x128.png";

/// One avatar of every kind, at every size.
pub struct AvatarsPage {
    rows: Vec<[Avatar; 4]>,
}

impl AvatarsPage {
    pub fn new() -> Self {
        let rows = AVATAR_SIZES
            .iter()
            .map(|&size| {
                let mut initials = Avatar::new(size);
                initials.set_initials("Ferris Argyle");

                let mut lowercase = Avatar::new(size);
                lowercase.set_initials("ferris");

                let mut icon = Avatar::new(size);
                icon.set_from_icon_name("🦀");

                let mut image = Avatar::new(size);
                image.set_from_uri(AVATAR_URI);

                [initials, lowercase, icon, image]
            })
            .collect();
        Self { rows }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ScrollArea::vertical().show(ui, |ui| {
            for row in &self.rows {
                ui.horizontal(|ui| {
                    ui.label(format!("{:>2}", row[0].size()));
                    for avatar in row {
                        ui.add(avatar);
                    }
                });
                ui.add_space(4.0);
            }
        });
    }
}
