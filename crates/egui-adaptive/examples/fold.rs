use egui_adaptive::{Fold, FoldRevealButton, FoldView, Position};

pub struct App {
    fold: Fold,
    reveal: FoldRevealButton,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_adaptive::init(&cc.egui_ctx);

        let fold = Fold::new(Position::Leading);
        fold.set_side_child(|ui| {
            ui.heading("Mailboxes");
            for name in ["Inbox", "Drafts", "Sent", "Archive"] {
                let _ = ui.selectable_label(name == "Inbox", name);
            }
        });
        fold.set_child(|ui| {
            ui.label("Resize the window below 400 points to fold the side panel.");
        });

        let mut reveal = FoldRevealButton::new();
        reveal.connect_fold(&fold);
        Self { fold, reveal }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add(&self.reveal);
                ui.label(if self.fold.is_folded() {
                    "folded"
                } else {
                    "unfolded"
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(FoldView::new(&self.fold));
        });
    }
}

fn main() -> eframe::Result {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 400.0])
            .with_min_inner_size([240.0, 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "fold_example",
        native_options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}
