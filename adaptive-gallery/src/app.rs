use crate::consts::REPOSITORY_URL;
use crate::ui::{details_panel, Page, Pages};
use eframe::{egui, NativeOptions};
use egui_adaptive::{
    AdaptiveError, Fold, FoldGroup, FoldRevealButton, FoldSettings, FoldView, Position,
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

/// Below this width the navigation and details panels become drawers.
const FOLD_THRESHOLD: i32 = 640;
const SIDE_WIDTH: i32 = 180;

pub struct Gallery {
    navigation: Fold,
    _group: FoldGroup,
    navigation_button: FoldRevealButton,
    details_button: FoldRevealButton,
    pages: Rc<RefCell<Pages>>,
}

impl Gallery {
    fn new(ctx: &egui::Context) -> Result<Self, AdaptiveError> {
        let pages = Rc::new(RefCell::new(Pages::new(ctx)));

        let navigation = Fold::with_settings(FoldSettings {
            position: Position::Leading,
            fold_threshold: FOLD_THRESHOLD,
            side_width: SIDE_WIDTH,
            ..Default::default()
        })?;
        let details = Fold::with_settings(FoldSettings {
            position: Position::Trailing,
            fold_threshold: FOLD_THRESHOLD,
            side_width: SIDE_WIDTH,
            ..Default::default()
        })?;
        let group = FoldGroup::bind(&[navigation.clone(), details.clone()]);

        let nav_pages = pages.clone();
        let nav_fold = navigation.downgrade();
        navigation.set_side_child(move |ui| {
            ui.heading("Gallery");
            ui.separator();
            let mut pages = nav_pages.borrow_mut();
            for page in Page::ALL {
                if ui
                    .selectable_label(pages.current == page, page.title())
                    .clicked()
                {
                    pages.current = page;
                    // Picking a page closes the drawer.
                    if let Some(fold) = nav_fold.upgrade() {
                        fold.set_reveal_side(false);
                    }
                }
            }
            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.hyperlink_to("Source", REPOSITORY_URL);
            });
        });

        let inner = details.clone();
        navigation.set_child(move |ui| {
            ui.add(FoldView::new(&inner).id_salt("details"));
        });

        let content_pages = pages.clone();
        details.set_child(move |ui| content_pages.borrow_mut().show(ui));

        let folds = [navigation.downgrade(), details.downgrade()];
        details.set_side_child(move |ui| {
            let folds: Vec<_> = ["Navigation", "Details"]
                .into_iter()
                .zip(folds.iter().filter_map(|fold| fold.upgrade()))
                .collect();
            details_panel(ui, &folds);
        });

        let mut navigation_button = FoldRevealButton::new();
        navigation_button.connect_fold(&navigation);
        let mut details_button = FoldRevealButton::new();
        details_button.set_icon_name("ℹ");
        details_button.connect_fold(&details);

        Ok(Self {
            navigation,
            _group: group,
            navigation_button,
            details_button,
            pages,
        })
    }

    pub fn start(options: NativeOptions) -> eframe::Result<()> {
        eframe::run_native(
            "Adaptive Gallery",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                egui_adaptive::init(&cc.egui_ctx);
                info!("gallery started");
                Ok(Box::new(Gallery::new(&cc.egui_ctx)?))
            }),
        )
    }
}

impl eframe::App for Gallery {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pages.borrow_mut().recv_event();

        egui::TopBottomPanel::top("main_top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add(&self.navigation_button);
                ui.label(self.pages.borrow().current.title());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(&self.details_button);
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                ui.add(FoldView::new(&self.navigation).id_salt("navigation"));
            });
    }
}
