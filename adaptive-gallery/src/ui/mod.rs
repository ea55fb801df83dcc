mod avatars;
mod details;
mod errors;
mod loading;

pub use details::details_panel;

use avatars::AvatarsPage;
use errors::ErrorsPage;
use loading::LoadingPage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Avatars,
    Errors,
    Loading,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Avatars, Page::Errors, Page::Loading];

    pub fn title(self) -> &'static str {
        match self {
            Page::Avatars => "Avatars",
            Page::Errors => "Errors",
            Page::Loading => "Loading",
        }
    }
}

/// Every gallery page, with the one currently selected.
pub struct Pages {
    pub current: Page,
    avatars: AvatarsPage,
    errors: ErrorsPage,
    loading: LoadingPage,
}

impl Pages {
    pub fn new(ctx: &egui::Context) -> Self {
        Self {
            current: Page::default(),
            avatars: AvatarsPage::new(),
            errors: ErrorsPage::new(),
            loading: LoadingPage::new(ctx.clone()),
        }
    }

    /// Applies what background workers reported since the last frame.
    pub fn recv_event(&mut self) {
        self.loading.recv_event();
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.current.title());
        ui.separator();
        match self.current {
            Page::Avatars => self.avatars.show(ui),
            Page::Errors => self.errors.show(ui),
            Page::Loading => self.loading.show(ui),
        }
    }
}
