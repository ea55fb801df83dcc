use std::error::Error;

use egui::{Align, Button, Layout, Spinner, Ui};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::bin::{Bin, Child};
use crate::{ErrorLabel, StatusPage};

/// Which page a [`LoadablePage`] is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Loading,
    Error,
    Content,
}

/// Wraps a child that can be loading at times and can fail to load.
pub struct LoadablePage {
    state: PageState,
    /// The page showing the error.
    pub error_page: StatusPage,
    content: Bin,
    retry: Option<Box<dyn FnMut()>>,
    cancel: Option<CancellationToken>,
    spinning: bool,
    stop_visible: bool,
    stop_sensitive: bool,
}

impl Default for LoadablePage {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadablePage {
    pub fn new() -> Self {
        let mut error_page = StatusPage::new();
        error_page.set_icon_name("⚠");
        Self {
            state: PageState::Loading,
            error_page,
            content: Bin::new(),
            retry: None,
            cancel: None,
            spinning: true,
            stop_visible: false,
            stop_sensitive: false,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn stop_visible(&self) -> bool {
        self.stop_visible
    }

    pub fn stop_sensitive(&self) -> bool {
        self.stop_sensitive
    }

    pub fn retry_visible(&self) -> bool {
        self.retry.is_some()
    }

    /// Shows an error in the page.
    pub fn set_error(&mut self, err: &dyn Error) {
        let mut label = ErrorLabel::new(err);
        self.set_error_widget(Box::new(move |ui: &mut Ui| {
            ui.add(&mut label);
        }));
    }

    /// Like [`LoadablePage::set_error`], but shows `widget` instead of an
    /// [`ErrorLabel`].
    pub fn set_error_widget(&mut self, widget: Child) {
        self.ensure_fresh();
        self.content.set_child(None);
        self.error_page.set_description_widget(widget);
        self.state = PageState::Error;
    }

    /// Sets the function called by the retry button of the error page. The
    /// button is only shown when a function is set.
    pub fn set_retry_func(&mut self, retry: Option<Box<dyn FnMut()>>) {
        self.retry = retry;
    }

    /// Calls the retry function, if any.
    pub fn retry(&mut self) {
        if let Some(retry) = self.retry.as_mut() {
            retry();
        }
    }

    /// Shows a loading animation.
    pub fn set_loading(&mut self) {
        self.ensure_fresh();
        self.content.set_child(None);
        self.spinning = true;
        self.stop_visible = false;
        self.state = PageState::Loading;
    }

    /// Shows a loading animation with a stop button. Pressing the button
    /// cancels the returned token and disables the button; the caller still
    /// has to call [`LoadablePage::set_child`] or [`LoadablePage::set_error`].
    pub fn set_cancellable_loading(&mut self) -> CancellationToken {
        self.set_loading();
        self.stop_visible = true;
        self.stop_sensitive = true;

        let token = CancellationToken::new();
        self.cancel = Some(token.clone());
        token
    }

    /// Acts as if the stop button was pressed.
    pub fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            debug!("loadable page load cancelled");
            cancel.cancel();
            self.stop_sensitive = false;
        }
    }

    /// Sets the main child and shows it.
    pub fn set_child(&mut self, child: Child) {
        self.ensure_fresh();
        self.content.set_child(Some(child));
        self.state = PageState::Content;
    }

    fn ensure_fresh(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
        self.spinning = false;
        self.stop_sensitive = false;
    }

    pub fn show(&mut self, ui: &mut Ui) {
        match self.state {
            PageState::Content => self.content.show(ui),
            PageState::Loading => {
                centered(ui, |ui| {
                    if self.spinning {
                        ui.add(Spinner::new().size(16.0));
                    }
                    if self.stop_visible
                        && ui
                            .add_enabled(self.stop_sensitive, Button::new("Stop"))
                            .clicked()
                    {
                        self.stop();
                    }
                });
            }
            PageState::Error => {
                centered(ui, |ui| {
                    self.error_page.show(ui);
                    if self.retry.is_some() && ui.button("Retry").clicked() {
                        self.retry();
                    }
                });
            }
        }
    }
}

fn centered(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    ui.with_layout(Layout::centered_and_justified(egui::Direction::TopDown), |ui| {
        ui.with_layout(Layout::top_down(Align::Center), add_contents);
    });
}
