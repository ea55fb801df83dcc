use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context};
use egui_adaptive::{CancellationToken, LoadablePage};
use tracing::{info, warn};

const LOAD_STEPS: u32 = 20;
const LOAD_STEP: Duration = Duration::from_millis(100);

enum LoadEvent {
    Loaded(Vec<String>),
    Failed(anyhow::Error),
    Cancelled,
}

/// A [`LoadablePage`] fed by a worker thread. Every other load fails so the
/// error page and its retry button can be seen.
pub struct LoadingPage {
    page: LoadablePage,
    ctx: egui::Context,
    sender: Sender<(u64, LoadEvent)>,
    receiver: Receiver<(u64, LoadEvent)>,
    attempt: u64,
    reload: Rc<Cell<bool>>,
}

impl LoadingPage {
    pub fn new(ctx: egui::Context) -> Self {
        let (sender, receiver) = mpsc::channel();
        let reload = Rc::new(Cell::new(false));

        let mut page = LoadablePage::new();
        page.error_page.set_title("Could not load the catalog");
        let retry = reload.clone();
        page.set_retry_func(Some(Box::new(move || retry.set(true))));

        let mut this = Self {
            page,
            ctx,
            sender,
            receiver,
            attempt: 0,
            reload,
        };
        this.start();
        this
    }

    fn start(&mut self) {
        self.attempt += 1;
        let attempt = self.attempt;
        let token = self.page.set_cancellable_loading();
        let sender = self.sender.clone();
        let ctx = self.ctx.clone();
        info!(attempt, "loading catalog");

        thread::spawn(move || {
            let event = match load_catalog(attempt, &token, LOAD_STEP) {
                Ok(Some(items)) => LoadEvent::Loaded(items),
                Ok(None) => LoadEvent::Cancelled,
                Err(err) => LoadEvent::Failed(err),
            };
            // The receiver is gone once the app exits.
            if sender.send((attempt, event)).is_ok() {
                ctx.request_repaint();
            }
        });
    }

    pub fn recv_event(&mut self) {
        if self.reload.replace(false) {
            self.start();
        }

        while let Ok((attempt, event)) = self.receiver.try_recv() {
            if attempt != self.attempt {
                continue;
            }
            match event {
                LoadEvent::Loaded(items) => {
                    info!(attempt, items = items.len(), "catalog loaded");
                    let reload = self.reload.clone();
                    self.page.set_child(Box::new(move |ui| {
                        for item in &items {
                            ui.label(item);
                        }
                        ui.add_space(8.0);
                        if ui.button("Reload").clicked() {
                            reload.set(true);
                            ui.ctx().request_repaint();
                        }
                    }));
                }
                LoadEvent::Failed(err) => {
                    warn!(attempt, "catalog failed to load: {err:#}");
                    self.page.set_error(&*err);
                }
                LoadEvent::Cancelled => {
                    info!(attempt, "catalog load cancelled");
                    self.page.set_error(&*anyhow!("loading was stopped"));
                }
            }
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        self.page.show(ui);
        if self.reload.get() {
            ui.ctx().request_repaint();
        }
    }
}

/// Pretends to fetch a catalog, one `step` at a time. Returns `None` once
/// `token` is cancelled.
fn load_catalog(
    attempt: u64,
    token: &CancellationToken,
    step: Duration,
) -> anyhow::Result<Option<Vec<String>>> {
    for _ in 0..LOAD_STEPS {
        if token.is_cancelled() {
            return Ok(None);
        }
        thread::sleep(step);
    }

    if attempt % 2 == 1 {
        return Err(anyhow!("connection reset by peer"))
            .context("fetching page 2")
            .context("failed to load catalog");
    }
    Ok(Some(
        (1..=8).map(|i| format!("Item {i} (attempt {attempt})")).collect(),
    ))
}
