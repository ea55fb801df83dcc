#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use adaptive_gallery::app::Gallery;
use adaptive_gallery::consts::PKG_NAME;
use egui::ViewportBuilder;
use std::io::stdout;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

fn init_log() {
    // Library events are logged under the `egui_adaptive` target.
    let env_filter = EnvFilter::new(format!(
        "{}=info,egui_adaptive=debug",
        PKG_NAME.replace('-', "_")
    ));
    let formatting_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(true)
        .with_line_number(true)
        .with_writer(stdout.with_max_level(Level::DEBUG));

    Registry::default()
        .with(env_filter)
        .with(formatting_layer)
        .init();
}

pub fn main() -> eframe::Result<()> {
    init_log();

    let options = eframe::NativeOptions {
        centered: true,
        viewport: ViewportBuilder::default()
            .with_inner_size((900.0, 600.0))
            .with_min_inner_size((280.0, 360.0)),
        ..Default::default()
    };
    Gallery::start(options)
}
